use super::{Operation, Val, Var};
use crate::error;
use crate::lang::token::{Literal, Operator, Token};
use crate::lang::{Cursor, Error};

type Result<T> = std::result::Result<T, Error>;

type BinaryOp = fn(Val, Val) -> Result<Val>;

const MAX_DEPTH: usize = 100;

/// ## Expression evaluator
///
/// Recursive descent straight over the tokens, one function per
/// precedence level, lowest first:
///
/// | level          | operators                    |
/// |----------------|------------------------------|
/// | logical        | `AND` `OR`                   |
/// | comparison     | `=` `<>` `<` `<=` `>` `>=`   |
/// | additive       | `+` `-`                      |
/// | multiplicative | `*` `/` `%` `^`              |
/// | unary          | `-` `+`                      |
///
/// All binary levels associate to the left. Nesting of parentheses
/// and unary signs is capped at `MAX_DEPTH`.

pub struct Evaluator<'a> {
    vars: &'a Var,
    depth: usize,
}

impl<'a> Evaluator<'a> {
    pub fn new(vars: &'a Var) -> Evaluator<'a> {
        Evaluator { vars, depth: 0 }
    }

    pub fn expression(&mut self, cursor: &mut Cursor) -> Result<Val> {
        self.logical(cursor)
    }

    fn binary(
        &mut self,
        cursor: &mut Cursor,
        operand: fn(&mut Self, &mut Cursor) -> Result<Val>,
        operator: fn(&Operator) -> Option<BinaryOp>,
    ) -> Result<Val> {
        let mut lhs = operand(self, cursor)?;
        while let Some(Token::Operator(op)) = cursor.peek() {
            let op = match operator(op) {
                Some(op) => op,
                None => break,
            };
            cursor.next();
            let rhs = operand(self, cursor)?;
            lhs = op(lhs, rhs)?;
        }
        Ok(lhs)
    }

    fn logical(&mut self, cursor: &mut Cursor) -> Result<Val> {
        self.binary(cursor, Self::comparison, logical_op)
    }

    fn comparison(&mut self, cursor: &mut Cursor) -> Result<Val> {
        self.binary(cursor, Self::additive, comparison_op)
    }

    fn additive(&mut self, cursor: &mut Cursor) -> Result<Val> {
        self.binary(cursor, Self::multiplicative, additive_op)
    }

    fn multiplicative(&mut self, cursor: &mut Cursor) -> Result<Val> {
        self.binary(cursor, Self::unary, multiplicative_op)
    }

    fn unary(&mut self, cursor: &mut Cursor) -> Result<Val> {
        if self.depth >= MAX_DEPTH {
            return Err(error!(FormulaTooComplex));
        }
        self.depth += 1;
        let val = self.signed(cursor);
        self.depth -= 1;
        val
    }

    fn signed(&mut self, cursor: &mut Cursor) -> Result<Val> {
        match cursor.peek() {
            Some(Token::Operator(Operator::Minus)) => {
                cursor.next();
                Operation::negate(self.unary(cursor)?)
            }
            Some(Token::Operator(Operator::Plus)) => {
                cursor.next();
                Operation::identity(self.unary(cursor)?)
            }
            _ => self.primary(cursor),
        }
    }

    fn primary(&mut self, cursor: &mut Cursor) -> Result<Val> {
        match cursor.expect_next()? {
            Token::Literal(lit) => literal(lit),
            Token::Ident(name) => match self.vars.fetch(name) {
                Some(val) => Ok(val.clone()),
                None => Err(error!(UndefinedVariable)),
            },
            Token::LParen => {
                let val = self.expression(cursor)?;
                match cursor.next() {
                    Some(Token::RParen) => Ok(val),
                    _ => Err(error!(UnclosedBracket)),
                }
            }
            _ => Err(error!(SyntaxError; "EXPECTED EXPRESSION")),
        }
    }
}

fn logical_op(op: &Operator) -> Option<BinaryOp> {
    match op {
        Operator::And => Some(Operation::and),
        Operator::Or => Some(Operation::or),
        _ => None,
    }
}

fn comparison_op(op: &Operator) -> Option<BinaryOp> {
    match op {
        Operator::Equal => Some(Operation::equal),
        Operator::NotEqual => Some(Operation::not_equal),
        Operator::Less => Some(Operation::less),
        Operator::LessEqual => Some(Operation::less_equal),
        Operator::Greater => Some(Operation::greater),
        Operator::GreaterEqual => Some(Operation::greater_equal),
        _ => None,
    }
}

fn additive_op(op: &Operator) -> Option<BinaryOp> {
    match op {
        Operator::Plus => Some(Operation::sum),
        Operator::Minus => Some(Operation::subtract),
        _ => None,
    }
}

fn multiplicative_op(op: &Operator) -> Option<BinaryOp> {
    match op {
        Operator::Multiply => Some(Operation::multiply),
        Operator::Divide => Some(Operation::divide),
        Operator::Modulus => Some(Operation::modulus),
        Operator::Caret => Some(Operation::power),
        _ => None,
    }
}

/// Converts a `DATA` item or expression literal to a value.
pub fn literal(lit: &Literal) -> Result<Val> {
    match lit {
        Literal::Number(s) => match s.parse::<f64>() {
            Ok(n) => Ok(Val::Number(n)),
            Err(_) => Err(error!(SyntaxError; "INVALID NUMBER")),
        },
        Literal::String(s) => Ok(Val::String(s.as_str().into())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::{lex, ErrorCode};

    /// Lexed behind a `?` so a leading digit is not taken as a line number.
    fn eval_with(vars: &Var, s: &str) -> Result<Val> {
        let tokens = lex(&format!("?{}", s));
        let mut cursor = Cursor::new(&tokens[1..]);
        let val = Evaluator::new(vars).expression(&mut cursor)?;
        cursor.expect_end()?;
        Ok(val)
    }

    fn eval(s: &str) -> Result<Val> {
        eval_with(&Var::new(), s)
    }

    fn num(s: &str) -> f64 {
        match eval(s) {
            Ok(Val::Number(n)) => n,
            other => panic!("{} evaluated to {:?}", s, other),
        }
    }

    #[test]
    fn test_arithmetic() {
        assert_eq!(num("3 + 3"), 6.0);
        assert_eq!(num("3 - 1"), 2.0);
        assert_eq!(num("6 / 2"), 3.0);
        assert_eq!(num("6 * 5"), 30.0);
        assert_eq!(num("2 ^ 3"), 8.0);
        assert_eq!(num("4 % 2"), 0.0);
    }

    #[test]
    fn test_precedence() {
        assert_eq!(num("1+2*3"), 7.0);
        assert_eq!(num("(1+2)*3"), 9.0);
        assert_eq!(num("1.5/2*3"), 2.25);
        assert_eq!(num("2^3*2"), 16.0);
        assert_eq!(num("2*3^2"), 36.0);
        assert_eq!(num("10-4-3"), 3.0);
        assert_eq!(num("-2*-3"), 6.0);
        assert_eq!(num("1+1=2"), -1.0);
        assert_eq!(num("1<2 AND 2<1"), 0.0);
        assert_eq!(num("1<2 OR 2<1"), -1.0);
    }

    #[test]
    fn test_strings() {
        assert_eq!(eval("\"ab\" + \"cd\"").unwrap(), Val::from("abcd"));
        assert_eq!(num("\"a\" < \"b\""), -1.0);
    }

    #[test]
    fn test_variables() {
        let mut vars = Var::new();
        vars.store("a", Val::Number(3.0)).unwrap();
        assert_eq!(eval_with(&vars, "a * a").unwrap(), Val::Number(9.0));
        let e = eval_with(&vars, "A").unwrap_err();
        assert_eq!(e.code(), ErrorCode::UndefinedVariable);
    }

    #[test]
    fn test_type_errors_are_distinct() {
        assert_eq!(eval("3 + \"a\"").unwrap_err().code(), ErrorCode::TypeMismatch);
        assert_eq!(eval("\"a\" - \"b\"").unwrap_err().code(), ErrorCode::StringOperator);
        assert_eq!(eval("\"a\" * 2").unwrap_err().code(), ErrorCode::NumericOperator);
        assert_eq!(eval("\"a\" ^ \"b\"").unwrap_err().code(), ErrorCode::NumericOperator);
        assert_eq!(eval("-\"a\"").unwrap_err().code(), ErrorCode::NumericOperator);
        assert_eq!(eval("1 < \"a\"").unwrap_err().code(), ErrorCode::TypeMismatch);
    }

    #[test]
    fn test_multiplicative_check_runs_first() {
        let mut vars = Var::new();
        vars.store("a", Val::from("steve")).unwrap();
        let e = eval_with(&vars, "( a * 2 ) + ( a * 33 )").unwrap_err();
        assert_eq!(e.code(), ErrorCode::NumericOperator);
    }

    #[test]
    fn test_truncated_expressions() {
        for s in &["3 *", "( 3 * 3 ) +", "(", "3 * 3 / 3 +", "-", ""] {
            let e = eval(s).unwrap_err();
            assert_eq!(e.code(), ErrorCode::EndOfProgram, "{}", s);
        }
    }

    #[test]
    fn test_unclosed_bracket() {
        assert_eq!(eval("( 3 + 3 * 33").unwrap_err().code(), ErrorCode::UnclosedBracket);
        assert_eq!(eval("( 3").unwrap_err().code(), ErrorCode::UnclosedBracket);
        assert_eq!(eval("( 3 4 )").unwrap_err().code(), ErrorCode::UnclosedBracket);
    }

    #[test]
    fn test_nesting_limit() {
        let nested = |n: usize| format!("{}1{}", "(".repeat(n), ")".repeat(n));
        assert_eq!(num(&nested(50)), 1.0);
        assert_eq!(num(&format!("{}1", "-".repeat(50))), 1.0);
        let e = eval(&nested(2000)).unwrap_err();
        assert_eq!(e.code(), ErrorCode::FormulaTooComplex);
        let e = eval(&format!("{}1", "-".repeat(2000))).unwrap_err();
        assert_eq!(e.code(), ErrorCode::FormulaTooComplex);
    }

    #[test]
    fn test_not_an_expression() {
        let e = eval(")").unwrap_err();
        assert_eq!(e.code(), ErrorCode::SyntaxError);
    }
}
