use super::eval::literal;
use super::{Data, Operation};
use crate::error;
use crate::lang::token::{Literal, Operator, Token, Word};
use crate::lang::{Cursor, Error, LineNumber};
use std::collections::HashMap;
use std::ops::Range;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// ## Statement kinds
///
/// `Let` also covers the implicit `v = e` form.

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Statement {
    Data,
    Empty,
    End,
    For,
    Gosub,
    Goto,
    If,
    Input,
    Let,
    Next,
    Print,
    Read,
    Rem,
    Return,
}

impl Statement {
    /// Consumes the keyword that starts a statement.
    /// An identifier starts an implicit `LET` and is left in place.
    pub fn classify(cursor: &mut Cursor) -> Result<Statement> {
        if let Some(Token::Ident(_)) = cursor.peek() {
            return Ok(Statement::Let);
        }
        match cursor.expect_next()? {
            Token::Word(word) => match word {
                Word::Data => Ok(Statement::Data),
                Word::End => Ok(Statement::End),
                Word::For => Ok(Statement::For),
                Word::Gosub => Ok(Statement::Gosub),
                Word::Goto => Ok(Statement::Goto),
                Word::If => Ok(Statement::If),
                Word::Input => Ok(Statement::Input),
                Word::Let => Ok(Statement::Let),
                Word::Next => Ok(Statement::Next),
                Word::Print => Ok(Statement::Print),
                Word::Read => Ok(Statement::Read),
                Word::Rem => Ok(Statement::Rem),
                Word::Return => Ok(Statement::Return),
                Word::Else | Word::Step | Word::Then | Word::To => {
                    Err(error!(SyntaxError; "EXPECTED STATEMENT"))
                }
            },
            _ => Err(error!(SyntaxError; "EXPECTED STATEMENT")),
        }
    }
}

/// One entry of the line table.
#[derive(Debug, Clone)]
pub struct Line {
    number: LineNumber,
    statement: Option<Statement>,
    operands: Range<usize>,
}

impl Line {
    pub fn number(&self) -> LineNumber {
        self.number
    }

    /// `None` when the line does not start with a statement;
    /// running it reports why.
    pub fn statement(&self) -> Option<Statement> {
        self.statement
    }

    /// Token range after the statement keyword.
    pub fn operands(&self) -> Range<usize> {
        self.operands.clone()
    }
}

/// ## Loaded program
///
/// Built in one pass over the tokens: the line table, the
/// line number index and the `DATA` pool.

#[derive(Debug)]
pub struct Program {
    tokens: Rc<[Token]>,
    lines: Vec<Line>,
    index: HashMap<u16, usize>,
    data: Data,
}

impl Program {
    pub fn load<T: IntoIterator<Item = Token>>(tokens: T) -> Result<Program> {
        let tokens: Rc<[Token]> = tokens.into_iter().collect();
        let mut program = Program {
            tokens: tokens.clone(),
            lines: vec![],
            index: HashMap::new(),
            data: Data::new(),
        };
        let mut start = 0;
        while start < tokens.len() {
            let end = tokens[start..]
                .iter()
                .position(|t| *t == Token::Newline)
                .map_or(tokens.len(), |len| start + len);
            program.load_line(&tokens, start..end)?;
            start = end + 1;
        }
        Ok(program)
    }

    fn load_line(&mut self, tokens: &[Token], mut range: Range<usize>) -> Result<()> {
        let number = match tokens.get(range.start) {
            Some(Token::LineNumber(n)) => {
                range.start += 1;
                Some(*n)
            }
            _ => None,
        };
        if range.is_empty() && number.is_none() {
            return Ok(());
        }
        if let Some(pos) = tokens[range.clone()]
            .iter()
            .skip(1)
            .position(|t| t.is_word(Word::Rem))
        {
            range.end = range.start + 1 + pos;
        }
        let mut cursor = Cursor::new(&tokens[range.clone()]);
        let statement = if cursor.is_empty() {
            Some(Statement::Empty)
        } else {
            Statement::classify(&mut cursor).ok()
        };
        let operands = match statement {
            Some(_) => range.start + cursor.position()..range.end,
            None => range,
        };
        if statement == Some(Statement::Data) {
            self.load_data(&tokens[operands.clone()])
                .map_err(|e| e.in_line_number(number))?;
        }
        if let Some(n) = number {
            self.index.insert(n, self.lines.len());
        }
        self.lines.push(Line {
            number,
            statement,
            operands,
        });
        Ok(())
    }

    fn load_data(&mut self, tokens: &[Token]) -> Result<()> {
        let mut cursor = Cursor::new(tokens);
        while let Some(token) = cursor.next() {
            match token {
                Token::Comma => {}
                Token::Literal(lit) => self.data.push(literal(lit)?),
                Token::Operator(Operator::Minus) => match cursor.next() {
                    Some(Token::Literal(lit @ Literal::Number(_))) => {
                        self.data.push(Operation::negate(literal(lit)?)?)
                    }
                    _ => return Err(error!(SyntaxError; "EXPECTED LITERAL")),
                },
                _ => return Err(error!(SyntaxError; "EXPECTED LITERAL")),
            }
        }
        Ok(())
    }

    pub fn tokens(&self) -> Rc<[Token]> {
        self.tokens.clone()
    }

    pub fn line(&self, pc: usize) -> Option<&Line> {
        self.lines.get(pc)
    }

    /// Table index of a line number. A number declared twice
    /// resolves to the later line.
    pub fn lookup(&self, number: u16) -> Option<usize> {
        self.index.get(&number).copied()
    }

    pub fn data_mut(&mut self) -> &mut Data {
        &mut self.data
    }
}
