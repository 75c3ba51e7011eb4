use super::token::*;
use super::{LineNumber, MaxValue};

/// Collect every token of a program.
pub fn lex(s: &str) -> Vec<Token> {
    Lexer::new(s).collect()
}

fn is_basic_whitespace(c: char) -> bool {
    c == ' ' || c == '\t' || c == '\r'
}

fn is_basic_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn is_basic_alphabetic(c: char) -> bool {
    c.is_ascii_alphabetic()
}

type Chars<'a> = std::iter::Peekable<std::str::Chars<'a>>;

trait Tokenizers<'a> {
    fn chars(&mut self) -> &mut Chars<'a>;

    fn digits(&mut self, s: &mut String) {
        while let Some(pk) = self.chars().peek() {
            if !is_basic_digit(*pk) {
                break;
            }
            s.push(*pk);
            self.chars().next();
        }
    }

    fn line_number(&mut self) -> Option<Token> {
        let mut s = String::new();
        self.digits(&mut s);
        match s.parse::<u16>() {
            Ok(n) if n <= LineNumber::max_value() => Some(Token::LineNumber(n)),
            _ => Some(Token::Unknown(s)),
        }
    }

    fn number(&mut self) -> Option<Token> {
        let mut s = String::new();
        self.digits(&mut s);
        if let Some('.') = self.chars().peek() {
            s.push('.');
            self.chars().next();
            self.digits(&mut s);
        }
        if let Some('e') | Some('E') = self.chars().peek() {
            let mut ahead = self.chars().clone();
            ahead.next();
            let mut exp = String::from("E");
            if let Some(sign) = ahead.next_if(|c| *c == '+' || *c == '-') {
                exp.push(sign);
            }
            if ahead.peek().map_or(false, |c| is_basic_digit(*c)) {
                *self.chars() = ahead;
                s.push_str(&exp);
                self.digits(&mut s);
            }
        }
        Some(Token::Literal(Literal::Number(s)))
    }

    fn string(&mut self) -> Option<Token> {
        let mut s = String::new();
        self.chars().next();
        while let Some(ch) = self.chars().next_if(|c| *c != '\n') {
            if ch == '"' {
                break;
            }
            s.push(ch);
        }
        Some(Token::Literal(Literal::String(s)))
    }

    fn alphabetic(&mut self) -> Option<Token> {
        let mut s = String::new();
        while let Some(ch) = self
            .chars()
            .next_if(|c| is_basic_alphabetic(*c) || is_basic_digit(*c))
        {
            s.push(ch);
        }
        if let Some(ch) = self.chars().next_if(|c| *c == '$') {
            s.push(ch);
            return Some(Token::Ident(s));
        }
        match Token::from_string(&s) {
            Some(token) => Some(token),
            None => Some(Token::Ident(s)),
        }
    }

    fn minutia(&mut self) -> Option<Token> {
        let ch = self.chars().next()?;
        let mut s = ch.to_string();
        if ch == '<' || ch == '>' {
            if let Some(pk) = self.chars().next_if(|c| *c == '=' || (ch == '<' && *c == '>')) {
                s.push(pk);
            }
        }
        match Token::from_string(&s) {
            Some(t) => Some(t),
            None => Some(Token::Unknown(s)),
        }
    }

    fn remark(&mut self) -> Option<Token> {
        let mut s = String::new();
        while let Some(ch) = self.chars().next_if(|c| *c != '\n') {
            s.push(ch);
        }
        Some(Token::Unknown(s.trim().to_string()))
    }
}

/// A lazy token source over program text.
pub struct Lexer<'a> {
    chars: Chars<'a>,
    line_start: bool,
    remark: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(s: &'a str) -> Lexer<'a> {
        Lexer {
            chars: s.chars().peekable(),
            line_start: true,
            remark: false,
        }
    }
}

impl<'a> Tokenizers<'a> for Lexer<'a> {
    fn chars(&mut self) -> &mut Chars<'a> {
        &mut self.chars
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        while self.chars.next_if(|c| is_basic_whitespace(*c)).is_some() {}
        let pk = *self.chars.peek()?;
        if pk == '\n' {
            self.chars.next();
            self.line_start = true;
            self.remark = false;
            return Some(Token::Newline);
        }
        if self.remark {
            self.remark = false;
            return self.remark();
        }
        if std::mem::replace(&mut self.line_start, false) && is_basic_digit(pk) {
            return self.line_number();
        }
        let token = if is_basic_digit(pk) || pk == '.' {
            self.number()
        } else if is_basic_alphabetic(pk) {
            self.alphabetic()
        } else if pk == '"' {
            self.string()
        } else {
            self.minutia()
        };
        if let Some(Token::Word(Word::Rem)) = token {
            self.remark = true;
        }
        token
    }
}
