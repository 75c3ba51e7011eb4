use super::token::{Token, Word};
use super::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Read position within the tokens of one statement
///
/// Every consumption goes through `peek` or `next`, both of which
/// report exhaustion instead of indexing past the end.

#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(tokens: &'a [Token]) -> Cursor<'a> {
        Cursor { tokens, pos: 0 }
    }

    pub fn is_empty(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Tokens consumed so far.
    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    pub fn next(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.pos)?;
        self.pos += 1;
        Some(token)
    }

    /// Like `next` but running out of tokens is an error.
    pub fn expect_next(&mut self) -> Result<&'a Token> {
        match self.next() {
            Some(token) => Ok(token),
            None => Err(error!(EndOfProgram)),
        }
    }

    /// Consumes `token` or fails; `message` describes what was missing.
    pub fn expect(&mut self, token: &Token, message: &'static str) -> Result<()> {
        if self.expect_next()? == token {
            Ok(())
        } else {
            Err(error!(SyntaxError; message))
        }
    }

    /// Consumes the next token if it is `word`.
    pub fn next_if_word(&mut self, word: Word) -> bool {
        match self.peek() {
            Some(t) if t.is_word(word) => {
                self.pos += 1;
                true
            }
            _ => false,
        }
    }

    /// Statements must consume everything they were given.
    pub fn expect_end(&self) -> Result<()> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(error!(SyntaxError; "UNEXPECTED TOKEN"))
        }
    }

    /// Splits the remaining tokens at the `ELSE` belonging to this level.
    /// An `IF` nested inside claims the first `ELSE` it meets.
    pub fn split_else(&mut self) -> (Cursor<'a>, Option<Cursor<'a>>) {
        let rest = &self.tokens[self.pos.min(self.tokens.len())..];
        self.pos = self.tokens.len();
        let mut depth = 0;
        for (index, token) in rest.iter().enumerate() {
            match token {
                Token::Word(Word::If) => depth += 1,
                Token::Word(Word::Else) if depth == 0 => {
                    return (
                        Cursor::new(&rest[..index]),
                        Some(Cursor::new(&rest[index + 1..])),
                    );
                }
                Token::Word(Word::Else) => depth -= 1,
                _ => {}
            }
        }
        (Cursor::new(rest), None)
    }
}

#[cfg(test)]
mod tests {
    use super::super::lex;
    use super::*;

    #[test]
    fn test_expect_next_at_end() {
        let tokens = lex("a");
        let mut c = Cursor::new(&tokens);
        assert!(c.expect_next().is_ok());
        let e = c.expect_next().unwrap_err();
        assert_eq!(e.code(), crate::lang::ErrorCode::EndOfProgram);
        assert!(c.next().is_none());
    }

    #[test]
    fn test_split_else_nested() {
        let tokens = lex("IF b THEN x=1 ELSE x=2 ELSE x=3");
        let mut c = Cursor::new(&tokens);
        let (then, otherwise) = c.split_else();
        assert_eq!(then.tokens.len(), 10);
        assert_eq!(otherwise.unwrap().tokens.len(), 3);
        assert!(c.is_empty());
    }

    #[test]
    fn test_split_else_absent() {
        let tokens = lex("x=1");
        let mut c = Cursor::new(&tokens);
        let (then, otherwise) = c.split_else();
        assert_eq!(then.tokens.len(), 3);
        assert!(otherwise.is_none());
    }
}
