/*!
# Rust Language Module

This Rust module provides lexical analysis of the BASIC language
and the token cursor the evaluator reads statements through.

*/

#[macro_use]
mod error;
mod cursor;
mod lex;
pub mod token;

pub use cursor::Cursor;
pub use error::Error;
pub use error::ErrorCode;
pub use lex::lex;
pub use lex::Lexer;

/// `None` for a line typed without a number.
pub type LineNumber = Option<u16>;

pub trait MaxValue<T> {
    fn max_value() -> T;
}

impl MaxValue<u16> for LineNumber {
    fn max_value() -> u16 {
        65529
    }
}
