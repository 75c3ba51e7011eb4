use super::Val;
use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Literal pool for `READ`
///
/// Gathered from every `DATA` statement in source order.
/// The read position only moves forward until `restart`.

#[derive(Debug, Default)]
pub struct Data {
    pool: Vec<Val>,
    pos: usize,
}

impl Data {
    pub fn new() -> Data {
        Data::default()
    }

    pub fn push(&mut self, val: Val) {
        self.pool.push(val);
    }

    pub fn restart(&mut self) {
        self.pos = 0;
    }

    pub fn read(&mut self) -> Result<Val> {
        match self.pool.get(self.pos) {
            Some(val) => {
                self.pos += 1;
                Ok(val.clone())
            }
            None => Err(error!(OutOfData)),
        }
    }
}
