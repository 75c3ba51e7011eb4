//! # BASIC
//!
//! Runs a line-numbered BASIC program.
//!

fn main() {
    basic::term::main();
}
