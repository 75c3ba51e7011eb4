/*!
## Rust Machine Module

This Rust module loads and runs BASIC programs: values, variables,
the expression evaluator and the statement executor.

*/

mod console;
mod data;
mod eval;
mod operation;
mod program;
mod runtime;
mod stack;
mod val;
mod var;

pub use console::Console;
pub use console::Transcript;
pub use data::Data;
pub use eval::Evaluator;
pub use operation::Operation;
pub use program::Line;
pub use program::Program;
pub use program::Statement;
pub use runtime::Runtime;
pub use runtime::State;
pub use stack::Stack;
pub use val::Val;
pub use var::Var;
