//! # BASIC
//!
//! An evaluator for line-numbered BASIC programs.
//!
//! Programs are loaded in one pass and then run on a program counter.
//! Output and input go through a [`Console`](mach::Console) supplied by
//! the host.
//! ```
//! use basic::mach::{Runtime, Transcript, Val};
//!
//! let mut runtime: Runtime = "10 LET A = 3 + 3\n20 PRINT A".parse().unwrap();
//! let mut console = Transcript::new();
//! runtime.run(&mut console).unwrap();
//! assert_eq!(console.output(), " 6 \n");
//! assert_eq!(runtime.get_variable("A"), Some(Val::Number(6.0)));
//! ```

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/statements.rs"]
#[allow(non_snake_case)]
pub mod __Statements;

pub mod lang;
pub mod mach;
pub mod term;
