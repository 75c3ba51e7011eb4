#![allow(dead_code)]
use basic::lang::{Error, ErrorCode};
use basic::mach::{Runtime, Transcript};

pub fn runtime(program: &str) -> Runtime {
    match program.parse() {
        Ok(runtime) => runtime,
        Err(error) => panic!("{} failed to load: {}", program, error),
    }
}

/// Runs `program` and returns everything it printed.
pub fn exec(program: &str) -> String {
    exec_input(program, &[])
}

pub fn exec_input(program: &str, input: &[&str]) -> String {
    let mut r = runtime(program);
    let mut console = Transcript::with_input(input.iter().copied());
    if let Err(error) = r.run(&mut console) {
        panic!("{} failed: {}\n{}", program, error, console.output());
    }
    console.take_output()
}

/// Runs `program` expecting it to halt with an error.
pub fn exec_err(program: &str) -> Error {
    let mut r = runtime(program);
    let mut console = Transcript::new();
    match r.run(&mut console) {
        Ok(()) => panic!("{} ran without error:\n{}", program, console.output()),
        Err(error) => error,
    }
}

pub fn code(program: &str) -> ErrorCode {
    exec_err(program).code()
}
