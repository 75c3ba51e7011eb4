mod common;
use basic::lang::{lex, ErrorCode, Lexer};
use basic::mach::{Runtime, State, Transcript, Val};
use common::*;

#[test]
fn test_trace_flag() {
    let mut r = runtime("10 PRINT \"OK\"");
    assert!(!r.trace());
    r.set_trace(true);
    assert!(r.trace());
    r.set_trace(false);
    assert!(!r.trace());
}

#[test]
fn test_trace_output() {
    let mut r = runtime("10 a = 1\n20 GOSUB 40\n30 END\n40 PRINT a\n50 RETURN\nb = 2");
    r.set_trace(true);
    let mut console = Transcript::new();
    r.run(&mut console).unwrap();
    assert_eq!(console.output(), "[10][20][40] 1 \n[50][30]");
}

#[test]
fn test_variables() {
    let tests = [
        ("number", Val::Number(33.0)),
        ("string", Val::from("Steve")),
    ];
    for (name, val) in tests.iter() {
        let mut r = runtime("10 PRINT \"OK\"");
        assert_eq!(r.get_variable(name), None);
        r.set_variable(name, val.clone()).unwrap();
        assert_eq!(r.get_variable(name).as_ref(), Some(val));
    }
}

#[test]
fn test_host_variables_survive_run() {
    let mut r = runtime("10 PRINT a * 2");
    r.set_variable("a", Val::Number(21.0)).unwrap();
    let mut console = Transcript::new();
    r.run(&mut console).unwrap();
    assert_eq!(console.output(), " 42 \n");
}

#[test]
fn test_state() {
    let mut r = runtime("10 END");
    assert_eq!(r.state(), State::Running);
    r.run(&mut Transcript::new()).unwrap();
    assert_eq!(r.state(), State::HaltedOk);
    let mut r = runtime("10 NEXT");
    assert!(r.run(&mut Transcript::new()).is_err());
    assert_eq!(r.state(), State::HaltedError);
}

#[test]
fn test_empty_program() {
    let mut console = Transcript::new();
    runtime("").run(&mut console).unwrap();
    runtime("\n\n").run(&mut console).unwrap();
    assert_eq!(console.output(), "");
}

#[test]
fn test_any_token_source() {
    let mut r = Runtime::new(Lexer::new("10 x = 3 + 3")).unwrap();
    r.run(&mut Transcript::new()).unwrap();
    assert_eq!(r.get_variable("x"), Some(Val::Number(6.0)));
    let mut r = Runtime::new(lex("20 y = 1")).unwrap();
    r.run(&mut Transcript::new()).unwrap();
    assert_eq!(r.get_variable("y"), Some(Val::Number(1.0)));
}

#[test]
fn test_error_stops_run() {
    let mut console = Transcript::new();
    let mut r = runtime("10 PRINT 1\n20 PRINT 1 / 0\n30 PRINT 3");
    let e = r.run(&mut console).unwrap_err();
    assert_eq!(e.code(), ErrorCode::DivisionByZero);
    assert_eq!(console.output(), " 1 \n");
}
