mod common;
use basic::lang::ErrorCode;
use basic::mach::{Transcript, Val};
use common::*;

#[test]
fn test_compare() {
    let tests = [
        ("10 IF 1 < 10 THEN LET a=1 ELSE LET a=0", "a", 1.0),
        ("20 IF 1 <= 10 THEN LET b=1 ELSE LET b=2", "b", 1.0),
        ("10 IF 11 > 7 THEN let c=1 ELSE LET c=0", "c", 1.0),
        ("40 IF 11 >= 7 THEN let d=1 ELSE LET d=3", "d", 1.0),
        ("50 IF 1 = 1 THEN let e=1 ELSE LET e=3", "e", 1.0),
        ("60 IF 1 <> 3 THEN let f=13 ELSE LET f=3", "f", 13.0),
        ("70 IF 1 <> 1 THEN let g=3 ELSE LET g=33", "g", 33.0),
        ("80 IF \"a\" < \"b\" THEN LET A=1 ELSE LET A=0", "A", 1.0),
        ("90 IF \"a\" <= \"a\" THEN LET B=1 ELSE LET B=2", "B", 1.0),
        ("100 IF \"b\" > \"a\" THEN let C=1 ELSE LET C=0", "C", 1.0),
        ("110 IF \"c\" >= \"a\" THEN let D=1 ELSE LET D=3", "D", 1.0),
        ("120 IF \"moi\" = \"moi\" THEN let E=1 ELSE LET E=3", "E", 1.0),
        ("130 IF \"steve\" <> \"kemp\" THEN let F=13 ELSE LET F=3", "F", 13.0),
        ("140 IF \"a\" <> \"a\" THEN let G=3 ELSE LET G=33", "G", 33.0),
    ];
    for (program, var, val) in tests.iter() {
        let mut r = runtime(&format!("{}\n", program));
        r.run(&mut Transcript::new()).unwrap();
        assert_eq!(r.get_variable(var), Some(Val::Number(*val)), "{}", program);
    }
}

#[test]
fn test_truthiness() {
    let tests = [
        ("1", 11.0),
        ("0", 10.0),
        ("\"steve\"", 11.0),
        ("\"\"", 10.0),
        ("-0.5", 11.0),
    ];
    for (value, expected) in tests.iter() {
        let program = format!(
            "10 LET a={}\n20 IF a THEN LET t=11 ELSE let t=10\n",
            value
        );
        let mut r = runtime(&program);
        r.run(&mut Transcript::new()).unwrap();
        assert_eq!(r.get_variable("t"), Some(Val::Number(*expected)), "{}", value);
    }
}

#[test]
fn test_mixed_comparison_is_mismatch() {
    assert_eq!(code("10 IF 1 < \"a\" THEN END"), ErrorCode::TypeMismatch);
}

#[test]
fn test_if_without_else() {
    assert_eq!(exec("10 IF 0 THEN ? \"one\"\n20 ? \"two\""), "two\n");
    assert_eq!(exec("10 IF 1 THEN ? \"one\"\n20 ? \"two\""), "one\ntwo\n");
}

#[test]
fn test_then_line_number() {
    let program = "10 IF 1 THEN 30\n20 ? \"skipped\"\n30 ? \"landed\"";
    assert_eq!(exec(program), "landed\n");
    let program = "10 IF 0 THEN 30 ELSE 40\n20 END\n30 ? \"then\"\n40 ? \"else\"";
    assert_eq!(exec(program), "else\n");
}

#[test]
fn test_then_goto_in_branch() {
    assert_eq!(exec("10 IF 1 THEN GOTO 30\n20 ? 20\n30 ? 30"), " 30 \n");
}

#[test]
fn test_nested_if_claims_first_else() {
    let program = "10 IF 1 THEN IF 0 THEN ? \"a\" ELSE ? \"b\" ELSE ? \"c\"";
    assert_eq!(exec(program), "b\n");
    let program = "10 IF 0 THEN IF 1 THEN ? \"a\" ELSE ? \"b\" ELSE ? \"c\"";
    assert_eq!(exec(program), "c\n");
}

#[test]
fn test_untaken_branch_is_not_run() {
    assert_eq!(exec("10 IF 1 THEN ? \"ok\" ELSE ? 1 / 0"), "ok\n");
}

#[test]
fn test_missing_then() {
    let e = exec_err("10 IF 1 PRINT 2");
    assert_eq!(e.code(), ErrorCode::SyntaxError);
    assert_eq!(e.detail(), "EXPECTED THEN");
}
