mod common;
use basic::lang::ErrorCode;
use common::*;

#[test]
fn test_truncated_programs_end_of_program() {
    let tests = [
        "10 LET a = 3 *",
        "20 LET a = ( 3 * 3 ) + ",
        "40 LET a = (",
        "50 LET a = 3 * 3 / 3 +",
        "60 GOSUB",
        "70 GOTO",
        "80 INPUT",
        "90 INPUT \"test\"",
        "100 INPUT \"test\", ",
        "100 LET",
        "110 LET x",
        "120 LET x=",
        "130 NEXT",
        "10 PRINT 3 +",
        "10 PRINT 3 /",
        "10 PRINT 3 *",
        "10 IF 3 ",
        "10 IF \"steve\" ",
        "10 IF  ",
        "10 IF 1 THEN",
        "10 IF 0 THEN END ELSE",
        "10 FOR I = 1 TO 3 STEP",
        "10 FOR I = 1 TO ",
        "10 FOR I = 1 ",
        "10 FOR I",
        "10 FOR",
        "140 DATA 3,4,5\n150 READ",
    ];
    for program in tests.iter() {
        let e = exec_err(program);
        assert_eq!(e.code(), ErrorCode::EndOfProgram, "{}", program);
        assert!(e.to_string().contains("END OF PROGRAM"), "{}", program);
    }
}

#[test]
fn test_end_of_program_reports_line() {
    let e = exec_err("10 PRINT 1\n20 LET a = 3 *");
    assert_eq!(e.to_string(), "UNEXPECTED END OF PROGRAM IN 20");
}
