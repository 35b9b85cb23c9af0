use std::process::{Command, Output};

fn meeny(path: &str) -> Output {
    Command::new(env!("CARGO_BIN_EXE_meeny")).arg(path)
                                            .output()
                                            .unwrap_or_else(|e| panic!("Failed to run meeny: {e}"))
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("stdout is valid UTF-8")
}

fn stderr(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).expect("stderr is valid UTF-8")
}

#[test]
fn successful_program_exits_zero() {
    let output = meeny("programs/sum.mny");
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "7\n");
}

#[test]
fn parse_failure_exits_nonzero_without_output() {
    let output = meeny("tests/fixtures/name_mismatch.mny");
    assert!(!output.status.success());
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("ParseError: "));
}

#[test]
fn runtime_failure_exits_nonzero_after_earlier_output() {
    let output = meeny("tests/fixtures/divide_by_zero.mny");
    assert!(!output.status.success());
    assert_eq!(stdout(&output), "1\n");
    assert!(stderr(&output).contains("ArithmeticError: Error on line 5: Division by zero."));
}

#[test]
fn missing_file_exits_nonzero() {
    let output = meeny("tests/fixtures/does_not_exist.mny");
    assert!(!output.status.success());
    assert!(stdout(&output).is_empty());
}
