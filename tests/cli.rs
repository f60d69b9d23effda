//! End-to-end checks of the `reckon` binary: stdout contents and exit codes.

use std::process::{Command, Output};

fn reckon(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_reckon"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run reckon binary")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn no_arguments_runs_demo() {
    let output = reckon(&[]);

    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "30\n-10\n200\n0.5\n100000000000000000000\n10.0\n"
    );
}

#[test]
fn demo_as_json_lines() {
    let output = reckon(&["--format", "json"]);

    assert!(output.status.success());
    let text = stdout(&output);
    let ops: Vec<String> = text
        .lines()
        .map(|line| {
            let value: serde_json::Value = serde_json::from_str(line).unwrap();
            value["operation"].as_str().unwrap().to_string()
        })
        .collect();
    assert_eq!(ops, ["add", "subtract", "multiply", "divide", "power", "sqrt"]);
}

#[test]
fn single_operation_accepts_negative_operands() {
    let output = reckon(&["subtract", "-5", "3"]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "-8\n");
}

#[test]
fn division_by_zero_exits_non_zero() {
    let output = reckon(&["divide", "1", "0"]);

    assert!(!output.status.success());
    assert!(stdout(&output).is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("division by zero"), "stderr: {}", stderr);
}

#[test]
fn sqrt_of_negative_exits_non_zero() {
    let output = reckon(&["sqrt", "-4"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("domain error"), "stderr: {}", stderr);
}

#[test]
fn overflow_policy_flag() {
    let rejected = reckon(&["power", "10", "400.0"]);
    assert!(!rejected.status.success());

    let widened = reckon(&["--overflow", "widen", "power", "10", "400.0"]);
    assert!(widened.status.success());
    assert_eq!(stdout(&widened), "inf\n");
}

#[test]
fn operation_aliases() {
    let output = reckon(&["pow", "2", "10"]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "1024\n");
}

#[test]
fn operands_may_be_negative_infinity() {
    let output = reckon(&["power", "2", "-inf"]);

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(stdout(&output), "0.0\n");
}

#[test]
fn widened_overflow_as_json() {
    let output = reckon(&["--overflow", "widen", "--format", "json", "power", "10", "400.0"]);

    assert!(output.status.success());
    let record: serde_json::Value = serde_json::from_str(stdout(&output).trim()).unwrap();
    assert_eq!(record["result"], "inf");
}

#[test]
fn failure_as_json_is_written_and_exits_non_zero() {
    let output = reckon(&["--format", "json", "sqrt", "-4"]);

    assert!(!output.status.success());
    let record: serde_json::Value = serde_json::from_str(stdout(&output).trim()).unwrap();
    assert_eq!(record["error"], "domain");
}

#[test]
fn wrong_operand_count_exits_non_zero() {
    let output = reckon(&["sqrt", "4", "9"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("expects 1 operand(s), got 2"), "stderr: {}", stderr);
}

#[test]
fn unknown_operation_is_a_usage_error() {
    let output = reckon(&["modulo", "7", "2"]);

    assert!(!output.status.success());
    assert!(stdout(&output).is_empty());
}

#[test]
fn invalid_operand_is_a_usage_error() {
    let output = reckon(&["add", "ten", "1"]);

    assert!(!output.status.success());
    assert!(stdout(&output).is_empty());
}
