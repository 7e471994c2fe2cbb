//! Tests for the `sdt` binary

use std::io::Write;
use std::process::{Command, Output};

fn sdt(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_sdt"))
        .args(args)
        .env_remove("SDT_LOG")
        .output()
        .expect("run sdt")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_explain_prints_worked_example() {
    let output = sdt(&["explain", "2 + 3 * 4"]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.starts_with("Complete S-SDT Solution for: 2+3*4"));
    assert!(text.contains("2+3*4 = 14"));
}

#[test]
fn test_explain_blank_expression_fails() {
    let output = sdt(&["explain", "  "]);
    assert!(!output.status.success());
    assert!(stdout(&output).is_empty());
    assert!(String::from_utf8_lossy(&output.stderr)
        .contains("Please enter an arithmetic expression."));
}

#[test]
fn test_analyze_from_flags() {
    let output = sdt(&[
        "analyze",
        "-g",
        "E → E + T | T",
        "-r",
        "E.val = E1.val + T.val",
        "-r",
        "T.i = E.val",
        "--no-guide",
    ]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("[L-Attributed SDT]"));
    assert!(!text.contains("Understanding the Results"));
}

#[test]
fn test_analyze_from_files() {
    let mut grammar = tempfile::NamedTempFile::new().unwrap();
    writeln!(grammar, "E → E + T | T\n\nT → digit").unwrap();
    let mut rules = tempfile::NamedTempFile::new().unwrap();
    writeln!(rules, "E.val = E1.val + T.val\nT.val = digit.lexval").unwrap();

    let output = sdt(&[
        "analyze",
        "--grammar-file",
        grammar.path().to_str().unwrap(),
        "--rules-file",
        rules.path().to_str().unwrap(),
    ]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("[S-Attributed SDT]"));
    assert!(text.contains("  Rule 2\n    T.val = digit.lexval"));
}

#[test]
fn test_analyze_without_rules_fails() {
    let output = sdt(&["analyze", "-g", "E → T"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Please enter semantic rules."));
}
