//! Tests for the `flip_text` binary.

use std::io::Write;
use std::process::{Command, Output, Stdio};
use tempfile::NamedTempFile;

fn run(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_flip_text"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to execute flip_text");

    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(stdin.as_bytes())
        .expect("write stdin");

    child.wait_with_output().expect("wait for flip_text")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("utf-8 stdout")
}

fn temp_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file
}

#[test]
fn flips_stdin() {
    let output = run(&[], "Do you like it?");
    assert!(output.status.success());
    insta::assert_snapshot!(stdout(&output), @"⸮Ɉi ɘʞil υoγ oᗡ");
}

#[test]
fn flips_file_with_options() {
    let file = temp_file("<--this way---\n(o)");
    let path = file.path().to_str().expect("utf-8 path");

    let output = run(&["--preserve-words", path], "");
    assert!(output.status.success());
    assert_eq!(stdout(&output), "---this way-->\n           (o)");

    let output = run(&["--ascii-only", "--keep-trailing-space", path], "");
    assert!(output.status.success());
    assert_eq!(stdout(&output), "---yaw ziht-->\n           (o)");
}

#[test]
fn blockify_mode() {
    let output = run(&["--blockify"], "ab\nc");
    assert!(output.status.success());
    assert_eq!(stdout(&output), "ab\nc ");
}

#[test]
fn parse_mode_prints_json() {
    let output = run(&["--parse", "--preserve-words"], "a cat");
    assert!(output.status.success());
    let rows: serde_json::Value = serde_json::from_str(&stdout(&output)).expect("json output");
    assert_eq!(rows[0]["display_width"], 5.0);
    assert_eq!(rows[0]["parts"][0]["text"], "a cat");
    assert_eq!(rows[0]["parts"][0]["is_word_run"], true);
}

#[test]
fn terminal_width_option() {
    let output = run(&["--width", "wcwidth", "--keep-trailing-space"], "漢(\n[");
    assert!(output.status.success());
    assert_eq!(stdout(&output), ")漢\n  ]");
}

#[test]
fn metrics_option() {
    let metrics = temp_file(r#"{ "default": 1.0, "widths": { "漢": 2.6, "　": 1.6 } }"#);
    let path = metrics.path().to_str().expect("utf-8 path");
    let output = run(&["--metrics", path], "漢\n(");
    assert!(output.status.success());
    assert_eq!(stdout(&output), "漢\n\u{3000})");
}

#[test]
fn validate_builtin_table() {
    let output = run(&["--validate"], "");
    assert!(output.status.success());
    assert!(stdout(&output).starts_with("mirror table consistent"));
}

#[test]
fn validate_reports_broken_table() {
    let table = temp_file(r#"{ "ascii": { "K": "4", "4": "R", "R": "4" } }"#);
    let path = table.path().to_str().expect("utf-8 path");
    let output = run(&["--validate", "--table", path], "");
    assert_eq!(output.status.code(), Some(1));
    let report = stdout(&output);
    assert!(report.contains("one-way flips that have not been accepted"), "{report}");
    assert!(report.contains("K (U+004B)"), "{report}");
}

#[test]
fn verbose_logs_to_stderr() {
    let output = run(&["--verbose", "--validate"], "");
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("[info] mirror table consistent"), "{stderr}");
}

#[test]
fn help_and_usage_errors() {
    let output = run(&["--help"], "");
    assert!(output.status.success());
    assert!(stdout(&output).contains("USAGE:"));

    let output = run(&["--frobnicate"], "");
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Unknown option: --frobnicate"));

    let output = run(&["--metrics", "/nonexistent/metrics.json"], "x");
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).starts_with("Error:"));
}
