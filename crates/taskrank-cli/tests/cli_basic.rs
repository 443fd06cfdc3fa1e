//! Basic CLI E2E tests.
//!
//! Tests run the built binary with an isolated HOME and verify outputs.

use std::io::Write;
use std::process::{Command, Stdio};

use indoc::indoc;

const BODY: &str = indoc! {r#"
    {
      "tasks": [
        { "title": "Low", "due_date": "2025-07-01", "estimated_hours": 20, "importance": 2 },
        { "title": "High", "due_date": "2025-06-02", "estimated_hours": 2, "importance": 10 },
        { "title": "Mid", "due_date": "2025-06-08", "estimated_hours": 5, "importance": 5 }
      ]
    }
"#};

/// Run a CLI command with `stdin` and return (stdout, stderr, exit code).
fn run_cli(home: &std::path::Path, args: &[&str], stdin: &str) -> (String, String, i32) {
    let mut child = Command::new(env!("CARGO_BIN_EXE_taskrank"))
        .args(args)
        .env("HOME", home)
        .env_remove("TASKRANK_ENV")
        .env_remove("TASKRANK_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to execute CLI command");

    // The child may exit before reading (argument errors), so a broken pipe is fine.
    let _ = child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(stdin.as_bytes());

    let output = child.wait_with_output().expect("Failed to wait for CLI");
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

fn parse_json(text: &str) -> serde_json::Value {
    serde_json::from_str(text).expect("Failed to parse JSON output")
}

#[test]
fn test_analyze_from_stdin() {
    let home = tempfile::tempdir().unwrap();
    let (stdout, stderr, code) = run_cli(home.path(), &["analyze", "--today", "2025-06-01"], BODY);
    assert_eq!(code, 0, "analyze failed: {stderr}");

    let json = parse_json(&stdout);
    assert_eq!(json["status"], "success");
    assert_eq!(json["count"], 3);
    assert_eq!(json["tasks"][0]["title"], "High");
    assert_eq!(json["tasks"][0]["priority_score"], 233.0);
    assert_eq!(json["tasks"][0]["days_until_due"], 1);
    assert_eq!(json["tasks"][0]["is_overdue"], false);
}

#[test]
fn test_analyze_sort_flag_and_breakdown() {
    let home = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(
        home.path(),
        &["analyze", "--today", "2025-06-01", "--sort-by", "importance", "--breakdown"],
        BODY,
    );
    assert_eq!(code, 0);

    let json = parse_json(&stdout);
    let importances: Vec<i64> = json["tasks"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["importance"].as_i64().unwrap())
        .collect();
    assert_eq!(importances, vec![10, 5, 2]);
    assert_eq!(json["tasks"][0]["breakdown"]["urgency"], 90.0);
}

#[test]
fn test_analyze_from_file() {
    let home = tempfile::tempdir().unwrap();
    let input = home.path().join("tasks.json");
    std::fs::write(&input, BODY).unwrap();
    let (stdout, _, code) = run_cli(
        home.path(),
        &["analyze", "--today", "2025-06-01", "--input", input.to_str().unwrap()],
        "",
    );
    assert_eq!(code, 0);
    assert_eq!(parse_json(&stdout)["count"], 3);
}

#[test]
fn test_suggest_with_limit() {
    let home = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(
        home.path(),
        &["suggest", "--today", "2025-06-01", "--limit", "2"],
        BODY,
    );
    assert_eq!(code, 0);

    let json = parse_json(&stdout);
    let suggestions = json["suggestions"].as_array().unwrap();
    assert_eq!(suggestions.len(), 2);
    assert_eq!(suggestions[0]["task"]["title"], "High");
    assert_eq!(
        suggestions[0]["explanation"],
        "⏰ Due TOMORROW • ⭐ High importance (10/10) • ✅ Quick task (2h)"
    );
}

#[test]
fn test_suggest_rejects_zero_limit_flag() {
    let home = tempfile::tempdir().unwrap();
    let (_, _, code) = run_cli(home.path(), &["suggest", "--limit", "0"], BODY);
    assert_ne!(code, 0);
}

#[test]
fn test_invalid_body_prints_error_envelope() {
    let home = tempfile::tempdir().unwrap();
    let (stdout, stderr, code) = run_cli(home.path(), &["analyze"], r#"{"tasks": []}"#);
    assert_eq!(code, 1);
    assert!(stderr.contains("No tasks provided"));

    let json = parse_json(&stdout);
    assert_eq!(json["status"], "error");
    assert_eq!(json["message"], "No tasks provided");
}

#[test]
fn test_malformed_json_is_client_error() {
    let home = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(home.path(), &["suggest"], "not json");
    assert_eq!(code, 1);
    assert_eq!(parse_json(&stdout)["message"], "Invalid JSON in request body");
}

#[test]
fn test_config_set_changes_suggest_default() {
    let home = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(home.path(), &["config", "set", "suggest.default_limit", "1"], "");
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "ok");

    let (stdout, _, code) = run_cli(home.path(), &["config", "get", "suggest.default_limit"], "");
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "1");

    let (stdout, _, _) = run_cli(home.path(), &["suggest", "--today", "2025-06-01"], BODY);
    assert_eq!(parse_json(&stdout)["suggestions"].as_array().unwrap().len(), 1);
}

#[test]
fn test_config_rejects_unknown_key() {
    let home = tempfile::tempdir().unwrap();
    let (_, stderr, code) = run_cli(home.path(), &["config", "get", "ui.dark_mode"], "");
    assert_eq!(code, 1);
    assert!(stderr.contains("unknown config key"));
}

#[test]
fn test_config_reset() {
    let home = tempfile::tempdir().unwrap();
    run_cli(home.path(), &["config", "set", "output.pretty", "false"], "");
    let (stdout, _, code) = run_cli(home.path(), &["config", "reset"], "");
    assert_eq!(code, 0);
    assert!(stdout.contains("reset"));

    let (stdout, _, _) = run_cli(home.path(), &["config", "get", "output.pretty"], "");
    assert_eq!(stdout.trim(), "true");
}
