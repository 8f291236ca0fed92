//! Tests for error reporting and exit codes.

use crate::support::*;

#[test]
fn test_missing_key_hint() {
    let t = Test::new();

    let output = t.encrypt("{}");
    assert_failure(&output);
    assert_stderr_contains(&output, "missing required environment variable ENCRYPTION_KEY");
    assert_stderr_contains(&output, "set ENCRYPTION_KEY");
}

#[test]
fn test_unknown_service_rejected() {
    let t = Test::new();

    let output = t.run(&["check", "postgres"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "unknown service");
}

#[test]
fn test_missing_env_file_fails() {
    let t = Test::new();

    let output = t.run(&["check", "--env-file", "nope.env"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "nope.env");
}

#[test]
fn test_env_file_conflicts_with_no_env_file() {
    let t = Test::new();

    let output = t.run(&["check", "--env-file", "a.env", "--no-env-file"]);
    assert_failure(&output);
}

#[test]
fn test_logs_go_to_stderr() {
    let t = Test::with_env(&[("ENCRYPTION_KEY", KEY)]);

    let output = t.run(&["-v", "keygen"]);
    assert_success(&output);
    let out = stdout(&output);
    assert_eq!(out.lines().count(), 1, "unexpected stdout: {}", out);
}
