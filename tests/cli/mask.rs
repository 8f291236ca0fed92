//! Tests for `credgate mask`.

use crate::support::*;

#[test]
fn test_mask_keeps_suffix() {
    let t = Test::new();

    let output = t.mask("1234567890", 4);
    assert_success(&output);
    assert_eq!(stdout(&output).trim(), "******7890");
}

#[test]
fn test_mask_default_visible() {
    let t = Test::new();

    let output = t.run(&["mask", "abcdefgh"]);
    assert_success(&output);
    assert_eq!(stdout(&output).trim(), "****efgh");
}

#[test]
fn test_mask_edge_counts() {
    let t = Test::new();

    assert_eq!(stdout(&t.mask("secret", 0)).trim(), "******");
    assert_eq!(stdout(&t.mask("abc", 10)).trim(), "abc");
}

#[test]
fn test_mask_negative_count_fails() {
    let t = Test::new();

    let output = t.mask("secret", -1);
    assert_failure(&output);
    assert_stderr_contains(&output, "invalid argument");
}

#[test]
fn test_mask_reads_no_environment() {
    use predicates::prelude::*;

    Test::new()
        .cmd()
        .args(["mask", "--no-env-file", "hunter2hunter2"])
        .assert()
        .success()
        .stdout(predicate::str::diff("**********ter2\n"));
}
