//! Tests for `credgate encrypt`, `decrypt` and `keygen`.

use crate::support::*;

#[test]
fn test_encrypt_decrypt_roundtrip() {
    let t = Test::with_env(&[("ENCRYPTION_KEY", KEY)]);

    let output = t.encrypt(r#"{"user_id": 42, "role": "admin"}"#);
    assert_success(&output);
    let token = stdout(&output).trim().to_string();
    assert!(token.starts_with("cg1."));
    assert!(!token.contains("admin"));

    let output = t.decrypt(&token);
    assert_success(&output);
    let json = stdout_json(&output);
    assert_eq!(json["user_id"], 42);
    assert_eq!(json["role"], "admin");
}

#[test]
fn test_encrypt_payload_argument() {
    let t = Test::with_env(&[("ENCRYPTION_KEY", KEY)]);

    let output = t.run(&["encrypt", r#"{"n": 1}"#, "--ttl", "3600"]);
    assert_success(&output);
    let token = stdout(&output).trim().to_string();

    let output = t.run(&["decrypt", &token]);
    assert_success(&output);
    assert_eq!(stdout_json(&output)["n"], 1);
}

#[test]
fn test_decrypt_with_other_key_fails() {
    let t = Test::with_env(&[("ENCRYPTION_KEY", KEY)]);
    let token = stdout(&t.encrypt(r#"{"a": true}"#)).trim().to_string();

    let other = Test::with_env(&[("ENCRYPTION_KEY", OTHER_KEY)]);
    let output = other.decrypt(&token);
    assert_failure(&output);
    assert_stderr_contains(&output, "decryption failed");
}

#[test]
fn test_encrypt_rejects_non_object() {
    let t = Test::with_env(&[("ENCRYPTION_KEY", KEY)]);

    let output = t.encrypt("[1, 2]");
    assert_failure(&output);
    assert_stderr_contains(&output, "JSON object");
}

#[test]
fn test_encrypt_rejects_zero_ttl() {
    let t = Test::with_env(&[("ENCRYPTION_KEY", KEY)]);

    let output = t.run(&["encrypt", "{}", "--ttl", "0"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "ttl");
}

#[test]
fn test_encrypt_short_key_suggests_keygen() {
    let t = Test::with_env(&[("ENCRYPTION_KEY", SHORT_KEY)]);

    let output = t.encrypt("{}");
    assert_failure(&output);
    assert_stderr_contains(&output, "got 16");
    assert_stderr_contains(&output, "credgate keygen");
    assert_not_leaked(&output, SHORT_KEY);
}

#[test]
fn test_keygen_output_is_usable() {
    let t = Test::new();

    let output = t.keygen();
    assert_success(&output);
    let key = stdout(&output).trim().to_string();
    assert_eq!(key.len(), 44);

    let t = Test::with_env(&[("ENCRYPTION_KEY", key.as_str())]);
    let token = stdout(&t.encrypt(r#"{"ok": 1}"#)).trim().to_string();
    assert_success(&t.decrypt(&token));
}

#[test]
fn test_keygen_is_random() {
    let t = Test::new();
    assert_ne!(stdout(&t.keygen()), stdout(&t.keygen()));
}

#[test]
fn test_encrypt_huge_ttl_fails_cleanly() {
    let t = Test::with_env(&[("ENCRYPTION_KEY", KEY)]);

    let output = t.run(&["encrypt", "{}", "--ttl", &i64::MAX.to_string()]);
    assert_failure(&output);
    assert_stderr_contains(&output, "ttl out of range");
    assert!(!stderr(&output).contains("panicked"));
}
