//! Test fixtures and constants.

/// A 32-byte key, base64 encoded.
pub const KEY: &str = "MDEyMzQ1Njc4OWFiY2RlZjAxMjM0NTY3ODlhYmNkZWY=";

/// A second valid key that differs from `KEY`.
pub const OTHER_KEY: &str = "ZmVkY2JhOTg3NjU0MzIxMGZlZGNiYTk4NzY1NDMyMTA=";

/// A well-formed key that decodes to only 16 bytes.
pub const SHORT_KEY: &str = "AAAAAAAAAAAAAAAAAAAAAA==";

pub const CLICKHOUSE_PASSWORD: &str = "s3cr3t-clickhouse-pw";
pub const MIRO_TOKEN: &str = "eyJtaXJvLm9yaWdpbiI6ImV1MDEifQ_abc";
pub const STRIPE_KEY: &str = "sk_test_4eC39HqLyjWDarjtT1zdp7dc";

/// Environment under which every service validates cleanly.
pub const VALID_ENV: &[(&str, &str)] = &[
    ("CLICKHOUSE_HOST", "db1"),
    ("CLICKHOUSE_PORT", "9440"),
    ("CLICKHOUSE_USER", "analytics"),
    ("CLICKHOUSE_PASSWORD", CLICKHOUSE_PASSWORD),
    ("CLICKHOUSE_DATABASE", "events"),
    ("MIRO_ACCESS_TOKEN", MIRO_TOKEN),
    ("MIRO_BOARD_ID", "uXjVOfjkmAE="),
    ("STRIPE_API_KEY", STRIPE_KEY),
    ("ENCRYPTION_KEY", KEY),
];

/// `VALID_ENV` with one variable replaced or added.
pub fn valid_env_with<'a>(name: &'a str, value: &'a str) -> Vec<(&'a str, &'a str)> {
    let mut pairs: Vec<(&str, &str)> = VALID_ENV
        .iter()
        .copied()
        .filter(|(k, _)| *k != name)
        .collect();
    pairs.push((name, value));
    pairs
}
