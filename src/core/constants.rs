//! Constants used throughout credgate.
//!
//! Centralizes environment variable names, defaults and token parameters.

/// Default env file loaded by the CLI when present.
pub const ENV_FILE: &str = ".env";

/// Placeholder printed in place of any secret.
pub const REDACTED: &str = "**********";

/// Character used by the masker.
pub const MASK_CHAR: char = '*';

/// Trailing characters left visible when no count is given.
pub const DEFAULT_VISIBLE_CHARS: i64 = 4;

/// Required decoded length of the encryption key, in bytes.
pub const KEY_LEN: usize = 32;

/// Version tag that prefixes every token and is bound as associated data.
pub const TOKEN_VERSION: &str = "cg1";

// ClickHouse
pub const CLICKHOUSE_HOST: &str = "CLICKHOUSE_HOST";
pub const CLICKHOUSE_PORT: &str = "CLICKHOUSE_PORT";
pub const CLICKHOUSE_USER: &str = "CLICKHOUSE_USER";
pub const CLICKHOUSE_PASSWORD: &str = "CLICKHOUSE_PASSWORD";
pub const CLICKHOUSE_DATABASE: &str = "CLICKHOUSE_DATABASE";
pub const CLICKHOUSE_ALLOW_EMPTY_PASSWORD: &str = "CLICKHOUSE_ALLOW_EMPTY_PASSWORD";
pub const CLICKHOUSE_SECURE: &str = "CLICKHOUSE_SECURE";

pub const DEFAULT_CLICKHOUSE_PORT: i64 = 9000;
pub const DEFAULT_CLICKHOUSE_USER: &str = "default";
pub const DEFAULT_CLICKHOUSE_DATABASE: &str = "default";

// Miro
pub const MIRO_ACCESS_TOKEN: &str = "MIRO_ACCESS_TOKEN";
pub const MIRO_BOARD_ID: &str = "MIRO_BOARD_ID";
pub const MIRO_API_BASE_URL: &str = "MIRO_API_BASE_URL";

pub const DEFAULT_MIRO_API_BASE_URL: &str = "https://api.miro.com/v2";

// Stripe
pub const STRIPE_API_KEY: &str = "STRIPE_API_KEY";

pub const STRIPE_TEST_PREFIX: &str = "sk_test_";
pub const STRIPE_LIVE_PREFIX: &str = "sk_live_";

// Security
pub const ENCRYPTION_KEY: &str = "ENCRYPTION_KEY";
