//! Error types.
//!
//! Messages name variables and fields, never the value of a secret.

use thiserror::Error;

/// Errors raised while turning the environment into settings.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required environment variable {var}")]
    Missing { var: &'static str },

    #[error("invalid value for {var}: expected {expected}")]
    Invalid {
        var: &'static str,
        expected: &'static str,
    },

    #[error("failed to read env file {path}: {source}")]
    ReadEnvFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("unknown service: {0} (expected clickhouse, miro, stripe or security)")]
    UnknownService(String),
}

impl ConfigError {
    /// Name of the environment variable this error refers to, if any.
    pub fn var(&self) -> Option<&'static str> {
        match self {
            Self::Missing { var } | Self::Invalid { var, .. } => Some(var),
            _ => None,
        }
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("encryption key must decode to exactly 32 bytes, got {actual}")]
    KeyLength { actual: usize },

    #[error("encryption key is not valid base64")]
    KeyEncoding,

    #[error("decryption failed: {0}")]
    Decryption(String),

    #[error("encryption failed: {0}")]
    Encryption(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
