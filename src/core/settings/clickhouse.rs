//! ClickHouse connection settings.

use serde::Serialize;
use tracing::debug;

use super::field;
use crate::core::constants::{self, REDACTED};
use crate::core::domain::{EnvSnapshot, SecretValue};
use crate::error::ConfigError;

/// Connection settings for a ClickHouse server.
#[derive(Debug, Clone, Serialize)]
pub struct ClickHouseSettings {
    host: String,
    port: i64,
    user: String,
    password: SecretValue,
    database: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    allow_empty_password: Option<bool>,
    secure: bool,
}

impl ClickHouseSettings {
    /// Load from `CLICKHOUSE_*` variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Missing` if `CLICKHOUSE_HOST` is absent, or
    /// `ConfigError::Invalid` if the port or a flag does not parse.
    pub fn from_env(env: &EnvSnapshot) -> Result<Self, ConfigError> {
        let settings = Self {
            host: field::required_string(env, constants::CLICKHOUSE_HOST)?,
            port: field::integer_or(
                env,
                constants::CLICKHOUSE_PORT,
                constants::DEFAULT_CLICKHOUSE_PORT,
            )?,
            user: field::string_or(
                env,
                constants::CLICKHOUSE_USER,
                constants::DEFAULT_CLICKHOUSE_USER,
            ),
            password: field::secret_or_empty(env, constants::CLICKHOUSE_PASSWORD),
            database: field::string_or(
                env,
                constants::CLICKHOUSE_DATABASE,
                constants::DEFAULT_CLICKHOUSE_DATABASE,
            ),
            allow_empty_password: field::optional_bool(
                env,
                constants::CLICKHOUSE_ALLOW_EMPTY_PASSWORD,
            )?,
            secure: field::bool_or(env, constants::CLICKHOUSE_SECURE, false)?,
        };

        debug!(host = %settings.host, port = settings.port, "clickhouse settings loaded");
        Ok(settings)
    }

    /// Server hostname
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Native protocol port, unchecked until validation
    pub fn port(&self) -> i64 {
        self.port
    }

    /// Login user
    pub fn user(&self) -> &str {
        &self.user
    }

    /// Login password, possibly empty
    pub fn password(&self) -> &SecretValue {
        &self.password
    }

    /// Default database
    pub fn database(&self) -> &str {
        &self.database
    }

    /// Explicit operator intent about running without a password.
    pub fn allow_empty_password(&self) -> Option<bool> {
        self.allow_empty_password
    }

    /// Whether the connection should use TLS.
    pub fn secure(&self) -> bool {
        self.secure
    }

    /// Connection string including the password.
    pub fn dsn(&self) -> SecretValue {
        SecretValue::new(self.format_dsn(self.password.expose_secret()))
    }

    /// Connection string with the password replaced by a placeholder.
    pub fn redacted_dsn(&self) -> String {
        if self.password.is_empty() {
            self.format_dsn("")
        } else {
            self.format_dsn(REDACTED)
        }
    }

    fn format_dsn(&self, password: &str) -> String {
        let scheme = if self.secure {
            "clickhouses"
        } else {
            "clickhouse"
        };
        format!(
            "{}://{}:{}@{}:{}/{}",
            scheme, self.user, password, self.host, self.port, self.database
        )
    }
}
