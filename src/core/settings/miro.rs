//! Miro API settings.

use serde::Serialize;
use tracing::debug;

use super::field;
use crate::core::constants;
use crate::core::domain::{EnvSnapshot, SecretValue};
use crate::error::ConfigError;

/// Credentials and target board for the Miro REST API.
#[derive(Debug, Clone, Serialize)]
pub struct MiroSettings {
    access_token: SecretValue,
    board_id: String,
    api_base_url: String,
}

impl MiroSettings {
    /// Load from `MIRO_*` variables.
    ///
    /// The board id is kept verbatim, including any trailing `=`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Missing` if the access token or board id is absent.
    pub fn from_env(env: &EnvSnapshot) -> Result<Self, ConfigError> {
        let settings = Self {
            access_token: field::required_secret(env, constants::MIRO_ACCESS_TOKEN)?,
            board_id: field::required_string(env, constants::MIRO_BOARD_ID)?,
            api_base_url: field::string_or(
                env,
                constants::MIRO_API_BASE_URL,
                constants::DEFAULT_MIRO_API_BASE_URL,
            ),
        };

        debug!(board_id = %settings.board_id, "miro settings loaded");
        Ok(settings)
    }

    /// OAuth access token
    pub fn access_token(&self) -> &SecretValue {
        &self.access_token
    }

    /// Board id exactly as configured.
    pub fn board_id(&self) -> &str {
        &self.board_id
    }

    /// Board id without trailing `=` padding.
    pub fn normalized_board_id(&self) -> &str {
        self.board_id.trim_end_matches('=')
    }

    /// REST API base URL
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    /// `Authorization` header value for API requests.
    pub fn authorization_header(&self) -> SecretValue {
        SecretValue::new(format!("Bearer {}", self.access_token.expose_secret()))
    }
}
