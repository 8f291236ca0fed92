//! Security settings.

use serde::Serialize;

use super::field;
use crate::core::constants;
use crate::core::crypto;
use crate::core::domain::{EnvSnapshot, SecretValue};
use crate::error::ConfigError;

/// Key material for payload encryption.
#[derive(Debug, Clone, Serialize)]
pub struct SecuritySettings {
    encryption_key: SecretValue,
}

impl SecuritySettings {
    /// Load from `ENCRYPTION_KEY`.
    ///
    /// Only presence is checked here. Key length is enforced by
    /// `CryptoManager` and reported by the validator.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Missing` if the key is absent.
    pub fn from_env(env: &EnvSnapshot) -> Result<Self, ConfigError> {
        Ok(Self {
            encryption_key: field::required_secret(env, constants::ENCRYPTION_KEY)?,
        })
    }

    /// Base64 key text as configured
    pub fn encryption_key(&self) -> &SecretValue {
        &self.encryption_key
    }

    /// Fingerprint of the decoded key, or `None` if it is not base64.
    pub fn key_fingerprint(&self) -> Option<String> {
        crypto::decode_key(self.encryption_key.expose_secret())
            .ok()
            .map(|bytes| crypto::fingerprint(&bytes))
    }
}
