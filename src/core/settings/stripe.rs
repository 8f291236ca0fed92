//! Stripe API settings.

use serde::Serialize;
use tracing::debug;

use super::field;
use crate::core::constants;
use crate::core::domain::{EnvSnapshot, SecretValue};
use crate::error::ConfigError;

/// Which Stripe environment a secret key belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StripeMode {
    Test,
    Live,
}

/// Credentials for the Stripe API.
#[derive(Debug, Clone, Serialize)]
pub struct StripeSettings {
    api_key: SecretValue,
}

impl StripeSettings {
    /// Load from `STRIPE_API_KEY`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Missing` if the key is absent.
    pub fn from_env(env: &EnvSnapshot) -> Result<Self, ConfigError> {
        let settings = Self {
            api_key: field::required_secret(env, constants::STRIPE_API_KEY)?,
        };
        debug!(mode = ?settings.mode(), "stripe settings loaded");
        Ok(settings)
    }

    /// Secret API key
    pub fn api_key(&self) -> &SecretValue {
        &self.api_key
    }

    /// Mode derived from the key prefix, if it has a recognized one.
    pub fn mode(&self) -> Option<StripeMode> {
        let key = self.api_key.expose_secret();
        if key.starts_with(constants::STRIPE_TEST_PREFIX) {
            Some(StripeMode::Test)
        } else if key.starts_with(constants::STRIPE_LIVE_PREFIX) {
            Some(StripeMode::Live)
        } else {
            None
        }
    }
}
