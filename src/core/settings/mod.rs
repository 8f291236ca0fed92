//! Typed per-service settings loaded from an environment snapshot.
//!
//! Loading is pure: the same snapshot always yields equivalent settings,
//! and nothing in the environment or on disk is modified. Settings are
//! immutable once built; reloading means loading again.

mod clickhouse;
mod field;
mod miro;
mod security;
mod stripe;

pub use clickhouse::ClickHouseSettings;
pub use miro::MiroSettings;
pub use security::SecuritySettings;
pub use stripe::{StripeMode, StripeSettings};

use serde::Serialize;
use tracing::debug;

use crate::core::domain::{EnvSnapshot, Service};
use crate::error::ConfigError;

/// Settings for one service.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Settings {
    ClickHouse(ClickHouseSettings),
    Miro(MiroSettings),
    Stripe(StripeSettings),
    Security(SecuritySettings),
}

impl Settings {
    /// The service these settings belong to.
    pub fn service(&self) -> Service {
        match self {
            Self::ClickHouse(_) => Service::ClickHouse,
            Self::Miro(_) => Service::Miro,
            Self::Stripe(_) => Service::Stripe,
            Self::Security(_) => Service::Security,
        }
    }
}

/// Load the settings of one service.
///
/// # Errors
///
/// Returns `ConfigError` naming the variable that is missing or fails to
/// coerce.
pub fn load(service: Service, env: &EnvSnapshot) -> Result<Settings, ConfigError> {
    debug!(%service, "loading settings");
    Ok(match service {
        Service::ClickHouse => Settings::ClickHouse(ClickHouseSettings::from_env(env)?),
        Service::Miro => Settings::Miro(MiroSettings::from_env(env)?),
        Service::Stripe => Settings::Stripe(StripeSettings::from_env(env)?),
        Service::Security => Settings::Security(SecuritySettings::from_env(env)?),
    })
}

/// Load outcome for every known service.
///
/// A failed load is kept as its error so it can still be reported.
#[derive(Debug)]
pub struct SettingsBundle {
    pub clickhouse: Result<ClickHouseSettings, ConfigError>,
    pub miro: Result<MiroSettings, ConfigError>,
    pub stripe: Result<StripeSettings, ConfigError>,
    pub security: Result<SecuritySettings, ConfigError>,
}

impl SettingsBundle {
    /// Load all services from one snapshot. Never fails as a whole.
    pub fn load(env: &EnvSnapshot) -> Self {
        let bundle = Self {
            clickhouse: ClickHouseSettings::from_env(env),
            miro: MiroSettings::from_env(env),
            stripe: StripeSettings::from_env(env),
            security: SecuritySettings::from_env(env),
        };
        debug!(
            failed = Service::ALL
                .iter()
                .filter(|s| bundle.error(**s).is_some())
                .count(),
            "settings bundle loaded"
        );
        bundle
    }

    /// Settings of one service, or the error its load failed with.
    pub fn get(&self, service: Service) -> Result<Settings, &ConfigError> {
        match service {
            Service::ClickHouse => self.clickhouse.as_ref().map(|s| Settings::ClickHouse(s.clone())),
            Service::Miro => self.miro.as_ref().map(|s| Settings::Miro(s.clone())),
            Service::Stripe => self.stripe.as_ref().map(|s| Settings::Stripe(s.clone())),
            Service::Security => self.security.as_ref().map(|s| Settings::Security(s.clone())),
        }
    }

    /// Load error of one service, if any.
    pub fn error(&self, service: Service) -> Option<&ConfigError> {
        match service {
            Service::ClickHouse => self.clickhouse.as_ref().err(),
            Service::Miro => self.miro.as_ref().err(),
            Service::Stripe => self.stripe.as_ref().err(),
            Service::Security => self.security.as_ref().err(),
        }
    }
}
