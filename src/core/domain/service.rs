//! Service identifier.

use serde::Serialize;

use crate::error::ConfigError;

/// The external services credgate knows how to configure.
///
/// Declaration order is the order reports are produced in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Service {
    ClickHouse,
    Miro,
    Stripe,
    Security,
}

impl Service {
    /// Every known service, in declaration order.
    pub const ALL: [Service; 4] = [
        Service::ClickHouse,
        Service::Miro,
        Service::Stripe,
        Service::Security,
    ];

    /// Name used as report key and on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Self::ClickHouse => "clickhouse",
            Self::Miro => "miro",
            Self::Stripe => "stripe",
            Self::Security => "security",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::ClickHouse => "ClickHouse",
            Self::Miro => "Miro",
            Self::Stripe => "Stripe",
            Self::Security => "Security",
        }
    }
}

impl std::fmt::Display for Service {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Service {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "clickhouse" => Ok(Self::ClickHouse),
            "miro" => Ok(Self::Miro),
            "stripe" => Ok(Self::Stripe),
            "security" => Ok(Self::Security),
            _ => Err(ConfigError::UnknownService(s.to_string())),
        }
    }
}
