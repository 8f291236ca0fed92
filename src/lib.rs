//! Credgate - typed service settings and credential protection.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── check         # Validation report
//! │   ├── show          # Settings with secrets masked
//! │   ├── seal          # encrypt / decrypt / keygen
//! │   └── mask          # Mask a value
//! └── core/             # Core library components
//!     ├── domain/       # SecretValue, EnvSnapshot, Service
//!     ├── settings/     # Per-service settings and loader
//!     ├── crypto        # Authenticated payload tokens
//!     ├── mask          # Length-preserving redaction
//!     └── validation/   # Rules, results and reports
//! ```
//!
//! # Example
//!
//! ```
//! use credgate::{validate_all, EnvSnapshot, SettingsBundle};
//!
//! let env = EnvSnapshot::from_pairs([
//!     ("CLICKHOUSE_HOST", "db1"),
//!     ("CLICKHOUSE_DATABASE", "analytics"),
//! ]);
//! let report = validate_all(&SettingsBundle::load(&env));
//! assert!(report.get(credgate::Service::ClickHouse).unwrap().is_valid());
//! ```

pub mod cli;
pub mod core;
pub mod error;

pub use crate::core::crypto::{generate_key, Claims, CryptoManager};
pub use crate::core::domain::{EnvSnapshot, SecretValue, Service};
pub use crate::core::mask::mask;
pub use crate::core::settings::{
    load, ClickHouseSettings, MiroSettings, SecuritySettings, Settings, SettingsBundle,
    StripeMode, StripeSettings,
};
pub use crate::core::validation::{validate, validate_all, ValidationReport, ValidationResult};
pub use crate::error::{ConfigError, Error, Result};
