//! Settings validation.
//!
//! Validation never fails: every problem becomes an error or warning in a
//! [`ValidationResult`]. Rules run in field declaration order, so identical
//! settings always produce identical results.

mod rules;

pub use rules::{Check, Rule, Severity, Text};

use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

use crate::core::constants::{self, KEY_LEN};
use crate::core::crypto;
use crate::core::domain::Service;
use crate::core::settings::{
    ClickHouseSettings, MiroSettings, SecuritySettings, Settings, SettingsBundle, StripeMode,
    StripeSettings,
};
use rules::{is_identifier_char, is_not_whitespace, is_token_char};

/// Outcome of validating one service.
///
/// `valid` is true exactly when there are no errors; warnings never affect it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    valid: bool,
    errors: Vec<String>,
    warnings: Vec<String>,
}

impl ValidationResult {
    /// An empty, valid result.
    pub fn new() -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Append an error and mark the result invalid.
    pub fn error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
        self.valid = false;
    }

    /// Append a warning.
    pub fn warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Append a finding of the given severity.
    pub fn push(&mut self, severity: Severity, message: impl Into<String>) {
        match severity {
            Severity::Error => self.error(message),
            Severity::Warning => self.warning(message),
        }
    }

    /// True when no errors were recorded
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Errors in the order they were found
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Warnings in the order they were found
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::new()
    }
}

/// Results for every known service, keyed by service name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationReport {
    results: BTreeMap<Service, ValidationResult>,
}

impl ValidationReport {
    /// Result for one service.
    pub fn get(&self, service: Service) -> Option<&ValidationResult> {
        self.results.get(&service)
    }

    /// Results in service declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Service, &ValidationResult)> {
        self.results.iter().map(|(s, r)| (*s, r))
    }

    /// Whether every service is valid.
    pub fn is_valid(&self) -> bool {
        self.results.values().all(ValidationResult::is_valid)
    }

    /// Total errors across services
    pub fn error_count(&self) -> usize {
        self.results.values().map(|r| r.errors.len()).sum()
    }

    /// Total warnings across services
    pub fn warning_count(&self) -> usize {
        self.results.values().map(|r| r.warnings.len()).sum()
    }
}

/// Validate the settings of one service.
pub fn validate(settings: &Settings) -> ValidationResult {
    match settings {
        Settings::ClickHouse(s) => validate_clickhouse(s),
        Settings::Miro(s) => validate_miro(s),
        Settings::Stripe(s) => validate_stripe(s),
        Settings::Security(s) => validate_security(s),
    }
}

/// Validate every service in a bundle.
///
/// Every known service gets an entry; one that failed to load is reported
/// as invalid with the load error.
pub fn validate_all(bundle: &SettingsBundle) -> ValidationReport {
    let results = Service::ALL
        .iter()
        .map(|&service| {
            let result = match bundle.get(service) {
                Ok(settings) => validate(&settings),
                Err(e) => {
                    let mut result = ValidationResult::new();
                    result.error(format!("{} settings failed to load: {}", service, e));
                    result
                }
            };
            (service, result)
        })
        .collect();

    let report = ValidationReport { results };
    debug!(
        errors = report.error_count(),
        warnings = report.warning_count(),
        "validated all services"
    );
    report
}

/// Run the ClickHouse rules.
pub fn validate_clickhouse(settings: &ClickHouseSettings) -> ValidationResult {
    run(Service::ClickHouse, &clickhouse_rules(), settings)
}

pub fn validate_miro(settings: &MiroSettings) -> ValidationResult {
    run(Service::Miro, &miro_rules(), settings)
}

pub fn validate_stripe(settings: &StripeSettings) -> ValidationResult {
    run(Service::Stripe, &stripe_rules(), settings)
}

pub fn validate_security(settings: &SecuritySettings) -> ValidationResult {
    run(Service::Security, &security_rules(), settings)
}

fn run<S>(service: Service, rules: &[Box<dyn Rule<S>>], settings: &S) -> ValidationResult {
    let mut result = ValidationResult::new();
    for rule in rules {
        let before = (result.errors.len(), result.warnings.len());
        rule.check(settings, &mut result);
        if (result.errors.len(), result.warnings.len()) != before {
            debug!(%service, field = rule.field(), "rule reported findings");
        }
    }
    result
}

fn clickhouse_rules() -> Vec<Box<dyn Rule<ClickHouseSettings>>> {
    vec![
        Box::new(
            Text::required("host", "ClickHouse host", ClickHouseSettings::host)
                .charset(is_not_whitespace, Severity::Error),
        ),
        Box::new(Check::new("port", clickhouse_port)),
        Box::new(Text::required("user", "ClickHouse user", ClickHouseSettings::user)),
        Box::new(Check::new("password", clickhouse_password)),
        Box::new(
            Text::required("database", "ClickHouse database", ClickHouseSettings::database)
                .charset(is_identifier_char, Severity::Warning),
        ),
    ]
}

fn clickhouse_port(settings: &ClickHouseSettings, result: &mut ValidationResult) {
    if !(1..=65535).contains(&settings.port()) {
        result.error("ClickHouse port must be between 1 and 65535");
    }
}

fn clickhouse_password(settings: &ClickHouseSettings, result: &mut ValidationResult) {
    let password = settings.password();
    match (password.is_empty(), settings.allow_empty_password()) {
        (true, Some(false)) => result.error("ClickHouse password is missing"),
        (true, None) => result.warning(format!(
            "ClickHouse password is empty; set {}=true if this is intended",
            constants::CLICKHOUSE_ALLOW_EMPTY_PASSWORD
        )),
        (true, Some(true)) => {}
        (false, Some(true)) => result.warning(format!(
            "ClickHouse password is set but {} is true; intent is inconsistent",
            constants::CLICKHOUSE_ALLOW_EMPTY_PASSWORD
        )),
        (false, _) => {}
    }

    if !password.is_empty() && password.len() < 8 {
        result.warning("ClickHouse password is suspiciously short");
    }
}

fn miro_access_token(settings: &MiroSettings) -> &str {
    settings.access_token().expose_secret()
}

fn miro_rules() -> Vec<Box<dyn Rule<MiroSettings>>> {
    vec![
        Box::new(
            Text::required("access_token", "Miro access token", miro_access_token)
                .charset(is_token_char, Severity::Error)
                .min_len(20),
        ),
        Box::new(Check::new("board_id", miro_board_id)),
        Box::new(Check::new("api_base_url", miro_api_base_url)),
    ]
}

fn miro_board_id(settings: &MiroSettings, result: &mut ValidationResult) {
    let board_id = settings.board_id();
    if board_id.trim().is_empty() {
        result.error("Miro board ID is missing");
        return;
    }

    if !board_id.ends_with('=') {
        result.warning("Board ID might be missing trailing equals sign");
    }

    let clean = settings.normalized_board_id();
    if clean.is_empty() || !clean.chars().all(is_token_char) {
        result.error("Miro board ID has invalid format");
    }
}

fn miro_api_base_url(settings: &MiroSettings, result: &mut ValidationResult) {
    if !settings.api_base_url().starts_with("https://") {
        result.warning("Miro API base URL does not use https");
    }
}

fn stripe_rules() -> Vec<Box<dyn Rule<StripeSettings>>> {
    vec![Box::new(Check::new("api_key", stripe_api_key))]
}

fn stripe_api_key(settings: &StripeSettings, result: &mut ValidationResult) {
    let key = settings.api_key();
    if key.expose_secret().trim().is_empty() {
        result.error("Stripe API key is missing");
        return;
    }

    if key.expose_secret().starts_with("pk_") {
        result.error("Stripe API key is a publishable key; a secret key is required");
        return;
    }

    match settings.mode() {
        None => result.error(format!(
            "Stripe API key must start with {} or {}",
            constants::STRIPE_TEST_PREFIX,
            constants::STRIPE_LIVE_PREFIX
        )),
        Some(StripeMode::Live) => result.warning("Stripe API key is a live mode key"),
        Some(StripeMode::Test) => {}
    }

    if !key.expose_secret().chars().all(is_identifier_char) {
        result.error("Stripe API key has invalid format");
    }

    if key.len() < 24 {
        result.warning("Stripe API key is suspiciously short");
    }
}

fn security_rules() -> Vec<Box<dyn Rule<SecuritySettings>>> {
    vec![Box::new(Check::new("encryption_key", security_encryption_key))]
}

fn security_encryption_key(settings: &SecuritySettings, result: &mut ValidationResult) {
    let key = settings.encryption_key();
    if key.expose_secret().trim().is_empty() {
        result.error("Encryption key is missing");
        return;
    }

    match crypto::decode_key(key.expose_secret()) {
        Err(_) => result.error("Encryption key is not valid base64"),
        Ok(bytes) if bytes.len() != KEY_LEN => result.error(format!(
            "Encryption key must decode to {} bytes, got {}",
            KEY_LEN,
            bytes.len()
        )),
        Ok(bytes) => {
            if bytes.iter().all(|b| *b == bytes[0]) {
                result.warning("Encryption key has low entropy");
            }
        }
    }
}
