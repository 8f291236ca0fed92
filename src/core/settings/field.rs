//! Field resolution against an environment snapshot.
//!
//! Each helper takes the canonical variable name, applies the default when
//! the variable is absent, and coerces the text to the field's type.
//! Absent means not present at all: an empty string is a value for text and
//! secret fields, and falls back to the default for typed fields.

use tracing::debug;

use crate::core::domain::{EnvSnapshot, SecretValue};
use crate::error::ConfigError;

pub(crate) fn required_string(env: &EnvSnapshot, var: &'static str) -> Result<String, ConfigError> {
    env.get(var)
        .map(str::to_string)
        .ok_or(ConfigError::Missing { var })
}

pub(crate) fn string_or(env: &EnvSnapshot, var: &'static str, default: &str) -> String {
    match env.get(var) {
        Some(value) => value.to_string(),
        None => {
            debug!(var, "using default");
            default.to_string()
        }
    }
}

pub(crate) fn required_secret(
    env: &EnvSnapshot,
    var: &'static str,
) -> Result<SecretValue, ConfigError> {
    env.get(var)
        .map(SecretValue::from)
        .ok_or(ConfigError::Missing { var })
}

pub(crate) fn secret_or_empty(env: &EnvSnapshot, var: &'static str) -> SecretValue {
    match env.get(var) {
        Some(value) => SecretValue::from(value),
        None => {
            debug!(var, "using default");
            SecretValue::default()
        }
    }
}

pub(crate) fn integer_or(
    env: &EnvSnapshot,
    var: &'static str,
    default: i64,
) -> Result<i64, ConfigError> {
    match non_empty(env, var) {
        Some(raw) => raw.parse().map_err(|_| ConfigError::Invalid {
            var,
            expected: "integer",
        }),
        None => {
            debug!(var, default, "using default");
            Ok(default)
        }
    }
}

pub(crate) fn optional_bool(
    env: &EnvSnapshot,
    var: &'static str,
) -> Result<Option<bool>, ConfigError> {
    non_empty(env, var).map(|raw| parse_bool(var, raw)).transpose()
}

pub(crate) fn bool_or(env: &EnvSnapshot, var: &'static str, default: bool) -> Result<bool, ConfigError> {
    Ok(optional_bool(env, var)?.unwrap_or(default))
}

fn non_empty<'a>(env: &'a EnvSnapshot, var: &str) -> Option<&'a str> {
    env.get(var).map(str::trim).filter(|v| !v.is_empty())
}

fn parse_bool(var: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid {
            var,
            expected: "boolean",
        }),
    }
}
