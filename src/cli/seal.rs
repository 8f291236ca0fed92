//! Encrypt, decrypt and keygen commands.

use serde_json::Value;
use tracing::debug;

use crate::cli::{arg_or_stdin, output};
use crate::core::crypto::{self, Claims, CryptoManager};
use crate::core::domain::EnvSnapshot;
use crate::core::settings::SecuritySettings;
use crate::error::{Error, Result};

/// Encrypt a JSON object into a token and print it.
pub fn encrypt(env: &EnvSnapshot, payload: Option<String>, ttl: Option<i64>) -> Result<()> {
    let manager = manager(env)?;
    let claims = parse_claims(&arg_or_stdin(payload, "payload")?)?;

    let token = match ttl {
        Some(seconds) => manager.encrypt_with_ttl(&claims, ttl_duration(seconds)?)?,
        None => manager.encrypt(&claims)?,
    };
    output::data(&token);
    Ok(())
}

/// Decrypt a token and print its payload as JSON.
pub fn decrypt(env: &EnvSnapshot, token: Option<String>) -> Result<()> {
    let manager = manager(env)?;
    let claims = manager.decrypt(&arg_or_stdin(token, "token")?)?;
    output::data(&serde_json::to_string_pretty(&claims)?);
    Ok(())
}

/// Print a fresh random key.
pub fn keygen() -> Result<()> {
    output::data(&crypto::generate_key());
    Ok(())
}

fn manager(env: &EnvSnapshot) -> Result<CryptoManager> {
    let settings = SecuritySettings::from_env(env)?;
    let manager = CryptoManager::from_settings(&settings)?;
    debug!(key = %manager.fingerprint(), "using encryption key");
    Ok(manager)
}

fn ttl_duration(seconds: i64) -> Result<chrono::Duration> {
    chrono::Duration::try_seconds(seconds)
        .ok_or_else(|| Error::InvalidArgument("ttl out of range".to_string()))
}

fn parse_claims(input: &str) -> Result<Claims> {
    match serde_json::from_str::<Value>(input)? {
        Value::Object(claims) => Ok(claims),
        _ => Err(Error::InvalidArgument(
            "payload must be a JSON object".to_string(),
        )),
    }
}
