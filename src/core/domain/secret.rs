//! Secret value type.
//!
//! Wraps a sensitive string so it cannot leak through formatting,
//! serialization or accidental comparison.

use secrecy::{ExposeSecret, SecretString};
use serde::{Serialize, Serializer};
use subtle::ConstantTimeEq;

use crate::core::constants::REDACTED;
use crate::core::mask;
use crate::error::Result;

/// A sensitive string.
///
/// `Display`, `Debug` and `Serialize` all emit a fixed placeholder that
/// reveals neither the content nor its length. The raw value is only
/// reachable through [`SecretValue::expose_secret`]. Memory is wiped on drop.
pub struct SecretValue(SecretString);

impl SecretValue {
    /// Wrap a raw string.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(SecretString::from(raw.into()))
    }

    /// Raw content. Every call site is a deliberate disclosure.
    pub fn expose_secret(&self) -> &str {
        self.0.expose_secret()
    }

    /// Whether the secret is the empty string
    pub fn is_empty(&self) -> bool {
        self.expose_secret().is_empty()
    }

    /// Length in characters
    pub fn len(&self) -> usize {
        self.expose_secret().chars().count()
    }

    /// Masked form keeping the last `visible_chars` characters.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` if `visible_chars` is negative.
    pub fn masked(&self, visible_chars: i64) -> Result<String> {
        mask::mask(self.expose_secret(), visible_chars)
    }

    /// Compare two secrets in constant time over their content.
    ///
    /// Only the lengths are compared up front.
    pub fn matches(&self, other: &SecretValue) -> bool {
        let a = self.expose_secret().as_bytes();
        let b = other.expose_secret().as_bytes();
        a.len() == b.len() && bool::from(a.ct_eq(b))
    }
}

impl Clone for SecretValue {
    fn clone(&self) -> Self {
        Self::new(self.expose_secret())
    }
}

impl Default for SecretValue {
    fn default() -> Self {
        Self::new(String::new())
    }
}

impl From<String> for SecretValue {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

impl From<&str> for SecretValue {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl std::fmt::Display for SecretValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(REDACTED)
    }
}

impl std::fmt::Debug for SecretValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SecretValue({})", REDACTED)
    }
}

impl Serialize for SecretValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(REDACTED)
    }
}
