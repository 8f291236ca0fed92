//! Authenticated payload encryption.
//!
//! Tokens have the shape `cg1.<nonce>.<ciphertext>`, both parts base64url
//! without padding. `cg1` names the scheme (ChaCha20-Poly1305, 96-bit random
//! nonce, 128-bit tag) and is bound as associated data, so any change to
//! the token, or a different key, fails authentication instead of producing
//! garbage.
//!
//! The sealed plaintext is a JSON document carrying the payload together
//! with its issue time and optional expiry.

use base64::engine::general_purpose::{STANDARD, STANDARD_NO_PAD, URL_SAFE, URL_SAFE_NO_PAD};
use base64::Engine;
use chacha20poly1305::aead::{Aead, AeadCore, KeyInit, Payload};
use chacha20poly1305::{ChaCha20Poly1305, Key, Nonce};
use chrono::Utc;
use rand::rngs::OsRng;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use sha2::{Digest, Sha256};
use tracing::debug;
use zeroize::Zeroizing;

use crate::core::constants::{KEY_LEN, TOKEN_VERSION};
use crate::core::settings::SecuritySettings;
use crate::error::{Error, Result};

const NONCE_LEN: usize = 12;

/// A JSON object payload.
pub type Claims = Map<String, Value>;

#[derive(Serialize)]
struct SealedRef<'a> {
    iat: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    exp: Option<i64>,
    data: &'a Claims,
}

#[derive(Deserialize)]
struct Sealed {
    #[allow(dead_code)]
    iat: i64,
    #[serde(default)]
    exp: Option<i64>,
    data: Claims,
}

/// Encrypts and decrypts payloads with a fixed 32-byte key.
///
/// Holds no mutable state, so one instance can serve concurrent callers.
pub struct CryptoManager {
    key: Zeroizing<[u8; KEY_LEN]>,
    fingerprint: String,
}

impl CryptoManager {
    /// Build a manager from the configured `ENCRYPTION_KEY`.
    ///
    /// # Errors
    ///
    /// Returns `Error::KeyEncoding` if the key is not base64, or
    /// `Error::KeyLength` if it does not decode to exactly 32 bytes.
    pub fn from_settings(settings: &SecuritySettings) -> Result<Self> {
        let bytes = decode_key(settings.encryption_key().expose_secret())?;
        Self::from_key_bytes(&bytes)
    }

    /// Build a manager from raw key bytes.
    ///
    /// The key is never truncated or padded.
    ///
    /// # Errors
    ///
    /// Returns `Error::KeyLength` unless `bytes` is exactly 32 bytes long.
    pub fn from_key_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != KEY_LEN {
            return Err(Error::KeyLength {
                actual: bytes.len(),
            });
        }

        let mut key = Zeroizing::new([0u8; KEY_LEN]);
        key.copy_from_slice(bytes);
        let fingerprint = fingerprint(bytes);
        debug!(key = %fingerprint, "crypto manager ready");

        Ok(Self { key, fingerprint })
    }

    /// Short SHA-256 fingerprint of the key, safe to log.
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    /// Encrypt a payload into a token with no expiry.
    ///
    /// # Errors
    ///
    /// Returns `Error::Encryption` if sealing fails.
    pub fn encrypt(&self, payload: &Claims) -> Result<String> {
        self.seal(payload, None)
    }

    /// Encrypt a payload into a token that stops decrypting after `ttl`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` for a non-positive `ttl`.
    pub fn encrypt_with_ttl(&self, payload: &Claims, ttl: chrono::Duration) -> Result<String> {
        if ttl <= chrono::Duration::zero() {
            return Err(Error::InvalidArgument(
                "ttl must be positive".to_string(),
            ));
        }
        let exp = Utc::now().timestamp().saturating_add(ttl.num_seconds().max(1));
        self.seal(payload, Some(exp))
    }

    /// Verify and decrypt a token.
    ///
    /// Nothing is returned unless the authentication tag verifies.
    ///
    /// # Errors
    ///
    /// Returns `Error::Decryption` for malformed or unknown-version tokens,
    /// a wrong key, any tampering, or an elapsed expiry.
    pub fn decrypt(&self, token: &str) -> Result<Claims> {
        let mut parts = token.trim().split('.');
        let (version, nonce, body) = match (parts.next(), parts.next(), parts.next(), parts.next())
        {
            (Some(v), Some(n), Some(b), None) => (v, n, b),
            _ => return Err(Error::Decryption("malformed token".to_string())),
        };

        if version != TOKEN_VERSION {
            return Err(Error::Decryption("unsupported token version".to_string()));
        }

        let nonce = URL_SAFE_NO_PAD
            .decode(nonce)
            .map_err(|_| Error::Decryption("malformed token nonce".to_string()))?;
        if nonce.len() != NONCE_LEN {
            return Err(Error::Decryption("malformed token nonce".to_string()));
        }
        let body = URL_SAFE_NO_PAD
            .decode(body)
            .map_err(|_| Error::Decryption("malformed token body".to_string()))?;

        let plaintext = self
            .cipher()
            .decrypt(
                Nonce::from_slice(&nonce),
                Payload {
                    msg: &body,
                    aad: TOKEN_VERSION.as_bytes(),
                },
            )
            .map_err(|_| {
                Error::Decryption("authentication failed: wrong key or tampered token".to_string())
            })?;
        let plaintext = Zeroizing::new(plaintext);

        let sealed: Sealed = serde_json::from_slice(&plaintext)
            .map_err(|_| Error::Decryption("invalid payload".to_string()))?;

        if let Some(exp) = sealed.exp {
            if Utc::now().timestamp() >= exp {
                return Err(Error::Decryption("token expired".to_string()));
            }
        }

        Ok(sealed.data)
    }

    fn seal(&self, payload: &Claims, exp: Option<i64>) -> Result<String> {
        let sealed = SealedRef {
            iat: Utc::now().timestamp(),
            exp,
            data: payload,
        };
        let plaintext = Zeroizing::new(serde_json::to_vec(&sealed)?);

        let nonce = ChaCha20Poly1305::generate_nonce(&mut OsRng);
        let ciphertext = self
            .cipher()
            .encrypt(
                &nonce,
                Payload {
                    msg: &plaintext,
                    aad: TOKEN_VERSION.as_bytes(),
                },
            )
            .map_err(|e| Error::Encryption(e.to_string()))?;

        debug!(bytes = plaintext.len(), "payload sealed");
        Ok(format!(
            "{}.{}.{}",
            TOKEN_VERSION,
            URL_SAFE_NO_PAD.encode(nonce),
            URL_SAFE_NO_PAD.encode(ciphertext)
        ))
    }

    fn cipher(&self) -> ChaCha20Poly1305 {
        ChaCha20Poly1305::new(Key::from_slice(self.key.as_slice()))
    }
}

impl std::fmt::Debug for CryptoManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CryptoManager")
            .field("fingerprint", &self.fingerprint)
            .finish_non_exhaustive()
    }
}

/// Decode key text as base64, accepting standard and URL-safe alphabets
/// with or without padding.
///
/// # Errors
///
/// Returns `Error::KeyEncoding` if no alphabet accepts the text.
pub fn decode_key(text: &str) -> Result<Zeroizing<Vec<u8>>> {
    let text = text.trim();
    [&STANDARD, &STANDARD_NO_PAD, &URL_SAFE, &URL_SAFE_NO_PAD]
        .iter()
        .find_map(|engine| engine.decode(text).ok())
        .map(Zeroizing::new)
        .ok_or(Error::KeyEncoding)
}

/// Generate a fresh random key as base64 text.
pub fn generate_key() -> String {
    let mut bytes = Zeroizing::new([0u8; KEY_LEN]);
    OsRng.fill_bytes(bytes.as_mut_slice());
    STANDARD.encode(bytes.as_slice())
}

/// First 16 hex characters of the SHA-256 digest of `bytes`.
pub fn fingerprint(bytes: &[u8]) -> String {
    Sha256::digest(bytes)
        .iter()
        .take(8)
        .map(|b| format!("{:02x}", b))
        .collect()
}
