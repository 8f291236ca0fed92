//! Environment snapshot type.
//!
//! An immutable copy of the variables settings are loaded from. Capturing
//! the environment once keeps loading pure and lets tests build snapshots
//! without touching process state.

use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

use crate::error::ConfigError;

/// Variable name to value mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSnapshot {
    vars: BTreeMap<String, String>,
}

impl EnvSnapshot {
    /// Empty snapshot
    pub fn new() -> Self {
        Self::default()
    }

    /// Capture the current process environment.
    ///
    /// Variables whose name or value is not valid unicode are skipped.
    pub fn from_process() -> Self {
        let vars: BTreeMap<String, String> = std::env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
            .collect();
        debug!(vars = vars.len(), "captured process environment");
        Self { vars }
    }

    /// Build a snapshot from explicit pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Return a new snapshot with the entries of a dotenv file layered on top.
    ///
    /// Values from the file replace values already in the snapshot.
    /// Skips empty lines and comments, strips an optional `export ` prefix,
    /// and supports single- and double-quoted values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ReadEnvFile` if the file cannot be read.
    pub fn with_file_override(&self, path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents =
            std::fs::read_to_string(path).map_err(|source| ConfigError::ReadEnvFile {
                path: path.display().to_string(),
                source,
            })?;

        let mut vars = self.vars.clone();
        let mut count = 0usize;
        for (key, value) in parse_dotenv(&contents) {
            vars.insert(key, value);
            count += 1;
        }
        debug!(path = %path.display(), entries = count, "applied env file override");

        Ok(Self { vars })
    }

    /// Get a value by name
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    /// Copy of this snapshot with one variable set
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }

    /// Copy of this snapshot with one variable removed
    pub fn without(mut self, name: &str) -> Self {
        self.vars.remove(name);
        self
    }

    /// Number of variables
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Whether empty
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

/// Parse dotenv-formatted text into ordered key/value pairs.
fn parse_dotenv(contents: &str) -> Vec<(String, String)> {
    let mut entries = Vec::new();

    for line in contents.lines() {
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let line = line.strip_prefix("export ").unwrap_or(line);
        if let Some((key, value)) = line.split_once('=') {
            let key = key.trim();
            if key.is_empty() {
                continue;
            }
            entries.push((key.to_string(), parse_env_value(value.trim())));
        }
    }

    entries
}

fn parse_env_value(raw: &str) -> String {
    if raw.len() >= 2 && raw.starts_with('"') && raw.ends_with('"') {
        return unescape_double_quoted(&raw[1..raw.len() - 1]);
    }

    if raw.len() >= 2 && raw.starts_with('\'') && raw.ends_with('\'') {
        return raw[1..raw.len() - 1].to_string();
    }

    raw.to_string()
}

fn unescape_double_quoted(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }

        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('"') => out.push('"'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }

    out
}
