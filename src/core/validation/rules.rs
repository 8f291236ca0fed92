//! Validation rule abstraction.
//!
//! A rule inspects one field of a settings type and appends errors or
//! warnings to a result. Services compose rules into ordered lists, one
//! entry per field in declaration order, which keeps output deterministic.

use super::ValidationResult;

/// How much a finding matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Makes the result invalid.
    Error,
    /// Reported, but the result stays valid.
    Warning,
}

/// A check over one field of `S`.
pub trait Rule<S> {
    /// Field the rule inspects.
    fn field(&self) -> &'static str;

    /// Append findings for `settings` to `result`.
    fn check(&self, settings: &S, result: &mut ValidationResult);
}

/// Checks for a text (or secret) field.
///
/// An empty value stops the remaining checks: it is reported as missing
/// when the field is required and skipped otherwise.
pub struct Text<S> {
    field: &'static str,
    label: &'static str,
    get: fn(&S) -> &str,
    required: bool,
    charset: Option<(fn(char) -> bool, Severity)>,
    min_len: Option<usize>,
}

impl<S> Text<S> {
    /// A field that must not be empty.
    pub fn required(field: &'static str, label: &'static str, get: fn(&S) -> &str) -> Self {
        Self {
            field,
            label,
            get,
            required: true,
            charset: None,
            min_len: None,
        }
    }

    /// A field that may be empty.
    pub fn optional(field: &'static str, label: &'static str, get: fn(&S) -> &str) -> Self {
        Self {
            required: false,
            ..Self::required(field, label, get)
        }
    }

    /// Report characters outside `allowed` as an invalid format.
    pub fn charset(mut self, allowed: fn(char) -> bool, severity: Severity) -> Self {
        self.charset = Some((allowed, severity));
        self
    }

    /// Warn when the value is shorter than `min` characters.
    pub fn min_len(mut self, min: usize) -> Self {
        self.min_len = Some(min);
        self
    }
}

impl<S> Rule<S> for Text<S> {
    fn field(&self) -> &'static str {
        self.field
    }

    fn check(&self, settings: &S, result: &mut ValidationResult) {
        let value = (self.get)(settings);

        if value.trim().is_empty() {
            if self.required {
                result.error(format!("{} is missing", self.label));
            }
            return;
        }

        if let Some((allowed, severity)) = self.charset {
            if !value.chars().all(allowed) {
                result.push(severity, format!("{} has invalid format", self.label));
            }
        }

        if let Some(min) = self.min_len {
            if value.chars().count() < min {
                result.warning(format!("{} is suspiciously short", self.label));
            }
        }
    }
}

/// A field check written as a plain function, for rules that need more
/// than one field or service-specific logic.
pub struct Check<S> {
    field: &'static str,
    check: fn(&S, &mut ValidationResult),
}

impl<S> Check<S> {
    /// Wrap `check` as the rule for `field`.
    pub fn new(field: &'static str, check: fn(&S, &mut ValidationResult)) -> Self {
        Self { field, check }
    }
}

impl<S> Rule<S> for Check<S> {
    fn field(&self) -> &'static str {
        self.field
    }

    fn check(&self, settings: &S, result: &mut ValidationResult) {
        (self.check)(settings, result)
    }
}

/// Letters, digits, `_` and `-`.
pub fn is_token_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

/// Letters, digits and `_`.
pub fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Anything but whitespace.
pub fn is_not_whitespace(c: char) -> bool {
    !c.is_whitespace()
}
