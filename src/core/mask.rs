//! Length-preserving redaction of sensitive strings.

use crate::core::constants::MASK_CHAR;
use crate::error::{Error, Result};

/// Mask all but the last `visible_chars` characters of `value`.
///
/// Lengths are counted in characters, not bytes, so the output always has
/// as many characters as the input.
///
/// - `visible_chars == 0` redacts everything
/// - `visible_chars >= len` returns the value unchanged
///
/// # Errors
///
/// Returns `Error::InvalidArgument` if `visible_chars` is negative.
///
/// # Example
///
/// ```
/// assert_eq!(credgate::mask("1234567890", 4).unwrap(), "******7890");
/// ```
pub fn mask(value: &str, visible_chars: i64) -> Result<String> {
    if visible_chars < 0 {
        return Err(Error::InvalidArgument(format!(
            "visible_chars must be non-negative, got {}",
            visible_chars
        )));
    }

    let len = value.chars().count();
    let visible = usize::try_from(visible_chars).unwrap_or(usize::MAX);
    if visible >= len {
        return Ok(value.to_string());
    }

    let hidden = len - visible;
    let mut out = String::with_capacity(value.len());
    for (i, ch) in value.chars().enumerate() {
        if i < hidden {
            out.push(MASK_CHAR);
        } else {
            out.push(ch);
        }
    }
    Ok(out)
}
