//! Mask command.

use crate::cli::output;
use crate::core::mask;
use crate::error::Result;

/// Print `value` masked, keeping the last `visible` characters.
pub fn execute(value: &str, visible: i64) -> Result<()> {
    output::data(&mask::mask(value, visible)?);
    Ok(())
}
