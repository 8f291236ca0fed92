//! Core library components.
//!
//! Settings loading, secret handling, payload encryption and validation.
//! Nothing here performs network I/O or keeps process-wide state.

pub mod constants;
pub mod crypto;
pub mod domain;
pub mod mask;
pub mod settings;
pub mod validation;
