//! Domain types.

mod env;
mod secret;
mod service;

pub use env::EnvSnapshot;
pub use secret::SecretValue;
pub use service::Service;
