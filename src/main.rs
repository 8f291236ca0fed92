//! Credgate - typed service settings and credential protection.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use credgate::cli::output;
use credgate::cli::{execute, Cli};
use credgate::error::{ConfigError, Error};

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so command output stays pipeable
    let filter = EnvFilter::try_from_env("CREDGATE_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("credgate=debug")
        } else {
            EnvFilter::new("credgate=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    match execute(cli) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            let suggestion = match &e {
                Error::Config(ConfigError::Missing { var }) => {
                    Some(format!("set {} in the environment or .env", var))
                }
                Error::KeyLength { .. } | Error::KeyEncoding => {
                    Some("generate one with: credgate keygen".to_string())
                }
                _ => None,
            };

            output::error(&e.to_string());
            if let Some(hint) = suggestion {
                output::hint(&hint);
            }
            std::process::exit(1);
        }
    }
}
