//! Command-line interface.

pub mod check;
pub mod mask;
pub mod output;
pub mod seal;
pub mod show;

use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::constants;
use crate::core::domain::{EnvSnapshot, Service};
use crate::error::{Error, Result};

/// Credgate - typed service settings and credential protection.
#[derive(Parser)]
#[command(
    name = "credgate",
    about = "Validate service settings and protect credentials",
    version
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Env file layered over the process environment (default: .env if present)
    #[arg(long, global = true, env = "CREDGATE_ENV_FILE")]
    pub env_file: Option<PathBuf>,

    /// Ignore env files and read only the process environment
    #[arg(long, global = true, conflicts_with = "env_file")]
    pub no_env_file: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Validate settings and print a report
    Check {
        /// Only report this service
        service: Option<Service>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show loaded settings with secrets masked
    Show {
        /// Only show this service
        service: Option<Service>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Encrypt a JSON object into a token
    Encrypt {
        /// JSON object (read from stdin if omitted)
        payload: Option<String>,
        /// Expire the token after this many seconds
        #[arg(long)]
        ttl: Option<i64>,
    },

    /// Decrypt a token back into JSON
    Decrypt {
        /// Token (read from stdin if omitted)
        token: Option<String>,
    },

    /// Mask a value, leaving the last characters visible
    Mask {
        /// Value to mask
        value: String,
        /// Number of trailing characters to leave visible
        #[arg(long, short = 'n', default_value_t = constants::DEFAULT_VISIBLE_CHARS, allow_negative_numbers = true)]
        visible: i64,
    },

    /// Generate a new base64 encryption key
    Keygen,
}

/// Execute a command.
///
/// Returns `Ok(false)` when the command ran but found problems (failed checks).
pub fn execute(cli: Cli) -> Result<bool> {
    use Command::*;

    let Cli {
        env_file,
        no_env_file,
        command,
        ..
    } = cli;
    let env = || snapshot(env_file.as_deref(), no_env_file);

    match command {
        Check { service, json } => check::execute(&env()?, service, json),
        Show { service, json } => show::execute(&env()?, service, json).map(|_| true),
        Encrypt { payload, ttl } => seal::encrypt(&env()?, payload, ttl).map(|_| true),
        Decrypt { token } => seal::decrypt(&env()?, token).map(|_| true),
        Mask { value, visible } => mask::execute(&value, visible).map(|_| true),
        Keygen => seal::keygen().map(|_| true),
    }
}

/// Capture the process environment and layer the env file over it.
///
/// An explicitly named file must exist; the default `.env` is optional.
pub fn snapshot(env_file: Option<&Path>, no_env_file: bool) -> Result<EnvSnapshot> {
    let env = EnvSnapshot::from_process();
    if no_env_file {
        return Ok(env);
    }

    match env_file {
        Some(path) => Ok(env.with_file_override(path)?),
        None => {
            let default = Path::new(constants::ENV_FILE);
            if default.exists() {
                Ok(env.with_file_override(default)?)
            } else {
                debug!("no env file found");
                Ok(env)
            }
        }
    }
}

/// Use the argument if given, otherwise read all of stdin.
fn arg_or_stdin(arg: Option<String>, what: &str) -> Result<String> {
    let input = match arg {
        Some(value) => value,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(Error::InvalidArgument(format!("no {} given", what)));
    }
    Ok(trimmed.to_string())
}
