//! Show command - print loaded settings with secrets masked.

use serde_json::{Map, Value};

use crate::cli::output;
use crate::core::constants::DEFAULT_VISIBLE_CHARS;
use crate::core::domain::{EnvSnapshot, SecretValue, Service};
use crate::core::settings::{self, Settings};
use crate::error::Result;

/// Print settings for every service (or one).
///
/// Services that fail to load are shown with their error instead.
pub fn execute(env: &EnvSnapshot, service: Option<Service>, json: bool) -> Result<()> {
    let services: Vec<Service> = match service {
        Some(s) => vec![s],
        None => Service::ALL.to_vec(),
    };

    let mut out = Map::new();
    for service in services {
        let fields = match settings::load(service, env) {
            Ok(settings) => describe(&settings)?,
            Err(e) => vec![("error", e.to_string())],
        };

        if json {
            let obj: Map<String, Value> = fields
                .into_iter()
                .map(|(k, v)| (k.to_string(), Value::String(v)))
                .collect();
            out.insert(service.name().to_string(), Value::Object(obj));
        } else {
            output::section(service.label());
            for (label, value) in fields {
                output::kv(&format!("{}:", label), value);
            }
        }
    }

    if json {
        output::data(&serde_json::to_string_pretty(&Value::Object(out))?);
    }
    Ok(())
}

/// Display-safe field list for one service.
fn describe(settings: &Settings) -> Result<Vec<(&'static str, String)>> {
    Ok(match settings {
        Settings::ClickHouse(s) => vec![
            ("host", s.host().to_string()),
            ("port", s.port().to_string()),
            ("user", s.user().to_string()),
            ("password", masked(s.password())?),
            ("database", s.database().to_string()),
            ("secure", s.secure().to_string()),
            ("dsn", s.redacted_dsn()),
        ],
        Settings::Miro(s) => vec![
            ("access_token", masked(s.access_token())?),
            ("board_id", s.board_id().to_string()),
            ("api_base_url", s.api_base_url().to_string()),
        ],
        Settings::Stripe(s) => vec![
            ("api_key", masked(s.api_key())?),
            (
                "mode",
                s.mode()
                    .map(|m| format!("{:?}", m).to_lowercase())
                    .unwrap_or_else(|| "unknown".to_string()),
            ),
        ],
        // The key itself is never shown, not even its tail.
        Settings::Security(s) => vec![(
            "key_fingerprint",
            s.key_fingerprint()
                .unwrap_or_else(|| "(undecodable)".to_string()),
        )],
    })
}

fn masked(secret: &SecretValue) -> Result<String> {
    if secret.is_empty() {
        return Ok("(empty)".to_string());
    }
    // Short secrets would be fully revealed by the default suffix.
    let visible = if (secret.len() as i64) <= DEFAULT_VISIBLE_CHARS * 2 {
        0
    } else {
        DEFAULT_VISIBLE_CHARS
    };
    secret.masked(visible)
}
