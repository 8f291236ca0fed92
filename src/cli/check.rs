//! Check command - validate settings and print the report.

use crate::cli::output;
use crate::core::domain::{EnvSnapshot, Service};
use crate::core::settings::SettingsBundle;
use crate::core::validation::{self, ValidationResult};
use crate::error::Result;

/// Validate every service (or one) and print the report.
///
/// Returns whether everything reported is valid.
pub fn execute(env: &EnvSnapshot, service: Option<Service>, json: bool) -> Result<bool> {
    let bundle = SettingsBundle::load(env);
    let report = validation::validate_all(&bundle);

    let selected: Vec<(Service, &ValidationResult)> = report
        .iter()
        .filter(|(s, _)| service.map_or(true, |only| only == *s))
        .collect();
    let valid = selected.iter().all(|(_, r)| r.is_valid());

    if json {
        let out = match selected.as_slice() {
            [(_, result)] if service.is_some() => serde_json::to_string_pretty(result)?,
            _ => serde_json::to_string_pretty(&report)?,
        };
        output::data(&out);
        return Ok(valid);
    }

    for (service, result) in &selected {
        print_result(*service, result);
    }

    println!();
    let errors: usize = selected.iter().map(|(_, r)| r.errors().len()).sum();
    let warnings: usize = selected.iter().map(|(_, r)| r.warnings().len()).sum();
    if valid {
        output::success(&format!("configuration valid ({} warnings)", warnings));
    } else {
        output::failure(&format!(
            "configuration invalid ({} errors, {} warnings)",
            errors, warnings
        ));
    }

    Ok(valid)
}

fn print_result(service: Service, result: &ValidationResult) {
    output::section(service.label());

    if result.is_valid() {
        output::success("valid");
    }
    for error in result.errors() {
        output::failure(error);
    }
    for warning in result.warnings() {
        output::warn(warning);
    }
}
