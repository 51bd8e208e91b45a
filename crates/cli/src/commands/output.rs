//! Rendering of calculation results for stdout.

use anyhow::Result;
use chip_settle_core::{AppConfig, CalculationResult, OutputFormat, ReportFormatter};

/// Resolves the output format from an optional CLI flag, falling back to config.
///
/// # Errors
/// Returns an error if the flag is not a known format.
pub fn resolve_format(flag: Option<&str>, config: &AppConfig) -> Result<OutputFormat> {
    match flag {
        Some(raw) => raw.parse(),
        None => Ok(config.output.format),
    }
}

/// Renders a calculation in the requested format.
///
/// # Errors
/// Returns an error if JSON serialization fails.
pub fn render(
    format: OutputFormat,
    event_name: &str,
    coefficient: f64,
    result: &CalculationResult,
) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(ReportFormatter::format(event_name, coefficient, result)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(result)?),
    }
}
