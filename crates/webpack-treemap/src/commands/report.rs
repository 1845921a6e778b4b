//! Report command implementation.
//!
//! The report command:
//! 1. Reads and normalizes `stats.json`
//! 2. Encodes the payload
//! 3. Renders the HTML report
//! 4. Writes it next to the bundle output

use super::models::ReportArgs;
use super::utils::load_analyzer_config;
use crate::codec;
use crate::report::{render_report, write_report};
use crate::stats::{read_stats, Payload};
use crate::utils::config::AnalyzerConfig;
use crate::utils::format::format_size;
use anyhow::{Context, Result};
use log::{debug, info};
use std::path::PathBuf;
use std::time::Instant;

/// Execute the report command
///
/// **Public** - main entry point called from main.rs
///
/// # Returns
/// Path of the written report
///
/// # Errors
/// * Stats read or parse failures
/// * Payload encoding failures
/// * File write errors
///
/// # Example
/// ```ignore
/// let args = ReportArgs {
///     stats: PathBuf::from("dist/stats.json"),
///     output: None,
///     config: None,
/// };
///
/// execute_report(args)?;
/// ```
pub fn execute_report(args: ReportArgs) -> Result<PathBuf> {
    let start_time = Instant::now();

    let config = load_analyzer_config(args.config.as_ref())?;

    info!("Normalizing stats...");
    let payload = read_stats(&args.stats, &config)
        .with_context(|| format!("Failed to read stats {}", args.stats.display()))?;

    info!("Encoding payload...");
    let encoded = codec::encode(&payload).context("Failed to encode payload")?;
    debug!(
        "Payload: {} chars ({})",
        encoded.len(),
        format_size(encoded.len() as u64)
    );

    let html = render_report(&encoded, &config);
    let output_path = resolve_output_path(&args, &payload, &config);

    write_report(&html, &output_path).context("Failed to write report HTML")?;
    info!("✓ Report written to: {}", output_path.display());

    info!(
        "Report completed in {:.2}s",
        start_time.elapsed().as_secs_f64()
    );
    Ok(output_path)
}

/// Explicit `--output` wins, then the build's output directory, then `.`
fn resolve_output_path(args: &ReportArgs, payload: &Payload, config: &AnalyzerConfig) -> PathBuf {
    if let Some(output) = &args.output {
        return output.clone();
    }

    payload
        .output_path
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
        .join(&config.filename)
}

/// Validate report arguments
///
/// **Public** - can be called before execute_report for early validation
pub fn validate_report_args(args: &ReportArgs) -> Result<()> {
    if args.stats.as_os_str().is_empty() {
        anyhow::bail!("Stats path cannot be empty");
    }

    if !args.stats.is_file() {
        anyhow::bail!("Stats file not found: {}", args.stats.display());
    }

    if let Some(output) = &args.output {
        if output.as_os_str().is_empty() {
            anyhow::bail!("Output path cannot be empty");
        }
    }

    if let Some(config) = &args.config {
        if !config.is_file() {
            anyhow::bail!("Config file not found: {}", config.display());
        }
    }

    Ok(())
}
