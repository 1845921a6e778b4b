use super::models::InputSource;
use crate::report::read_report_payload;
use crate::stats::read_stats;
use crate::utils::config::{load_config, AnalyzerConfig, PAYLOAD_GLOBAL};
use crate::view::{load, DecodedData};
use anyhow::{Context, Result};
use log::debug;
use std::path::PathBuf;

/// Load the analyzer config, or the defaults when no file is given
pub fn load_analyzer_config(path: Option<&PathBuf>) -> Result<AnalyzerConfig> {
    match path {
        Some(path) => {
            debug!("Loading config from: {}", path.display());
            load_config(path)
                .with_context(|| format!("Failed to load config {}", path.display()))
        }
        None => Ok(AnalyzerConfig::default()),
    }
}

/// Build the view model from a report or a raw stats file
pub fn load_data(input: &InputSource, config: &AnalyzerConfig) -> Result<DecodedData> {
    match input {
        InputSource::Report(path) => {
            let encoded = read_report_payload(path)
                .with_context(|| format!("Failed to read report {}", path.display()))?;
            load(&encoded, config).context("Failed to load embedded payload")
        }
        InputSource::Stats(path) => {
            let payload = read_stats(path, config)
                .with_context(|| format!("Failed to read stats {}", path.display()))?;
            DecodedData::from_payload(payload, config).context("Failed to aggregate module sizes")
        }
    }
}

/// Fail early when the input file is missing
pub fn validate_input(input: &InputSource) -> Result<()> {
    let path = input.path();

    if path.as_os_str().is_empty() {
        anyhow::bail!("Input path cannot be empty");
    }

    if !path.is_file() {
        anyhow::bail!("Input file not found: {}", path.display());
    }

    Ok(())
}

/// Display version information
pub fn display_version() {
    println!("webpack-treemap v{}", env!("CARGO_PKG_VERSION"));
    println!("Payload global: {}", PAYLOAD_GLOBAL);
    println!();
    println!("Size-breakdown treemaps for webpack build statistics.");
}
