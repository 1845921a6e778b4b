//! HTML report rendering and payload extraction.
//!
//! The report is a static page: the encoded payload is inlined as a string
//! literal assigned to `window.WebpackData`, and the viewer bundle decodes it
//! in the browser.

use super::validate_path;
use crate::utils::config::{
    AnalyzerConfig, GENERATED_AT_MARKER, PAYLOAD_GLOBAL, PAYLOAD_SCRIPT_MARKER,
    SIDER_COLLAPSED_KEY, SIDER_COLLAPSED_MARKER, SIDER_WIDTH_KEY, SIDER_WIDTH_MARKER,
    VIEWER_SCRIPT_MARKER,
};
use crate::utils::error::OutputError;
use chrono::Utc;
use log::{debug, info};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

const TEMPLATE: &str = include_str!("../../static/report.html");

/// Render the report page around an encoded payload
///
/// **Public** - main entry point for report rendering
///
/// # Arguments
/// * `encoded` - Output of [`codec::encode`](crate::codec::encode)
/// * `config` - Supplies the viewer bundle URL
pub fn render_report(encoded: &str, config: &AnalyzerConfig) -> String {
    let inline_payload = format!("<script>{} = '{}'", PAYLOAD_GLOBAL, encoded);

    TEMPLATE
        .replacen(VIEWER_SCRIPT_MARKER, &config.viewer_script, 1)
        .replacen(PAYLOAD_SCRIPT_MARKER, &inline_payload, 1)
        .replacen(GENERATED_AT_MARKER, &Utc::now().to_rfc3339(), 1)
        .replacen(SIDER_WIDTH_MARKER, SIDER_WIDTH_KEY, 1)
        .replacen(SIDER_COLLAPSED_MARKER, SIDER_COLLAPSED_KEY, 1)
}

/// Find the encoded payload inside a rendered report
///
/// # Errors
/// * `OutputError::MissingPayload` - no `window.WebpackData = '...'` literal
pub fn extract_payload(html: &str) -> Result<&str, OutputError> {
    let opening = format!("{} = '", PAYLOAD_GLOBAL);

    let start = html
        .find(&opening)
        .map(|i| i + opening.len())
        .ok_or(OutputError::MissingPayload)?;
    let len = html[start..]
        .find('\'')
        .ok_or(OutputError::MissingPayload)?;

    Ok(&html[start..start + len])
}

/// Write a rendered report to disk
///
/// # Errors
/// * `OutputError::InvalidPath` - path is empty, a directory, or its parent
///   cannot be created
/// * `OutputError::WriteFailed` - I/O error during write
pub fn write_report(html: &str, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing report to: {}", output_path.display());

    validate_path(output_path)?;

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(html.as_bytes())
        .map_err(OutputError::WriteFailed)?;
    writer.flush().map_err(OutputError::WriteFailed)?;

    info!(
        "Report written successfully ({} bytes, {:.2} KB)",
        html.len(),
        html.len() as f64 / 1024.0
    );

    Ok(())
}

/// Read a report and return its encoded payload
pub fn read_report_payload(path: impl AsRef<Path>) -> Result<String, OutputError> {
    let path = path.as_ref();

    debug!("Reading report from: {}", path.display());

    let html = std::fs::read_to_string(path)?;
    extract_payload(&html).map(str::to_string)
}
