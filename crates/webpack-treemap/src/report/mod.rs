//! Output writers for the report page and treemap data.
//!
//! This module handles writing data to disk in various formats:
//! - The HTML report with the embedded payload
//! - Treemap JSON for chart libraries

pub mod html;
pub mod json;

// Re-export main functions
pub use html::{extract_payload, read_report_payload, render_report, write_report};
pub use json::{read_tree, tree_to_string, write_tree};

use crate::utils::error::OutputError;
use std::path::Path;

/// Common path validation for output files
pub fn validate_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.exists() && path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}
