//! JSON output for treemap data.
//!
//! Writes the compacted forest in the `{ name, path, value, children }` shape
//! chart libraries take as treemap series data.

use super::validate_path;
use crate::treemap::TreeNode;
use crate::utils::error::OutputError;
use log::{debug, info};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Write a forest to a JSON file
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
pub fn write_tree(forest: &[TreeNode], output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing treemap data to: {}", output_path.display());

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
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, forest).map_err(OutputError::SerializationFailed)?;

    Ok(())
}

/// Serialize a forest to a pretty JSON string
pub fn tree_to_string(forest: &[TreeNode]) -> Result<String, OutputError> {
    serde_json::to_string_pretty(forest).map_err(OutputError::SerializationFailed)
}

/// Read a forest back from a JSON file
pub fn read_tree(input_path: impl AsRef<Path>) -> Result<Vec<TreeNode>, OutputError> {
    let file = File::open(input_path.as_ref()).map_err(OutputError::WriteFailed)?;
    serde_json::from_reader(file).map_err(OutputError::SerializationFailed)
}
