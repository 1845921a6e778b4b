//! Projection of a full webpack stats object down to the embedded payload.
//!
//! The full stats routinely carry module reasons, sources and timings that
//! the treemap never reads; the payload keeps assets, chunks, modules and the
//! chunk-name -> script mapping only.

use super::schema::{ChunkFiles, Payload, RawStats};
use crate::utils::config::AnalyzerConfig;
use crate::utils::error::StatsError;
use log::{debug, info};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Normalize already-parsed stats into a payload
///
/// **Public** - main entry point for normalization
///
/// # Arguments
/// * `raw` - Stats deserialized from `stats.toJson()` output
/// * `config` - Supplies the script extensions used to pick chunk files
pub fn normalize(raw: RawStats, config: &AnalyzerConfig) -> Payload {
    debug!(
        "Normalizing stats: {} assets, {} chunks, {} modules",
        raw.assets.len(),
        raw.chunks.len(),
        raw.modules.len()
    );

    let assets_by_chunk_name = pick_script_files(&raw.assets_by_chunk_name, config);

    Payload {
        output_path: raw.output_path,
        assets_by_chunk_name,
        assets: raw.assets,
        chunks: raw.chunks,
        modules: raw.modules,
    }
}

/// Normalize a stats JSON value
///
/// # Errors
/// * `StatsError::InvalidFormat` - the value does not have the stats shape
pub fn normalize_value(
    value: serde_json::Value,
    config: &AnalyzerConfig,
) -> Result<Payload, StatsError> {
    let raw: RawStats = serde_json::from_value(value)?;
    Ok(normalize(raw, config))
}

/// Normalize a stats JSON document
pub fn normalize_str(json: &str, config: &AnalyzerConfig) -> Result<Payload, StatsError> {
    let raw: RawStats = serde_json::from_str(json)?;
    Ok(normalize(raw, config))
}

/// Read and normalize a `stats.json` file
///
/// # Errors
/// * `StatsError::Read` - file cannot be opened
/// * `StatsError::InvalidFormat` - file is not stats JSON
pub fn read_stats(path: impl AsRef<Path>, config: &AnalyzerConfig) -> Result<Payload, StatsError> {
    let path = path.as_ref();

    info!("Reading stats from: {}", path.display());

    let file = File::open(path).map_err(|source| StatsError::Read {
        path: path.display().to_string(),
        source,
    })?;
    let file_size = file.metadata().map(|m| m.len()).unwrap_or(0);

    let raw: RawStats = serde_json::from_reader(BufReader::new(file))?;
    let payload = normalize(raw, config);

    info!(
        "Stats normalized: {} bytes in, {} assets / {} chunks / {} modules kept",
        file_size,
        payload.assets.len(),
        payload.chunks.len(),
        payload.modules.len()
    );

    Ok(payload)
}

/// Map each chunk name to its first script file, dropping names without one
fn pick_script_files(
    by_chunk_name: &BTreeMap<String, ChunkFiles>,
    config: &AnalyzerConfig,
) -> BTreeMap<String, String> {
    by_chunk_name
        .iter()
        .filter_map(|(chunk_name, files)| {
            files
                .files()
                .iter()
                .find(|file| config.is_script(file))
                .map(|file| (chunk_name.clone(), file.clone()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_pick_script_files() {
        let mut by_chunk_name = BTreeMap::new();
        by_chunk_name.insert(
            "main".to_string(),
            ChunkFiles::Many(vec!["main.css".to_string(), "main.js".to_string()]),
        );
        by_chunk_name.insert("vendor".to_string(), ChunkFiles::One("vendor.js".to_string()));
        by_chunk_name.insert(
            "styles".to_string(),
            ChunkFiles::Many(vec!["styles.css".to_string()]),
        );

        let picked = pick_script_files(&by_chunk_name, &AnalyzerConfig::default());

        assert_eq!(picked.len(), 2);
        assert_eq!(picked["main"], "main.js");
        assert_eq!(picked["vendor"], "vendor.js");
        assert!(!picked.contains_key("styles"));
    }

    #[test]
    fn test_normalize_value_minimal() {
        let payload = normalize_value(json!({}), &AnalyzerConfig::default()).unwrap();
        assert_eq!(payload, Payload::default());
    }

    #[test]
    fn test_normalize_value_rejects_wrong_shape() {
        let result = normalize_value(json!({ "assets": "nope" }), &AnalyzerConfig::default());
        assert!(result.is_err());
    }
}
