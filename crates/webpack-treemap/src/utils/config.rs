//! Configuration and constants.

use crate::aggregator::NoiseFilter;
use crate::utils::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Global binding the report page reads the encoded payload from
pub const PAYLOAD_GLOBAL: &str = "window.WebpackData";

/// Template placeholder replaced by the inline payload script
pub const PAYLOAD_SCRIPT_MARKER: &str = r#"<script src="docs/WebpackData.js">"#;

/// Template placeholder replaced by the viewer bundle URL
pub const VIEWER_SCRIPT_MARKER: &str = "dist/index.js";

/// Template placeholder replaced by the generation timestamp
pub const GENERATED_AT_MARKER: &str = "{{generated_at}}";

/// Default report file name, written next to the bundle output
pub const DEFAULT_REPORT_FILENAME: &str = "WebpackAnalyzer.html";

pub const SIDER_WIDTH_MARKER: &str = "{{sider_width_key}}";
pub const SIDER_COLLAPSED_MARKER: &str = "{{sider_collapsed_key}}";

// Local storage keys for the viewer's cosmetic sidebar state, handed to the
// page through data attributes on the mount node
pub const SIDER_WIDTH_KEY: &str = concat!(env!("CARGO_PKG_NAME"), "-sider-width");
pub const SIDER_COLLAPSED_KEY: &str = concat!(env!("CARGO_PKG_NAME"), "-sider-collapsed");

/// Analyzer configuration
///
/// Every key is optional in the TOML file; missing keys take the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Report file name
    pub filename: String,

    /// URL of the viewer bundle referenced by the report page
    pub viewer_script: String,

    /// Extensions that mark an output file as a script asset
    pub script_extensions: Vec<String>,

    /// Bookkeeping modules excluded from all size totals
    pub noise: NoiseFilter,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            filename: DEFAULT_REPORT_FILENAME.to_string(),
            viewer_script: default_viewer_script(),
            script_extensions: vec![".js".to_string(), ".mjs".to_string(), ".cjs".to_string()],
            noise: NoiseFilter::default(),
        }
    }
}

impl AnalyzerConfig {
    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = filename.into();
        self
    }

    /// True if `name` ends with one of the configured script extensions
    pub fn is_script(&self, name: &str) -> bool {
        self.script_extensions
            .iter()
            .any(|ext| name.ends_with(ext.as_str()))
    }

    /// Reject configurations that would produce an empty or unusable report
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.filename.trim().is_empty() {
            return Err(ConfigError::Invalid("filename cannot be empty".to_string()));
        }

        if self.filename.contains('/') || self.filename.contains('\\') {
            return Err(ConfigError::Invalid(format!(
                "filename must not contain path separators: {}",
                self.filename
            )));
        }

        if self.script_extensions.is_empty() {
            return Err(ConfigError::Invalid(
                "script_extensions must list at least one extension".to_string(),
            ));
        }

        Ok(())
    }
}

fn default_viewer_script() -> String {
    format!(
        "https://unpkg.com/{}@{}/dist/index.js",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    )
}

/// Load configuration from a TOML file
///
/// # Errors
/// * `ConfigError::Read` - If file cannot be read
/// * `ConfigError::Parse` - If TOML is invalid
/// * `ConfigError::Invalid` - If the values fail validation
///
/// # Example
/// ```ignore
/// let config = load_config("treemap.toml")?;
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<AnalyzerConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    let config: AnalyzerConfig = toml::from_str(&contents)?;
    config.validate()?;
    Ok(config)
}
