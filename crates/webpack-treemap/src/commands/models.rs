use std::path::PathBuf;

/// Where a command reads its data from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// A rendered report with an embedded payload
    Report(PathBuf),

    /// A raw `stats.json`, normalized on the fly
    Stats(PathBuf),
}

impl InputSource {
    pub fn path(&self) -> &PathBuf {
        match self {
            InputSource::Report(path) | InputSource::Stats(path) => path,
        }
    }
}

/// Arguments for the report command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone, Default)]
pub struct ReportArgs {
    /// Path to webpack `stats.json`
    pub stats: PathBuf,

    /// Report path (defaults to `<outputPath>/<filename>`)
    pub output: Option<PathBuf>,

    /// Optional TOML configuration
    pub config: Option<PathBuf>,
}

/// Arguments for the inspect command
#[derive(Debug, Clone)]
pub struct InspectArgs {
    pub input: InputSource,

    /// Only list the largest N assets
    pub limit: Option<usize>,

    pub config: Option<PathBuf>,
}

impl Default for InspectArgs {
    fn default() -> Self {
        Self {
            input: InputSource::Report(PathBuf::from("WebpackAnalyzer.html")),
            limit: None,
            config: None,
        }
    }
}

/// Arguments for the tree command
#[derive(Debug, Clone)]
pub struct TreeArgs {
    pub input: InputSource,

    /// Asset names to include; empty selects every script asset
    pub assets: Vec<String>,

    /// JSON output path; stdout when absent
    pub output: Option<PathBuf>,

    pub config: Option<PathBuf>,
}

impl Default for TreeArgs {
    fn default() -> Self {
        Self {
            input: InputSource::Report(PathBuf::from("WebpackAnalyzer.html")),
            assets: Vec::new(),
            output: None,
            config: None,
        }
    }
}
