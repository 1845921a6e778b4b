//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod inspect;
pub mod models;
pub mod report;
pub mod tree;
pub mod utils;

// Re-export main command functions
pub use inspect::{execute_inspect, render_asset_summary, validate_inspect_args};
pub use models::{InputSource, InspectArgs, ReportArgs, TreeArgs};
pub use report::{execute_report, validate_report_args};
pub use tree::{execute_tree, validate_tree_args};
pub use utils::{display_version, load_analyzer_config, load_data};
