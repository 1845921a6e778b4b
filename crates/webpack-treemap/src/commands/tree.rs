//! Tree command implementation.
//! Emits the compacted treemap forest for a selection of assets.

use super::models::TreeArgs;
use super::utils::{load_analyzer_config, load_data, validate_input};
use crate::report::{tree_to_string, write_tree};
use crate::treemap::forest_total;
use crate::utils::format::format_size;
use anyhow::{Context, Result};
use log::info;

/// Execute the tree command
pub fn execute_tree(args: TreeArgs) -> Result<()> {
    let config = load_analyzer_config(args.config.as_ref())?;
    let data = load_data(&args.input, &config)?;

    let forest = if args.assets.is_empty() {
        data.full_tree()
    } else {
        data.tree_for_selection(args.assets.as_slice())
    }
    .context("Failed to build treemap")?;

    info!(
        "Treemap: {} assets, {} total",
        forest.len(),
        format_size(forest_total(&forest))
    );

    match &args.output {
        Some(path) => {
            write_tree(&forest, path).context("Failed to write treemap JSON")?;
            info!("✓ Treemap written to: {}", path.display());
        }
        None => println!("{}", tree_to_string(&forest)?),
    }

    Ok(())
}

/// Validate tree arguments
pub fn validate_tree_args(args: &TreeArgs) -> Result<()> {
    validate_input(&args.input)?;

    if args.assets.iter().any(|name| name.trim().is_empty()) {
        anyhow::bail!("Asset names cannot be empty");
    }

    Ok(())
}
