//! Inspect command implementation.
//! Lists script assets by attributed source size.

use super::models::InspectArgs;
use super::utils::{load_analyzer_config, load_data, validate_input};
use crate::utils::format::format_size;
use crate::view::DecodedData;
use anyhow::Result;
use colored::*;

/// Execute the inspect command
pub fn execute_inspect(args: InspectArgs) -> Result<()> {
    let config = load_analyzer_config(args.config.as_ref())?;
    let data = load_data(&args.input, &config)?;

    println!("{}", render_asset_summary(&data, args.limit));

    Ok(())
}

/// Render the asset list the viewer sidebar shows
///
/// Assets are sorted largest first; entry assets (the script of a named
/// chunk) are highlighted.
pub fn render_asset_summary(data: &DecodedData, limit: Option<usize>) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{} All ({}) {}\n",
        "Show chunks:".bold(),
        format_size(data.total_stat_size()).bold(),
        data.chunks_list.len().to_string().italic()
    ));
    out.push_str("---------------------------------------------------\n");

    let assets = data.assets_by_stat_size();
    let shown = limit.unwrap_or(assets.len());

    for asset in assets.iter().take(shown) {
        let file_name = asset.name.rsplit('/').next().unwrap_or(&asset.name);
        let label = if data.is_entry_asset(&asset.name) {
            file_name.green().to_string()
        } else {
            file_name.to_string()
        };

        out.push_str(&format!(
            "  {} ({})\n",
            label,
            format_size(asset.stat_size.unwrap_or(0)).bold()
        ));
    }

    if assets.len() > shown {
        out.push_str(&format!("  ... and {} more\n", assets.len() - shown));
    }

    out
}

/// Validate inspect arguments
pub fn validate_inspect_args(args: &InspectArgs) -> Result<()> {
    validate_input(&args.input)?;

    if args.limit == Some(0) {
        anyhow::bail!("limit must be greater than 0");
    }

    Ok(())
}
