//! webpack-treemap CLI
//!
//! Turns webpack build statistics into a static size-breakdown report and
//! inspects existing reports.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use env_logger::Env;
use log::debug;
use std::path::PathBuf;

use webpack_treemap::commands::{
    display_version, execute_inspect, execute_report, execute_tree, validate_inspect_args,
    validate_report_args, validate_tree_args, InputSource, InspectArgs, ReportArgs, TreeArgs,
};

/// webpack-treemap - source size treemaps for webpack bundles
#[derive(Parser, Debug)]
#[command(name = "webpack-treemap")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate the HTML report from a stats.json file
    Report {
        /// Path to webpack stats JSON (`webpack --json > stats.json`)
        #[arg(short, long)]
        stats: PathBuf,

        /// Report path (defaults to <outputPath>/WebpackAnalyzer.html)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// TOML configuration file
        #[arg(short, long, env = "WEBPACK_TREEMAP_CONFIG")]
        config: Option<PathBuf>,
    },

    /// List script assets by source size
    Inspect {
        #[command(flatten)]
        input: InputArgs,

        /// Only list the largest N assets
        #[arg(long)]
        limit: Option<usize>,

        /// TOML configuration file
        #[arg(short, long, env = "WEBPACK_TREEMAP_CONFIG")]
        config: Option<PathBuf>,
    },

    /// Emit compacted treemap JSON for selected assets
    Tree {
        #[command(flatten)]
        input: InputArgs,

        /// Asset to include (repeatable; all script assets when omitted)
        #[arg(short, long = "asset")]
        assets: Vec<String>,

        /// Output path for treemap JSON (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// TOML configuration file
        #[arg(short, long, env = "WEBPACK_TREEMAP_CONFIG")]
        config: Option<PathBuf>,
    },

    /// Display version information
    Version,
}

/// Report or stats input, exactly one required
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
struct InputArgs {
    /// Rendered report with an embedded payload
    #[arg(short, long)]
    report: Option<PathBuf>,

    /// Raw webpack stats JSON
    #[arg(short, long)]
    stats: Option<PathBuf>,
}

impl InputArgs {
    fn into_source(self) -> Result<InputSource> {
        match (self.report, self.stats) {
            (Some(report), None) => Ok(InputSource::Report(report)),
            (None, Some(stats)) => Ok(InputSource::Stats(stats)),
            (Some(_), Some(_)) => anyhow::bail!("Pass either --report or --stats, not both"),
            (None, None) => anyhow::bail!("One of --report or --stats is required"),
        }
    }
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    debug!("Command: {:?}", cli.command);

    // Execute command
    match cli.command {
        Commands::Report {
            stats,
            output,
            config,
        } => {
            let args = ReportArgs {
                stats,
                output,
                config,
            };

            validate_report_args(&args)?;
            execute_report(args)?;
        }

        Commands::Inspect {
            input,
            limit,
            config,
        } => {
            let args = InspectArgs {
                input: input.into_source()?,
                limit,
                config,
            };

            validate_inspect_args(&args)?;
            execute_inspect(args)?;
        }

        Commands::Tree {
            input,
            assets,
            output,
            config,
        } => {
            let args = TreeArgs {
                input: input.into_source()?,
                assets,
                output,
                config,
            };

            validate_tree_args(&args)?;
            execute_tree(args)?;
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_source_requires_one_input() {
        let neither = InputArgs {
            report: None,
            stats: None,
        };
        assert!(neither.into_source().is_err());

        let both = InputArgs {
            report: Some(PathBuf::from("report.html")),
            stats: Some(PathBuf::from("stats.json")),
        };
        assert!(both.into_source().is_err());
    }

    #[test]
    fn test_into_source_picks_given_input() {
        let stats = InputArgs {
            report: None,
            stats: Some(PathBuf::from("stats.json")),
        };
        assert_eq!(
            stats.into_source().unwrap(),
            InputSource::Stats(PathBuf::from("stats.json"))
        );
    }

    #[test]
    fn test_cli_rejects_missing_input() {
        assert!(Cli::try_parse_from(["webpack-treemap", "inspect"]).is_err());
        assert!(Cli::try_parse_from([
            "webpack-treemap",
            "tree",
            "--report",
            "a.html",
            "--stats",
            "b.json"
        ])
        .is_err());
    }
}
