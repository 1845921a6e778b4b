use pretty_assertions::assert_eq;
use serde_json::json;
use std::fs;
use std::path::PathBuf;
use webpack_treemap::commands::{
    execute_report, execute_tree, load_analyzer_config, load_data, render_asset_summary,
    validate_inspect_args, validate_report_args, validate_tree_args, InputSource, InspectArgs,
    ReportArgs, TreeArgs,
};
use webpack_treemap::report::read_tree;

fn write_stats(dir: &std::path::Path) -> PathBuf {
    let stats = json!({
        "outputPath": dir.join("dist").display().to_string(),
        "assetsByChunkName": { "main": ["main.js"] },
        "assets": [
            { "type": "asset", "name": "main.js", "size": 900, "chunks": [0], "chunkNames": ["main"] },
            { "type": "asset", "name": "lazy.js", "size": 100, "chunks": [1], "chunkNames": [] },
            { "type": "asset", "name": "main.css", "size": 50, "chunks": [0], "chunkNames": ["main"] }
        ],
        "chunks": [
            {
                "id": 0,
                "size": 610,
                "modules": [
                    { "name": "./src/app/index.js", "size": 400, "id": 1 },
                    { "name": "./src/app/view.js", "size": 200, "id": 2 },
                    { "name": "webpack/runtime/jsonp chunk loading", "size": 10, "id": 3, "moduleType": "runtime" }
                ]
            },
            {
                "id": 1,
                "size": 50,
                "modules": [{ "name": "./src/lazy.js", "size": 50, "id": 4 }]
            }
        ],
        "modules": []
    });

    let path = dir.join("stats.json");
    fs::write(&path, stats.to_string()).unwrap();
    path
}

#[test]
fn test_validate_report_args_valid() {
    let temp_dir = tempfile::tempdir().unwrap();
    let args = ReportArgs {
        stats: write_stats(temp_dir.path()),
        ..Default::default()
    };

    assert!(validate_report_args(&args).is_ok());
}

#[test]
fn test_validate_report_args_missing_stats() {
    let args = ReportArgs {
        stats: PathBuf::from("/nonexistent/stats.json"),
        ..Default::default()
    };

    assert!(validate_report_args(&args).is_err());
}

#[test]
fn test_validate_report_args_empty_stats() {
    assert!(validate_report_args(&ReportArgs::default()).is_err());
}

#[test]
fn test_validate_inspect_args_zero_limit() {
    let temp_dir = tempfile::tempdir().unwrap();
    let args = InspectArgs {
        input: InputSource::Stats(write_stats(temp_dir.path())),
        limit: Some(0),
        ..Default::default()
    };

    assert!(validate_inspect_args(&args).is_err());
}

#[test]
fn test_validate_tree_args_blank_asset() {
    let temp_dir = tempfile::tempdir().unwrap();
    let args = TreeArgs {
        input: InputSource::Stats(write_stats(temp_dir.path())),
        assets: vec!["  ".to_string()],
        ..Default::default()
    };

    assert!(validate_tree_args(&args).is_err());
}

#[test]
fn test_validate_tree_args_missing_input() {
    assert!(validate_tree_args(&TreeArgs::default()).is_err());
}

#[test]
fn test_execute_report_writes_next_to_bundle() {
    let temp_dir = tempfile::tempdir().unwrap();
    let args = ReportArgs {
        stats: write_stats(temp_dir.path()),
        ..Default::default()
    };

    let written = execute_report(args).unwrap();

    assert_eq!(written, temp_dir.path().join("dist/WebpackAnalyzer.html"));
    let html = fs::read_to_string(&written).unwrap();
    assert!(html.contains("window.WebpackData = '"));
}

#[test]
fn test_report_and_stats_inputs_agree() {
    let temp_dir = tempfile::tempdir().unwrap();
    let stats = write_stats(temp_dir.path());
    let report = execute_report(ReportArgs {
        stats: stats.clone(),
        output: Some(temp_dir.path().join("report.html")),
        config: None,
    })
    .unwrap();
    let config = load_analyzer_config(None).unwrap();

    let from_report = load_data(&InputSource::Report(report), &config).unwrap();
    let from_stats = load_data(&InputSource::Stats(stats), &config).unwrap();

    assert_eq!(from_report.assets, from_stats.assets);
    assert_eq!(from_report.chunks_list, vec!["main.js", "lazy.js"]);
    assert_eq!(from_report.total_stat_size(), 650);
}

#[test]
fn test_asset_summary_lists_largest_first() {
    colored::control::set_override(false);

    let temp_dir = tempfile::tempdir().unwrap();
    let config = load_analyzer_config(None).unwrap();
    let data = load_data(
        &InputSource::Stats(write_stats(temp_dir.path())),
        &config,
    )
    .unwrap();

    let summary = render_asset_summary(&data, Some(1));

    assert!(summary.contains("All (650 B) 2"));
    assert!(summary.contains("main.js (600 B)"));
    assert!(!summary.contains("lazy.js (50 B)"));
    assert!(summary.contains("... and 1 more"));
}

#[test]
fn test_execute_tree_writes_selected_asset() {
    let temp_dir = tempfile::tempdir().unwrap();
    let output = temp_dir.path().join("tree.json");
    let args = TreeArgs {
        input: InputSource::Stats(write_stats(temp_dir.path())),
        assets: vec!["main.js".to_string()],
        output: Some(output.clone()),
        config: None,
    };

    execute_tree(args).unwrap();

    let forest = read_tree(&output).unwrap();
    assert_eq!(forest.len(), 1);
    assert_eq!(forest[0].name, "main.js");
    assert_eq!(forest[0].children[0].name, "src/app");
    assert_eq!(forest[0].total_value(), 600);
}

#[test]
fn test_load_config_from_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("treemap.toml");
    fs::write(&path, "filename = \"bundle-report.html\"\n").unwrap();

    let config = load_analyzer_config(Some(&path)).unwrap();

    assert_eq!(config.filename, "bundle-report.html");
    assert_eq!(config.script_extensions, vec![".js", ".mjs", ".cjs"]);
}
