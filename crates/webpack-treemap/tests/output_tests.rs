use pretty_assertions::assert_eq;
use std::path::Path;
use tempfile::NamedTempFile;
use webpack_treemap::codec;
use webpack_treemap::report::{
    extract_payload, read_report_payload, read_tree, render_report, validate_path, write_report,
    write_tree,
};
use webpack_treemap::stats::{Asset, Chunk, Identifier, Module, Payload};
use webpack_treemap::treemap::TreeNode;
use webpack_treemap::utils::config::AnalyzerConfig;
use webpack_treemap::view;

fn create_test_payload() -> Payload {
    Payload {
        output_path: None,
        assets_by_chunk_name: [("main".to_string(), "main.js".to_string())]
            .into_iter()
            .collect(),
        assets: vec![Asset {
            kind: Some("asset".to_string()),
            name: "main.js".to_string(),
            size: 900,
            chunks: vec![Identifier::Num(0)],
            chunk_names: vec!["main".to_string()],
            stat_size: None,
        }],
        chunks: vec![Chunk {
            id: Identifier::Num(0),
            size: 450,
            modules: vec![
                Module::new("./src/index.js", 1, 150),
                Module::new("./src/lib/util.js", 2, 300),
            ],
        }],
        modules: Vec::new(),
    }
}

#[test]
fn test_report_round_trip() {
    let config = AnalyzerConfig::default();
    let encoded = codec::encode(&create_test_payload()).unwrap();
    let html = render_report(&encoded, &config);

    let temp_file = NamedTempFile::new().unwrap();
    write_report(&html, temp_file.path()).unwrap();

    let embedded = read_report_payload(temp_file.path()).unwrap();
    assert_eq!(embedded, encoded);

    let data = view::load(&embedded, &config).unwrap();
    assert_eq!(data.assets[0].stat_size, Some(450));
    assert_eq!(data.chunks_list, vec!["main.js".to_string()]);
}

#[test]
fn test_report_uses_configured_viewer() {
    let config = AnalyzerConfig {
        viewer_script: "./viewer/index.js".to_string(),
        ..Default::default()
    };

    let html = render_report("1,2", &config);

    assert!(html.contains("<script src=\"./viewer/index.js\"></script>"));
    assert_eq!(extract_payload(&html).unwrap(), "1,2");
}

#[test]
fn test_write_report_creates_parent_dirs() {
    let temp_dir = tempfile::tempdir().unwrap();
    let nested = temp_dir.path().join("dist/reports/WebpackAnalyzer.html");

    write_report("<html></html>", &nested).unwrap();

    assert!(nested.exists());
}

#[test]
fn test_read_report_without_payload() {
    let temp_file = NamedTempFile::new().unwrap();
    write_report("<html><body></body></html>", temp_file.path()).unwrap();

    assert!(read_report_payload(temp_file.path()).is_err());
}

#[test]
fn test_write_and_read_tree() {
    let forest = vec![TreeNode {
        name: "src".to_string(),
        path: "src".to_string(),
        value: None,
        children: vec![
            TreeNode::leaf("src/a.js", Some(10)),
            TreeNode::leaf("src/b.js", Some(20)),
        ],
    }];

    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("out/tree.json");

    write_tree(&forest, &path).unwrap();

    assert_eq!(read_tree(&path).unwrap(), forest);
}

#[test]
fn test_validate_output_path_empty() {
    assert!(validate_path(Path::new("")).is_err());
}

#[test]
fn test_validate_output_path_directory() {
    let temp_dir = tempfile::tempdir().unwrap();
    assert!(validate_path(temp_dir.path()).is_err());
}
