use std::process::Command;

use clap::Parser;

use apigen::cli::{Cli, Commands};

const GRAPH: &str = r#"
types:
  Item:
    members:
      - name: id
        type: long
        description: item id
classes:
  ItemController:
    description: Items api
    rest: true
    path: /item
    methods:
      - name: get_item
        description: Get one item
        verb: get
        path: /get
        returns: Item
        params:
          - name: id
            type: long
            description: item id
"#;

#[test]
fn test_doc_and_type_are_exclusive() {
    let result = Cli::try_parse_from([
        "apigen", "doc", "api.yaml", "--class", "ItemController", "--type", "Item",
    ]);
    assert!(result.is_err());
}

#[test]
fn test_method_requires_class() {
    let result = Cli::try_parse_from(["apigen", "doc", "api.yaml", "--method", "get_item"]);
    assert!(result.is_err());
}

#[test]
fn test_upload_overrides_parse() {
    let cli = Cli::try_parse_from([
        "apigen",
        "upload",
        "api.yaml",
        "--class",
        "ItemController",
        "--server-url",
        "http://localhost:3000",
        "--token",
        "tok",
    ])
    .expect("parses");
    match cli.command {
        Commands::Upload {
            class,
            server_url,
            token,
            ..
        } => {
            assert_eq!(class, "ItemController");
            assert_eq!(server_url.as_deref(), Some("http://localhost:3000"));
            assert_eq!(token.as_deref(), Some("tok"));
        }
        Commands::Doc { .. } => panic!("expected upload command"),
    }
}

#[test]
fn test_cli_doc_generates_markdown() {
    let dir = tempfile::tempdir().expect("tempdir");
    let graph_path = dir.path().join("api.yaml");
    std::fs::write(&graph_path, GRAPH).expect("write graph");
    let out_dir = dir.path().join("docs");

    let exe = env!("CARGO_BIN_EXE_apigen");
    let status = Command::new(exe)
        .arg("doc")
        .arg(&graph_path)
        .arg("--class")
        .arg("ItemController")
        .arg("--output")
        .arg(&out_dir)
        .status()
        .expect("run cli");
    assert!(status.success());

    let doc = std::fs::read_to_string(out_dir.join("get_item.md")).expect("doc written");
    assert!(doc.contains("# get_item"));
    assert!(doc.contains("id|long|Y|N/A|item id"));
}

#[test]
fn test_cli_upload_without_mapped_methods_reports_not_applicable() {
    let graph = r#"
classes:
  PlainController:
    description: helpers only
    rest: true
    path: /plain
    methods:
      - name: compute
        description: internal computation
"#;
    let dir = tempfile::tempdir().expect("tempdir");
    let graph_path = dir.path().join("api.yaml");
    std::fs::write(&graph_path, graph).expect("write graph");

    let exe = env!("CARGO_BIN_EXE_apigen");
    let output = Command::new(exe)
        .env("RUST_LOG", "warn")
        .arg("upload")
        .arg(&graph_path)
        .arg("--class")
        .arg("PlainController")
        .output()
        .expect("run cli");
    // Nothing qualifies: not an error, but the outcome is reported.
    assert!(output.status.success());
    let logs = format!(
        "{}{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(logs.contains("not a REST api"));
}

#[test]
fn test_cli_doc_without_target_fails() {
    let dir = tempfile::tempdir().expect("tempdir");
    let graph_path = dir.path().join("api.yaml");
    std::fs::write(&graph_path, GRAPH).expect("write graph");

    let exe = env!("CARGO_BIN_EXE_apigen");
    let status = Command::new(exe)
        .arg("doc")
        .arg(&graph_path)
        .status()
        .expect("run cli");
    assert!(!status.success());
}
