//! End-to-end tests for `iconforge export`.

use std::fs;
use std::process::Command;

/// Path to the iconforge binary
fn iconforge_bin() -> &'static str {
    env!("CARGO_BIN_EXE_iconforge")
}

fn run_export(args: &[&str]) -> std::process::Output {
    Command::new(iconforge_bin())
        .arg("export")
        .args(args)
        .output()
        .expect("Failed to execute command")
}

#[test]
fn test_export_json_deterministic() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("finance.json");

    let output = run_export(&[
        "--keyword",
        "finance",
        "--format",
        "json",
        "--output",
        path.to_str().unwrap(),
        "--deterministic",
    ]);
    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(path.exists(), "export file should be created");

    let contents = fs::read_to_string(&path).unwrap();
    assert!(contents.contains("\"generated_at\": \"1970-01-01T00:00:00Z\""));

    let value: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(value["tool"], "iconforge");
    assert_eq!(value["name"], "Finance");
    assert_eq!(value["colors"].as_array().unwrap().len(), 4);
    assert_eq!(value["colors"][0], "#2db7d2");
}

#[test]
fn test_export_json_deterministic_is_byte_identical() {
    let dir = tempfile::tempdir().expect("temp dir");
    let first = dir.path().join("a.json");
    let second = dir.path().join("b.json");

    for path in [&first, &second] {
        let output = run_export(&[
            "--keyword",
            "gaming",
            "--format",
            "json",
            "--output",
            path.to_str().unwrap(),
            "--deterministic",
        ]);
        assert_eq!(output.status.code(), Some(0));
    }

    assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
}

#[test]
fn test_export_svg_swatches() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("tech.svg");

    let output = run_export(&[
        "--keyword",
        "tech",
        "--format",
        "svg",
        "--output",
        path.to_str().unwrap(),
    ]);
    assert_eq!(output.status.code(), Some(0));

    let svg = fs::read_to_string(&path).unwrap();
    assert!(svg.starts_with("<svg"));
    assert_eq!(svg.matches("<rect").count(), 4, "one swatch per color");
    assert!(svg.contains("<title>Tech</title>"));
}

#[test]
fn test_export_react_snippet() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("palette.jsx");

    let output = run_export(&[
        "--keyword",
        "travel",
        "--format",
        "react",
        "--output",
        path.to_str().unwrap(),
    ]);
    assert_eq!(output.status.code(), Some(0));

    let snippet = fs::read_to_string(&path).unwrap();
    assert!(snippet.contains("export const palette = {"));
    assert!(snippet.contains("name: \"Travel\""));
    assert!(snippet.contains("export default palette;"));
}

#[test]
fn test_export_creates_parent_directories() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("nested/deep/out.json");

    let output = run_export(&[
        "--keyword",
        "food",
        "--format",
        "json",
        "--output",
        path.to_str().unwrap(),
        "--deterministic",
    ]);
    assert_eq!(output.status.code(), Some(0));
    assert!(path.exists());
}

#[test]
fn test_export_rejects_unknown_format() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("out.png");

    let output = run_export(&[
        "--keyword",
        "food",
        "--format",
        "png",
        "--output",
        path.to_str().unwrap(),
    ]);
    assert_eq!(output.status.code(), Some(2), "validation errors exit with 2");
    assert!(!path.exists());
}
