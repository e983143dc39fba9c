//! End-to-end tests for `iconforge professional`.

use std::process::Command;

/// Path to the iconforge binary
fn iconforge_bin() -> &'static str {
    env!("CARGO_BIN_EXE_iconforge")
}

fn run_professional(args: &[&str]) -> std::process::Output {
    Command::new(iconforge_bin())
        .arg("professional")
        .args(args)
        .output()
        .expect("Failed to execute command")
}

fn colors_of(value: &serde_json::Value) -> Vec<String> {
    value["colors"]
        .as_array()
        .expect("colors array")
        .iter()
        .map(|v| v.as_str().unwrap().to_string())
        .collect()
}

#[test]
fn test_professional_selects_preset_by_substring() {
    let output = run_professional(&["--keyword", "tech", "--json"]);
    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["preset"], "technology");
    assert_eq!(colors_of(&value).len(), 16);
}

#[test]
fn test_professional_defaults_to_corporate() {
    let output = run_professional(&["--keyword", "zzz-unrecognized", "--json"]);
    assert_eq!(output.status.code(), Some(0));

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["preset"], "corporate");
    assert_eq!(colors_of(&value).len(), 16);
}

#[test]
fn test_professional_splices_analyzed_colors_first() {
    let output = run_professional(&[
        "--keyword",
        "finance",
        "--colors",
        "#8040c0,#2db7d2",
        "--json",
    ]);
    assert_eq!(output.status.code(), Some(0));

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let colors = colors_of(&value);
    assert_eq!(colors.len(), 16);
    assert_eq!(colors[0], "#8040c0");
    assert_eq!(colors[1], "#2db7d2");
}

#[test]
fn test_professional_filters_brightness_extremes() {
    // Near-black and near-white analyzed colors are dropped entirely
    let output = run_professional(&[
        "--keyword",
        "finance",
        "--colors",
        "#000000,#ffffff",
        "--json",
    ]);
    assert_eq!(output.status.code(), Some(0));

    let with_extremes: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let plain = run_professional(&["--keyword", "finance", "--json"]);
    let plain: serde_json::Value = serde_json::from_slice(&plain.stdout).unwrap();
    assert_eq!(colors_of(&with_extremes), colors_of(&plain));
}

#[test]
fn test_professional_rejects_invalid_color() {
    let output = run_professional(&["--keyword", "finance", "--colors", "notacolor"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_professional_is_deterministic() {
    let first = run_professional(&["--keyword", "lifestyle", "--json"]);
    let second = run_professional(&["--keyword", "lifestyle", "--json"]);
    assert_eq!(first.stdout, second.stdout);
}
