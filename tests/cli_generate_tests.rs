//! End-to-end tests for `iconforge generate`.

use std::process::Command;

/// Path to the iconforge binary
fn iconforge_bin() -> &'static str {
    env!("CARGO_BIN_EXE_iconforge")
}

fn run_generate(args: &[&str]) -> std::process::Output {
    Command::new(iconforge_bin())
        .arg("generate")
        .args(args)
        .output()
        .expect("Failed to execute command")
}

#[test]
fn test_generate_combines_palette_and_icons() {
    let output = run_generate(&["--keyword", "finance dashboard", "--json"]);
    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["name"], "Finance");
    assert_eq!(value["colors"].as_array().unwrap().len(), 4);
    assert_eq!(value["colors"][0], "#2db7d2");
    assert_eq!(value["icons"][0], "dollar-sign");
}

#[test]
fn test_generate_default_name_for_unmatched_keyword() {
    let output = run_generate(&["--keyword", "zzz-unrecognized", "--json"]);
    assert_eq!(output.status.code(), Some(0));

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["name"], "Default");
    assert_eq!(value["icons"].as_array().unwrap().len(), 6);
}

#[test]
fn test_generate_seed_only_affects_icons() {
    let zero = run_generate(&["--keyword", "tech", "--seed", "0", "--json"]);
    let one = run_generate(&["--keyword", "tech", "--seed", "1", "--json"]);

    let zero: serde_json::Value = serde_json::from_slice(&zero.stdout).unwrap();
    let one: serde_json::Value = serde_json::from_slice(&one.stdout).unwrap();
    assert_eq!(zero["colors"], one["colors"]);
    assert_ne!(zero["icons"], one["icons"]);
}

#[test]
fn test_generate_human_output() {
    let output = run_generate(&["--keyword", "real estate listings"]);
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Palette: Real Estate"));
    assert!(stdout.contains("Colors:"));
    assert!(stdout.contains("Icons:"));
}
