//! End-to-end tests for `pally config` commands.

mod fixtures;
use fixtures::*;

fn config_json(ws: &Workspace) -> serde_json::Value {
    let output = ws.run(&["config", "show", "--json"]);
    assert_eq!(
        output.status.code(),
        Some(0),
        "Show config should succeed. stderr: {}",
        stderr(&output)
    );
    serde_json::from_str(&stdout(&output)).expect("Output should be valid JSON")
}

// ============================================================================
// Show Command Tests
// ============================================================================

#[test]
fn test_config_show_default() {
    let ws = Workspace::new();
    let output = ws.run(&["config", "show"]);
    assert_eq!(output.status.code(), Some(0));

    let out = stdout(&output);
    assert!(out.contains("Pally Configuration"));
    assert!(out.contains("Default Count: 4"));
    assert!(out.contains("Max Count: 24"));
    assert!(out.contains("(circular)"));
}

#[test]
fn test_config_show_json_defaults() {
    let ws = Workspace::new();
    let json = config_json(&ws);

    assert_eq!(json["palette"]["default_count"], 4);
    assert_eq!(json["palette"]["max_count"], 24);
    assert_eq!(json["generator"]["hue_distance"], "circular");
    assert_eq!(json["generator"]["min_hue_distance"], 30.0);
    assert_eq!(json["shades"]["desaturation"], 0.8);
    assert_eq!(json["shades"]["lighter"], 4.0);
}

#[test]
fn test_config_show_reads_file_from_config_dir() {
    let ws = Workspace::new();
    std::fs::create_dir_all(ws.config_dir()).unwrap();
    std::fs::write(
        ws.config_dir().join("config.toml"),
        "[palette]\ndefault_count = 6\n\n[generator]\nhue_distance = \"linear\"\n",
    )
    .unwrap();

    let json = config_json(&ws);
    assert_eq!(json["palette"]["default_count"], 6);
    assert_eq!(json["palette"]["max_count"], 24);
    assert_eq!(json["generator"]["hue_distance"], "linear");
}

#[test]
fn test_config_show_rejects_broken_file() {
    let ws = Workspace::new();
    std::fs::create_dir_all(ws.config_dir()).unwrap();
    std::fs::write(ws.config_dir().join("config.toml"), "[palette\n").unwrap();

    let output = ws.run(&["config", "show"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_config_show_unreadable_file_is_io_error() {
    let ws = Workspace::new();
    std::fs::create_dir_all(ws.config_dir().join("config.toml")).unwrap();

    let output = ws.run(&["config", "show"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Failed to read config file"));
}

// ============================================================================
// Set Command Tests
// ============================================================================

#[test]
fn test_config_set_requires_an_option() {
    let ws = Workspace::new();
    let output = ws.run(&["config", "set"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("At least one configuration option"));
}

#[test]
fn test_config_set_then_show() {
    let ws = Workspace::new();
    let output = ws.run(&[
        "config",
        "set",
        "--default-count",
        "6",
        "--hue-distance",
        "Linear",
        "--shades",
        "deep",
    ]);
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Configuration updated successfully"));
    assert!(ws.config_dir().join("config.toml").exists());

    let json = config_json(&ws);
    assert_eq!(json["palette"]["default_count"], 6);
    assert_eq!(json["generator"]["hue_distance"], "linear");
    assert_eq!(json["shades"]["desaturation"], 0.85);
    assert_eq!(json["shades"]["dark"], -2.0);
}

#[test]
fn test_config_set_invalid_values() {
    let ws = Workspace::new();

    let cases: [&[&str]; 3] = [
        &["--hue-distance", "manhattan"],
        &["--shades", "pastel"],
        &["--default-count", "30"],
    ];
    for args in cases {
        let mut full = vec!["config", "set"];
        full.extend_from_slice(args);
        let output = ws.run(&full);
        assert_eq!(output.status.code(), Some(1), "{args:?} should be rejected");
    }

    assert!(!ws.config_dir().join("config.toml").exists());
}

#[test]
fn test_config_default_count_drives_new_palettes() {
    let ws = Workspace::new();
    ws.run(&["config", "set", "--default-count", "6"]);

    let out = ws.path("palette.json");
    let output = ws.run(&["new", "--seed", "1", "--output", out.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));

    let doc = read_palette(&out);
    assert_eq!(doc.colors.len(), 6);
    // The first six hues of the evenly spaced ramp
    assert_eq!(doc.colors[0].to_hex(), "#cf1717");
    assert_eq!(doc.colors[3].hue().unwrap().round(), 180.0);
}

#[test]
fn test_config_output_dir_used_for_new() {
    let ws = Workspace::new();
    let exports = ws.path("exports");
    ws.run(&["config", "set", "--output-dir", exports.to_str().unwrap()]);

    let output = ws.run(&["new"]);
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));

    let files: Vec<_> = std::fs::read_dir(&exports).unwrap().collect();
    assert_eq!(files.len(), 1);
}
