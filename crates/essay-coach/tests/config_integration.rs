//! Configuration integration tests.
//!
//! These tests verify config discovery, format parsing, and precedence
//! from an end-to-end perspective using the compiled binary. Tests use
//! `info --json` to assert actual config values, not just process success.

use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

/// Returns a Command configured to run our binary.
#[allow(deprecated)]
fn cmd() -> Command {
    Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap()
}

/// Run `info --json` from a directory and parse the JSON output.
fn info_json(dir: &std::path::Path) -> Value {
    let output = cmd()
        .args(["-C", dir.to_str().unwrap(), "info", "--json"])
        .output()
        .expect("failed to run command");
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("invalid JSON output")
}

// =============================================================================
// Config File Discovery
// =============================================================================

#[test]
fn runs_without_config_file() {
    let tmp = TempDir::new().unwrap();
    let json = info_json(tmp.path());

    assert_eq!(
        json["config"]["log_level"], "info",
        "should use default log level"
    );
}

#[test]
fn discovers_dotfile_config_in_current_dir() {
    let tmp = TempDir::new().unwrap();
    let config_path = tmp.path().join(".essay-coach.toml");
    fs::write(&config_path, r#"long_sentence_threshold = 12"#).unwrap();

    let json = info_json(tmp.path());

    assert_eq!(json["config"]["long_sentence_threshold"], 12);
    let reported = json["config"]["config_file"].as_str().unwrap();
    assert!(
        reported.ends_with(".essay-coach.toml"),
        "should report dotfile: {reported}"
    );
}

#[test]
fn discovers_regular_config_in_current_dir() {
    let tmp = TempDir::new().unwrap();
    let config_path = tmp.path().join("essay-coach.toml");
    fs::write(&config_path, r#"top_words = 3"#).unwrap();

    let json = info_json(tmp.path());

    assert_eq!(json["config"]["top_words"], 3);
    let reported = json["config"]["config_file"].as_str().unwrap();
    assert!(
        reported.ends_with("essay-coach.toml"),
        "should report regular config: {reported}"
    );
}

#[test]
fn discovers_config_in_parent_directory() {
    let tmp = TempDir::new().unwrap();
    let sub_dir = tmp.path().join("nested").join("deep");
    fs::create_dir_all(&sub_dir).unwrap();

    // Config in root, run from nested/deep
    fs::write(
        tmp.path().join(".essay-coach.toml"),
        r#"max_synonyms = 2"#,
    )
    .unwrap();

    let json = info_json(&sub_dir);

    assert_eq!(json["config"]["max_synonyms"], 2);
}

#[test]
fn regular_name_overrides_dotfile() {
    let tmp = TempDir::new().unwrap();

    // Both configs exist — regular file (higher precedence) should win
    fs::write(tmp.path().join(".essay-coach.toml"), r#"top_words = 3"#).unwrap();
    fs::write(tmp.path().join("essay-coach.toml"), r#"top_words = 4"#).unwrap();

    let json = info_json(tmp.path());

    assert_eq!(
        json["config"]["top_words"], 4,
        "regular file should override dotfile"
    );
}

// =============================================================================
// Config Format Parsing
// =============================================================================

#[test]
fn parses_toml_config() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".essay-coach.toml"), r#"log_level = "warn""#).unwrap();

    let json = info_json(tmp.path());
    assert_eq!(json["config"]["log_level"], "warn");
}

#[test]
fn parses_yaml_config() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".essay-coach.yaml"), "log_level: warn\n").unwrap();

    let json = info_json(tmp.path());
    assert_eq!(json["config"]["log_level"], "warn");
}

#[test]
fn parses_json_config() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".essay-coach.json"),
        r#"{"log_level": "error"}"#,
    )
    .unwrap();

    let json = info_json(tmp.path());
    assert_eq!(json["config"]["log_level"], "error");
}

// =============================================================================
// Explicit --config Flag
// =============================================================================

#[test]
fn explicit_config_flag_wins_over_discovery() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("essay-coach.toml"), r#"top_words = 3"#).unwrap();

    let explicit = tmp.path().join("special.toml");
    fs::write(&explicit, r#"top_words = 8"#).unwrap();

    let output = cmd()
        .args([
            "-C",
            tmp.path().to_str().unwrap(),
            "--config",
            explicit.to_str().unwrap(),
            "info",
            "--json",
        ])
        .output()
        .expect("failed to run command");
    assert!(output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();

    assert_eq!(json["config"]["top_words"], 8);
}

// =============================================================================
// Environment Variable Overrides
// =============================================================================

#[test]
fn env_var_overrides_config_file() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("essay-coach.toml"),
        r#"long_sentence_threshold = 12"#,
    )
    .unwrap();

    let output = cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "info", "--json"])
        .env("ESSAY_COACH_LONG_SENTENCE_THRESHOLD", "30")
        .output()
        .expect("failed to run command");
    assert!(output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();

    assert_eq!(json["config"]["long_sentence_threshold"], 30);
}

// =============================================================================
// Config Values Applied to Analysis
// =============================================================================

#[test]
fn configured_threshold_changes_review() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("essay-coach.toml"),
        r#"long_sentence_threshold = 5"#,
    )
    .unwrap();

    let essay = tmp.path().join("essay.txt");
    fs::write(&essay, "It was a good day and we had a good time.").unwrap();

    let output = cmd()
        .args([
            "-C",
            tmp.path().to_str().unwrap(),
            "review",
            "essay.txt",
            "--json",
        ])
        .output()
        .expect("failed to run command");
    assert!(output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();

    assert_eq!(json["long_sentence_threshold"], 5);
    assert_eq!(json["long_sentences"].as_array().unwrap().len(), 1);
}

#[test]
fn configured_thesaurus_path_is_used() {
    let tmp = TempDir::new().unwrap();
    let thesaurus = tmp.path().join("tiny.json");
    fs::write(
        &thesaurus,
        r#"{"happy": [["happy", "jubilant"]]}"#,
    )
    .unwrap();
    fs::write(
        tmp.path().join("essay-coach.toml"),
        format!(r#"thesaurus_path = "{}""#, thesaurus.display()),
    )
    .unwrap();

    let output = cmd()
        .args([
            "-C",
            tmp.path().to_str().unwrap(),
            "synonyms",
            "happy",
            "--json",
        ])
        .output()
        .expect("failed to run command");
    assert!(output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();

    assert_eq!(json["synonyms"].as_array().unwrap().len(), 1);
    assert_eq!(json["synonyms"][0], "jubilant");
}

#[test]
fn missing_thesaurus_path_fails_fast() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("essay-coach.toml"),
        r#"thesaurus_path = "/nonexistent/thesaurus.json""#,
    )
    .unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "synonyms", "happy"])
        .assert()
        .failure();
}
