//! Basic CLI E2E tests.
//!
//! Each test runs the binary against its own temporary data directory.

use std::process::Command;

use tempfile::TempDir;

fn run_cli(dir: &TempDir, args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_focuslearn"))
        .env("FOCUSLEARN_DATA_DIR", dir.path())
        .args(args)
        .output()
        .expect("failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

#[test]
fn progress_show_prints_the_seeded_profile() {
    let dir = TempDir::new().unwrap();
    let (stdout, _, code) = run_cli(&dir, &["progress", "show"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("total XP"));
    assert!(stdout.contains("2450"));
}

#[test]
fn progress_show_json_is_parseable() {
    let dir = TempDir::new().unwrap();
    let (stdout, _, code) = run_cli(&dir, &["progress", "show", "--json"]);
    assert_eq!(code, 0);

    let record: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(record["total_xp"], 2450);
    assert_eq!(record["level"], 12);
    assert_eq!(record["version"], 1);
}

#[test]
fn config_set_then_get_round_trips() {
    let dir = TempDir::new().unwrap();
    let (_, _, code) = run_cli(&dir, &["config", "set", "session.focus_minutes", "50"]);
    assert_eq!(code, 0);

    let (stdout, _, code) = run_cli(&dir, &["config", "get", "session.focus_minutes"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "50");
}

#[test]
fn config_get_unknown_key_fails() {
    let dir = TempDir::new().unwrap();
    let (_, stderr, code) = run_cli(&dir, &["config", "get", "session.nonexistent"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("Unknown configuration key"));
}

#[test]
fn config_list_shows_every_key() {
    let dir = TempDir::new().unwrap();
    let (stdout, _, code) = run_cli(&dir, &["config", "list"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("session.focus_minutes = 25"));
    assert!(stdout.contains("notifications.bell = true"));
}

#[test]
fn stats_start_empty() {
    let dir = TempDir::new().unwrap();
    let (stdout, _, code) = run_cli(&dir, &["stats", "today"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("0 sessions"));

    let (stdout, _, code) = run_cli(&dir, &["stats", "all", "--json"]);
    assert_eq!(code, 0);
    let stats: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(stats["sessions"], 0);
    assert_eq!(stats["focus_min"], 0);
}

#[test]
fn completions_generate() {
    let dir = TempDir::new().unwrap();
    let (stdout, _, code) = run_cli(&dir, &["completions", "bash"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("focuslearn"));
}
