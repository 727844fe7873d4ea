//! Basic CLI E2E tests.
//!
//! Tests invoke the built binary with an isolated data directory.

use std::path::Path;
use std::process::Command;

/// Run a CLI command and return (code, stdout, stderr).
fn run_cli(data_dir: &Path, args: &[&str]) -> (i32, String, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_habitstack-cli"))
        .args(args)
        .env("HABITSTACK_DATA_DIR", data_dir)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (code, stdout, stderr)
}

fn list_habits(dir: &Path) -> Vec<serde_json::Value> {
    let (code, stdout, _) = run_cli(dir, &["habit", "list"]);
    assert_eq!(code, 0, "habit list failed");
    serde_json::from_str::<serde_json::Value>(&stdout)
        .unwrap()
        .as_array()
        .cloned()
        .unwrap_or_default()
}

#[test]
fn test_suggest_bootstrap_json() {
    let dir = tempfile::tempdir().unwrap();
    let (code, stdout, stderr) =
        run_cli(dir.path(), &["suggest", "--hour", "8", "--mood", "3", "--json"]);
    assert_eq!(code, 0, "suggest failed: {stderr}");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let list = parsed.as_array().unwrap();
    assert_eq!(list.len(), 3);
    assert_eq!(list[0]["source"], "bootstrap");
}

#[test]
fn test_suggest_rejects_bad_hour() {
    let dir = tempfile::tempdir().unwrap();
    let (code, _, stderr) = run_cli(dir.path(), &["suggest", "--hour", "25"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("error: Invalid value for 'hour'"), "stderr: {stderr}");
}

#[test]
fn test_break_rejects_bad_severity_and_time() {
    let dir = tempfile::tempdir().unwrap();
    let (code, _, stderr) =
        run_cli(dir.path(), &["habit", "break", "Smoking", "--severity", "extreme"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("Invalid value for 'severity'"), "stderr: {stderr}");

    let (code, _, stderr) =
        run_cli(dir.path(), &["habit", "break", "Smoking", "--reminder", "8pm"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("Invalid value for 'time'"), "stderr: {stderr}");
    assert!(list_habits(dir.path()).is_empty());
}

#[test]
fn test_strength_unknown_id_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let (code, _, stderr) = run_cli(dir.path(), &["strength", "--id", "missing"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("Habit not found: missing"), "stderr: {stderr}");
}

#[test]
fn test_accept_suggestion_creates_habit() {
    let dir = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_cli(dir.path(), &["suggest", "--hour", "8", "--accept", "1"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Habit created:"));

    let habits = list_habits(dir.path());
    assert_eq!(habits.len(), 1);
    assert_eq!(habits[0]["ai_generated"], true);
    assert_eq!(habits[0]["reminder"]["enabled"], true);
}

#[test]
fn test_break_habit_creates_pair_and_delete_cascades() {
    let dir = tempfile::tempdir().unwrap();
    let (code, stdout, _) =
        run_cli(dir.path(), &["habit", "break", "Smoking", "--reminder", "20:00"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Replacement: Deep Breathing Exercise"));

    let habits = list_habits(dir.path());
    assert_eq!(habits.len(), 2);
    let bad = habits.iter().find(|h| h["habit_type"] == "bad").unwrap();
    assert_eq!(bad["reminder"]["enabled"], false);

    let bad_id = bad["id"].as_str().unwrap().to_string();
    let (code, stdout, _) = run_cli(dir.path(), &["habit", "delete", &bad_id]);
    assert_eq!(code, 0);
    assert_eq!(stdout.lines().filter(|l| l.starts_with("Deleted:")).count(), 2);
    assert!(list_habits(dir.path()).is_empty());
}

#[test]
fn test_toggle_and_strength() {
    let dir = tempfile::tempdir().unwrap();
    let (code, stdout, _) =
        run_cli(dir.path(), &["habit", "add", "Read", "--category", "productivity"]);
    assert_eq!(code, 0);
    let id = stdout.trim().trim_start_matches("Habit created: ").to_string();

    let (code, stdout, _) = run_cli(dir.path(), &["habit", "toggle", &id]);
    assert_eq!(code, 0);
    assert!(stdout.contains("streak 1"));

    let (code, stdout, _) = run_cli(dir.path(), &["strength", "--id", &id, "--json"]);
    assert_eq!(code, 0);
    let rows: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(rows[0]["tier"], "seed");
    assert!(rows[0]["score"].as_u64().unwrap() > 0);
}

#[test]
fn test_goal_generate_seeded() {
    let dir = tempfile::tempdir().unwrap();
    let (_, stdout, _) =
        run_cli(dir.path(), &["habit", "add", "Meditate", "--category", "mindfulness"]);
    let id = stdout.trim().trim_start_matches("Habit created: ").to_string();

    let (code, first, _) =
        run_cli(dir.path(), &["goal", "generate", "--id", &id, "--seed", "4", "--json"]);
    assert_eq!(code, 0);
    let (_, second, _) =
        run_cli(dir.path(), &["goal", "generate", "--id", &id, "--seed", "4", "--json"]);
    let a: serde_json::Value = serde_json::from_str(&first).unwrap();
    let b: serde_json::Value = serde_json::from_str(&second).unwrap();
    assert_eq!(a["title"], b["title"]);
    assert_eq!(a["category"], "mindfulness");
    assert_eq!(a["source_habit"], "Meditate");
}

#[test]
fn test_unknown_habit_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let (code, _, stderr) = run_cli(dir.path(), &["habit", "toggle", "missing"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("Habit not found"));
}

#[test]
fn test_config_set_and_get() {
    let dir = tempfile::tempdir().unwrap();
    let (code, _, _) = run_cli(dir.path(), &["config", "set", "strength.normalize", "true"]);
    assert_eq!(code, 0);
    let (code, stdout, _) = run_cli(dir.path(), &["config", "get", "strength.normalize"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "true");

    let (code, _, _) = run_cli(dir.path(), &["config", "set", "nope.key", "1"]);
    assert_ne!(code, 0);

    let (code, _, stderr) = run_cli(dir.path(), &["config", "get", "nope.key"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("Unknown configuration key: nope.key"), "stderr: {stderr}");
}

#[test]
fn test_config_seed_can_be_cleared() {
    let dir = tempfile::tempdir().unwrap();
    let (code, _, _) = run_cli(dir.path(), &["config", "set", "goals.seed", "42"]);
    assert_eq!(code, 0);
    let (code, _, stderr) = run_cli(dir.path(), &["config", "set", "goals.seed", "none"]);
    assert_eq!(code, 0, "clear failed: {stderr}");
    let (_, stdout, _) = run_cli(dir.path(), &["config", "get", "goals.seed"]);
    assert_eq!(stdout.trim(), "null");
}

#[test]
fn test_completions() {
    let dir = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_cli(dir.path(), &["completions", "bash"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("habitstack-cli"));
}
