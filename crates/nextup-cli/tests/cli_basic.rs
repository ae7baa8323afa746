//! Basic CLI end-to-end tests.
//!
//! Tests invoke the binary via cargo run and check exit codes and the JSON
//! envelopes on stdout.

use std::path::PathBuf;
use std::process::Command;

fn run_cli(args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "-p", "nextup-cli", "--quiet", "--"])
        .args(args)
        .output()
        .expect("failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

/// Write a payload fixture to a per-test temp file and return its path.
fn fixture(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("nextup-cli-{name}.json"));
    std::fs::write(&path, contents).expect("failed to write fixture");
    path
}

#[test]
fn strategies_lists_all_four() {
    let (stdout, _, code) = run_cli(&["strategies"]);
    assert_eq!(code, 0, "strategies failed");

    let json: serde_json::Value = serde_json::from_str(&stdout).expect("stdout is JSON");
    assert_eq!(json["status"], "success");
    let strategies = json["strategies"].as_array().expect("strategies array");
    assert_eq!(strategies.len(), 4);
    assert_eq!(strategies[0]["key"], "smart_balance");
}

#[test]
fn analyze_ranks_a_payload() {
    let file = fixture(
        "analyze",
        r#"[
            {"title": "Overdue report", "due_date": "2024-06-10", "importance": 9, "estimated_hours": 2},
            {"title": "Backlog grooming", "due_date": "2024-08-01", "importance": 3, "estimated_hours": 6}
        ]"#,
    );
    let (stdout, _, code) = run_cli(&[
        "analyze",
        file.to_str().unwrap(),
        "--today",
        "2024-06-15",
    ]);
    assert_eq!(code, 0, "analyze failed");

    let json: serde_json::Value = serde_json::from_str(&stdout).expect("stdout is JSON");
    assert_eq!(json["status"], "success");
    assert_eq!(json["total_tasks"], 2);
    assert_eq!(json["tasks"][0]["title"], "Overdue report");
    assert_eq!(json["tasks"][0]["priority_level"], "CRITICAL");
    assert!(json["tasks"][0]["explanation"]
        .as_str()
        .unwrap()
        .contains("overdue"));
}

#[test]
fn analyze_honors_strategy_flag() {
    let payload = r#"[
        {"title": "Big bet", "importance": 9, "estimated_hours": 8},
        {"title": "Tiny chore", "importance": 2, "estimated_hours": 0.5}
    ]"#;
    let file = fixture("strategy-flag", payload);

    let (stdout, _, code) = run_cli(&[
        "analyze",
        file.to_str().unwrap(),
        "--strategy",
        "fastest_wins",
        "--today",
        "2024-06-15",
    ]);
    assert_eq!(code, 0);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["strategy"], "fastest_wins");
    assert_eq!(json["tasks"][0]["title"], "Tiny chore");

    let (stdout, _, code) = run_cli(&[
        "analyze",
        file.to_str().unwrap(),
        "--strategy",
        "high_impact",
        "--today",
        "2024-06-15",
    ]);
    assert_eq!(code, 0);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["tasks"][0]["title"], "Big bet");
}

#[test]
fn analyze_rejects_bad_container() {
    let file = fixture("bad-container", "42");
    let (stdout, stderr, code) = run_cli(&["analyze", file.to_str().unwrap()]);
    assert_ne!(code, 0, "bad container should fail");

    let json: serde_json::Value = serde_json::from_str(&stdout).expect("error envelope on stdout");
    assert_eq!(json["status"], "error");
    assert!(json["error"].as_str().unwrap().contains("invalid payload"));
    assert!(stderr.contains("error:"));
}

#[test]
fn suggest_on_empty_list_fails() {
    let file = fixture("suggest-empty", "[]");
    let (stdout, _, code) = run_cli(&["suggest", file.to_str().unwrap()]);
    assert_ne!(code, 0, "empty suggest should fail");

    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["status"], "error");
    assert!(json["error"].as_str().unwrap().contains("nothing to suggest"));
}

#[test]
fn suggest_single_task_is_rank_one() {
    let file = fixture("suggest-single", r#"[{"title": "Only thing"}]"#);
    let (stdout, _, code) = run_cli(&["suggest", file.to_str().unwrap(), "--today", "2024-06-15"]);
    assert_eq!(code, 0);

    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["status"], "success");
    let picks = json["top_tasks"].as_array().unwrap();
    assert_eq!(picks.len(), 1);
    assert_eq!(picks[0]["rank"], 1);
    assert_eq!(picks[0]["task"]["title"], "Only thing");
    assert!(json["summary"].as_str().unwrap().contains("Only thing"));
}

#[test]
fn suggest_sample_produces_three_picks() {
    let (stdout, _, code) = run_cli(&["suggest", "--sample", "--today", "2024-06-15"]);
    assert_eq!(code, 0);

    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["status"], "success");
    assert_eq!(json["top_tasks"].as_array().unwrap().len(), 3);
    assert_eq!(json["total_analyzed"], 3);
}

#[test]
fn deps_reports_a_cycle() {
    let file = fixture(
        "deps-cycle",
        r#"[
            {"id": "a", "title": "First", "dependencies": ["b"]},
            {"id": "b", "title": "Second", "dependencies": ["a"]},
            {"id": "c", "title": "Free"}
        ]"#,
    );
    let (stdout, _, code) = run_cli(&["deps", file.to_str().unwrap()]);
    assert_eq!(code, 0);

    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["cycles"]["has_cycles"], true);
    assert_eq!(json["statistics"]["total_tasks"], 3);
    assert_eq!(json["order"]["ordered_ids"][0], "c");
}
