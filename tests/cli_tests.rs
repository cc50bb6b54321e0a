mod common;

use common::LABEL_BLOCK_TRANSCRIPT;
use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

struct TestContext {
    dir: TempDir,
    transcript: PathBuf,
}

impl TestContext {
    fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let transcript = dir.path().join("kwame.txt");
        fs::write(&transcript, LABEL_BLOCK_TRANSCRIPT).unwrap();
        Self { dir, transcript }
    }
}

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_admitscore"))
        .args(args)
        .output()
        .expect("Failed to run admitscore")
}

#[test]
fn test_review_json() {
    let ctx = TestContext::new();
    let out = run(&["review", ctx.transcript.to_str().unwrap(), "--format", "json"]);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));

    let value: serde_json::Value = serde_json::from_slice(&out.stdout).expect("stdout is JSON");
    assert_eq!(value["record"]["candidate_name"], "KWAME MENSAH");
    assert_eq!(value["report"]["aggregate_score"], 18);
    assert_eq!(value["report"]["final_score"], 15);
}

#[test]
fn test_review_table_hides_science_scores_for_arts() {
    let ctx = TestContext::new();
    let out = run(&["review", ctx.transcript.to_str().unwrap(), "--major", "arts_and_science"]);
    assert!(out.status.success());

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("KWAME MENSAH"));
    assert!(stdout.contains("Core Maths"));
    assert!(!stdout.contains("Elective Maths"));
    assert!(stdout.contains("Integrated Science"));
}

#[test]
fn test_profile_then_cli_override() {
    let ctx = TestContext::new();
    let profile = ctx.dir.path().join("profile.json");
    fs::write(&profile, r#"{"format": "json", "major": "arts_and_science"}"#).unwrap();

    let out = run(&[
        "review",
        ctx.transcript.to_str().unwrap(),
        "--profile",
        profile.to_str().unwrap(),
        "--major",
        "engineering",
    ]);
    assert!(out.status.success());
    let value: serde_json::Value = serde_json::from_slice(&out.stdout).expect("stdout is JSON");
    assert_eq!(value["major"], "engineering");
}

#[test]
fn test_batch_writes_csv() {
    let ctx = TestContext::new();
    let csv_path = ctx.dir.path().join("summary.csv");
    let out = run(&[
        "batch",
        ctx.dir.path().to_str().unwrap(),
        "--csv",
        csv_path.to_str().unwrap(),
    ]);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));

    let csv = fs::read_to_string(&csv_path).unwrap();
    let mut lines = csv.lines();
    assert_eq!(
        lines.next(),
        Some("source,candidate_name,subjects,aggregate_score,final_score,core_maths_score,elective_maths_score,physics_score")
    );
    assert_eq!(lines.next(), Some("kwame,KWAME MENSAH,8,18,15,6,10,6"));
}

#[test]
fn test_missing_input_fails() {
    let ctx = TestContext::new();
    let missing = ctx.dir.path().join("missing.txt");
    let out = run(&["review", missing.to_str().unwrap()]);
    assert!(!out.status.success());
}
