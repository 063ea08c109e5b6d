//! End-to-end CLI tests over fixture trees built in temp directories.
//!
//! Each test lays out a small prompt repository, runs the binary against it,
//! and asserts on exit code, stdout sections, and (where requested) the JSON
//! report artifact.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::path::Path;
use tempfile::TempDir;

/// Helper to get a Command for the promptguard binary.
#[allow(deprecated)]
fn promptguard_cmd() -> Command {
    Command::cargo_bin("promptguard").expect("promptguard binary not found")
}

fn write_file(root: &Path, rel: &str, contents: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("create parent");
    }
    std::fs::write(path, contents).expect("write file");
}

fn mkdir(root: &Path, rel: &str) {
    std::fs::create_dir_all(root.join(rel)).expect("create dir");
}

const CLEAN_PROMPT: &str = r#"{"task": "summarize", "description": "d", "parameters": {}}"#;

#[test]
fn clean_repository_exits_zero() {
    let tmp = TempDir::new().expect("temp dir");
    write_file(tmp.path(), "prompts/AB_V1.json", CLEAN_PROMPT);
    mkdir(tmp.path(), "YAML-versions/prompts");

    promptguard_cmd()
        .arg("--root")
        .arg(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Layout\n  ok"))
        .stdout(predicate::str::contains(
            "prompts/AB_V1.json  syntax ok | structure ok | naming ok",
        ))
        .stdout(predicate::str::contains("all checks passed"))
        .stdout(predicate::str::contains("verdict: PASS"));
}

#[test]
fn naming_issue_fails_with_scoped_summary_line() {
    let tmp = TempDir::new().expect("temp dir");
    write_file(tmp.path(), "prompts/A_V1.json", CLEAN_PROMPT);
    mkdir(tmp.path(), "YAML-versions/prompts");

    promptguard_cmd()
        .arg("--root")
        .arg(tmp.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "prompts/A_V1.json: acronym should be at least 2 characters",
        ))
        .stdout(predicate::str::contains("1 issue(s) found"))
        .stdout(predicate::str::contains("verdict: FAIL"));
}

#[test]
fn syntax_error_fails_and_skips_other_checks_for_that_file() {
    let tmp = TempDir::new().expect("temp dir");
    // The name would trip the naming check if it ran.
    write_file(tmp.path(), "prompts/BADNAME.json", r#"{"task": "x",}"#);
    mkdir(tmp.path(), "YAML-versions/prompts");

    promptguard_cmd()
        .arg("--root")
        .arg(tmp.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("syntax FAIL"))
        .stdout(predicate::str::contains("JSON syntax error"))
        .stdout(predicate::str::contains("ACRONYM_V").not())
        .stdout(predicate::str::contains("missing recommended field").not());
}

#[test]
fn layout_mismatch_reports_structure_scope() {
    let tmp = TempDir::new().expect("temp dir");
    write_file(tmp.path(), "foo/AB_V1.json", CLEAN_PROMPT);
    mkdir(tmp.path(), "bar");
    mkdir(tmp.path(), "YAML-versions/foo");

    promptguard_cmd()
        .arg("--root")
        .arg(tmp.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "STRUCTURE: missing YAML versions for directories: bar",
        ));
}

#[test]
fn empty_root_exits_zero_with_notice() {
    let tmp = TempDir::new().expect("temp dir");

    promptguard_cmd()
        .arg("--root")
        .arg(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "no prompt files found; nothing validated",
        ));
}

#[test]
fn dot_directories_are_skipped_at_every_depth() {
    let tmp = TempDir::new().expect("temp dir");
    write_file(tmp.path(), "prompts/AB_V1.json", CLEAN_PROMPT);
    write_file(tmp.path(), ".git/objects/NOT_JSON.json", "{broken");
    write_file(tmp.path(), "prompts/.cache/XX.json", "{broken");
    mkdir(tmp.path(), "YAML-versions/prompts");

    promptguard_cmd()
        .arg("--root")
        .arg(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Files (1 scanned)"));
}

#[test]
fn report_artifact_is_written_and_parseable() {
    let tmp = TempDir::new().expect("temp dir");
    let out = TempDir::new().expect("out dir");
    write_file(tmp.path(), "prompts/A_V1.json", CLEAN_PROMPT);
    mkdir(tmp.path(), "YAML-versions/prompts");

    let report_path = out.path().join("artifacts/report.json");
    promptguard_cmd()
        .arg("--root")
        .arg(tmp.path())
        .arg("--report-out")
        .arg(&report_path)
        .assert()
        .code(1);

    let text = std::fs::read_to_string(&report_path).expect("read report");
    let report: Value = serde_json::from_str(&text).expect("parse report");
    assert_eq!(report["schema"], "promptguard.report.v1");
    assert_eq!(report["verdict"], "fail");
    assert_eq!(report["findings"][0]["code"], "short_acronym");
    assert!(report["findings"][0]["fingerprint"].is_string());
}

#[test]
fn markdown_artifact_is_written() {
    let tmp = TempDir::new().expect("temp dir");
    let out = TempDir::new().expect("out dir");
    write_file(tmp.path(), "prompts/AB_V1.json", CLEAN_PROMPT);
    mkdir(tmp.path(), "YAML-versions/prompts");

    let md_path = out.path().join("comment.md");
    promptguard_cmd()
        .arg("--root")
        .arg(tmp.path())
        .arg("--markdown-out")
        .arg(&md_path)
        .assert()
        .success();

    let md = std::fs::read_to_string(&md_path).expect("read markdown");
    assert!(md.contains("# Promptguard report"));
    assert!(md.contains("Verdict: **PASS**"));
}

#[test]
fn lenient_profile_downgrades_advisory_findings() {
    let tmp = TempDir::new().expect("temp dir");
    write_file(tmp.path(), "prompts/A_V1.json", CLEAN_PROMPT);
    mkdir(tmp.path(), "YAML-versions/prompts");

    promptguard_cmd()
        .arg("--root")
        .arg(tmp.path())
        .arg("--profile")
        .arg("lenient")
        .assert()
        .success()
        .stdout(predicate::str::contains("verdict: WARN"));
}

#[test]
fn config_file_in_root_is_honored() {
    let tmp = TempDir::new().expect("temp dir");
    write_file(tmp.path(), "prompts/A_V1.json", CLEAN_PROMPT);
    mkdir(tmp.path(), "YAML-versions/prompts");
    write_file(
        tmp.path(),
        "promptguard.toml",
        "[checks.\"file.naming\"]\nenabled = false\n",
    );

    promptguard_cmd()
        .arg("--root")
        .arg(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("all checks passed"));
}

#[test]
fn missing_root_reports_runtime_error() {
    promptguard_cmd()
        .arg("--root")
        .arg("/nonexistent/promptguard-root")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("promptguard error"));
}

#[test]
fn runs_are_idempotent() {
    let tmp = TempDir::new().expect("temp dir");
    write_file(tmp.path(), "prompts/A_V1.json", CLEAN_PROMPT);
    write_file(tmp.path(), "prompts/AB_V1x.json", CLEAN_PROMPT);
    mkdir(tmp.path(), "bar");
    mkdir(tmp.path(), "YAML-versions/prompts");

    let first = promptguard_cmd()
        .arg("--root")
        .arg(tmp.path())
        .output()
        .expect("run");
    let second = promptguard_cmd()
        .arg("--root")
        .arg(tmp.path())
        .output()
        .expect("run");

    assert_eq!(first.status.code(), Some(1));
    assert_eq!(first.status.code(), second.status.code());
    assert_eq!(first.stdout, second.stdout);
}
