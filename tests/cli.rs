#![allow(deprecated)]

// End-to-end tests for the golangci-teamcity binary.
//
// Each test runs in a fresh temp dir with HOME pointed at it so no user or
// repository config leaks in.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const REPORT: &str = r#"{
  "Issues": [
    {"FromLinter": "govet", "Text": "unused var", "Pos": {"Filename": "a.go", "Line": 10, "Column": 2}}
  ],
  "Report": {
    "Linters": [
      {"Name": "unused", "Enabled": false},
      {"Name": "govet", "Enabled": true}
    ]
  }
}"#;

fn converter(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("golangci-teamcity").expect("binary should compile");
    cmd.current_dir(dir.path())
        .env("HOME", dir.path())
        .env_remove("RUST_LOG");
    cmd
}

/// Output lines with the timestamp attribute value blanked out.
fn normalized_lines(stdout: &[u8]) -> Vec<String> {
    String::from_utf8(stdout.to_vec())
        .expect("stdout should be utf-8")
        .lines()
        .map(|line| {
            let start = line.find("timestamp='").expect("timestamp attribute") + 11;
            format!("{}<ts>{}", &line[..start], &line[start + 23..])
        })
        .collect()
}

#[test]
fn cli_version_flag() {
    let dir = TempDir::new().expect("temp dir should be created");
    converter(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("golangci-teamcity"));
}

#[test]
fn cli_help_flag() {
    let dir = TempDir::new().expect("temp dir should be created");
    converter(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("TeamCity"));
}

#[test]
fn converts_report_from_stdin_in_name_order() {
    let dir = TempDir::new().expect("temp dir should be created");
    let output = converter(&dir)
        .write_stdin(REPORT)
        .assert()
        .code(0)
        .get_output()
        .clone();

    assert_eq!(
        normalized_lines(&output.stdout),
        vec![
            "##teamcity[testStarted timestamp='<ts>' name='linter: govet']",
            "##teamcity[testStdErr timestamp='<ts>' name='linter: govet' out='a.go:10 - unused var']",
            "##teamcity[testFailed timestamp='<ts>' name='linter: govet']",
            "##teamcity[testStarted timestamp='<ts>' name='linter: unused']",
            "##teamcity[testIgnored timestamp='<ts>' name='linter: unused']",
        ]
    );
}

#[test]
fn report_order_flag_keeps_linter_list_order() {
    let dir = TempDir::new().expect("temp dir should be created");
    let output = converter(&dir)
        .args(["--order", "report"])
        .write_stdin(REPORT)
        .assert()
        .code(0)
        .get_output()
        .clone();

    let lines = normalized_lines(&output.stdout);
    assert_eq!(
        lines[0],
        "##teamcity[testStarted timestamp='<ts>' name='linter: unused']"
    );
    assert_eq!(
        lines[2],
        "##teamcity[testStarted timestamp='<ts>' name='linter: govet']"
    );
}

#[test]
fn reads_report_from_input_file() {
    let dir = TempDir::new().expect("temp dir should be created");
    let path = dir.path().join("lint.json");
    fs::write(
        &path,
        r#"{"Issues": null, "Report": {"Linters": [{"Name": "errcheck", "Enabled": true}]}}"#,
    )
    .expect("report should write");

    let output = converter(&dir)
        .arg("--input")
        .arg(&path)
        .assert()
        .code(0)
        .get_output()
        .clone();

    assert_eq!(
        normalized_lines(&output.stdout),
        vec![
            "##teamcity[testStarted timestamp='<ts>' name='linter: errcheck']",
            "##teamcity[testFinished timestamp='<ts>' name='linter: errcheck']",
        ]
    );
}

#[test]
fn escapes_names_and_issue_text() {
    let dir = TempDir::new().expect("temp dir should be created");
    let report = r#"{
      "Issues": [{"FromLinter": "odd[1]", "Text": "can't|do\nthis", "Pos": {"Filename": "x.go", "Line": 4}}],
      "Report": {"Linters": [{"Name": "odd[1]", "EnabledByDefault": true}]}
    }"#;

    converter(&dir)
        .write_stdin(report)
        .assert()
        .code(0)
        .stdout(predicate::str::contains(
            "name='linter: odd|[1|]' out='x.go:4 - can|'t||do|nthis']",
        ));
}

#[test]
fn malformed_input_exits_non_zero_without_output() {
    let dir = TempDir::new().expect("temp dir should be created");
    converter(&dir)
        .write_stdin("{\"Issues\": [")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("decoding input"));
}

#[test]
fn unknown_linter_fails_fast_by_default() {
    let dir = TempDir::new().expect("temp dir should be created");
    let report = r#"{
      "Issues": [{"FromLinter": "gosec", "Text": "G101", "Pos": {"Filename": "main.go", "Line": 3}}],
      "Report": {"Linters": [{"Name": "govet", "Enabled": true}]}
    }"#;

    converter(&dir)
        .write_stdin(report)
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("unknown linter: gosec"));
}

#[test]
fn unknown_linter_can_be_synthesized_from_config() {
    let dir = TempDir::new().expect("temp dir should be created");
    fs::write(
        dir.path().join("golangci-teamcity.toml"),
        "[normalize]\nunknown_linter = \"synthesize\"\n",
    )
    .expect("config should write");
    let report = r#"{
      "Issues": [{"FromLinter": "gosec", "Text": "G101", "Pos": {"Filename": "main.go", "Line": 3}}],
      "Report": {"Linters": [{"Name": "govet", "Enabled": true}]}
    }"#;

    converter(&dir)
        .write_stdin(report)
        .assert()
        .code(0)
        .stdout(predicate::str::contains(
            "name='linter: gosec' out='main.go:3 - G101'",
        ))
        .stdout(predicate::str::contains("testFailed"));
}

#[test]
fn cli_flag_overrides_config_file() {
    let dir = TempDir::new().expect("temp dir should be created");
    fs::write(
        dir.path().join("golangci-teamcity.toml"),
        "[normalize]\nunknown_linter = \"synthesize\"\n",
    )
    .expect("config should write");
    let report = r#"{
      "Issues": [{"FromLinter": "gosec", "Text": "G101", "Pos": {"Filename": "main.go", "Line": 3}}],
      "Report": {"Linters": []}
    }"#;

    converter(&dir)
        .args(["--unknown-linter", "fail"])
        .write_stdin(report)
        .assert()
        .code(1);
}

#[test]
fn missing_config_file_exits_with_config_failure() {
    let dir = TempDir::new().expect("temp dir should be created");
    converter(&dir)
        .args(["--config", "absent.toml"])
        .write_stdin(REPORT)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("config file not found"));
}

#[test]
fn report_warnings_go_to_stderr_only() {
    let dir = TempDir::new().expect("temp dir should be created");
    let report = r#"{
      "Issues": [],
      "Report": {
        "Linters": [{"Name": "govet", "Enabled": true}],
        "Warnings": [{"Tag": "runner", "Text": "can't run linter goanalysis_metalinter"}]
      }
    }"#;

    converter(&dir)
        .write_stdin(report)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("testFinished"))
        .stdout(predicate::str::contains("goanalysis").not())
        .stderr(predicate::str::contains("goanalysis_metalinter"));
}
