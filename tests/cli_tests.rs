//! Binary-level tests for `gh-issue-import` and `scrape-text`
//!
//! None of these reach the network: they cover argument handling, setup
//! failures and dry runs.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const SAMPLE_CSV: &str = "title,body,assignee,label\n\
                          Add login page,Users need to sign in,octocat,\"[\"\"feature\"\"]\"\n\
                          ,row without a title,,\n\
                          Fix typo in README,,,\"docs, good first issue\"\n";

/// Command with no credentials, no gh CLI and no color
fn import_cmd(workdir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("gh-issue-import").unwrap();
    cmd.current_dir(workdir.path())
        .env_remove("GITHUB_TOKEN")
        .env_remove("GH_TOKEN")
        .env_remove("GITHUB_API_URL")
        .env("PATH", "")
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_import_requires_three_arguments() {
    let workdir = TempDir::new().unwrap();
    import_cmd(&workdir)
        .args(["octo", "hello-world"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("<CSV_FILE>"));
}

#[test]
fn test_import_without_token_stops_before_submitting() {
    let workdir = TempDir::new().unwrap();
    let csv = workdir.path().join("issues.csv");
    fs::write(&csv, SAMPLE_CSV).unwrap();

    import_cmd(&workdir)
        .args(["octo", "hello-world"])
        .arg(&csv)
        .assert()
        .success()
        .stderr(predicate::str::contains("No GitHub token found"))
        .stdout(predicate::str::contains("Creating issues").not());
}

#[test]
fn test_import_missing_csv_file() {
    let workdir = TempDir::new().unwrap();
    import_cmd(&workdir)
        .args(["octo", "hello-world", "nope.csv", "--dry-run"])
        .assert()
        .success()
        .stderr(predicate::str::contains("CSV file not found: nope.csv"));
}

#[test]
fn test_import_dry_run_lists_valid_rows() {
    let workdir = TempDir::new().unwrap();
    let csv = workdir.path().join("issues.csv");
    fs::write(&csv, SAMPLE_CSV).unwrap();

    import_cmd(&workdir)
        .args(["octo", "hello-world"])
        .arg(&csv)
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("Skipped line 3: empty title"))
        .stdout(predicate::str::contains("Found 2 issues to create."))
        .stdout(predicate::str::contains("would create in octo/hello-world"))
        .stdout(predicate::str::contains("Add login page"))
        .stdout(predicate::str::contains("labels: feature"))
        .stdout(predicate::str::contains("assignees: octocat"))
        .stdout(predicate::str::contains("labels: docs, good first issue"));
}

#[test]
fn test_import_header_only_csv() {
    let workdir = TempDir::new().unwrap();
    let csv = workdir.path().join("empty.csv");
    fs::write(&csv, "title,body,assignee,label\n").unwrap();

    import_cmd(&workdir)
        .args(["octo", "hello-world"])
        .arg(&csv)
        .arg("--dry-run")
        .assert()
        .success()
        .stderr(predicate::str::contains("No valid issues found in CSV file."));
}

#[test]
fn test_scrape_requires_url_and_directory() {
    Command::cargo_bin("scrape-text")
        .unwrap()
        .arg("https://example.com")
        .assert()
        .failure()
        .stderr(predicate::str::contains("<DIRECTORY>"));
}

#[test]
fn test_scrape_reports_invalid_url() {
    let out = TempDir::new().unwrap();
    Command::cargo_bin("scrape-text")
        .unwrap()
        .env("NO_COLOR", "1")
        .arg("example dot com")
        .arg(out.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("invalid URL"));
}
