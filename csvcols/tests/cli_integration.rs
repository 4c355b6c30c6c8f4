//! Integration tests for csvcols CLI

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::{tempdir, TempDir};

fn run_csvcols(args: &[&str]) -> (String, String, Option<i32>) {
    let output = Command::new(env!("CARGO_BIN_EXE_csvcols"))
        .args(args)
        .env_remove("CSVCOLS_LOG")
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    (stdout, stderr, output.status.code())
}

fn write_csv(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

/// Two files sharing `id,name`: a.csv has Alice and Bob, b.csv has Cara.
fn people_fixture() -> (TempDir, String, String) {
    let temp = tempdir().unwrap();
    let a = write_csv(temp.path(), "a.csv", "id,name\n1,Alice\n2,Bob\n");
    let b = write_csv(temp.path(), "b.csv", "id,name\n3,Cara\n");
    (
        temp,
        a.to_string_lossy().to_string(),
        b.to_string_lossy().to_string(),
    )
}

const PEOPLE_TABLE: &str = "\
--------------
| id | name  |
--------------
| 1  | Alice |
| 2  | Bob   |
| 3  | Cara  |
--------------
";

#[test]
fn test_cli_help() {
    let (stdout, _, code) = run_csvcols(&["--help"]);

    assert_eq!(code, Some(0));
    assert!(stdout.contains("csvcols"));
    assert!(stdout.contains("--files"));
    assert!(stdout.contains("--columns"));
    assert!(stdout.contains("--show-columns"));
    assert!(stdout.contains("--output"));
}

#[test]
fn test_cli_version() {
    let (stdout, _, code) = run_csvcols(&["--version"]);

    assert_eq!(code, Some(0));
    assert!(stdout.contains("csvcols"));
}

#[test]
fn test_files_are_required() {
    let (_, stderr, code) = run_csvcols(&["-c", "id"]);

    assert_eq!(code, Some(2));
    assert!(stderr.contains("--files"));
}

#[test]
fn test_extract_across_files() {
    let (_temp, a, b) = people_fixture();

    let (stdout, stderr, code) = run_csvcols(&["-f", &a, &b, "-c", "id", "name"]);

    assert_eq!(code, Some(0), "stderr: {stderr}");
    assert_eq!(stdout, PEOPLE_TABLE);
}

#[test]
fn test_repeated_columns_flag() {
    let (_temp, a, b) = people_fixture();

    let (stdout, _, code) = run_csvcols(&["-f", &a, &b, "-c", "id", "-c", "name"]);

    assert_eq!(code, Some(0));
    assert_eq!(stdout, PEOPLE_TABLE);
}

#[test]
fn test_missing_column_gives_empty_cells() {
    let temp = tempdir().unwrap();
    let ids = write_csv(temp.path(), "ids.csv", "id\n1\n2\n");
    let ids = ids.to_string_lossy();

    let (stdout, _, code) = run_csvcols(&["-f", &ids, "-c", "id", "email"]);

    assert_eq!(code, Some(0));
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines[1], "| id | email |");
    assert_eq!(lines[3], "| 1  |       |");
    assert_eq!(lines[4], "| 2  |       |");
    assert_eq!(lines.len(), 6);
}

#[test]
fn test_show_columns() {
    let temp = tempdir().unwrap();
    let a = write_csv(temp.path(), "a.csv", "id,name\n1,Alice\n");
    let b = write_csv(temp.path(), "b.csv", "id,age\n2,40\n");

    let (stdout, _, code) = run_csvcols(&[
        "-f",
        &a.to_string_lossy(),
        &b.to_string_lossy(),
        "--show-columns",
    ]);

    assert_eq!(code, Some(0));
    let mut lines = stdout.lines();
    assert_eq!(lines.next(), Some("Columns present in the selected files:"));
    let mut names: Vec<&str> = lines.collect();
    names.sort();
    assert_eq!(names, vec!["age", "id", "name"]);
}

#[test]
fn test_show_columns_ignores_column_list() {
    let (_temp, a, _) = people_fixture();

    let (stdout, _, code) = run_csvcols(&["-f", &a, "-s", "-c", "id"]);

    assert_eq!(code, Some(0));
    assert!(stdout.starts_with("Columns present in the selected files:"));
    assert!(!stdout.contains("---"));
}

#[test]
fn test_show_columns_legacy_spelling() {
    let (_temp, a, _) = people_fixture();

    let (stdout, stderr, code) = run_csvcols(&["-f", &a, "-sc"]);

    assert_eq!(code, Some(0), "stderr: {stderr}");
    assert_eq!(
        stdout,
        "Columns present in the selected files:\nid\nname\n"
    );
}

#[test]
fn test_show_columns_for_empty_file() {
    let temp = tempdir().unwrap();
    let empty = write_csv(temp.path(), "empty.csv", "");

    let (stdout, _, code) = run_csvcols(&["-f", &empty.to_string_lossy(), "--show-columns"]);

    assert_eq!(code, Some(0));
    assert_eq!(stdout, "Columns present in the selected files:\n");
}

#[test]
fn test_bracketed_file_name() {
    let temp = tempdir().unwrap();
    let path = write_csv(temp.path(), "report[2024].csv", "id\n7\n");

    let (stdout, stderr, code) = run_csvcols(&["-f", &path.to_string_lossy(), "-c", "id"]);

    assert_eq!(code, Some(0), "stderr: {stderr}");
    assert!(stdout.contains("| 7  |"));
}

#[test]
fn test_no_columns_specified() {
    let (temp, a, _) = people_fixture();
    let out = temp.path().join("out.txt");

    let (stdout, stderr, code) = run_csvcols(&["-f", &a, "-o", &out.to_string_lossy()]);

    assert_eq!(code, Some(2));
    assert!(stdout.is_empty());
    assert!(stderr.contains("Please specify columns"));
    assert!(!out.exists());
}

#[test]
fn test_zero_row_table() {
    let temp = tempdir().unwrap();
    let empty = write_csv(temp.path(), "empty.csv", "id\n");

    let (stdout, _, code) = run_csvcols(&["-f", &empty.to_string_lossy(), "-c", "id"]);

    assert_eq!(code, Some(0));
    assert_eq!(stdout, "------\n| id |\n------\n------\n");
}

#[test]
fn test_output_file_and_console() {
    let (temp, a, b) = people_fixture();
    let out = temp.path().join("table.txt");

    let (stdout, _, code) = run_csvcols(&[
        "-f",
        &a,
        &b,
        "-c",
        "id",
        "name",
        "-o",
        &out.to_string_lossy(),
    ]);

    assert_eq!(code, Some(0));
    assert_eq!(stdout, PEOPLE_TABLE);
    assert_eq!(fs::read_to_string(&out).unwrap(), PEOPLE_TABLE);
}

#[test]
fn test_glob_pattern_input() {
    let (temp, _, _) = people_fixture();
    let pattern = format!("{}/*.csv", temp.path().display());

    let (stdout, _, code) = run_csvcols(&["-f", &pattern, "-c", "id", "name"]);

    assert_eq!(code, Some(0));
    assert_eq!(stdout, PEOPLE_TABLE);
}

#[test]
fn test_custom_delimiter() {
    let temp = tempdir().unwrap();
    let semi = write_csv(temp.path(), "semi.csv", "id;name\n1;Alice\n");

    let (stdout, _, code) = run_csvcols(&["-f", &semi.to_string_lossy(), "-d", ";", "-c", "name"]);

    assert_eq!(code, Some(0));
    assert!(stdout.contains("| Alice |"));
}

#[test]
fn test_invalid_delimiter() {
    let (_temp, a, _) = people_fixture();

    let (stdout, stderr, code) = run_csvcols(&["-f", &a, "-d", "::", "-c", "id"]);

    assert_eq!(code, Some(1));
    assert!(stdout.is_empty());
    assert!(stderr.contains("Error:"));
    assert!(stderr.contains("delimiter"));
}

#[test]
fn test_json_output() {
    let (_temp, a, b) = people_fixture();

    let (stdout, _, code) = run_csvcols(&["-f", &a, &b, "-c", "name", "id", "--format", "json"]);

    assert_eq!(code, Some(0));
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("Invalid JSON output");
    assert_eq!(parsed[0]["name"], "name");
    assert_eq!(parsed[0]["values"], serde_json::json!(["Alice", "Bob", "Cara"]));
    assert_eq!(parsed[1]["name"], "id");
    assert_eq!(parsed[1]["values"], serde_json::json!(["1", "2", "3"]));
}

#[test]
fn test_invalid_path() {
    let (stdout, stderr, code) = run_csvcols(&["-f", "/nonexistent/path.csv", "-c", "id"]);

    assert_eq!(code, Some(1));
    assert!(stdout.is_empty());
    assert!(stderr.contains("Error:"));
    assert!(stderr.contains("/nonexistent/path.csv"));
}

#[test]
fn test_missing_file_aborts_whole_run() {
    let (_temp, a, _) = people_fixture();

    let (stdout, stderr, code) = run_csvcols(&["-f", &a, "/nonexistent/path.csv", "-c", "id"]);

    assert_eq!(code, Some(1));
    assert!(stdout.is_empty());
    assert!(stderr.contains("Error:"));
}

#[test]
fn test_glob_without_matches() {
    let temp = tempdir().unwrap();
    let pattern = format!("{}/*.csv", temp.path().display());

    let (_, stderr, code) = run_csvcols(&["-f", &pattern, "-c", "id"]);

    assert_eq!(code, Some(1));
    assert!(stderr.contains("no files match"));
}
