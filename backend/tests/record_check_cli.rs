//! End-to-end tests for the `record-check` binary.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use std::io::Write;
use std::process::{Command, Output};

use rstest::rstest;
use tempfile::NamedTempFile;

fn rows_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write rows");
    file
}

fn record_check(table: &str, file: &NamedTempFile, fail_fast: bool) -> Output {
    Command::new(env!("CARGO_BIN_EXE_record-check"))
        .args(["--table", table, "--input"])
        .arg(file.path())
        .env("RECORD_CHECK_FAIL_FAST", fail_fast.to_string())
        .env_remove("RECORD_CHECK_JSON_LOGS")
        .env_remove("RUST_LOG")
        .output()
        .expect("record-check should run")
}

#[rstest]
fn clean_batch_exits_successfully() {
    let file = rows_file(
        r#"[
            {"id": "3fa85f64-5717-4562-b3fc-2c963f66afa6", "name": "Fall 2022 - 2023"},
            {"name": "Spring 2023"}
        ]"#,
    );
    let output = record_check("terms", &file, false);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("utf-8 stdout");
    assert_eq!(
        stdout.trim_end(),
        "terms: checked 2 row(s), accepted 2, rejected 0"
    );
}

#[rstest]
fn rejected_rows_fail_the_run() {
    let file = rows_file(
        r#"[
            {"username": "ada", "email": "ada@gmail.com", "password": "pw",
             "first_name": "Ada", "last_name": "Lovelace", "credits": 3, "grade": 4.0},
            {"username": "bob", "email": "bob@mail.aub.edu", "password": "pw",
             "first_name": "Bob", "last_name": "Smith", "credits": 30, "grade": 3.1}
        ]"#,
    );
    let output = record_check("users", &file, false);

    assert!(!output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("utf-8 stdout");
    assert!(stdout.starts_with("users: checked 2 row(s), accepted 1, rejected 1"));
    assert!(stdout.contains("row 0: ada@gmail.com is an invalid email"));
}

#[rstest]
fn fail_fast_is_read_from_the_environment() {
    let file = rows_file(r#"[{"id": "bad"}, {"id": "worse"}]"#);
    let output = record_check("courses", &file, true);

    assert!(!output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("utf-8 stdout");
    assert!(stdout.starts_with("courses: checked 1 row(s), accepted 0, rejected 1"));
}

#[rstest]
fn unreadable_input_reports_an_error() {
    let file = rows_file("not json");
    let output = record_check("courses", &file, false);

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).expect("utf-8 stderr");
    assert!(stderr.contains("are not a JSON array"));
}
