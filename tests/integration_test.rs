//! Integration tests for the GPC statement CLI.
//!
//! These tests run the actual binary against the statement fixture.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::NamedTempFile;

/// Get path to test data file
fn test_data_path(filename: &str) -> String {
    format!("tests/data/{}", filename)
}

#[test]
fn test_csv_export() {
    let mut cmd = Command::cargo_bin("abo-gpc").unwrap();
    let assert = cmd.arg(test_data_path("statement.gpc")).assert().success();
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();

    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(
        lines[0],
        "id,type,amount,currency,counterparty_name,counterparty_account,vs,ks,ss,due_date"
    );
    assert_eq!(
        lines[1],
        "1,debit,1234.56,CZK,Jan Novák,000000-1900133399/0100,1446556401,308,7815392681,2018-01-15"
    );
    assert_eq!(
        lines[2],
        "2,credit,500.00,EUR,Příliš žluťoučký kůň,000019-2000145399/0800,0,0,0,2018-01-20"
    );
    assert_eq!(
        lines[3],
        "3,credit-reversal,10.00,CZK,Shop,000000-123/5500,42,0,0,2018-01-25"
    );
}

#[test]
fn test_summary_output() {
    let mut cmd = Command::cargo_bin("abo-gpc").unwrap();
    cmd.arg(test_data_path("statement.gpc"))
        .arg("--summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("Statement For 2101135843 (Účet Novák)"))
        .stdout(predicate::str::contains(
            "Opening Balance -1234.00, Closing Balance 2345.00",
        ))
        .stdout(predicate::str::contains("Range 2018-01-01 - 2018-01-31"))
        .stdout(predicate::str::contains("ID: 3, Type: credit reversal"));
}

#[test]
fn test_missing_argument() {
    let mut cmd = Command::cargo_bin("abo-gpc").unwrap();
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Missing input file argument"));
}

#[test]
fn test_nonexistent_file() {
    let mut cmd = Command::cargo_bin("abo-gpc").unwrap();
    cmd.arg("tests/data/does_not_exist.gpc")
        .assert()
        .failure()
        .stderr(predicate::str::contains("I/O error"));
}

#[test]
fn test_malformed_statement_reports_record() {
    let mut bytes = fs::read(test_data_path("statement.gpc")).unwrap();
    // corrupt the record type of the second transaction (third line)
    bytes[260..263].copy_from_slice(b"076");

    let file = NamedTempFile::new().unwrap();
    fs::write(file.path(), &bytes).unwrap();

    let mut cmd = Command::cargo_bin("abo-gpc").unwrap();
    cmd.arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("transaction 2 at byte 260"))
        .stderr(predicate::str::contains("wrong txn record type '076'"));
}

#[test]
fn test_csv_export_of_header_only_statement() {
    let bytes = fs::read(test_data_path("statement.gpc")).unwrap();
    // keep the 128-column header and its CR/LF
    let file = NamedTempFile::new().unwrap();
    fs::write(file.path(), &bytes[..130]).unwrap();

    let mut cmd = Command::cargo_bin("abo-gpc").unwrap();
    cmd.arg(file.path())
        .assert()
        .success()
        .stdout("id,type,amount,currency,counterparty_name,counterparty_account,vs,ks,ss,due_date\n");
}
