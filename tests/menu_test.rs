//! Integration tests for the finance binary.
//!
//! These tests drive the interactive menu over piped stdin against a
//! temporary data directory.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Build a command running the binary against `data_dir`
fn finance(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("finance").unwrap();
    cmd.env_remove("FINANCE_LEDGER_DATA_DIR")
        .arg("--data-dir")
        .arg(data_dir.path());
    cmd
}

/// Join menu answers into stdin input
fn script(lines: &[&str]) -> String {
    let mut input = lines.join("\n");
    input.push('\n');
    input
}

#[test]
fn test_balance_after_income_and_expense() {
    let data_dir = TempDir::new().unwrap();

    finance(&data_dir)
        .write_stdin(script(&[
            "1", "alice", "1234",
            "3", "alice", "1234", "income", "1000", "salary", "2024-01",
            "3", "alice", "1234", "expense", "200", "rent", "2024-01",
            "4", "alice", "1234",
            "8",
        ]))
        .assert()
        .success()
        .stdout(predicate::str::contains("Main Balance: $800.00"))
        .stdout(predicate::str::contains("Savings: $0.00"))
        .stdout(predicate::str::contains("Total Balance: $800.00"))
        .stdout(predicate::str::contains("Data saved. Goodbye!"));

    let finance_txt = fs::read_to_string(data_dir.path().join("finance.txt")).unwrap();
    assert_eq!(
        finance_txt,
        "alice|1|income|1000.00|salary|2024-01\nalice|2|expense|200.00|rent|2024-01\n"
    );

    let account_txt = fs::read_to_string(data_dir.path().join("account.txt")).unwrap();
    assert!(account_txt.starts_with("alice|$argon2id$"));
    assert!(!account_txt.contains("1234"));
}

#[test]
fn test_data_persists_between_runs() {
    let data_dir = TempDir::new().unwrap();

    finance(&data_dir)
        .write_stdin(script(&[
            "1", "bob", "4321",
            "3", "bob", "4321", "saving", "75.25", "rainy day | fund", "2024-06",
            "8",
        ]))
        .assert()
        .success();

    finance(&data_dir)
        .write_stdin(script(&["6", "bob", "4321", "4", "bob", "4321", "8"]))
        .assert()
        .success()
        .stdout(predicate::str::contains("rainy day | fund"))
        .stdout(predicate::str::contains("Savings: $75.25"))
        .stdout(predicate::str::contains("Total Balance: $75.25"));
}

#[test]
fn test_three_wrong_pins_are_rejected() {
    let data_dir = TempDir::new().unwrap();

    finance(&data_dir)
        .write_stdin(script(&[
            "1", "alice", "1234",
            "3", "alice", "0000", "9999", "1111",
            "8",
        ]))
        .assert()
        .success()
        .stdout(predicate::str::contains("Too many attempts (3); access denied"))
        .stdout(predicate::str::contains("Saved transaction").not());

    let finance_txt = fs::read_to_string(data_dir.path().join("finance.txt")).unwrap();
    assert!(finance_txt.is_empty());
}

#[test]
fn test_unknown_account_is_rejected() {
    let data_dir = TempDir::new().unwrap();

    finance(&data_dir)
        .write_stdin(script(&["4", "nobody", "8"]))
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Authentication failed: unknown account 'nobody'",
        ));
}

#[test]
fn test_closed_stdin_exits_cleanly() {
    let data_dir = TempDir::new().unwrap();

    finance(&data_dir)
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Data saved. Goodbye!"));

    assert!(data_dir.path().join("config.json").exists());
    assert!(data_dir.path().join("account.txt").exists());
    assert!(data_dir.path().join("finance.txt").exists());
}

#[test]
fn test_config_command() {
    let data_dir = TempDir::new().unwrap();

    finance(&data_dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Max transactions: 500"))
        .stdout(predicate::str::contains("Max PIN attempts: 3"))
        .stdout(predicate::str::contains("Currency symbol:  $"));
}

#[test]
fn test_data_dir_from_environment() {
    let data_dir = TempDir::new().unwrap();

    Command::cargo_bin("finance")
        .unwrap()
        .env("FINANCE_LEDGER_DATA_DIR", data_dir.path())
        .arg("config")
        .assert()
        .success();

    assert!(data_dir.path().join("config.json").exists());
}

#[test]
fn test_invalid_settings_fail_startup() {
    let data_dir = TempDir::new().unwrap();
    fs::write(
        data_dir.path().join("config.json"),
        r#"{"max_transactions": 0}"#,
    )
    .unwrap();

    finance(&data_dir).write_stdin("8\n").assert().failure();
}
