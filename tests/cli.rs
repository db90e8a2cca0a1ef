//! Binary-level smoke tests.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_help_lists_commands() {
    let mut cmd = Command::cargo_bin("sesh").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("study"))
        .stdout(predicate::str::contains("tasks"));
}

#[test]
fn test_version() {
    let mut cmd = Command::cargo_bin("sesh").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("sesh"));
}

#[test]
fn test_unknown_subcommand_fails() {
    let mut cmd = Command::cargo_bin("sesh").unwrap();
    cmd.arg("definitely-not-a-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_study_help_mentions_blocking() {
    let mut cmd = Command::cargo_bin("sesh").unwrap();
    cmd.args(["study", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--no-block"));
}

#[test]
fn test_tasks_help_mentions_subcommands() {
    let mut cmd = Command::cargo_bin("sesh").unwrap();
    cmd.args(["tasks", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("lists"))
        .stdout(predicate::str::contains("add"));
}

#[test]
fn test_interactive_menu_exits_cleanly() {
    let mut cmd = Command::cargo_bin("sesh").unwrap();
    cmd.write_stdin("exit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Stay productive"));
}

#[test]
fn test_interactive_menu_reprompts_on_unknown_choice() {
    let mut cmd = Command::cargo_bin("sesh").unwrap();
    cmd.write_stdin("dance\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Unknown choice"));
}

#[test]
fn test_completions_generate() {
    let mut cmd = Command::cargo_bin("sesh").unwrap();
    cmd.args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sesh"));
}
