//! CLI Integration Tests
//!
//! Each invocation is a fresh process, so every run starts with an
//! unconstructed logger.

use std::time::Duration;

use assert_cmd::Command;
use predicates::prelude::*;

fn solo() -> Command {
    Command::cargo_bin("solo").expect("Failed to find solo binary")
}

// ============================================================================
// Demo Command Tests
// ============================================================================

const DEMO_OUTPUT: &str = "\
Are logger1 and logger2 the same instance? true
First message.
Second message.
";

#[test]
fn test_demo_prints_shared_buffer() {
    solo().arg("demo").assert().success().stdout(DEMO_OUTPUT);
}

#[test]
fn test_demo_is_the_default_command() {
    solo().assert().success().stdout(DEMO_OUTPUT);
}

#[test]
fn test_verbose_output_stays_off_stdout() {
    solo()
        .env_remove("RUST_LOG")
        .args(["-vvv", "demo"])
        .assert()
        .success()
        .stdout(DEMO_OUTPUT)
        .stderr(predicate::str::contains("constructing singleton instance"));
}

// ============================================================================
// Race Command Tests
// ============================================================================

#[test]
fn test_race_creates_exactly_once() {
    let output = solo()
        .args(["race", "--threads", "10"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let stdout = String::from_utf8(output).unwrap();

    let created = stdout
        .lines()
        .filter(|l| *l == "Creating single instance now.")
        .count();
    let reused = stdout
        .lines()
        .filter(|l| *l == "Single instance already created.")
        .count();
    assert_eq!(created, 1);
    assert_eq!(reused, 9);

    let mut checked_in: Vec<&str> = stdout
        .lines()
        .filter(|l| l.starts_with("worker "))
        .collect();
    checked_in.sort();
    let mut expected: Vec<String> = (0..10).map(|i| format!("worker {i} checked in.")).collect();
    expected.sort();
    assert_eq!(checked_in, expected);
}

#[test]
fn test_race_single_thread() {
    solo()
        .args(["race", "-t", "1"])
        .assert()
        .success()
        .stdout("Creating single instance now.\nworker 0 checked in.\n");
}

#[test]
fn test_race_rejects_zero_threads() {
    solo()
        .args(["race", "--threads", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 1"));
}

#[test]
fn test_race_exits_with_error_when_threads_cannot_start() {
    // A stack far larger than any address space makes every spawn fail.
    let stack = (usize::MAX / 4).to_string();
    solo()
        .args(["race", "--threads", "4", "--stack-size", stack.as_str()])
        .timeout(Duration::from_secs(30))
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("failed to start worker 0 of 4"));
}

#[test]
fn test_unknown_command_fails() {
    solo().arg("bogus").assert().failure();
}
