//! Integration tests for the hotel binary.
//!
//! These tests drive the interactive menu through stdin and verify:
//! - Booking, conflict detection and same-day turnover
//! - Check-in/check-out and cancellation messages
//! - Configuration loading and command-line overrides
//! - JSON rendering of the bookings listing

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to create an isolated config directory
fn setup_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Helper to get the CLI binary with no user config in scope
fn cli(config_home: &TempDir) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("hotel"));
    cmd.env("XDG_CONFIG_HOME", config_home.path());
    cmd.env_remove("RUST_LOG");
    cmd
}

fn book(name: &str, room: u32, check_in: &str, check_out: &str) -> String {
    format!("2\n{}\n{}\n{}\n{}\n", name, room, check_in, check_out)
}

#[test]
fn test_cli_help() {
    let home = setup_test_dir();
    cli(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("In-memory hotel reservation manager"));
}

#[test]
fn test_exit_from_menu() {
    let home = setup_test_dir();
    cli(&home)
        .write_stdin("9\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Main Menu"))
        .stdout(predicate::str::contains("Thank You!"));
}

#[test]
fn test_empty_input_exits_cleanly() {
    let home = setup_test_dir();
    cli(&home).write_stdin("").assert().success();
}

#[test]
fn test_same_day_turnover_session() {
    let home = setup_test_dir();
    let script = [
        book("Alice", 5, "01 06 2024", "05 06 2024"),
        book("Bob", 5, "03 06 2024", "07 06 2024"),
        book("Carol", 5, "05 06 2024", "10 06 2024"),
        "7\n9\n".to_string(),
    ]
    .concat();

    let output = cli(&home)
        .arg("session")
        .write_stdin(script)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let stdout = String::from_utf8_lossy(&output);
    assert_eq!(stdout.matches("Room booked successfully").count(), 2);
    assert!(stdout.contains("Room is not available for the given dates."));
    assert!(stdout.contains("Customer: Alice, Room: 5"));
    assert!(stdout.contains("Customer: Carol, Room: 5"));
    assert!(!stdout.contains("Customer: Bob"));
}

#[test]
fn test_check_in_and_out_session() {
    let home = setup_test_dir();
    let script = [
        book("Alice", 5, "01 06 2024", "05 06 2024"),
        "4\n5\n4\n5\n5\n5\n5\n5\n9\n".to_string(),
    ]
    .concat();

    cli(&home)
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Check-in successful for Alice in room number 5.",
        ))
        .stdout(predicate::str::contains("Customer Alice is already checked in."))
        .stdout(predicate::str::contains(
            "Check-out successful for Alice from room number 5.",
        ))
        .stdout(predicate::str::contains(
            "No checked-in customer found for the given room number.",
        ));
}

#[test]
fn test_cancel_session() {
    let home = setup_test_dir();
    let script = [
        book("Alice", 5, "01 06 2024", "05 06 2024"),
        "6\n5\n6\n".to_string(),
        "9\n".to_string(),
    ]
    .concat();

    cli(&home)
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Booking for room 5 has been canceled."))
        .stdout(predicate::str::contains("No bookings available to cancel."));
}

#[test]
fn test_max_rooms_override() {
    let home = setup_test_dir();
    cli(&home)
        .arg("--max-rooms")
        .arg("10")
        .write_stdin("3\n11\n10\n01 06 2024\n02 06 2024\n9\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Enter room number (1-10)"))
        .stdout(predicate::str::contains(
            "Please enter a valid room number between 1 and 10.",
        ))
        .stdout(predicate::str::contains("Room is available for the given dates."));
}

#[test]
fn test_max_customers_override() {
    let home = setup_test_dir();
    let script = [
        book("Alice", 1, "01 06 2024", "05 06 2024"),
        "2\n9\n".to_string(),
    ]
    .concat();

    cli(&home)
        .arg("--max-customers")
        .arg("1")
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Customer limit reached. Cannot book more rooms.",
        ));
}

#[test]
fn test_zero_rooms_rejected() {
    let home = setup_test_dir();
    cli(&home)
        .arg("--max-rooms")
        .arg("0")
        .write_stdin("9\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("max_rooms"));
}

#[test]
fn test_config_file() {
    let home = setup_test_dir();
    let config_path = home.path().join("custom.toml");
    fs::write(
        &config_path,
        r#"
[hotel]
name = "Harbour Inn"
services = ["Breakfast"]

[limits]
max_rooms = 3
"#,
    )
    .unwrap();

    cli(&home)
        .arg("--config")
        .arg(&config_path)
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains("-Harbour Inn-"))
        .stdout(predicate::str::contains("  - Breakfast"));

    cli(&home)
        .arg("--config")
        .arg(&config_path)
        .write_stdin("3\n4\n3\n01 06 2024\n02 06 2024\n9\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Enter room number (1-3)"));
}

#[test]
fn test_default_config_location() {
    let home = setup_test_dir();
    let config_dir = home.path().join("hotel");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(
        config_dir.join("config.toml"),
        "[hotel]\nname = \"Seaside Lodge\"\n",
    )
    .unwrap();

    cli(&home)
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains("-Seaside Lodge-"))
        .stdout(predicate::str::contains("Room Service"));
}

#[test]
fn test_malformed_config_fails() {
    let home = setup_test_dir();
    let config_path = home.path().join("broken.toml");
    fs::write(&config_path, "[limits\nmax_rooms =").unwrap();

    cli(&home)
        .arg("--config")
        .arg(&config_path)
        .arg("info")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Toml"));
}

#[test]
fn test_json_listing() {
    let home = setup_test_dir();
    let script = [
        book("Alice", 5, "01 06 2024", "05 06 2024"),
        book("Carol", 7, "02/06/2024", "04/06/2024"),
        "4\n7\n7\n9\n".to_string(),
    ]
    .concat();

    let output = cli(&home)
        .arg("--format")
        .arg("json")
        .write_stdin(script)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let stdout = String::from_utf8_lossy(&output);
    let records: Vec<serde_json::Value> = stdout
        .lines()
        .filter_map(|l| l.find('{').map(|i| &l[i..]))
        .map(|l| serde_json::from_str(l).expect("valid JSON line"))
        .collect();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["guest_name"], "Alice");
    assert_eq!(records[0]["checked_in"], false);
    assert_eq!(records[1]["guest_name"], "Carol");
    assert_eq!(records[1]["id"]["room"], 7);
    assert_eq!(records[1]["checked_in"], true);
    assert_eq!(records[1]["stay"]["check_out"]["day"], 4);
}
