//! Integration tests for the `europa` CLI binary.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use assert_cmd::Command;
use predicates::prelude::*;

fn europa() -> Command {
    let mut cmd = Command::cargo_bin("europa").unwrap();
    cmd.args(["--text-delay-ms", "0", "--no-color", "--seed", "42"]);
    cmd
}

/// Menu answers, one per line.
fn script(lines: &[&str]) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

// ---------------------------------------------------------------------------
// startup
// ---------------------------------------------------------------------------

#[test]
fn help_lists_flags() {
    Command::cargo_bin("europa")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("--seed")
                .and(predicate::str::contains("--text-delay-ms"))
                .and(predicate::str::contains("--json-summary")),
        );
}

#[test]
fn empty_name_is_fatal() {
    europa()
        .write_stdin("\n")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("error: player name cannot be empty"));
}

#[test]
fn blank_name_flag_is_fatal() {
    europa()
        .args(["--name", "   "])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("error: player name cannot be empty"));
}

#[test]
fn name_prompt_starts_in_maintenance_bay() {
    europa()
        .write_stdin(script(&["Riley", "8", "y"]))
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Enter your name:")
                .and(predicate::str::contains("Location: Maintenance Bay"))
                .and(predicate::str::contains("examine workbench")),
        );
}

// ---------------------------------------------------------------------------
// menus
// ---------------------------------------------------------------------------

#[test]
fn end_of_input_quits_cleanly() {
    europa()
        .args(["--name", "Riley"])
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Final Statistics"));
}

#[test]
fn invalid_choice_reprompts() {
    europa()
        .args(["--name", "Riley"])
        .write_stdin(script(&["0", "12", "abc", "8", "y"]))
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid choice.").count(3));
}

#[test]
fn status_report_shows_flags_and_quest() {
    europa()
        .args(["--name", "Riley"])
        .write_stdin(script(&["7", "8", "y"]))
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Terminal Hacked")
                .and(predicate::str::contains("Security Defeated"))
                .and(predicate::str::contains("Access classified data")),
        );
}

#[test]
fn inventory_table_after_pickup() {
    europa()
        .args(["--name", "Riley"])
        .write_stdin(script(&["4", "1", "6", "8", "y"]))
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Picked up Datapad")
                .and(predicate::str::contains("Access classified information")),
        );
}

#[test]
fn airlock_refuses_without_suit() {
    europa()
        .args(["--name", "Riley"])
        .write_stdin(script(&["2", "4", "3", "2", "8", "y"]))
        .assert()
        .success()
        .stdout(predicate::str::contains("no sealed spacesuit detected"));
}

// ---------------------------------------------------------------------------
// full run
// ---------------------------------------------------------------------------

#[test]
fn walkthrough_escapes_with_json_summary() {
    let answers = script(&[
        "4", "1", // pick up Datapad
        "5", "1", // read it
        "2", "2", // Terminal Room
        "3", "1", // hack terminal
        "1", "1", "1", "1", "1", "1", // fight
        "2", "4", // Airlock
        "4", "1", // pick up Spacesuit
        "5", "2", // put it on
        "3", "2", // activate airlock
    ]);
    europa()
        .args(["--name", "Riley", "--json-summary"])
        .write_stdin(answers)
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Combat with Security Bot initiated!")
                .and(predicate::str::contains("You defeated Security Bot!"))
                .and(predicate::str::contains("VICTORY!"))
                .and(predicate::str::contains("\"escaped\": true"))
                .and(predicate::str::contains("\"locations_explored\": 3")),
        );
}
