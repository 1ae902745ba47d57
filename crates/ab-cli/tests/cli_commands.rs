//! CLI integration tests.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const ADVENTURE: &str = r#"{
  "places": {
    "start": {
      "description": "You stand at a crossroads.",
      "instructions": "Say 1 for north or 2 for south.",
      "choices": {
        "OptionOne": [{ "Goto": "north" }],
        "OptionTwo": [{ "Say": "The south road is flooded." }],
        "Yes": [{ "Pause": "abc" }]
      }
    },
    "north": {
      "description": "A quiet meadow.",
      "finished": true
    }
  }
}"#;

/// Create a temp directory holding `adventure.json`.
fn test_adventure() -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("adventure.json");
    fs::write(&path, ADVENTURE).unwrap();
    (dir, path)
}

fn ab() -> Command {
    Command::cargo_bin("ab").unwrap()
}

// ---------------------------------------------------------------------------
// check
// ---------------------------------------------------------------------------

#[test]
fn check_summarizes_places() {
    let (_dir, path) = test_adventure();

    ab().arg("check")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("north"))
        .stdout(predicate::str::contains("OptionOne"))
        .stdout(predicate::str::contains("2 places, 1 ending, 0 dangling gotos"));
}

#[test]
fn check_reports_dangling_goto() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("adventure.json");
    fs::write(
        &path,
        r#"{ "places": { "start": { "choices": { "Yes": [{ "Goto": "cellar" }] } } } }"#,
    )
    .unwrap();

    ab().arg("check")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("unknown place 'cellar'"));
}

#[test]
fn check_rejects_unknown_choice() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("adventure.json");
    fs::write(
        &path,
        r#"{ "places": { "start": { "choices": { "Dance": [{ "Say": "hi" }] } } } }"#,
    )
    .unwrap();

    ab().arg("check")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("illegal value for choice"))
        .stderr(predicate::str::contains("failed to load adventure"));
}

#[test]
fn check_rejects_unknown_extension() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("adventure.txt");
    fs::write(&path, ADVENTURE).unwrap();

    ab().arg("check")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported file format"));
}

// ---------------------------------------------------------------------------
// run
// ---------------------------------------------------------------------------

#[test]
fn run_plays_to_the_end() {
    let (_dir, path) = test_adventure();

    ab().arg("run")
        .arg(&path)
        .args(["1", "quit"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "You stand at a crossroads.\nSay 1 for north or 2 for south.\n",
        ))
        .stdout(predicate::str::contains("A quiet meadow.\n*** The End ***\n"))
        .stdout(predicate::str::ends_with("Good bye.\n"));
}

#[test]
fn run_stops_at_quit() {
    let (_dir, path) = test_adventure();

    ab().arg("run")
        .arg(&path)
        .args(["quit", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("flooded").not());
}

#[test]
fn run_rejects_unknown_words() {
    let (_dir, path) = test_adventure();

    ab().arg("run")
        .arg(&path)
        .args(["1", "dance"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown command: dance"));
}

#[test]
fn run_apologizes_for_broken_pause() {
    let (_dir, path) = test_adventure();

    ab().arg("run")
        .arg(&path)
        .args(["yes", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Oops, something went wrong. Please try again.",
        ))
        .stdout(predicate::str::contains("The south road is flooded."));
}

#[test]
fn run_reads_yaml() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("adventure.yml");
    fs::write(
        &path,
        "places:\n  start:\n    description: A yaml meadow.\n    choices:\n      Yes:\n        - Say: Indeed.\n",
    )
    .unwrap();

    ab().arg("run")
        .arg(&path)
        .arg("yes")
        .assert()
        .success()
        .stdout(predicate::str::contains("A yaml meadow.\nIndeed.\n"));
}

#[test]
fn run_resumes_from_state_file() {
    let (dir, path) = test_adventure();
    let state = dir.path().join("session.json");

    ab().arg("run")
        .arg(&path)
        .arg("1")
        .arg("--state")
        .arg(&state)
        .assert()
        .success();

    let saved = fs::read_to_string(&state).unwrap();
    assert!(saved.contains("\"currentPlaceId\": \"north\""));
    assert!(saved.contains("\"recordId\": \"console\""));

    ab().arg("run")
        .arg(&path)
        .arg("describe")
        .arg("--state")
        .arg(&state)
        .assert()
        .success()
        .stdout(predicate::str::contains("A quiet meadow."))
        .stdout(predicate::str::contains("crossroads").not());
}

// ---------------------------------------------------------------------------
// play
// ---------------------------------------------------------------------------

#[test]
fn play_reads_commands_from_stdin() {
    let (_dir, path) = test_adventure();

    ab().arg("play")
        .arg(&path)
        .arg("--no-delay")
        .write_stdin("2\n\nxyzzy\nquit\n1\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("> The south road is flooded."))
        .stdout(predicate::str::contains(
            "> Sorry, I don't know what that means.",
        ))
        .stdout(predicate::str::contains("> Good bye."))
        .stdout(predicate::str::contains("meadow").not());
}

#[test]
fn play_ends_at_end_of_input() {
    let (_dir, path) = test_adventure();

    ab().arg("play")
        .arg(&path)
        .arg("--no-delay")
        .write_stdin("1\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("*** The End ***"))
        .stdout(predicate::str::contains("Good bye.").not());
}

// ---------------------------------------------------------------------------
// export
// ---------------------------------------------------------------------------

#[test]
fn export_yaml_to_stdout() {
    let (_dir, path) = test_adventure();

    ab().arg("export")
        .arg(&path)
        .arg("yaml")
        .assert()
        .success()
        .stdout(predicate::str::contains("places:"))
        .stdout(predicate::str::contains("Goto: north"));
}

#[test]
fn export_json_to_file_reloads() {
    let (dir, path) = test_adventure();
    let out = dir.path().join("copy.json");

    ab().arg("export")
        .arg(&path)
        .arg("json")
        .arg("-o")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported to"));

    ab().arg("check")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("2 places"));
}

#[test]
fn export_rejects_unknown_format() {
    let (_dir, path) = test_adventure();

    ab().arg("export")
        .arg(&path)
        .arg("toml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported format"));
}
