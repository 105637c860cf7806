#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable
//! End-to-end tests for the `darkwood` binary.

use assert_cmd::Command;
use predicates::prelude::*;

/// START -> Fogwood -> track the perimeter -> avoid the clearing -> merchants.
/// No combat and no roll checks on the way.
const SAFE_ROUTE: &str = "2\n1\n2\n2\n";

fn darkwood() -> Command {
    Command::cargo_bin("darkwood").unwrap()
}

fn play() -> Command {
    let mut cmd = darkwood();
    cmd.args(["play", "--no-pause", "--seed", "7"]);
    cmd
}

// ---------------------------------------------------------------------------
// check
// ---------------------------------------------------------------------------

#[test]
fn check_passes_for_builtin_story() {
    darkwood()
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("All checks passed"))
        .stdout(predicate::str::contains("37 scenes"))
        .stdout(predicate::str::contains("1 roll checks"));
}

// ---------------------------------------------------------------------------
// scenes
// ---------------------------------------------------------------------------

#[test]
fn scenes_table_lists_enemies_and_loot() {
    darkwood()
        .arg("scenes")
        .assert()
        .success()
        .stdout(predicate::str::contains("Kraan (20 HP)"))
        .stdout(predicate::str::contains("Mage Armor (Defense: +4)"))
        .stdout(predicate::str::contains("37 scenes"));
}

#[test]
fn scenes_json_is_parseable() {
    let output = darkwood().args(["scenes", "--json"]).output().unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let scenes = value.as_array().unwrap();
    assert_eq!(scenes.len(), 37);
    assert_eq!(scenes[0]["id"], 1);
    assert_eq!(scenes[0]["terminal"], false);

    let approach = scenes.iter().find(|s| s["id"] == 10).unwrap();
    assert_eq!(approach["choices"][0]["min_roll"], 10);
    assert_eq!(approach["choices"][0]["fail"], 11);
}

// ---------------------------------------------------------------------------
// play
// ---------------------------------------------------------------------------

#[test]
fn play_safe_route_reaches_an_ending() {
    play()
        .args(["--name", "Tester"])
        .write_stdin(SAFE_ROUTE)
        .assert()
        .success()
        .stdout(predicate::str::contains("Flight from the Dark"))
        .stdout(predicate::str::contains("you, Tester,"))
        .stdout(predicate::str::contains("- - - Scene 31 - - -"))
        .stdout(predicate::str::contains("The End"))
        .stdout(predicate::str::contains("completed at scene 31"));
}

#[test]
fn play_asks_for_a_name() {
    play()
        .write_stdin(format!("  Ana  \n{SAFE_ROUTE}"))
        .assert()
        .success()
        .stdout(predicate::str::contains("What is your name: "))
        .stdout(predicate::str::contains("you, Ana,"));
}

#[test]
fn play_inventory_does_not_spend_the_choice() {
    play()
        .args(["--name", "Tester"])
        .write_stdin(format!("3\n1\n0\n{SAFE_ROUTE}"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Wooden Sword (Attack: +2) (Equipped)"))
        .stdout(predicate::str::contains("completed at scene 31"));
}

#[test]
fn play_with_no_input_ends_gracefully() {
    play()
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Input closed"));
}

#[test]
fn play_recovers_from_bad_input() {
    play()
        .args(["--name", "Tester"])
        .write_stdin("x\nx\nx\nx\nx\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid choice. Please try again: "))
        .stdout(predicate::str::contains("Too many invalid attempts. Defaulting to 0."))
        .stdout(predicate::str::contains("Input closed"));
}

#[test]
fn play_treats_non_utf8_line_as_invalid_choice() {
    let mut input = b"\xff\xfe\n".to_vec();
    input.extend_from_slice(SAFE_ROUTE.as_bytes());
    play()
        .args(["--name", "Tester"])
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid choice. Please try again: "))
        .stdout(predicate::str::contains("completed at scene 31"))
        .stdout(predicate::str::contains("Input closed").not());
}

#[test]
fn help_lists_subcommands() {
    darkwood()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("play"))
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("scenes"));
}
