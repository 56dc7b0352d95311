//! Command-line integration tests for the `dicesim` binary.
//!
//! Each test runs the real executable through `assert_cmd`, with the
//! `DICESIM_*` and `RUST_LOG` variables cleared so the host environment
//! cannot leak into the results. Output is stripped of ANSI codes before any
//! assertion.

use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use strip_ansi_escapes::strip as strip_ansi_escapes_fn;

/// Builds an isolated `dicesim` command.
fn dicesim_cmd() -> Command {
    let mut cmd = Command::cargo_bin("dicesim").unwrap();
    for var in ["RUST_LOG", "DICESIM_DICE", "DICESIM_SIDES", "DICESIM_ROLLS", "DICESIM_SEED"] {
        cmd.env_remove(var);
    }
    cmd
}

fn strip_ansi(s: &[u8]) -> String {
    String::from_utf8_lossy(&strip_ansi_escapes_fn(s)).to_string()
}

#[test]
fn roll_prints_table_statistics_and_analysis() -> Result<()> {
    let output = dicesim_cmd()
        .args(["--no-color", "roll", "--dice", "2", "--sides", "6", "--rolls", "5", "--seed", "7"])
        .output()?;
    assert!(output.status.success());

    let stdout = strip_ansi(&output.stdout);
    assert!(stdout.contains("Rolling 2d6 5 time(s)..."));
    assert!(stdout.contains("ROLL RESULTS"));
    assert!(stdout.contains("Total Sum:"));
    assert!(stdout.contains("Over 5 rolls with 2d6:"));
    assert!(stdout.contains("Distribution range:"));
    Ok(())
}

#[test]
fn single_roll_gets_a_single_roll_verdict() {
    dicesim_cmd()
        .args(["roll", "-n", "3", "-s", "8", "--seed", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("You rolled 3 dice with 8 sides each."));
}

#[test]
fn json_output_is_machine_readable() -> Result<()> {
    let output = dicesim_cmd()
        .args(["roll", "-n", "4", "-s", "12", "-r", "20", "--seed", "42", "--json"])
        .output()?;
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout)?;
    let rolls = json["rolls"].as_array().expect("rolls array");
    assert_eq!(rolls.len(), 20);
    for set in rolls {
        let set = set.as_array().expect("roll set array");
        assert_eq!(set.len(), 4);
        assert!(set.iter().all(|v| (1..=12).contains(&v.as_u64().unwrap())));
    }
    assert_eq!(json["config"]["sides"], 12);
    assert_eq!(json["analysis"]["expected_average"], 26.0);
    assert_eq!(json["statistics"]["all_values"].as_array().unwrap().len(), 80);
    Ok(())
}

#[test]
fn same_seed_reproduces_the_same_rolls() -> Result<()> {
    let run = || -> Result<Vec<u8>> {
        Ok(dicesim_cmd()
            .args(["roll", "-n", "5", "-s", "100", "-r", "10", "--json"])
            .env("DICESIM_SEED", "1234")
            .output()?
            .stdout)
    };
    assert_eq!(run()?, run()?);
    Ok(())
}

#[test]
fn dice_parameters_can_come_from_the_environment() -> Result<()> {
    let output = dicesim_cmd()
        .args(["roll", "--json", "--seed", "5"])
        .env("DICESIM_DICE", "3")
        .env("DICESIM_SIDES", "4")
        .env("DICESIM_ROLLS", "2")
        .output()?;
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(json["config"]["dice_count"], 3);
    assert_eq!(json["config"]["sides"], 4);
    assert_eq!(json["config"]["roll_count"], 2);
    Ok(())
}

#[test]
fn out_of_range_arguments_fail() {
    dicesim_cmd()
        .args(["roll", "--dice", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not in 1..=20"));

    dicesim_cmd()
        .args(["roll", "--rolls", "500"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not in 1..=100"));

    dicesim_cmd()
        .args(["roll", "--sides", "zero"])
        .assert()
        .failure();
}

#[test]
fn debug_flag_enables_logging_on_stderr() -> Result<()> {
    let output = dicesim_cmd()
        .args(["--debug", "roll", "-n", "2", "-r", "3", "--seed", "1"])
        .output()?;
    assert!(output.status.success());

    let stderr = strip_ansi(&output.stderr);
    assert!(stderr.contains("[INFO dicesim] dicesim started."), "stderr was: {}", stderr);
    assert!(stderr.contains("[DEBUG dicesim_core::roller] Rolled 2d6 3 time(s)."));
    assert!(!strip_ansi(&output.stdout).contains("[DEBUG"));
    Ok(())
}

#[test]
fn quiet_flag_silences_logging() {
    dicesim_cmd()
        .env("RUST_LOG", "debug")
        .args(["--quiet", "roll", "--seed", "1"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}
