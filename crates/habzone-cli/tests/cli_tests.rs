//! Integration tests for the habzone CLI.
//!
//! These tests use `assert_cmd` to verify CLI behavior including:
//! - flag mode and interactive stdin mode
//! - text and JSON output formats
//! - exit codes for malformed and out-of-domain input

use assert_cmd::Command;
use predicates::prelude::*;

fn habzone() -> Command {
    Command::cargo_bin("habzone-cli").expect("binary exists")
}

#[test]
fn classifies_earth_as_conservative_via_flags() {
    habzone()
        .args([
            "--luminosity",
            "1.0",
            "--semi-major-axis",
            "1.0",
            "--temperature",
            "5780",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("This object's Seff: 1"))
        .stdout(predicate::str::contains("DISTANCES IN AU"))
        .stdout(predicate::str::contains("STELLAR FLUX (EFFECTIVE)"))
        .stdout(predicate::str::contains(
            "Conservative Habitable Zone (Between Runaway Greenhouse and Maximum Greenhouse)",
        ));
}

#[test]
fn prompts_for_values_on_stdin_when_flags_are_omitted() {
    habzone()
        .write_stdin("1.0\n2.0\n5780\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Please enter the star's luminosity (Lsun)",
        ))
        .stdout(predicate::str::contains(
            "Please enter the object's semi-major axis (AU)",
        ))
        .stdout(predicate::str::contains(
            "Please enter the star's temperature (K)",
        ))
        .stdout(predicate::str::contains(
            "NOT in the Habitable Zone (Beyond Early Mars)",
        ));
}

#[test]
fn mixes_flags_with_prompts_for_missing_values() {
    habzone()
        .args(["--luminosity", "1.0", "--temperature", "5780"])
        .write_stdin("1.0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Please enter the object's semi-major axis (AU)",
        ))
        .stdout(predicate::str::contains("Conservative Habitable Zone"));
}

#[test]
fn reports_the_too_hot_case_explicitly() {
    habzone()
        .args([
            "--luminosity",
            "1.0",
            "--semi-major-axis",
            "0.5",
            "--temperature",
            "5780",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "NOT in the Habitable Zone (Closer than Recent Venus)",
        ));
}

#[test]
fn emits_a_parseable_json_report() {
    let output = habzone()
        .args([
            "--luminosity",
            "1.0",
            "--semi-major-axis",
            "1.0",
            "--temperature",
            "5780",
            "--format",
            "json",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let report: serde_json::Value = serde_json::from_slice(&output).expect("valid JSON");
    assert_eq!(report["classification"], "Conservative");
    assert!((report["object_flux"].as_f64().unwrap() - 1.0).abs() < 1e-12);
    assert!((report["boundaries"]["early_mars"].as_f64().unwrap() - 0.320).abs() < 1e-12);
}

#[test]
fn malformed_stdin_input_is_fatal() {
    habzone()
        .write_stdin("not-a-number\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("could not parse"));
}

#[test]
fn non_positive_semi_major_axis_is_fatal() {
    habzone()
        .args([
            "--luminosity",
            "1.0",
            "--semi-major-axis=-1.0",
            "--temperature",
            "5780",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("semi-major axis"));
}

#[test]
fn non_positive_luminosity_is_fatal() {
    habzone()
        .args([
            "--luminosity",
            "0",
            "--semi-major-axis",
            "1.0",
            "--temperature",
            "5780",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("luminosity"));
}
