use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

fn quotez(config_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("quotez").unwrap();
    cmd.arg("--config")
        .arg(config_dir.join("config.json"))
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("QUOTEZ_CONFIG");
    cmd
}

#[test]
fn test_add_then_list() {
    let temp_dir = tempfile::tempdir().unwrap();

    quotez(temp_dir.path())
        .arg("quote \"Quote 1\"")
        .arg("quote “Quote 2”")
        .arg("quote list")
        .assert()
        .success()
        .stdout("- Quote 1\n- Quote 2\n");
}

#[test]
fn test_variants_are_stored_transformed() {
    let temp_dir = tempfile::tempdir().unwrap();

    quotez(temp_dir.path())
        .arg("quote uwu \"Let us laze about in Usher's Rolls Royce\"")
        .arg("quote piglatin \"Tis but a scratch\"")
        .arg("quote list")
        .assert()
        .success()
        .stdout(
            "- Wet u-us waze about in U-Ushew's Wowws Woyce\n\
             - Istay utbay away atchscray\n",
        );
}

#[test]
fn test_duplicate_is_reported_and_session_continues() {
    let temp_dir = tempfile::tempdir().unwrap();

    quotez(temp_dir.path())
        .arg("quote \"Nobody expects the Spanish Inquisition!\"")
        .arg("quote \"Nobody expects the Spanish Inquisition!\"")
        .arg("quote list")
        .assert()
        .success()
        .stdout(
            "Quote has already been added previously\n\
             - Nobody expects the Spanish Inquisition!\n",
        );
}

#[test]
fn test_invalid_command_fails_but_later_commands_run() {
    let temp_dir = tempfile::tempdir().unwrap();

    quotez(temp_dir.path())
        .arg("quote \"Hello world\"")
        .arg("quotes \"This sure looks like a quote\"")
        .arg("quote list")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: Invalid command"))
        .stdout("- Hello world\n");
}

#[test]
fn test_noop_uwu_is_rejected() {
    let temp_dir = tempfile::tempdir().unwrap();

    quotez(temp_dir.path())
        .arg("quote uwu \"Sphinx of diamond, see me now\"")
        .arg("quote list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Quote was not modified"))
        .stdout("");
}

#[test]
fn test_too_long_is_rejected() {
    let temp_dir = tempfile::tempdir().unwrap();
    let long = "a".repeat(51);

    quotez(temp_dir.path())
        .arg(format!("quote \"{}\"", long))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Quote is too long"));
}

#[test]
fn test_partial_uwu_warns_on_stderr() {
    let temp_dir = tempfile::tempdir().unwrap();

    quotez(temp_dir.path())
        .arg("quote uwu \"It's time to d-d-d-d-d-d-d-d-d-d-d-duel unless...\"")
        .arg("quote list")
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "Quote too long, only partially transformed",
        ))
        .stdout("- It's time to d-d-d-d-d-d-d-d-d-d-d-duew unwess...\n");
}

#[test]
fn test_reads_commands_from_stdin() {
    let temp_dir = tempfile::tempdir().unwrap();

    quotez(temp_dir.path())
        .write_stdin("quote piglatin \"Tis but a scratch\"\n\n   \nquote list\n")
        .assert()
        .success()
        .stdout("- Istay utbay away atchscray\n");
}

#[test]
fn test_config_seeds_and_limits() {
    let temp_dir = tempfile::tempdir().unwrap();
    std::fs::write(
        temp_dir.path().join("config.json"),
        r#"{ "max_quote_length": 12, "seed_quotes": ["A scratch?"] }"#,
    )
    .unwrap();

    quotez(temp_dir.path())
        .arg("quote \"Hello world\"")
        .arg("quote \"Hello there, world\"")
        .arg("quote list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Quote is too long"))
        .stdout("- A scratch?\n- Hello world\n");
}

#[test]
fn test_bad_config_is_fatal() {
    let temp_dir = tempfile::tempdir().unwrap();
    std::fs::write(temp_dir.path().join("config.json"), "{ not json").unwrap();

    quotez(temp_dir.path())
        .arg("quote list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Serialization error"))
        .stdout("");
}
