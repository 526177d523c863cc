use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;

#[test]
fn cli_argument_commands_work() {
    #[allow(deprecated)]
    let mut help = Command::cargo_bin("nl2code").expect("bin build");
    help.arg("help")
        .assert()
        .success()
        .stdout(contains("Supported commands:"))
        .stdout(contains("Print all numbers from 1 to 5"));

    #[allow(deprecated)]
    let mut version = Command::cargo_bin("nl2code").expect("bin build");
    version
        .arg("--version")
        .assert()
        .success()
        .stdout(contains("nl2code version"));

    #[allow(deprecated)]
    let mut about = Command::cargo_bin("nl2code").expect("bin build");
    about
        .arg("--about")
        .assert()
        .success()
        .stdout(contains("nl2code CLI"));
}

#[test]
fn cli_translates_joined_arguments() {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("nl2code").expect("bin build");
    cmd.args(["Add", "10", "and", "5"])
        .env("NO_COLOR", "1")
        .assert()
        .success()
        .stdout(contains("sum_result = 10.0 + 5.0"))
        .stdout(contains("plain English in").not());
}

#[test]
fn cli_unknown_command_prints_fallback() {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("nl2code").expect("bin build");
    cmd.arg("banana")
        .assert()
        .success()
        .stdout(contains("# Error: Command not recognized or invalid format."));
}

#[test]
fn cli_interactive_session() {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("nl2code").expect("bin build");

    // One command per line; a blank line is an empty submission.
    cmd.write_stdin("version\nReverse the string 'abc'\n\nlast\nexit\n")
        .assert()
        .success()
        .stdout(contains("nl2code version"))
        .stdout(contains("original_string = 'abc'"))
        .stdout(contains("# Please enter a command."))
        .stdout(contains("Exiting"));
}

#[test]
fn cli_last_before_any_command_shows_placeholder() {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("nl2code").expect("bin build");
    cmd.write_stdin("last\n")
        .assert()
        .success()
        .stdout(contains("# Code will appear here after conversion."));
}
