//! CLI Interface E2E Tests
//!
//! These tests run the argt binary against stdin and files and check what it
//! prints and how it exits.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

/// Get the path to the argt binary
fn argt_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_argt"))
}

/// Command isolated from any configuration on the machine running the tests.
fn argt(home: &TempDir) -> Command {
    let mut cmd = Command::new(argt_bin());
    cmd.current_dir(home.path())
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .env_remove("ARGT_CONFIG")
        .env_remove("ARGT_VERBOSE")
        .env("ARGT_NO_COLOR", "true");
    cmd
}

#[test]
fn test_cli_help() {
    let home = TempDir::new().expect("Failed to create temp directory");
    argt(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage").and(predicate::str::contains("lex")));
}

#[test]
fn test_cli_version() {
    let home = TempDir::new().expect("Failed to create temp directory");
    argt(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_lex_stdin() {
    let home = TempDir::new().expect("Failed to create temp directory");
    argt(&home)
        .arg("lex")
        .write_stdin("f(1, \"x\", [2.0])\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("1:1\tIdentifier\t\"f\"\n"))
        .stdout(predicate::str::contains("1:3\tInteger\t\"1\"\n"))
        .stdout(predicate::str::contains("1:6\tString\t\"x\"\n"))
        .stdout(predicate::str::contains("1:12\tFloat\t\"2.0\"\n"))
        .stdout(predicate::str::contains("1:17\tEndOfLine\t\"\"\n"));
}

#[test]
fn test_lex_dash_means_stdin() {
    let home = TempDir::new().expect("Failed to create temp directory");
    argt(&home)
        .args(["lex", "--no-positions", "-"])
        .write_stdin("go")
        .assert()
        .success()
        .stdout("Identifier\t\"go\"\n");
}

#[test]
fn test_lex_file() {
    let home = TempDir::new().expect("Failed to create temp directory");
    let input = home.path().join("script.args");
    std::fs::write(&input, "# setup\nrun(+007)\n").expect("Failed to write input");

    argt(&home)
        .args(["lex", "--skip-comments", "--no-positions"])
        .arg(&input)
        .assert()
        .success()
        .stdout("EndOfLine\t\"\"\nIdentifier\t\"run\"\nLeftParen\t\"(\"\nInteger\t\"7\"\nRightParen\t\")\"\nEndOfLine\t\"\"\n");
}

#[test]
fn test_lex_json() {
    let home = TempDir::new().expect("Failed to create temp directory");
    let output = argt(&home)
        .args(["lex", "--format", "json"])
        .write_stdin("{a}")
        .output()
        .expect("Failed to run argt");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).expect("stdout is UTF-8");
    let tokens: Vec<serde_json::Value> = stdout
        .lines()
        .map(|line| serde_json::from_str(line).expect("each line is JSON"))
        .collect();
    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[0]["kind"], "LeftCurly");
    assert_eq!(tokens[1]["text"], "a");
    assert_eq!(tokens[1]["span"]["column"], 2);
    assert_eq!(tokens[2]["kind"], "RightCurly");
}

#[test]
fn test_unknown_reported_but_accepted_by_default() {
    let home = TempDir::new().expect("Failed to create temp directory");
    argt(&home)
        .arg("lex")
        .write_stdin("a @")
        .assert()
        .success()
        .stdout(predicate::str::contains("1:3\tUnknown\t\"@\""))
        .stderr(predicate::str::contains("error[E0101]"))
        .stderr(predicate::str::contains("<stdin>:1:3"));
}

#[test]
fn test_deny_unknown_fails() {
    let home = TempDir::new().expect("Failed to create temp directory");
    argt(&home)
        .args(["lex", "--deny-unknown"])
        .write_stdin("x(12f)")
        .assert()
        .failure()
        .stderr(predicate::str::contains("E0103"))
        .stderr(predicate::str::contains("Rejected"));
}

#[test]
fn test_deny_unknown_accepts_clean_input() {
    let home = TempDir::new().expect("Failed to create temp directory");
    argt(&home)
        .args(["lex", "--deny-unknown"])
        .write_stdin("x(12.0f) # fine")
        .assert()
        .success();
}

#[test]
fn test_missing_input_file_fails() {
    let home = TempDir::new().expect("Failed to create temp directory");
    argt(&home)
        .args(["lex", "does-not-exist.args"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Io"));
}

#[test]
fn test_invalid_utf8_fails() {
    let home = TempDir::new().expect("Failed to create temp directory");
    argt(&home)
        .arg("lex")
        .write_stdin(&b"ok \xFF"[..])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Identifier\t\"ok\""))
        .stderr(predicate::str::contains("InvalidUtf8"));
}

#[test]
fn test_config_file_sets_defaults() {
    let home = TempDir::new().expect("Failed to create temp directory");
    std::fs::write(
        home.path().join("argt.toml"),
        "[lex]\nformat = \"json\"\nshow_positions = false\n",
    )
    .expect("Failed to write config");

    argt(&home)
        .arg("lex")
        .write_stdin("x")
        .assert()
        .success()
        .stdout("{\"kind\":\"Identifier\",\"text\":\"x\"}\n");
}

#[test]
fn test_flags_override_config() {
    let home = TempDir::new().expect("Failed to create temp directory");
    let config = home.path().join("custom.toml");
    std::fs::write(&config, "[lex]\nformat = \"json\"\n").expect("Failed to write config");

    argt(&home)
        .arg("--config")
        .arg(&config)
        .args(["lex", "--format", "text", "--no-positions"])
        .write_stdin("x")
        .assert()
        .success()
        .stdout("Identifier\t\"x\"\n");
}

#[test]
fn test_missing_config_file_fails() {
    let home = TempDir::new().expect("Failed to create temp directory");
    argt(&home)
        .args(["--config", "nope.toml", "kinds"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration file not found"));
}

#[test]
fn test_kinds() {
    let home = TempDir::new().expect("Failed to create temp directory");
    argt(&home)
        .arg("kinds")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Identifier\tidentifier\n"))
        .stdout(predicate::str::contains("LeftBracket\tleft bracket\n"))
        .stdout(predicate::str::contains("Unknown\tunknown\n"));
}
