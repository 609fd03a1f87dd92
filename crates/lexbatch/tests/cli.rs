use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

fn lexbatch_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_lexbatch"))
}

fn run_cli(home: &Path, args: &[&str]) -> Output {
    let mut cmd = Command::new(lexbatch_bin());
    cmd.args(args)
        .env("LEXBATCH_HOME", home)
        .env_remove("AWS_ACCESS_KEY_ID")
        .env_remove("AWS_SECRET_ACCESS_KEY")
        .env_remove("AWS_SESSION_TOKEN")
        .env_remove("LEXBATCH_REGION")
        .env_remove("RUST_LOG");
    cmd.output().expect("failed to execute lexbatch CLI")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn assert_rejected(output: &Output, message: &str) {
    assert_eq!(
        output.status.code(),
        Some(1),
        "expected exit 1\nstdout:\n{}\nstderr:\n{}",
        stdout(output),
        stderr(output)
    );
    assert!(
        stderr(output).contains(message),
        "missing '{}' in stderr:\n{}",
        message,
        stderr(output)
    );
}

#[test]
fn test_help_exits_zero() {
    let home = TempDir::new().unwrap();
    let output = run_cli(home.path(), &["help"]);
    assert!(output.status.success(), "stderr:\n{}", stderr(&output));
    assert!(stdout(&output).contains("train"));
    assert!(stdout(&output).contains("test"));
}

#[test]
fn test_validation_reports_first_missing_input() {
    let home = TempDir::new().unwrap();

    let output = run_cli(home.path(), &["train", "-t", "slots"]);
    assert_rejected(&output, "You must choose intent or entity");

    let output = run_cli(home.path(), &["train", "-t", "intent"]);
    assert_rejected(&output, "Input file is required");

    let output = run_cli(home.path(), &["train", "-t", "intent", "-i", "corpus.csv"]);
    assert_rejected(&output, "AccessKey id is required");

    let output = run_cli(
        home.path(),
        &["test", "-t", "intent", "-i", "corpus.csv", "-a", "AKID"],
    );
    assert_rejected(&output, "SecretKey is required");

    let output = run_cli(
        home.path(),
        &["test", "-t", "intent", "-i", "corpus.csv", "-a", "AKID", "-s", "secret"],
    );
    assert_rejected(&output, "Botname is required");
    assert!(stderr(&output).contains("Usage:"));
}

#[test]
fn test_target_checked_before_other_inputs() {
    let home = TempDir::new().unwrap();
    let output = run_cli(home.path(), &["train", "-b", "OrderBot"]);
    assert_rejected(&output, "You must choose intent or entity");
}

#[test]
fn test_entity_target_is_a_no_op() {
    let home = TempDir::new().unwrap();
    let output = run_cli(
        home.path(),
        &[
            "train", "-t", "entity", "-i", "missing.csv", "-a", "AKID", "-s", "secret", "-b",
            "OrderBot",
        ],
    );
    assert!(output.status.success(), "stderr:\n{}", stderr(&output));
    assert!(stdout(&output).contains("not implemented yet"));
}

#[test]
fn test_unreachable_service_still_reports() {
    let home = TempDir::new().unwrap();
    let corpus = home.path().join("corpus.csv");
    fs::write(&corpus, "greeting,hello\nfarewell,bye\n").unwrap();
    let corpus = corpus.to_string_lossy().into_owned();

    let output = run_cli(
        home.path(),
        &[
            "test",
            "-t",
            "intent",
            "-i",
            &corpus,
            "-a",
            "AKID",
            "-s",
            "secret",
            "-b",
            "OrderBot",
            "--runtime-endpoint",
            "http://127.0.0.1:9",
        ],
    );

    assert!(output.status.success(), "stderr:\n{}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("1. Incorrect"), "stdout:\n{}", out);
    assert!(out.contains("2. Incorrect"), "stdout:\n{}", out);
    assert!(out.contains("Success: 0.00%"), "stdout:\n{}", out);
}

#[test]
fn test_bad_settings_file_fails() {
    let home = TempDir::new().unwrap();
    let settings = home.path().join("lexbatch.toml");
    fs::write(&settings, "unknown_key = 1\n").unwrap();

    let output = run_cli(
        home.path(),
        &[
            "train",
            "-t",
            "intent",
            "-i",
            "corpus.csv",
            "-a",
            "AKID",
            "-s",
            "secret",
            "-b",
            "OrderBot",
            "--config",
            &settings.to_string_lossy(),
        ],
    );
    assert_rejected(&output, "Failed to load settings");
}
