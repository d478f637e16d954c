//! Runs the `onto2dot` binary and checks its streams and exit codes.

mod fixtures;

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

fn write_input(name: &str, content: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("onto2dot-{}-{name}.ttl", std::process::id()));
    fs::write(&path, content).unwrap();
    path
}

fn onto2dot(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_onto2dot"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn renders_dot_to_stdout() {
    let input = write_input("render", fixtures::PERSON_CAR);
    let output = onto2dot(&["--in", input.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("digraph Ontology {\n\tnode [shape=plaintext];\n"));
    assert!(stdout.contains("\"Person\"->\"Bil\"[label=<<B>eier</B>>];"));
    assert!(stdout.contains("<B>alder</B>"));
    assert!(stdout.ends_with("\n}\n"));
    assert!(output.stderr.is_empty());
}

#[test]
fn lang_selects_labels() {
    let input = write_input("lang", fixtures::PERSON_CAR);
    let output = onto2dot(&["--in", input.to_str().unwrap(), "--lang", "en"]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("\"Person\"->\"Car\"[label=<<B>owns</B>>];"));
}

#[test]
fn missing_labels_are_warned_about() {
    let input = write_input("warn", fixtures::UNLABELLED_CLASS);
    let output = onto2dot(&["--in", input.to_str().unwrap()]);

    assert!(output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(
        stderr.contains("missing @no label for http://example.org/onto#Car"),
        "stderr: {stderr}"
    );
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("\"Person\"->\"\"[label=<<B>eier</B>>];"));
}

#[test]
fn json_format_dumps_the_model() {
    let input = write_input("json", fixtures::PERSON_CAR);
    let output = onto2dot(&["--in", input.to_str().unwrap(), "--format", "json"]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.trim_start().starts_with('{'));
    assert!(stdout.contains("\"label\": \"Bil\""));
}

#[test]
fn missing_input_argument_is_a_usage_error() {
    let output = onto2dot(&[]);
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8(output.stderr).unwrap().contains("--in"));
}

#[test]
fn unreadable_input_fails() {
    let output = onto2dot(&["--in", "/nonexistent/onto2dot/missing.ttl"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8(output.stderr)
        .unwrap()
        .contains("/nonexistent/onto2dot/missing.ttl"));
}

#[test]
fn malformed_input_fails_without_output() {
    let input = write_input("malformed", "@prefix ex: <http://example.org/> .\nex:a ex:b .\n");
    let output = onto2dot(&["--in", input.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8(output.stderr)
        .unwrap()
        .contains("malformed Turtle"));
}
