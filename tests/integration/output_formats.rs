// tests/integration/output_formats.rs
use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;

#[path = "../common/mod.rs"]
mod common;
use common::TempWorkspace;

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_prefix_lines"))
}

#[test]
fn text_format_prints_only_the_count() {
    let ws = TempWorkspace::with_pair("formats_text", "a\nb\nc\n", "a\nb\nx\n");

    bin().current_dir(ws.path()).assert().success().stdout("2\n");
}

#[test]
fn json_format_includes_stop_reason() {
    let ws = TempWorkspace::with_pair("formats_json", "a\nb\nc\n", "a\nb\n");

    let output = bin().current_dir(ws.path()).args(["--format", "json"]).output().unwrap();
    assert!(output.status.success());

    let value: Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(value["matched"], 2);
    assert_eq!(value["stop"], "second_exhausted");
    assert_eq!(value["first"], "test1.txt");
    assert_eq!(value["second"], "test2.txt");
}

#[cfg(feature = "yaml")]
#[test]
fn yaml_format_includes_stop_reason() {
    let ws = TempWorkspace::with_pair("formats_yaml", "", "a\n");

    bin()
        .current_dir(ws.path())
        .args(["--format", "yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("matched: 0").and(predicate::str::contains("stop: first_exhausted")));
}
