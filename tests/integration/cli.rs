//! End-to-end tests of the `strdist` binary.

use std::fs;
use std::process::{Command, Output};
use tempfile::tempdir;

fn strdist(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_strdist"))
        .args(args)
        .env("NO_COLOR", "1")
        .output()
        .expect("run strdist")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_levenshtein_prints_distance() {
    let output = strdist(&["levenshtein", "kitten", "sitting"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "3");
}

#[test]
fn test_levenshtein_utf16_flag() {
    let scalar = strdist(&["levenshtein", "a😀", "a"]);
    let utf16 = strdist(&["levenshtein", "a😀", "a", "--utf16"]);
    assert_eq!(stdout(&scalar).trim(), "1");
    assert_eq!(stdout(&utf16).trim(), "2");
}

#[test]
fn test_damerau_prints_normalized_result() {
    let output = strdist(&["damerau", "ab", "ba"]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("steps:      1"), "{}", text);
    assert!(text.contains("relative:   0.5000"), "{}", text);
    assert!(text.contains("similarity: 0.5000"), "{}", text);
}

#[test]
fn test_damerau_limit() {
    let output = strdist(&["damerau", "abc", "abcdefgh", "--limit", "3"]);
    assert!(stdout(&output).contains("steps:      3"));
}

#[test]
fn test_compare_json_output() {
    let output = strdist(&["compare", "Hello", "hello", "--json"]);
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json["distance"], 0.0);
    assert_eq!(json["similarity"], 1.0);
}

#[test]
fn test_compare_flags_override_config() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("strdist.json");
    fs::write(&path, r#"{ "algorithm": "levenshtein" }"#).unwrap();

    let output = strdist(&[
        "compare",
        "ab",
        "BA",
        "--config",
        path.to_str().unwrap(),
        "--algorithm",
        "damerau",
        "--json",
    ]);
    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json["distance"], 1.0);
}

#[test]
fn test_compare_table_has_no_escapes_off_tty() {
    let output = strdist(&["compare", "kitten", "sitting"]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("levenshtein"));
    assert!(!text.contains('\x1b'));
}

#[test]
fn test_unknown_algorithm_fails() {
    let output = strdist(&["compare", "a", "b", "--algorithm", "soundex"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("soundex"), "{}", stderr);
}

#[test]
fn test_missing_config_fails() {
    let output = strdist(&["compare", "a", "b", "--config", "/nonexistent/strdist.json"]);
    assert!(!output.status.success());
}
