//! Integration tests for the `brainplus` command line

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Helper function to create a test file
fn create_test_file(
    dir: &TempDir,
    name: &str,
    content: &str,
) -> PathBuf {
    let path = dir.path().join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    path
}

fn brainplus(args: &[&std::ffi::OsStr]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_brainplus"))
        .args(args)
        .output()
        .unwrap()
}

#[test]
fn test_check_valid_file() {
    let temp_dir = TempDir::new().unwrap();
    let file = create_test_file(
        &temp_dir,
        "valid.bp",
        "define NEWLINE 10 enddef\nprintln { . = NEWLINE . }\n= 'A' println",
    );

    let output = brainplus(&["check".as_ref(), file.as_os_str()]);
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ok (1 file(s), 1 define(s), 1 function(s))"));
}

#[test]
fn test_check_invalid_file() {
    let temp_dir = TempDir::new().unwrap();
    let file = create_test_file(&temp_dir, "invalid.bp", "main2 { unknown }\n.");

    let output = brainplus(&["check".as_ref(), file.as_os_str()]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("E2003"));
    assert!(stderr.contains("unknown"));
    assert!(stderr.contains("invalid.bp:1:9"));
}

#[test]
fn test_check_wrong_extension() {
    let temp_dir = TempDir::new().unwrap();
    let file = create_test_file(&temp_dir, "program.txt", ".");

    let output = brainplus(&["check".as_ref(), file.as_os_str()]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("E7002"));
}

#[test]
fn test_include_flag() {
    let temp_dir = TempDir::new().unwrap();
    let file = create_test_file(&temp_dir, "src/main.bp", "include \"io.bp\"\nputs");
    create_test_file(&temp_dir, "lib/io.bp", "puts { . }");
    let lib = temp_dir.path().join("lib");

    let output = brainplus(&["check".as_ref(), file.as_os_str()]);
    assert!(!output.status.success());

    let output = brainplus(&[
        "-I".as_ref(),
        lib.as_os_str(),
        "check".as_ref(),
        file.as_os_str(),
    ]);
    assert!(output.status.success());
}

#[test]
fn test_ast_text() {
    let temp_dir = TempDir::new().unwrap();
    let file = create_test_file(&temp_dir, "sum.bp", "define TWO 2 enddef\n5 + TWO * 3 .");

    let output = brainplus(&["ast".as_ref(), file.as_os_str()]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout, "define TWO: N:2\n(5)+((2)*(3))\n.\n");
}

#[test]
fn test_ast_json() {
    let temp_dir = TempDir::new().unwrap();
    let file = create_test_file(&temp_dir, "cond.bp", "@ ? 1 : 0");

    let output = brainplus(&["ast".as_ref(), file.as_os_str(), "--json".as_ref()]);
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(json["main"]["kind"]["IfTernary"]["is_ternary"].as_bool().unwrap());
    assert_eq!(json["files"].as_array().unwrap().len(), 1);
}

#[test]
fn test_tokens() {
    let temp_dir = TempDir::new().unwrap();
    let file = create_test_file(&temp_dir, "tokens.bp", "@5\nloop");

    let output = brainplus(&["tokens".as_ref(), file.as_os_str()]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[1], "1:2\tN:5");
    assert_eq!(lines[2], "2:1\tID:loop");
}

#[test]
fn test_version() {
    let output = brainplus(&["version".as_ref()]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).starts_with("BrainPlus "));
}
