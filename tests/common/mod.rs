#![allow(dead_code)]

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

use serde_json::Value;
use tempfile::Builder;

pub fn write_temp_file(suffix: &str, content: &str) -> PathBuf {
    let mut temp_file = Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("temp file should be created");
    temp_file
        .write_all(content.as_bytes())
        .expect("temp file write should succeed");
    temp_file.keep().expect("temp file should persist").1
}

pub fn run_dpk(args: &[&str]) -> Output {
    let mut command = Command::new(env!("CARGO_BIN_EXE_dpk"));
    command.args(args);
    command.output().expect("failed to run dpk binary")
}

pub fn run_dpk_with_stdin(args: &[&str], input: &str) -> Output {
    let mut command = Command::new(env!("CARGO_BIN_EXE_dpk"));
    command.args(args);
    command.stdin(Stdio::piped());
    command.stdout(Stdio::piped());
    command.stderr(Stdio::piped());

    let mut child = command.spawn().expect("failed to spawn dpk binary");
    let stdin = child.stdin.as_mut().expect("stdin should be available");
    stdin
        .write_all(input.as_bytes())
        .expect("stdin write should succeed");
    child
        .wait_with_output()
        .expect("failed to read process output")
}

pub fn stdout_text(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim_end().to_string()
}

pub fn stdout_json(output: &Output) -> Value {
    serde_json::from_slice(&output.stdout).expect("stdout should be valid JSON")
}

pub fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "stdout: {}\nstderr: {}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
}

pub fn assert_error_type(output: &Output, expected_type: &str) {
    assert!(!output.status.success(), "command should fail");
    let response = stdout_json(output);
    assert_eq!(response["error"]["type"], expected_type, "response: {response}");
}
