use std::io::Write;
use std::process::{Command, Output, Stdio};

use serde_json::Value;
use tempfile::tempdir;

fn run_with_stdin(mut cmd: Command, input: &str) -> Output {
    cmd.stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    let mut child = cmd.spawn().expect("failed to spawn binary");
    if let Some(mut stdin) = child.stdin.take() {
        // An argument-parse failure exits before stdin is read; ignore the
        // resulting broken pipe.
        let _ = stdin.write_all(input.as_bytes());
    }
    child.wait_with_output().unwrap()
}

fn obfuscate_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_obfuscate"))
}

fn deobfuscate_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_deobfuscate"))
}

#[test]
fn encrypts_and_decrypts_across_processes() {
    let dir = tempdir().unwrap();
    let report = dir.path().join("obfuscation_report.json");

    let mut cmd = obfuscate_cmd();
    cmd.args([
        "--cycles",
        "1",
        "--enable-string-encryption",
        "--seed",
        "42",
        "--report",
        report.to_str().unwrap(),
    ]);
    let output = run_with_stdin(cmd, "hello\n");
    assert!(
        output.status.success(),
        "obfuscate failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let obfuscated = String::from_utf8(output.stdout).unwrap();
    let obfuscated = obfuscated.trim_end();
    assert!(obfuscated.starts_with("\\x"));
    assert_eq!(obfuscated.len(), 4 * 6);

    let mut cmd = deobfuscate_cmd();
    cmd.args(["--cycles", "1"]);
    let output = run_with_stdin(cmd, &format!("{obfuscated}\n"));
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap().trim_end(), "hello");
}

#[test]
fn report_records_the_run() {
    let dir = tempdir().unwrap();
    let report = dir.path().join("obfuscation_report.json");

    let mut cmd = obfuscate_cmd();
    cmd.args([
        "--cycles",
        "2",
        "--enable-string-encryption",
        "--enable-bogus",
        "--bogus-intensity",
        "20",
        "--seed",
        "7",
        "--report",
        report.to_str().unwrap(),
    ]);
    let output = run_with_stdin(cmd, "report me\n");
    assert!(output.status.success());

    let parsed: Value =
        serde_json::from_str(&std::fs::read_to_string(&report).unwrap()).unwrap();
    assert_eq!(parsed["input_parameters"]["cycles"], 2);
    assert_eq!(parsed["input_parameters"]["enableStringEncryption"], true);
    assert_eq!(parsed["input_parameters"]["enableBogusControlFlow"], true);
    assert_eq!(parsed["input_parameters"]["bogusCodeIntensity"], 20);
    assert_eq!(parsed["input_parameters"]["randomSeed"], 7);
    assert_eq!(parsed["cycles_completed"], 2);
    assert_eq!(parsed["string_encryptions"], 2);
    assert!(parsed["bogus_blocks"].as_u64().unwrap() > 0);
}

#[test]
fn noise_filter_alone_cleans_input() {
    let mut cmd = deobfuscate_cmd();
    cmd.args(["--cycles", "1"]);
    let output = run_with_stdin(cmd, "[noise]abc[more]def\n");
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap().trim_end(), "abcdef");
}

#[test]
fn zero_cycles_is_rejected() {
    let dir = tempdir().unwrap();
    let mut cmd = obfuscate_cmd();
    cmd.args([
        "--cycles",
        "0",
        "--report",
        dir.path().join("r.json").to_str().unwrap(),
    ]);
    let output = run_with_stdin(cmd, "x\n");
    assert!(!output.status.success());
}

#[test]
fn out_of_range_intensity_is_rejected() {
    let dir = tempdir().unwrap();
    let mut cmd = obfuscate_cmd();
    cmd.args([
        "--bogus-intensity",
        "150",
        "--report",
        dir.path().join("r.json").to_str().unwrap(),
    ]);
    let output = run_with_stdin(cmd, "x\n");
    assert!(!output.status.success());
}

#[test]
fn abort_policy_is_selectable() {
    let mut cmd = deobfuscate_cmd();
    cmd.args(["--cycles", "1", "--on-malformed-escape", "abort"]);
    let output = run_with_stdin(cmd, "\\xQQ\n");
    assert!(!output.status.success());
}

#[test]
fn seed_zero_still_produces_a_report_with_a_seed() {
    let dir = tempdir().unwrap();
    let report = dir.path().join("obfuscation_report.json");

    let mut cmd = obfuscate_cmd();
    cmd.args([
        "--enable-string-encryption",
        "--report",
        report.to_str().unwrap(),
    ]);
    let output = run_with_stdin(cmd, "clocked\n");
    assert!(output.status.success());

    let parsed: Value =
        serde_json::from_str(&std::fs::read_to_string(&report).unwrap()).unwrap();
    assert!(parsed["input_parameters"]["randomSeed"].as_u64().unwrap() > 0);
}
