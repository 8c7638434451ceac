use std::fs;
use std::process::{Command, Output};

use serde_json::Value;
use tempfile::tempdir;

const BIN: &str = env!("CARGO_BIN_EXE_zkhash");

const HASH_0: &str =
    "6027846939266419405338493999040895496993886229427443582177353235936002669276";
const HASH_1: &str =
    "20132805197949958181383189834528192378509055379267827197933318417369349689689";

fn run(args: &[&str]) -> Output {
    Command::new(BIN)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("run zkhash")
}

fn stdout(out: &Output) -> String {
    String::from_utf8(out.stdout.clone()).expect("utf8 stdout")
}

fn stderr(out: &Output) -> String {
    String::from_utf8(out.stderr.clone()).expect("utf8 stderr")
}

#[test]
fn prints_sentence_for_integer() {
    let out = run(&["0"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out).trim(), format!("The hash of 0 is {HASH_0}."));
}

#[test]
fn leading_zeros_are_canonicalised() {
    let out = run(&["0001"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out).trim(), format!("The hash of 1 is {HASH_1}."));
}

#[test]
fn non_integer_is_reported_without_crash() {
    let out = run(&["twelve"]);
    assert_eq!(out.status.code(), Some(2));
    assert!(stdout(&out).is_empty());
    assert!(stderr(&out).contains("Please provide an integer"));
}

#[test]
fn missing_argument_prints_usage_hint() {
    let out = run(&[]);
    assert_eq!(out.status.code(), Some(2));
    let err = stderr(&out);
    assert!(err.contains("Please provide an integer as a command line argument."));
    assert!(err.contains("Usage: zkhash"));
}

#[test]
fn negative_input_rejected_by_default() {
    let out = run(&["-5"]);
    assert_eq!(out.status.code(), Some(3));
    assert!(stderr(&out).contains("negative input"));
}

#[test]
fn negative_input_hashes_under_signed_policy() {
    let out = run(&["--sign-policy", "twos-complement", "-1"]);
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    assert_eq!(
        stdout(&out).trim(),
        "The hash of -1 is 17730009733229164340958241463333765180518305266902845540648167205053120362115."
    );
}

#[test]
fn oversized_input_exits_with_domain_error() {
    // 2^253 needs two limbs.
    let big = "14474011154664524427946373126085988481658748083205070504932198000989141204992";
    let out = run(&["--max-limbs", "1", big]);
    assert_eq!(out.status.code(), Some(3));
    assert!(stderr(&out).contains("exceeds the configured capacity"));
}

#[test]
fn json_output_has_digest_and_params() {
    let out = run(&["--json", "--digest-len", "2", "1"]);
    assert!(out.status.success());
    let v: Value = serde_json::from_str(stdout(&out).trim()).expect("json");
    assert_eq!(v["input"], "1");
    assert_eq!(v["format"], "decimal");
    assert_eq!(v["params"], "zkhash/poseidon-bn254-t3-a5/v1");
    assert_eq!(v["elements"][0], HASH_1);
    assert_eq!(v["elements"].as_array().map(|a| a.len()), Some(2));
}

#[test]
fn format_flag_selects_rendering() {
    let out = run(&["--format", "field", "0"]);
    assert!(out.status.success());
    assert!(stdout(&out).contains(&format!("{HASH_0}field")));

    let out = run(&["--format", "hex-be", "0"]);
    assert!(stdout(&out)
        .contains("0d53a3f56ce008f420662afb534c3bccf5e33fdd742754600afa7149063b7adc"));
}

#[test]
fn config_file_is_applied_and_flags_override() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("zkhash.toml");
    fs::write(&path, "format = \"field\"\nsign_policy = \"offset-unsigned\"\n").unwrap();
    let cfg = path.to_str().unwrap();

    let out = run(&["--config", cfg, "-1"]);
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    assert!(stdout(&out).contains(
        "4146618848837307175296726520601141870201748525991775557535780238446595993902field"
    ));

    let out = run(&["--config", cfg, "--format", "decimal", "-1"]);
    assert!(out.status.success());
    assert!(!stdout(&out).contains("field"));
}

#[test]
fn invalid_config_file_fails() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.toml");
    fs::write(&path, "digest_len = 99\n").unwrap();
    let out = run(&["--config", path.to_str().unwrap(), "1"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("digest_len"));
}

#[test]
fn params_flag_prints_parameter_set() {
    let out = run(&["--params"]);
    assert!(out.status.success());
    let v: Value = serde_json::from_str(&stdout(&out)).expect("json");
    assert_eq!(v["id"], "zkhash/poseidon-bn254-t3-a5/v1");
    assert_eq!(v["width"], 3);
    assert_eq!(v["partial_rounds"], 57);
}

#[test]
fn verbose_logs_go_to_stderr() {
    let out = run(&["-v", "2"]);
    assert!(out.status.success());
    assert!(stdout(&out).starts_with("The hash of 2 is "));
    assert!(stderr(&out).contains("hashed integer"));
}
