//! Integration tests for the ls8 runner CLI.

use env_logger as _;
use log as _;
use ls8 as _;
use ls8_core as _;
use std::fs;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use thiserror as _;

fn binary_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_ls8"))
}

fn demo_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../../demos")
        .join(name)
}

fn create_temp_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

fn run_ls8(args: &[&std::ffi::OsStr]) -> Output {
    Command::new(binary_path())
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run ls8")
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn stderr_of(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).unwrap()
}

const PRINT8_WITH_COMMENTS: &str = "\
# print8.ls8

10000010 # LDI R0,8
00000000
00001000

01000111 # PRN R0
00000000
00000001 # HLT
";

#[test]
fn runs_program_with_comments_and_blank_lines() {
    let temp_dir = tempfile::tempdir().unwrap();
    let program = create_temp_file(temp_dir.path(), "print8.ls8", PRINT8_WITH_COMMENTS);

    let output = run_ls8(&[program.as_os_str()]);

    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "8\n");
}

#[test]
fn missing_program_file_fails_before_execution() {
    let temp_dir = tempfile::tempdir().unwrap();
    let missing = temp_dir.path().join("nope.ls8");

    let output = run_ls8(&[missing.as_os_str()]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = stderr_of(&output);
    assert!(stderr.starts_with("error: "), "{stderr}");
    assert!(stderr.contains("nope.ls8"), "{stderr}");
}

#[test]
fn oversized_program_is_rejected() {
    let temp_dir = tempfile::tempdir().unwrap();
    let program = create_temp_file(temp_dir.path(), "big.ls8", &"00000000\n".repeat(257));

    let output = run_ls8(&[program.as_os_str()]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("257 bytes"));
}

#[test]
fn output_is_visible_while_a_program_keeps_running() {
    let temp_dir = tempfile::tempdir().unwrap();
    // 0: LDI R0,5  3: PRN R0  5: LDI R1,5  8: JMP R1
    let source = "\
10000010
00000000
00000101
01000111 # PRN R0
00000000
10000010
00000001
00000101
01010100 # JMP R1
00000001
";
    let program = create_temp_file(temp_dir.path(), "spin.ls8", source);

    let mut child = Command::new(binary_path())
        .arg(&program)
        .env_remove("RUST_LOG")
        .stdout(Stdio::piped())
        .spawn()
        .expect("failed to run ls8");

    let mut first_line = String::new();
    BufReader::new(child.stdout.take().unwrap())
        .read_line(&mut first_line)
        .unwrap();
    child.kill().unwrap();
    child.wait().unwrap();

    assert_eq!(first_line, "5\n");
}

#[test]
fn divide_by_zero_prints_diagnostic_and_exits_cleanly() {
    let temp_dir = tempfile::tempdir().unwrap();
    let source = "\
10000010 # LDI R0,10
00000000
00001010
10000010 # LDI R1,0
00000001
00000000
10100100 # MOD R0,R1
00000000
00000001
01000111 # PRN R0
00000000
00000001 # HLT
";
    let program = create_temp_file(temp_dir.path(), "mod0.ls8", source);

    let output = run_ls8(&[program.as_os_str()]);

    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "Dividing by zero is not allowed.\n");
}

#[test]
fn compat_alu_flag_routes_or_through_and() {
    let temp_dir = tempfile::tempdir().unwrap();
    // R0 = 0b1100, R1 = 0b1010; OR R0,R1; PRN R0
    let source = "\
10000010
00000000
00001100
10000010
00000001
00001010
10101010 # OR R0,R1
00000000
00000001
01000111
00000000
00000001
";
    let program = create_temp_file(temp_dir.path(), "or.ls8", source);

    let named = run_ls8(&[program.as_os_str()]);
    assert_eq!(stdout_of(&named), "14\n");

    let compat = run_ls8(&["--compat-alu".as_ref(), program.as_os_str()]);
    assert_eq!(stdout_of(&compat), "8\n");
}

#[test]
fn registers_flag_dumps_final_state_to_stderr() {
    let output = run_ls8(&["-r".as_ref(), demo_path("mult.ls8").as_os_str()]);

    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "72\n");
    let stderr = stderr_of(&output);
    assert!(stderr.contains("R0: 72"), "{stderr}");
    assert!(stderr.contains("R7: 244"), "{stderr}");
}

#[test]
fn demo_programs_produce_expected_output() {
    for (name, expected) in [
        ("print8.ls8", "8\n"),
        ("mult.ls8", "72\n"),
        ("stack.ls8", "3\n2\n1\n"),
        ("call.ls8", "20\n30\n"),
        ("cmp.ls8", "20\n99\n"),
    ] {
        let output = run_ls8(&[demo_path(name).as_os_str()]);
        assert!(output.status.success(), "{name}");
        assert_eq!(stdout_of(&output), expected, "{name}");
    }
}

#[test]
fn usage_errors_exit_with_status_one() {
    let output = run_ls8(&[]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("Usage: ls8"));

    let output = run_ls8(&["--bogus".as_ref()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("unknown option"));
}

#[test]
fn help_prints_usage() {
    let output = run_ls8(&["--help".as_ref()]);
    assert!(output.status.success());
    assert!(stdout_of(&output).contains("--compat-alu"));
}
