//! Tests for the command-router binary.

#![cfg(unix)]

use std::io::Write;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

use crate::integration::fixtures::Scripts;

/// Runs the binary with routing settings passed as flags.
///
/// Routing env vars are cleared so the caller's environment cannot leak in.
fn run_router(scripts: &Scripts, args: &[&str], stdin: Option<&str>) -> (i32, String, String) {
    let config_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config_path = config_dir.path().join("config.toml");
    let cli_path = scripts.cli_path();
    let persona = scripts.persona_script();

    let mut command = Command::new(env!("CARGO_BIN_EXE_command-router"));
    command
        .args(["--config", config_path.to_str().unwrap()])
        .args(["--cli-path", cli_path.as_str()])
        .args(["--persona-script", persona.as_str()])
        .args(args)
        .env_remove("OPENCLAW_CLI_PATH")
        .env_remove("COMMAND_ROUTER_AGENTS")
        .env_remove("PERSONA_SCRIPT_PATH")
        .env("RUST_LOG", "warn")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    let mut child = command.spawn().expect("Failed to execute command-router");
    {
        let mut child_stdin = child.stdin.take().expect("stdin is piped");
        if let Some(input) = stdin {
            child_stdin
                .write_all(input.as_bytes())
                .expect("Failed to write stdin");
        }
    }

    let output = child.wait_with_output().expect("Failed to wait on command-router");
    let exit_code = output.status.code().unwrap_or(-1);
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    (exit_code, stdout, stderr)
}

#[test]
fn test_exec_dispatches_lines() {
    let scripts = Scripts::new();
    let (code, stdout, _) = run_router(
        &scripts,
        &[
            "--agents",
            "GE:ge:Gemini:60",
            "--exec",
            "/GE hello",
            "--exec",
            "/persona on",
        ],
        None,
    );

    assert_eq!(code, 0);
    assert_eq!(stdout, "agent=ge timeout=60 message=hello\npersona on\n");
}

#[test]
fn test_reads_commands_from_stdin() {
    let scripts = Scripts::new();
    let (code, stdout, _) = run_router(
        &scripts,
        &["--agents", "GE:ge"],
        Some("/GE first\n\nplain text\n/GE\n/nope x\n"),
    );

    assert_eq!(code, 0);
    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            "agent=ge timeout=120 message=first",
            "Commands start with '/'. Type /help for available commands.",
            "Usage: /GE <message>",
            "Unknown command: /nope. Type /help for available commands.",
        ]
    );
}

#[test]
fn test_stdin_commands_run_concurrently_in_order() {
    let scripts = Scripts::new();
    let start = Instant::now();
    let (code, stdout, _) = run_router(
        &scripts,
        &["--agents", "GE:ge"],
        Some("/GE nap one\n/GE nap two\n/GE nap three\n"),
    );

    assert_eq!(code, 0);
    assert!(start.elapsed() < Duration::from_millis(2500));
    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            "agent=ge timeout=120 message=nap one",
            "agent=ge timeout=120 message=nap two",
            "agent=ge timeout=120 message=nap three",
        ]
    );
}

#[test]
fn test_list_prints_registered_commands() {
    let scripts = Scripts::new();
    let (code, stdout, _) = run_router(
        &scripts,
        &["--agents", "GE:ge:Gemini,eng:engineer", "--list"],
        None,
    );

    assert_eq!(code, 0);
    assert!(stdout.starts_with("Available commands:"));
    assert!(stdout.contains("/GE"));
    assert!(stdout.contains("Gemini — bypasses main agent"));
    assert!(stdout.contains("/eng"));
    assert!(stdout.contains("/persona"));
}

#[test]
fn test_invalid_config_exits_nonzero() {
    let scripts = Scripts::new();
    let config_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config_path = config_dir.path().join("config.toml");
    std::fs::write(&config_path, "agents = [").expect("write config");

    let output = Command::new(env!("CARGO_BIN_EXE_command-router"))
        .args(["--config", config_path.to_str().unwrap()])
        .args(["--cli-path", scripts.cli_path().as_str()])
        .arg("--list")
        .env_remove("COMMAND_ROUTER_AGENTS")
        .env("RUST_LOG", "error")
        .output()
        .expect("Failed to execute command-router");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Configuration Error"), "stderr: {stderr}");
}
