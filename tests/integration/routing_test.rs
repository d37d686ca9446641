//! Routing integration tests.
//!
//! Registers commands from a config, then dispatches input lines through the
//! real shell invoker.

#![cfg(unix)]

use std::sync::Arc;
use std::time::{Duration, Instant};

use command_router::config::RouterConfig;
use command_router::host::CommandTable;
use command_router::invoke::ShellInvoker;
use command_router::register_commands;

use super::fixtures::Scripts;

fn table(scripts: &Scripts, agents: &str, with_persona: bool) -> CommandTable {
    let config = RouterConfig {
        cli_path: scripts.cli_path(),
        agents: agents.to_string(),
        persona_script: with_persona.then(|| scripts.persona_script()),
    };

    let mut table = CommandTable::new();
    register_commands(&mut table, &config, Arc::new(ShellInvoker::new()))
        .expect("registration should succeed");
    table
}

async fn dispatch(table: &CommandTable, line: &str) -> String {
    table
        .dispatch(line, true)
        .await
        .expect("slash command should produce a response")
        .text
}

#[tokio::test]
async fn test_routes_message_to_bound_agent() {
    let scripts = Scripts::new();
    let table = table(&scripts, "GE:ge:Gemini:120,eng:engineer:Engineer:300", false);

    assert_eq!(
        dispatch(&table, "/GE what is up").await,
        "agent=ge timeout=120 message=what is up"
    );
    assert_eq!(
        dispatch(&table, "/eng   fix the build  ").await,
        "agent=engineer timeout=300 message=fix the build"
    );
}

#[tokio::test]
async fn test_quotes_and_backticks_arrive_verbatim() {
    let scripts = Scripts::new();
    let table = table(&scripts, "GE:ge", false);

    assert_eq!(
        dispatch(&table, r#"/GE say "hi" then `whoami`"#).await,
        r#"agent=ge timeout=120 message=say "hi" then `whoami`"#
    );
}

#[tokio::test]
async fn test_usage_when_message_missing() {
    let scripts = Scripts::new();
    let table = table(&scripts, "GE:ge", false);

    assert_eq!(dispatch(&table, "/GE").await, "Usage: /GE <message>");
    assert_eq!(dispatch(&table, "/GE    ").await, "Usage: /GE <message>");
}

#[tokio::test]
async fn test_agent_failure_becomes_error_response() {
    let scripts = Scripts::new();
    let table = table(&scripts, "GE:ge", false);

    let text = dispatch(&table, "/GE fail now").await;
    assert!(text.starts_with("Error: Command failed"), "got: {text}");
    assert!(text.contains("agent ge crashed"), "got: {text}");
}

#[tokio::test]
async fn test_empty_agent_output_uses_placeholder() {
    let scripts = Scripts::new();
    let table = table(&scripts, "GE:ge", false);

    assert_eq!(dispatch(&table, "/GE silent please").await, "(GE: no response)");
}

#[tokio::test]
async fn test_ceiling_is_timeout_plus_grace() {
    let scripts = Scripts::new();
    // (-9 + 10) * 1000 ms: the smallest positive ceiling
    let table = table(&scripts, "GE:ge:Gemini:-9", false);

    let start = Instant::now();
    let text = dispatch(&table, "/GE slow request").await;

    assert!(start.elapsed() < Duration::from_secs(4));
    assert!(
        text.starts_with("Error: Command timed out after 1000ms"),
        "got: {text}"
    );
}

#[tokio::test]
async fn test_negative_ceiling_fails_without_running_agent() {
    let scripts = Scripts::new();
    let table = table(&scripts, "GE:ge:Gemini:-20", false);

    let start = Instant::now();
    let text = dispatch(&table, "/GE slow request").await;

    // the fake agent would sleep for five seconds if it were started
    assert!(start.elapsed() < Duration::from_secs(2));
    assert_eq!(
        text,
        "Error: Invalid timeout: -10000ms is out of range (must be >= 0)"
    );
}

#[tokio::test]
async fn test_failure_does_not_affect_other_commands() {
    let scripts = Scripts::new();
    let table = table(&scripts, "GE:ge,eng:engineer", false);

    let (failed, ok) = tokio::join!(
        dispatch(&table, "/GE fail hard"),
        dispatch(&table, "/eng still works")
    );

    assert!(failed.starts_with("Error:"));
    assert_eq!(ok, "agent=engineer timeout=120 message=still works");
}

#[tokio::test]
async fn test_persona_toggle() {
    let scripts = Scripts::new();
    let table = table(&scripts, "GE:ge", true);

    assert_eq!(dispatch(&table, "/persona").await, "persona status");
    assert_eq!(dispatch(&table, "/persona on").await, "persona on");
    assert_eq!(dispatch(&table, "/persona off").await, "persona off");
}

#[tokio::test]
async fn test_persona_absent_without_script() {
    let scripts = Scripts::new();
    let table = table(&scripts, "GE:ge", false);

    assert!(table.get("persona").is_none());
    assert!(dispatch(&table, "/persona on")
        .await
        .starts_with("Unknown command: /persona"));
}
