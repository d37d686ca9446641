//! Throwaway agent and persona scripts for integration tests.

use std::path::Path;
use tempfile::TempDir;

/// Agent CLI stand-in.
///
/// Called as `agent --agent ID --message MSG --timeout N`, echoes the parsed
/// arguments back. Messages starting with `fail` exit non-zero, `slow`
/// sleeps past any short ceiling, `nap` sleeps one second before answering,
/// `silent` prints nothing.
const AGENT_SCRIPT: &str = r#"#!/bin/sh
case "$5" in
  fail*) echo "agent $3 crashed" >&2; exit 2 ;;
  slow*) exec sleep 5 ;;
  nap*) sleep 1 ;;
  silent*) exit 0 ;;
esac
printf 'agent=%s timeout=%s message=%s\n' "$3" "$7" "$5"
"#;

/// Persona toggle stand-in; echoes its action.
const PERSONA_SCRIPT: &str = r#"#!/bin/sh
echo "persona $1"
"#;

/// Scripts written into a temporary directory.
pub struct Scripts {
    dir: TempDir,
}

impl Scripts {
    /// Writes both scripts into a fresh temporary directory.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        std::fs::write(dir.path().join("agent.sh"), AGENT_SCRIPT).expect("write agent.sh");
        std::fs::write(dir.path().join("persona.sh"), PERSONA_SCRIPT).expect("write persona.sh");
        Self { dir }
    }

    fn path(&self) -> &Path {
        self.dir.path()
    }

    /// CLI prefix that runs the fake agent.
    pub fn cli_path(&self) -> String {
        format!("sh {}", self.path().join("agent.sh").display())
    }

    /// Command that runs the fake persona script.
    pub fn persona_script(&self) -> String {
        format!("sh {}", self.path().join("persona.sh").display())
    }
}
