//! Agent binding definitions.
//!
//! Bindings are declared as a flat string of comma-separated entries, each
//! made of colon-separated fields:
//!
//! ```text
//! command:agent_id:description:timeout_secs
//! ```
//!
//! Only `command` and `agent_id` are required. Malformed entries are skipped
//! rather than failing the whole list.

use tracing::warn;

/// Timeout applied when an entry omits it or it does not parse.
pub const DEFAULT_TIMEOUT_SECS: i64 = 120;

/// One routable command bound to a sub-agent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentBinding {
    /// Command name without the leading `/`.
    pub command: String,
    /// Identifier handed to the agent CLI via `--agent`.
    pub agent_id: String,
    /// Human-readable description.
    pub description: String,
    /// Timeout passed to the agent CLI, in seconds.
    ///
    /// Not range-checked: zero and negative values are kept as configured.
    pub timeout_secs: i64,
}

impl AgentBinding {
    /// Builds a binding from raw fields, applying defaults.
    ///
    /// Returns `None` when `command` or `agent_id` is blank.
    pub fn from_fields(
        command: &str,
        agent_id: &str,
        description: Option<&str>,
        timeout: Option<&str>,
    ) -> Option<Self> {
        let command = command.trim();
        let agent_id = agent_id.trim();
        if command.is_empty() || agent_id.is_empty() {
            return None;
        }

        let description = description
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map(String::from)
            .unwrap_or_else(|| format!("Send to {agent_id} agent"));

        Some(Self {
            command: command.to_string(),
            agent_id: agent_id.to_string(),
            description,
            timeout_secs: parse_timeout(timeout),
        })
    }
}

/// Parses a timeout field, falling back to [`DEFAULT_TIMEOUT_SECS`].
fn parse_timeout(raw: Option<&str>) -> i64 {
    let Some(raw) = raw.map(str::trim).filter(|t| !t.is_empty()) else {
        return DEFAULT_TIMEOUT_SECS;
    };

    match raw.parse::<i64>() {
        Ok(secs) => secs,
        Err(_) => {
            warn!(timeout = raw, "Unparseable timeout, using default");
            DEFAULT_TIMEOUT_SECS
        }
    }
}

/// Parses a binding list into validated bindings, preserving input order.
///
/// Empty entries and entries missing a command or agent id are dropped.
/// Fields past the fourth are ignored.
pub fn parse_bindings(raw: &str) -> Vec<AgentBinding> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .filter_map(|entry| {
            let mut fields = entry.split(':');
            let command = fields.next().unwrap_or("");
            let agent_id = fields.next().unwrap_or("");
            let description = fields.next();
            let timeout = fields.next();

            let binding = AgentBinding::from_fields(command, agent_id, description, timeout);
            if binding.is_none() {
                warn!(entry, "Skipping agent definition without command or agent id");
            }
            binding
        })
        .collect()
}
