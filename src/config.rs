//! Configuration management for the command router.
//!
//! Settings come from, in increasing precedence: built-in defaults, a TOML
//! file, then environment variables / command-line flags (see
//! [`crate::cli::Cli`]).

use crate::commands::{parse_bindings, AgentBinding};
use crate::error::{Result, RouterError};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default agent CLI invocation.
pub const DEFAULT_CLI_PATH: &str = "node /app/openclaw.mjs";

/// Default binding list: `command:agent_id:description:timeout_secs`.
pub const DEFAULT_AGENTS: &str = "GE:ge:Send to GE agent (bypasses main):120,\
eng:engineer:Send to Engineer agent (bypasses main):300";

/// Main configuration structure for the command router.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RouterConfig {
    /// Command prefix used to reach the agent CLI.
    pub cli_path: String,

    /// Comma-separated agent binding list.
    pub agents: String,

    /// Path to the persona toggle script. `/persona` is only registered when
    /// this is set and non-blank.
    pub persona_script: Option<String>,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            cli_path: DEFAULT_CLI_PATH.to_string(),
            agents: DEFAULT_AGENTS.to_string(),
            persona_script: None,
        }
    }
}

/// Values that take precedence over the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub cli_path: Option<String>,
    pub agents: Option<String>,
    pub persona_script: Option<String>,
}

impl RouterConfig {
    /// Returns the default config file path for the current platform.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("command-router")
            .join("config.toml")
    }

    /// Loads configuration from a TOML file.
    ///
    /// A missing file yields the defaults.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| RouterError::config(format!("Failed to read config file: {e}")))?;

        Self::parse_toml(&content, path)
    }

    /// Parses configuration from a TOML string.
    fn parse_toml(content: &str, path: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|e| {
            RouterError::config(format!(
                "Configuration error in {}:\n  {}",
                path.display(),
                e
            ))
        })
    }

    /// Applies overrides, replacing any value that is set.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(cli_path) = &overrides.cli_path {
            self.cli_path = cli_path.clone();
        }
        if let Some(agents) = &overrides.agents {
            self.agents = agents.clone();
        }
        if overrides.persona_script.is_some() {
            self.persona_script = overrides.persona_script.clone();
        }
    }

    /// Parses the configured binding list.
    pub fn bindings(&self) -> Vec<AgentBinding> {
        parse_bindings(&self.agents)
    }

    /// Returns the persona script path if one is configured.
    pub fn persona_script(&self) -> Option<&str> {
        self.persona_script
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
    }
}
