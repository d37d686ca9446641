//! Command-line argument parsing for the command router.
//!
//! Every routing setting can come from a flag or its environment variable;
//! both beat the config file.

use crate::config::{ConfigOverrides, RouterConfig};
use crate::error::Result;
use clap::Parser;
use std::path::PathBuf;

/// Routes slash commands straight to sub-agent CLIs.
///
/// Reads one slash command per line from stdin (or from --exec) and prints
/// each response.
#[derive(Parser, Debug)]
#[command(name = "command-router")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Command prefix used to invoke the agent CLI
    #[arg(long, env = "OPENCLAW_CLI_PATH", value_name = "COMMAND")]
    pub cli_path: Option<String>,

    /// Agent bindings: "command:agent_id:description:timeout_sec,..."
    #[arg(long, env = "COMMAND_ROUTER_AGENTS", value_name = "DEFS")]
    pub agents: Option<String>,

    /// Persona toggle script (enables /persona)
    #[arg(long, env = "PERSONA_SCRIPT_PATH", value_name = "PATH")]
    pub persona_script: Option<String>,

    /// Dispatch this line instead of reading stdin (repeatable)
    #[arg(short = 'e', long = "exec", value_name = "LINE")]
    pub exec: Vec<String>,

    /// Print registered commands and exit
    #[arg(long)]
    pub list: bool,
}

impl Cli {
    /// Parses command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Returns the config file path to use.
    ///
    /// Uses the --config argument if provided, otherwise the default path.
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(RouterConfig::default_path)
    }

    /// Returns the flag/environment values as config overrides.
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            cli_path: self.cli_path.clone(),
            agents: self.agents.clone(),
            persona_script: self.persona_script.clone(),
        }
    }

    /// Loads the config file and applies flag/environment overrides.
    pub fn resolve_config(&self) -> Result<RouterConfig> {
        let mut config = RouterConfig::load_from_file(&self.config_path())?;
        config.apply_overrides(&self.overrides());
        Ok(config)
    }
}
