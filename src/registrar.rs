//! Startup registration of routed commands.

use std::sync::Arc;
use tracing::info;

use crate::commands::handlers::persona::{PERSONA_COMMAND, PERSONA_DESCRIPTION};
use crate::commands::{agent_handler, persona_handler, AgentBinding};
use crate::config::RouterConfig;
use crate::error::Result;
use crate::host::{CommandHost, CommandRegistration};
use crate::invoke::Invoker;

/// Suffix appended to every routed command's description.
const BYPASS_SUFFIX: &str = " — bypasses main agent";

/// Registers one command per configured binding, plus `/persona` when a
/// toggle script is configured.
///
/// Returns the registered command names with their leading `/`, in
/// registration order. A failing registration stops the loop and its error is
/// returned as-is; earlier registrations are left in place.
pub fn register_commands(
    host: &mut dyn CommandHost,
    config: &RouterConfig,
    invoker: Arc<dyn Invoker>,
) -> Result<Vec<String>> {
    info!("Initializing command router");

    let bindings = config.bindings();
    let mut registered = Vec::with_capacity(bindings.len() + 1);

    for binding in bindings {
        let name = binding.command.clone();
        host.register_command(agent_registration(
            binding,
            &config.cli_path,
            Arc::clone(&invoker),
        ))?;
        registered.push(format!("/{name}"));
    }

    if let Some(script) = config.persona_script() {
        host.register_command(CommandRegistration {
            name: PERSONA_COMMAND.to_string(),
            description: PERSONA_DESCRIPTION.to_string(),
            accepts_args: true,
            require_auth: true,
            handler: persona_handler(script, invoker),
        })?;
        registered.push(format!("/{PERSONA_COMMAND}"));
    }

    info!(count = registered.len(), "Loaded: {}", registered.join(", "));
    Ok(registered)
}

/// Builds the registration for one agent binding.
pub fn agent_registration(
    binding: AgentBinding,
    cli_prefix: &str,
    invoker: Arc<dyn Invoker>,
) -> CommandRegistration {
    CommandRegistration {
        name: binding.command.clone(),
        description: format!("{}{BYPASS_SUFFIX}", binding.description),
        accepts_args: true,
        require_auth: true,
        handler: agent_handler(binding, cli_prefix, invoker),
    }
}
