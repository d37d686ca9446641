//! Sub-agent command handler (/GE, /eng, ...).

use futures::FutureExt;
use std::sync::Arc;
use tracing::{error, info};

use super::{CommandContext, CommandHandler};
use crate::commands::definitions::AgentBinding;
use crate::commands::output::CommandResponse;
use crate::invoke::{
    compose_agent_command, enforced_ceiling_ms, InvocationRequest, InvocationResult, Invoker,
};

/// Number of message characters shown in the log preview.
const PREVIEW_CHARS: usize = 50;

/// Builds the handler for one binding.
///
/// The returned closure captures the binding, the CLI prefix and the shared
/// invoker; nothing else is shared between handlers.
pub fn agent_handler(
    binding: AgentBinding,
    cli_prefix: impl Into<String>,
    invoker: Arc<dyn Invoker>,
) -> CommandHandler {
    let binding = Arc::new(binding);
    let cli_prefix: Arc<str> = cli_prefix.into().into();

    Arc::new(move |ctx: CommandContext| {
        let binding = Arc::clone(&binding);
        let cli_prefix = Arc::clone(&cli_prefix);
        let invoker = Arc::clone(&invoker);
        async move { handle_agent_command(&binding, &cli_prefix, invoker.as_ref(), &ctx).await }
            .boxed()
    })
}

/// Handle a routed sub-agent command.
pub async fn handle_agent_command(
    binding: &AgentBinding,
    cli_prefix: &str,
    invoker: &dyn Invoker,
    ctx: &CommandContext,
) -> CommandResponse {
    let message = ctx.trimmed_args();
    if message.is_empty() {
        return CommandResponse::usage(&binding.command);
    }

    info!(
        command = %binding.command,
        agent = %binding.agent_id,
        "/{}: {}...",
        binding.command,
        preview(message)
    );

    let command_line =
        compose_agent_command(cli_prefix, &binding.agent_id, message, binding.timeout_secs);
    let request = InvocationRequest::new(command_line, enforced_ceiling_ms(binding.timeout_secs));

    match invoker.invoke(request).await {
        InvocationResult::Success { output } => {
            let output = output.trim();
            if output.is_empty() {
                CommandResponse::text(format!("({}: no response)", binding.command))
            } else {
                CommandResponse::text(output)
            }
        }
        InvocationResult::Failure { error_message } => {
            error!(command = %binding.command, "/{} error: {}", binding.command, error_message);
            CommandResponse::error(error_message)
        }
    }
}

fn preview(message: &str) -> String {
    message.chars().take(PREVIEW_CHARS).collect()
}
