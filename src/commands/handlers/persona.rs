//! Persona toggle handler (/persona on|off|status).

use futures::FutureExt;
use std::sync::Arc;
use tracing::{error, info};

use super::{CommandContext, CommandHandler};
use crate::commands::output::CommandResponse;
use crate::invoke::{InvocationRequest, InvocationResult, Invoker};

/// Name the toggle command is registered under.
pub const PERSONA_COMMAND: &str = "persona";

/// Description shown for the toggle command.
pub const PERSONA_DESCRIPTION: &str = "Toggle persona mode (on/off)";

/// Fixed ceiling for toggle script calls.
pub const PERSONA_TIMEOUT_MS: i64 = 5000;

/// Argument used when the caller gives none.
const DEFAULT_ACTION: &str = "status";

/// Builds the toggle handler for a persona script.
pub fn persona_handler(
    script_path: impl Into<String>,
    invoker: Arc<dyn Invoker>,
) -> CommandHandler {
    let script_path: Arc<str> = script_path.into().into();

    Arc::new(move |ctx: CommandContext| {
        let script_path = Arc::clone(&script_path);
        let invoker = Arc::clone(&invoker);
        async move { handle_persona(&script_path, invoker.as_ref(), &ctx).await }.boxed()
    })
}

/// Handle /persona.
///
/// The argument is appended to the script path as-is; it is expected to be
/// one of `on`, `off` or `status`.
pub async fn handle_persona(
    script_path: &str,
    invoker: &dyn Invoker,
    ctx: &CommandContext,
) -> CommandResponse {
    let action = match ctx.trimmed_args() {
        "" => DEFAULT_ACTION,
        args => args,
    };

    info!(command = PERSONA_COMMAND, "/persona {}", action);

    let request = InvocationRequest::new(format!("{script_path} {action}"), PERSONA_TIMEOUT_MS);
    match invoker.invoke(request).await {
        InvocationResult::Success { output } => CommandResponse::text(output.trim()),
        InvocationResult::Failure { error_message } => {
            error!(command = PERSONA_COMMAND, "/persona error: {}", error_message);
            CommandResponse::error(error_message)
        }
    }
}
