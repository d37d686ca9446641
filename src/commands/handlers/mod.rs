//! Command handlers for the router.
//!
//! A handler is a shared async closure built once at startup and invoked by
//! the host for every matching slash command. Handlers never fail: every
//! outcome, including invocation errors, resolves to a [`CommandResponse`].

pub mod agent;
pub mod persona;

pub use agent::agent_handler;
pub use persona::persona_handler;

use futures::future::BoxFuture;
use std::sync::Arc;

use super::output::CommandResponse;

/// Context provided by the host to a handler for one call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandContext {
    /// Raw argument text after the command name, if any.
    pub args: Option<String>,
}

impl CommandContext {
    /// Creates a context carrying the given argument text.
    pub fn with_args(args: impl Into<String>) -> Self {
        Self {
            args: Some(args.into()),
        }
    }

    /// Returns the argument text with surrounding whitespace removed.
    pub fn trimmed_args(&self) -> &str {
        self.args.as_deref().map(str::trim).unwrap_or("")
    }
}

/// Dispatchable handler installed in the host's command table.
pub type CommandHandler =
    Arc<dyn Fn(CommandContext) -> BoxFuture<'static, CommandResponse> + Send + Sync>;
