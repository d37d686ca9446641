//! Host collaboration layer.
//!
//! The router only needs one thing from its host: a way to register commands.
//! [`CommandHost`] captures that contract; [`CommandTable`] is an in-memory
//! host that also dispatches input lines, used by the binary and the tests.

use std::collections::HashMap;
use tracing::warn;

use crate::commands::help::format_help;
use crate::commands::{Command, CommandContext, CommandHandler, CommandResponse, CommandRouter};
use crate::error::{Result, RouterError};

/// Name of the built-in help command answered by [`CommandTable`].
pub const HELP_COMMAND: &str = "help";

/// A command registration request.
#[derive(Clone)]
pub struct CommandRegistration {
    /// Command name without the leading `/`.
    pub name: String,
    /// Description shown in command listings.
    pub description: String,
    /// Whether the command takes free-form argument text.
    pub accepts_args: bool,
    /// Whether the caller must be authorized before the handler runs.
    pub require_auth: bool,
    /// Handler invoked for each call.
    pub handler: CommandHandler,
}

impl std::fmt::Debug for CommandRegistration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandRegistration")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("accepts_args", &self.accepts_args)
            .field("require_auth", &self.require_auth)
            .finish_non_exhaustive()
    }
}

/// Trait for runtimes that accept command registrations.
pub trait CommandHost {
    /// Installs a command. Errors propagate to the caller unchanged.
    fn register_command(&mut self, registration: CommandRegistration) -> Result<()>;
}

/// In-memory command table keyed by command name.
///
/// Registering a name twice replaces the earlier entry.
#[derive(Debug, Default)]
pub struct CommandTable {
    commands: HashMap<String, CommandRegistration>,
}

impl CommandTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the registration for `name`, if any.
    pub fn get(&self, name: &str) -> Option<&CommandRegistration> {
        self.commands.get(name)
    }

    /// Returns the number of registered commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Returns true if no commands are registered.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Returns registered command names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.commands.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Returns the help listing for all registered commands.
    pub fn help_text(&self) -> String {
        format_help(self.names().into_iter().map(|name| {
            let description = self
                .commands
                .get(name)
                .map(|c| c.description.as_str())
                .unwrap_or("");
            (name, description)
        }))
    }

    /// Dispatches an input line.
    ///
    /// Returns `None` for blank input and for text that is not a slash
    /// command.
    pub async fn dispatch(&self, input: &str, authorized: bool) -> Option<CommandResponse> {
        let (name, args) = match CommandRouter::parse(input) {
            Command::Slash { name, args } => (name, args),
            Command::Text(_) | Command::Empty => return None,
        };

        let Some(command) = self.commands.get(&name) else {
            if name == HELP_COMMAND {
                return Some(CommandResponse::text(self.help_text()));
            }
            return Some(CommandResponse::text(format!(
                "Unknown command: /{name}. Type /{HELP_COMMAND} for available commands."
            )));
        };

        if command.require_auth && !authorized {
            warn!(command = %name, "Rejected unauthorized command");
            return Some(CommandResponse::text(format!(
                "Not authorized to use /{name}."
            )));
        }

        let ctx = CommandContext {
            args: if command.accepts_args { args } else { None },
        };
        Some((command.handler)(ctx).await)
    }
}

impl CommandHost for CommandTable {
    fn register_command(&mut self, registration: CommandRegistration) -> Result<()> {
        let name = &registration.name;
        if name.is_empty() || name.contains('/') || name.chars().any(char::is_whitespace) {
            return Err(RouterError::registration(format!(
                "invalid command name '{name}'"
            )));
        }

        if let Some(previous) = self.commands.insert(name.clone(), registration) {
            warn!(
                command = %previous.name,
                "Command registered twice, later registration wins"
            );
        }
        Ok(())
    }
}
