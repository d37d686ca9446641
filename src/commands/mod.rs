//! Command definitions, parsing and handlers for the router.
//!
//! Bindings are parsed from configuration, each one becomes a handler, and the
//! host dispatches parsed input lines to those handlers.

pub mod definitions;
pub mod handlers;
pub mod help;
pub mod output;
pub mod router;

pub use definitions::{parse_bindings, AgentBinding, DEFAULT_TIMEOUT_SECS};
pub use handlers::{agent_handler, persona_handler, CommandContext, CommandHandler};
pub use output::CommandResponse;
pub use router::{Command, CommandRouter};
