//! Input parsing for slash commands.
//!
//! Splits a raw input line into a command name and its argument text so the
//! host can look up the matching handler.

/// Parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// A slash command: name without the leading `/`, plus raw argument text.
    Slash { name: String, args: Option<String> },
    /// Text that is not a slash command.
    Text(String),
    /// Blank input.
    Empty,
}

/// Command router for parsing user input.
pub struct CommandRouter;

impl CommandRouter {
    /// Parse user input into a Command.
    ///
    /// Command names are kept as typed: binding names such as `GE` are
    /// case-sensitive.
    pub fn parse(input: &str) -> Command {
        let input = input.trim();

        if input.is_empty() {
            return Command::Empty;
        }

        let Some(rest) = input.strip_prefix('/') else {
            return Command::Text(input.to_string());
        };

        let (name, args) = match rest.split_once(char::is_whitespace) {
            Some((name, args)) => (name, Some(args.trim_start().to_string())),
            None => (rest, None),
        };

        Command::Slash {
            name: name.to_string(),
            args: args.filter(|a| !a.is_empty()),
        }
    }
}
