//! Transport-agnostic command response type.
//!
//! Handlers produce plain response text; the host decides how to deliver it
//! (chat message, stdout line, HTTP body, etc.).

/// Response returned by a command handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResponse {
    /// Text delivered back to the caller.
    pub text: String,
}

impl CommandResponse {
    /// Creates a response with the given text.
    pub fn text(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Creates an `Error: ...` response for a failed invocation.
    pub fn error(message: impl AsRef<str>) -> Self {
        Self::text(format!("Error: {}", message.as_ref()))
    }

    /// Creates a usage hint for a command that needs an argument.
    pub fn usage(command: &str) -> Self {
        Self::text(format!("Usage: /{command} <message>"))
    }
}

impl std::fmt::Display for CommandResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}
