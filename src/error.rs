//! Error types for the command router.
//!
//! Defines the main error enum used at startup and by the host registration
//! layer. Per-invocation failures never surface here; they are captured by the
//! executor and turned into response text (see [`crate::invoke`]).

use thiserror::Error;

/// Main error type for command router operations.
#[derive(Error, Debug)]
pub enum RouterError {
    /// Configuration errors (unreadable config file, invalid TOML, etc.)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Host registration errors (invalid command name, etc.)
    #[error("Registration error: {0}")]
    Registration(String),

    /// I/O errors on the host side (reading commands, writing responses).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl RouterError {
    /// Creates a configuration error with the given message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Creates a registration error with the given message.
    pub fn registration(msg: impl Into<String>) -> Self {
        Self::Registration(msg.into())
    }

    /// Returns the error category as a string for display purposes.
    pub fn category(&self) -> &'static str {
        match self {
            Self::Config(_) => "Configuration Error",
            Self::Registration(_) => "Registration Error",
            Self::Io(_) => "I/O Error",
        }
    }
}

/// Result type alias using RouterError.
pub type Result<T> = std::result::Result<T, RouterError>;
