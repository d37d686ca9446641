//! command-router - routes slash commands straight to sub-agent CLIs.
//!
//! This library exposes the core modules for use by the binary and the
//! integration tests.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod host;
pub mod invoke;
pub mod logging;
pub mod registrar;

pub use registrar::register_commands;
