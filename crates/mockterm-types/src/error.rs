//! Error types for mockterm.

use std::io;

/// Errors produced by the mockterm widget framework.
///
/// `CommandNotFound` and `Handler` are the two user-visible kinds: both are
/// rendered inline on the output block of the command that caused them and
/// neither terminates the session. The rest are construction/configuration
/// errors surfaced to the hosting application.
#[derive(Debug, thiserror::Error)]
pub enum TermError {
    #[error("config error: {0}")]
    Config(String),

    /// The first token of an input line matched no registered command.
    #[error("{0}: command not found")]
    CommandNotFound(String),

    /// A command handler returned an error; caught at the dispatch boundary.
    #[error("{name}: an error occurred while running this command: {message}")]
    Handler { name: String, message: String },

    /// Arbitrary failure raised inside a command handler.
    #[error("{0}")]
    Command(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, TermError>;
