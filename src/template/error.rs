//! Fatal template errors.

use thiserror::Error;

/// Error type for template rendering failures.
///
/// Every variant aborts the whole render; no partial prompt is produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// A static or command token is longer than the token limit.
    #[error("invalid token size")]
    TokenTooLong {
        /// The token limit, in characters.
        max: usize,
    },

    /// The template holds more tokens than allowed.
    #[error("too many tokens")]
    TooManyTokens {
        /// The token limit.
        max: usize,
    },

    /// A `"` inside a command was never closed.
    #[error("unmatched quote")]
    UnmatchedQuote,

    /// A command has too many arguments, or its arguments are too long.
    #[error("argument list too large")]
    ArgumentListTooLarge,

    /// A `${}` span contained no command name.
    #[error("empty variable")]
    EmptyCommand,

    /// The command name is not in the command table.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// The rendered prompt does not fit in the output buffer.
    #[error("output buffer too short for rendered template")]
    OutputTooLarge {
        /// Output capacity, in characters.
        capacity: usize,
    },
}
