//! Error types for the prwd CLI.
//!
//! Uses thiserror for derive macros. Only fatal conditions live here: a
//! builtin command that fails writes a placeholder into the prompt instead.

use crate::exit_codes;
use crate::template::TemplateError;
use thiserror::Error;

/// Main error type for prwd operations.
#[derive(Error, Debug)]
pub enum PrwdError {
    /// The template could not be rendered.
    #[error("template error: {0}")]
    Template(#[from] TemplateError),

    /// User provided invalid arguments or configuration.
    #[error("{0}")]
    UserError(String),

    /// A lookup (e.g. project root) came back empty.
    #[error("{0}")]
    NotFound(String),
}

impl PrwdError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            PrwdError::Template(_) => exit_codes::TEMPLATE_FAILURE,
            PrwdError::UserError(_) => exit_codes::USER_ERROR,
            PrwdError::NotFound(_) => exit_codes::NOT_FOUND,
        }
    }
}

/// Result type alias for prwd operations.
pub type Result<T> = std::result::Result<T, PrwdError>;
