//! Prompt template engine.
//!
//! A template is literal text interspersed with `${command args...}` spans.
//! Rendering happens in this order:
//!
//! 1. [`tokenize`] splits the whole template into static and command tokens.
//! 2. [`Renderer::render`] walks the tokens, copying static text and running
//!    command tokens:
//!    - [`lex`] splits the command text into an [`ArgumentList`] using
//!      shell-like quoting rules.
//!    - the command table dispatches `argv[0]` to a builtin.
//! 3. Every segment is appended to a bounded output buffer.
//!
//! # Example
//!
//! ```text
//! ${hostname}:${branch}${sep :}${path -n -l 24}${uid}
//! ```
//!
//! Grammar errors (bad tokens, unmatched quotes, unknown commands, oversized
//! output) abort the render. Builtins never fail the render; they write a
//! bracketed placeholder such as `<color-bad-code>` instead.

mod arglist;
mod error;
mod lexer;
mod render;
mod tokenize;

#[cfg(test)]
mod tests;

pub use arglist::{ArgListOverflow, ArgumentList};
pub use error::TemplateError;
pub use lexer::lex;
pub use render::Renderer;
pub use tokenize::{Token, TokenKind, tokenize};

/// Maximum number of tokens in a template.
pub const MAX_TOKEN_COUNT: usize = 64;

/// Maximum length of a single token, in characters.
pub const MAX_TOKEN_LEN: usize = 128;

/// Maximum number of arguments in a single command.
pub const MAX_ARG_COUNT: usize = 64;

/// Maximum number of characters stored in an argument list, counting one
/// delimiter per argument.
pub const MAX_ARGLIST_SIZE: usize = 64 * MAX_ARG_COUNT;

/// Maximum length of the rendered prompt and of any command output, in
/// characters.
pub const MAX_OUTPUT_LEN: usize = 1024;
