//! Template tokenizer.
//!
//! Splits a template into static text and `${...}` command tokens. Given
//! `"this is ${a var} with ${things}"` the tokens are:
//!
//! - `this is ` (static)
//! - `a var` (command)
//! - ` with ` (static)
//! - `things` (command)

use super::MAX_TOKEN_LEN;
use super::error::TemplateError;

/// Kind of a template token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Literal text, copied verbatim to the output.
    Static,
    /// The inside of a `${...}` span, lexed and dispatched.
    Command,
}

/// A single template token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    fn new(kind: TokenKind, text: String) -> Self {
        Self { kind, text }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Literal,
    DollarSeen,
    Command,
}

/// Characters collected for the token being built.
struct Pending {
    text: String,
    chars: usize,
}

impl Pending {
    fn new() -> Self {
        Self {
            text: String::new(),
            chars: 0,
        }
    }

    fn push(&mut self, c: char) -> Result<(), TemplateError> {
        if self.chars >= MAX_TOKEN_LEN {
            return Err(TemplateError::TokenTooLong { max: MAX_TOKEN_LEN });
        }
        self.text.push(c);
        self.chars += 1;
        Ok(())
    }

    fn take(&mut self) -> String {
        self.chars = 0;
        std::mem::take(&mut self.text)
    }
}

struct TokenSink {
    tokens: Vec<Token>,
    max: usize,
}

impl TokenSink {
    fn push(&mut self, kind: TokenKind, text: String) -> Result<(), TemplateError> {
        if self.tokens.len() >= self.max {
            return Err(TemplateError::TooManyTokens { max: self.max });
        }
        self.tokens.push(Token::new(kind, text));
        Ok(())
    }

    /// Static tokens are only emitted when they hold text.
    fn push_static(&mut self, pending: &mut Pending) -> Result<(), TemplateError> {
        if pending.chars == 0 {
            return Ok(());
        }
        self.push(TokenKind::Static, pending.take())
    }

    /// Command tokens are emitted even when empty; the dispatcher rejects them.
    fn push_command(&mut self, pending: &mut Pending) -> Result<(), TemplateError> {
        self.push(TokenKind::Command, pending.take())
    }
}

/// Split `template` into at most `max_tokens` tokens.
///
/// A `$` not followed by `{` is literal text. An unterminated `${` runs to the
/// end of the template and still yields a command token.
///
/// # Errors
///
/// * `TemplateError::TokenTooLong` - a token exceeds [`MAX_TOKEN_LEN`] characters
/// * `TemplateError::TooManyTokens` - more than `max_tokens` tokens
pub fn tokenize(template: &str, max_tokens: usize) -> Result<Vec<Token>, TemplateError> {
    let mut sink = TokenSink {
        tokens: Vec::new(),
        max: max_tokens,
    };
    let mut pending = Pending::new();
    let mut state = State::Literal;
    let mut chars = template.chars();
    let mut current = chars.next();

    loop {
        match (state, current) {
            (State::Literal, None) => {
                sink.push_static(&mut pending)?;
                break;
            }
            (State::Literal, Some('$')) => {
                state = State::DollarSeen;
                current = chars.next();
            }
            (State::Literal, Some(c)) => {
                pending.push(c)?;
                current = chars.next();
            }
            (State::DollarSeen, Some('{')) => {
                sink.push_static(&mut pending)?;
                state = State::Command;
                current = chars.next();
            }
            // Lone '$': keep it and look at the same character again.
            (State::DollarSeen, _) => {
                pending.push('$')?;
                state = State::Literal;
            }
            (State::Command, None) => {
                sink.push_command(&mut pending)?;
                break;
            }
            (State::Command, Some('}')) => {
                sink.push_command(&mut pending)?;
                state = State::Literal;
                current = chars.next();
            }
            (State::Command, Some(c)) => {
                pending.push(c)?;
                current = chars.next();
            }
        }
    }

    Ok(sink.tokens)
}
