//! Command lexer.
//!
//! Splits the text of one command token into arguments, the way a shell
//! would for simple words. Given `path -nt foo "bar baz"` the arguments are
//! `path`, `-nt`, `foo` and `bar baz`.
//!
//! - Whitespace separates arguments.
//! - `"..."` groups characters, including whitespace, into the current
//!   argument. Quoted and unquoted parts paste together: `foo"bar baz"` and
//!   `"a""b"` are single arguments.
//! - `\` copies the next character literally, inside or outside quotes.

use super::MAX_ARGLIST_SIZE;
use super::arglist::ArgumentList;
use super::error::TemplateError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Arg,
    Space,
    Quoted,
    Backslash,
    QuotedBackslash,
}

struct Pending {
    text: String,
    chars: usize,
}

impl Pending {
    fn push(&mut self, c: char) -> Result<(), TemplateError> {
        if self.chars >= MAX_ARGLIST_SIZE {
            return Err(TemplateError::ArgumentListTooLarge);
        }
        self.text.push(c);
        self.chars += 1;
        Ok(())
    }

    /// Move the pending argument into `list`, if there is one.
    fn flush(&mut self, list: &mut ArgumentList) -> Result<(), TemplateError> {
        if self.chars == 0 {
            return Ok(());
        }
        list.insert(&self.text)
            .map_err(|_| TemplateError::ArgumentListTooLarge)?;
        self.text.clear();
        self.chars = 0;
        Ok(())
    }
}

/// Split `command` into an argument list.
///
/// # Errors
///
/// * `TemplateError::UnmatchedQuote` - the text ends inside `"..."`
/// * `TemplateError::ArgumentListTooLarge` - too many or too long arguments
pub fn lex(command: &str) -> Result<ArgumentList, TemplateError> {
    let mut list = ArgumentList::new();
    let mut pending = Pending {
        text: String::new(),
        chars: 0,
    };
    let mut state = State::Arg;

    for c in command.chars() {
        state = match state {
            State::Arg | State::Space if c.is_whitespace() => {
                pending.flush(&mut list)?;
                State::Space
            }
            State::Arg | State::Space => match c {
                '\\' => State::Backslash,
                '"' => State::Quoted,
                _ => {
                    pending.push(c)?;
                    State::Arg
                }
            },
            State::Quoted => match c {
                '\\' => State::QuotedBackslash,
                '"' => State::Arg,
                _ => {
                    pending.push(c)?;
                    State::Quoted
                }
            },
            State::Backslash => {
                pending.push(c)?;
                State::Arg
            }
            State::QuotedBackslash => {
                pending.push(c)?;
                State::Quoted
            }
        };
    }

    match state {
        State::Quoted | State::QuotedBackslash => return Err(TemplateError::UnmatchedQuote),
        // Nothing left to escape: keep the backslash itself.
        State::Backslash => pending.push('\\')?,
        State::Arg | State::Space => {}
    }
    pending.flush(&mut list)?;

    Ok(list)
}
