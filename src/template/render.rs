//! Template rendering.

use super::error::TemplateError;
use super::lexer::lex;
use super::tokenize::{TokenKind, tokenize};
use super::{MAX_OUTPUT_LEN, MAX_TOKEN_COUNT};
use crate::alias::AliasTable;
use crate::commands::{CommandContext, CommandOutput, CommandTable};
use crate::system::System;
use tracing::debug;

/// Renders templates against a set of collaborators.
///
/// A renderer holds no state between calls: rendering the same template
/// twice with the same collaborators gives the same prompt.
pub struct Renderer<'a> {
    commands: CommandTable,
    system: &'a dyn System,
    aliases: &'a AliasTable,
    capacity: usize,
}

impl<'a> Renderer<'a> {
    /// Renderer using the builtin commands and a [`MAX_OUTPUT_LEN`] output.
    pub fn new(system: &'a dyn System, aliases: &'a AliasTable) -> Self {
        Self {
            commands: CommandTable::builtin(),
            system,
            aliases,
            capacity: MAX_OUTPUT_LEN,
        }
    }

    /// Limit the rendered prompt to `capacity` characters.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Render `template` into a prompt.
    ///
    /// Static text is copied as is and every command is replaced by its
    /// output. Fails without partial output when the template is malformed
    /// or the prompt would exceed the capacity.
    pub fn render(&self, template: &str) -> Result<String, TemplateError> {
        let tokens = tokenize(template, MAX_TOKEN_COUNT)?;
        debug!(tokens = tokens.len(), "template tokenized");

        let mut rendered = String::new();
        let mut used = 0;
        let mut previous_empty = false;
        let mut segment = CommandOutput::with_capacity(MAX_OUTPUT_LEN);

        for token in &tokens {
            segment.clear();

            match token.kind {
                TokenKind::Static => {
                    segment.push_str(&token.text);
                    previous_empty = false;
                }
                TokenKind::Command => {
                    let argv = lex(&token.text)?;
                    let ctx = CommandContext {
                        system: self.system,
                        aliases: self.aliases,
                        previous_empty,
                    };
                    let written = self.commands.dispatch(&argv, &ctx, &mut segment)?;
                    previous_empty = written == 0;
                }
            }

            used += segment.len();
            if used > self.capacity {
                debug!(used, capacity = self.capacity, "rendered template overflows");
                return Err(TemplateError::OutputTooLarge {
                    capacity: self.capacity,
                });
            }
            rendered.push_str(segment.as_str());
        }

        Ok(rendered)
    }
}
