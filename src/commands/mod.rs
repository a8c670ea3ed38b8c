//! Builtin template commands.
//!
//! Every `${...}` span of a template names one of the commands below. The
//! table is static and looked up by exact name. Executors are total: bad
//! flags, missing arguments and collaborator failures show up as bracketed
//! placeholders in the command's output, never as render errors.
//!
//! | Command | Output |
//! |---------|--------|
//! | `path [-n] [-c] [-l N] [-f FILLER]` | working directory, aliased and shortened |
//! | `branch` | current VCS branch, or nothing |
//! | `hostname [-l]` | short or fully qualified hostname |
//! | `uid` | `#` for the superuser, `$` otherwise |
//! | `color N`, `color reset` | terminal color escape |
//! | `date [FORMAT]` | local time, `%H:%M:%S` by default |
//! | `sep STR` | `STR`, unless the previous segment was empty |

mod branch;
mod color;
mod date;
mod hostname;
mod output;
mod path;
mod sep;
mod uid;


pub use output::CommandOutput;

use crate::alias::AliasTable;
use crate::system::System;
use crate::template::{ArgumentList, TemplateError};
use tracing::debug;

/// Signature shared by every builtin.
pub type Executor = fn(&ArgumentList, &CommandContext<'_>, &mut CommandOutput);

/// A named builtin.
#[derive(Debug, Clone, Copy)]
pub struct CommandDescriptor {
    pub name: &'static str,
    pub executor: Executor,
}

/// What a command may consult besides its own arguments.
pub struct CommandContext<'a> {
    pub system: &'a dyn System,
    pub aliases: &'a AliasTable,
    /// Whether the segment rendered just before this command was empty.
    pub previous_empty: bool,
}

static BUILTINS: &[CommandDescriptor] = &[
    CommandDescriptor {
        name: "branch",
        executor: branch::exec,
    },
    CommandDescriptor {
        name: "color",
        executor: color::exec,
    },
    CommandDescriptor {
        name: "date",
        executor: date::exec,
    },
    CommandDescriptor {
        name: "hostname",
        executor: hostname::exec,
    },
    CommandDescriptor {
        name: "path",
        executor: path::exec,
    },
    CommandDescriptor {
        name: "sep",
        executor: sep::exec,
    },
    CommandDescriptor {
        name: "uid",
        executor: uid::exec,
    },
];

/// Read-only table of commands.
#[derive(Debug, Clone, Copy)]
pub struct CommandTable {
    commands: &'static [CommandDescriptor],
}

impl CommandTable {
    /// The builtin commands.
    pub fn builtin() -> Self {
        Self { commands: BUILTINS }
    }

    pub fn lookup(&self, name: &str) -> Option<&CommandDescriptor> {
        self.commands.iter().find(|c| c.name == name)
    }

    #[cfg(test)]
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.commands.iter().map(|c| c.name)
    }

    /// Run the command named by `argv[0]`, appending to `out`.
    ///
    /// Returns the number of characters written. Fails only when `argv` is
    /// empty or names no known command.
    pub fn dispatch(
        &self,
        argv: &ArgumentList,
        ctx: &CommandContext<'_>,
        out: &mut CommandOutput,
    ) -> Result<usize, TemplateError> {
        let name = argv.command().ok_or(TemplateError::EmptyCommand)?;
        let command = self
            .lookup(name)
            .ok_or_else(|| TemplateError::UnknownCommand(name.to_string()))?;

        debug!(command = name, argc = argv.argc(), "dispatching");

        let before = out.len();
        (command.executor)(argv, ctx, out);
        Ok(out.len() - before)
    }
}

impl Default for CommandTable {
    fn default() -> Self {
        Self::builtin()
    }
}
