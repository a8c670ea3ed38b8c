//! `path [-n] [-c] [-l N] [-f FILLER]`

use super::{CommandContext, CommandOutput};
use crate::path::{FILLER_DEF, FILLER_LEN, cleancut, newsgroupize, quickcut};
use crate::template::{ArgumentList, MAX_OUTPUT_LEN};
use clap::Parser;
use tracing::debug;

const ERR_BAD_ARG: &str = "<path-bad-arg>";

#[derive(Parser, Debug)]
#[command(name = "path", disable_help_flag = true, args_override_self = true)]
struct PathArgs {
    /// Abbreviate every component but the last.
    #[arg(short = 'n')]
    newsgroup: bool,

    /// Only cut on component boundaries.
    #[arg(short = 'c')]
    cleancut: bool,

    /// Maximum length, 0 for unlimited.
    #[arg(short = 'l', default_value_t = 0)]
    maxlength: usize,

    /// Text replacing the part that was cut.
    #[arg(short = 'f', default_value = FILLER_DEF, allow_hyphen_values = true)]
    filler: String,

    /// Operands end option parsing and are otherwise ignored.
    #[arg(trailing_var_arg = true, hide = true)]
    operands: Vec<String>,
}

impl PathArgs {
    fn is_valid(&self) -> bool {
        self.maxlength <= MAX_OUTPUT_LEN && self.filler.chars().count() < FILLER_LEN
    }
}

pub(super) fn exec(argv: &ArgumentList, ctx: &CommandContext<'_>, out: &mut CommandOutput) {
    let args = match PathArgs::try_parse_from(argv.iter()) {
        Ok(args) if args.is_valid() => args,
        _ => {
            out.push_str(ERR_BAD_ARG);
            return;
        }
    };
    if !args.operands.is_empty() {
        debug!(operands = ?args.operands, "path ignores operands");
    }

    let cwd = match ctx.system.working_dir() {
        Ok(cwd) => cwd,
        Err(e) => {
            out.push_str(e.placeholder());
            return;
        }
    };

    let mut path = ctx.aliases.replace(&cwd);

    if args.newsgroup {
        path = newsgroupize(&path);
    }

    if args.maxlength > 0 && path.chars().count() > args.maxlength {
        path = if args.cleancut && !args.newsgroup {
            cleancut(&path, args.maxlength, &args.filler)
        } else {
            quickcut(&path, args.maxlength, &args.filler)
        };
    }

    out.push_str(&path);
}
