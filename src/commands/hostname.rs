//! `hostname [-l]`

use super::{CommandContext, CommandOutput};
use crate::system::HostnameError;
use crate::template::ArgumentList;
use clap::Parser;
use tracing::debug;

const ERR_BAD_ARG: &str = "<hostname-bad-arg>";
const ERR_BAD_CHARSET: &str = "<hostname-bad-charset>";
const ERR_GENERIC: &str = "<hostname-error>";

#[derive(Parser, Debug)]
#[command(name = "hostname", disable_help_flag = true, args_override_self = true)]
struct HostnameArgs {
    /// Print the fully qualified name.
    #[arg(short = 'l')]
    long: bool,

    /// Operands end option parsing and are otherwise ignored.
    #[arg(trailing_var_arg = true, hide = true)]
    operands: Vec<String>,
}

pub(super) fn exec(argv: &ArgumentList, ctx: &CommandContext<'_>, out: &mut CommandOutput) {
    let hostname = match ctx.system.hostname() {
        Ok(name) => name,
        Err(HostnameError::BadCharset) => {
            out.push_str(ERR_BAD_CHARSET);
            return;
        }
        Err(HostnameError::Lookup(_)) => {
            out.push_str(ERR_GENERIC);
            return;
        }
    };

    let Ok(args) = HostnameArgs::try_parse_from(argv.iter()) else {
        out.push_str(ERR_BAD_ARG);
        return;
    };
    if !args.operands.is_empty() {
        debug!(operands = ?args.operands, "hostname ignores operands");
    }

    if args.long {
        out.push_str(&hostname);
    } else {
        out.push_str(short_name(&hostname));
    }
}

/// Everything before the first dot.
fn short_name(hostname: &str) -> &str {
    hostname.split('.').next().unwrap_or(hostname)
}
