//! `uid`

use super::{CommandContext, CommandOutput};
use crate::template::ArgumentList;

const ERR_BAD_ARG: &str = "<uid-bad-arg>";

pub(super) fn exec(argv: &ArgumentList, ctx: &CommandContext<'_>, out: &mut CommandOutput) {
    if argv.argc() != 1 {
        out.push_str(ERR_BAD_ARG);
        return;
    }

    out.push_str(if ctx.system.is_superuser() { "#" } else { "$" });
}
