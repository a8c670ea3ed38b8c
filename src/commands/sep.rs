//! `sep STR`

use super::{CommandContext, CommandOutput};
use crate::template::ArgumentList;

const ERR_BAD_ARG: &str = "<sep-bad-arg>";

/// Writes `STR` unless the previous segment rendered nothing, so
/// `${branch}${sep :}` shows no colon outside a repository.
pub(super) fn exec(argv: &ArgumentList, ctx: &CommandContext<'_>, out: &mut CommandOutput) {
    let (2, Some(separator)) = (argv.argc(), argv.get(1)) else {
        out.push_str(ERR_BAD_ARG);
        return;
    };

    if !ctx.previous_empty {
        out.push_str(separator);
    }
}
