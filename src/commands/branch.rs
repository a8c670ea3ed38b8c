//! `branch`

use super::{CommandContext, CommandOutput};
use crate::template::ArgumentList;

/// Writes nothing outside a repository, so a following `sep` is elided.
pub(super) fn exec(_argv: &ArgumentList, ctx: &CommandContext<'_>, out: &mut CommandOutput) {
    match ctx.system.branch() {
        Ok(Some(branch)) => out.push_str(&branch),
        Ok(None) => {}
        Err(e) => out.push_str(e.placeholder()),
    }
}
