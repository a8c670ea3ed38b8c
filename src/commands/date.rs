//! `date [FORMAT]`

use super::{CommandContext, CommandOutput};
use crate::template::ArgumentList;
use chrono::format::StrftimeItems;
use std::fmt::Write;

const ERR_BAD_ARG: &str = "<date-bad-arg>";
const ERR_BAD_FORMAT: &str = "<date-bad-format>";

const DEFAULT_FORMAT: &str = "%H:%M:%S";

pub(super) fn exec(argv: &ArgumentList, ctx: &CommandContext<'_>, out: &mut CommandOutput) {
    let format = match argv.argc() {
        1 => DEFAULT_FORMAT,
        2 => argv.get(1).unwrap_or(DEFAULT_FORMAT),
        _ => {
            out.push_str(ERR_BAD_ARG);
            return;
        }
    };

    // Formatting an invalid item fails at display time, not at parse time.
    let items = StrftimeItems::new(format);
    let mut buf = String::new();
    if write!(buf, "{}", ctx.system.now().format_with_items(items)).is_err() || buf.is_empty() {
        out.push_str(ERR_BAD_FORMAT);
        return;
    }

    out.push_str(&buf);
}
