//! `color N` and `color reset`

use super::{CommandContext, CommandOutput};
use crate::template::ArgumentList;
use std::fmt::Write;

const ERR_BAD_ARG: &str = "<color-bad-arg>";
const ERR_BAD_CODE: &str = "<color-bad-code>";

const RESET: &str = "\x1b[0;0m";

pub(super) fn exec(argv: &ArgumentList, _ctx: &CommandContext<'_>, out: &mut CommandOutput) {
    let (2, Some(code)) = (argv.argc(), argv.get(1)) else {
        out.push_str(ERR_BAD_ARG);
        return;
    };

    if code == "reset" {
        out.push_str(RESET);
        return;
    }

    match code.parse::<u8>() {
        Ok(n) => {
            let _ = write!(out, "\x1b[38;5;{}m", n);
        }
        Err(_) => out.push_str(ERR_BAD_CODE),
    }
}
