//! Path shortening.
//!
//! Pure string transforms applied to the working directory before it is
//! shown:
//!
//! - [`newsgroupize`]: `/usr/local/share/doc` becomes `/u/l/s/doc`
//! - [`quickcut`]: keep the tail of the path behind a filler
//! - [`cleancut`]: like quickcut, but only cut on `/` boundaries
//!
//! Lengths are counted in characters.

mod cut;
mod newsgroup;


pub use cut::{cleancut, quickcut};
pub use newsgroup::newsgroupize;

/// Default filler placed where a path was cut.
pub const FILLER_DEF: &str = "...";

/// Fillers hold strictly fewer characters than this.
pub const FILLER_LEN: usize = 16;

/// Default value for the `maxlength` setting.
pub const MAXPWD_LEN: usize = 24;

/// Byte offset of the `n`-th character of `s`, or `s.len()` past the end.
fn char_offset(s: &str, n: usize) -> usize {
    s.char_indices().nth(n).map_or(s.len(), |(i, _)| i)
}

/// The first `n` characters of `s`.
fn head(s: &str, n: usize) -> &str {
    &s[..char_offset(s, n)]
}

/// The last `n` characters of `s`.
fn tail(s: &str, n: usize) -> &str {
    let len = s.chars().count();
    &s[char_offset(s, len.saturating_sub(n))..]
}
