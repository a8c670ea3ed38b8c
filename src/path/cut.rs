//! Path truncation policies.

use super::{head, tail};

/// Cut `path` to `maxlen` characters, keeping its tail behind `filler`.
///
/// Given a maxlen of 7, filler `..` and `/usr/local/share/doc`, the result
/// is `..e/doc`. Component boundaries are ignored. When the filler alone
/// fills `maxlen`, the result is the filler cut to `maxlen`.
pub fn quickcut(path: &str, maxlen: usize, filler: &str) -> String {
    if path.chars().count() <= maxlen {
        return path.to_string();
    }

    let flen = filler.chars().count();
    if flen >= maxlen {
        return head(filler, maxlen).to_string();
    }

    format!("{}{}", filler, tail(path, maxlen - flen))
}

/// Cut `path` to `maxlen` characters without splitting a component.
///
/// Leading components are dropped until the rest, starting at a `/`, fits
/// behind `filler`: `/usr/local/share/doc` becomes `.../share/doc`. When even
/// the last component is too long, this falls back to [`quickcut`].
pub fn cleancut(path: &str, maxlen: usize, filler: &str) -> String {
    if path.chars().count() <= maxlen {
        return path.to_string();
    }

    let flen = filler.chars().count();
    if flen >= maxlen {
        return head(filler, maxlen).to_string();
    }
    let room = maxlen - flen;

    let mut rest = path;
    while rest.chars().count() > room {
        let after_slash = rest.strip_prefix('/').unwrap_or(rest);
        match after_slash.find('/') {
            Some(idx) => rest = &after_slash[idx..],
            None => return quickcut(path, maxlen, filler),
        }
    }

    format!("{}{}", filler, rest)
}
