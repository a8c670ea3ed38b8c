//! Newsgroup-style path abbreviation.

/// Replace every path component but the last with its first character.
///
/// `/usr/local/share/doc` becomes `/u/l/s/doc`. A path that does not start
/// with `/` (`~`, `$alias`) keeps its first component whole. A trailing
/// slash stays attached to the last component: `/usr/local/` becomes
/// `/u/local/`. Paths with a single component come back unchanged.
pub fn newsgroupize(path: &str) -> String {
    let mut out = String::with_capacity(path.len());

    let mut rest = if path.starts_with('/') {
        path
    } else {
        match path.find('/') {
            Some(idx) => {
                out.push_str(&path[..idx]);
                &path[idx..]
            }
            None => return path.to_string(),
        }
    };

    // `rest` starts with '/' on every turn.
    loop {
        out.push('/');
        let last = &rest[1..];

        match last.find('/') {
            Some(idx) if idx + 1 < last.len() => {
                if let Some(first) = last.chars().next() {
                    out.push(first);
                }
                rest = &last[idx..];
            }
            // No more separators, or only a trailing one.
            _ => {
                out.push_str(last);
                break;
            }
        }
    }

    out
}
