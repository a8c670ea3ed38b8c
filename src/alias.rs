//! Path aliases.
//!
//! An alias maps a short name to a directory, e.g. `$src` to
//! `/home/me/src`. When the working directory starts with an alias path the
//! prompt shows the name instead: `/home/me/src/prwd` becomes `$src/prwd`.
//! The home directory is registered as the `~` alias.
//!
//! Aliases whose name starts with `$` can also be exported as shell
//! variables (`prwd -a`), so the same names work on the command line.

use std::path::Path;
use thiserror::Error;

/// Maximum number of aliases.
pub const MAX_ALIASES: usize = 64;

/// Alias names hold strictly fewer characters than this.
pub const ALIAS_NAME_LEN: usize = 32;

/// Reasons an alias is rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AliasError {
    #[error("too many aliases")]
    TooMany,
    #[error("alias name is empty")]
    EmptyName,
    #[error("alias name is too long")]
    NameTooLong,
    #[error("alias name longer than its path")]
    NameLongerThanPath,
    #[error("alias name contains '/'")]
    NameContainsSlash,
}

/// A single alias.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alias {
    pub name: String,
    pub path: String,
}

/// Ordered table of aliases.
#[derive(Debug, Clone, Default)]
pub struct AliasTable {
    aliases: Vec<Alias>,
}

impl AliasTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an alias after validating it.
    pub fn add(&mut self, name: &str, path: &str) -> Result<(), AliasError> {
        if self.aliases.len() >= MAX_ALIASES {
            return Err(AliasError::TooMany);
        }
        if name.is_empty() {
            return Err(AliasError::EmptyName);
        }
        if name.contains('/') {
            return Err(AliasError::NameContainsSlash);
        }

        let name_len = name.chars().count();
        if name_len >= ALIAS_NAME_LEN {
            return Err(AliasError::NameTooLong);
        }
        if name_len > path.chars().count() {
            return Err(AliasError::NameLongerThanPath);
        }

        self.aliases.push(Alias {
            name: name.to_string(),
            path: path.to_string(),
        });
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Alias> {
        self.aliases.iter()
    }

    /// Alias with exactly this name.
    pub fn get(&self, name: &str) -> Option<&Alias> {
        self.aliases.iter().find(|a| a.name == name)
    }

    /// The alias whose path covers the largest part of `path`.
    ///
    /// Given `lib -> /var/lib` and `foo -> /var/lib/foo`, the path
    /// `/var/lib/foo/x` picks `foo`. Matches stop at component boundaries, so
    /// `/home/me` does not cover `/home/meg`. The first alias wins a tie.
    pub fn get_by_path(&self, path: &str) -> Option<&Alias> {
        let mut best: Option<&Alias> = None;

        for alias in &self.aliases {
            if !covers(&alias.path, path) {
                continue;
            }
            if best.is_none_or(|b| alias.path.len() > b.path.len()) {
                best = Some(alias);
            }
        }

        best
    }

    /// Replace the longest matching alias path at the start of `path` by
    /// the alias name.
    pub fn replace(&self, path: &str) -> String {
        match self.get_by_path(path) {
            Some(alias) => format!("{}{}", alias.name, &path[alias.path.len()..]),
            None => path.to_string(),
        }
    }

    /// Expand an alias name used as the first component of `input`.
    ///
    /// `$local/man/cat1` becomes `/usr/local/man/cat1` when `$local` points
    /// at `/usr/local`. Unknown names are left alone.
    pub fn expand_prefix(&self, input: &str) -> String {
        let end = input.find('/').unwrap_or(input.len());
        let (name, rest) = input.split_at(end);

        match self.get(name) {
            Some(alias) => format!("{}{}", alias.path, rest),
            None => input.to_string(),
        }
    }

    /// `export NAME=VALUE` lines for every `$`-alias pointing at an existing
    /// directory, meant to be `eval`ed by the shell.
    pub fn export_lines(&self) -> Vec<String> {
        self.aliases
            .iter()
            .filter_map(|alias| {
                let var = alias.name.strip_prefix('$')?;
                let target = self.expand_prefix(&alias.path);
                if !Path::new(&target).exists() {
                    return None;
                }
                Some(format!("export {}={}", var, shell_words::quote(&target)))
            })
            .collect()
    }
}

/// Whether `prefix` is `path` or one of its parent directories.
fn covers(prefix: &str, path: &str) -> bool {
    match path.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/') || prefix.ends_with('/'),
        None => false,
    }
}
