//! Argument lists.
//!
//! An argument list stores argv-style data in a single backing buffer. Each
//! argument is appended to the buffer and the list records where it lives,
//! so `get(i)` hands out a view into the shared storage.

use super::{MAX_ARG_COUNT, MAX_ARGLIST_SIZE};
use std::ops::Range;
use thiserror::Error;

/// Returned when an insert would exceed the argument count or buffer size.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("argument list overflow")]
pub struct ArgListOverflow;

/// An argv-equivalent list of arguments backed by one bounded buffer.
#[derive(Debug, Clone, Default)]
pub struct ArgumentList {
    backing: String,
    /// Characters used in `backing`, including one delimiter per argument.
    used: usize,
    values: Vec<Range<usize>>,
}

impl ArgumentList {
    /// Create an empty argument list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one argument and return the new argument count.
    ///
    /// Fails without touching the list when it already holds
    /// [`MAX_ARG_COUNT`] arguments, or when `value` plus its delimiter does
    /// not fit in the remaining [`MAX_ARGLIST_SIZE`] characters.
    pub fn insert(&mut self, value: &str) -> Result<usize, ArgListOverflow> {
        if self.values.len() >= MAX_ARG_COUNT {
            return Err(ArgListOverflow);
        }

        let needed = value.chars().count() + 1;
        if needed > MAX_ARGLIST_SIZE - self.used {
            return Err(ArgListOverflow);
        }

        let start = self.backing.len();
        self.backing.push_str(value);
        self.values.push(start..self.backing.len());
        self.used += needed;

        Ok(self.values.len())
    }

    /// Number of arguments (argc).
    pub fn argc(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Argument at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.values
            .get(index)
            .map(|range| &self.backing[range.clone()])
    }

    /// The command name (`argv[0]`).
    pub fn command(&self) -> Option<&str> {
        self.get(0)
    }

    /// Iterate over all arguments in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> + Clone + '_ {
        self.values
            .iter()
            .map(move |range| &self.backing[range.clone()])
    }

    /// Characters used in the backing buffer, delimiters included.
    pub fn used(&self) -> usize {
        self.used
    }
}
