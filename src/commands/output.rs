//! Bounded output buffer handed to builtin commands.

use std::fmt;

/// Character buffer with a fixed capacity.
///
/// Writes past the capacity are dropped on a character boundary. A command
/// can never grow its output beyond the capacity, and writing never fails.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    buf: String,
    chars: usize,
    capacity: usize,
}

impl CommandOutput {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: String::new(),
            chars: 0,
            capacity,
        }
    }

    /// Append as much of `s` as fits.
    pub fn push_str(&mut self, s: &str) {
        let room = self.capacity - self.chars;
        if room == 0 {
            return;
        }

        match s.char_indices().nth(room) {
            Some((cut, _)) => {
                self.buf.push_str(&s[..cut]);
                self.chars = self.capacity;
            }
            None => {
                self.buf.push_str(s);
                self.chars += s.chars().count();
            }
        }
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.chars
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.chars == 0
    }

    pub fn as_str(&self) -> &str {
        &self.buf
    }

    pub fn clear(&mut self) {
        self.buf.clear();
        self.chars = 0;
    }

    #[cfg(test)]
    pub fn into_string(self) -> String {
        self.buf
    }
}

impl fmt::Write for CommandOutput {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.push_str(s);
        Ok(())
    }
}
