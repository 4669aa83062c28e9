//! User-pattern match iterator over slurped input.

use anyhow::{anyhow, Result};
use regex::Regex;

/// Yields every non-overlapping match of a caller-supplied pattern.
#[derive(Debug)]
pub struct Matches {
    content: String,
    pattern: Regex,
    pos: usize,
}

impl Matches {
    /// Compiles `pattern` and prepares to scan `content` with it.
    pub fn new(content: String, pattern: &str) -> Result<Self> {
        let pattern = Regex::new(pattern)
            .map_err(|e| anyhow!("Failed to compile pattern {pattern:?}: {e}"))?;
        Ok(Self { content, pattern, pos: 0 })
    }
}

impl Iterator for Matches {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos > self.content.len() {
            return None;
        }
        let m = self.pattern.find_at(&self.content, self.pos)?;
        if m.is_empty() {
            // Step past an empty match so the scan always advances.
            let step = self.content[m.end()..].chars().next().map_or(1, char::len_utf8);
            self.pos = m.end() + step;
        } else {
            self.pos = m.end();
        }
        Some(m.as_str().to_string())
    }
}
