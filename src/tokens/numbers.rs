//! Numeric literal iterator over slurped input.

use once_cell::sync::Lazy;
use regex::Regex;

/// Optional sign, integer part, optional decimal part. Spelled with `[0-9]`
/// rather than `\d` to keep the original's ASCII-digit behavior.
static NUMBER_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[+-]?[0-9]+(?:\.[0-9]+)?").unwrap());

/// Yields numeric literals in input order.
#[derive(Debug)]
pub struct Numbers {
    content: String,
    pos: usize,
}

impl Numbers {
    pub fn new(content: String) -> Self {
        Self { content, pos: 0 }
    }
}

impl Iterator for Numbers {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        let m = NUMBER_PATTERN.find_at(&self.content, self.pos)?;
        self.pos = m.end();
        Some(m.as_str().to_string())
    }
}
