//! Sentence iterator over slurped input.

use once_cell::sync::Lazy;
use regex::Regex;

/// A sentence is a run of non-terminator characters followed by exactly one
/// terminator (`.`, `!` or `?`). Text after the last terminator is dropped.
static SENTENCE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^.!?]*[.!?]").unwrap());

/// Yields trimmed sentences in input order.
#[derive(Debug)]
pub struct Sentences {
    content: String,
    pos: usize,
}

impl Sentences {
    pub fn new(content: String) -> Self {
        Self { content, pos: 0 }
    }
}

impl Iterator for Sentences {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let m = SENTENCE_PATTERN.find_at(&self.content, self.pos)?;
            self.pos = m.end();
            let sentence = m.as_str().trim();
            if !sentence.is_empty() {
                return Some(sentence.to_string());
            }
        }
    }
}
