//! Whitespace-delimited word iterator, streaming on top of [`Chars`].

use std::io::{self, BufRead};

use super::Chars;

/// Yields maximal runs of non-whitespace characters; never yields an empty
/// token. Whitespace is `char::is_whitespace`.
pub struct Words {
    chars: Chars,
}

impl Words {
    pub fn new(reader: Box<dyn BufRead>) -> Self {
        Self {
            chars: Chars::new(reader),
        }
    }
}

impl Iterator for Words {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut word = String::new();
        for c in self.chars.by_ref() {
            match c {
                Ok(c) if c.is_whitespace() => {
                    if !word.is_empty() {
                        return Some(Ok(word));
                    }
                }
                Ok(c) => word.push(c),
                Err(err) => return Some(Err(err)),
            }
        }
        if word.is_empty() {
            None
        } else {
            Some(Ok(word))
        }
    }
}
