//! Input handling: where text comes from and how it becomes tokens.
//!
//! A [`TextSource`] wraps any buffered reader. Char and word iteration
//! stream straight off the reader; sentence, number, and regex iteration
//! slurp the whole input first because their patterns need to see it all.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Cursor, Read};
use std::path::Path;

use anyhow::{anyhow, Result};
use tracing::debug;

use crate::tokens::{self, Chars, Matches, Mode, Numbers, Sentences, TokenIter, Words};

/// A source of text to tokenize.
pub struct TextSource {
    reader: Box<dyn BufRead>,
}

impl std::fmt::Debug for TextSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // The boxed reader has no Debug bound, so there is nothing to show.
        f.debug_struct("TextSource").finish_non_exhaustive()
    }
}

impl TextSource {
    /// Wraps an in-memory string.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self { reader: Box::new(Cursor::new(text.into())) }
    }

    /// Wraps an arbitrary buffered reader.
    pub fn from_reader(reader: impl BufRead + 'static) -> Self {
        Self { reader: Box::new(reader) }
    }

    /// Opens a file for reading.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|e| anyhow!("Failed to open {}: {e}", path.display()))?;
        debug!(path = %path.display(), "reading from file");
        Ok(Self { reader: Box::new(BufReader::new(file)) })
    }

    /// Reads from standard input.
    pub fn from_stdin() -> Self {
        debug!("reading from stdin");
        Self { reader: Box::new(BufReader::new(io::stdin())) }
    }

    /// Streams the source character by character.
    pub fn chars(self) -> Chars {
        Chars::new(self.reader)
    }

    /// Streams whitespace-separated words.
    pub fn words(self) -> Words {
        Words::new(self.reader)
    }

    /// Yields sentences terminated by `.`, `!`, or `?`.
    pub fn sentences(self) -> Result<Sentences> {
        Ok(Sentences::new(self.read_all()?))
    }

    /// Yields numeric literals.
    pub fn numbers(self) -> Result<Numbers> {
        Ok(Numbers::new(self.read_all()?))
    }

    /// Yields matches of a caller-supplied pattern.
    pub fn matches(self, pattern: &str) -> Result<Matches> {
        Matches::new(self.read_all()?, pattern)
    }

    /// Dispatches on `mode`, erasing the concrete iterator type so the
    /// caller can drain any mode through one loop. `pattern` only applies
    /// to [`Mode::Regex`] and falls back to [`tokens::DEFAULT_PATTERN`].
    pub fn tokens(self, mode: Mode, pattern: Option<&str>) -> Result<TokenIter> {
        let iter: TokenIter = match mode {
            Mode::Chars => Box::new(self.chars().map(|res| res.map(|c| c.to_string()))),
            Mode::Words => Box::new(self.words()),
            Mode::Sentences => Box::new(self.sentences()?.map(Ok)),
            Mode::Numbers => Box::new(self.numbers()?.map(Ok)),
            Mode::Regex => {
                let pattern = pattern.unwrap_or(tokens::DEFAULT_PATTERN);
                Box::new(self.matches(pattern)?.map(Ok))
            }
        };
        Ok(iter)
    }

    fn read_all(self) -> Result<String> {
        Ok(read_all_lossy(self.reader)?)
    }
}

/// Slurps a reader to a string, replacing invalid UTF-8 with U+FFFD so a
/// stray byte never aborts a whole-input mode.
fn read_all_lossy(mut reader: impl Read) -> io::Result<String> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    Ok(match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
    })
}
