//! Token iterators for the five tokenization modes.
//!
//! `chars` and `words` stream from the underlying reader and never hold the
//! whole input. `sentences`, `numbers` and `matches` read the input up front
//! because their token boundaries need the full text.

use std::io;

use clap::ValueEnum;

pub mod chars;
pub mod matches;
pub mod numbers;
pub mod sentences;
pub mod words;

pub use chars::Chars;
pub use matches::Matches;
pub use numbers::Numbers;
pub use sentences::Sentences;
pub use words::Words;

/// Tokenization mode, selected on the command line by one-letter name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Single characters, line terminators included
    #[value(name = "c")]
    Chars,
    /// Whitespace-delimited words
    #[value(name = "w")]
    Words,
    /// Sentences, ending in `.`, `!` or `?`
    #[value(name = "s")]
    Sentences,
    /// Numeric literals, sign and decimal part included
    #[value(name = "n")]
    Numbers,
    /// Non-overlapping matches of the PATTERN argument
    #[value(name = "r")]
    Regex,
}

/// Pattern used when regex tokenization is requested without a pattern.
pub const DEFAULT_PATTERN: &str = ".+";

/// Uniform fallible token stream; what the CLI dispatch drains to stdout.
pub type TokenIter = Box<dyn Iterator<Item = io::Result<String>>>;
