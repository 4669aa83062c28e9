//! Command-line surface.
//!
//! Parses `itx <mode> [<filename> [<pattern>]]` and drains the selected
//! token iterator to stdout, one token per line.

use std::io::{self, Write};

use anyhow::{bail, Result};
use clap::Parser;
use tracing::debug;

use crate::source::TextSource;
use crate::tokens::Mode;

/// Tokenize text from a file or stdin.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Tokenization mode
    #[arg(value_enum)]
    pub mode: Mode,

    /// Input file; reads stdin when omitted
    pub filename: Option<String>,

    /// Regular expression for mode `r`; ignored by the other modes
    pub pattern: Option<String>,

    /// Log filter written to stderr (overridden by RUST_LOG)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

/// Runs one tokenization pass for the parsed arguments.
pub fn run(args: &Args) -> Result<()> {
    if args.mode == Mode::Regex && args.pattern.is_none() {
        bail!("Regex mode requires a pattern argument");
    }

    let source = match &args.filename {
        Some(filename) => TextSource::from_file(filename)?,
        None => TextSource::from_stdin(),
    };

    debug!(mode = ?args.mode, pattern = ?args.pattern, "tokenizing");
    let tokens = source.tokens(args.mode, args.pattern.as_deref())?;

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let mut count = 0usize;
    for token in tokens {
        let token = token?;
        if let Err(err) = writeln!(out, "{token}") {
            // A closed pipe (e.g. `itx w f | head`) is a normal way to stop.
            if err.kind() == io::ErrorKind::BrokenPipe {
                return Ok(());
            }
            return Err(err.into());
        }
        count += 1;
    }
    if let Err(err) = out.flush() {
        if err.kind() != io::ErrorKind::BrokenPipe {
            return Err(err.into());
        }
    }
    debug!(tokens = count, "done");

    Ok(())
}
