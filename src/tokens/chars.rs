//! Streaming character iterator.
//!
//! Decodes UTF-8 incrementally on top of a buffered reader: whole chunks are
//! decoded in one pass, and a multi-byte sequence cut off at a chunk boundary
//! is carried over until its remaining bytes arrive. Invalid sequences decode
//! to U+FFFD, one replacement character per rejected sequence, so the yielded
//! characters agree with `String::from_utf8_lossy` over the same bytes.

use std::collections::VecDeque;
use std::io::{self, BufRead};

/// Yields every character of the input in order, including line terminators.
///
/// Read errors are yielded once, after any characters decoded before the
/// failure; the iterator is exhausted from then on.
pub struct Chars {
    reader: Box<dyn BufRead>,
    /// Characters decoded from consumed chunks, drained front to back.
    decoded: VecDeque<char>,
    /// Trailing bytes of an incomplete UTF-8 sequence, at most three.
    carry: Vec<u8>,
    done: bool,
}

impl Chars {
    pub fn new(reader: Box<dyn BufRead>) -> Self {
        Self {
            reader,
            decoded: VecDeque::new(),
            carry: Vec::new(),
            done: false,
        }
    }

    /// Consume chunks from the reader until at least one character is
    /// decoded or the input ends.
    fn fill(&mut self) -> io::Result<()> {
        loop {
            let chunk = match self.reader.fill_buf() {
                Ok(chunk) => chunk,
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(err) => return Err(err),
            };

            if chunk.is_empty() {
                if !self.carry.is_empty() {
                    // input ended inside a multi-byte sequence
                    self.carry.clear();
                    self.decoded.push_back(char::REPLACEMENT_CHARACTER);
                }
                self.done = true;
                return Ok(());
            }

            let consumed = chunk.len();
            self.carry.extend_from_slice(chunk);
            self.reader.consume(consumed);
            self.decode_carry();

            if !self.decoded.is_empty() {
                return Ok(());
            }
        }
    }

    /// Decode every complete sequence in `carry`, leaving only an incomplete
    /// trailing sequence (if any) for the next chunk.
    fn decode_carry(&mut self) {
        let buf = std::mem::take(&mut self.carry);
        let mut start = 0;
        while start < buf.len() {
            match std::str::from_utf8(&buf[start..]) {
                Ok(text) => {
                    self.decoded.extend(text.chars());
                    start = buf.len();
                }
                Err(err) => {
                    let valid_end = start + err.valid_up_to();
                    self.decoded
                        .extend(String::from_utf8_lossy(&buf[start..valid_end]).chars());
                    match err.error_len() {
                        Some(invalid) => {
                            self.decoded.push_back(char::REPLACEMENT_CHARACTER);
                            start = valid_end + invalid;
                        }
                        None => {
                            self.carry = buf[valid_end..].to_vec();
                            return;
                        }
                    }
                }
            }
        }
    }
}

impl Iterator for Chars {
    type Item = io::Result<char>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(c) = self.decoded.pop_front() {
                return Some(Ok(c));
            }
            if self.done {
                return None;
            }
            if let Err(err) = self.fill() {
                self.done = true;
                return Some(Err(err));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::io::{BufReader, Cursor, Read};

    /// Feeds one byte per read call, forcing every chunk-boundary path.
    struct DripReader {
        bytes: Vec<u8>,
        pos: usize,
    }

    impl DripReader {
        fn new(bytes: &[u8]) -> Self {
            Self {
                bytes: bytes.to_vec(),
                pos: 0,
            }
        }
    }

    impl Read for DripReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.pos >= self.bytes.len() || buf.is_empty() {
                return Ok(0);
            }
            buf[0] = self.bytes[self.pos];
            self.pos += 1;
            Ok(1)
        }
    }

    /// Yields `bytes`, then a permanent broken-pipe error.
    struct FailingReader {
        bytes: Vec<u8>,
        sent: bool,
    }

    impl Read for FailingReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if !self.sent {
                self.sent = true;
                let n = self.bytes.len().min(buf.len());
                buf[..n].copy_from_slice(&self.bytes[..n]);
                return Ok(n);
            }
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "gone"))
        }
    }

    fn chars_of(bytes: &[u8]) -> Vec<char> {
        Chars::new(Box::new(Cursor::new(bytes.to_vec())))
            .map(|c| c.expect("no read errors from a cursor"))
            .collect()
    }

    fn dripped_chars_of(bytes: &[u8]) -> Vec<char> {
        Chars::new(Box::new(BufReader::new(DripReader::new(bytes))))
            .map(|c| c.expect("no read errors from a drip reader"))
            .collect()
    }

    #[test]
    fn test_ascii_in_order() {
        assert_eq!(chars_of(b"abc"), vec!['a', 'b', 'c']);
    }

    #[test]
    fn test_line_terminators_are_yielded() {
        assert_eq!(chars_of(b"a\nb\n"), vec!['a', '\n', 'b', '\n']);
    }

    #[test]
    fn test_empty_input() {
        assert!(chars_of(b"").is_empty());
    }

    #[test]
    fn test_multibyte_characters() {
        assert_eq!(chars_of("héllo 🦀".as_bytes()).len(), 7);
        assert_eq!(chars_of("🦀".as_bytes()), vec!['🦀']);
    }

    #[test]
    fn test_multibyte_survives_one_byte_reads() {
        assert_eq!(
            dripped_chars_of("x🦀é".as_bytes()),
            vec!['x', '🦀', 'é'],
            "sequences split across reads must be reassembled"
        );
    }

    #[test]
    fn test_invalid_byte_becomes_replacement() {
        assert_eq!(chars_of(&[0x61, 0xFF, 0x62]), vec!['a', '\u{FFFD}', 'b']);
    }

    #[test]
    fn test_truncated_sequence_at_eof() {
        // first two bytes of U+20AC, then nothing
        assert_eq!(chars_of(&[0xE2, 0x82]), vec!['\u{FFFD}']);
    }

    #[test]
    fn test_read_error_is_yielded_once_then_exhausted() {
        let reader = FailingReader {
            bytes: b"ok".to_vec(),
            sent: false,
        };
        let mut chars = Chars::new(Box::new(BufReader::new(reader)));

        assert_eq!(chars.next().unwrap().unwrap(), 'o');
        assert_eq!(chars.next().unwrap().unwrap(), 'k');
        let err = chars.next().unwrap().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
        assert!(chars.next().is_none(), "iterator must stay exhausted");
    }

    proptest! {
        /// Concatenating the yielded characters reproduces the lossily
        /// decoded input for any byte sequence, however it is chunked.
        #[test]
        fn prop_chars_concat_is_lossy_decode(bytes in prop::collection::vec(any::<u8>(), 0..256)) {
            let expected = String::from_utf8_lossy(&bytes);

            let whole: String = chars_of(&bytes).into_iter().collect();
            prop_assert_eq!(&whole, expected.as_ref());

            let dripped: String = dripped_chars_of(&bytes).into_iter().collect();
            prop_assert_eq!(&dripped, expected.as_ref());
        }

        /// Valid UTF-8 round-trips exactly, character for character.
        #[test]
        fn prop_valid_utf8_roundtrip(text in ".{0,64}") {
            let got: Vec<char> = chars_of(text.as_bytes());
            let want: Vec<char> = text.chars().collect();
            prop_assert_eq!(got, want);
        }
    }
}
