//! Line framing for the accessory serial link.
//!
//! Line format:
//! - ASCII payload (1-32 bytes)
//! - TERMINATOR: `\r` (a `\n` is accepted as well, so `\r\n` works)
//!
//! Empty lines are skipped. Bytes of an overlong or non-ASCII line are
//! dropped up to the next terminator.

use heapless::String;

/// Line terminator sent by the phone
pub const LINE_TERMINATOR: u8 = b'\r';

/// Maximum line payload in bytes
pub const MAX_LINE_LEN: usize = 32;

/// A complete line without its terminator
pub type Line = String<MAX_LINE_LEN>;

/// Errors that can occur while framing lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LineError {
    /// Line exceeded `MAX_LINE_LEN` bytes
    LineTooLong,
    /// Non-ASCII byte in the line
    InvalidByte,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseState {
    /// Accumulating payload bytes
    Collecting,
    /// Dropping bytes until the next terminator
    Discarding,
}

/// State machine for framing incoming lines
#[derive(Debug, Clone)]
pub struct LineParser {
    state: ParseState,
    buffer: Line,
}

impl Default for LineParser {
    fn default() -> Self {
        Self::new()
    }
}

impl LineParser {
    /// Create a new line parser
    pub fn new() -> Self {
        Self {
            state: ParseState::Collecting,
            buffer: String::new(),
        }
    }

    /// Reset the parser state
    pub fn reset(&mut self) {
        self.state = ParseState::Collecting;
        self.buffer.clear();
    }

    /// Number of payload bytes buffered so far
    pub fn pending(&self) -> usize {
        self.buffer.len()
    }

    /// Feed a single byte to the parser
    ///
    /// Returns `Ok(Some(line))` when a terminator completes a non-empty line,
    /// `Ok(None)` when more bytes are needed, or `Err` when the current line
    /// has to be dropped. The error is reported once per bad line.
    pub fn feed(&mut self, byte: u8) -> Result<Option<Line>, LineError> {
        let terminator = byte == LINE_TERMINATOR || byte == b'\n';

        match self.state {
            ParseState::Discarding => {
                if terminator {
                    self.reset();
                }
                Ok(None)
            }
            ParseState::Collecting if terminator => {
                if self.buffer.is_empty() {
                    return Ok(None);
                }
                let line = self.buffer.clone();
                self.reset();
                Ok(Some(line))
            }
            ParseState::Collecting => {
                if !byte.is_ascii() || byte.is_ascii_control() {
                    self.drop_line();
                    return Err(LineError::InvalidByte);
                }
                if self.buffer.push(char::from(byte)).is_err() {
                    self.drop_line();
                    return Err(LineError::LineTooLong);
                }
                Ok(None)
            }
        }
    }

    fn drop_line(&mut self) {
        self.buffer.clear();
        self.state = ParseState::Discarding;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed_all(parser: &mut LineParser, bytes: &[u8]) -> Option<Line> {
        let mut last = None;
        for &b in bytes {
            if let Ok(Some(line)) = parser.feed(b) {
                last = Some(line);
            }
        }
        last
    }

    #[test]
    fn test_single_line() {
        let mut parser = LineParser::new();
        let line = feed_all(&mut parser, b"B45/0S3C12\r").unwrap();
        assert_eq!(line.as_str(), "B45/0S3C12");
        assert_eq!(parser.pending(), 0);
    }

    #[test]
    fn test_crlf_yields_one_line() {
        let mut parser = LineParser::new();
        let mut lines = 0;
        for &b in b"i\r\n" {
            if parser.feed(b).unwrap().is_some() {
                lines += 1;
            }
        }
        assert_eq!(lines, 1);
    }

    #[test]
    fn test_empty_lines_skipped() {
        let mut parser = LineParser::new();
        assert_eq!(parser.feed(b'\r'), Ok(None));
        assert_eq!(parser.feed(b'\n'), Ok(None));
    }

    #[test]
    fn test_line_too_long_resyncs() {
        let mut parser = LineParser::new();
        let mut errors = 0;
        for _ in 0..MAX_LINE_LEN + 5 {
            if parser.feed(b'9') == Err(LineError::LineTooLong) {
                errors += 1;
            }
        }
        assert_eq!(errors, 1);

        // Tail of the bad line is dropped, next line parses
        let line = feed_all(&mut parser, b"\ri\r").unwrap();
        assert_eq!(line.as_str(), "i");
    }

    #[test]
    fn test_line_at_capacity() {
        let mut parser = LineParser::new();
        for _ in 0..MAX_LINE_LEN {
            assert_eq!(parser.feed(b'7'), Ok(None));
        }
        let line = parser.feed(b'\r').unwrap().unwrap();
        assert_eq!(line.len(), MAX_LINE_LEN);
    }

    #[test]
    fn test_invalid_byte_drops_line() {
        let mut parser = LineParser::new();
        assert_eq!(parser.feed(b'B'), Ok(None));
        assert_eq!(parser.feed(0xFF), Err(LineError::InvalidByte));
        assert_eq!(parser.feed(b'4'), Ok(None));
        assert_eq!(parser.feed(b'\r'), Ok(None));
        assert_eq!(parser.pending(), 0);
    }

    mod prop {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn test_never_exceeds_capacity(bytes in proptest::collection::vec(any::<u8>(), 0..256)) {
                let mut parser = LineParser::new();
                for b in bytes {
                    if let Ok(Some(line)) = parser.feed(b) {
                        prop_assert!(!line.is_empty());
                        prop_assert!(line.len() <= MAX_LINE_LEN);
                    }
                    prop_assert!(parser.pending() <= MAX_LINE_LEN);
                }
            }
        }
    }
}
