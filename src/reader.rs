//! Support for reading an infix expression from an input stream.

use std::io::BufRead;

/// Error type if a read does not produce an expression.
///
/// `Incomplete` means the input ran out before any expression showed up;
/// `Error` means the input can't be used at all, e.g. it isn't UTF-8.
#[derive(Debug, Clone)]
pub enum ReadErr {
    Error(String),
    Incomplete(String),
}

impl std::fmt::Display for ReadErr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        match self {
            ReadErr::Error(e) => write!(f, "error in input: {e}"),
            ReadErr::Incomplete(e) => write!(f, "incomplete input: {e}"),
        }
    }
}

impl std::error::Error for ReadErr {}

pub type ReadResult<T> = Result<T, ReadErr>;

mod regex {
    use regex::bytes::Regex;
    use std::sync::OnceLock;

    /// Leading whitespace (blank lines included), then the rest of the line.
    pub(super) fn line() -> &'static Regex {
        static LINE: OnceLock<Regex> = OnceLock::new();
        LINE.get_or_init(|| {
            Regex::new(r"(?-u)\A[[:space:]]*([^\n]*)").expect("could not compile regex for line")
        })
    }
}

/// Find the expression in a buffer: skip any leading whitespace,
/// then take everything up to the next newline.
///
/// A trailing carriage return is dropped. Later lines are ignored.
pub fn parse_line(input: &[u8]) -> ReadResult<&str> {
    let line = regex::line()
        .captures(input)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_bytes())
        .unwrap_or_default();
    let line = line.strip_suffix(b"\r").unwrap_or(line);
    if line.is_empty() {
        return Err(ReadErr::Incomplete("no expression before end of input".to_owned()));
    }
    let line = std::str::from_utf8(line)
        .map_err(|e| ReadErr::Error(format!("expression is not UTF-8: {e}")))?;
    tracing::trace!(line, "read expression");
    Ok(line)
}

/// Read lines from `input` until one holds an expression, and return it.
///
/// Blank and whitespace-only lines are skipped. Nothing past the first
/// non-blank line is read, so an interactive stream gets its answer per line.
pub fn read_expression(input: &mut impl BufRead) -> ReadResult<String> {
    let mut line = Vec::new();
    loop {
        line.clear();
        let n = input
            .read_until(b'\n', &mut line)
            .map_err(|e| ReadErr::Error(format!("could not read input: {e}")))?;
        if n == 0 {
            return Err(ReadErr::Incomplete("no expression before end of input".to_owned()));
        }
        match parse_line(&line) {
            // Whitespace-only line; keep going.
            Err(ReadErr::Incomplete(_)) => continue,
            result => return result.map(str::to_owned),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn takes_first_line() -> Result<(), ReadErr> {
        assert_eq!(parse_line(b"a+b*c\n(x)\n")?, "a+b*c");
        assert_eq!(parse_line(b"a+b")?, "a+b");
        Ok(())
    }

    #[test]
    fn skips_leading_space_and_blank_lines() -> Result<(), ReadErr> {
        assert_eq!(parse_line(b"\n\n   \t(a+b)*c\n")?, "(a+b)*c");
        Ok(())
    }

    #[test]
    fn keeps_inner_and_trailing_space() -> Result<(), ReadErr> {
        assert_eq!(parse_line(b"a + b  \n")?, "a + b  ");
        Ok(())
    }

    #[test]
    fn drops_carriage_return() -> Result<(), ReadErr> {
        assert_eq!(parse_line(b"a-b\r\nc\r\n")?, "a-b");
        Ok(())
    }

    #[test]
    fn empty_input_is_incomplete() {
        for input in [&b""[..], b"\n", b"  \n\t\n"] {
            match parse_line(input) {
                Err(ReadErr::Incomplete(_)) => (),
                v => panic!("unexpected read result for {input:?}: {v:?}"),
            }
        }
    }

    #[test]
    fn non_utf8_is_an_error() {
        match parse_line(b"a+\xff\n") {
            Err(ReadErr::Error(e)) => assert!(e.contains("UTF-8"), "{e}"),
            v => panic!("unexpected read result: {v:?}"),
        }
    }

    #[test]
    fn reads_from_stream() -> Result<(), ReadErr> {
        let mut input = std::io::Cursor::new(b"  a^b^c\nleftover".to_vec());
        assert_eq!(read_expression(&mut input)?, "a^b^c");
        Ok(())
    }

    #[test]
    fn reads_blank_lines_then_expression() -> Result<(), ReadErr> {
        let mut input = std::io::Cursor::new(b"\n  \t\n\r\n (a+b)*c\r\n".to_vec());
        assert_eq!(read_expression(&mut input)?, "(a+b)*c");
        Ok(())
    }

    #[test]
    fn stream_of_blank_lines_is_incomplete() {
        let mut input = std::io::Cursor::new(b"\n   \n\t".to_vec());
        match read_expression(&mut input) {
            Err(ReadErr::Incomplete(_)) => (),
            v => panic!("unexpected read result: {v:?}"),
        }
    }

    /// Hands out one line, then fails as if the other end never closed.
    struct OpenStream {
        sent: bool,
    }

    impl std::io::Read for OpenStream {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            if self.sent {
                return Err(std::io::Error::new(
                    std::io::ErrorKind::WouldBlock,
                    "stream still open",
                ));
            }
            self.sent = true;
            let line = b"a+b\n";
            buf[..line.len()].copy_from_slice(line);
            Ok(line.len())
        }
    }

    #[test]
    fn returns_at_end_of_line_without_eof() -> Result<(), ReadErr> {
        let mut input = std::io::BufReader::new(OpenStream { sent: false });
        assert_eq!(read_expression(&mut input)?, "a+b");
        Ok(())
    }

    #[test]
    fn read_errors_are_reported() {
        let mut input = std::io::BufReader::new(OpenStream { sent: true });
        match read_expression(&mut input) {
            Err(ReadErr::Error(e)) => assert!(e.contains("stream still open"), "{e}"),
            v => panic!("unexpected read result: {v:?}"),
        }
    }

    #[test]
    fn error_display() {
        let err = ReadErr::Incomplete("no expression".to_owned());
        assert_eq!(err.to_string(), "incomplete input: no expression");
    }
}
