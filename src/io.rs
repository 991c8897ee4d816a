use crate::error::Error;
use std::io::{BufReader, Read};
use std::str::{from_utf8, FromStr};

pub fn read_stdin() -> Result<Vec<u8>, Error> {
    let stdin = std::io::stdin();
    let mut reader = BufReader::new(stdin.lock());

    let mut input_buf = Vec::new();
    reader.read_to_end(&mut input_buf)?;
    Ok(input_buf)
}

#[inline]
fn is_whitespace(c: u8) -> bool {
    c <= b' '
}

/// Whitespace separated tokens over an in-memory buffer.
pub struct Scanner<'a> {
    buf: &'a [u8],
}

impl<'a> Scanner<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf }
    }

    fn skip_whitespace(&mut self) {
        let idx = self.buf.iter().position(|&c| !is_whitespace(c)).unwrap_or(self.buf.len());
        self.buf = &self.buf[idx..];
    }

    pub fn token(&mut self) -> Option<&'a [u8]> {
        self.skip_whitespace();
        if self.buf.is_empty() {
            return None;
        }
        let idx = self.buf.iter().position(|&c| is_whitespace(c)).unwrap_or(self.buf.len());
        let (token, rest) = self.buf.split_at(idx);
        self.buf = rest;
        Some(token)
    }

    // next non-whitespace byte
    pub fn byte(&mut self) -> Option<u8> {
        self.skip_whitespace();
        let (&c, rest) = self.buf.split_first()?;
        self.buf = rest;
        Some(c)
    }

    pub fn value<T: FromStr>(&mut self, expected: &'static str) -> Result<T, Error> {
        let token = self.token().ok_or(Error::UnexpectedEof(expected))?;
        from_utf8(token)
            .ok()
            .and_then(|s| s.parse::<T>().ok())
            .ok_or_else(|| Error::InvalidToken { token: String::from_utf8_lossy(token).into_owned(), expected })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn tokens_skip_any_whitespace() {
        let mut input = Scanner::new(b"  4 2\r\n1\t3\n");
        assert_eq!(input.token(), Some(&b"4"[..]));
        assert_eq!(input.token(), Some(&b"2"[..]));
        assert_eq!(input.token(), Some(&b"1"[..]));
        assert_eq!(input.token(), Some(&b"3"[..]));
        assert_eq!(input.token(), None);
    }

    #[test]
    fn bytes_ignore_line_breaks() {
        let mut input = Scanner::new(b"#A\n.B\n");
        let cells: Vec<u8> = std::iter::from_fn(|| input.byte()).collect();
        assert_eq!(cells, b"#A.B");
    }

    #[rstest]
    #[case(b"", "UnexpectedEof")]
    #[case(b"x", "InvalidToken")]
    #[case(b"-1", "InvalidToken")]
    fn value_errors(#[case] buf: &[u8], #[case] kind: &str) {
        let err = Scanner::new(buf).value::<usize>("vertex count").unwrap_err();
        assert!(format!("{err:?}").starts_with(kind), "{err:?}");
    }

    #[test]
    fn value_parses() {
        let mut input = Scanner::new(b"7 18446744073709551615");
        assert_eq!(input.value::<usize>("n").unwrap(), 7);
        assert_eq!(input.value::<u64>("value").unwrap(), u64::MAX);
    }
}
