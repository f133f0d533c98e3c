//! Byte-oriented line reading.
//!
//! Tokenization and classification only look at ASCII, so input files are
//! read as raw bytes and decoded lossily. A stray Latin-1 byte turns into
//! U+FFFD in its own line instead of failing the whole file, which
//! [`BufRead::lines`] would do.

use std::io::{self, BufRead};

/// Iterator over the lines of a reader, decoded with
/// [`String::from_utf8_lossy`].
///
/// Line terminators (`\n` or `\r\n`) are removed, like [`BufRead::lines`].
#[derive(Debug)]
pub struct LossyLines<R> {
    reader: R,
    buf: Vec<u8>,
}

impl<R: BufRead> Iterator for LossyLines<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => None,
            Ok(_) => {
                if self.buf.last() == Some(&b'\n') {
                    self.buf.pop();
                    if self.buf.last() == Some(&b'\r') {
                        self.buf.pop();
                    }
                }
                Some(Ok(String::from_utf8_lossy(&self.buf).into_owned()))
            }
            Err(e) => Some(Err(e)),
        }
    }
}

/// Read the lines of `reader`, replacing invalid UTF-8 instead of failing.
pub fn lossy_lines<R: BufRead>(reader: R) -> LossyLines<R> {
    LossyLines {
        reader,
        buf: Vec::new(),
    }
}
