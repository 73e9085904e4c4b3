//! Sentence-at-a-time input reading.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use wordnum_foundation::{Error, Result};

/// Reads input one sentence at a time: up to and including a period, or
/// to end of input if no period follows.
#[derive(Debug)]
pub struct SentenceReader<R> {
    inner: BufReader<R>,
    done: bool,
}

impl SentenceReader<File> {
    /// Opens `path` for sentence-at-a-time reading.
    ///
    /// # Errors
    /// Returns `NotARegularFile` if `path` does not name a regular file,
    /// or `Io` if it cannot be opened.
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(Error::not_a_regular_file(path));
        }
        Ok(Self::new(File::open(path)?))
    }
}

impl<R: Read> SentenceReader<R> {
    /// Wraps any reader.
    pub fn new(inner: R) -> Self {
        Self {
            inner: BufReader::new(inner),
            done: false,
        }
    }

    /// Returns the next sentence, or `None` at end of input.
    ///
    /// The terminating period stays attached to the returned chunk; a
    /// trailing chunk with no period is returned as-is.
    ///
    /// UTF-8 is safe to split on the period byte because `.` never
    /// appears inside a multi-byte sequence.
    ///
    /// # Errors
    /// Returns `InvalidUtf8` if the chunk is not valid UTF-8, or `Io` on
    /// read failure.
    pub fn next_sentence(&mut self) -> Result<Option<String>> {
        if self.done {
            return Ok(None);
        }
        let mut buf = Vec::new();
        let n = self.inner.read_until(b'.', &mut buf)?;
        if n == 0 {
            self.done = true;
            return Ok(None);
        }
        if buf.last() != Some(&b'.') {
            self.done = true;
        }
        let sentence = String::from_utf8(buf).map_err(|_| Error::invalid_utf8())?;
        Ok(Some(sentence))
    }
}
