//! Output sinks for converted text.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use wordnum_foundation::{Error, Result};

/// Destination for converted text.
pub trait OutputWriter {
    /// Writes `text` to this destination.
    ///
    /// # Errors
    /// Returns `Io` if the underlying write fails.
    fn write(&mut self, text: &str) -> Result<()>;

    /// Flushes any buffered output.
    ///
    /// # Errors
    /// Returns `Io` if the underlying flush fails.
    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Writes to any [`Write`] stream, typically stdout.
pub struct StreamWriter<W> {
    inner: W,
}

impl<W: Write> StreamWriter<W> {
    /// Wraps a stream.
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Returns the wrapped stream, consuming the writer.
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> OutputWriter for StreamWriter<W> {
    fn write(&mut self, text: &str) -> Result<()> {
        self.inner.write_all(text.as_bytes())?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.inner.flush()?;
        Ok(())
    }
}

/// Writes to a freshly created file.
#[derive(Debug)]
pub struct FileWriter {
    inner: BufWriter<File>,
}

impl FileWriter {
    /// Creates (or truncates) the file at `path`.
    ///
    /// # Errors
    /// Returns `CouldNotCreateFile` if the file cannot be created.
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path).map_err(|_| Error::could_not_create_file(path))?;
        Ok(Self {
            inner: BufWriter::new(file),
        })
    }
}

impl OutputWriter for FileWriter {
    fn write(&mut self, text: &str) -> Result<()> {
        self.inner.write_all(text.as_bytes())?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.inner.flush()?;
        Ok(())
    }
}
