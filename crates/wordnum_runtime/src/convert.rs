//! The conversion driver.

use std::io::Read;

use wordnum_foundation::Result;
use wordnum_language::parse;

use crate::reader::SentenceReader;
use crate::writer::OutputWriter;

/// Returns true if `text` is a full sentence, i.e. ends with a period.
#[must_use]
pub fn is_sentence(text: &str) -> bool {
    text.ends_with('.')
}

/// Converts each sentence from `reader` and writes the result to every
/// writer. A trailing chunk with no period is written out unconverted.
///
/// # Errors
/// Returns the first read, parse, or write error encountered.
pub fn run<R: Read>(
    reader: &mut SentenceReader<R>,
    writers: &mut [Box<dyn OutputWriter>],
) -> Result<()> {
    while let Some(chunk) = reader.next_sentence()? {
        let text = if is_sentence(&chunk) {
            parse(&chunk)?
        } else {
            chunk
        };
        for writer in &mut *writers {
            writer.write(&text)?;
        }
    }
    for writer in &mut *writers {
        writer.flush()?;
    }
    Ok(())
}
