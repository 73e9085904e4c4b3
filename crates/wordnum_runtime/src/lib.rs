//! File I/O, conversion driver, and CLI for wordnum.
//!
//! This crate provides:
//! - [`SentenceReader`] - Sentence-at-a-time input reading
//! - [`OutputWriter`] implementations for streams and files
//! - [`run`] - The driver that converts each sentence and fans the
//!   result out to every writer

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod convert;
pub mod reader;
pub mod writer;

pub use convert::run;
pub use reader::SentenceReader;
pub use writer::{FileWriter, OutputWriter, StreamWriter};
