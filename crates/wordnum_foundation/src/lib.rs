//! Core types for wordnum.
//!
//! This crate provides:
//! - [`Error`] / [`ErrorKind`] - Error types shared by all layers
//! - [`Result`] - Crate-wide result alias
//! - [`words`] - The English number-word tables

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod words;

pub use error::{Error, ErrorKind, Result};
