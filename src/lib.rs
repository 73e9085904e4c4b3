//! Wordnum - Converts English number words embedded in prose into digits
//!
//! This crate re-exports all layers of the wordnum system for convenient
//! access. For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: wordnum_runtime    — File I/O, conversion driver, CLI
//! Layer 1: wordnum_language   — Lexer, parser, number stack, AST
//! Layer 0: wordnum_foundation — Error types, number-word tables
//! ```

pub use wordnum_foundation as foundation;
pub use wordnum_language as language;
pub use wordnum_runtime as runtime;
