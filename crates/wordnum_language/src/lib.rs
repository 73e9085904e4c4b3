//! Lexer, parser, number-expression stack, and AST for wordnum.
//!
//! This crate turns prose containing English cardinal-number words into
//! the same prose with the number phrases replaced by digits:
//!
//! ```text
//! "I have one hundred and twenty-three apples."
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     LEXER       │  → [Other, Space, One, Space, Hundred, Space, And, ...]
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     PARSER      │  → Document of sentences; number phrases gathered
//! │   (grammar)     │    into NumberExpression nodes
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  NUMBER STACK   │  → [1, 100, 20, 3] collapses to 123
//! └─────────────────┘
//!          │
//!          ▼
//! "I have 123 apples."
//! ```
//!
//! # Modules
//!
//! - [`span`] - Source location tracking
//! - [`token`] - Token and lexeme kinds
//! - [`lexer`] - Tokenization of input text
//! - [`stack`] - Place-value composition of magnitude values
//! - [`ast`] - Document / sentence / number-expression nodes
//! - [`parser`] - The recursive-descent grammar and entry points

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod ast;
pub mod lexer;
pub mod parser;
pub mod span;
pub mod stack;
pub mod token;


// Re-export main types for convenience
pub use ast::{Document, NumberExpression, NumberPart, Sentence, SentencePart, TextSink, ValueSink};
pub use lexer::Lexer;
pub use parser::{Parser, parse, parse_document};
pub use span::Span;
pub use stack::NumberStack;
pub use token::{LexemeKind, Token};
