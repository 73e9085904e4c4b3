//! Error types for the wordnum system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for wordnum operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Creates an invalid token error.
    #[must_use]
    pub fn invalid_token(
        token: impl Into<String>,
        kind: &'static str,
        line: u32,
        column: u32,
        context: impl Into<String>,
    ) -> Self {
        Self::new(ErrorKind::InvalidToken {
            token: token.into(),
            kind,
            line,
            column,
            context: context.into(),
        })
    }

    /// Creates an invalid number expression error.
    #[must_use]
    pub fn invalid_number_expression(expression: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidNumberExpression {
            expression: expression.into(),
        })
    }

    /// Creates an error for a path that is not a regular file.
    #[must_use]
    pub fn not_a_regular_file(path: &Path) -> Self {
        Self::new(ErrorKind::NotARegularFile(path.to_path_buf()))
    }

    /// Creates an error for an output file that could not be created.
    #[must_use]
    pub fn could_not_create_file(path: &Path) -> Self {
        Self::new(ErrorKind::CouldNotCreateFile(path.to_path_buf()))
    }

    /// Creates an error for input that is not valid UTF-8.
    #[must_use]
    pub fn invalid_utf8() -> Self {
        Self::new(ErrorKind::InvalidUtf8)
    }

    /// Creates an error for an unrecognized command-line argument.
    #[must_use]
    pub fn invalid_argument(argument: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidArgument(argument.into()))
    }

    /// Creates an error for a command-line option that is missing its value.
    #[must_use]
    pub fn missing_argument_value(option: impl Into<String>) -> Self {
        Self::new(ErrorKind::MissingArgumentValue(option.into()))
    }

    /// Creates an error for an invocation that named no input file.
    #[must_use]
    pub fn missing_input_file() -> Self {
        Self::new(ErrorKind::MissingInputFile)
    }
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Self::new(ErrorKind::Io(source))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// The next token cannot continue any grammar production.
    #[error("invalid token {token:?} ({kind}) at {line}:{column}, while parsing {context:?}")]
    InvalidToken {
        /// Raw text of the offending token.
        token: String,
        /// Lexeme kind name of the offending token.
        kind: &'static str,
        /// Line number (1-indexed) where the token starts.
        line: u32,
        /// Column number (1-indexed) where the token starts.
        column: u32,
        /// Text already consumed by the parse that failed.
        context: String,
    },

    /// Number-like tokens combined into an arithmetically invalid phrase.
    #[error("invalid number expression: {expression:?}")]
    InvalidNumberExpression {
        /// The offending combination of magnitude values.
        expression: String,
    },

    /// The input path does not name a regular file.
    #[error("file is not a regular file: '{}'", .0.display())]
    NotARegularFile(PathBuf),

    /// The output file could not be created.
    #[error("could not create file: '{}'", .0.display())]
    CouldNotCreateFile(PathBuf),

    /// Input text is not valid UTF-8.
    #[error("input is not valid UTF-8")]
    InvalidUtf8,

    /// An unrecognized command-line argument was given.
    #[error("invalid argument: '{0}'")]
    InvalidArgument(String),

    /// A command-line option was given without its value.
    #[error("option '{0}' requires a value")]
    MissingArgumentValue(String),

    /// No input file was named on the command line.
    #[error("no input file given")]
    MissingInputFile,

    /// An underlying I/O operation failed.
    #[error("i/o error: {0}")]
    Io(#[source] std::io::Error),
}
