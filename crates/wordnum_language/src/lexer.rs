//! Lexer for number-word text.
//!
//! The lexer converts input text into a stream of classified tokens. It
//! never fails and never drops a character: concatenating the raw text
//! of every token in emission order reconstructs the input exactly.
//! Sequencing of number words is not validated here; that is the
//! parser's job.

use crate::span::Span;
use crate::token::{LexemeKind, Token};

/// Lexer over prose that may contain number words.
///
/// Pull-based: each call to [`next_token`](Lexer::next_token) scans one
/// maximal span and classifies it.
pub struct Lexer<'src> {
    /// Source text being tokenized.
    source: &'src str,
    /// Remaining source text.
    rest: &'src str,
    /// Current byte offset in source.
    position: usize,
    /// Current line number (1-based).
    line: u32,
    /// Current column number (1-based).
    column: u32,
}

impl<'src> Lexer<'src> {
    /// Creates a new lexer for the given source.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            rest: source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the next token from the source.
    ///
    /// Classification per maximal contiguous span: a whitespace run is
    /// `Space`, a single `-` is `Dash`, a single `.` is `Period`, an
    /// alphabetic run is looked up (case-insensitively) in the word
    /// table and falls back to `Other`, and any other run is `Other`.
    /// Past the end of input, `End` is returned forever.
    pub fn next_token(&mut self) -> Token {
        let start = self.position;
        let start_line = self.line;
        let start_column = self.column;

        let kind = match self.peek_char() {
            None => LexemeKind::End,
            Some(c) if c.is_ascii_whitespace() => {
                self.advance_while(|c| c.is_ascii_whitespace());
                LexemeKind::Space
            }
            Some('-') => {
                self.advance();
                LexemeKind::Dash
            }
            Some('.') => {
                self.advance();
                LexemeKind::Period
            }
            Some(c) if c.is_ascii_alphabetic() => {
                self.advance_while(|c| c.is_ascii_alphabetic());
                let word = self.source[start..self.position].to_ascii_lowercase();
                LexemeKind::of_word(&word).unwrap_or(LexemeKind::Other)
            }
            Some(_) => {
                self.advance_while(|c| {
                    !c.is_ascii_whitespace() && !c.is_ascii_alphabetic() && c != '-' && c != '.'
                });
                LexemeKind::Other
            }
        };

        Token::new(
            kind,
            Span::new(start, self.position, start_line, start_column),
        )
    }

    /// Tokenizes the whole source, including the terminating `End` token.
    #[must_use]
    pub fn tokenize_all(source: &str) -> Vec<Token> {
        let mut lexer = Lexer::new(source);
        let mut tokens = Vec::new();
        loop {
            let token = lexer.next_token();
            let is_end = token.kind == LexemeKind::End;
            tokens.push(token);
            if is_end {
                break;
            }
        }
        tokens
    }

    /// Peeks at the next character without consuming it.
    fn peek_char(&self) -> Option<char> {
        self.rest.chars().next()
    }

    /// Advances past the next character.
    fn advance(&mut self) {
        if let Some(c) = self.peek_char() {
            let len = c.len_utf8();
            self.rest = &self.rest[len..];
            self.position += len;
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
    }

    /// Advances while the predicate holds for the next character.
    fn advance_while(&mut self, pred: impl Fn(char) -> bool) {
        while let Some(c) = self.peek_char() {
            if pred(c) {
                self.advance();
            } else {
                break;
            }
        }
    }
}
