//! Token types for the number-word grammar.
//!
//! Tokens are the output of the lexer and input to the parser. A token
//! never owns its text; the raw text is recovered from the source via
//! the token's span, so pass-through output preserves the input exactly.

use wordnum_foundation::words;

use crate::span::Span;

/// A token from lexical analysis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token {
    /// The classification of this token.
    pub kind: LexemeKind,
    /// Source location of this token.
    pub span: Span,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub const fn new(kind: LexemeKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Returns the text this token covers in the given source.
    #[must_use]
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        self.span.text(source)
    }
}

/// Classification of a contiguous span of input text.
///
/// Word classification is case-insensitive; everything a number phrase
/// cannot contain is `Other`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LexemeKind {
    /// `zero`
    Zero,
    /// `one`
    One,
    /// `two` through `nine`
    TwoToNine,
    /// `ten` through `nineteen`
    TenToNineteen,
    /// `twenty`, `thirty`, ... `ninety`
    Tens,
    /// `hundred`
    Hundred,
    /// `thousand`
    Thousand,
    /// `million`
    Million,
    /// `billion`
    Billion,
    /// `and`
    And,
    /// A maximal run of whitespace
    Space,
    /// `-`
    Dash,
    /// `.`
    Period,
    /// Anything a number phrase cannot contain
    Other,
    /// End of input
    End,
}

impl LexemeKind {
    /// Classifies a word (already lowercased), or returns `None` if the
    /// word is neither a number word nor the connector `and`.
    #[must_use]
    pub fn of_word(word: &str) -> Option<Self> {
        if word == words::AND {
            return Some(Self::And);
        }
        let kind = match words::number_value(word)? {
            0 => Self::Zero,
            1 => Self::One,
            2..=9 => Self::TwoToNine,
            10..=19 => Self::TenToNineteen,
            20..=90 => Self::Tens,
            100 => Self::Hundred,
            1_000 => Self::Thousand,
            1_000_000 => Self::Million,
            _ => Self::Billion,
        };
        Some(kind)
    }

    /// Returns true if this kind denotes a magnitude value.
    #[must_use]
    pub const fn is_number_word(&self) -> bool {
        matches!(
            self,
            Self::Zero
                | Self::One
                | Self::TwoToNine
                | Self::TenToNineteen
                | Self::Tens
                | Self::Hundred
                | Self::Thousand
                | Self::Million
                | Self::Billion
        )
    }

    /// Returns a human-readable name for this lexeme kind.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Zero => "zero",
            Self::One => "one",
            Self::TwoToNine => "two_to_nine",
            Self::TenToNineteen => "ten_to_nineteen",
            Self::Tens => "tens",
            Self::Hundred => "hundred",
            Self::Thousand => "thousand",
            Self::Million => "million",
            Self::Billion => "billion",
            Self::And => "and",
            Self::Space => "space",
            Self::Dash => "dash",
            Self::Period => "period",
            Self::Other => "other",
            Self::End => "end",
        }
    }
}
