//! Document / sentence / number-expression nodes.
//!
//! The parser builds a [`Document`] while matching the grammar; a
//! separate rendering pass produces the output. Every node supports two
//! renderings: `dump()` reproduces the source text (for debugging and
//! error context), `evaluate()` produces the converted text with number
//! phrases replaced by digits.

use wordnum_foundation::{Result, words};

use crate::stack::NumberStack;

/// Sink for grammar productions that emit literal text.
pub trait TextSink {
    /// Appends a literal text piece.
    fn push_text(&mut self, text: &str);
}

/// Sink for grammar productions that emit magnitude values.
pub trait ValueSink: TextSink {
    /// Appends one magnitude value.
    fn push_value(&mut self, value: i64);
}

/// One piece of a number expression: a magnitude value or the literal
/// connector text between values (spaces, dashes, "and").
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NumberPart {
    /// Literal connector text.
    Text(String),
    /// One magnitude value from the word table.
    Value(i64),
}

/// One recognized number phrase plus any trailing connector text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NumberExpression {
    parts: Vec<NumberPart>,
}

impl NumberExpression {
    /// Creates an empty number expression.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if nothing has been matched into this expression.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Returns the integer this phrase denotes, replaying all magnitude
    /// values through a [`NumberStack`].
    ///
    /// # Errors
    /// Returns `InvalidNumberExpression` if the values combine illegally.
    pub fn value(&self) -> Result<i64> {
        let mut stack = NumberStack::new();
        for part in &self.parts {
            if let NumberPart::Value(v) = part {
                stack.push(*v)?;
            }
        }
        Ok(stack.value())
    }

    /// Renders the phrase back as words.
    ///
    /// Values render as their canonical lowercase word, so original case
    /// is not preserved; connector text is.
    #[must_use]
    pub fn dump(&self) -> String {
        let mut out = String::new();
        for part in &self.parts {
            match part {
                NumberPart::Text(text) => out.push_str(text),
                NumberPart::Value(v) => match words::canonical_word(*v) {
                    Some(word) => out.push_str(word),
                    None => out.push_str(&v.to_string()),
                },
            }
        }
        out
    }

    /// Renders the phrase as its digit string, with the trailing literal
    /// part (if the phrase ended in one) appended after the digits.
    ///
    /// # Errors
    /// Returns `InvalidNumberExpression` if the values combine illegally.
    pub fn evaluate(&self) -> Result<String> {
        if self.parts.is_empty() {
            return Ok(String::new());
        }
        let mut out = self.value()?.to_string();
        if let Some(NumberPart::Text(text)) = self.parts.last() {
            out.push_str(text);
        }
        Ok(out)
    }
}

impl TextSink for NumberExpression {
    fn push_text(&mut self, text: &str) {
        self.parts.push(NumberPart::Text(text.to_string()));
    }
}

impl ValueSink for NumberExpression {
    fn push_value(&mut self, value: i64) {
        self.parts.push(NumberPart::Value(value));
    }
}

/// One piece of a sentence: literal text or a number phrase.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SentencePart {
    /// Literal pass-through text.
    Text(String),
    /// A recognized number phrase.
    Number(NumberExpression),
}

/// One sentence: text ending in a period, or trailing unterminated text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Sentence {
    parts: Vec<SentencePart>,
}

impl Sentence {
    /// Creates an empty sentence.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a recognized number phrase.
    pub fn push_number(&mut self, expression: NumberExpression) {
        self.parts.push(SentencePart::Number(expression));
    }

    /// Renders the sentence back as source text.
    #[must_use]
    pub fn dump(&self) -> String {
        let mut out = String::new();
        for part in &self.parts {
            match part {
                SentencePart::Text(text) => out.push_str(text),
                SentencePart::Number(expr) => out.push_str(&expr.dump()),
            }
        }
        out
    }

    /// Renders the sentence with number phrases converted to digits.
    ///
    /// # Errors
    /// Returns `InvalidNumberExpression` if a phrase combines illegally.
    pub fn evaluate(&self) -> Result<String> {
        let mut out = String::new();
        for part in &self.parts {
            match part {
                SentencePart::Text(text) => out.push_str(text),
                SentencePart::Number(expr) => out.push_str(&expr.evaluate()?),
            }
        }
        Ok(out)
    }
}

impl TextSink for Sentence {
    fn push_text(&mut self, text: &str) {
        self.parts.push(SentencePart::Text(text.to_string()));
    }
}

/// A whole document: the ordered list of its sentences.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Document {
    sentences: Vec<Sentence>,
}

impl Document {
    /// Creates an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a sentence.
    pub fn push(&mut self, sentence: Sentence) {
        self.sentences.push(sentence);
    }

    /// Renders the document back as source text.
    #[must_use]
    pub fn dump(&self) -> String {
        self.sentences.iter().map(Sentence::dump).collect()
    }

    /// Renders the document with number phrases converted to digits.
    ///
    /// # Errors
    /// Returns `InvalidNumberExpression` if a phrase combines illegally.
    pub fn evaluate(&self) -> Result<String> {
        let mut out = String::new();
        for sentence in &self.sentences {
            out.push_str(&sentence.evaluate()?);
        }
        Ok(out)
    }
}
