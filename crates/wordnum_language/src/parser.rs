//! Recursive-descent parser for prose containing number phrases.
//!
//! The grammar is ordered choice with a single token of lookahead and no
//! backtracking: once a production has consumed tokens, a later failure
//! surfaces as an invalid-token error instead of retrying an earlier
//! alternative. Every matched token also absorbs one following space
//! token into the node under construction, which is what forces number
//! phrases to be separated from each other by real connector text.

use wordnum_foundation::{Error, Result, words};

use crate::ast::{Document, NumberExpression, Sentence, TextSink, ValueSink};
use crate::lexer::Lexer;
use crate::span::Span;
use crate::token::{LexemeKind, Token};

/// Converts `text`, replacing each number phrase with its digits.
///
/// # Errors
/// Returns `InvalidToken` if the text cannot be parsed, or
/// `InvalidNumberExpression` if a phrase combines magnitudes illegally.
pub fn parse(text: &str) -> Result<String> {
    parse_document(text)?.evaluate()
}

/// Parses `text` into a [`Document`] without evaluating it.
///
/// # Errors
/// Returns `InvalidToken` if the text cannot be parsed.
pub fn parse_document(text: &str) -> Result<Document> {
    Parser::new(text).document()
}

/// Parser over a fully tokenized source string.
///
/// The parser itself is immutable; productions thread the cursor through
/// an explicit `pos` so the borrow of the source stays shared.
pub struct Parser<'src> {
    source: &'src str,
    tokens: Vec<Token>,
}

impl<'src> Parser<'src> {
    /// Tokenizes `source` and prepares a parser over it.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            tokens: Lexer::tokenize_all(source),
        }
    }

    /// Parses the whole input into a document.
    ///
    /// # Errors
    /// Returns `InvalidToken` naming the offending token and the text
    /// already consumed by the failed sentence.
    pub fn document(&self) -> Result<Document> {
        let mut document = Document::new();
        let mut pos = 0;
        while self.kind(pos) != LexemeKind::End {
            let mut sentence = Sentence::new();
            if self.sentence(&mut pos, &mut sentence) {
                document.push(sentence);
            } else {
                let token = self.token(pos);
                return Err(Error::invalid_token(
                    token.text(self.source),
                    token.kind.name(),
                    token.span.line,
                    token.span.column,
                    sentence.dump(),
                ));
            }
        }
        Ok(document)
    }

    fn kind(&self, pos: usize) -> LexemeKind {
        self.tokens.get(pos).map_or(LexemeKind::End, |t| t.kind)
    }

    fn token(&self, pos: usize) -> Token {
        self.tokens.get(pos).copied().unwrap_or_else(|| {
            let end = self.source.len();
            Token::new(LexemeKind::End, Span::new(end, end, 0, 0))
        })
    }

    fn text(&self, pos: usize) -> &'src str {
        self.token(pos).text(self.source)
    }

    /// Consumes the current token, then absorbs one following space
    /// token into `node`.
    fn advance(&self, pos: &mut usize, node: &mut impl TextSink) {
        *pos += 1;
        if self.kind(*pos) == LexemeKind::Space {
            node.push_text(self.text(*pos));
            *pos += 1;
        }
    }

    /// Matches one token of `kind` as literal text.
    fn eat_text(&self, pos: &mut usize, node: &mut impl TextSink, kind: LexemeKind) -> bool {
        if self.kind(*pos) == kind {
            node.push_text(self.text(*pos));
            self.advance(pos, node);
            return true;
        }
        false
    }

    /// Matches one token of `kind` as a magnitude value.
    fn eat_value(&self, pos: &mut usize, node: &mut impl ValueSink, kind: LexemeKind) -> bool {
        if self.kind(*pos) == kind {
            let word = self.text(*pos).to_ascii_lowercase();
            let Some(value) = words::number_value(&word) else {
                return false;
            };
            node.push_value(value);
            self.advance(pos, node);
            return true;
        }
        false
    }

    fn one_to_nine(&self, pos: &mut usize, node: &mut impl ValueSink) -> bool {
        self.eat_value(pos, node, LexemeKind::One) || self.eat_value(pos, node, LexemeKind::TwoToNine)
    }

    fn ten_to_nineteen(&self, pos: &mut usize, node: &mut impl ValueSink) -> bool {
        self.eat_value(pos, node, LexemeKind::TenToNineteen)
    }

    fn twenty_to_ninety_nine(&self, pos: &mut usize, node: &mut impl ValueSink) -> bool {
        if self.eat_value(pos, node, LexemeKind::Tens) {
            if self.eat_text(pos, node, LexemeKind::Dash) {
                return self.one_to_nine(pos, node);
            }
            let _ = self.one_to_nine(pos, node);
            return true;
        }
        false
    }

    fn ten_to_ninety_nine(&self, pos: &mut usize, node: &mut impl ValueSink) -> bool {
        self.ten_to_nineteen(pos, node) || self.twenty_to_ninety_nine(pos, node)
    }

    fn one_to_ninety_nine(&self, pos: &mut usize, node: &mut impl ValueSink) -> bool {
        self.one_to_nine(pos, node) || self.ten_to_ninety_nine(pos, node)
    }

    fn below_one_hundred(&self, pos: &mut usize, node: &mut impl ValueSink) -> bool {
        self.eat_text(pos, node, LexemeKind::And) && self.one_to_ninety_nine(pos, node)
    }

    fn hundreds(&self, pos: &mut usize, node: &mut impl ValueSink) -> bool {
        if self.one_to_nine(pos, node) {
            if self.eat_value(pos, node, LexemeKind::Hundred) {
                let _ = self.below_one_hundred(pos, node);
            }
            return true;
        }
        false
    }

    fn below_one_thousand(&self, pos: &mut usize, node: &mut impl ValueSink) -> bool {
        (self.eat_text(pos, node, LexemeKind::And) && self.one_to_ninety_nine(pos, node))
            || (self.one_to_nine(pos, node)
                && self.eat_value(pos, node, LexemeKind::Hundred)
                && self.eat_text(pos, node, LexemeKind::And)
                && self.one_to_ninety_nine(pos, node))
    }

    fn thousands(&self, pos: &mut usize, node: &mut impl ValueSink) -> bool {
        if self.hundreds(pos, node)
            || self.twenty_to_ninety_nine(pos, node)
            || self.ten_to_nineteen(pos, node)
        {
            if self.eat_value(pos, node, LexemeKind::Thousand) {
                let _ = self.below_one_thousand(pos, node);
            } else if self.eat_value(pos, node, LexemeKind::Hundred) {
                let _ = self.below_one_hundred(pos, node);
            }
            return true;
        }
        false
    }

    fn below_one_million(&self, pos: &mut usize, node: &mut impl ValueSink) -> bool {
        (self.eat_text(pos, node, LexemeKind::And) && self.one_to_ninety_nine(pos, node))
            || self.thousands(pos, node)
    }

    fn millions(&self, pos: &mut usize, node: &mut impl ValueSink) -> bool {
        if self.hundreds(pos, node)
            || self.twenty_to_ninety_nine(pos, node)
            || self.ten_to_nineteen(pos, node)
        {
            if self.eat_value(pos, node, LexemeKind::Million) {
                let _ = self.below_one_million(pos, node);
            } else if self.eat_value(pos, node, LexemeKind::Thousand) {
                let _ = self.below_one_thousand(pos, node);
            } else if self.eat_value(pos, node, LexemeKind::Hundred) {
                let _ = self.below_one_hundred(pos, node);
            }
            return true;
        }
        false
    }

    fn below_one_billion(&self, pos: &mut usize, node: &mut impl ValueSink) -> bool {
        (self.eat_text(pos, node, LexemeKind::And) && self.one_to_ninety_nine(pos, node))
            || self.millions(pos, node)
    }

    fn billions(&self, pos: &mut usize, node: &mut impl ValueSink) -> bool {
        if self.hundreds(pos, node)
            || self.twenty_to_ninety_nine(pos, node)
            || self.ten_to_nineteen(pos, node)
        {
            if self.eat_value(pos, node, LexemeKind::Billion) {
                let _ = self.below_one_billion(pos, node);
            } else if self.eat_value(pos, node, LexemeKind::Million) {
                let _ = self.below_one_million(pos, node);
            } else if self.eat_value(pos, node, LexemeKind::Thousand) {
                let _ = self.below_one_thousand(pos, node);
            } else if self.eat_value(pos, node, LexemeKind::Hundred) {
                let _ = self.below_one_hundred(pos, node);
            }
            return true;
        }
        false
    }

    fn number_expression(&self, pos: &mut usize, parent: &mut Sentence) -> bool {
        let mut node = NumberExpression::new();
        if self.eat_value(pos, &mut node, LexemeKind::Zero) || self.billions(pos, &mut node) {
            parent.push_number(node);
            return true;
        }
        false
    }

    fn text_without_number_expression(&self, pos: &mut usize, node: &mut impl TextSink) -> bool {
        self.eat_text(pos, node, LexemeKind::Space)
            || self.eat_text(pos, node, LexemeKind::Dash)
            || self.eat_text(pos, node, LexemeKind::And)
            || self.eat_text(pos, node, LexemeKind::Other)
    }

    fn rest_of_sentence_body(&self, pos: &mut usize, node: &mut Sentence) -> bool {
        self.kind(*pos) == LexemeKind::End
            || self.eat_text(pos, node, LexemeKind::Period)
            || (self.text_without_number_expression(pos, node) && self.sentence(pos, node))
    }

    fn sentence_body(&self, pos: &mut usize, node: &mut Sentence) -> bool {
        self.kind(*pos) == LexemeKind::End
            || self.eat_text(pos, node, LexemeKind::Period)
            || (self.number_expression(pos, node) && self.rest_of_sentence_body(pos, node))
    }

    fn sentence_prefix(&self, pos: &mut usize, node: &mut Sentence) {
        while self.text_without_number_expression(pos, node) {}
    }

    fn sentence(&self, pos: &mut usize, node: &mut Sentence) -> bool {
        self.sentence_prefix(pos, node);
        self.sentence_body(pos, node)
    }
}
