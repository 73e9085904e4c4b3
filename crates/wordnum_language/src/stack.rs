//! Place-value composition of magnitude values.
//!
//! The stack is the single arithmetic core of the system: the grammar
//! feeds it the magnitude values of one number phrase in reading order,
//! and the stack combines them into the integer the phrase denotes.

use wordnum_foundation::{Error, Result};

/// Partially-combined magnitude values for one in-progress number phrase.
///
/// Invariant: the entries summed always equal the value denoted by all
/// values pushed so far. Entries are non-increasing left to right except
/// during a single collapse step.
///
/// Created empty at the start of a phrase, consumed by
/// [`value`](NumberStack::value), and cleared for the next phrase; it
/// never outlives one number expression.
#[derive(Debug, Default)]
pub struct NumberStack {
    values: Vec<i64>,
}

impl NumberStack {
    /// Creates an empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Incorporates one magnitude value into the current phrase.
    ///
    /// A value larger than the top collapses the run of smaller
    /// components beneath it (those whose running sum stays below the
    /// new value) and multiplies: `3, 100` then `thousand` folds to
    /// `300_000`. A smaller value starts a new component: `100` then
    /// `twenty` leaves `[100, 20]`.
    ///
    /// # Errors
    /// Returns `InvalidNumberExpression` when the value equals the top
    /// of the stack (e.g. "hundred hundred"), reporting both values.
    pub fn push(&mut self, value: i64) -> Result<()> {
        let Some(&top) = self.values.last() else {
            self.values.push(value);
            return Ok(());
        };

        if value > top {
            let mut sum = 0;
            while let Some(&component) = self.values.last() {
                if sum + component < value {
                    sum += component;
                    self.values.pop();
                } else {
                    break;
                }
            }
            self.values.push(value * sum);
        } else if value < top {
            self.values.push(value);
        } else {
            return Err(Error::invalid_number_expression(format!("{value} {top}")));
        }
        Ok(())
    }

    /// Returns the integer denoted by all values pushed so far.
    #[must_use]
    pub fn value(&self) -> i64 {
        self.values.iter().sum()
    }

    /// Resets the stack for a new phrase.
    pub fn clear(&mut self) {
        self.values.clear();
    }
}
