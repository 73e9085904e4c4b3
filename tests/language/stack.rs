//! Integration tests for the number stack
//!
//! Tests place-value composition of magnitude values.

use wordnum_language::NumberStack;

fn compose(values: &[i64]) -> i64 {
    let mut stack = NumberStack::new();
    for &v in values {
        stack.push(v).unwrap();
    }
    stack.value()
}

// =============================================================================
// Composition
// =============================================================================

#[test]
fn single_values() {
    assert_eq!(compose(&[0]), 0);
    assert_eq!(compose(&[7]), 7);
    assert_eq!(compose(&[90]), 90);
}

#[test]
fn smaller_after_larger_sums() {
    assert_eq!(compose(&[20, 1]), 21);
    assert_eq!(compose(&[100, 90, 9]), 199);
}

#[test]
fn larger_after_smaller_multiplies() {
    assert_eq!(compose(&[1, 100]), 100);
    assert_eq!(compose(&[3, 1_000]), 3_000);
    assert_eq!(compose(&[15, 100]), 1_500);
}

#[test]
fn scale_collapses_everything_below_it() {
    // nine hundred and ninety-nine thousand
    assert_eq!(compose(&[9, 100, 90, 9, 1_000]), 999_000);
    // three million six hundred and three thousand
    assert_eq!(compose(&[3, 1_000_000, 6, 100, 3, 1_000]), 3_603_000);
}

#[test]
fn nine_digit_maximum() {
    assert_eq!(
        compose(&[9, 100, 90, 9, 1_000_000, 9, 100, 90, 9, 1_000, 9, 100, 90, 9]),
        999_999_999
    );
}

#[test]
fn collapse_stops_at_larger_component() {
    // two hundred thousand: the 1000 collapses the 200 but nothing above
    assert_eq!(compose(&[2, 100, 1_000]), 200_000);
    assert_eq!(compose(&[1, 1_000_000, 2, 100, 1_000]), 1_200_000);
}

// =============================================================================
// Invalid Combinations
// =============================================================================

#[test]
fn equal_adjacent_values_are_rejected() {
    let mut stack = NumberStack::new();
    stack.push(100).unwrap();
    let err = stack.push(100).unwrap_err();
    assert_eq!(format!("{err}"), "invalid number expression: \"100 100\"");
}

#[test]
fn clear_resets_the_stack() {
    let mut stack = NumberStack::new();
    stack.push(5).unwrap();
    stack.clear();
    assert_eq!(stack.value(), 0);
    stack.push(7).unwrap();
    assert_eq!(stack.value(), 7);
}
