//! The English number-word tables.
//!
//! A fixed, closed vocabulary: the cardinal words zero through nineteen,
//! the tens words, and the place-value scale words hundred, thousand,
//! million, and billion. Lookups are over lowercase text; callers
//! normalize case before calling in.

/// The connector word admitted between a scale word and the component
/// that follows it ("one hundred and one").
pub const AND: &str = "and";

/// Returns the numeric value of an English number word, or `None` if the
/// word is not part of the vocabulary.
///
/// Matching is exact over lowercase text.
#[must_use]
pub fn number_value(word: &str) -> Option<i64> {
    let value = match word {
        "zero" => 0,
        "one" => 1,
        "two" => 2,
        "three" => 3,
        "four" => 4,
        "five" => 5,
        "six" => 6,
        "seven" => 7,
        "eight" => 8,
        "nine" => 9,
        "ten" => 10,
        "eleven" => 11,
        "twelve" => 12,
        "thirteen" => 13,
        "fourteen" => 14,
        "fifteen" => 15,
        "sixteen" => 16,
        "seventeen" => 17,
        "eighteen" => 18,
        "nineteen" => 19,
        "twenty" => 20,
        "thirty" => 30,
        "forty" => 40,
        "fifty" => 50,
        "sixty" => 60,
        "seventy" => 70,
        "eighty" => 80,
        "ninety" => 90,
        "hundred" => 100,
        "thousand" => 1_000,
        "million" => 1_000_000,
        "billion" => 1_000_000_000,
        _ => return None,
    };
    Some(value)
}

/// Returns the canonical lowercase word for a table value, or `None` if
/// the value has no single-word form (e.g. 21).
#[must_use]
pub fn canonical_word(value: i64) -> Option<&'static str> {
    let word = match value {
        0 => "zero",
        1 => "one",
        2 => "two",
        3 => "three",
        4 => "four",
        5 => "five",
        6 => "six",
        7 => "seven",
        8 => "eight",
        9 => "nine",
        10 => "ten",
        11 => "eleven",
        12 => "twelve",
        13 => "thirteen",
        14 => "fourteen",
        15 => "fifteen",
        16 => "sixteen",
        17 => "seventeen",
        18 => "eighteen",
        19 => "nineteen",
        20 => "twenty",
        30 => "thirty",
        40 => "forty",
        50 => "fifty",
        60 => "sixty",
        70 => "seventy",
        80 => "eighty",
        90 => "ninety",
        100 => "hundred",
        1_000 => "thousand",
        1_000_000 => "million",
        1_000_000_000 => "billion",
        _ => return None,
    };
    Some(word)
}

/// Returns true if `word` (lowercase) is a number word.
#[must_use]
pub fn is_number_word(word: &str) -> bool {
    number_value(word).is_some()
}
