//! Integration tests for the parser
//!
//! Tests conversion of prose sentences to prose with digits.

use wordnum_foundation::ErrorKind;
use wordnum_language::{parse, parse_document};

fn converts(input: &str, expected: &str) {
    assert_eq!(parse(input).unwrap(), expected, "input: {input:?}");
}

// =============================================================================
// Units, Teens, and Tens
// =============================================================================

#[test]
fn converts_units() {
    converts("zero.", "0.");
    converts("one.", "1.");
    converts("two.", "2.");
    converts("five.", "5.");
    converts("nine.", "9.");
}

#[test]
fn converts_teens() {
    converts("ten.", "10.");
    converts("eleven.", "11.");
    converts("twelve.", "12.");
    converts("fifteen.", "15.");
    converts("nineteen.", "19.");
}

#[test]
fn converts_tens() {
    converts("twenty.", "20.");
    converts("thirty.", "30.");
    converts("forty.", "40.");
    converts("fifty.", "50.");
    converts("ninety.", "90.");
}

#[test]
fn converts_compound_tens() {
    converts("twenty-one.", "21.");
    converts("thirty-seven.", "37.");
    converts("forty two.", "42.");
    converts("ninety-nine.", "99.");
}

// =============================================================================
// Hundreds and Scales
// =============================================================================

#[test]
fn converts_hundreds() {
    converts("one hundred.", "100.");
    converts("two hundred.", "200.");
    converts("nine hundred.", "900.");
    converts("one hundred and one.", "101.");
    converts("two hundred and twelve.", "212.");
    converts("seven hundred and eighty-nine.", "789.");
}

#[test]
fn converts_thousands() {
    converts("one thousand.", "1000.");
    converts("one thousand and one.", "1001.");
    converts("twelve thousand.", "12000.");
    converts("fifteen hundred.", "1500.");
    converts("twenty thousand.", "20000.");
    converts("two hundred thousand.", "200000.");
    converts("one thousand two hundred and thirty-four.", "1234.");
}

#[test]
fn converts_millions_and_billions() {
    converts("one million.", "1000000.");
    converts("three million six hundred and three thousand.", "3603000.");
    converts("one billion.", "1000000000.");
    converts(
        "nine hundred and ninety-nine million nine hundred and ninety-nine \
         thousand nine hundred and ninety-nine.",
        "999999999.",
    );
}

// =============================================================================
// Prose Context
// =============================================================================

#[test]
fn numbers_embed_in_sentences() {
    converts("I have one hundred apples.", "I have 100 apples.");
    converts(
        "One hundred apples, two hundred pears.",
        "100 apples, 200 pears.",
    );
    converts(
        "We sold one thousand and one units in twenty-three days.",
        "We sold 1001 units in 23 days.",
    );
}

#[test]
fn number_free_text_passes_through() {
    converts("", "");
    converts("no numbers here.", "no numbers here.");
    converts("punctuation! (and) more...", "punctuation! (and) more...");
    converts("handled sandy android.", "handled sandy android.");
}

#[test]
fn and_between_phrases_is_plain_text() {
    converts("two and one.", "2 and 1.");
    converts("one hundred and two and three.", "102 and 3.");
    converts("one hundred, and two.", "100, and 2.");
}

#[test]
fn case_insensitive_matching_emits_digits() {
    converts("TWENTY-ONE.", "21.");
    converts("One Hundred And Five.", "105.");
}

#[test]
fn multiple_sentences() {
    converts("one. two. three.", "1. 2. 3.");
    converts("I had one apple. Now I have zero.", "I had 1 apple. Now I have 0.");
    converts("one..", "1..");
    converts(". one.", ". 1.");
    converts("one and two.", "1 and 2.");
}

#[test]
fn unterminated_final_sentence_still_converts() {
    converts("one hundred", "100");
    converts("I count twenty-two", "I count 22");
}

#[test]
fn digits_in_the_input_are_plain_text() {
    converts("I have 100 apples.", "I have 100 apples.");
    converts("3 plus four.", "3 plus 4.");
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn rejects_adjacent_number_phrases() {
    for input in [
        "one two.",
        "one hundred twenty three.",
        "one thousand million.",
        "one hundred two hundred.",
        "ten eleven.",
        "zero zero.",
    ] {
        let err = parse(input).unwrap_err();
        assert!(
            matches!(err.kind, ErrorKind::InvalidToken { .. }),
            "input: {input:?}, got: {err}"
        );
    }
}

#[test]
fn rejects_bare_scale_words() {
    for input in ["hundred.", "thousand.", "million.", "billion."] {
        let err = parse(input).unwrap_err();
        assert!(
            matches!(err.kind, ErrorKind::InvalidToken { .. }),
            "input: {input:?}, got: {err}"
        );
    }
}

#[test]
fn rejects_dangling_dash_compound() {
    let err = parse("twenty-foo.").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidToken { .. }));
}

#[test]
fn reports_repeated_magnitude_as_invalid_expression() {
    let err = parse("one hundred hundred.").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidNumberExpression { .. }));
}

#[test]
fn invalid_token_message_names_the_token() {
    let err = parse("one two.").unwrap_err();
    let message = format!("{err}");
    assert!(message.contains("\"two\""), "message: {message}");
    assert!(message.contains("1:5"), "message: {message}");
}

// =============================================================================
// Document API
// =============================================================================

#[test]
fn document_dump_reproduces_number_free_input() {
    let source = "plain text. more text.";
    let document = parse_document(source).unwrap();
    assert_eq!(document.dump(), source);
}

#[test]
fn document_evaluates_sentences_in_order() {
    let document = parse_document("one. twenty-two. three hundred.").unwrap();
    assert_eq!(document.evaluate().unwrap(), "1. 22. 300.");
}
