//! Integration tests for sentence reading
//!
//! Tests chunking of input streams and files into sentences.

use std::io::Cursor;
use std::path::Path;

use wordnum_foundation::ErrorKind;
use wordnum_runtime::SentenceReader;

fn chunks(input: &str) -> Vec<String> {
    let mut reader = SentenceReader::new(Cursor::new(input.to_string()));
    let mut out = Vec::new();
    while let Some(chunk) = reader.next_sentence().unwrap() {
        out.push(chunk);
    }
    out
}

#[test]
fn splits_on_periods_keeping_them() {
    assert_eq!(
        chunks("one. two. three."),
        vec!["one.", " two.", " three."]
    );
}

#[test]
fn chunk_concatenation_reproduces_the_input() {
    let input = "First sentence. Second!? Third...\nfourth with no end";
    assert_eq!(chunks(input).concat(), input);
}

#[test]
fn final_chunk_may_lack_a_period() {
    assert_eq!(chunks("done. not done"), vec!["done.", " not done"]);
}

#[test]
fn reader_from_file_round_trips() {
    let path = std::env::temp_dir().join("wordnum_reader_test.txt");
    std::fs::write(&path, "one apple. two pears").unwrap();
    let mut reader = SentenceReader::from_path(&path).unwrap();
    let mut out = Vec::new();
    while let Some(chunk) = reader.next_sentence().unwrap() {
        out.push(chunk);
    }
    let _ = std::fs::remove_file(&path);
    assert_eq!(out, vec!["one apple.", " two pears"]);
}

#[test]
fn directory_is_not_a_regular_file() {
    let err = SentenceReader::from_path(Path::new(".")).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::NotARegularFile(_)));
}
