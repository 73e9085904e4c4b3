//! End-to-end pipeline tests
//!
//! Drives a whole document from input file to output file through the
//! reader, parser, and writers.

use wordnum::language::parse;
use wordnum::runtime::{FileWriter, OutputWriter, SentenceReader, run};

fn temp_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(name)
}

#[test]
fn file_to_file_conversion() {
    let input_path = temp_path("wordnum_pipeline_in.txt");
    let output_path = temp_path("wordnum_pipeline_out.txt");
    std::fs::write(
        &input_path,
        "The office has three hundred and sixty-five desks.\n\
         Last year it had one thousand and ninety. Growth: zero",
    )
    .unwrap();

    {
        let mut reader = SentenceReader::from_path(&input_path).unwrap();
        let mut writers: Vec<Box<dyn OutputWriter>> =
            vec![Box::new(FileWriter::create(&output_path).unwrap())];
        run(&mut reader, &mut writers).unwrap();
    }

    let output = std::fs::read_to_string(&output_path).unwrap();
    let _ = std::fs::remove_file(&input_path);
    let _ = std::fs::remove_file(&output_path);
    assert_eq!(
        output,
        "The office has 365 desks.\nLast year it had 1090. Growth: zero"
    );
}

#[test]
fn library_facade_exposes_the_parser() {
    assert_eq!(
        parse("twenty-one apples.").unwrap(),
        "21 apples."
    );
}
