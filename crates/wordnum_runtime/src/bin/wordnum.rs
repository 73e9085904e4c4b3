//! wordnum CLI entry point.

use std::env;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use wordnum_foundation::{Error, Result};
use wordnum_runtime::{FileWriter, OutputWriter, SentenceReader, StreamWriter};

/// CLI configuration parsed from arguments.
#[derive(Debug, Default)]
struct CliConfig {
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    show_help: bool,
    show_version: bool,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            eprintln!();
            print_help();
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: &[String]) -> Result<CliConfig> {
    let mut config = CliConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-i" => {
                i += 1;
                let Some(value) = args.get(i) else {
                    return Err(Error::missing_argument_value("-i"));
                };
                config.input = Some(PathBuf::from(value));
            }
            "-o" => {
                i += 1;
                let Some(value) = args.get(i) else {
                    return Err(Error::missing_argument_value("-o"));
                };
                config.output = Some(PathBuf::from(value));
            }
            arg => return Err(Error::invalid_argument(arg)),
        }
        i += 1;
    }

    Ok(config)
}

fn run(args: &[String]) -> Result<()> {
    let config = parse_args(args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("wordnum {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let Some(input) = config.input else {
        return Err(Error::missing_input_file());
    };

    let mut reader = SentenceReader::from_path(&input)?;
    let mut writers: Vec<Box<dyn OutputWriter>> =
        vec![Box::new(StreamWriter::new(io::stdout()))];
    if let Some(output) = &config.output {
        writers.push(Box::new(FileWriter::create(output)?));
    }

    wordnum_runtime::run(&mut reader, &mut writers)
}

fn print_help() {
    println!(
        "\x1b[1mwordnum\x1b[0m - Convert English number words in prose to digits

\x1b[1mUSAGE:\x1b[0m
    wordnum -i <INPUT_FILE_PATH> [-o <OUTPUT_FILE_PATH>]

\x1b[1mOPTIONS:\x1b[0m
    -h, --help       Print help information
    -V, --version    Print version information
    -i <PATH>        Path to the input text file
    -o <PATH>        Path to an output text file; converted text is
                     always written to stdout as well

\x1b[1mEXAMPLES:\x1b[0m
    wordnum -i in.txt
    wordnum -i in.txt -o out.txt"
    );
}
