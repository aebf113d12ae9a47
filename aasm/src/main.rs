#[macro_use]
extern crate clap;

use clap::Arg;
use std::fs::File;
use std::io::prelude::*;
use std::io::BufReader;
use std::path::PathBuf;
use std::process;

#[derive(Debug)]
enum IoContext {
    ReadInput,
    WriteOutput,
}

#[derive(Debug)]
enum Error {
    Io(std::io::Error, IoContext, PathBuf),
    Asm(aasm::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Io(err, context, path) => write!(
                f,
                "{} file \"{}\" failed: {}",
                match context {
                    IoContext::ReadInput => "reading input",
                    IoContext::WriteOutput => "writing output",
                },
                path.display(),
                err
            ),
            Error::Asm(err) => {
                writeln!(f, "assembly failed:")?;
                write!(f, "{}", err)
            }
        }
    }
}

fn main() {
    let matches = app_from_crate!()
        .arg(
            Arg::with_name("INPUT")
                .help("Sets the source file to assemble")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("output")
                .short("o")
                .long("output")
                .takes_value(true)
                .value_name("OUTPUT")
                .help("Sets the object file to write"),
        )
        .get_matches();

    let input = matches.value_of("INPUT").unwrap();
    let output = matches.value_of("output");

    if let Err(err) = asm(input, output) {
        eprintln!("{}", err);
        process::exit(1);
    }
}

fn asm(input: &str, output: Option<&str>) -> Result<(), Error> {
    let input_path = PathBuf::from(input);

    let input_file = File::open(&input_path)
        .map_err(|err| Error::Io(err, IoContext::ReadInput, input_path.clone()))?;
    let mut source = String::new();
    BufReader::new(input_file)
        .read_to_string(&mut source)
        .map_err(|err| Error::Io(err, IoContext::ReadInput, input_path.clone()))?;

    let object = aasm::assemble(&source).map_err(|err| Error::Asm(with_path(err, input)))?;

    let output_path = output
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(format!("{}.o", input)));

    aobj::write_file(&output_path, &object)
        .map_err(|err| Error::Io(err, IoContext::WriteOutput, output_path.clone()))?;

    Ok(())
}

fn with_path(err: aasm::Error, path: &str) -> aasm::Error {
    match err {
        aasm::Error::Parse(errors) => {
            aasm::Error::Parse(errors.into_iter().map(|e| e.with_path(path)).collect())
        }
        other => other,
    }
}
