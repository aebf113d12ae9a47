#[macro_use]
extern crate clap;

use clap::{Arg, ArgGroup};
use std::process;

fn main() {
    let matches = app_from_crate!()
        .arg(
            Arg::with_name("PROGRAM")
                .help("Sets the program file to run")
                .index(1),
        )
        .arg(
            Arg::with_name("assembly")
                .short("a")
                .long("assembly")
                .takes_value(true)
                .value_name("ASSEMBLY")
                .help("Assembles, links and runs a source file"),
        )
        .group(
            ArgGroup::with_name("input")
                .args(&["PROGRAM", "assembly"])
                .required(true),
        )
        .get_matches();

    let result = match matches.value_of("PROGRAM") {
        Some(program) => avm::run_file(program),
        None => {
            let path = matches.value_of("assembly").unwrap();
            match std::fs::read_to_string(path) {
                Ok(source) => avm::run_source(&source).map_err(|err| with_path(err, path)),
                Err(err) => Err(avm::Error::Io(err)),
            }
        }
    };

    match result {
        Ok(accumulator) => println!("{}", accumulator),
        Err(err) => {
            eprintln!("{}", err);
            process::exit(1);
        }
    }
}

fn with_path(err: avm::Error, path: &str) -> avm::Error {
    match err {
        avm::Error::Asm(aasm::Error::Parse(errors)) => avm::Error::Asm(aasm::Error::Parse(
            errors.into_iter().map(|e| e.with_path(path)).collect(),
        )),
        other => other,
    }
}
