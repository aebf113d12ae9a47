#[macro_use]
extern crate clap;

use clap::Arg;
use std::path::PathBuf;
use std::process;

#[derive(Debug)]
enum Error {
    Io(std::io::Error, PathBuf),
    Link(ald::LinkError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Io(err, path) => {
                write!(f, "object file \"{}\": {}", path.display(), err)
            }
            Error::Link(err) => write!(f, "link failed: {}", err),
        }
    }
}

fn main() {
    let matches = app_from_crate!()
        .arg(
            Arg::with_name("OBJECTS")
                .help("Sets the object files to link")
                .required(true)
                .multiple(true)
                .index(1),
        )
        .arg(
            Arg::with_name("output")
                .short("o")
                .long("output")
                .takes_value(true)
                .value_name("OUTPUT")
                .default_value("out.vm")
                .help("Sets the program file to write"),
        )
        .get_matches();

    let inputs: Vec<&str> = matches.values_of("OBJECTS").unwrap().collect();
    let output = matches.value_of("output").unwrap();

    if let Err(err) = ld(&inputs, output) {
        eprintln!("{}", err);
        process::exit(1);
    }
}

fn ld(inputs: &[&str], output: &str) -> Result<(), Error> {
    let mut objects = Vec::with_capacity(inputs.len());
    for input in inputs {
        let object =
            aobj::read_file(input).map_err(|err| Error::Io(err, PathBuf::from(input)))?;
        objects.push(object);
    }

    let program = ald::link(objects).map_err(Error::Link)?;

    let output_path = PathBuf::from(output);
    aobj::write_file(&output_path, &program).map_err(|err| Error::Io(err, output_path))?;

    Ok(())
}
