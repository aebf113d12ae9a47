//! Loads linked programs and runs them on the acpu processor.


use std::path::Path;
use std::{error, fmt, io};

use acpu::{Fault, Processor};
use aobj::{Object, SectionId};

#[derive(Debug)]
pub enum Error {
    Io(io::Error),
    Asm(aasm::Error),
    Link(ald::LinkError),
    Fault(Fault),
    /// The program carries no text to execute.
    NoText,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "{}", err),
            Error::Asm(err) => write!(f, "{}", err),
            Error::Link(err) => write!(f, "link failed: {}", err),
            Error::Fault(err) => write!(f, "fault: {}", err),
            Error::NoText => f.write_str("program has no text section"),
        }
    }
}

impl error::Error for Error {}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Error {
        Error::Io(err)
    }
}

impl From<aasm::Error> for Error {
    fn from(err: aasm::Error) -> Error {
        Error::Asm(err)
    }
}

impl From<ald::LinkError> for Error {
    fn from(err: ald::LinkError) -> Error {
        Error::Link(err)
    }
}

impl From<Fault> for Error {
    fn from(err: Fault) -> Error {
        Error::Fault(err)
    }
}

/// Loads the program text at address zero and runs it to the halt
/// sentinel. Returns the final accumulator value.
pub fn run_object(object: &Object) -> Result<u8, Error> {
    let text = object.sections.get(SectionId::Text);
    if text.is_empty() {
        return Err(Error::NoText);
    }

    let mut processor = Processor::new();
    processor.load(text, object.entry)?;
    Ok(processor.run()?)
}

/// Reads a linked program from disk and runs it.
pub fn run_file<P: AsRef<Path>>(path: P) -> Result<u8, Error> {
    run_object(&aobj::read_file(path)?)
}

/// Assembles and links a single source file in memory, then runs it.
pub fn run_source(input: &str) -> Result<u8, Error> {
    let object = aasm::assemble(input)?;
    let program = ald::link(vec![object])?;
    run_object(&program)
}
