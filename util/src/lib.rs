use std::{error::Error, fmt};

/// Byte order of every 16-bit quantity in the object-file format.
pub type Endian = byteorder::BigEndian;

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct ParseEnumError {
    pub value: String,
    pub enum_name: &'static str,
}

impl fmt::Display for ParseEnumError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "failed to parse \"{}\" as {}",
            &self.value, &self.enum_name
        )
    }
}

impl Error for ParseEnumError {}
