//! Relocatable object files and linked programs, which share one on-disk
//! format: a fixed header followed by the relocation, symbol and section
//! tables. Every 16-bit field is big-endian.
//!
//! ```text
//! offset  size  field
//!  0       8    magic 0d 0e 0a 0d 0b 0e 0e 0f
//!  8       2    entry point
//! 10       2    relocation table start
//! 12       2    relocation table size
//! 14       2    symbol table start
//! 16       2    symbol table size
//! 18       2    section table start
//! 20       2    section table size
//! 22       …    tables (start offsets are from the beginning of the file)
//! ```

use std::fs::File;
use std::io::prelude::*;
use std::io::{BufReader, BufWriter};
use std::path::Path;
use std::{error, fmt, io};

use byteorder::ByteOrder;
use util::Endian;

mod reloc;
mod section;
mod symbol;


pub use crate::reloc::{Relocation, RelocationTable, RELOCATION_LEN, UNRESOLVED_INDEX};
pub use crate::section::{SectionId, SectionTable, SECTION_COUNT};
pub use crate::symbol::{Symbol, SymbolError, SymbolSection, SymbolTable, MAX_SYMBOLS};

/// Identifies object and program files.
pub const MAGIC: [u8; 8] = [0xd, 0xe, 0xa, 0xd, 0xb, 0xe, 0xe, 0xf];

/// Size of the fixed header.
pub const HEADER_LEN: usize = 22;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Object {
    /// Address execution starts at. Zero in fresh objects; the linker
    /// resolves it.
    pub entry: u16,
    pub sections: SectionTable,
    pub symbols: SymbolTable,
    pub relocations: RelocationTable,
}

/// Reasons a byte blob is not a valid object file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScanError {
    /// Shorter than magic plus entry point.
    Truncated(usize),
    BadMagic,
    BadSectionTag(u8),
    BadSymbolName,
    /// A table or data slice reaches past the end of the file.
    OutOfRange(&'static str),
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ScanError::Truncated(len) => {
                write!(f, "truncated object file ({} bytes)", len)
            }
            ScanError::BadMagic => f.write_str("not an object file (bad magic)"),
            ScanError::BadSectionTag(tag) => {
                write!(f, "unknown section tag {:#04x}", tag)
            }
            ScanError::BadSymbolName => f.write_str("malformed symbol name"),
            ScanError::OutOfRange(what) => {
                write!(f, "{} reaches past the end of the file", what)
            }
        }
    }
}

impl error::Error for ScanError {}

impl Object {
    pub fn new() -> Object {
        Default::default()
    }

    /// Serializes the object per the layout above.
    pub fn bytes(&self) -> Vec<u8> {
        let reloc_start = HEADER_LEN;
        let reloc_size = self.relocations.byte_len();
        let sym_start = reloc_start + reloc_size;
        let sym_size = self.symbols.byte_len();
        let sec_start = sym_start + sym_size;
        let sec = self.sections.bytes(sec_start as u16);

        let mut b = Vec::with_capacity(sec_start + sec.len());
        b.extend_from_slice(&MAGIC);
        push_u16(&mut b, self.entry);
        push_u16(&mut b, reloc_start as u16);
        push_u16(&mut b, reloc_size as u16);
        push_u16(&mut b, sym_start as u16);
        push_u16(&mut b, sym_size as u16);
        push_u16(&mut b, sec_start as u16);
        push_u16(&mut b, sec.len() as u16);
        b.extend_from_slice(&self.relocations.bytes());
        b.extend_from_slice(&self.symbols.bytes());
        b.extend_from_slice(&sec);
        b
    }

    /// Mirror image of [`bytes`](#method.bytes).
    pub fn scan(data: &[u8]) -> Result<Object, ScanError> {
        if data.len() < MAGIC.len() + 2 {
            return Err(ScanError::Truncated(data.len()));
        }
        if data[..MAGIC.len()] != MAGIC {
            return Err(ScanError::BadMagic);
        }
        let header =
            slice(data, 0, HEADER_LEN, "header").map_err(|_| ScanError::Truncated(data.len()))?;

        let entry = Endian::read_u16(&header[8..10]);
        let reloc_start = Endian::read_u16(&header[10..12]) as usize;
        let reloc_size = Endian::read_u16(&header[12..14]) as usize;
        let sym_start = Endian::read_u16(&header[14..16]) as usize;
        let sym_size = Endian::read_u16(&header[16..18]) as usize;
        let sec_start = Endian::read_u16(&header[18..20]) as usize;
        let sec_size = Endian::read_u16(&header[20..22]) as usize;

        let relocations =
            RelocationTable::scan(slice(data, reloc_start, reloc_size, "relocation table")?)?;
        let symbols = SymbolTable::scan(slice(data, sym_start, sym_size, "symbol table")?)?;
        let sections = SectionTable::scan(data, sec_start, sec_size)?;

        Ok(Object {
            entry,
            sections,
            symbols,
            relocations,
        })
    }
}

pub(crate) fn slice<'a>(
    data: &'a [u8],
    start: usize,
    len: usize,
    what: &'static str,
) -> Result<&'a [u8], ScanError> {
    if start + len <= data.len() {
        Ok(&data[start..start + len])
    } else {
        Err(ScanError::OutOfRange(what))
    }
}

pub(crate) fn push_u16(b: &mut Vec<u8>, value: u16) {
    let mut buf = [0; 2];
    Endian::write_u16(&mut buf, value);
    b.extend_from_slice(&buf);
}

/// Reads and scans an object file from disk.
pub fn read_file<P: AsRef<Path>>(path: P) -> io::Result<Object> {
    let mut data = Vec::new();
    BufReader::new(File::open(path)?).read_to_end(&mut data)?;
    Object::scan(&data).map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))
}

/// Writes an object file to disk.
pub fn write_file<P: AsRef<Path>>(path: P, object: &Object) -> io::Result<()> {
    BufWriter::new(File::create(path)?).write_all(&object.bytes())
}
