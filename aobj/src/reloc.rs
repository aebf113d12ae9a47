use byteorder::ByteOrder;
use util::Endian;

use crate::{slice, ScanError};

/// Symbol index meaning "no symbol". Fatal if it survives to relocation
/// application.
pub const UNRESOLVED_INDEX: u8 = 0xff;

/// Serialized size of one relocation entry.
pub const RELOCATION_LEN: usize = 3;

/// Directs the linker to patch the two text bytes at `offset` with the
/// final address of the indexed symbol.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Relocation {
    pub symbol: u8,
    pub offset: u16,
}

impl Relocation {
    pub fn bytes(&self) -> [u8; RELOCATION_LEN] {
        let mut b = [self.symbol, 0, 0];
        Endian::write_u16(&mut b[1..3], self.offset);
        b
    }

    pub fn scan(data: &[u8]) -> Result<Relocation, ScanError> {
        let data = slice(data, 0, RELOCATION_LEN, "relocation")?;
        Ok(Relocation {
            symbol: data[0],
            offset: Endian::read_u16(&data[1..3]),
        })
    }
}

/// Relocations in emission order. Many entries may name the same symbol.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RelocationTable {
    relocations: Vec<Relocation>,
}

impl RelocationTable {
    pub fn new() -> RelocationTable {
        Default::default()
    }

    pub fn len(&self) -> usize {
        self.relocations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.relocations.is_empty()
    }

    pub fn add(&mut self, relocation: Relocation) {
        self.relocations.push(relocation);
    }

    pub fn iter(&self) -> std::slice::Iter<Relocation> {
        self.relocations.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<Relocation> {
        self.relocations.iter_mut()
    }

    pub fn byte_len(&self) -> usize {
        self.relocations.len() * RELOCATION_LEN
    }

    pub fn bytes(&self) -> Vec<u8> {
        let mut b = Vec::with_capacity(self.byte_len());
        for relocation in &self.relocations {
            b.extend_from_slice(&relocation.bytes());
        }
        b
    }

    pub fn scan(data: &[u8]) -> Result<RelocationTable, ScanError> {
        if data.len() % RELOCATION_LEN != 0 {
            return Err(ScanError::OutOfRange("relocation table"));
        }
        let mut table = RelocationTable::new();
        for chunk in data.chunks(RELOCATION_LEN) {
            table.add(Relocation::scan(chunk)?);
        }
        Ok(table)
    }
}
