use byteorder::ByteOrder;
use util::Endian;

use crate::{push_u16, slice, ScanError};

/// Section identifiers. An object carries at most one section per id.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SectionId {
    Text = 0,
    Data = 1,
}

pub const SECTION_COUNT: usize = 2;

/// Serialized size of one section header: tag, data offset, data length.
const HEADER_LEN: usize = 5;

impl SectionId {
    pub fn tag(self) -> u8 {
        self as u8
    }

    pub fn from_tag(tag: u8) -> Option<SectionId> {
        match tag {
            0 => Some(SectionId::Text),
            1 => Some(SectionId::Data),
            _ => None,
        }
    }

    pub fn all() -> [SectionId; SECTION_COUNT] {
        [SectionId::Text, SectionId::Data]
    }
}

/// Fixed-slot table of section contents, indexed by [`SectionId`].
///
/// Only non-empty slots are serialized; an absent slot and an empty one are
/// the same thing.
///
/// [`SectionId`]: ./enum.SectionId.html
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SectionTable {
    sections: [Vec<u8>; SECTION_COUNT],
}

impl SectionTable {
    pub fn new() -> SectionTable {
        Default::default()
    }

    pub fn get(&self, id: SectionId) -> &[u8] {
        &self.sections[id as usize]
    }

    pub fn get_mut(&mut self, id: SectionId) -> &mut Vec<u8> {
        &mut self.sections[id as usize]
    }

    pub fn set(&mut self, id: SectionId, data: Vec<u8>) {
        self.sections[id as usize] = data;
    }

    /// Appends `data` to a section, returning the offset it landed at.
    pub fn append(&mut self, id: SectionId, data: &[u8]) -> u16 {
        let offset = self.sections[id as usize].len() as u16;
        self.sections[id as usize].extend_from_slice(data);
        offset
    }

    /// Serialized size: a count byte plus a header and the data of every
    /// non-empty slot.
    pub fn byte_len(&self) -> usize {
        1 + self
            .sections
            .iter()
            .filter(|s| !s.is_empty())
            .map(|s| HEADER_LEN + s.len())
            .sum::<usize>()
    }

    /// Serializes the table. `base` is the file offset the table itself
    /// starts at; the data offsets written into the headers are absolute.
    pub fn bytes(&self, base: u16) -> Vec<u8> {
        let occupied: Vec<SectionId> = SectionId::all()
            .iter()
            .cloned()
            .filter(|id| !self.get(*id).is_empty())
            .collect();

        let mut b = Vec::with_capacity(self.byte_len());
        b.push(occupied.len() as u8);

        let mut data_offset = base as usize + 1 + occupied.len() * HEADER_LEN;
        for id in &occupied {
            let data = self.get(*id);
            b.push(id.tag());
            push_u16(&mut b, data_offset as u16);
            push_u16(&mut b, data.len() as u16);
            data_offset += data.len();
        }
        for id in &occupied {
            b.extend_from_slice(self.get(*id));
        }
        b
    }

    /// Decodes the table out of a whole object file, given the table's
    /// start offset and size from the header.
    pub fn scan(file: &[u8], start: usize, size: usize) -> Result<SectionTable, ScanError> {
        let table = slice(file, start, size, "section table")?;
        if table.is_empty() {
            return Err(ScanError::OutOfRange("section table"));
        }

        let count = table[0] as usize;
        let mut sections = SectionTable::new();
        let mut pos = 1;
        for _ in 0..count {
            let header = slice(table, pos, HEADER_LEN, "section header")?;
            let tag = header[0];
            let data_offset = Endian::read_u16(&header[1..3]) as usize;
            let data_len = Endian::read_u16(&header[3..5]) as usize;

            let id = SectionId::from_tag(tag).ok_or(ScanError::BadSectionTag(tag))?;
            let data = slice(file, data_offset, data_len, "section data")?;
            sections.set(id, data.to_vec());
            pos += HEADER_LEN;
        }
        Ok(sections)
    }
}
