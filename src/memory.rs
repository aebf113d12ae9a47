use byteorder::ByteOrder;
use util::Endian;

use crate::constants;

/// Flat, bounds-checked byte storage backing the processor.
pub struct Memory {
    data: Vec<u8>,
}

impl Memory {
    /// Constructs a zeroed `Memory` of the specified `length`.
    pub fn new(length: u32) -> Memory {
        Memory {
            data: vec![0; length as usize],
        }
    }

    /// Total length of the storage in bytes.
    pub fn length(&self) -> u32 {
        self.data.len() as u32
    }

    /// Checks whether the range `[address..address+length]` is addressable.
    pub fn check_range(&self, address: u32, length: u32) -> bool {
        let len = self.data.len() as u32;
        address <= len && address + length <= len
    }

    /// Reads the byte at `address`.
    ///
    /// # Examples
    /// ```
    /// use acpu::Memory;
    ///
    /// let memory = Memory::new(16);
    /// assert_eq!(memory.fetch(3), Ok(0));
    /// assert_eq!(memory.fetch(16), Err(()));
    /// ```
    pub fn fetch(&self, address: u16) -> Result<u8, ()> {
        if self.check_range(u32::from(address), 1) {
            Ok(self.data[address as usize])
        } else {
            Err(())
        }
    }

    /// Writes `value` to `address`.
    pub fn write(&mut self, address: u16, value: u8) -> Result<(), ()> {
        if self.check_range(u32::from(address), 1) {
            self.data[address as usize] = value;
            Ok(())
        } else {
            Err(())
        }
    }

    /// Copies `data` into memory starting at `address`.
    pub fn write_block(&mut self, address: u16, data: &[u8]) -> Result<(), ()> {
        if self.check_range(u32::from(address), data.len() as u32) {
            let start = address as usize;
            self.data[start..start + data.len()].copy_from_slice(data);
            Ok(())
        } else {
            Err(())
        }
    }

    /// Reads two bytes starting at `address` as a big-endian half word.
    pub fn read_half(&self, address: u16) -> Result<u16, ()> {
        if self.check_range(u32::from(address), 2) {
            let start = address as usize;
            Ok(Endian::read_u16(&self.data[start..start + 2]))
        } else {
            Err(())
        }
    }

    /// Writes `value` as a big-endian half word starting at `address`.
    pub fn write_half(&mut self, address: u16, value: u16) -> Result<(), ()> {
        if self.check_range(u32::from(address), 2) {
            let start = address as usize;
            Endian::write_u16(&mut self.data[start..start + 2], value);
            Ok(())
        } else {
            Err(())
        }
    }

    /// Zeroes the whole block.
    pub fn clear(&mut self) {
        for byte in &mut self.data {
            *byte = 0;
        }
    }

    /// The backing block as a slice.
    pub fn data(&self) -> &[u8] {
        &self.data[..]
    }
}

impl Default for Memory {
    fn default() -> Memory {
        Memory::new(constants::MEMORY_SIZE)
    }
}

impl<'a> From<&'a [u8]> for Memory {
    fn from(s: &'a [u8]) -> Memory {
        Memory { data: Vec::from(s) }
    }
}
