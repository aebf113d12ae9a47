use std::error::Error as StdError;
use std::fmt;

use num::FromPrimitive;

use crate::constants;
use crate::enums::{Opcode, Register};
use crate::memory::Memory;

/// Fatal processor faults. Execution cannot continue past any of these.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Fault {
    /// A fetch or write landed outside the memory block.
    BadMemoryAccess { address: u16 },
    /// DIV executed with a zero divisor.
    DivisionByZero { address: u16 },
    /// The low six bits of a fetched instruction byte name no opcode.
    InvalidOpcode { value: u8, address: u16 },
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Fault::BadMemoryAccess { address } => {
                write!(f, "memory access out of bounds at {:#06x}", address)
            }
            Fault::DivisionByZero { address } => {
                write!(f, "division by zero at {:#06x}", address)
            }
            Fault::InvalidOpcode { value, address } => {
                write!(f, "invalid opcode {:#04x} at {:#06x}", value, address)
            }
        }
    }
}

impl StdError for Fault {}

/// The processor core: register file plus owned memory.
///
/// An instruction takes one `step`, which runs the three microcode phases
/// in order: fetch latches the instruction byte and any trailing operand
/// bytes, decode stages the operand into the data register, execute applies
/// the effect.
pub struct Processor {
    pub(crate) pc: u16,
    pub(crate) sp: u16,
    pub(crate) ar: u16,
    pub(crate) dr: u8,
    pub(crate) ir: u8,
    pub(crate) tr: u8,
    pub(crate) ac: u8,
    pub(crate) b: u8,
    pub(crate) c: u8,
    pub(crate) zero: bool,
    pub(crate) memory: Memory,
}

impl Processor {
    pub fn new() -> Processor {
        Processor::with_memory(Memory::default())
    }

    pub fn with_memory(memory: Memory) -> Processor {
        Processor {
            pc: 0,
            sp: 0,
            ar: 0,
            dr: 0,
            ir: 0,
            tr: 0,
            ac: 0,
            b: 0,
            c: 0,
            zero: false,
            memory,
        }
    }

    /// Loads program text at address zero and prepares the registers: `pc`
    /// at the entry point, the stack on top of the text, and the halt
    /// sentinel pushed as the outermost return address (low byte first) so
    /// that a `RET` from the entry subroutine terminates the run loop.
    pub fn load(&mut self, text: &[u8], entry: u16) -> Result<(), Fault> {
        self.memory.clear();
        self.memory.write_block(0, text).map_err(|_| {
            Fault::BadMemoryAccess {
                address: self.memory.length() as u16,
            }
        })?;

        self.pc = entry;
        self.sp = text.len() as u16;
        self.ar = 0;
        self.dr = 0;
        self.ir = 0;
        self.tr = 0;
        self.ac = 0;
        self.b = 0;
        self.c = 0;
        self.zero = true;

        self.mem_write(self.sp, 0xff)?;
        self.mem_write(self.sp.wrapping_add(1), 0xff)?;
        self.sp = self.sp.wrapping_add(2);

        Ok(())
    }

    /// Runs instruction cycles until the program counter reaches the halt
    /// sentinel. Returns the final accumulator value.
    pub fn run(&mut self) -> Result<u8, Fault> {
        while self.pc != constants::HALT_ADDRESS {
            self.step()?;
        }
        Ok(self.ac)
    }

    /// Executes a single instruction cycle.
    pub fn step(&mut self) -> Result<(), Fault> {
        let at = self.pc;
        let opcode = self.fetch(at)?;
        self.decode(opcode)?;
        self.exec(opcode, at)
    }

    // Cycle one reads the instruction byte; multi-byte instructions spend
    // further cycles latching their trailing operand bytes.
    fn fetch(&mut self, at: u16) -> Result<Opcode, Fault> {
        self.ar = self.pc;
        self.pc = self.pc.wrapping_add(1);
        self.dr = self.mem_fetch(self.ar)?;
        self.ir = self.dr;

        let value = self.ir & constants::OPCODE_MASK;
        let opcode = Opcode::from_u8(value)
            .ok_or(Fault::InvalidOpcode { value, address: at })?;

        match opcode {
            Opcode::CALL => {
                // Target address: high byte into tr, low byte left in dr.
                self.dr = self.mem_fetch(self.pc)?;
                self.pc = self.pc.wrapping_add(1);
                self.tr = self.dr;
                self.dr = self.mem_fetch(self.pc)?;
                self.pc = self.pc.wrapping_add(1);
            }
            Opcode::JMP | Opcode::JPZ | Opcode::JNZ => {
                // Target address composed directly into ar.
                self.dr = self.mem_fetch(self.pc)?;
                self.ar = u16::from(self.dr) << 8;
                self.pc = self.pc.wrapping_add(1);
                self.dr = self.mem_fetch(self.pc)?;
                self.ar |= u16::from(self.dr);
                self.pc = self.pc.wrapping_add(1);
            }
            Opcode::MVI => {
                self.dr = self.mem_fetch(self.pc)?;
                self.pc = self.pc.wrapping_add(1);
            }
            _ => {}
        }

        Ok(opcode)
    }

    // Decode stages the operand into the data register and, for the stack
    // instructions, moves the stack pointer.
    fn decode(&mut self, opcode: Opcode) -> Result<(), Fault> {
        match opcode {
            Opcode::RET => {
                self.sp = self.sp.wrapping_sub(1);
                self.ar = self.sp;
                self.dr = self.mem_fetch(self.ar)?;
                self.sp = self.sp.wrapping_sub(1);
                self.ar = self.sp;
            }
            Opcode::POP => {
                self.sp = self.sp.wrapping_sub(1);
                self.ar = self.sp;
            }
            Opcode::PUSH => {
                self.dr = self.ac;
                self.ar = self.sp;
                self.sp = self.sp.wrapping_add(1);
            }
            Opcode::MVR => {
                self.dr = self.ac;
            }
            Opcode::MOV
            | Opcode::ADD
            | Opcode::DIV
            | Opcode::MUL
            | Opcode::SHL
            | Opcode::SHR
            | Opcode::SUB
            | Opcode::AND
            | Opcode::OR => {
                self.dr = match Register::from_instruction(self.ir) {
                    Register::B => self.b,
                    Register::C => self.c,
                };
            }
            Opcode::INC => {
                self.dr = 1;
            }
            _ => {}
        }
        Ok(())
    }

    fn exec(&mut self, opcode: Opcode, at: u16) -> Result<(), Fault> {
        match opcode {
            Opcode::NOP => {}
            Opcode::JMP => {
                self.pc = self.ar;
            }
            Opcode::JPZ => {
                if self.zero {
                    self.pc = self.ar;
                }
            }
            Opcode::JNZ => {
                if !self.zero {
                    self.pc = self.ar;
                }
            }
            Opcode::CALL => {
                // Return address goes on the stack low byte first.
                self.ar = self.sp;
                self.sp = self.sp.wrapping_add(1);
                self.mem_write(self.ar, self.pc as u8)?;
                self.ar = self.sp;
                self.sp = self.sp.wrapping_add(1);
                self.mem_write(self.ar, (self.pc >> 8) as u8)?;
                self.pc = u16::from(self.tr) << 8 | u16::from(self.dr);
            }
            Opcode::RET => {
                // High byte was latched in decode; ar points at the low.
                self.pc = u16::from(self.dr) << 8;
                self.dr = self.mem_fetch(self.ar)?;
                self.pc |= u16::from(self.dr);
            }
            Opcode::MOV => {
                self.ac = self.dr;
            }
            Opcode::MVR => match Register::from_instruction(self.ir) {
                Register::B => self.b = self.dr,
                Register::C => self.c = self.dr,
            },
            Opcode::MVI => {
                self.ac = self.dr;
            }
            Opcode::CLA => {
                self.ac = 0;
                self.zero = true;
            }
            Opcode::CLR => {
                self.ac = 0;
            }
            Opcode::POP => {
                self.dr = self.mem_fetch(self.ar)?;
                self.ac = self.dr;
            }
            Opcode::PUSH => {
                self.mem_write(self.ar, self.dr)?;
            }
            Opcode::ADD | Opcode::INC => {
                self.ac = self.ac.wrapping_add(self.dr);
            }
            Opcode::DIV => {
                if self.dr == 0 {
                    return Err(Fault::DivisionByZero { address: at });
                }
                self.ac /= self.dr;
            }
            Opcode::MUL => {
                self.ac = self.ac.wrapping_mul(self.dr);
            }
            Opcode::SHL => {
                // A count of a byte width or more shifts everything out.
                self.ac = if u32::from(self.dr) < constants::BYTE_WIDTH {
                    self.ac << self.dr
                } else {
                    0
                };
            }
            Opcode::SHR => {
                self.ac = if u32::from(self.dr) < constants::BYTE_WIDTH {
                    self.ac >> self.dr
                } else {
                    0
                };
            }
            Opcode::SUB => {
                self.ac = self.ac.wrapping_sub(self.dr);
            }
            Opcode::AND => {
                self.ac &= self.dr;
            }
            Opcode::OR => {
                self.ac |= self.dr;
            }
        }
        Ok(())
    }

    fn mem_fetch(&self, address: u16) -> Result<u8, Fault> {
        self.memory
            .fetch(address)
            .map_err(|_| Fault::BadMemoryAccess { address })
    }

    fn mem_write(&mut self, address: u16, value: u8) -> Result<(), Fault> {
        self.memory
            .write(address, value)
            .map_err(|_| Fault::BadMemoryAccess { address })
    }

    pub fn accumulator(&self) -> u8 {
        self.ac
    }

    pub fn program_counter(&self) -> u16 {
        self.pc
    }

    pub fn stack_pointer(&self) -> u16 {
        self.sp
    }

    pub fn register(&self, register: Register) -> u8 {
        match register {
            Register::B => self.b,
            Register::C => self.c,
        }
    }

    pub fn zero_flag(&self) -> bool {
        self.zero
    }

    pub fn memory(&self) -> &Memory {
        &self.memory
    }
}

impl Default for Processor {
    fn default() -> Processor {
        Processor::new()
    }
}
