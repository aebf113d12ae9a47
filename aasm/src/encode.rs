use std::{error, fmt};

use acpu::{make_instruction, make_register_instruction};
use aobj::{Object, Relocation, SectionId, Symbol, SymbolError, SymbolSection, SymbolTable};

use crate::ast::{File, Instruction, Operand};

/// Errors detected while lowering a parsed file to an object.
#[derive(Clone, Debug, PartialEq)]
pub enum EncodeError {
    /// Two subroutines carry the same name.
    DuplicateSymbol(String),
    /// More distinct names than the symbol table can index.
    TooManySymbols,
    /// A name the symbol format cannot carry.
    BadSymbolName(String),
    /// More text than a 16-bit address space can hold.
    TextTooLarge(usize),
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EncodeError::DuplicateSymbol(name) => {
                write!(f, "duplicate symbol \"{}\"", name)
            }
            EncodeError::TooManySymbols => f.write_str("too many symbols for one object"),
            EncodeError::BadSymbolName(name) => {
                write!(f, "bad symbol name \"{}\"", name)
            }
            EncodeError::TextTooLarge(len) => {
                write!(f, "text section of {} bytes is not addressable", len)
            }
        }
    }
}

impl error::Error for EncodeError {}

impl From<SymbolError> for EncodeError {
    fn from(err: SymbolError) -> EncodeError {
        match err {
            SymbolError::NameExists(name) => EncodeError::DuplicateSymbol(name),
            SymbolError::TableFull => EncodeError::TooManySymbols,
            SymbolError::BadName(name) => EncodeError::BadSymbolName(name),
        }
    }
}

/// Lowers a parsed file to an object: subroutines become TEXT symbols in
/// source order, instructions become text bytes, and every symbolic target
/// becomes placeholder address bytes plus a relocation. Targets are never
/// resolved here, even when defined in the same file; applying relocations
/// is the linker's job. The entry point is left at zero for the same
/// reason.
pub fn encode(file: &File) -> Result<Object, EncodeError> {
    let mut object = Object::new();
    let mut text = Vec::new();

    for section in &file.sections {
        for subroutine in &section.subroutines {
            let address = text_address(&text)?;
            define(&mut object.symbols, subroutine.name, address)?;
            for instruction in &subroutine.instructions {
                emit(instruction, &mut text, &mut object)?;
            }
        }
    }
    text_address(&text)?;

    object.sections.set(SectionId::Text, text);
    Ok(object)
}

fn text_address(text: &[u8]) -> Result<u16, EncodeError> {
    if text.len() > usize::from(u16::max_value()) {
        Err(EncodeError::TextTooLarge(text.len()))
    } else {
        Ok(text.len() as u16)
    }
}

/// Adds a defined TEXT symbol, upgrading an earlier undefined reference to
/// the same name in place.
fn define(symbols: &mut SymbolTable, name: &str, address: u16) -> Result<(), EncodeError> {
    if let Some(index) = symbols.index_of(name) {
        let symbol = symbols.get_mut(index).unwrap();
        if !symbol.section.is_undefined() {
            return Err(EncodeError::DuplicateSymbol(name.to_string()));
        }
        symbol.section = SymbolSection::Section(SectionId::Text);
        symbol.address = address;
        return Ok(());
    }

    symbols.add(Symbol {
        name: name.to_string(),
        section: SymbolSection::Section(SectionId::Text),
        address,
    })?;
    Ok(())
}

/// Index for a referenced name, creating an undefined entry for names no
/// subroutine has (yet) declared.
fn reference(symbols: &mut SymbolTable, name: &str) -> Result<u8, EncodeError> {
    match symbols.index_of(name) {
        Some(index) => Ok(index),
        None => Ok(symbols.add(Symbol {
            name: name.to_string(),
            section: SymbolSection::Undefined,
            address: 0,
        })?),
    }
}

fn emit(
    instruction: &Instruction,
    text: &mut Vec<u8>,
    object: &mut Object,
) -> Result<(), EncodeError> {
    match &instruction.operand {
        None => text.push(make_instruction(instruction.opcode)),
        Some(Operand::Register(register)) => {
            text.push(make_register_instruction(instruction.opcode, *register));
        }
        Some(Operand::Immediate(value)) => {
            text.push(make_instruction(instruction.opcode));
            text.push(*value);
        }
        Some(Operand::Symbol(span)) => {
            text.push(make_instruction(instruction.opcode));
            let offset = text_address(text)?;
            // Placeholder address bytes, patched at link time.
            text.push(0);
            text.push(0);
            let symbol = reference(&mut object.symbols, span.as_str())?;
            object.relocations.add(Relocation { symbol, offset });
        }
    }
    Ok(())
}
