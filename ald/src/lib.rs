//! Merges relocatable objects into a runnable program.
//!
//! Linking folds the inputs in order into one accumulated object. For each
//! input, every address is shifted by the amount of same-section content
//! already merged, its sections are appended, and its symbols are unified
//! with the accumulated table while its relocations are rewritten to the
//! unified indices. Once all inputs are in, the entry point is resolved and
//! every relocation patches its placeholder bytes with the final address of
//! its symbol.


use std::{error, fmt};

use byteorder::ByteOrder;
use util::Endian;

use aobj::{
    Object, Relocation, SectionId, Symbol, SymbolError, SymbolSection, UNRESOLVED_INDEX,
};

/// The symbol the entry point is taken from when no input carries one.
pub const ENTRY_SYMBOL: &str = "main";

#[derive(Clone, Debug, PartialEq)]
pub enum LinkError {
    /// Two inputs both define the named symbol.
    DuplicateSymbol(String),
    /// A relocation's target name was never defined by any input.
    UndefinedSymbol(String),
    /// A relocation carries the not-found sentinel or an index past the
    /// merged table.
    BadRelocation(u8),
    /// A relocation's patch site does not fit inside the merged text.
    RelocationOutOfRange(u16),
    /// A merged section outgrew the 16-bit address space.
    SectionTooLarge(SectionId),
    /// The merged symbol table cannot hold another input's names.
    TooManySymbols,
    /// An input carries a symbol name the table rejects.
    BadSymbolName(String),
    /// No input set an entry point and no `main` symbol exists.
    MissingEntry,
}

impl fmt::Display for LinkError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LinkError::DuplicateSymbol(name) => {
                write!(f, "duplicate symbol \"{}\"", name)
            }
            LinkError::UndefinedSymbol(name) => {
                write!(f, "undefined symbol \"{}\"", name)
            }
            LinkError::BadRelocation(index) => {
                write!(f, "relocation against unknown symbol index {}", index)
            }
            LinkError::RelocationOutOfRange(offset) => {
                write!(f, "relocation at {:#06x} is outside the text section", offset)
            }
            LinkError::SectionTooLarge(id) => {
                write!(f, "merged {:?} section outgrew the address space", id)
            }
            LinkError::TooManySymbols => f.write_str("too many symbols for one program"),
            LinkError::BadSymbolName(name) => {
                write!(f, "bad symbol name \"{}\"", name)
            }
            LinkError::MissingEntry => {
                write!(f, "no entry point: no input defines \"{}\"", ENTRY_SYMBOL)
            }
        }
    }
}

impl error::Error for LinkError {}

/// Links the objects in order into one program with all relocations
/// applied and the entry point resolved.
pub fn link<I>(objects: I) -> Result<Object, LinkError>
where
    I: IntoIterator<Item = Object>,
{
    let mut program = Object::new();
    for object in objects {
        merge(&mut program, object)?;
    }
    resolve_entry(&mut program)?;
    apply_relocations(&mut program)?;
    Ok(program)
}

/// Folds `other` into `program`. Duplicate definitions are detected here,
/// after shifting, so the reported conflict reflects the final layout; no
/// relocation has been applied yet at that point.
pub fn merge(program: &mut Object, mut other: Object) -> Result<(), LinkError> {
    // Where each of other's sections will land.
    let mut addend = [0u16; aobj::SECTION_COUNT];
    for &id in SectionId::all().iter() {
        let merged = program.sections.get(id).len() + other.sections.get(id).len();
        if merged > usize::from(u16::max_value()) {
            return Err(LinkError::SectionTooLarge(id));
        }
        addend[id as usize] = program.sections.get(id).len() as u16;
    }
    let text_addend = addend[SectionId::Text as usize];

    // Defined symbols move with their section.
    for symbol in other.symbols.iter_mut() {
        if let SymbolSection::Section(id) = symbol.section {
            symbol.address = symbol
                .address
                .checked_add(addend[id as usize])
                .ok_or(LinkError::SectionTooLarge(id))?;
        }
    }

    // Patch sites always live in the text section.
    for relocation in other.relocations.iter_mut() {
        relocation.offset = relocation
            .offset
            .checked_add(text_addend)
            .ok_or(LinkError::RelocationOutOfRange(relocation.offset))?;
    }

    if other.entry != 0 {
        other.entry = other
            .entry
            .checked_add(text_addend)
            .ok_or(LinkError::SectionTooLarge(SectionId::Text))?;
    }

    for &id in SectionId::all().iter() {
        let data = other.sections.get(id);
        if !data.is_empty() {
            program.sections.append(id, data);
        }
    }

    // Unify symbols, remembering where each of other's indices ended up.
    let mut remap = Vec::with_capacity(other.symbols.len());
    for symbol in other.symbols.iter() {
        remap.push(unify(program, symbol)?);
    }

    for relocation in other.relocations.iter() {
        let symbol = *remap
            .get(relocation.symbol as usize)
            .ok_or(LinkError::BadRelocation(relocation.symbol))?;
        program.relocations.add(Relocation {
            symbol,
            offset: relocation.offset,
        });
    }

    if program.entry == 0 && other.entry != 0 {
        program.entry = other.entry;
    }

    Ok(())
}

/// Adds one of an input's symbols to the accumulated table, or unifies it
/// with an entry of the same name. A reference meeting a definition (in
/// either order) resolves to the definition; two definitions collide.
fn unify(program: &mut Object, symbol: &Symbol) -> Result<u8, LinkError> {
    match program.symbols.index_of(&symbol.name) {
        None => program.symbols.add(symbol.clone()).map_err(|err| match err {
            SymbolError::TableFull => LinkError::TooManySymbols,
            SymbolError::NameExists(name) => LinkError::DuplicateSymbol(name),
            SymbolError::BadName(name) => LinkError::BadSymbolName(name),
        }),
        Some(index) => {
            let existing = program.symbols.get_mut(index).unwrap();
            if symbol.section.is_undefined() {
                // A reference; whatever is there already satisfies it.
                Ok(index)
            } else if existing.section.is_undefined() {
                // A definition filling in an earlier reference.
                existing.section = symbol.section;
                existing.address = symbol.address;
                Ok(index)
            } else {
                Err(LinkError::DuplicateSymbol(symbol.name.clone()))
            }
        }
    }
}

/// An input's explicit entry wins; otherwise the address of `main`.
fn resolve_entry(program: &mut Object) -> Result<(), LinkError> {
    if program.entry != 0 {
        return Ok(());
    }
    match program.symbols.lookup(ENTRY_SYMBOL) {
        Some(symbol) if !symbol.section.is_undefined() => {
            program.entry = symbol.address;
            Ok(())
        }
        _ => Err(LinkError::MissingEntry),
    }
}

/// Writes every target's final address over its placeholder bytes.
fn apply_relocations(program: &mut Object) -> Result<(), LinkError> {
    let Object {
        sections,
        symbols,
        relocations,
        ..
    } = program;
    let text = sections.get_mut(SectionId::Text);

    for relocation in relocations.iter() {
        if relocation.symbol == UNRESOLVED_INDEX {
            return Err(LinkError::BadRelocation(relocation.symbol));
        }
        let symbol = symbols
            .get(relocation.symbol)
            .ok_or(LinkError::BadRelocation(relocation.symbol))?;
        if symbol.section.is_undefined() {
            return Err(LinkError::UndefinedSymbol(symbol.name.clone()));
        }

        let offset = relocation.offset as usize;
        if offset + 2 > text.len() {
            return Err(LinkError::RelocationOutOfRange(relocation.offset));
        }
        Endian::write_u16(&mut text[offset..offset + 2], symbol.address);
    }
    Ok(())
}
