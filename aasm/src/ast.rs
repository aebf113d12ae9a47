use pest::Span;

use acpu::{Opcode, Register};

/// A parsed source file: its recognized sections in order of appearance.
#[derive(Debug, PartialEq)]
pub struct File<'i> {
    pub sections: Vec<TextSection<'i>>,
}

/// A `.text` section: subroutines in first-appearance order. Encoding
/// follows this order, which keeps symbol addresses deterministic.
#[derive(Debug, PartialEq)]
pub struct TextSection<'i> {
    pub subroutines: Vec<Subroutine<'i>>,
}

#[derive(Debug, PartialEq)]
pub struct Subroutine<'i> {
    pub name: &'i str,
    pub instructions: Vec<Instruction<'i>>,
}

#[derive(Debug, PartialEq)]
pub struct Instruction<'i> {
    pub opcode: Opcode,
    pub operand: Option<Operand<'i>>,
}

/// A validated operand. Immediates are already reduced to their encoded
/// byte; symbolic targets keep their span for diagnostics.
#[derive(Debug, PartialEq)]
pub enum Operand<'i> {
    Register(Register),
    Immediate(u8),
    Symbol(Span<'i>),
}
