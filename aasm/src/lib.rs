//! Assembler for the [acpu](../acpu/index.html) accumulator processor.
//!
//! [`assemble`](fn.assemble.html) accepts a program in the toolchain's
//! assembly language and produces a relocatable
//! [`Object`](../aobj/struct.Object.html). Branch targets are emitted as
//! placeholder bytes plus relocation records even when the target is
//! defined in the same file; resolving them is the linker's job, as is
//! picking the entry point.
//!
//! Parsing is implemented with [pest], and the parse error type is an alias
//! of `pest::error::Error`, so diagnostics come pretty-printed with source
//! positions for free.
//!
//! # Language
//!
//! A source file is a sequence of sections; only `.text` is recognized. A
//! section holds subroutines: a `name:` label followed by instructions.
//! Any whitespace separates tokens, and comments run from `#` to the end of
//! the line.
//!
//! ```text
//! .text
//! main:
//!     mvi 5       # ac = 5
//!     mvr %b      # b = ac
//!     mvi 3
//!     add %b      # ac = ac + b
//!     ret
//! ```
//!
//! Integer literals follow C conventions: decimal, hexadecimal with `0x`,
//! octal with a leading `0`, optionally negated. Immediates must fit in
//! eight bits, signed or unsigned (-128 through 255).
//!
//! Mnemonic reference:
//!
//! Mnemonic | Operand   | Effect
//! ---------|-----------|---------------------------------------------
//! `nop`    | none      | Does nothing
//! `jmp`    | `$label`  | Jump
//! `jpz`    | `$label`  | Jump when the zero flag is set
//! `jnz`    | `$label`  | Jump when the zero flag is clear
//! `call`   | `$label`  | Push the return address and jump
//! `ret`    | none      | Return to the pushed address
//! `mov`    | `%b` `%c` | Copy the register into the accumulator
//! `mvr`    | `%b` `%c` | Copy the accumulator into the register
//! `mvi`    | literal   | Load the literal into the accumulator
//! `cla`    | none      | Clear the accumulator and set the zero flag
//! `clr`    | none      | Clear the accumulator
//! `pop`    | none      | Pop the top of the stack into the accumulator
//! `push`   | none      | Push the accumulator
//! `add`    | `%b` `%c` | Add the register to the accumulator
//! `div`    | `%b` `%c` | Divide the accumulator by the register
//! `inc`    | none      | Increment the accumulator
//! `mul`    | `%b` `%c` | Multiply the accumulator by the register
//! `shl`    | `%b` `%c` | Shift the accumulator left by the register
//! `shr`    | `%b` `%c` | Shift the accumulator right by the register
//! `sub`    | `%b` `%c` | Subtract the register from the accumulator
//! `and`    | `%b` `%c` | Bitwise and
//! `or`     | `%b` `%c` | Bitwise or
//!
//! [pest]: https://docs.rs/pest/

mod ast;
mod encode;
mod int_util;
mod parser;


use std::{error, fmt};

pub use crate::ast::{File, Instruction, Operand, Subroutine, TextSection};
pub use crate::encode::{encode, EncodeError};
pub use crate::parser::{parse, AsmParser, ParseError, Rule};

use aobj::Object;

/// Everything that can stop a source file from becoming an object.
#[derive(Debug)]
pub enum Error {
    /// Parse diagnostics, reported together.
    Parse(Vec<ParseError>),
    Encode(EncodeError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Parse(errors) => {
                for err in errors {
                    writeln!(f, "{}", err)?;
                }
                Ok(())
            }
            Error::Encode(err) => write!(f, "{}", err),
        }
    }
}

impl error::Error for Error {}

/// Compiles assembly source into a relocatable object.
pub fn assemble(input: &str) -> Result<Object, Error> {
    let file = parse(input).map_err(Error::Parse)?;
    encode(&file).map_err(Error::Encode)
}
