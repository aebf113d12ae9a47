use std::str::FromStr;

use matches::debug_assert_matches;
use pest::iterators::Pair;
use pest::{Parser, Span};
use pest_derive::Parser;
use util::ParseEnumError;

use acpu::{Opcode, OperandKind};

use crate::ast::*;
use crate::int_util::process_int;

#[derive(Parser)]
#[grammar = "asm.pest"]
pub struct AsmParser;

pub type ParseError = pest::error::Error<Rule>;

pub type Result<T> = std::result::Result<T, ParseError>;

pub(crate) fn new_parser_error(span: Span, message: String) -> ParseError {
    ParseError::new_from_span(pest::error::ErrorVariant::CustomError { message }, span)
}

/// Parses a whole source file. Every diagnostic found is reported, not just
/// the first; a non-empty list means no usable syntax tree.
pub fn parse(input: &str) -> std::result::Result<File, Vec<ParseError>> {
    let pair = match AsmParser::parse(Rule::program, input) {
        Ok(mut pairs) => pairs.next().unwrap(),
        Err(err) => return Err(vec![err]),
    };

    let mut errors = Vec::new();
    let file = process_file(pair, &mut errors);
    if errors.is_empty() {
        Ok(file)
    } else {
        Err(errors)
    }
}

fn process_file<'i>(pair: Pair<'i, Rule>, errors: &mut Vec<ParseError>) -> File<'i> {
    debug_assert_matches!(pair.as_rule(), Rule::program);

    let mut sections = Vec::new();
    for section in pair.into_inner() {
        if section.as_rule() == Rule::EOI {
            continue;
        }
        if let Some(text) = process_section(section, errors) {
            sections.push(text);
        }
    }
    File { sections }
}

fn process_section<'i>(
    pair: Pair<'i, Rule>,
    errors: &mut Vec<ParseError>,
) -> Option<TextSection<'i>> {
    debug_assert_matches!(pair.as_rule(), Rule::section);

    let mut pairs = pair.into_inner();
    let name = pairs.next().unwrap();
    if name.as_str() != "text" {
        errors.push(new_parser_error(
            name.as_span(),
            format!("unknown section name: {}", name.as_str()),
        ));
        return None;
    }

    let subroutines = pairs.map(|p| process_subroutine(p, errors)).collect();
    Some(TextSection { subroutines })
}

fn process_subroutine<'i>(pair: Pair<'i, Rule>, errors: &mut Vec<ParseError>) -> Subroutine<'i> {
    debug_assert_matches!(pair.as_rule(), Rule::subroutine);

    let mut pairs = pair.into_inner();
    let label = pairs.next().unwrap();
    let name = label.into_inner().next().unwrap().as_str();
    let instructions = pairs
        .filter_map(|p| process_instruction(p, errors))
        .collect();

    Subroutine { name, instructions }
}

fn process_instruction<'i>(
    pair: Pair<'i, Rule>,
    errors: &mut Vec<ParseError>,
) -> Option<Instruction<'i>> {
    debug_assert_matches!(pair.as_rule(), Rule::instruction);

    let mut pairs = pair.into_inner();
    let mnemonic = pairs.next().unwrap();
    let operand = pairs.next();

    let opcode: Opcode = match process_enum(&mnemonic) {
        Ok(opcode) => opcode,
        Err(err) => {
            errors.push(err);
            return None;
        }
    };

    match check_operand(opcode, mnemonic.as_span(), operand) {
        Ok(operand) => Some(Instruction { opcode, operand }),
        Err(err) => {
            errors.push(err);
            None
        }
    }
}

fn process_enum<T: FromStr<Err = ParseEnumError>>(pair: &Pair<Rule>) -> Result<T> {
    pair.as_str()
        .to_uppercase()
        .parse()
        .map_err(|err| new_parser_error(pair.as_span(), format!("{}", err)))
}

fn check_operand<'i>(
    opcode: Opcode,
    at: Span<'i>,
    operand: Option<Pair<'i, Rule>>,
) -> Result<Option<Operand<'i>>> {
    let kind = opcode.operand_kind();

    let operand = match operand {
        Some(pair) => pair,
        None => {
            return if kind == OperandKind::None {
                Ok(None)
            } else {
                Err(new_parser_error(
                    at,
                    format!("{} requires {} operand", opcode, describe(kind)),
                ))
            };
        }
    };

    let span = operand.as_span();
    let inner = operand.into_inner().next().unwrap();
    match (kind, inner.as_rule()) {
        (OperandKind::Register, Rule::register) => {
            let name = inner.into_inner().next().unwrap();
            Ok(Some(Operand::Register(process_enum(&name)?)))
        }
        (OperandKind::Immediate, Rule::int) => {
            Ok(Some(Operand::Immediate(process_immediate(inner)?)))
        }
        (OperandKind::Address, Rule::symbol) => {
            let name = inner.into_inner().next().unwrap();
            Ok(Some(Operand::Symbol(name.as_span())))
        }
        (OperandKind::None, _) => Err(new_parser_error(
            span,
            format!("{} takes no operand", opcode),
        )),
        _ => Err(new_parser_error(
            span,
            format!("{} requires {} operand", opcode, describe(kind)),
        )),
    }
}

fn process_immediate(pair: Pair<Rule>) -> Result<u8> {
    let span = pair.as_span();
    let value = process_int(pair)?;
    // Anything representable in eight bits, signed or unsigned.
    if value < -128 || value > 255 {
        Err(new_parser_error(
            span,
            format!("literal {} does not fit in 8 bits", value),
        ))
    } else {
        Ok(value as u8)
    }
}

fn describe(kind: OperandKind) -> &'static str {
    match kind {
        OperandKind::None => "no",
        OperandKind::Register => "a %register",
        OperandKind::Immediate => "an 8-bit literal",
        OperandKind::Address => "a $symbol",
    }
}
