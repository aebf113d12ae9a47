use num::Num;
use pest::iterators::Pair;

use crate::parser::{new_parser_error, Result, Rule};

/// Parses a C-convention integer literal: decimal, hexadecimal with a `0x`
/// prefix, or octal with a leading zero, optionally negated.
pub fn process_int(pair: Pair<Rule>) -> Result<i32> {
    let span = pair.as_span();
    let negative = pair.as_str().starts_with('-');
    let inner = pair.into_inner().next().unwrap();

    let (digits, radix) = match inner.as_rule() {
        Rule::hex_int => (&inner.as_str()[2..], 16),
        Rule::oct_int => (&inner.as_str()[1..], 8),
        Rule::dec_int => (inner.as_str(), 10),
        _ => unreachable!(),
    };

    let value: i32 = Num::from_str_radix(digits, radix)
        .map_err(|err| new_parser_error(span, format!("parsing integer failed: {}", err)))?;

    Ok(if negative { -value } else { value })
}
