use tracing::debug;

use crate::grammar::{Production, ProductionTable, Symbol};
use super::lexer::*;
use super::{Result, Rule, SyntaxError, SyntaxErrorType};

// Weight of a production which does not give one
pub const DEFAULT_PROBABILITY: f64 = 1.0;

// An optional `(number)` in (0, 1]
pub fn parse_probability(cursor: &mut Cursor) -> Result<f64> {
    if !cursor.eat('(') {
        return Ok(DEFAULT_PROBABILITY);
    }

    skip(cursor);
    let location = cursor.location();
    let probability = lex_float(cursor, Rule::Probability)?;
    skip(cursor);
    cursor.expect(')', Rule::CloseParen)?;

    if probability <= 0.0 || probability > 1.0 || probability.is_nan() {
        return Err(SyntaxError {
            location,
            error: SyntaxErrorType::OutOfRange { rule: Rule::Probability, value: probability.to_string() }
        });
    }

    return Ok(probability);
}

// predecessor (probability)? -> successor
pub fn parse_production(cursor: &mut Cursor) -> Result<(Symbol, Production)> {
    skip(cursor);
    let predecessor = lex_symbol(cursor)?;
    skip(cursor);
    let probability = parse_probability(cursor)?;
    skip(cursor);
    cursor.expect_literal("->", Rule::Arrow)?;
    let successor = lex_symbols(cursor)?;

    return Ok((predecessor, Production {
        probability,
        successor
    }));
}

// Production lines up to the end of the input. Every line adds one more
// alternative for its predecessor
pub fn parse_productions(cursor: &mut Cursor) -> Result<ProductionTable> {
    let mut table = ProductionTable::new();

    loop {
        let line = cursor.location().line;
        let (predecessor, production) = parse_production(cursor)?;
        debug!(line, %predecessor, probability = production.probability, "parsed production");
        table.entry(predecessor).or_default().push(production);

        if cursor.at_end() {
            break;
        }
        line_end(cursor)?;
        if cursor.at_end() {
            break;
        }
    }

    return Ok(table);
}
