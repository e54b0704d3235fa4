/*
    This module parses L-system description files
*/

mod lexer;
mod productions;
mod verifier;

use std::fmt::Display;
use std::io::Read;
use std::str::FromStr;

use crate::grammar::*;
use crate::error_handling::*;
use lexer::*;
use productions::parse_productions;
use tracing::{debug, trace};

pub use verifier::{verify, Warning};

// Grammar rules that can fail to match, named in error messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Generations,
    Angle,
    Scale,
    Axiom,
    Integer,
    Number,
    Symbol,
    Newline,
    Probability,
    CloseParen,
    Arrow,
    EndOfInput,
}

impl Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::Generations => write!(f, "`generations:`"),
            Rule::Angle => write!(f, "`angle:`"),
            Rule::Scale => write!(f, "`scale:`"),
            Rule::Axiom => write!(f, "`axiom:`"),
            Rule::Integer => write!(f, "integer"),
            Rule::Number => write!(f, "number"),
            Rule::Symbol => write!(f, "symbol"),
            Rule::Newline => write!(f, "newline"),
            Rule::Probability => write!(f, "probability"),
            Rule::CloseParen => write!(f, "`)`"),
            Rule::Arrow => write!(f, "`->`"),
            Rule::EndOfInput => write!(f, "end of input"),
        }
    }
}

#[derive(Debug)]
pub enum SyntaxErrorType {
    // A mandatory grammar element did not match. `found` is the rest of the
    // offending line from the failure point
    Expected { rule: Rule, found: String },
    // A number parsed but is not allowed where it appears
    OutOfRange { rule: Rule, value: String },
    // The input could not be read
    ReadError(std::io::Error),
}

impl ErrorType for SyntaxErrorType {}

impl PartialEq for SyntaxErrorType {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (SyntaxErrorType::Expected { rule: a, found: x }, SyntaxErrorType::Expected { rule: b, found: y }) => a == b && x == y,
            (SyntaxErrorType::OutOfRange { rule: a, value: x }, SyntaxErrorType::OutOfRange { rule: b, value: y }) => a == b && x == y,
            (SyntaxErrorType::ReadError(a), SyntaxErrorType::ReadError(b)) => a.kind() == b.kind(),
            _ => false
        }
    }
}

impl Display for SyntaxErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SyntaxErrorType::Expected { rule, found } if found.is_empty() => write!(f, "Expecting {} here: end of input", rule),
            SyntaxErrorType::Expected { rule, found } => write!(f, "Expecting {} here: {:?}", rule, found),
            SyntaxErrorType::OutOfRange { rule: Rule::Generations, value } => write!(f, "Generations must be a non-negative integer, got `{}`", value),
            SyntaxErrorType::OutOfRange { rule: Rule::Probability, value } => write!(f, "Probability must be in (0, 1], got `{}`", value),
            SyntaxErrorType::OutOfRange { rule, value } => write!(f, "Value `{}` is out of range for {}", value, rule),
            SyntaxErrorType::ReadError(e) => write!(f, "Read error: {}", e),
        }
    }
}

pub type SyntaxError = Error<SyntaxErrorType>;

impl From<std::io::Error> for SyntaxError {
    fn from(error: std::io::Error) -> Self {
        SyntaxError {
            location: Location::default(),
            error: SyntaxErrorType::ReadError(error)
        }
    }
}

pub type Result<T> = std::result::Result<T, SyntaxError>;

// Parses `keyword value` and the line terminator after it
fn parse_header<T>(
    cursor: &mut Cursor,
    keyword: &str,
    rule: Rule,
    value: impl FnOnce(&mut Cursor) -> Result<T>
) -> Result<T> {
    skip(cursor);
    let line = cursor.location().line;
    cursor.expect_literal(keyword, rule)?;
    skip(cursor);
    let value = value(cursor)?;
    line_end(cursor)?;
    trace!(%rule, line, "parsed header field");
    Ok(value)
}

fn parse_generations(cursor: &mut Cursor) -> Result<u32> {
    let location = cursor.location();
    let out_of_range = |value: String| SyntaxError {
        location: location.clone(),
        error: SyntaxErrorType::OutOfRange { rule: Rule::Generations, value }
    };

    let value = lex_integer(cursor).map_err(|e| match e.error {
        SyntaxErrorType::OutOfRange { value, .. } => out_of_range(value),
        error => SyntaxError { location: e.location, error }
    })?;

    u32::try_from(value).map_err(|_| out_of_range(value.to_string()))
}

fn parse_lsystem(cursor: &mut Cursor) -> Result<LSystem> {
    let generations = parse_header(cursor, "generations:", Rule::Generations, parse_generations)?;
    let angle = parse_header(cursor, "angle:", Rule::Angle, lex_number)?;
    let scale = parse_header(cursor, "scale:", Rule::Scale, lex_number)?;
    let axiom = parse_header(cursor, "axiom:", Rule::Axiom, lex_symbols)?;
    let productions = parse_productions(cursor)?;

    return Ok(LSystem {
        generations,
        angle,
        scale,
        axiom,
        productions
    });
}

/// Parses a complete L-system document.
///
/// The whole input has to match; the first rule that fails is reported with
/// its location and the rest of the offending line.
pub fn parse(text: &str) -> Result<LSystem> {
    let mut cursor = Cursor::new(text);
    let lsystem = parse_lsystem(&mut cursor)?;

    if !cursor.at_end() {
        return Err(cursor.expected(Rule::EndOfInput));
    }

    debug!(
        generations = lsystem.generations,
        predecessors = lsystem.productions.len(),
        productions = lsystem.production_count(),
        "parsed lsystem"
    );
    return Ok(lsystem);
}

/// Reads `reader` to the end and parses what it produced.
pub fn parse_reader(mut reader: impl Read) -> Result<LSystem> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse(&text)
}

impl FromStr for LSystem {
    type Err = SyntaxError;

    fn from_str(s: &str) -> Result<Self> {
        parse(s)
    }
}
