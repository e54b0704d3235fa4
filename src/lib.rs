/*
    Parser for the L-system description format
*/

pub mod error_handling;
pub mod grammar;
pub mod parser;

pub use grammar::*;
pub use parser::{parse, parse_reader, verify, SyntaxError, SyntaxErrorType, Rule, Warning};
