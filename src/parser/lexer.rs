use itertools::{Itertools, PeekingNext};

use crate::error_handling::Location;
use crate::grammar::{Sequence, Symbol};
use super::{Result, Rule, SyntaxError, SyntaxErrorType};

// Longest piece of the offending line kept in an error
const CONTEXT_WIDTH: usize = 40;

// Walks the source one character at a time, keeping track of where it is
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    source: &'a str,
    offset: usize,
    line: usize,
    column: usize
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a str) -> Self {
        Cursor {
            source,
            offset: 0,
            line: 1,
            column: 1
        }
    }

    pub fn rest(&self) -> &'a str {
        &self.source[self.offset..]
    }

    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    pub fn at_end(&self) -> bool {
        self.offset == self.source.len()
    }

    pub fn location(&self) -> Location {
        Location {
            file: Default::default(),
            line: self.line,
            column: self.column
        }
    }

    // Text consumed since `start`
    pub fn since(&self, start: &Cursor<'a>) -> &'a str {
        &self.source[start.offset..self.offset]
    }

    pub fn eat(&mut self, c: char) -> bool {
        self.peeking_next(|&next| next == c).is_some()
    }

    pub fn expect(&mut self, c: char, rule: Rule) -> Result<()> {
        if self.eat(c) {
            Ok(())
        } else {
            Err(self.expected(rule))
        }
    }

    pub fn expect_literal(&mut self, literal: &str, rule: Rule) -> Result<()> {
        if !self.rest().starts_with(literal) {
            return Err(self.expected(rule));
        }

        for _ in literal.chars() {
            self.next();
        }
        Ok(())
    }

    // The rest of the current line, or the newline itself if the line is done
    fn context(&self) -> String {
        let rest = self.rest();
        let line = rest.split('\n').next().unwrap_or_default();

        if line.is_empty() && rest.starts_with('\n') {
            return "\n".to_string();
        }
        line.chars().take(CONTEXT_WIDTH).collect()
    }

    pub fn expected(&self, rule: Rule) -> SyntaxError {
        SyntaxError {
            location: self.location(),
            error: SyntaxErrorType::Expected { rule, found: self.context() }
        }
    }
}

impl<'a> Iterator for Cursor<'a> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.offset += c.len_utf8();

        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }
}

impl<'a> PeekingNext for Cursor<'a> {
    fn peeking_next<F>(&mut self, accept: F) -> Option<char>
    where
        F: FnOnce(&char) -> bool
    {
        let c = self.peek()?;
        if accept(&c) {
            self.next()
        } else {
            None
        }
    }
}

pub fn skip_spaces(cursor: &mut Cursor) {
    cursor.peeking_take_while(|&c| c == ' ').count();
}

// Consumes a `#` comment through the end of its line
fn skip_comment(cursor: &mut Cursor) {
    cursor.eat('#');
    cursor.peeking_take_while(|&c| c != '\n').count();
    cursor.eat('\n');
}

// Consumes the insignificant text between two tokens: spaces and comments.
// Newlines outside of comments are left alone
pub fn skip(cursor: &mut Cursor) {
    while let Some(c) = cursor.peek() {
        match c {
            ' ' => { cursor.next(); },
            '#' => skip_comment(cursor),
            _ => break
        }
    }
}

// Consumes lines holding nothing but a comment. A bare blank line stops it
fn skip_comment_lines(cursor: &mut Cursor) {
    loop {
        let line_start = cursor.clone();
        skip_spaces(cursor);

        if cursor.peek() == Some('#') {
            skip_comment(cursor);
        } else {
            *cursor = line_start;
            break;
        }
    }
}

// Consumes the rest of the input, but only if it is all blank and comment lines
fn skip_trailing_lines(cursor: &mut Cursor) {
    let start = cursor.clone();

    loop {
        skip_spaces(cursor);
        match cursor.peek() {
            Some('#') => skip_comment(cursor),
            Some('\n') => { cursor.next(); },
            None => return,
            Some(_) => {
                *cursor = start;
                return;
            }
        }
    }
}

// Ends a line: a newline, or a comment which runs to one. Comment lines after
// it belong to it, and so do blank lines when nothing else follows
pub fn line_end(cursor: &mut Cursor) -> Result<()> {
    skip_spaces(cursor);

    match cursor.peek() {
        Some('#') => skip_comment(cursor),
        Some('\n') => { cursor.next(); },
        _ => return Err(cursor.expected(Rule::Newline))
    }

    skip_comment_lines(cursor);
    skip_trailing_lines(cursor);
    Ok(())
}

fn take_digits(cursor: &mut Cursor) -> usize {
    cursor.peeking_take_while(char::is_ascii_digit).count()
}

fn take_sign(cursor: &mut Cursor) {
    cursor.peeking_next(|&c| c == '+' || c == '-');
}

pub fn lex_integer(cursor: &mut Cursor) -> Result<i64> {
    let start = cursor.clone();
    take_sign(cursor);

    if take_digits(cursor) == 0 {
        *cursor = start;
        return Err(cursor.expected(Rule::Integer));
    }

    let text = cursor.since(&start);
    text.parse().map_err(|_| SyntaxError {
        location: start.location(),
        error: SyntaxErrorType::OutOfRange { rule: Rule::Integer, value: text.to_string() }
    })
}

// A decimal number with optional sign, fraction and exponent
pub fn lex_float(cursor: &mut Cursor, rule: Rule) -> Result<f64> {
    let start = cursor.clone();
    take_sign(cursor);

    let mut digits = take_digits(cursor);
    if cursor.eat('.') {
        digits += take_digits(cursor);
    }
    if digits == 0 {
        *cursor = start;
        return Err(cursor.expected(rule));
    }

    // An `e` without digits after it is not part of the number
    let mantissa_end = cursor.clone();
    if cursor.peeking_next(|&c| c == 'e' || c == 'E').is_some() {
        take_sign(cursor);
        if take_digits(cursor) == 0 {
            *cursor = mantissa_end;
        }
    }

    let text = cursor.since(&start);
    let value: f64 = text.parse().map_err(|_| start.expected(rule))?;

    if !value.is_finite() {
        return Err(SyntaxError {
            location: start.location(),
            error: SyntaxErrorType::OutOfRange { rule, value: text.to_string() }
        });
    }
    Ok(value)
}

pub fn lex_number(cursor: &mut Cursor) -> Result<f64> {
    lex_float(cursor, Rule::Number)
}

// One symbol: an alias or any other character that is not a space or newline
pub fn lex_symbol(cursor: &mut Cursor) -> Result<Symbol> {
    cursor
        .peeking_next(|&c| c != ' ' && c != '\n')
        .map(Symbol::from_char)
        .ok_or_else(|| cursor.expected(Rule::Symbol))
}

// One or more symbols, up to the end of the line or a comment
pub fn lex_symbols(cursor: &mut Cursor) -> Result<Sequence> {
    skip(cursor);
    let mut symbols = vec![lex_symbol(cursor)?];

    loop {
        skip_spaces(cursor);
        match cursor.peek() {
            None | Some('\n') | Some('#') => break,
            Some(_) => symbols.push(lex_symbol(cursor)?)
        }
    }

    return Ok(symbols);
}
