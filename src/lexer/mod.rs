// License: MIT

use std::str::Lines;

use crate::ast::Statement;

mod scanner;
mod tokenizer;

/// A classified physical line together with its 1-based line number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub number: usize,
    pub statement: Statement,
}

/// Splits input into lines and classifies each one independently.
///
/// The lexer carries no state between lines apart from the line counter;
/// every line is trimmed before it is matched against the statement forms.
pub struct Lexer<'a> {
    input: Lines<'a>,
    line: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Lexer {
            input: input.lines(),
            line: 0,
        }
    }

    /// Number of the line most recently returned, 0 before the first one.
    pub fn line(&self) -> usize {
        self.line
    }

    pub fn next_line(&mut self) -> Option<Line> {
        let raw = self.input.next()?;
        self.line += 1;
        Some(Line {
            number: self.line,
            statement: tokenizer::classify_line(raw),
        })
    }
}

impl Iterator for Lexer<'_> {
    type Item = Line;

    fn next(&mut self) -> Option<Line> {
        self.next_line()
    }
}
