// License: MIT

use crate::ast::Value;
use crate::config::ParsedConfig;
use crate::lexer::Lexer;
use crate::ConfigError;

mod document;
mod reference;
mod value;

pub use value::parse_value;

/// Single forward pass over the input. The only state carried across lines
/// is the configuration being built.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    config: ParsedConfig,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            lexer: Lexer::new(input),
            config: ParsedConfig::default(),
        }
    }

    pub(crate) fn line(&self) -> usize {
        self.lexer.line()
    }

    /// Consume the parser and produce the configuration. The first error
    /// aborts the parse; no partial result is returned.
    pub fn parse_document(self) -> Result<ParsedConfig, ConfigError> {
        document::parse_document(self)
    }

    pub(crate) fn declare(&mut self, name: String, value: Value) {
        reference::declare_variable(self, name, value)
    }

    pub(crate) fn realize_constant(&mut self, name: &str) -> Result<(), ConfigError> {
        reference::realize_constant(self, name)
    }
}

/// Parse configuration text in one call.
pub fn parse(input: &str) -> Result<ParsedConfig, ConfigError> {
    Parser::new(input).parse_document()
}

#[cfg(test)]
mod tests;
