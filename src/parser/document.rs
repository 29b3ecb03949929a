// License: MIT

use log::{debug, trace};

use super::*;
use crate::ast::Statement;

pub(super) fn parse_document(mut parser: Parser) -> Result<ParsedConfig, ConfigError> {
    while let Some(line) = parser.lexer.next_line() {
        match line.statement {
            Statement::Comment | Statement::Blank => {}
            Statement::Declaration { name, expr } => {
                let value = parse_value(&expr, line.number)?;
                debug!("line {}: var {} := {:?}", line.number, name, value);
                parser.declare(name, value);
            }
            Statement::ConstantRef { name } => {
                parser.realize_constant(&name)?;
            }
            Statement::Unrecognized(text) => {
                // Unknown statement shapes are skipped, never rejected.
                trace!("line {}: ignoring unrecognized line '{}'", line.number, text);
            }
        }
    }

    debug!(
        "parsed {} variable(s), {} constant(s) from {} line(s)",
        parser.config.variables.len(),
        parser.config.constants.len(),
        parser.line()
    );
    Ok(parser.config)
}
