// License: MIT

use log::debug;

use super::*;

/// Upsert a variable. A redeclared name keeps its original position.
pub(super) fn declare_variable(parser: &mut Parser, name: String, value: Value) {
    if let Some(old) = parser.config.variables.insert(name.clone(), value) {
        debug!(
            "line {}: variable '{}' redeclared, previous value {:?} overwritten",
            parser.line(),
            name,
            old
        );
    }
}

/// Snapshot the current value of `name` into the constants. Later
/// redeclarations of the variable do not affect the copy.
pub(super) fn realize_constant(parser: &mut Parser, name: &str) -> Result<(), ConfigError> {
    let value = parser
        .config
        .variables
        .get(name)
        .cloned()
        .ok_or_else(|| {
            ConfigError::syntax(
                format!("Undefined variable '{}' in constant expression.", name),
                parser.line(),
                Some("Declare it with `var <name> := <value>;` before referencing it"),
                201,
            )
        })?;

    debug!("line {}: constant {} = {:?}", parser.line(), name, value);
    parser.config.constants.insert(name.to_string(), value);
    Ok(())
}
