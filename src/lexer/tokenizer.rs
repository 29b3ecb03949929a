// License: MIT

use super::scanner::{is_comment, scan_constant_ref, scan_declaration};
use crate::ast::Statement;

/// Classify one raw line. Order matters: comment, then declaration, then
/// constant reference.
pub(super) fn classify_line(raw: &str) -> Statement {
    let line = raw.trim();

    if line.is_empty() {
        return Statement::Blank;
    }

    if is_comment(line) {
        return Statement::Comment;
    }

    if let Some((name, expr)) = scan_declaration(line) {
        return Statement::Declaration { name, expr };
    }

    if let Some(name) = scan_constant_ref(line) {
        return Statement::ConstantRef { name };
    }

    Statement::Unrecognized(line.to_string())
}
