// License: MIT

use once_cell::sync::Lazy;
use regex::Regex;

// Greedy up to the last ';' so string values may contain semicolons.
static DECLARATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^var\s+([_a-zA-Z][_a-zA-Z0-9]*)\s*:=\s*(.+);").expect("declaration pattern")
});

static CONSTANT_REF: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^@\[([_a-zA-Z][_a-zA-Z0-9]*)\]").expect("constant pattern")
});

pub(super) fn is_comment(line: &str) -> bool {
    line.starts_with('*')
}

/// Returns `(name, expression)` with the expression trimmed.
pub(super) fn scan_declaration(line: &str) -> Option<(String, String)> {
    let caps = DECLARATION.captures(line)?;
    Some((caps[1].to_string(), caps[2].trim().to_string()))
}

pub(super) fn scan_constant_ref(line: &str) -> Option<String> {
    CONSTANT_REF.captures(line).map(|caps| caps[1].to_string())
}
