// License: MIT

use super::*;

/// Classify a trimmed value expression. The checks run in a fixed order:
/// integer, quoted string, then brace-delimited sequence.
///
/// `line` is only used for error reporting.
pub fn parse_value(text: &str, line: usize) -> Result<Value, ConfigError> {
    if let Some(value) = parse_scalar(text, line)? {
        return Ok(value);
    }

    if let Some(inner) = text.strip_prefix('{').and_then(|t| t.strip_suffix('}')) {
        return parse_sequence(text, inner, line);
    }

    Err(invalid_value(text, line, None))
}

/// Integer or quoted string; `Ok(None)` when the text is neither.
fn parse_scalar(text: &str, line: usize) -> Result<Option<Value>, ConfigError> {
    if !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit()) {
        return text
            .parse::<u64>()
            .map(|n| Some(Value::Integer(n)))
            .map_err(|_| invalid_value(text, line, Some("Integer literal does not fit in 64 bits")));
    }

    if text.len() >= 2 && text.starts_with('\'') && text.ends_with('\'') {
        // One layer only; interior quotes stay as written.
        return Ok(Some(Value::Text(text[1..text.len() - 1].to_string())));
    }

    Ok(None)
}

fn parse_sequence(text: &str, inner: &str, line: usize) -> Result<Value, ConfigError> {
    if inner.trim().is_empty() {
        return Err(ConfigError::syntax(
            format!("Invalid value: {}", text),
            line,
            Some("Arrays must contain at least one element"),
            203,
        ));
    }

    let mut items = Vec::new();
    for piece in inner.split(',') {
        items.push(parse_element(piece.trim(), line)?);
    }
    Ok(Value::Sequence(items))
}

/// Array elements are restricted to integers and strings.
fn parse_element(piece: &str, line: usize) -> Result<Value, ConfigError> {
    if let Some(value) = parse_scalar(piece, line)? {
        return Ok(value);
    }

    if piece.starts_with('{') || piece.ends_with('}') {
        return Err(ConfigError::syntax(
            format!("Invalid value: {}", piece),
            line,
            Some("Arrays cannot be nested"),
            203,
        ));
    }

    if piece.is_empty() {
        return Err(ConfigError::syntax(
            "Invalid value: empty array element",
            line,
            Some("Remove the extra ','"),
            203,
        ));
    }

    Err(invalid_value(piece, line, None))
}

fn invalid_value(text: &str, line: usize, hint: Option<&str>) -> ConfigError {
    ConfigError::syntax(
        format!("Invalid value: {}", text),
        line,
        hint.or(Some("Use digits, a 'quoted string' or an {array}")),
        202,
    )
}
