// License: MIT

use std::fmt;

use serde::Serialize;

/// A typed value on the right-hand side of a `var` declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Integer(u64),
    Text(String),
    Sequence(Vec<Value>), // flat, elements are Integer or Text
}

impl Value {
    pub fn as_integer(&self) -> Option<u64> {
        if let Value::Integer(n) = self {
            Some(*n)
        } else {
            None
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        if let Value::Text(s) = self {
            Some(s)
        } else {
            None
        }
    }

    pub fn as_sequence(&self) -> Option<&[Value]> {
        if let Value::Sequence(items) = self {
            Some(items)
        } else {
            None
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Integer(_) => "integer",
            Value::Text(_) => "string",
            Value::Sequence(_) => "array",
        }
    }
}

/// Renders the value the way it appears as XML element text: integers in
/// decimal, strings raw, sequences joined with `", "`.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "{}", n),
            Value::Text(s) => f.write_str(s),
            Value::Sequence(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                Ok(())
            }
        }
    }
}

/// One classified source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    Comment,
    /// `var <name> := <expr>;` with the expression still untyped.
    Declaration { name: String, expr: String },
    /// `@[<name>]`
    ConstantRef { name: String },
    Blank,
    Unrecognized(String),
}
