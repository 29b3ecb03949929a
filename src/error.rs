// License: MIT

use std::fmt;

/// The main error type for parsing, loading and exporting configurations.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Raised for an undefined constant reference or a malformed value.
    SyntaxError {
        message: String,
        line: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    FileError {
        message: String,
        path: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// Raised by typed access when a name is not declared.
    NotFound {
        name: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    TypeError {
        message: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    ExportError {
        message: String,
        code: Option<u32>,
    },
}

impl ConfigError {
    pub(crate) fn syntax(message: impl Into<String>, line: usize, hint: Option<&str>, code: u32) -> Self {
        ConfigError::SyntaxError {
            message: message.into(),
            line,
            hint: hint.map(Into::into),
            code: Some(code),
        }
    }

    /// The bare message, without position, hint or code.
    pub fn message(&self) -> String {
        match self {
            ConfigError::SyntaxError { message, .. }
            | ConfigError::FileError { message, .. }
            | ConfigError::TypeError { message, .. }
            | ConfigError::ExportError { message, .. } => message.clone(),
            ConfigError::NotFound { name, .. } => format!("'{}' is not defined", name),
        }
    }

    pub fn code(&self) -> Option<u32> {
        match self {
            ConfigError::SyntaxError { code, .. }
            | ConfigError::FileError { code, .. }
            | ConfigError::NotFound { code, .. }
            | ConfigError::TypeError { code, .. }
            | ConfigError::ExportError { code, .. } => *code,
        }
    }

    pub fn is_syntax_error(&self) -> bool {
        matches!(self, ConfigError::SyntaxError { .. })
    }
}

fn hint_suffix(hint: &Option<String>) -> String {
    hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h))
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::SyntaxError { message, line, hint, .. } =>
                write!(f, "Syntax error at line {}: {}{}", line, message, hint_suffix(hint)),
            ConfigError::FileError { message, path, hint, .. } =>
                write!(f, "File error '{}': {}{}", path, message, hint_suffix(hint)),
            ConfigError::NotFound { name, hint, .. } =>
                write!(f, "'{}' is not defined{}", name, hint_suffix(hint)),
            ConfigError::TypeError { message, hint, .. } =>
                write!(f, "Type error: {}{}", message, hint_suffix(hint)),
            ConfigError::ExportError { message, .. } =>
                write!(f, "Export error: {}", message),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::ExportError {
            message: e.to_string(),
            code: Some(500),
        }
    }
}
