// License: MIT

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use indexmap::IndexMap;
use log::debug;
use serde::Serialize;

use crate::ast::Value;
use crate::parser;
use crate::ConfigError;

mod access;
mod conversion;

/// The result of a parse: declared variables and realized constants, both in
/// declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedConfig {
    pub(crate) variables: IndexMap<String, Value>,
    pub(crate) constants: IndexMap<String, Value>,
}

impl ParsedConfig {
    /// Load and parse a configuration file. A leading `~/` is expanded to
    /// the home directory.
    ///
    /// # Example
    /// ```ignore
    /// let config = ParsedConfig::from_file("settings.cfg")?;
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let raw = path.as_ref().to_string_lossy().to_string();
        let resolved = resolve_path(&raw)?;

        let content = fs::read_to_string(&resolved).map_err(|e| ConfigError::FileError {
            message: format!("Failed to read file: {}", e),
            path: resolved.to_string_lossy().to_string(),
            hint: Some("Check that the file exists and is readable".into()),
            code: Some(301),
        })?;

        debug!("loaded {} byte(s) from {}", content.len(), resolved.display());
        content.parse()
    }

    pub fn variables(&self) -> &IndexMap<String, Value> {
        &self.variables
    }

    pub fn constants(&self) -> &IndexMap<String, Value> {
        &self.constants
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty() && self.constants.is_empty()
    }
}

impl FromStr for ParsedConfig {
    type Err = ConfigError;

    fn from_str(content: &str) -> Result<Self, Self::Err> {
        parser::parse(content)
    }
}

/// Expand "~/" against the home directory; everything else is used as given.
fn resolve_path(raw_path: &str) -> Result<PathBuf, ConfigError> {
    if let Some(rest) = raw_path.strip_prefix("~/") {
        let home = dirs::home_dir().ok_or_else(|| ConfigError::FileError {
            message: "Could not determine home directory for ~ expansion".into(),
            path: raw_path.to_string(),
            hint: Some("Set HOME or use an absolute path".into()),
            code: Some(300),
        })?;
        return Ok(home.join(rest));
    }
    Ok(PathBuf::from(raw_path))
}
