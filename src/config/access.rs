// License: MIT

use super::*;

impl ParsedConfig {
    pub fn variable(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }

    pub fn constant(&self, name: &str) -> Option<&Value> {
        self.constants.get(name)
    }

    pub fn has_variable(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    pub fn has_constant(&self, name: &str) -> bool {
        self.constants.contains_key(name)
    }

    /// Variable names in declaration order.
    pub fn variable_names(&self) -> Vec<&str> {
        self.variables.keys().map(String::as_str).collect()
    }

    /// Constant names in the order they were first realized.
    pub fn constant_names(&self) -> Vec<&str> {
        self.constants.keys().map(String::as_str).collect()
    }

    /// Get a typed variable value.
    ///
    /// # Examples
    /// ```
    /// # use varcfg::ParsedConfig;
    /// let config: ParsedConfig = "var port := 8080;\nvar hosts := {'a', 'b'};".parse().unwrap();
    /// let port: u64 = config.get("port").unwrap();
    /// let hosts: Vec<String> = config.get("hosts").unwrap();
    /// assert_eq!(port, 8080);
    /// assert_eq!(hosts, vec!["a", "b"]);
    /// ```
    ///
    /// # Errors
    /// `NotFound` if the name was never declared, `TypeError` if the value
    /// cannot be converted to `T`.
    pub fn get<T>(&self, name: &str) -> Result<T, ConfigError>
    where
        T: TryFrom<Value, Error = ConfigError>,
    {
        lookup(&self.variables, name, "variable").and_then(T::try_from)
    }

    /// Like [`ParsedConfig::get`] but reads from the constants.
    pub fn get_constant<T>(&self, name: &str) -> Result<T, ConfigError>
    where
        T: TryFrom<Value, Error = ConfigError>,
    {
        lookup(&self.constants, name, "constant").and_then(T::try_from)
    }

    /// Get a variable or fall back to `default` when it is missing or has
    /// the wrong type.
    pub fn get_or<T>(&self, name: &str, default: T) -> T
    where
        T: TryFrom<Value, Error = ConfigError>,
    {
        self.get(name).unwrap_or(default)
    }
}

fn lookup(map: &IndexMap<String, Value>, name: &str, kind: &str) -> Result<Value, ConfigError> {
    map.get(name).cloned().ok_or_else(|| ConfigError::NotFound {
        name: name.to_string(),
        hint: Some(format!("No {} named '{}' was declared", kind, name)),
        code: Some(304),
    })
}
