// License: MIT

use crate::{ConfigError, Value};

fn type_error(expected: &str, value: &Value, code: u32) -> ConfigError {
    ConfigError::TypeError {
        message: format!("Expected {}, got {} {}", expected, value.type_name(), value),
        hint: None,
        code: Some(code),
    }
}

impl TryFrom<Value> for String {
    type Error = ConfigError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        value
            .as_text()
            .map(str::to_string)
            .ok_or_else(|| type_error("string", &value, 401))
    }
}

impl TryFrom<Value> for u64 {
    type Error = ConfigError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        value.as_integer().ok_or_else(|| type_error("integer", &value, 402))
    }
}

impl TryFrom<Value> for i64 {
    type Error = ConfigError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let n = u64::try_from(value)?;
        i64::try_from(n).map_err(|_| ConfigError::TypeError {
            message: format!("Integer {} out of range for i64", n),
            hint: None,
            code: Some(407),
        })
    }
}

impl TryFrom<Value> for u32 {
    type Error = ConfigError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let n = u64::try_from(value)?;
        u32::try_from(n).map_err(|_| ConfigError::TypeError {
            message: format!("Integer {} out of range for u32", n),
            hint: Some("Use a number between 0 and 4294967295".into()),
            code: Some(407),
        })
    }
}

impl<T> TryFrom<Value> for Vec<T>
where
    T: TryFrom<Value, Error = ConfigError>,
{
    type Error = ConfigError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let items = value
            .as_sequence()
            .ok_or_else(|| type_error("array", &value, 405))?;
        items.iter().cloned().map(T::try_from).collect()
    }
}
