// License: MIT

pub mod ast;
pub mod error;
pub mod export;
pub mod input;
pub mod lexer;
pub mod parser;
pub mod config;

pub use ast::{Statement, Value};
pub use error::ConfigError;
pub use config::ParsedConfig;
pub use export::{convert, convert_with, to_json, XmlOptions};
pub use parser::parse;
