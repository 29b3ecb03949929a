// License: MIT

//! Serializers for a [`ParsedConfig`].
//!
//! The XML form is the primary output:
//!
//! ```text
//! <configuration>
//!     <variables>
//!         <variable name="x">42</variable>
//!     </variables>
//!     <constants>
//!         <constant name="x">42</constant>
//!     </constants>
//! </configuration>
//! ```
//!
//! Values are rendered as element text: integers in decimal, strings raw,
//! arrays joined with `", "`. Only `&`, `<` and `>` are escaped in text.

use html_escape::{encode_double_quoted_attribute, encode_text};
use indexmap::IndexMap;

use crate::ast::Value;
use crate::config::ParsedConfig;
use crate::ConfigError;

/// Formatting knobs for [`convert_with`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlOptions {
    /// Spaces per nesting level.
    pub indent: usize,
    /// Emit `<?xml version="1.0" encoding="utf-8"?>` first.
    pub declaration: bool,
}

impl Default for XmlOptions {
    fn default() -> Self {
        Self {
            indent: 4,
            declaration: true,
        }
    }
}

/// Convert a configuration to an indented XML document using the default
/// [`XmlOptions`].
///
/// # Examples
/// ```
/// use varcfg::{export, parse};
///
/// let config = parse("var x := 10;\n@[x]").unwrap();
/// let xml = export::convert(&config);
/// assert!(xml.contains(r#"<variable name="x">10</variable>"#));
/// assert!(xml.contains(r#"<constant name="x">10</constant>"#));
/// ```
pub fn convert(config: &ParsedConfig) -> String {
    convert_with(config, &XmlOptions::default())
}

pub fn convert_with(config: &ParsedConfig, options: &XmlOptions) -> String {
    let mut out = String::with_capacity(256);
    if options.declaration {
        out.push_str("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n");
    }

    out.push_str("<configuration>\n");
    write_group(&mut out, options, "variables", "variable", &config.variables);
    write_group(&mut out, options, "constants", "constant", &config.constants);
    out.push_str("</configuration>\n");
    out
}

fn indent(out: &mut String, options: &XmlOptions, level: usize) {
    for _ in 0..level * options.indent {
        out.push(' ');
    }
}

fn write_group(
    out: &mut String,
    options: &XmlOptions,
    group: &str,
    tag: &str,
    entries: &IndexMap<String, Value>,
) {
    indent(out, options, 1);
    if entries.is_empty() {
        // <variables/> when there is nothing to list
        out.push_str(&format!("<{}/>\n", group));
        return;
    }

    out.push_str(&format!("<{}>\n", group));
    for (name, value) in entries {
        indent(out, options, 2);
        out.push_str(&format!(
            "<{tag} name=\"{}\">{}</{tag}>\n",
            encode_double_quoted_attribute(name),
            encode_text(&value.to_string()),
        ));
    }
    indent(out, options, 1);
    out.push_str(&format!("</{}>\n", group));
}

/// Export a configuration to pretty-printed JSON.
///
/// Both maps keep declaration order:
/// - integers → JSON numbers
/// - strings → JSON strings
/// - arrays → JSON arrays
pub fn to_json(config: &ParsedConfig) -> Result<String, ConfigError> {
    // Serialized straight from the ordered maps; a serde_json::Value would
    // re-sort the keys.
    Ok(serde_json::to_string_pretty(config)?)
}
