//! Localization file parsers.
//!
//! Every supported format implements [`EntityParser`] and is registered in
//! [`FormatParser`]. [`parser_for`] picks the parser from the file extension:
//!
//! - `ftl`: Fluent (uses fluent-syntax)
//! - `properties`: Java-style properties
//! - `ini`: INI files
//! - `dtd`: XML entity declarations
//! - `json`: nested JSON message files

pub mod dtd;
pub mod fluent;
pub mod ini;
pub mod json;
pub mod properties;

use std::{fs, path::Path};

use anyhow::{Context, Result};
use enum_dispatch::enum_dispatch;

pub use dtd::DtdParser;
pub use fluent::FluentParser;
pub use ini::IniParser;
pub use json::JsonParser;
pub use properties::PropertiesParser;

/// One translatable unit of a localization file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    pub key: String,
    /// The value as written in the file, without unescaping.
    pub raw_val: String,
}

impl Entity {
    pub fn new(key: impl Into<String>, raw_val: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            raw_val: raw_val.into(),
        }
    }
}

/// Turns file content into entities, in file order.
#[enum_dispatch]
pub trait EntityParser {
    fn parse(&self, content: &str) -> Result<Vec<Entity>>;

    /// Read and parse a file.
    fn parse_file(&self, path: &Path) -> Result<Vec<Entity>> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;
        self.parse(&content)
            .with_context(|| format!("Failed to parse file: {}", path.display()))
    }
}

#[enum_dispatch(EntityParser)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatParser {
    Fluent(FluentParser),
    Properties(PropertiesParser),
    Ini(IniParser),
    Dtd(DtdParser),
    Json(JsonParser),
}

/// Select the parser for a file, or `None` if its format is not supported.
pub fn parser_for(path: &Path) -> Option<FormatParser> {
    let parser: FormatParser = match path.extension()?.to_str()? {
        "ftl" => FluentParser.into(),
        "properties" => PropertiesParser.into(),
        "ini" => IniParser.into(),
        "dtd" => DtdParser.into(),
        "json" => JsonParser.into(),
        _ => return None,
    };
    Some(parser)
}
