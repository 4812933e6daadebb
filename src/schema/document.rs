use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Logical names of the published manifest schemas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SchemaKind {
    Installer,
    Locale,
    Version,
    DefaultLocale,
}

impl SchemaKind {
    pub const ALL: [SchemaKind; 4] = [
        SchemaKind::Installer,
        SchemaKind::Locale,
        SchemaKind::Version,
        SchemaKind::DefaultLocale,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SchemaKind::Installer => "installer",
            SchemaKind::Locale => "locale",
            SchemaKind::Version => "version",
            SchemaKind::DefaultLocale => "defaultLocale",
        }
    }
}

impl fmt::Display for SchemaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A decoded JSON Schema document.
///
/// Only the structural facts the semantic checks rely on are exposed:
/// enumerations, length limits and patterns of named definitions.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaDocument {
    root: Value,
}

impl SchemaDocument {
    pub fn new(root: Value) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Value {
        &self.root
    }

    /// Locate a named definition. Draft-07 `definitions` wins over 2019+
    /// `$defs`, which wins over a top-level property.
    pub fn definition(&self, name: &str) -> Option<&Value> {
        ["definitions", "$defs", "properties"]
            .iter()
            .find_map(|section| self.root.get(*section)?.get(name))
    }

    /// String members of the definition's `enum`; `null` members are dropped
    pub fn enumeration(&self, name: &str) -> Option<Vec<&str>> {
        let values = self.definition(name)?.get("enum")?.as_array()?;
        Some(values.iter().filter_map(Value::as_str).collect())
    }

    pub fn max_length(&self, name: &str) -> Option<usize> {
        self.definition(name)?
            .get("maxLength")?
            .as_u64()
            .and_then(|n| usize::try_from(n).ok())
    }

    pub fn pattern(&self, name: &str) -> Option<&str> {
        self.definition(name)?.get("pattern")?.as_str()
    }
}

impl From<Value> for SchemaDocument {
    fn from(root: Value) -> Self {
        Self::new(root)
    }
}
