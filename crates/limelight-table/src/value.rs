//! Primitive values stored in a table entry.

use core::fmt;

use serde::{Deserialize, Serialize};

/// A single table entry value.
///
/// Mode fields are published as numbers; booleans are only read (`tv`).
/// Serialises untagged, so a table snapshot reads as plain JSON/YAML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TableValue {
    /// Boolean entry.
    Boolean(bool),
    /// Double-precision number entry.
    Number(f64),
    /// String entry.
    String(String),
}

impl TableValue {
    /// Returns the boolean payload, or `None` for other types.
    #[must_use]
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            Self::Boolean(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the numeric payload, or `None` for other types.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the string payload, or `None` for other types.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v),
            _ => None,
        }
    }

    /// Name of the stored type, used in log fields.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Boolean(_) => "boolean",
            Self::Number(_) => "number",
            Self::String(_) => "string",
        }
    }
}

impl fmt::Display for TableValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Boolean(v) => write!(f, "{v}"),
            Self::Number(v) => write!(f, "{v}"),
            Self::String(v) => write!(f, "{v:?}"),
        }
    }
}

impl From<bool> for TableValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<f64> for TableValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for TableValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for TableValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}
