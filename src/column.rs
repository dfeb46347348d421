//! Declared column types and the column spec.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SheetError};
use crate::header::normalize_header;

/// Declared type of a column's cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    String,
    Boolean,
    Array,
}

impl ColumnType {
    pub fn as_str(self) -> &'static str {
        match self {
            ColumnType::String => "string",
            ColumnType::Boolean => "boolean",
            ColumnType::Array => "array",
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColumnType {
    type Err = SheetError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "string" => Ok(ColumnType::String),
            "boolean" => Ok(ColumnType::Boolean),
            "array" => Ok(ColumnType::Array),
            other => Err(SheetError::InvalidColumnType(other.to_string())),
        }
    }
}

/// Caller-declared mapping of canonical header to expected column type.
///
/// Keys are normalized at construction with the same routine applied to
/// fetched headers, so declaration and remote data are compared on equal
/// footing. Immutable for the life of the sheet.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(from = "HashMap<String, ColumnType>")]
pub struct ColumnSpec {
    types: HashMap<String, ColumnType>,
}

impl ColumnSpec {
    pub fn new<K, I>(columns: I) -> Self
    where
        K: AsRef<str>,
        I: IntoIterator<Item = (K, ColumnType)>,
    {
        let types = columns
            .into_iter()
            .map(|(k, v)| (normalize_header(k.as_ref()), v))
            .collect();
        ColumnSpec { types }
    }

    /// Declared type of a canonical header, if any.
    pub fn get(&self, header: &str) -> Option<ColumnType> {
        self.types.get(header).copied()
    }

    pub fn contains(&self, header: &str) -> bool {
        self.types.contains_key(header)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl From<HashMap<String, ColumnType>> for ColumnSpec {
    fn from(columns: HashMap<String, ColumnType>) -> Self {
        ColumnSpec::new(columns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_type_from_str() {
        assert_eq!("string".parse::<ColumnType>().unwrap(), ColumnType::String);
        assert_eq!("boolean".parse::<ColumnType>().unwrap(), ColumnType::Boolean);
        assert_eq!("array".parse::<ColumnType>().unwrap(), ColumnType::Array);
    }

    #[test]
    fn test_column_type_from_str_rejects_unknown_tag() {
        let err = "number".parse::<ColumnType>().unwrap_err();
        assert!(matches!(err, SheetError::InvalidColumnType(t) if t == "number"));
    }

    #[test]
    fn test_spec_normalizes_keys() {
        let spec = ColumnSpec::new([
            (" Name ", ColumnType::String),
            ("Tag  List", ColumnType::Array),
        ]);
        assert_eq!(spec.get("name"), Some(ColumnType::String));
        assert_eq!(spec.get("tag_list"), Some(ColumnType::Array));
        assert!(!spec.contains("Name"));
    }

    #[test]
    fn test_spec_from_toml_config() {
        let spec: ColumnSpec = toml::from_str(
            r#"
            "Full Name" = "string"
            active = "boolean"
            tags = "array"
            "#,
        )
        .unwrap();
        assert_eq!(spec.len(), 3);
        assert_eq!(spec.get("full_name"), Some(ColumnType::String));
        assert_eq!(spec.get("active"), Some(ColumnType::Boolean));
        assert_eq!(spec.get("tags"), Some(ColumnType::Array));
    }

    #[test]
    fn test_spec_from_toml_rejects_unknown_type_tag() {
        let result: std::result::Result<ColumnSpec, _> = toml::from_str(r#"age = "number""#);
        assert!(result.is_err());
    }
}
