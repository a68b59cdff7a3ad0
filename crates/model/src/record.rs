use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Record tag for an individual
pub const TAG_INDIVIDUAL: &str = "INDI";

/// Record tag for a family
pub const TAG_FAMILY: &str = "FAM";

/// Field key carrying a record's identity
pub const KEY_IDENTITY: &str = "xref_id";

/// Field key for an individual's display name
pub const KEY_NAME: &str = "NAME";

/// Field key for an individual's birth place
pub const KEY_BIRTH_PLACE: &str = "BIRTH/PLACE";

/// Field key referencing the family an individual founded as a spouse
pub const KEY_SPOUSE_FAMILY: &str = "@FAMILY_SPOUSE";

/// Field key referencing the family an individual belongs to as a child
pub const KEY_CHILD_FAMILY: &str = "@FAMILY_CHILD";

/// Field key referencing a family's husband
pub const KEY_HUSBAND: &str = "@HUSBAND";

/// Field key referencing a family's wife
pub const KEY_WIFE: &str = "@WIFE";

/// Field key referencing a family's primary child
pub const KEY_CHILD: &str = "@CHILD";

/// Field key carrying a family's additional children
pub const KEY_EXTRA_CHILDREN: &str = "+@CHILD";

/// Flat field map attached to a raw record
pub type FieldMap = IndexMap<String, FieldValue>;

/// A single field value in a raw record's data map
///
/// The upstream record parser compacts repeated fields into lists and leaves
/// everything else as plain strings; anything it may emit beyond that is kept
/// opaque rather than rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Single string value
    Single(String),
    /// Repeated field collapsed into a list
    Many(Vec<String>),
    /// Any other JSON value, kept for passthrough display
    Other(serde_json::Value),
}

impl FieldValue {
    /// Get the value as a single string, if it is one
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Single(value) => Some(value),
            _ => None,
        }
    }

    /// Get the value as a list of strings
    ///
    /// A single value is treated as a one-element list; opaque values
    /// contribute nothing.
    #[must_use]
    pub fn as_list(&self) -> &[String] {
        match self {
            Self::Single(value) => std::slice::from_ref(value),
            Self::Many(values) => values,
            Self::Other(_) => &[],
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Single(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Single(value)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(values: Vec<String>) -> Self {
        Self::Many(values)
    }
}

/// One top-level record of the generic labeled tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    /// Record tag, e.g. `INDI` or `FAM`
    #[serde(rename = "type")]
    pub tag: String,

    /// Flat field map, absent for structural records
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<FieldMap>,
}

impl RawRecord {
    /// Create a record with an empty data map
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            data: Some(FieldMap::new()),
        }
    }

    /// Builder: set a field value
    #[must_use]
    pub fn field(mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.data
            .get_or_insert_with(FieldMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Look up a single-string field
    #[must_use]
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.data.as_ref()?.get(key)?.as_str()
    }
}

/// The generic labeled tree produced by the external record parser
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordTree {
    /// Top-level records in file order
    #[serde(default)]
    pub children: Vec<RawRecord>,
}

impl RecordTree {
    /// Parse a record tree from its JSON serialization
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a record tree from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}
