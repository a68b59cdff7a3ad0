use serde::{Deserialize, Serialize};

use crate::record::{self, FieldMap, RawRecord};

/// A person record reconstructed from one individual-tagged raw record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Individual {
    /// Stable identity, never empty
    pub id: String,

    /// Display name
    pub name: Option<String>,

    /// Birth place, the simplification key
    pub birth_place: Option<String>,

    /// Family in which this individual is a child
    pub parents_family: Option<String>,

    /// Family this individual founded as a spouse
    pub own_family: Option<String>,

    /// Raw record fields, kept for display
    #[serde(default)]
    pub data: FieldMap,
}

impl Individual {
    /// Create an individual with only an identity
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            birth_place: None,
            parents_family: None,
            own_family: None,
            data: FieldMap::new(),
        }
    }

    /// Builder: set the display name
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Builder: set the birth place
    #[must_use]
    pub fn birth_place(mut self, place: impl Into<String>) -> Self {
        self.birth_place = Some(place.into());
        self
    }

    /// Builder: set the child-family reference
    #[must_use]
    pub fn parents_family(mut self, family: impl Into<String>) -> Self {
        self.parents_family = Some(family.into());
        self
    }

    /// Builder: set the spouse-family reference
    #[must_use]
    pub fn own_family(mut self, family: impl Into<String>) -> Self {
        self.own_family = Some(family.into());
        self
    }

    /// Build an individual from a raw record
    ///
    /// Returns `None` when the record has no data block or no usable
    /// identity; every other field is optional.
    #[must_use]
    pub fn from_record(raw: &RawRecord) -> Option<Self> {
        let data = raw.data.as_ref()?;
        let id = required_identity(data)?;

        Some(Self {
            id,
            name: string_field(data, record::KEY_NAME),
            birth_place: string_field(data, record::KEY_BIRTH_PLACE),
            parents_family: string_field(data, record::KEY_CHILD_FAMILY),
            own_family: string_field(data, record::KEY_SPOUSE_FAMILY),
            data: data.clone(),
        })
    }
}

/// A union record linking up to two parents to an ordered set of children
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Family {
    /// Stable identity, never empty
    pub id: String,

    /// Husband reference
    pub husband: Option<String>,

    /// Wife reference
    pub wife: Option<String>,

    /// Child references in record order, primary child first
    #[serde(default)]
    pub children: Vec<String>,

    /// Raw record fields, kept for display
    #[serde(default)]
    pub data: FieldMap,
}

impl Family {
    /// Create a family with only an identity
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            husband: None,
            wife: None,
            children: Vec::new(),
            data: FieldMap::new(),
        }
    }

    /// Builder: set the husband reference
    #[must_use]
    pub fn husband(mut self, id: impl Into<String>) -> Self {
        self.husband = Some(id.into());
        self
    }

    /// Builder: set the wife reference
    #[must_use]
    pub fn wife(mut self, id: impl Into<String>) -> Self {
        self.wife = Some(id.into());
        self
    }

    /// Builder: append a child reference
    #[must_use]
    pub fn child(mut self, id: impl Into<String>) -> Self {
        self.children.push(id.into());
        self
    }

    /// Build a family from a raw record
    ///
    /// The children list is the primary child reference followed by the
    /// additional-children list; absent pieces contribute nothing.
    #[must_use]
    pub fn from_record(raw: &RawRecord) -> Option<Self> {
        let data = raw.data.as_ref()?;
        let id = required_identity(data)?;

        let mut children: Vec<String> = Vec::new();
        if let Some(primary) = string_field(data, record::KEY_CHILD) {
            children.push(primary);
        }
        if let Some(extra) = data.get(record::KEY_EXTRA_CHILDREN) {
            children.extend(extra.as_list().iter().cloned());
        }

        Some(Self {
            id,
            husband: string_field(data, record::KEY_HUSBAND),
            wife: string_field(data, record::KEY_WIFE),
            children,
            data: data.clone(),
        })
    }
}

fn required_identity(data: &FieldMap) -> Option<String> {
    match data.get(record::KEY_IDENTITY)?.as_str() {
        Some(id) if !id.is_empty() => Some(id.to_string()),
        _ => None,
    }
}

fn string_field(data: &FieldMap, key: &str) -> Option<String> {
    data.get(key)?.as_str().map(String::from)
}
