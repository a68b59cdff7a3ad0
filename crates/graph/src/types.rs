use serde::{Deserialize, Serialize};

/// Which family field contributed a lineage edge
///
/// Recorded at graph construction so the presentation layer never has to
/// infer a parent's role from discovery order. The lowercase string doubles
/// as the edge's display label and style class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParentRole {
    /// Edge contributed by a family's husband reference
    Father,
    /// Edge contributed by a family's wife reference
    Mother,
}

impl ParentRole {
    /// Get the wire/display name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Father => "father",
            Self::Mother => "mother",
        }
    }
}

impl std::fmt::Display for ParentRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One child→parent adjacency entry: a parent id tagged with its role
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParentLink {
    /// Parent individual id
    pub id: String,

    /// Role the parent holds in the contributing family
    pub role: ParentRole,
}

impl ParentLink {
    /// Create a link
    #[must_use]
    pub fn new(id: impl Into<String>, role: ParentRole) -> Self {
        Self {
            id: id.into(),
            role,
        }
    }
}

/// One breadth-first expansion step: a visited individual and the parent
/// links newly discovered through it
///
/// A leaf ancestor still produces an entry with an empty `discovered` list,
/// signaling that no further ancestors are known.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AncestryEntry {
    /// The individual dequeued at this step
    pub id: String,

    /// Parents first reached through this individual, in adjacency order
    #[serde(default)]
    pub discovered: Vec<ParentLink>,
}

impl AncestryEntry {
    /// Create an entry
    #[must_use]
    pub fn new(id: impl Into<String>, discovered: Vec<ParentLink>) -> Self {
        Self {
            id: id.into(),
            discovered,
        }
    }
}
