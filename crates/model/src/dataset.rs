use std::path::Path;

use indexmap::IndexMap;

use crate::error::Result;
use crate::record::{self, RecordTree};
use crate::types::{Family, Individual};

/// The two entity maps built from one loaded record file
///
/// Both maps keep record insertion order, which downstream graph
/// construction and traversal ordering rely on. A duplicate identity
/// replaces the earlier value without changing its position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    individuals: IndexMap<String, Individual>,
    families: IndexMap<String, Family>,
}

impl Dataset {
    /// Create an empty dataset
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a dataset from a parsed record tree
    ///
    /// Only individual- and family-tagged records are considered; a record
    /// without a usable identity is skipped rather than failing the load.
    #[must_use]
    pub fn from_tree(tree: &RecordTree) -> Self {
        let mut dataset = Self::new();
        let mut skipped = 0usize;

        for raw in &tree.children {
            match raw.tag.as_str() {
                record::TAG_INDIVIDUAL => match Individual::from_record(raw) {
                    Some(individual) => dataset.insert_individual(individual),
                    None => {
                        skipped += 1;
                        log::debug!("Skipping individual record without identity");
                    }
                },
                record::TAG_FAMILY => match Family::from_record(raw) {
                    Some(family) => dataset.insert_family(family),
                    None => {
                        skipped += 1;
                        log::debug!("Skipping family record without identity");
                    }
                },
                _ => {}
            }
        }

        log::info!(
            "Loaded dataset: {} individuals, {} families ({} records skipped)",
            dataset.individual_count(),
            dataset.family_count(),
            skipped
        );
        dataset
    }

    /// Parse a record tree from JSON and build a dataset from it
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(Self::from_tree(&RecordTree::from_json_str(json)?))
    }

    /// Read a record tree from a JSON file and build a dataset from it
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::from_tree(&RecordTree::from_file(path)?))
    }

    /// Insert an individual, replacing any earlier one with the same id
    pub fn insert_individual(&mut self, individual: Individual) {
        self.individuals.insert(individual.id.clone(), individual);
    }

    /// Insert a family, replacing any earlier one with the same id
    pub fn insert_family(&mut self, family: Family) {
        self.families.insert(family.id.clone(), family);
    }

    /// Look up an individual by id
    #[must_use]
    pub fn individual(&self, id: &str) -> Option<&Individual> {
        self.individuals.get(id)
    }

    /// Look up a family by id
    #[must_use]
    pub fn family(&self, id: &str) -> Option<&Family> {
        self.families.get(id)
    }

    /// Iterate individuals in insertion order
    pub fn individuals(&self) -> impl Iterator<Item = &Individual> {
        self.individuals.values()
    }

    /// Iterate families in insertion order
    pub fn families(&self) -> impl Iterator<Item = &Family> {
        self.families.values()
    }

    /// Iterate `(id, display name)` pairs in insertion order
    ///
    /// This is the feed for name lookup; individuals without a recorded
    /// name are included with `None`.
    pub fn names(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.individuals
            .values()
            .map(|individual| (individual.id.as_str(), individual.name.as_deref()))
    }

    /// Number of individuals
    #[must_use]
    pub fn individual_count(&self) -> usize {
        self.individuals.len()
    }

    /// Number of families
    #[must_use]
    pub fn family_count(&self) -> usize {
        self.families.len()
    }

    /// Check whether the dataset holds no entities at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty() && self.families.is_empty()
    }
}
