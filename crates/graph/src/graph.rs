use indexmap::IndexMap;
use pedigree_model::Dataset;

use crate::types::{ParentLink, ParentRole};

/// Child→parents adjacency derived from all family records
///
/// Vertices are individual ids keyed in an insertion-ordered arena, so ids
/// referenced by a family but missing from the individual map are ordinary
/// vertices too; resolving them to a display entity is the caller's concern.
/// Per-child link order follows family insertion order, husband before wife
/// within a family, and duplicate links across disagreeing family records
/// are kept rather than silently deduplicated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineageGraph {
    adjacency: IndexMap<String, Vec<ParentLink>>,
}

impl LineageGraph {
    /// Create an empty graph
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the graph from a dataset's family records
    #[must_use]
    pub fn from_dataset(dataset: &Dataset) -> Self {
        let mut graph = Self::new();

        for family in dataset.families() {
            if let Some(husband) = &family.husband {
                for child in &family.children {
                    graph.add_edge(husband, ParentRole::Father, child);
                }
            }
            if let Some(wife) = &family.wife {
                for child in &family.children {
                    graph.add_edge(wife, ParentRole::Mother, child);
                }
            }
        }

        log::info!(
            "Built lineage graph: {} vertices, {} edges",
            graph.vertex_count(),
            graph.edge_count()
        );
        graph
    }

    /// Ensure a vertex exists, with an empty adjacency entry if new
    pub fn add_vertex(&mut self, id: impl Into<String>) {
        self.adjacency.entry(id.into()).or_default();
    }

    /// Record `parent` as a role-tagged parent of `child`
    ///
    /// Both endpoints become vertices if they were not already; the link is
    /// appended to the child's list even when an equal link is present.
    pub fn add_edge(
        &mut self,
        parent: impl Into<String>,
        role: ParentRole,
        child: impl Into<String>,
    ) {
        let parent = parent.into();
        self.add_vertex(parent.clone());
        self.adjacency
            .entry(child.into())
            .or_default()
            .push(ParentLink { id: parent, role });
    }

    /// Remove every link between `a` and `b`, in both directions
    pub fn remove_edge(&mut self, a: &str, b: &str) {
        if let Some(links) = self.adjacency.get_mut(a) {
            links.retain(|link| link.id != b);
        }
        if let Some(links) = self.adjacency.get_mut(b) {
            links.retain(|link| link.id != a);
        }
    }

    /// Remove a vertex and scrub it from every remaining adjacency list
    pub fn remove_vertex(&mut self, id: &str) {
        self.adjacency.shift_remove(id);
        for links in self.adjacency.values_mut() {
            links.retain(|link| link.id != id);
        }
    }

    /// Parents of an individual; an unknown id yields an empty slice
    #[must_use]
    pub fn parents_of(&self, id: &str) -> &[ParentLink] {
        self.adjacency.get(id).map_or(&[], Vec::as_slice)
    }

    /// Check whether an id is a vertex
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.adjacency.contains_key(id)
    }

    /// Number of vertices
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of parent links
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// Check whether the graph has no vertices
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Iterate `(child id, parent links)` in vertex insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[ParentLink])> {
        self.adjacency
            .iter()
            .map(|(id, links)| (id.as_str(), links.as_slice()))
    }
}
