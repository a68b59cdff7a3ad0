use std::collections::HashSet;

use pedigree_graph::{AncestryEntry, ParentLink, ParentRole};
use pedigree_model::{Dataset, Individual};
use serde::{Deserialize, Serialize};

/// One renderable person node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartNode {
    /// Individual id
    pub id: String,

    /// Display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Secondary display text (the birth place)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Birth place, the chain-simplification key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_place: Option<String>,

    /// Set when this node heads a same-birthplace ancestor run
    #[serde(skip_serializing_if = "Option::is_none")]
    pub same_location: Option<bool>,

    /// Aggregated length of the run this node represents
    #[serde(skip_serializing_if = "Option::is_none")]
    pub same_location_count: Option<u32>,
}

impl ChartNode {
    /// Create a bare node
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: None,
            description: None,
            birth_place: None,
            same_location: None,
            same_location_count: None,
        }
    }

    /// Builder: set the display name
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Builder: set the birth place (also used as the description)
    #[must_use]
    pub fn birth_place(mut self, place: impl Into<String>) -> Self {
        let place = place.into();
        self.description = Some(place.clone());
        self.birth_place = Some(place);
        self
    }

    /// Map an individual to its renderable node
    #[must_use]
    pub fn from_individual(individual: &Individual) -> Self {
        Self {
            id: individual.id.clone(),
            label: individual.name.clone(),
            description: individual.birth_place.clone(),
            birth_place: individual.birth_place.clone(),
            same_location: None,
            same_location_count: None,
        }
    }
}

/// One renderable parent→child edge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartEdge {
    /// Parent node id
    pub source: String,

    /// Child node id
    pub target: String,

    /// Parent role; serializes as `"father"` or `"mother"` and doubles as
    /// the renderer's style class
    pub role: ParentRole,
}

impl ChartEdge {
    /// Create an edge
    #[must_use]
    pub fn new(source: impl Into<String>, target: impl Into<String>, role: ParentRole) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            role,
        }
    }
}

/// The node/edge list handed to the external renderer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartElements {
    /// Nodes in materialization order
    pub nodes: Vec<ChartNode>,

    /// Edges in materialization order
    pub edges: Vec<ChartEdge>,
}

/// Map kept ancestry entries to renderable nodes and role-tagged edges
///
/// Per entry: the entry's own individual becomes a node (added once across
/// all entries), and at most one father-role and one mother-role link from
/// its newly-discovered parents become parent nodes plus edges into the
/// child. An entry whose own individual is missing from the dataset
/// contributes nothing, and a link whose parent is missing is omitted
/// silently; incomplete data thins the chart instead of failing it.
#[must_use]
pub fn materialize(dataset: &Dataset, entries: &[AncestryEntry]) -> ChartElements {
    let mut elements = ChartElements::default();
    let mut seen: HashSet<String> = HashSet::new();

    for entry in entries {
        let Some(own) = dataset.individual(&entry.id) else {
            continue;
        };
        push_once(&mut elements.nodes, &mut seen, own);

        for link in chosen_parents(&entry.discovered) {
            let Some(parent) = dataset.individual(&link.id) else {
                continue;
            };
            push_once(&mut elements.nodes, &mut seen, parent);
            elements
                .edges
                .push(ChartEdge::new(parent.id.clone(), own.id.clone(), link.role));
        }
    }

    elements
}

/// First father-role link and first mother-role link, in that order
fn chosen_parents(discovered: &[ParentLink]) -> impl Iterator<Item = &ParentLink> {
    let father = discovered.iter().find(|l| l.role == ParentRole::Father);
    let mother = discovered.iter().find(|l| l.role == ParentRole::Mother);
    father.into_iter().chain(mother)
}

fn push_once(nodes: &mut Vec<ChartNode>, seen: &mut HashSet<String>, individual: &Individual) {
    if seen.insert(individual.id.clone()) {
        nodes.push(ChartNode::from_individual(individual));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pedigree_graph::LineageGraph;
    use pedigree_model::Family;
    use pretty_assertions::assert_eq;

    fn sample_dataset() -> Dataset {
        let mut dataset = Dataset::new();
        dataset.insert_individual(Individual::new("@I1@").name("Ana").birth_place("Lisboa"));
        dataset.insert_individual(Individual::new("@I2@").name("Rui").birth_place("Porto"));
        dataset.insert_individual(Individual::new("@I3@").name("Eva"));
        dataset.insert_family(
            Family::new("@F1@")
                .husband("@I2@")
                .wife("@I3@")
                .child("@I1@"),
        );
        dataset
    }

    fn entries_for(dataset: &Dataset, root: &str) -> Vec<AncestryEntry> {
        LineageGraph::from_dataset(dataset).ancestors(root)
    }

    #[test]
    fn test_materialize_nodes_and_edges() {
        let dataset = sample_dataset();
        let elements = materialize(&dataset, &entries_for(&dataset, "@I1@"));

        let ids: Vec<&str> = elements.nodes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, ["@I1@", "@I2@", "@I3@"]);
        assert_eq!(
            elements.edges,
            [
                ChartEdge::new("@I2@", "@I1@", ParentRole::Father),
                ChartEdge::new("@I3@", "@I1@", ParentRole::Mother),
            ]
        );

        let ana = &elements.nodes[0];
        assert_eq!(ana.label.as_deref(), Some("Ana"));
        assert_eq!(ana.description.as_deref(), Some("Lisboa"));
        assert_eq!(ana.birth_place.as_deref(), Some("Lisboa"));
        assert_eq!(ana.same_location, None);
    }

    #[test]
    fn test_nodes_are_deduplicated_across_entries() {
        let dataset = sample_dataset();
        let elements = materialize(&dataset, &entries_for(&dataset, "@I1@"));

        let mut ids: Vec<&str> = elements.nodes.iter().map(|n| n.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), elements.nodes.len());
    }

    #[test]
    fn test_sole_wife_yields_mother_edge() {
        let mut dataset = Dataset::new();
        dataset.insert_individual(Individual::new("@I1@"));
        dataset.insert_individual(Individual::new("@I3@").name("Eva"));
        dataset.insert_family(Family::new("@F1@").wife("@I3@").child("@I1@"));

        let elements = materialize(&dataset, &entries_for(&dataset, "@I1@"));
        assert_eq!(
            elements.edges,
            [ChartEdge::new("@I3@", "@I1@", ParentRole::Mother)]
        );
    }

    #[test]
    fn test_dangling_parent_is_omitted() {
        // @I3@ is referenced by @F1@ but absent from the individual map
        let mut dataset = Dataset::new();
        dataset.insert_individual(Individual::new("@I1@").birth_place("Lisboa"));
        dataset.insert_individual(Individual::new("@I2@").name("Rui"));
        dataset.insert_family(
            Family::new("@F1@")
                .husband("@I2@")
                .wife("@I3@")
                .child("@I1@"),
        );

        let elements = materialize(&dataset, &entries_for(&dataset, "@I1@"));
        let ids: Vec<&str> = elements.nodes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, ["@I1@", "@I2@"]);
        assert_eq!(
            elements.edges,
            [ChartEdge::new("@I2@", "@I1@", ParentRole::Father)]
        );
    }

    #[test]
    fn test_unresolvable_entry_contributes_nothing() {
        let dataset = sample_dataset();
        let entries = [AncestryEntry::new("@I99@", vec![])];

        let elements = materialize(&dataset, &entries);
        assert_eq!(elements, ChartElements::default());
    }

    #[test]
    fn test_wire_shape() {
        let dataset = sample_dataset();
        let elements = materialize(&dataset, &entries_for(&dataset, "@I1@"));

        let value = serde_json::to_value(&elements).unwrap();
        assert_eq!(value["nodes"][0]["id"], "@I1@");
        assert_eq!(value["nodes"][0]["label"], "Ana");
        assert_eq!(value["nodes"][0]["birthPlace"], "Lisboa");
        assert!(value["nodes"][0].get("sameLocation").is_none());
        assert_eq!(value["edges"][0]["role"], "father");
        assert_eq!(value["edges"][1]["role"], "mother");
    }
}
