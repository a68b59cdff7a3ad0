use std::collections::{HashMap, HashSet};

use crate::elements::{ChartElements, ChartNode};

/// Collapse same-birthplace ancestor chains into annotated counts
///
/// One fixed pass over the node list, never iterated to a fixed point. Per
/// node, the comparison set is its own birthplace plus the birthplaces of
/// every edge source currently pointing into it; when the set has more than
/// one member and all are equal the node is flagged, its count aggregates
/// the flagged parents' counts, and parent edges whose source is a dead end
/// (no incoming edges at that moment) are pruned. Nodes are never removed.
///
/// Flags are computed into an overlay and applied at the end, so node reads
/// are order-insensitive; edge pruning stays visible to later nodes within
/// the pass, exactly once. Nodes already flagged on input are skipped, which
/// makes a second run over simplified output a strict no-op.
#[must_use]
pub fn simplify(elements: ChartElements) -> ChartElements {
    let ChartElements { nodes, mut edges } = elements;

    let locations: HashMap<&str, Option<&str>> = nodes
        .iter()
        .map(|node| (node.id.as_str(), node.birth_place.as_deref()))
        .collect();

    // Counts carried over from an earlier run stay authoritative
    let mut annotations: HashMap<String, u32> = nodes
        .iter()
        .filter_map(|node| node.same_location_count.map(|count| (node.id.clone(), count)))
        .collect();

    for node in &nodes {
        if node.same_location == Some(true) {
            continue;
        }

        let parents: Vec<&str> = edges
            .iter()
            .filter(|edge| edge.target == node.id)
            .map(|edge| edge.source.as_str())
            .collect();

        let mut places: Vec<Option<&str>> = Vec::with_capacity(parents.len() + 1);
        places.push(node.birth_place.as_deref());
        for parent in &parents {
            places.push(locations.get(parent).copied().flatten());
        }
        if !all_equal(&places) {
            continue;
        }

        let count = 1 + parents
            .iter()
            .map(|parent| annotations.get(*parent).copied().unwrap_or(0))
            .sum::<u32>();
        annotations.insert(node.id.clone(), count);

        // Drop parent edges whose source is a dead end, judged against the
        // edge list as it stands at this step
        let targets: HashSet<String> = edges.iter().map(|edge| edge.target.clone()).collect();
        edges.retain(|edge| !(edge.target == node.id && !targets.contains(&edge.source)));
    }

    let nodes: Vec<ChartNode> = nodes
        .into_iter()
        .map(|mut node| {
            if let Some(count) = annotations.get(&node.id) {
                node.same_location = Some(true);
                node.same_location_count = Some(*count);
            }
            node
        })
        .collect();

    ChartElements { nodes, edges }
}

/// More than one member and all equal; absent places compare equal
fn all_equal(places: &[Option<&str>]) -> bool {
    places.len() > 1 && places.iter().all(|place| *place == places[0])
}
