use pedigree_graph::AncestryEntry;
use pedigree_model::Dataset;

use crate::config::ChartOptions;
use crate::elements::{materialize, ChartElements};
use crate::simplify::simplify;

/// Turn an ancestry expansion into renderable chart elements
///
/// Truncates the entry sequence per the options, materializes nodes and
/// edges, and optionally runs the chain simplifier. Truncation happens here
/// rather than inside the traversal so the expansion itself stays pure.
#[must_use]
pub fn assemble(
    dataset: &Dataset,
    entries: &[AncestryEntry],
    options: &ChartOptions,
) -> ChartElements {
    let kept = match options.limit {
        Some(limit) => &entries[..limit.min(entries.len())],
        None => entries,
    };

    let elements = materialize(dataset, kept);
    log::debug!(
        "Materialized {} nodes and {} edges from {} of {} entries",
        elements.nodes.len(),
        elements.edges.len(),
        kept.len(),
        entries.len()
    );

    if options.simplify {
        simplify(elements)
    } else {
        elements
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pedigree_graph::LineageGraph;
    use pedigree_model::{Family, Individual};
    use pretty_assertions::assert_eq;

    fn sample() -> (Dataset, Vec<AncestryEntry>) {
        let mut dataset = Dataset::new();
        dataset.insert_individual(Individual::new("@I1@").birth_place("Faro"));
        dataset.insert_individual(Individual::new("@I2@").birth_place("Faro"));
        dataset.insert_individual(Individual::new("@I3@").birth_place("Braga"));
        dataset.insert_family(
            Family::new("@F1@")
                .husband("@I2@")
                .wife("@I3@")
                .child("@I1@"),
        );

        let entries = LineageGraph::from_dataset(&dataset).ancestors("@I1@");
        (dataset, entries)
    }

    #[test]
    fn test_assemble_without_limit_keeps_everything() {
        let (dataset, entries) = sample();

        let elements = assemble(&dataset, &entries, &ChartOptions::new());
        assert_eq!(elements.nodes.len(), 3);
        assert_eq!(elements.edges.len(), 2);
        assert!(elements.nodes.iter().all(|n| n.same_location.is_none()));
    }

    #[test]
    fn test_assemble_truncates_entries() {
        let (dataset, entries) = sample();

        let elements = assemble(&dataset, &entries, &ChartOptions::new().limit(1));
        let ids: Vec<&str> = elements.nodes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, ["@I1@", "@I2@", "@I3@"]);

        let elements = assemble(&dataset, &entries, &ChartOptions::new().limit(100));
        assert_eq!(elements.nodes.len(), 3);
    }

    #[test]
    fn test_assemble_with_simplify() {
        let (dataset, entries) = sample();

        let elements = assemble(&dataset, &entries, &ChartOptions::new().simplify(true));
        // {Faro, Faro, Braga} is not uniform, so nothing is flagged
        assert!(elements.nodes.iter().all(|n| n.same_location.is_none()));
        assert_eq!(elements.edges.len(), 2);
    }
}
