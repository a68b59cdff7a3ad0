use std::collections::{HashSet, VecDeque};

use crate::graph::LineageGraph;
use crate::types::AncestryEntry;

impl LineageGraph {
    /// Breadth-first ancestor expansion seeded at `start`
    ///
    /// Emits one entry per visited individual in generation-distance order,
    /// pairing it with the parents first discovered through it. The sequence
    /// is never truncated here; callers keep a prefix to bound rendering
    /// cost. A root unknown to the graph yields a single empty entry, and a
    /// cyclic family record set terminates because visited ids are never
    /// re-enqueued.
    #[must_use]
    pub fn ancestors(&self, start: &str) -> Vec<AncestryEntry> {
        let mut visited: HashSet<String> = HashSet::new();
        let mut queue: VecDeque<String> = VecDeque::new();
        visited.insert(start.to_string());
        queue.push_back(start.to_string());

        let mut entries = Vec::new();
        while let Some(current) = queue.pop_front() {
            let mut discovered = Vec::new();
            for link in self.parents_of(&current) {
                if visited.insert(link.id.clone()) {
                    queue.push_back(link.id.clone());
                    discovered.push(link.clone());
                }
            }
            entries.push(AncestryEntry::new(current, discovered));
        }

        log::debug!("Ancestor expansion from {start}: {} entries", entries.len());
        entries
    }

    /// Depth-first enumeration of ids reachable from `start`, capped at
    /// `limit` visited vertices
    #[must_use]
    pub fn reachable_ancestors(&self, start: &str, limit: usize) -> Vec<String> {
        let mut visited: HashSet<String> = HashSet::new();
        let mut stack: Vec<String> = Vec::new();
        visited.insert(start.to_string());
        stack.push(start.to_string());

        let mut result = Vec::new();
        while result.len() < limit {
            let Some(current) = stack.pop() else { break };
            for link in self.parents_of(&current) {
                if visited.insert(link.id.clone()) {
                    stack.push(link.id.clone());
                }
            }
            result.push(current);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ParentLink, ParentRole};
    use pretty_assertions::assert_eq;

    /// Two-generation tree: @I1@ ← (@I2@, @I3@), @I2@ ← @I4@
    fn diamond_free_graph() -> LineageGraph {
        let mut graph = LineageGraph::new();
        graph.add_edge("@I2@", ParentRole::Father, "@I1@");
        graph.add_edge("@I3@", ParentRole::Mother, "@I1@");
        graph.add_edge("@I4@", ParentRole::Father, "@I2@");
        graph
    }

    #[test]
    fn test_bfs_expansion_order() {
        let graph = diamond_free_graph();

        let entries = graph.ancestors("@I1@");
        let ids: Vec<&str> = entries.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["@I1@", "@I2@", "@I3@", "@I4@"]);

        assert_eq!(
            entries[0].discovered,
            [
                ParentLink::new("@I2@", ParentRole::Father),
                ParentLink::new("@I3@", ParentRole::Mother),
            ]
        );
        assert_eq!(
            entries[1].discovered,
            [ParentLink::new("@I4@", ParentRole::Father)]
        );
        assert!(entries[2].discovered.is_empty());
        assert!(entries[3].discovered.is_empty());
    }

    #[test]
    fn test_bfs_visits_each_vertex_once() {
        // @I1@'s parents share the grandparent @I4@
        let mut graph = diamond_free_graph();
        graph.add_edge("@I4@", ParentRole::Father, "@I3@");

        let entries = graph.ancestors("@I1@");
        let mut ids: Vec<&str> = entries.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids.len(), 4);
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 4);

        // The shared grandparent is discovered through @I2@ only
        assert_eq!(
            entries[1].discovered,
            [ParentLink::new("@I4@", ParentRole::Father)]
        );
        assert!(entries[2].discovered.is_empty());
    }

    #[test]
    fn test_bfs_distances_never_decrease() {
        let graph = diamond_free_graph();

        let entries = graph.ancestors("@I1@");
        let mut distance = std::collections::HashMap::from([("@I1@".to_string(), 0usize)]);
        let mut last = 0usize;
        for entry in &entries {
            let d = distance[&entry.id];
            assert!(d >= last);
            last = d;
            for link in &entry.discovered {
                distance.insert(link.id.clone(), d + 1);
            }
        }
    }

    #[test]
    fn test_bfs_on_unknown_root() {
        let graph = diamond_free_graph();

        let entries = graph.ancestors("@I99@");
        assert_eq!(entries, [AncestryEntry::new("@I99@", vec![])]);
    }

    #[test]
    fn test_bfs_tolerates_cycles() {
        // Malformed source: @I1@ recorded as an ancestor of @I4@
        let mut graph = diamond_free_graph();
        graph.add_edge("@I1@", ParentRole::Father, "@I4@");

        let entries = graph.ancestors("@I1@");
        assert_eq!(entries.len(), 4);
        assert!(entries[3].discovered.is_empty());
    }

    #[test]
    fn test_reachable_respects_limit() {
        let graph = diamond_free_graph();

        assert_eq!(graph.reachable_ancestors("@I1@", 2).len(), 2);
        assert_eq!(graph.reachable_ancestors("@I1@", 10).len(), 4);
        assert_eq!(graph.reachable_ancestors("@I1@", 0), Vec::<String>::new());
    }

    #[test]
    fn test_reachable_never_revisits() {
        let mut graph = diamond_free_graph();
        graph.add_edge("@I1@", ParentRole::Father, "@I4@");

        let mut ids = graph.reachable_ancestors("@I1@", usize::MAX);
        assert_eq!(ids.len(), 4);
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 4);
    }

    #[test]
    fn test_reachable_on_unknown_root() {
        let graph = diamond_free_graph();
        assert_eq!(graph.reachable_ancestors("@I99@", 5), ["@I99@"]);
    }
}
