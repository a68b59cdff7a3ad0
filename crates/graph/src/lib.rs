//! # Pedigree Graph
//!
//! Parent-lineage graph and ancestor traversals over a loaded dataset.
//!
//! ## Architecture
//!
//! ```text
//! Dataset (individuals + families)
//!     │
//!     ├──> LineageGraph
//!     │      ├─ Vertices: individual ids (insertion-ordered arena)
//!     │      └─ Edges: child → ParentLink { parent id, father/mother role }
//!     │
//!     └──> Traversals
//!            ├─ ancestors(start)              breadth-first expansion entries
//!            └─ reachable_ancestors(start, n) bounded depth-first id listing
//! ```
//!
//! Dangling ids are ordinary vertices, unknown roots yield a single empty
//! expansion entry, and cyclic record sets terminate via the visited set;
//! incomplete source data never turns into an error here.

mod graph;
mod traversal;
mod types;

pub use graph::LineageGraph;
pub use types::{AncestryEntry, ParentLink, ParentRole};
