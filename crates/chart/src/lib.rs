//! # Pedigree Chart
//!
//! Presentation-facing materialization of ancestry expansions, plus the
//! chain simplifier that keeps deep same-birthplace runs readable.
//!
//! ## Architecture
//!
//! ```text
//! AncestryEntry[] (from pedigree-graph)
//!     │
//!     ├──> assemble(dataset, entries, options)
//!     │      ├─ keep the first N entries (caller-driven truncation)
//!     │      ├─ materialize: resolve individuals, emit ChartNode/ChartEdge
//!     │      │    └─ at most one father- and one mother-role edge per entry
//!     │      └─ simplify (optional): flag + count same-birthplace chains,
//!     │           prune dead-end parent edges
//!     │
//!     └──> ChartElements (camelCase JSON for the external renderer)
//! ```

mod assemble;
mod config;
mod elements;
mod simplify;

pub use assemble::assemble;
pub use config::ChartOptions;
pub use elements::{materialize, ChartEdge, ChartElements, ChartNode};
pub use simplify::simplify;
