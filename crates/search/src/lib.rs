//! # Pedigree Search
//!
//! Fuzzy name lookup over a loaded dataset, backing the "type a name, pick a
//! person" flow that seeds ancestry traversals.

mod fuzzy;

pub use fuzzy::{NameMatch, NameSearch};
