//! # Pedigree Model
//!
//! Typed family entities over the generic labeled record tree produced by an
//! external structured-record parser.
//!
//! ## Architecture
//!
//! ```text
//! RecordTree (JSON from the record parser)
//!     │
//!     ├──> RawRecord filtering (INDI / FAM tags)
//!     │      ├─ Individual::from_record
//!     │      └─ Family::from_record
//!     │
//!     └──> Dataset
//!            ├─ individuals: id → Individual (insertion-ordered)
//!            └─ families:    id → Family    (insertion-ordered)
//! ```
//!
//! Records without a usable identity are skipped rather than failing the
//! load; genealogical source files are routinely incomplete and every other
//! field is optional.

mod dataset;
mod error;
pub mod record;
mod types;

pub use dataset::Dataset;
pub use error::{ModelError, Result};
pub use record::{FieldMap, FieldValue, RawRecord, RecordTree};
pub use types::{Family, Individual};
