//! Creation list pipeline for Atelier.
//!
//! Takes an in-memory snapshot of [`atelier_core::Creation`] records plus
//! user-supplied criteria and produces an ordered, filtered view. Pure,
//! synchronous, never mutates its input.

pub mod criteria;
pub mod decode;
pub mod engine;

pub use criteria::{FilterCriteria, SortDirection, SortField, TypeFilter};
pub use decode::decode_snapshot;
pub use engine::{apply, published_only};
