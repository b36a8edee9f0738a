//! Per-directory JSON inventory generation.
//!
//! Walks a documentation tree and mirrors it under an output root as
//! one `index.json` per directory plus a `master-index.json` rollup.
//! The crate has no opinion on what counts as excluded or as a
//! document; callers hand in predicates.

pub mod generator;
pub mod models;

pub use generator::IndexGenerator;
pub use models::{
    AggregateEntry, AggregateIndex, DirectoryEntry, DirectoryIndex, DirectorySummary,
    SubdirectoryEntry,
};
