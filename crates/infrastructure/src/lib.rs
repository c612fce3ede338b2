//! Infrastructure adapters for application ports.

#![forbid(unsafe_code)]

mod in_memory_snapshot_source;
mod json_snapshot_source;

pub use in_memory_snapshot_source::InMemorySnapshotSource;
pub use json_snapshot_source::{JsonFileGroupSource, JsonFileViewSource};
