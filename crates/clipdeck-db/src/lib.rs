//! Document store adapter for clipdeck.
//!
//! Videos are stored as whole JSON documents keyed (and partitioned) by their
//! own id, so every operation is a point read, point replace, or a collection
//! scan. Each document carries a version token; replace is version-checked so
//! concurrent read-modify-write cycles can detect stale writes instead of
//! silently overwriting each other.

mod memory;
mod pg;
mod store;

pub use memory::MemoryVideoStore;
pub use pg::PgVideoStore;
pub use store::{ReplaceOutcome, StoredVideo, VideoStore};
