//! Object store adapter for clipdeck.
//!
//! A single [`Storage`] trait with two backends: S3 (including S3-compatible
//! providers via a custom endpoint) and the local filesystem for development
//! and tests. The adapter's surface is deliberately small: this system only
//! ever writes blobs; it never reads, updates, or deletes them.

mod factory;
mod local;
mod s3;
mod traits;

pub use clipdeck_core::StorageBackend;
pub use factory::create_storage;
pub use local::LocalStorage;
pub use s3::S3Storage;
pub use traits::{Storage, StorageError, StorageResult};
