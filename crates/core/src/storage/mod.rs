//! Blob storage capability and its backends.
//!
//! Every backend satisfies the same two-operation contract:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                      BlobStorage                             │
//! │  save(&Blob) -> locator        retrieve(id) -> Blob          │
//! ├───────────────────┬────────────────────┬─────────────────────┤
//! │ LocalStorage      │ DatabaseStorage    │ S3Storage           │
//! │ root/{id}         │ blob_storage row   │ bucket/{id}, SigV4  │
//! └───────────────────┴────────────────────┴─────────────────────┘
//! ```
//!
//! `DatabaseStorage` lives in the db crate; this crate only knows the trait.

mod config;
mod error;
mod local;
mod s3;
pub mod sigv4;

use std::future::Future;

use crate::blob::Blob;

pub use config::StorageProvider;
pub use error::StorageError;
pub use local::LocalStorage;
pub use s3::S3Storage;

/// Uniform save/retrieve contract implemented by every backend.
///
/// Backends hold no state between calls beyond their handle on the
/// backing medium.
pub trait BlobStorage: Send + Sync {
    /// Persist `blob.data` under `blob.id`, replacing any previous payload.
    ///
    /// Returns the backend-specific locator.
    fn save(&self, blob: &Blob) -> impl Future<Output = Result<String, StorageError>> + Send;

    /// Fetch the payload stored under `id`.
    ///
    /// Returns `StorageError::NotFound` if nothing is stored there.
    fn retrieve(&self, id: &str) -> impl Future<Output = Result<Blob, StorageError>> + Send;
}
