//! Blob value types and the service that pairs storage with metadata.
//!
//! A successful upload is always `storage.save` followed by a metadata
//! upsert; a read is a metadata lookup followed by `storage.retrieve`.

mod error;
mod service;
mod types;

pub use error::{BlobError, MetadataError};
pub use service::{BlobService, MAX_ID_LEN, MetadataRepository, validate_id};
pub use types::{Blob, BlobMetadata};
