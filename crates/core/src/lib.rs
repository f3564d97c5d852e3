//! Core blob storage logic for Simple Drive.
//!
//! This crate contains the storage capability and everything that implements
//! it without a web framework or database driver.
//!
//! # Modules
//!
//! - `storage` - The `BlobStorage` contract, local and S3-compatible backends
//! - `blob` - Blob value types, metadata records and the `BlobService`

pub mod blob;
pub mod storage;
