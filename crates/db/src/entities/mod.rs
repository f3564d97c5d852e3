//! `SeaORM` entity definitions.

pub mod blob_metadata;
pub mod blob_storage;
