//! Blob domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An opaque payload addressed by a caller-chosen identifier.
#[derive(Clone, PartialEq, Eq)]
pub struct Blob {
    /// Caller-chosen identifier.
    pub id: String,
    /// Raw payload bytes.
    pub data: Vec<u8>,
}

impl Blob {
    /// Create a blob.
    #[must_use]
    pub fn new(id: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            id: id.into(),
            data,
        }
    }

    /// Payload length in bytes.
    #[must_use]
    pub fn size(&self) -> usize {
        self.data.len()
    }
}

impl std::fmt::Debug for Blob {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Blob")
            .field("id", &self.id)
            .field("size", &self.data.len())
            .finish()
    }
}

/// Where and when a blob was stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlobMetadata {
    /// Blob identifier.
    pub id: String,
    /// Payload length at save time.
    pub size: i64,
    /// When the blob was (last) saved.
    pub created_at: DateTime<Utc>,
    /// Backend type tag (`local`, `database`, `s3`).
    pub storage_type: String,
    /// Backend-specific locator returned by `save`.
    pub storage_path: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blob_size() {
        let blob = Blob::new("a", vec![0, 1, 2]);
        assert_eq!(blob.size(), 3);
    }

    #[test]
    fn test_blob_debug_omits_payload() {
        let blob = Blob::new("a", b"secret bytes".to_vec());
        let rendered = format!("{blob:?}");
        assert!(rendered.contains("size: 12"));
        assert!(!rendered.contains("115"));
    }
}
