//! Object-storage relay for uploaded images.
//!
//! The API crate talks to an [`ObjectStore`]; production binds it to
//! [`S3Store`] (any S3-compatible endpoint), development and tests to
//! [`LocalStore`]. The store is a pure relay: bytes in, public URL out.
//! No resizing, dimension validation, or scanning happens here.

use async_trait::async_trait;
use uuid::Uuid;

pub mod local;
pub mod s3;

pub use local::LocalStore;
pub use s3::S3Store;

/// Errors from an object-storage backend.
///
/// All variants signal upstream unavailability to the HTTP layer; the
/// request is never retried internally.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Upload failed: {0}")]
    Upload(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Write-only object storage returning a public URL per object.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Store `bytes` under `key` with the given content type and return
    /// the publicly reachable URL of the stored object.
    async fn put(
        &self,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, StorageError>;
}

/// Build the object key for an uploaded article image:
/// `articles/{epoch}-{uuid}-{filename}`.
///
/// The filename is reduced to its final path component so a crafted
/// `filename` cannot escape the prefix.
pub fn article_image_key(epoch_secs: i64, filename: &str) -> String {
    let basename = filename
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(filename);
    format!("articles/{epoch_secs}-{}-{basename}", Uuid::new_v4())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_carries_prefix_epoch_and_filename() {
        let key = article_image_key(1_700_000_000, "photo.png");
        assert!(key.starts_with("articles/1700000000-"));
        assert!(key.ends_with("-photo.png"));
    }

    #[test]
    fn test_key_strips_path_components() {
        let key = article_image_key(1, "../../etc/passwd");
        assert!(!key.contains(".."));
        assert!(key.ends_with("-passwd"));
    }

    #[test]
    fn test_keys_are_unique_per_call() {
        let a = article_image_key(1, "a.jpg");
        let b = article_image_key(1, "a.jpg");
        assert_ne!(a, b);
    }
}
