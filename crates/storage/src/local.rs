//! Filesystem-backed object store for development and tests.

use std::path::PathBuf;

use async_trait::async_trait;

use crate::{ObjectStore, StorageError};

pub struct LocalStore {
    base_dir: PathBuf,
    /// URL prefix under which `base_dir` is served (e.g. `/uploads`).
    public_base: String,
}

impl LocalStore {
    pub fn new(base_dir: impl Into<PathBuf>, public_base: impl Into<String>) -> Self {
        Self {
            base_dir: base_dir.into(),
            public_base: public_base.into().trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl ObjectStore for LocalStore {
    async fn put(
        &self,
        key: &str,
        bytes: Vec<u8>,
        _content_type: &str,
    ) -> Result<String, StorageError> {
        let path = self.base_dir.join(key);
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&path, &bytes).await?;

        tracing::debug!(path = %path.display(), "Object written");

        Ok(format!("{}/{key}", self.public_base))
    }
}
