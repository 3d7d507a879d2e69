//! Filesystem blob backend: one JSON file per record.

use super::{BlobStore, CreateOutcome, StorageError};
use crate::utils::atomic_write;
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// File extension for stored records.
const RECORD_EXT: &str = "json";

/// Blob storage rooted at a data directory, with one subdirectory per
/// namespace and one `<id>.json` file per record.
#[derive(Debug)]
pub struct FsBlobStore {
    root: PathBuf,
}

impl FsBlobStore {
    /// Open a blob store over the given data root.
    ///
    /// Directories are created lazily on first write to each namespace.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The data root this store was opened over.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn record_path(&self, namespace: &str, id: &str) -> PathBuf {
        self.root.join(namespace).join(format!("{id}.{RECORD_EXT}"))
    }

    async fn ensure_namespace(&self, namespace: &str) -> Result<(), StorageError> {
        fs::create_dir_all(self.root.join(namespace)).await?;
        Ok(())
    }
}

#[async_trait]
impl BlobStore for FsBlobStore {
    async fn exists(&self, namespace: &str, id: &str) -> Result<bool, StorageError> {
        Ok(fs::try_exists(self.record_path(namespace, id)).await?)
    }

    async fn read(&self, namespace: &str, id: &str) -> Result<Vec<u8>, StorageError> {
        match fs::read(self.record_path(namespace, id)).await {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(StorageError::not_found(namespace, id))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn write(&self, namespace: &str, id: &str, bytes: &[u8]) -> Result<(), StorageError> {
        self.ensure_namespace(namespace).await?;
        atomic_write(&self.record_path(namespace, id), bytes).await?;
        debug!(namespace, id, len = bytes.len(), "record written");
        Ok(())
    }

    async fn create(
        &self,
        namespace: &str,
        id: &str,
        bytes: &[u8],
    ) -> Result<CreateOutcome, StorageError> {
        self.ensure_namespace(namespace).await?;
        let path = self.record_path(namespace, id);
        let content = bytes.to_vec();

        // create_new is the atomic claim: exactly one concurrent caller can
        // open the file, everyone else sees AlreadyExists.
        let outcome = tokio::task::spawn_blocking(move || -> std::io::Result<CreateOutcome> {
            use std::io::Write;

            let mut file = match std::fs::OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&path)
            {
                Ok(file) => file,
                Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                    return Ok(CreateOutcome::AlreadyExists);
                }
                Err(e) => return Err(e),
            };
            file.write_all(&content)?;
            file.flush()?;
            Ok(CreateOutcome::Created)
        })
        .await
        .map_err(std::io::Error::other)??;

        if outcome == CreateOutcome::Created {
            debug!(namespace, id, "record created");
        }
        Ok(outcome)
    }

    async fn delete(&self, namespace: &str, id: &str) -> Result<(), StorageError> {
        match fs::remove_file(self.record_path(namespace, id)).await {
            Ok(()) => {
                debug!(namespace, id, "record deleted");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(StorageError::not_found(namespace, id))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn list(&self, namespace: &str) -> Result<Vec<String>, StorageError> {
        let dir = self.root.join(namespace);
        if !fs::try_exists(&dir).await? {
            return Ok(Vec::new());
        }

        let mut ids = Vec::new();
        let mut entries = fs::read_dir(&dir).await?;
        while let Some(entry) = entries.next_entry().await? {
            if !entry.file_type().await?.is_file() {
                continue;
            }
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(RECORD_EXT) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                ids.push(stem.to_string());
            }
        }
        Ok(ids)
    }
}
