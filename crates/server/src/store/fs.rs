//! Filesystem document backend.

use std::path::{Path, PathBuf};

use super::StoreError;

/// Stores each collection as `<data_dir>/<key>.json`.
///
/// Writes go to a sibling temp file first and are moved into place with a
/// rename, so a crashed write never leaves a half-written document behind.
pub struct FsBackend {
    data_dir: PathBuf,
}

impl FsBackend {
    /// Create a backend rooted at `data_dir`. The directory is created lazily
    /// on first write.
    #[must_use]
    pub const fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    /// Read the raw bytes of a document, `None` if the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` for any failure other than a missing file.
    pub async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        match tokio::fs::read(self.document_path(key)).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StoreError::Io(err)),
        }
    }

    /// Replace a document's content wholesale.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the directory cannot be created or the
    /// write/rename fails.
    pub async fn put(&self, key: &str, bytes: &[u8]) -> Result<(), StoreError> {
        tokio::fs::create_dir_all(&self.data_dir).await?;

        let path = self.document_path(key);
        let tmp = self.data_dir.join(format!("{key}.json.tmp"));
        tokio::fs::write(&tmp, bytes).await?;
        tokio::fs::rename(&tmp, &path).await?;
        Ok(())
    }

    fn document_path(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{key}.json"))
    }

    /// The directory this backend writes into.
    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_missing_file_is_none() {
        let tmp = tempfile::tempdir().unwrap();
        let backend = FsBackend::new(tmp.path().to_path_buf());

        assert!(backend.get("absent").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_put_creates_data_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let nested = tmp.path().join("deep").join("data");
        let backend = FsBackend::new(nested.clone());

        backend.put("items", b"[]").await.unwrap();
        assert!(nested.join("items.json").exists());
    }

    #[tokio::test]
    async fn test_put_leaves_no_temp_file() {
        let tmp = tempfile::tempdir().unwrap();
        let backend = FsBackend::new(tmp.path().to_path_buf());

        backend.put("items", b"[1,2]").await.unwrap();
        assert!(!tmp.path().join("items.json.tmp").exists());
        assert_eq!(backend.get("items").await.unwrap().unwrap(), b"[1,2]");
    }
}
