//! JSON document store.
//!
//! Persistence is deliberately primitive: each collection is one flat JSON
//! array, read and rewritten wholesale on every mutation. The store exposes
//! `load`/`save` over a two-variant backend strategy:
//!
//! - [`FsBackend`] - `<data_dir>/<key>.json` on local disk
//! - [`ObjectBackend`] - `GET`/`PUT` of `<base_url>/<key>.json`
//!
//! A third `Fallback` composition retries a failed primary (object) call
//! against the secondary (filesystem) within the same request, logging which
//! backend served it.
//!
//! A missing key is not an error: `load` returns the collection's default
//! (an empty `Vec`), so "not found" is indistinguishable from "not yet
//! created". There is no locking and no versioning; concurrent writers race
//! read-modify-write and the last writer wins.

mod fs;
mod object;

pub use fs::FsBackend;
pub use object::ObjectBackend;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::config::StorageConfig;

/// Document keys for the three collections.
pub mod keys {
    /// Questions collection.
    pub const QUESTIONS: &str = "questions";
    /// Answers collection.
    pub const ANSWERS: &str = "answers";
    /// Users collection.
    pub const USERS: &str = "users";
}

/// Errors that can occur in the document store.
///
/// A missing key never produces one of these; only genuine I/O,
/// transport, or serialization failures do.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Filesystem read or write failed.
    #[error("storage i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// Object-store request failed.
    #[error("object store error: {0}")]
    Http(#[from] reqwest::Error),

    /// Persisted document could not be (de)serialized.
    #[error("document serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Backend strategy: which bytes-level implementation serves a request.
enum Backend {
    Fs(FsBackend),
    Object(ObjectBackend),
    Fallback {
        primary: ObjectBackend,
        secondary: FsBackend,
    },
}

/// Whole-document JSON store.
///
/// Cheap to share by reference through [`crate::state::AppState`]; all
/// methods take `&self`.
pub struct DocumentStore {
    backend: Backend,
}

impl DocumentStore {
    /// Build a store from the startup storage selection.
    #[must_use]
    pub fn from_config(storage: &StorageConfig) -> Self {
        let backend = match storage {
            StorageConfig::Local { data_dir } => Backend::Fs(FsBackend::new(data_dir.clone())),
            StorageConfig::Object { base_url } => Backend::Object(ObjectBackend::new(base_url)),
            StorageConfig::Fallback { base_url, data_dir } => Backend::Fallback {
                primary: ObjectBackend::new(base_url),
                secondary: FsBackend::new(data_dir.clone()),
            },
        };
        Self { backend }
    }

    /// Load a whole collection, or its default when the key does not exist.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` on I/O failure or if the stored document is not
    /// valid JSON for `T`.
    pub async fn load<T>(&self, key: &str) -> Result<T, StoreError>
    where
        T: DeserializeOwned + Default,
    {
        match self.get_raw(key).await? {
            Some(bytes) => Ok(serde_json::from_slice(&bytes)?),
            None => Ok(T::default()),
        }
    }

    /// Serialize and overwrite a whole collection unconditionally.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` on serialization or I/O failure.
    pub async fn save<T>(&self, key: &str, value: &T) -> Result<(), StoreError>
    where
        T: Serialize,
    {
        let bytes = serde_json::to_vec_pretty(value)?;
        self.put_raw(key, bytes).await
    }

    async fn get_raw(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        match &self.backend {
            Backend::Fs(fs) => fs.get(key).await,
            Backend::Object(object) => object.get(key).await,
            Backend::Fallback { primary, secondary } => match primary.get(key).await {
                Ok(found) => Ok(found),
                Err(err) => {
                    tracing::warn!(
                        key,
                        error = %err,
                        "object store read failed, serving from filesystem fallback"
                    );
                    secondary.get(key).await
                }
            },
        }
    }

    async fn put_raw(&self, key: &str, bytes: Vec<u8>) -> Result<(), StoreError> {
        match &self.backend {
            Backend::Fs(fs) => fs.put(key, &bytes).await,
            Backend::Object(object) => object.put(key, bytes).await,
            Backend::Fallback { primary, secondary } => {
                match primary.put(key, bytes.clone()).await {
                    Ok(()) => Ok(()),
                    Err(err) => {
                        tracing::warn!(
                            key,
                            error = %err,
                            "object store write failed, writing to filesystem fallback"
                        );
                        secondary.put(key, &bytes).await
                    }
                }
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::config::StorageConfig;

    fn local_store(dir: &std::path::Path) -> DocumentStore {
        DocumentStore::from_config(&StorageConfig::Local {
            data_dir: dir.to_path_buf(),
        })
    }

    #[tokio::test]
    async fn test_load_missing_key_returns_default() {
        let tmp = tempfile::tempdir().unwrap();
        let store = local_store(tmp.path());

        let loaded: Vec<String> = store.load("nothing-here").await.unwrap();
        assert!(loaded.is_empty());
    }

    #[tokio::test]
    async fn test_save_then_load_roundtrip() {
        let tmp = tempfile::tempdir().unwrap();
        let store = local_store(tmp.path());

        let value = vec!["one".to_string(), "two".to_string()];
        store.save("items", &value).await.unwrap();

        let loaded: Vec<String> = store.load("items").await.unwrap();
        assert_eq!(loaded, value);
    }

    #[tokio::test]
    async fn test_save_overwrites_prior_content() {
        let tmp = tempfile::tempdir().unwrap();
        let store = local_store(tmp.path());

        store.save("items", &vec![1, 2, 3]).await.unwrap();
        store.save("items", &vec![9]).await.unwrap();

        let loaded: Vec<i32> = store.load("items").await.unwrap();
        assert_eq!(loaded, vec![9]);
    }

    #[tokio::test]
    async fn test_fallback_serves_from_filesystem_when_object_store_is_down() {
        let tmp = tempfile::tempdir().unwrap();
        // Nothing listens on port 1, so every object-store request fails
        let store = DocumentStore::from_config(&StorageConfig::Fallback {
            base_url: "http://127.0.0.1:1".to_string(),
            data_dir: tmp.path().to_path_buf(),
        });

        store.save("items", &vec!["kept".to_string()]).await.unwrap();
        let loaded: Vec<String> = store.load("items").await.unwrap();
        assert_eq!(loaded, vec!["kept".to_string()]);

        // The write landed on disk through the secondary
        assert!(tmp.path().join("items.json").exists());
    }

    #[tokio::test]
    async fn test_object_only_store_surfaces_transport_errors() {
        let store = DocumentStore::from_config(&StorageConfig::Object {
            base_url: "http://127.0.0.1:1".to_string(),
        });

        let result: Result<Vec<String>, _> = store.load("items").await;
        assert!(matches!(result, Err(StoreError::Http(_))));
    }

    #[tokio::test]
    async fn test_corrupt_document_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("items.json"), b"not json").unwrap();
        let store = local_store(tmp.path());

        let result: Result<Vec<String>, _> = store.load("items").await;
        assert!(matches!(result, Err(StoreError::Serialization(_))));
    }
}
