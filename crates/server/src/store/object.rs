//! HTTP object-store document backend.

use reqwest::StatusCode;

use super::StoreError;

/// Stores each collection as an object at `<base_url>/<key>.json`.
///
/// The store is any HTTP service that accepts `GET` and `PUT` of whole
/// objects and answers 404 for keys that were never written. No
/// authentication, conditional requests, or versioning are used; a `PUT`
/// overwrites unconditionally.
pub struct ObjectBackend {
    base_url: String,
    client: reqwest::Client,
}

impl ObjectBackend {
    /// Create a backend for the given base URL (trailing slash tolerated).
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            client: reqwest::Client::new(),
        }
    }

    /// Fetch the raw bytes of a document, `None` on 404.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Http` for transport failures and non-404 error
    /// statuses.
    pub async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        let response = self.client.get(self.object_url(key)).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let bytes = response.error_for_status()?.bytes().await?;
        Ok(Some(bytes.to_vec()))
    }

    /// Overwrite a document's content wholesale.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Http` on transport failure or an error status.
    pub async fn put(&self, key: &str, bytes: Vec<u8>) -> Result<(), StoreError> {
        self.client
            .put(self.object_url(key))
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(bytes)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    fn object_url(&self, key: &str) -> String {
        format!("{}/{key}.json", self.base_url)
    }
}
