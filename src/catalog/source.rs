//! Review data sources.
//!
//! The catalog treats review data as an external collaborator behind the
//! [`ReviewSource`] trait. The shipped implementation reads a JSON document
//! from the local filesystem; tests substitute in-memory sources.

use async_trait::async_trait;
use camino::Utf8PathBuf;

use super::error::CatalogError;
use super::models::{ReviewItem, ReviewsDocument};

/// Provides review entries from an external data source.
#[async_trait]
pub trait ReviewSource: Send + Sync {
    /// Loads all review entries in document order.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Io`] when the source cannot be read and
    /// [`CatalogError::Parse`] when its contents are not a valid reviews
    /// document.
    async fn load_reviews(&self) -> Result<Vec<ReviewItem>, CatalogError>;
}

/// Review source backed by a JSON document on the local filesystem.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: Utf8PathBuf,
}

impl JsonFileSource {
    /// Creates a source reading from the given path.
    #[must_use]
    pub fn new(path: impl Into<Utf8PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path this source reads from.
    #[must_use]
    pub fn path(&self) -> &Utf8PathBuf {
        &self.path
    }
}

#[async_trait]
impl ReviewSource for JsonFileSource {
    async fn load_reviews(&self) -> Result<Vec<ReviewItem>, CatalogError> {
        let contents =
            tokio::fs::read_to_string(self.path.as_std_path())
                .await
                .map_err(|error| CatalogError::Io {
                    path: self.path.to_string(),
                    message: error.to_string(),
                })?;

        let document = parse_reviews_document(&contents)?;
        tracing::debug!(
            count = document.reviews.len(),
            path = %self.path,
            "loaded reviews document"
        );
        Ok(document.reviews)
    }
}

/// Parses a reviews document from its JSON text.
///
/// # Errors
///
/// Returns [`CatalogError::Parse`] when the text is not a valid reviews
/// document.
pub fn parse_reviews_document(contents: &str) -> Result<ReviewsDocument, CatalogError> {
    serde_json::from_str(contents).map_err(|error| CatalogError::Parse {
        message: error.to_string(),
    })
}
