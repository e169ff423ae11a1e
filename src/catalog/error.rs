//! Error types exposed by the review catalog layer.

use thiserror::Error;

/// Errors surfaced while loading configuration or review data.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// No reviews file path was configured.
    #[error("reviews file path is required")]
    MissingReviewsPath,

    /// Configuration could not be loaded.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error reading {path}: {message}")]
    Io {
        /// Path of the file involved in the failure.
        path: String,
        /// Error detail from the underlying I/O operation.
        message: String,
    },

    /// The reviews document could not be parsed.
    #[error("reviews document is invalid: {message}")]
    Parse {
        /// Parser error detail.
        message: String,
    },

    /// Terminal setup or teardown failed.
    #[error("terminal error: {message}")]
    Terminal {
        /// Error detail from the terminal backend.
        message: String,
    },
}
