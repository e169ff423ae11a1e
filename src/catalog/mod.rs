//! Review catalog: domain models, errors, and data sources.
//!
//! The catalog layer owns everything about review data that is not
//! presentation: the [`ReviewItem`] model, the [`CatalogError`] taxonomy,
//! and the [`ReviewSource`] trait with its JSON file implementation.

pub mod error;
pub mod models;
pub mod source;

pub use error::CatalogError;
pub use models::{ReviewItem, ReviewsDocument};
pub use source::{JsonFileSource, ReviewSource, parse_reviews_document};
