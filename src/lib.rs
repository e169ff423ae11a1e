//! Tourlog library crate providing a terminal browser for tour reviews.
//!
//! The library loads tour reviews from a local JSON document and presents
//! them in an interactive TUI: a page header, a search bar of
//! mutually-exclusive dropdown filters, and a scrollable review list with
//! bounded text previews.

pub mod catalog;
pub mod config;
pub mod telemetry;
pub mod tui;

pub use catalog::{CatalogError, JsonFileSource, ReviewItem, ReviewSource};
pub use config::{OperationMode, TourlogConfig};
pub use tui::ReviewsApp;
