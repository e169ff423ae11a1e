//! Data models for tour reviews.
//!
//! This module contains the domain model for review entries loaded from the
//! external data source. Fields other than the identifier are optional:
//! partially populated documents degrade to empty rendered output rather
//! than failing.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

/// A single tour review entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ReviewItem {
    /// Review identifier.
    pub id: u64,
    /// Review body text.
    pub review: Option<String>,
    /// Display name of the reviewer.
    pub author: Option<String>,
    /// City or destination the tour visited.
    pub location: Option<String>,
    /// Country the tour visited.
    pub country: Option<String>,
    /// Tour category (e.g. "City break", "Safari").
    pub tour_type: Option<String>,
    /// Star rating from 1 to 5.
    pub rating: Option<u8>,
    /// Departure date of the reviewed tour.
    pub date: Option<NaiveDate>,
}

/// Top-level reviews document as stored on disk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ReviewsDocument {
    /// Ordered review entries.
    pub reviews: Vec<ReviewItem>,
}
