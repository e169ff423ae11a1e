//! Test helpers for constructing `ReviewItem` fixtures.
//!
//! These builders reduce boilerplate in unit and integration tests and keep
//! fixture construction consistent across test modules.

use super::ReviewItem;

/// Constructs a minimal `ReviewItem` with only id and review text set.
///
/// All other fields are left at their default values (`None`).
///
/// # Examples
///
/// ```
/// use tourlog::catalog::models::test_support::minimal_review;
///
/// let review = minimal_review(1, "Loved every minute");
/// assert_eq!(review.id, 1);
/// assert_eq!(review.review.as_deref(), Some("Loved every minute"));
/// ```
#[must_use]
pub fn minimal_review(id: u64, review: &str) -> ReviewItem {
    ReviewItem {
        id,
        review: Some(review.to_owned()),
        ..Default::default()
    }
}

/// Constructs a `ReviewItem` with the three searchable fields populated.
#[must_use]
pub fn review_in(id: u64, location: &str, country: &str, tour_type: &str) -> ReviewItem {
    ReviewItem {
        id,
        review: Some(format!("Review {id}")),
        author: Some("alice".to_owned()),
        location: Some(location.to_owned()),
        country: Some(country.to_owned()),
        tour_type: Some(tour_type.to_owned()),
        rating: Some(4),
        ..Default::default()
    }
}

/// Creates `count` sequential reviews with ids `1..=count`.
///
/// Useful for navigation tests that only care about list length.
#[must_use]
pub fn create_reviews(count: usize) -> Vec<ReviewItem> {
    (1..=count)
        .map(|index| {
            let id = u64::try_from(index).unwrap_or(u64::MAX);
            minimal_review(id, &format!("Review {id}"))
        })
        .collect()
}
