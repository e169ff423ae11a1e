//! Tests for configuration defaults and mode selection.

use rstest::rstest;

use super::*;

#[test]
fn defaults_leave_every_source_unset() {
    let config = TourlogConfig::default();

    assert!(config.reviews_path.is_none());
    assert!(config.heading.is_none());
    assert!(config.tagline.is_none());
    assert!(!config.plain);
    assert!(!config.no_pointer);
}

#[test]
fn require_reviews_path_returns_configured_value() {
    let config = TourlogConfig {
        reviews_path: Some("reviews.json".to_owned()),
        ..TourlogConfig::default()
    };

    assert_eq!(config.require_reviews_path(), Ok("reviews.json"));
}

#[test]
fn require_reviews_path_fails_when_unset() {
    let config = TourlogConfig::default();

    assert_eq!(
        config.require_reviews_path(),
        Err(CatalogError::MissingReviewsPath)
    );
}

#[rstest]
#[case(false, OperationMode::Browse)]
#[case(true, OperationMode::Listing)]
fn operation_mode_follows_plain_flag(#[case] plain: bool, #[case] expected: OperationMode) {
    let config = TourlogConfig {
        plain,
        ..TourlogConfig::default()
    };

    assert_eq!(config.operation_mode(), expected);
}

#[test]
fn partial_documents_fall_back_to_defaults() {
    let config: TourlogConfig =
        serde_json::from_str(r#"{"reviews_path": "data/reviews.json", "plain": true}"#)
            .expect("config should deserialise");

    assert_eq!(config.reviews_path.as_deref(), Some("data/reviews.json"));
    assert_eq!(config.operation_mode(), OperationMode::Listing);
    assert!(!config.no_pointer);
}
