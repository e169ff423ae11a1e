//! Plain listing mode for non-interactive use.
//!
//! Writes the loaded reviews to stdout with the same bounded previews the
//! TUI shows, one review per line.

use std::io::{self, Write};

use tourlog::catalog::{CatalogError, JsonFileSource, ReviewItem, ReviewSource};
use tourlog::telemetry::{StderrJsonlTelemetrySink, TelemetryEvent, TelemetrySink};
use tourlog::tui::components::clip_review_text;
use tourlog::TourlogConfig;

/// Runs the plain listing mode.
///
/// # Errors
///
/// Returns an error when the reviews path is missing, the source fails to
/// load, or stdout cannot be written.
pub async fn run(config: &TourlogConfig) -> Result<(), CatalogError> {
    let path = config.require_reviews_path()?;
    let source = JsonFileSource::new(path);
    let telemetry = StderrJsonlTelemetrySink;

    let reviews = match source.load_reviews().await {
        Ok(reviews) => reviews,
        Err(error) => {
            telemetry.record(TelemetryEvent::SourceFailure {
                message: error.to_string(),
            });
            return Err(error);
        }
    };
    telemetry.record(TelemetryEvent::ReviewsLoaded {
        count: reviews.len(),
    });

    let heading = config.heading.as_deref().unwrap_or("Feedback & Insights");
    let mut stdout = io::stdout().lock();
    write_listing_to(&mut stdout, heading, &reviews)
}

/// Writes a review listing to the given writer.
///
/// # Errors
///
/// Returns [`CatalogError::Io`] when the writer fails.
pub fn write_listing_to<W: Write>(
    writer: &mut W,
    heading: &str,
    reviews: &[ReviewItem],
) -> Result<(), CatalogError> {
    writeln!(writer, "{heading} ({} reviews)", reviews.len()).map_err(|e| write_error(&e))?;
    writeln!(writer).map_err(|e| write_error(&e))?;

    for review in reviews {
        let author = review.author.as_deref().unwrap_or("anonymous");
        let place = review.location.as_deref().unwrap_or("(no destination)");
        let preview = review
            .review
            .as_deref()
            .map(clip_review_text)
            .unwrap_or_default();
        writeln!(writer, "  #{} [{place}] {preview} (@{author})", review.id)
            .map_err(|e| write_error(&e))?;
    }

    Ok(())
}

fn write_error(error: &io::Error) -> CatalogError {
    CatalogError::Io {
        path: "stdout".to_owned(),
        message: error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use tourlog::catalog::models::test_support::{create_reviews, minimal_review};

    use super::*;

    #[test]
    fn listing_writes_one_line_per_review_plus_header() {
        let reviews = create_reviews(3);
        let mut buffer: Vec<u8> = Vec::new();

        write_listing_to(&mut buffer, "Feedback & Insights", &reviews)
            .expect("listing should write");

        let output = String::from_utf8(buffer).expect("listing should be UTF-8");
        assert!(output.starts_with("Feedback & Insights (3 reviews)"));
        assert_eq!(output.lines().count(), 5);
    }

    #[test]
    fn listing_clips_long_review_text() {
        let reviews = vec![minimal_review(1, &"y".repeat(140))];
        let mut buffer: Vec<u8> = Vec::new();

        write_listing_to(&mut buffer, "Reviews", &reviews).expect("listing should write");

        let output = String::from_utf8(buffer).expect("listing should be UTF-8");
        assert!(output.contains(&format!("{}...", "y".repeat(100))));
        assert!(!output.contains(&"y".repeat(101)));
    }

    #[test]
    fn empty_listing_renders_header_only() {
        let mut buffer: Vec<u8> = Vec::new();

        write_listing_to(&mut buffer, "Reviews", &[]).expect("listing should write");

        let output = String::from_utf8(buffer).expect("listing should be UTF-8");
        assert!(output.starts_with("Reviews (0 reviews)"));
        // Header plus its spacer line; zero review lines.
        assert_eq!(output.lines().count(), 2);
    }
}
