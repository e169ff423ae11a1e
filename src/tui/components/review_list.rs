//! Review list component for displaying filtered review entries.
//!
//! Renders a scrollable window over the filtered review sequence with a
//! cursor marker per line. An empty filtered set renders zero item lines;
//! N visible items render exactly N lines, in input order.

use crate::catalog::ReviewItem;

use super::text_clip::clip_review_text;

/// Default visible height for the review list component.
const DEFAULT_VISIBLE_HEIGHT: usize = 20;

/// Context for rendering the review list view.
///
/// Bundles the data needed to render a filtered list of reviews without
/// requiring per-frame allocations.
#[derive(Debug, Clone)]
pub struct ReviewListViewContext<'a> {
    /// Full slice of all review entries.
    pub reviews: &'a [ReviewItem],
    /// Indices of reviews matching the current selections.
    pub filtered_indices: &'a [usize],
    /// Current cursor position (0-indexed).
    pub cursor_position: usize,
    /// Number of lines scrolled from top.
    pub scroll_offset: usize,
    /// Maximum visible height in lines (for layout calculations).
    pub visible_height: usize,
}

/// Component for displaying a list of review entries.
#[derive(Debug, Clone)]
pub struct ReviewListComponent {
    /// Visible height in lines (for scrolling calculations).
    visible_height: usize,
}

impl Default for ReviewListComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl ReviewListComponent {
    /// Creates a new review list component.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            visible_height: DEFAULT_VISIBLE_HEIGHT,
        }
    }

    /// Updates the visible height for scrolling calculations.
    pub const fn set_visible_height(&mut self, height: usize) {
        self.visible_height = height;
    }

    /// Returns the visible height.
    #[must_use]
    pub const fn visible_height(&self) -> usize {
        self.visible_height
    }

    /// Renders the review list as a string.
    ///
    /// Only reviews within the visible window (based on scroll offset and
    /// visible height) are rendered. An empty filtered set produces an
    /// empty string: zero item lines, by contract.
    #[must_use]
    pub fn view(&self, ctx: &ReviewListViewContext<'_>) -> String {
        let mut output = String::new();

        let visible_height = if ctx.visible_height > 0 {
            ctx.visible_height
        } else {
            self.visible_height
        };

        let start = ctx.scroll_offset;
        let end = ctx
            .scroll_offset
            .saturating_add(visible_height)
            .min(ctx.filtered_indices.len());

        for (display_index, &review_index) in ctx
            .filtered_indices
            .iter()
            .enumerate()
            .skip(start)
            .take(end.saturating_sub(start))
        {
            let Some(review) = ctx.reviews.get(review_index) else {
                continue;
            };
            let is_selected = display_index == ctx.cursor_position;
            let prefix = if is_selected { ">" } else { " " };
            output.push_str(&Self::format_review_line(review, prefix));
            output.push('\n');
        }

        output
    }

    /// Formats a single review line for display.
    fn format_review_line(review: &ReviewItem, prefix: &str) -> String {
        let author = review.author.as_deref().unwrap_or("anonymous");
        let place = review.location.as_deref().unwrap_or("(no destination)");
        let rating = review
            .rating
            .map_or_else(String::new, |stars| format!(" [{stars}/5]"));

        let preview = review
            .review
            .as_deref()
            .map(clip_review_text)
            .unwrap_or_default();

        format!("{prefix} {author} @ {place}{rating}: {preview}")
    }
}
