//! Bounded text rendering for compact review display.
//!
//! Two distinct measures live here and must not be confused: the review
//! preview budget counts characters (Unicode scalar values), while the
//! frame-padding helpers count terminal columns via `unicode-width`.

use unicode_width::UnicodeWidthChar;

/// Character budget applied to review text previews.
pub const REVIEW_PREVIEW_BUDGET: usize = 100;

/// Marker appended when a preview was cut short.
const CLIP_MARKER: &str = "...";

/// Renders review text within the fixed preview budget.
///
/// Text of at most [`REVIEW_PREVIEW_BUDGET`] characters is returned
/// unchanged; longer text is cut to the first
/// [`REVIEW_PREVIEW_BUDGET`] characters with `"..."` appended. The cut is
/// codepoint-safe: it counts characters rather than bytes and never splits
/// a scalar value. Empty input renders empty.
///
/// # Examples
///
/// ```
/// use tourlog::tui::components::text_clip::clip_review_text;
///
/// assert_eq!(clip_review_text("short"), "short");
///
/// let long = "x".repeat(150);
/// let clipped = clip_review_text(&long);
/// assert_eq!(clipped.chars().count(), 103);
/// assert!(clipped.ends_with("..."));
/// ```
#[must_use]
pub fn clip_review_text(text: &str) -> String {
    clip_chars(text, REVIEW_PREVIEW_BUDGET)
}

/// Clips text to a maximum number of characters, appending `"..."` when
/// anything was removed.
#[must_use]
pub fn clip_chars(text: &str, budget: usize) -> String {
    if text.chars().count() <= budget {
        return text.to_owned();
    }

    let mut clipped: String = text.chars().take(budget).collect();
    clipped.push_str(CLIP_MARKER);
    clipped
}

/// Pads or clips a line to an exact display width in terminal columns.
///
/// Zero-width characters pass through without consuming columns; a wide
/// character that would straddle the boundary is dropped rather than split.
#[must_use]
pub(crate) fn pad_to_width(line: &str, width: usize) -> String {
    if width == 0 {
        return String::new();
    }

    let mut output = String::new();
    let mut visible_width = 0_usize;

    for ch in line.chars() {
        let char_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if char_width == 0 {
            output.push(ch);
            continue;
        }

        if visible_width.saturating_add(char_width) > width {
            break;
        }

        output.push(ch);
        visible_width = visible_width.saturating_add(char_width);
    }

    if visible_width < width {
        output.push_str(&" ".repeat(width - visible_width));
    }

    output
}

/// Centres a line within the given display width.
///
/// Lines wider than the target are returned clipped instead.
#[must_use]
pub(crate) fn centre_to_width(line: &str, width: usize) -> String {
    use unicode_width::UnicodeWidthStr;

    let line_width = line.width();
    if line_width >= width {
        return pad_to_width(line, width);
    }

    let margin = (width - line_width).saturating_div(2);
    let mut output = " ".repeat(margin);
    output.push_str(line);
    pad_to_width(&output, width)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("")]
    #[case("short text")]
    fn preview_keeps_text_within_budget(#[case] text: &str) {
        assert_eq!(clip_review_text(text), text);
    }

    #[test]
    fn preview_keeps_text_of_exactly_one_hundred_chars() {
        let text = "a".repeat(100);
        assert_eq!(clip_review_text(&text), text);
    }

    #[test]
    fn preview_clips_text_over_budget_to_one_hundred_and_three_chars() {
        let text = "a".repeat(101);
        let clipped = clip_review_text(&text);

        assert_eq!(clipped.chars().count(), 103);
        assert!(clipped.starts_with(&"a".repeat(100)));
        assert!(clipped.ends_with("..."));
    }

    #[test]
    fn preview_counts_characters_not_bytes() {
        // 100 two-byte characters: within budget despite 200 bytes.
        let text = "é".repeat(100);
        assert_eq!(clip_review_text(&text), text);

        let over = "é".repeat(101);
        let clipped = clip_review_text(&over);
        assert_eq!(clipped.chars().count(), 103);
    }

    #[test]
    fn preview_never_splits_a_scalar_value() {
        let text = "日".repeat(150);
        let clipped = clip_review_text(&text);

        assert_eq!(clipped.chars().count(), 103);
        assert!(clipped.is_char_boundary(clipped.len()));
    }

    #[test]
    fn pad_extends_short_lines_to_width() {
        assert_eq!(pad_to_width("ab", 5), "ab   ");
    }

    #[test]
    fn pad_clips_long_lines_to_width() {
        assert_eq!(pad_to_width("abcdef", 4), "abcd");
    }

    #[test]
    fn pad_drops_wide_char_straddling_the_boundary() {
        // "你" is two columns wide; only one column remains.
        assert_eq!(pad_to_width("a你", 2), "a ");
    }

    #[test]
    fn pad_zero_width_returns_empty() {
        assert_eq!(pad_to_width("abc", 0), "");
    }

    #[test]
    fn centre_places_text_mid_line() {
        assert_eq!(centre_to_width("ab", 6), "  ab  ");
    }
}
