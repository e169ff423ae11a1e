//! Tests for the review browsing application model.
//!
//! These exercise the update loop through messages, the way the runner
//! drives it: disclosure exclusivity, pointer dismissal, tracked-selection
//! resets, filtering, and loading lifecycle.

use rstest::{fixture, rstest};

use super::*;
use crate::catalog::models::test_support::{minimal_review, review_in};
use crate::tui::state::DropdownId;

#[fixture]
fn sample_reviews() -> Vec<ReviewItem> {
    vec![
        review_in(1, "Lisbon", "Portugal", "City break"),
        review_in(2, "Porto", "Portugal", "Food & wine"),
        review_in(3, "Arusha", "Tanzania", "Safari"),
    ]
}

fn loaded_app(reviews: Vec<ReviewItem>) -> ReviewsApp {
    ReviewsApp::with_reviews(reviews)
}

#[rstest]
fn activating_a_dropdown_collapses_the_expanded_sibling(sample_reviews: Vec<ReviewItem>) {
    let mut app = loaded_app(sample_reviews);

    for first in DropdownId::ALL {
        for second in DropdownId::ALL {
            if first == second {
                continue;
            }
            let _action = app.handle_message(&AppMsg::ToggleDropdown(first));
            let _action = app.handle_message(&AppMsg::ToggleDropdown(second));

            assert_eq!(app.active_dropdown(), Some(second));

            let _action = app.handle_message(&AppMsg::DismissDropdowns);
        }
    }
}

#[rstest]
#[case(DropdownId::Calendar)]
#[case(DropdownId::Location)]
#[case(DropdownId::TourType)]
#[case(DropdownId::Country)]
fn pointer_press_outside_the_control_region_collapses_everything(
    sample_reviews: Vec<ReviewItem>,
    #[case] open: DropdownId,
) {
    let mut app = loaded_app(sample_reviews);
    let _action = app.handle_message(&AppMsg::ToggleDropdown(open));
    assert_eq!(app.active_dropdown(), Some(open));

    // Far below the search bar and any open panel.
    let _action = app.handle_message(&AppMsg::PointerPressed { column: 5, row: 22 });

    assert_eq!(app.active_dropdown(), None);
}

#[rstest]
fn pointer_press_on_a_trigger_toggles_that_dropdown(sample_reviews: Vec<ReviewItem>) {
    let mut app = loaded_app(sample_reviews);
    let layout = app.header_layout();
    let region = layout
        .triggers()
        .iter()
        .find(|cell| cell.id == DropdownId::Country)
        .map(|cell| cell.region)
        .expect("country trigger should be laid out");

    let press = AppMsg::PointerPressed {
        column: u16::try_from(region.x).expect("column should fit"),
        row: u16::try_from(region.y).expect("row should fit"),
    };

    let _action = app.handle_message(&press);
    assert_eq!(app.active_dropdown(), Some(DropdownId::Country));

    let _action = app.handle_message(&press);
    assert_eq!(app.active_dropdown(), None);
}

#[rstest]
fn pointer_press_on_a_panel_row_applies_that_option(sample_reviews: Vec<ReviewItem>) {
    let mut app = loaded_app(sample_reviews);
    let _action = app.handle_message(&AppMsg::ToggleDropdown(DropdownId::Location));

    let layout = app.header_layout();
    let panel = layout
        .panel()
        .map(|placement| placement.region)
        .expect("open dropdown should place a panel");

    // Row 0 is "All locations"; row 1 is the first option ("Arusha").
    let _action = app.handle_message(&AppMsg::PointerPressed {
        column: u16::try_from(panel.x).expect("column should fit"),
        row: u16::try_from(panel.y + 2).expect("row should fit"),
    });

    assert_eq!(app.selections().location.as_deref(), Some("Arusha"));
    assert_eq!(app.active_dropdown(), None);
}

#[rstest]
#[case(AppMsg::SetLocation(Some("Lisbon".to_owned())))]
#[case(AppMsg::SetCountry(Some("Tanzania".to_owned())))]
#[case(AppMsg::SetTourType(Some("Safari".to_owned())))]
fn tracked_selection_change_collapses_any_open_dropdown(
    sample_reviews: Vec<ReviewItem>,
    #[case] change: AppMsg,
) {
    for open in DropdownId::ALL {
        let mut app = loaded_app(sample_reviews.clone());
        let _action = app.handle_message(&AppMsg::ToggleDropdown(open));
        assert_eq!(app.active_dropdown(), Some(open));

        let _action = app.handle_message(&change);

        assert_eq!(app.active_dropdown(), None);
    }
}

#[rstest]
fn unchanged_selection_value_does_not_collapse_the_open_dropdown(
    sample_reviews: Vec<ReviewItem>,
) {
    let mut app = loaded_app(sample_reviews);
    let _action = app.handle_message(&AppMsg::SetLocation(Some("Lisbon".to_owned())));

    let _action = app.handle_message(&AppMsg::ToggleDropdown(DropdownId::Country));
    let _action = app.handle_message(&AppMsg::SetLocation(Some("Lisbon".to_owned())));

    assert_eq!(app.active_dropdown(), Some(DropdownId::Country));
}

#[rstest]
fn selections_filter_the_review_list(sample_reviews: Vec<ReviewItem>) {
    let mut app = loaded_app(sample_reviews);
    assert_eq!(app.filtered_count(), 3);

    let _action = app.handle_message(&AppMsg::SetCountry(Some("Portugal".to_owned())));
    assert_eq!(app.filtered_count(), 2);

    let _action = app.handle_message(&AppMsg::SetTourType(Some("Safari".to_owned())));
    assert_eq!(app.filtered_count(), 0);

    let _action = app.handle_message(&AppMsg::ClearSelections);
    assert_eq!(app.filtered_count(), 3);
}

#[rstest]
fn confirming_a_highlighted_option_selects_it(sample_reviews: Vec<ReviewItem>) {
    let mut app = loaded_app(sample_reviews);
    let _action = app.handle_message(&AppMsg::ToggleDropdown(DropdownId::TourType));

    // Highlight the first option below the "All tour types" row.
    let _action = app.handle_message(&AppMsg::HighlightDown);
    let _action = app.handle_message(&AppMsg::ConfirmHighlight);

    assert_eq!(app.selections().tour_type.as_deref(), Some("City break"));
    assert_eq!(app.active_dropdown(), None);
}

#[rstest]
fn confirming_the_clear_row_clears_that_selection(sample_reviews: Vec<ReviewItem>) {
    let mut app = loaded_app(sample_reviews);
    let _action = app.handle_message(&AppMsg::SetLocation(Some("Lisbon".to_owned())));

    let _action = app.handle_message(&AppMsg::ToggleDropdown(DropdownId::Location));
    let _action = app.handle_message(&AppMsg::ConfirmHighlight);

    assert_eq!(app.selections().location, None);
    assert_eq!(app.active_dropdown(), None);
}

#[rstest]
fn calendar_panel_confirms_without_selecting(sample_reviews: Vec<ReviewItem>) {
    let mut app = loaded_app(sample_reviews);
    let _action = app.handle_message(&AppMsg::ToggleDropdown(DropdownId::Calendar));

    let _action = app.handle_message(&AppMsg::ConfirmHighlight);

    assert_eq!(app.active_dropdown(), None);
    assert_eq!(app.selections(), &crate::tui::state::SearchSelections::new());
}

#[test]
fn load_lifecycle_moves_between_loading_and_loaded() {
    let mut app = ReviewsApp::new();
    assert!(app.is_loading());
    assert!(app.view().contains("Charting your journey"));

    let _action = app.handle_message(&AppMsg::ReviewsLoaded(vec![minimal_review(1, "Great")]));
    assert!(!app.is_loading());
    assert_eq!(app.filtered_count(), 1);

    let action = app.handle_message(&AppMsg::ReloadRequested);
    assert_eq!(action, Some(AppAction::Reload));
    assert!(app.is_loading());
}

#[test]
fn load_failure_is_surfaced_in_the_status_bar() {
    let mut app = ReviewsApp::new();
    let _action = app.handle_message(&AppMsg::LoadFailed("boom".to_owned()));

    assert!(!app.is_loading());
    assert!(app.view().contains("Error: boom"));
}

#[test]
fn quit_message_requests_quit() {
    let mut app = ReviewsApp::new();
    assert_eq!(app.handle_message(&AppMsg::Quit), Some(AppAction::Quit));
}

#[rstest]
fn help_overlay_opens_and_closes(sample_reviews: Vec<ReviewItem>) {
    let mut app = loaded_app(sample_reviews);

    let _action = app.handle_message(&AppMsg::ToggleHelp);
    assert!(app.view().contains("Keyboard Shortcuts"));

    let _action = app.handle_message(&AppMsg::CursorDown);
    assert!(!app.view().contains("Keyboard Shortcuts"));
}

#[rstest]
fn view_carries_the_page_header_copy(sample_reviews: Vec<ReviewItem>) {
    let app = loaded_app(sample_reviews);
    let frame = app.view();

    assert!(frame.contains("Feedback & Insights"));
    assert!(frame.contains("Share your travel experiences!"));
}

#[test]
fn page_header_copy_can_be_overridden() {
    let app = ReviewsApp::new()
        .with_page_header(Some("Tour diaries".to_owned()), None);

    assert!(app.view().contains("Tour diaries"));
}

#[rstest]
fn status_bar_reports_filtered_counts(sample_reviews: Vec<ReviewItem>) {
    let mut app = loaded_app(sample_reviews);
    let _action = app.handle_message(&AppMsg::SetCountry(Some("Tanzania".to_owned())));

    assert!(app.view().contains("1/3 reviews"));
}

#[test]
fn empty_review_set_renders_zero_list_items() {
    let app = ReviewsApp::with_reviews(Vec::new());
    let frame = app.view();

    assert!(frame.contains("0/0 reviews"));
    assert!(!frame.contains('@'));
}
