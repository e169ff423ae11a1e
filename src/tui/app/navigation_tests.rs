//! Navigation-focused tests for cursor and viewport behaviour.

use rstest::rstest;

use super::*;
use crate::catalog::models::test_support::create_reviews;

/// Builds a loaded app with a terminal sized for `list_height` list lines.
fn setup_app(review_count: usize, list_height: u16) -> ReviewsApp {
    let mut app = ReviewsApp::with_reviews(create_reviews(review_count));
    let _action = app.handle_message(&AppMsg::WindowResized {
        width: 80,
        height: list_height.saturating_add(5),
    });
    app
}

#[rstest]
fn cursor_down_scrolls_when_moving_beyond_bottom_of_viewport() {
    let mut app = setup_app(8, 3);

    for _ in 0..3 {
        let _action = app.handle_message(&AppMsg::CursorDown);
    }

    assert_eq!(app.cursor_position(), 3);
    assert_eq!(app.cursor.scroll_offset, 1);
}

#[rstest]
fn cursor_up_scrolls_when_moving_above_top_of_viewport() {
    let mut app = setup_app(8, 3);

    let _action = app.handle_message(&AppMsg::End);
    for _ in 0..5 {
        let _action = app.handle_message(&AppMsg::CursorUp);
    }

    assert_eq!(app.cursor_position(), 2);
    assert_eq!(app.cursor.scroll_offset, 2);
}

#[rstest]
fn page_down_moves_a_viewport_at_a_time() {
    let mut app = setup_app(10, 4);

    let _action = app.handle_message(&AppMsg::PageDown);
    assert_eq!(app.cursor_position(), 4);

    let _action = app.handle_message(&AppMsg::PageDown);
    assert_eq!(app.cursor_position(), 8);

    let _action = app.handle_message(&AppMsg::PageDown);
    assert_eq!(app.cursor_position(), 9);
}

#[rstest]
fn home_and_end_jump_to_the_extremes() {
    let mut app = setup_app(10, 4);

    let _action = app.handle_message(&AppMsg::End);
    assert_eq!(app.cursor_position(), 9);

    let _action = app.handle_message(&AppMsg::Home);
    assert_eq!(app.cursor_position(), 0);
    assert_eq!(app.cursor.scroll_offset, 0);
}

#[rstest]
fn cursor_is_clamped_when_a_filter_shrinks_the_list() {
    let mut app = ReviewsApp::with_reviews(vec![
        crate::catalog::models::test_support::review_in(1, "Lisbon", "Portugal", "City break"),
        crate::catalog::models::test_support::review_in(2, "Porto", "Portugal", "Food & wine"),
        crate::catalog::models::test_support::review_in(3, "Arusha", "Tanzania", "Safari"),
    ]);

    let _action = app.handle_message(&AppMsg::End);
    assert_eq!(app.cursor_position(), 2);

    let _action = app.handle_message(&AppMsg::SetCountry(Some("Portugal".to_owned())));

    assert_eq!(app.cursor_position(), 1);
}

#[rstest]
fn cursor_stays_put_when_the_list_is_empty() {
    let mut app = setup_app(0, 4);

    let _action = app.handle_message(&AppMsg::CursorDown);
    let _action = app.handle_message(&AppMsg::End);

    assert_eq!(app.cursor_position(), 0);
}
