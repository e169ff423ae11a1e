//! Main TUI application model implementing the MVU pattern.
//!
//! This module provides the core application state and update logic for
//! the review browsing TUI. It coordinates the exclusive-disclosure
//! controller, the tracked search selections, cursor state, and data
//! loading.
//!
//! # Module Structure
//!
//! - `disclosure_handlers`: Dropdown activation, pointer, and selection handling
//! - `lifecycle_handlers`: Data loading, ticks, resize, help, quit
//! - `navigation`: Cursor movement and viewport following
//! - `rendering`: View rendering methods for terminal output
//! - `layout`: Screen regions and pointer hit-testing

use std::collections::{BTreeMap, BTreeSet};

use crate::catalog::ReviewItem;

use super::components::{LoaderComponent, ReviewListComponent, dropdown};
use super::input::InputContext;
use super::messages::{AppAction, AppMsg};
use super::state::{DisclosureState, DropdownId, ListCursor, SearchSelections};

mod disclosure_handlers;
mod layout;
mod lifecycle_handlers;
mod navigation;
mod rendering;

use layout::HeaderLayout;

/// Default page header title, matching the reviews page copy.
const DEFAULT_HEADING: &str = "Feedback & Insights";

/// Default page header tagline.
const DEFAULT_TAGLINE: &str =
    "Share your travel experiences! Rate your itineraries and help others plan their perfect trips.";

/// Main application model for the review browsing TUI.
#[derive(Debug)]
pub struct ReviewsApp {
    /// All review entries (unfiltered).
    pub(crate) reviews: Vec<ReviewItem>,
    /// Cached indices of reviews matching the current selections.
    /// Invalidated when reviews or selections change.
    filtered_indices: Vec<usize>,
    /// Which dropdown, if any, is expanded.
    pub(crate) disclosure: DisclosureState,
    /// The three tracked filter selections.
    pub(crate) selections: SearchSelections,
    /// Highlighted row within the open panel.
    pub(crate) panel_highlight: usize,
    /// Cursor and scroll state for the review list.
    pub(crate) cursor: ListCursor,
    /// Distinct locations present in the data, sorted.
    location_options: Vec<String>,
    /// Distinct countries present in the data, sorted.
    country_options: Vec<String>,
    /// Distinct tour types present in the data, sorted.
    tour_type_options: Vec<String>,
    /// Departure month summaries for the calendar panel.
    month_summaries: Vec<String>,
    /// Whether data is currently loading.
    pub(crate) loading: bool,
    /// Current error message, if any.
    pub(crate) error: Option<String>,
    /// Terminal dimensions.
    width: u16,
    height: u16,
    /// Whether the help overlay is visible.
    pub(crate) show_help: bool,
    /// Review list component.
    review_list: ReviewListComponent,
    /// Loading animation component.
    loader: LoaderComponent,
    /// Page header title.
    heading: String,
    /// Page header tagline.
    tagline: String,
}

impl Default for ReviewsApp {
    fn default() -> Self {
        Self::new()
    }
}

impl ReviewsApp {
    /// Creates an application awaiting its initial load.
    #[must_use]
    pub fn new() -> Self {
        Self {
            reviews: Vec::new(),
            filtered_indices: Vec::new(),
            disclosure: DisclosureState::new(),
            selections: SearchSelections::new(),
            panel_highlight: 0,
            cursor: ListCursor::new(),
            location_options: Vec::new(),
            country_options: Vec::new(),
            tour_type_options: Vec::new(),
            month_summaries: Vec::new(),
            loading: true,
            error: None,
            width: 80,
            height: 24,
            show_help: false,
            review_list: ReviewListComponent::new(),
            loader: LoaderComponent::new(),
            heading: DEFAULT_HEADING.to_owned(),
            tagline: DEFAULT_TAGLINE.to_owned(),
        }
    }

    /// Creates an application already holding the given reviews.
    #[must_use]
    pub fn with_reviews(reviews: Vec<ReviewItem>) -> Self {
        let mut app = Self::new();
        let _action = app.handle_message(&AppMsg::ReviewsLoaded(reviews));
        app
    }

    /// Overrides the page header copy where values are provided.
    #[must_use]
    pub fn with_page_header(mut self, heading: Option<String>, tagline: Option<String>) -> Self {
        if let Some(heading) = heading {
            self.heading = heading;
        }
        if let Some(tagline) = tagline {
            self.tagline = tagline;
        }
        self
    }

    /// Returns the count of filtered reviews.
    #[must_use]
    pub const fn filtered_count(&self) -> usize {
        self.filtered_indices.len()
    }

    /// Returns the currently filtered reviews in input order.
    #[must_use]
    pub fn filtered_reviews(&self) -> Vec<&ReviewItem> {
        self.filtered_indices
            .iter()
            .filter_map(|&index| self.reviews.get(index))
            .collect()
    }

    /// Returns the current cursor position.
    #[must_use]
    pub const fn cursor_position(&self) -> usize {
        self.cursor.position
    }

    /// Returns the expanded dropdown, if any.
    #[must_use]
    pub const fn active_dropdown(&self) -> Option<DropdownId> {
        self.disclosure.active()
    }

    /// Returns the tracked selections.
    #[must_use]
    pub const fn selections(&self) -> &SearchSelections {
        &self.selections
    }

    /// Returns true while a load is outstanding.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Returns the current input context for context-aware key mapping.
    #[must_use]
    pub const fn input_context(&self) -> InputContext {
        if self.disclosure.active().is_some() {
            InputContext::DropdownOpen
        } else {
            InputContext::Browse
        }
    }

    /// Handles a message and updates state accordingly.
    ///
    /// This method is the core update function that processes all
    /// application messages and returns any resulting runner action. It
    /// delegates to specialised handlers per message family.
    pub fn handle_message(&mut self, msg: &AppMsg) -> Option<AppAction> {
        if self.show_help {
            return self.handle_help_overlay_msg(msg);
        }
        // The loading screen exposes no list or search bar to interact with.
        if self.loading && (msg.is_navigation() || msg.is_disclosure()) {
            return None;
        }
        if msg.is_navigation() {
            return self.handle_navigation_msg(msg);
        }
        if msg.is_disclosure() {
            return self.handle_disclosure_msg(msg);
        }
        if msg.is_selection() {
            return self.handle_selection_msg(msg);
        }
        if msg.is_data() {
            return self.handle_data_msg(msg);
        }
        self.handle_lifecycle_msg(msg)
    }

    /// Rebuilds the filtered indices cache based on the current selections.
    ///
    /// Call this after modifying `reviews` or any tracked selection.
    pub(crate) fn rebuild_filter_cache(&mut self) {
        self.filtered_indices = self
            .reviews
            .iter()
            .enumerate()
            .filter(|(_, review)| self.selections.matches(review))
            .map(|(index, _)| index)
            .collect();
    }

    /// Rebuilds the dropdown option lists from the loaded reviews.
    pub(crate) fn rebuild_options(&mut self) {
        self.location_options = distinct_values(&self.reviews, |review| review.location.as_deref());
        self.country_options = distinct_values(&self.reviews, |review| review.country.as_deref());
        self.tour_type_options =
            distinct_values(&self.reviews, |review| review.tour_type.as_deref());
        self.month_summaries = month_summaries(&self.reviews);
    }

    /// Returns the content rows of the given dropdown's panel.
    ///
    /// Selectable panels lead with an "All …" row that clears the
    /// selection; the calendar panel is informational.
    pub(crate) fn panel_rows(&self, id: DropdownId) -> Vec<String> {
        match id {
            DropdownId::Calendar => {
                if self.month_summaries.is_empty() {
                    vec!["No departures scheduled".to_owned()]
                } else {
                    self.month_summaries.clone()
                }
            }
            DropdownId::Location => with_clear_row("All locations", &self.location_options),
            DropdownId::TourType => with_clear_row("All tour types", &self.tour_type_options),
            DropdownId::Country => with_clear_row("All countries", &self.country_options),
        }
    }

    /// Returns true if the given dropdown's rows respond to selection.
    pub(crate) const fn panel_selectable(id: DropdownId) -> bool {
        !matches!(id, DropdownId::Calendar)
    }

    /// Computes the current header layout for rendering and hit-testing.
    pub(crate) fn header_layout(&self) -> HeaderLayout {
        let triggers = DropdownId::ALL
            .into_iter()
            .map(|id| {
                let cell = dropdown::trigger_cell(
                    id,
                    self.selections.selection_for(id),
                    self.disclosure.is_expanded(id),
                );
                (id, cell)
            })
            .collect();

        match self.disclosure.active() {
            Some(id) => {
                let rows = self.panel_rows(id);
                HeaderLayout::compute(triggers, Some((id, rows.as_slice())))
            }
            None => HeaderLayout::compute(triggers, None),
        }
    }

    /// Returns the number of list lines the current frame can show.
    pub(crate) fn list_height(&self) -> usize {
        let chrome = layout::PANEL_TOP_ROW.saturating_add(1);
        let panel_height = self
            .disclosure
            .active()
            .map_or(0, |id| self.panel_rows(id).len().saturating_add(2));

        usize::from(self.height)
            .saturating_sub(chrome)
            .saturating_sub(panel_height)
            .max(1)
    }

    /// Returns the terminal dimensions.
    pub(crate) const fn dimensions(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    pub(crate) const fn set_dimensions(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
    }
}

/// Collects the distinct values of a review field, sorted.
fn distinct_values<F>(reviews: &[ReviewItem], field: F) -> Vec<String>
where
    F: Fn(&ReviewItem) -> Option<&str>,
{
    let set: BTreeSet<&str> = reviews.iter().filter_map(field).collect();
    set.into_iter().map(ToOwned::to_owned).collect()
}

/// Summarises departure months as "YYYY-MM  (n tours)" rows, sorted.
fn month_summaries(reviews: &[ReviewItem]) -> Vec<String> {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for review in reviews {
        if let Some(date) = review.date {
            let month = date.format("%Y-%m").to_string();
            *counts.entry(month).or_insert(0) += 1;
        }
    }

    counts
        .into_iter()
        .map(|(month, count)| {
            let noun = if count == 1 { "tour" } else { "tours" };
            format!("{month}  ({count} {noun})")
        })
        .collect()
}

/// Prefixes option rows with a clear-selection row.
fn with_clear_row(clear_label: &str, options: &[String]) -> Vec<String> {
    let mut rows = Vec::with_capacity(options.len().saturating_add(1));
    rows.push(clear_label.to_owned());
    rows.extend(options.iter().cloned());
    rows
}

#[cfg(test)]
mod tests;

#[cfg(test)]
mod navigation_tests;
