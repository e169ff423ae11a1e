//! Exclusive-disclosure and search-selection state for the search bar.
//!
//! This module provides the types behind the search bar's dropdown filters.
//! The design enforces the single-open-dropdown rule structurally: one
//! `Option<DropdownId>` value is the only record of what is expanded, so
//! activating any dropdown implicitly collapses the rest.

use crate::catalog::ReviewItem;

/// Identifier for a dropdown filter control in the search bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DropdownId {
    /// Departure dates panel.
    Calendar,
    /// Destination city filter.
    Location,
    /// Tour category filter.
    TourType,
    /// Destination country filter.
    Country,
}

impl DropdownId {
    /// All dropdowns, in search-bar display order.
    pub const ALL: [Self; 4] = [Self::Calendar, Self::Location, Self::TourType, Self::Country];

    /// Returns the trigger label shown when no selection is active.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Calendar => "Dates",
            Self::Location => "Where to?",
            Self::TourType => "Tour type",
            Self::Country => "Country",
        }
    }
}

/// Tracks which single dropdown (if any) is currently expanded.
///
/// At most one dropdown is expanded at any observable time. The invariant
/// is not enforced by per-dropdown flags but by this type storing a single
/// active identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisclosureState {
    active: Option<DropdownId>,
}

impl DisclosureState {
    /// Creates the initial state with every dropdown collapsed.
    #[must_use]
    pub const fn new() -> Self {
        Self { active: None }
    }

    /// Expands the given dropdown, collapsing any other.
    pub const fn activate(&mut self, id: DropdownId) {
        self.active = Some(id);
    }

    /// Toggles the given dropdown: expands it, or collapses it when it is
    /// already the expanded one.
    pub fn toggle(&mut self, id: DropdownId) {
        if self.active == Some(id) {
            self.active = None;
        } else {
            self.active = Some(id);
        }
    }

    /// Collapses every dropdown.
    pub const fn dismiss(&mut self) {
        self.active = None;
    }

    /// Returns the currently expanded dropdown, if any.
    #[must_use]
    pub const fn active(&self) -> Option<DropdownId> {
        self.active
    }

    /// Returns true if the given dropdown is expanded.
    #[must_use]
    pub fn is_expanded(&self, id: DropdownId) -> bool {
        self.active == Some(id)
    }
}

/// The three tracked filter selections of the search bar.
///
/// The values are independent: no invariant links them to each other. The
/// calendar dropdown deliberately contributes no selection here; only these
/// three values are "tracked", meaning a change to any of them collapses
/// whatever dropdown is open (the caller observes the change through the
/// boolean returned by the setters).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchSelections {
    /// Selected destination city, if any.
    pub location: Option<String>,
    /// Selected destination country, if any.
    pub country: Option<String>,
    /// Selected tour category, if any.
    pub tour_type: Option<String>,
}

impl SearchSelections {
    /// Creates an empty selection set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            location: None,
            country: None,
            tour_type: None,
        }
    }

    /// Sets the location selection, returning true if the value changed.
    pub fn set_location(&mut self, value: Option<String>) -> bool {
        Self::replace(&mut self.location, value)
    }

    /// Sets the country selection, returning true if the value changed.
    pub fn set_country(&mut self, value: Option<String>) -> bool {
        Self::replace(&mut self.country, value)
    }

    /// Sets the tour type selection, returning true if the value changed.
    pub fn set_tour_type(&mut self, value: Option<String>) -> bool {
        Self::replace(&mut self.tour_type, value)
    }

    /// Clears every selection, returning true if any value changed.
    pub fn clear(&mut self) -> bool {
        let changed = self.location.is_some() || self.country.is_some() || self.tour_type.is_some();
        self.location = None;
        self.country = None;
        self.tour_type = None;
        changed
    }

    /// Returns the selection paired with the given dropdown, if any.
    ///
    /// The calendar dropdown carries no tracked selection and always
    /// returns `None`.
    #[must_use]
    pub fn selection_for(&self, id: DropdownId) -> Option<&str> {
        match id {
            DropdownId::Calendar => None,
            DropdownId::Location => self.location.as_deref(),
            DropdownId::TourType => self.tour_type.as_deref(),
            DropdownId::Country => self.country.as_deref(),
        }
    }

    /// Returns true if the review matches every active selection.
    ///
    /// A selection matches when the review carries an equal value in the
    /// corresponding field; a review without the field never matches an
    /// active selection.
    #[must_use]
    pub fn matches(&self, review: &ReviewItem) -> bool {
        Self::field_matches(self.location.as_deref(), review.location.as_deref())
            && Self::field_matches(self.country.as_deref(), review.country.as_deref())
            && Self::field_matches(self.tour_type.as_deref(), review.tour_type.as_deref())
    }

    fn field_matches(selection: Option<&str>, field: Option<&str>) -> bool {
        selection.is_none_or(|wanted| field == Some(wanted))
    }

    fn replace(slot: &mut Option<String>, value: Option<String>) -> bool {
        if *slot == value {
            return false;
        }
        *slot = value;
        true
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::catalog::models::test_support::review_in;

    #[rstest]
    #[case(DropdownId::Calendar)]
    #[case(DropdownId::Location)]
    #[case(DropdownId::TourType)]
    #[case(DropdownId::Country)]
    fn activating_one_dropdown_collapses_every_other(#[case] first: DropdownId) {
        let mut state = DisclosureState::new();
        state.activate(first);

        for second in DropdownId::ALL {
            state.activate(second);
            assert!(state.is_expanded(second));
            for other in DropdownId::ALL {
                if other != second {
                    assert!(!state.is_expanded(other));
                }
            }
        }
    }

    #[test]
    fn toggle_collapses_the_expanded_dropdown() {
        let mut state = DisclosureState::new();

        state.toggle(DropdownId::Location);
        assert!(state.is_expanded(DropdownId::Location));

        state.toggle(DropdownId::Location);
        assert_eq!(state.active(), None);
    }

    #[test]
    fn toggle_switches_between_siblings() {
        let mut state = DisclosureState::new();

        state.toggle(DropdownId::Location);
        state.toggle(DropdownId::Country);

        assert!(state.is_expanded(DropdownId::Country));
        assert!(!state.is_expanded(DropdownId::Location));
    }

    #[test]
    fn dismiss_collapses_everything() {
        let mut state = DisclosureState::new();
        state.activate(DropdownId::Calendar);

        state.dismiss();

        assert_eq!(state.active(), None);
    }

    #[test]
    fn initial_state_has_everything_collapsed() {
        let state = DisclosureState::new();

        for id in DropdownId::ALL {
            assert!(!state.is_expanded(id));
        }
    }

    #[test]
    fn setters_report_changes_by_value() {
        let mut selections = SearchSelections::new();

        assert!(selections.set_location(Some("Lisbon".to_owned())));
        assert!(!selections.set_location(Some("Lisbon".to_owned())));
        assert!(selections.set_location(None));
        assert!(!selections.set_location(None));
    }

    #[test]
    fn clear_reports_whether_anything_was_set() {
        let mut selections = SearchSelections::new();
        assert!(!selections.clear());

        let _changed = selections.set_country(Some("Portugal".to_owned()));
        assert!(selections.clear());
        assert_eq!(selections, SearchSelections::new());
    }

    #[test]
    fn calendar_carries_no_tracked_selection() {
        let mut selections = SearchSelections::new();
        let _changed = selections.set_location(Some("Lisbon".to_owned()));

        assert_eq!(selections.selection_for(DropdownId::Calendar), None);
        assert_eq!(
            selections.selection_for(DropdownId::Location),
            Some("Lisbon")
        );
    }

    #[test]
    fn matches_requires_every_active_selection() {
        let review = review_in(1, "Lisbon", "Portugal", "City break");

        let mut selections = SearchSelections::new();
        assert!(selections.matches(&review));

        let _changed = selections.set_location(Some("Lisbon".to_owned()));
        assert!(selections.matches(&review));

        let _changed = selections.set_tour_type(Some("Safari".to_owned()));
        assert!(!selections.matches(&review));
    }

    #[test]
    fn reviews_without_the_field_never_match_an_active_selection() {
        let mut review = review_in(1, "Lisbon", "Portugal", "City break");
        review.country = None;

        let mut selections = SearchSelections::new();
        let _changed = selections.set_country(Some("Portugal".to_owned()));

        assert!(!selections.matches(&review));
    }
}
