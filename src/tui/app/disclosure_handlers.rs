//! Disclosure and selection message handlers.
//!
//! These handlers own the exclusive-disclosure protocol: a trigger press
//! or key toggles its dropdown (implicitly collapsing any sibling), a
//! pointer press outside the control region collapses everything, and any
//! tracked selection change collapses everything as a side effect.

use crate::tui::messages::{AppAction, AppMsg};
use crate::tui::state::DropdownId;

use super::ReviewsApp;
use super::layout::HitTarget;

impl ReviewsApp {
    /// Dispatches disclosure messages to their handlers.
    pub(super) fn handle_disclosure_msg(&mut self, msg: &AppMsg) -> Option<AppAction> {
        match msg {
            AppMsg::ToggleDropdown(id) => self.handle_toggle_dropdown(*id),
            AppMsg::DismissDropdowns => self.handle_dismiss_dropdowns(),
            AppMsg::PointerPressed { column, row } => {
                self.handle_pointer_pressed(usize::from(*column), usize::from(*row))
            }
            AppMsg::HighlightUp => self.handle_highlight_up(),
            AppMsg::HighlightDown => self.handle_highlight_down(),
            AppMsg::ConfirmHighlight => self.handle_confirm_highlight(),
            _ => {
                debug_assert!(false, "non-disclosure message routed to handle_disclosure_msg");
                None
            }
        }
    }

    /// Dispatches tracked-selection messages to their handlers.
    pub(super) fn handle_selection_msg(&mut self, msg: &AppMsg) -> Option<AppAction> {
        match msg {
            AppMsg::SetLocation(value) => self.handle_set_location(value.clone()),
            AppMsg::SetCountry(value) => self.handle_set_country(value.clone()),
            AppMsg::SetTourType(value) => self.handle_set_tour_type(value.clone()),
            AppMsg::ClearSelections => self.handle_clear_selections(),
            _ => {
                debug_assert!(false, "non-selection message routed to handle_selection_msg");
                None
            }
        }
    }

    fn handle_toggle_dropdown(&mut self, id: DropdownId) -> Option<AppAction> {
        self.disclosure.toggle(id);
        self.panel_highlight = 0;
        None
    }

    fn handle_dismiss_dropdowns(&mut self) -> Option<AppAction> {
        self.disclosure.dismiss();
        None
    }

    /// Handles a pointer press anywhere on the terminal.
    ///
    /// The press is classified against the header layout: triggers toggle,
    /// panel rows select, anything outside the control region collapses
    /// every dropdown.
    fn handle_pointer_pressed(&mut self, column: usize, row: usize) -> Option<AppAction> {
        match self.header_layout().hit_test(column, row) {
            HitTarget::Trigger(id) => self.handle_toggle_dropdown(id),
            HitTarget::PanelRow(index) => self.apply_panel_row(index),
            HitTarget::Inert => None,
            HitTarget::Outside => self.handle_dismiss_dropdowns(),
        }
    }

    fn handle_highlight_up(&mut self) -> Option<AppAction> {
        self.panel_highlight = self.panel_highlight.saturating_sub(1);
        None
    }

    fn handle_highlight_down(&mut self) -> Option<AppAction> {
        let row_count = self
            .disclosure
            .active()
            .map_or(0, |id| self.panel_rows(id).len());
        let max_index = row_count.saturating_sub(1);
        self.panel_highlight = self.panel_highlight.saturating_add(1).min(max_index);
        None
    }

    fn handle_confirm_highlight(&mut self) -> Option<AppAction> {
        self.apply_panel_row(self.panel_highlight)
    }

    /// Applies a panel row of the open dropdown.
    ///
    /// Row 0 of a selectable panel clears that selection; later rows pick
    /// the corresponding option. The panel always ends up collapsed, even
    /// when re-selecting the value that was already active.
    fn apply_panel_row(&mut self, index: usize) -> Option<AppAction> {
        let Some(id) = self.disclosure.active() else {
            return None;
        };

        if Self::panel_selectable(id) {
            let value = self
                .panel_rows(id)
                .get(index)
                .filter(|_| index > 0)
                .cloned();
            let action = match id {
                DropdownId::Location => self.handle_set_location(value),
                DropdownId::TourType => self.handle_set_tour_type(value),
                DropdownId::Country => self.handle_set_country(value),
                DropdownId::Calendar => None,
            };
            self.disclosure.dismiss();
            return action;
        }

        self.disclosure.dismiss();
        None
    }

    fn handle_set_location(&mut self, value: Option<String>) -> Option<AppAction> {
        if self.selections.set_location(value) {
            self.on_tracked_selection_changed();
        }
        None
    }

    fn handle_set_country(&mut self, value: Option<String>) -> Option<AppAction> {
        if self.selections.set_country(value) {
            self.on_tracked_selection_changed();
        }
        None
    }

    fn handle_set_tour_type(&mut self, value: Option<String>) -> Option<AppAction> {
        if self.selections.set_tour_type(value) {
            self.on_tracked_selection_changed();
        }
        None
    }

    fn handle_clear_selections(&mut self) -> Option<AppAction> {
        if self.selections.clear() {
            self.on_tracked_selection_changed();
        }
        None
    }

    /// Reacts to any tracked selection change.
    ///
    /// Collapses every dropdown, rebuilds the filtered view, and keeps the
    /// cursor within range.
    fn on_tracked_selection_changed(&mut self) {
        self.disclosure.dismiss();
        self.rebuild_filter_cache();
        self.cursor.clamp(self.filtered_count());
        self.cursor.follow(self.list_height());
    }
}
