//! Data loading and lifecycle message handlers.

use crate::catalog::ReviewItem;
use crate::tui::messages::{AppAction, AppMsg};

use super::ReviewsApp;

impl ReviewsApp {
    /// Dispatches data loading messages to their handlers.
    pub(super) fn handle_data_msg(&mut self, msg: &AppMsg) -> Option<AppAction> {
        match msg {
            AppMsg::ReloadRequested => self.handle_reload_requested(),
            AppMsg::ReviewsLoaded(reviews) => self.handle_reviews_loaded(reviews),
            AppMsg::LoadFailed(message) => self.handle_load_failed(message),
            _ => {
                debug_assert!(false, "non-data message routed to handle_data_msg");
                None
            }
        }
    }

    /// Dispatches lifecycle and window messages to their handlers.
    pub(super) fn handle_lifecycle_msg(&mut self, msg: &AppMsg) -> Option<AppAction> {
        match msg {
            AppMsg::Tick => self.handle_tick(),
            AppMsg::WindowResized { width, height } => self.handle_resize(*width, *height),
            AppMsg::ToggleHelp => {
                self.show_help = !self.show_help;
                None
            }
            AppMsg::Quit => Some(AppAction::Quit),
            _ => {
                debug_assert!(
                    false,
                    "non-lifecycle message routed to handle_lifecycle_msg"
                );
                None
            }
        }
    }

    /// Handles any message arriving while the help overlay is visible.
    ///
    /// Quit and resize keep their meaning; every other user-driven message
    /// simply closes the overlay.
    pub(super) fn handle_help_overlay_msg(&mut self, msg: &AppMsg) -> Option<AppAction> {
        match msg {
            AppMsg::Quit => Some(AppAction::Quit),
            AppMsg::WindowResized { width, height } => self.handle_resize(*width, *height),
            AppMsg::ReviewsLoaded(_) | AppMsg::LoadFailed(_) | AppMsg::Tick => {
                // Background progress is applied without closing the overlay.
                if msg.is_data() {
                    return self.handle_data_msg(msg);
                }
                self.handle_lifecycle_msg(msg)
            }
            _ => {
                self.show_help = false;
                None
            }
        }
    }

    fn handle_reload_requested(&mut self) -> Option<AppAction> {
        self.loading = true;
        self.error = None;
        self.loader.reset();
        Some(AppAction::Reload)
    }

    fn handle_reviews_loaded(&mut self, reviews: &[ReviewItem]) -> Option<AppAction> {
        self.reviews = reviews.to_vec();
        self.loading = false;
        self.error = None;
        self.rebuild_options();
        self.rebuild_filter_cache();
        self.cursor.clamp(self.filtered_count());
        // Fresh data may have changed the option lists under an open panel.
        self.panel_highlight = 0;
        None
    }

    fn handle_load_failed(&mut self, message: &str) -> Option<AppAction> {
        self.loading = false;
        self.error = Some(message.to_owned());
        None
    }

    fn handle_tick(&mut self) -> Option<AppAction> {
        if self.loading {
            self.loader.advance();
        }
        None
    }

    fn handle_resize(&mut self, width: u16, height: u16) -> Option<AppAction> {
        self.set_dimensions(width, height);
        self.review_list.set_visible_height(self.list_height());
        self.cursor.follow(self.list_height());
        None
    }
}
