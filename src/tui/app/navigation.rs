//! Navigation handlers and cursor management.
//!
//! Each navigation method moves the cursor and then adjusts scrolling so
//! the cursor remains in the visible window.

use crate::tui::messages::{AppAction, AppMsg};

use super::ReviewsApp;

impl ReviewsApp {
    /// Dispatches navigation messages to their handlers.
    pub(super) fn handle_navigation_msg(&mut self, msg: &AppMsg) -> Option<AppAction> {
        match msg {
            AppMsg::CursorUp => self.move_cursor_up(1),
            AppMsg::CursorDown => self.move_cursor_down(1),
            AppMsg::PageUp => self.move_cursor_up(self.list_height()),
            AppMsg::PageDown => self.move_cursor_down(self.list_height()),
            AppMsg::Home => self.handle_home(),
            AppMsg::End => self.handle_end(),
            _ => {
                debug_assert!(
                    false,
                    "non-navigation message routed to handle_navigation_msg"
                );
                None
            }
        }
    }

    fn move_cursor_up(&mut self, step: usize) -> Option<AppAction> {
        self.cursor.up(step);
        self.cursor.follow(self.list_height());
        None
    }

    fn move_cursor_down(&mut self, step: usize) -> Option<AppAction> {
        let max_index = self.filtered_count().saturating_sub(1);
        self.cursor.down(step, max_index);
        self.cursor.follow(self.list_height());
        None
    }

    fn handle_home(&mut self) -> Option<AppAction> {
        self.cursor.home();
        None
    }

    fn handle_end(&mut self) -> Option<AppAction> {
        let max_index = self.filtered_count().saturating_sub(1);
        self.cursor.end(max_index);
        self.cursor.follow(self.list_height());
        None
    }
}
