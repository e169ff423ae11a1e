//! Cursor and scroll state for the review listing.
//!
//! Tracks the user's position within the filtered list. Cursor position is
//! retained when the filtered set changes (clamped to the valid range).

/// Cursor position and scroll offset within the filtered review list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListCursor {
    /// Current cursor position (0-indexed) within the filtered list.
    pub position: usize,
    /// Scroll offset for virtual scrolling (lines scrolled from top).
    pub scroll_offset: usize,
}

impl ListCursor {
    /// Creates a cursor at the top of the list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clamps the cursor position to be within the valid range.
    ///
    /// If the list is empty, the cursor is set to 0. If the cursor exceeds
    /// the list length, it is set to the last valid index.
    pub const fn clamp(&mut self, count: usize) {
        if count == 0 {
            self.position = 0;
            self.scroll_offset = 0;
        } else if self.position >= count {
            self.position = count.saturating_sub(1);
        }
    }

    /// Moves the cursor up by `step` positions if possible.
    pub const fn up(&mut self, step: usize) {
        self.position = self.position.saturating_sub(step);
    }

    /// Moves the cursor down by `step` positions, not past `max_index`.
    pub const fn down(&mut self, step: usize, max_index: usize) {
        let moved = self.position.saturating_add(step);
        self.position = if moved < max_index { moved } else { max_index };
    }

    /// Moves the cursor to the first item and resets scrolling.
    pub const fn home(&mut self) {
        self.position = 0;
        self.scroll_offset = 0;
    }

    /// Moves the cursor to the last item.
    pub const fn end(&mut self, max_index: usize) {
        self.position = max_index;
    }

    /// Adjusts the scroll offset so the cursor stays within a viewport of
    /// `visible_height` lines.
    pub const fn follow(&mut self, visible_height: usize) {
        if self.position < self.scroll_offset {
            self.scroll_offset = self.position;
            return;
        }

        let viewport_end = self.scroll_offset.saturating_add(visible_height);
        if self.position >= viewport_end {
            self.scroll_offset = self
                .position
                .saturating_sub(visible_height.saturating_sub(1));
        }
    }
}
