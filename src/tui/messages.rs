//! Message types for the TUI update loop.
//!
//! This module defines all message types that can be sent to the
//! application's update function. Messages represent user actions, data
//! source results, and system events.

use crate::catalog::ReviewItem;

use super::state::DropdownId;

/// Messages for the review browsing TUI application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMsg {
    // Navigation
    /// Move cursor up one item.
    CursorUp,
    /// Move cursor down one item.
    CursorDown,
    /// Move cursor up one page.
    PageUp,
    /// Move cursor down one page.
    PageDown,
    /// Move cursor to first item.
    Home,
    /// Move cursor to last item.
    End,

    // Disclosure
    /// Expand the given dropdown, or collapse it when already expanded.
    ToggleDropdown(DropdownId),
    /// Collapse every dropdown.
    DismissDropdowns,
    /// Pointer pressed at the given terminal cell.
    PointerPressed {
        /// Terminal column of the press (0-indexed).
        column: u16,
        /// Terminal row of the press (0-indexed).
        row: u16,
    },
    /// Move the open panel highlight up one row.
    HighlightUp,
    /// Move the open panel highlight down one row.
    HighlightDown,
    /// Apply the highlighted panel row.
    ConfirmHighlight,

    // Tracked selections
    /// Set or clear the location selection.
    SetLocation(Option<String>),
    /// Set or clear the country selection.
    SetCountry(Option<String>),
    /// Set or clear the tour type selection.
    SetTourType(Option<String>),
    /// Clear every tracked selection.
    ClearSelections,

    // Data loading
    /// Request a reload from the review source.
    ReloadRequested,
    /// Load completed successfully with new data.
    ReviewsLoaded(Vec<ReviewItem>),
    /// Load failed with an error.
    LoadFailed(String),

    // Application lifecycle
    /// Animation timer tick.
    Tick,
    /// Terminal window was resized.
    WindowResized {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },
    /// Toggle help overlay.
    ToggleHelp,
    /// Quit the application.
    Quit,
}

impl AppMsg {
    /// Returns true for cursor navigation messages.
    #[must_use]
    pub const fn is_navigation(&self) -> bool {
        matches!(
            self,
            Self::CursorUp | Self::CursorDown | Self::PageUp | Self::PageDown | Self::Home | Self::End
        )
    }

    /// Returns true for disclosure-control messages.
    #[must_use]
    pub const fn is_disclosure(&self) -> bool {
        matches!(
            self,
            Self::ToggleDropdown(_)
                | Self::DismissDropdowns
                | Self::PointerPressed { .. }
                | Self::HighlightUp
                | Self::HighlightDown
                | Self::ConfirmHighlight
        )
    }

    /// Returns true for tracked-selection messages.
    #[must_use]
    pub const fn is_selection(&self) -> bool {
        matches!(
            self,
            Self::SetLocation(_) | Self::SetCountry(_) | Self::SetTourType(_) | Self::ClearSelections
        )
    }

    /// Returns true for data loading messages.
    #[must_use]
    pub const fn is_data(&self) -> bool {
        matches!(
            self,
            Self::ReloadRequested | Self::ReviewsLoaded(_) | Self::LoadFailed(_)
        )
    }
}

/// Effects the application requests from the runner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Stop the event loop and tear the terminal session down.
    Quit,
    /// Ask the source task for a fresh load.
    Reload,
}
