//! State management for the review browsing TUI.
//!
//! This module provides the core state types: the exclusive-disclosure
//! controller for the search bar dropdowns and the cursor state for the
//! review list.

mod cursor;
mod disclosure;

pub use cursor::ListCursor;
pub use disclosure::{DisclosureState, DropdownId, SearchSelections};
