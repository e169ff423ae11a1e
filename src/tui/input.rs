//! Input handling for the TUI application.
//!
//! This module provides key-to-message and pointer-to-message mapping for
//! translating terminal events into application messages. Key mapping is
//! context-aware: an open dropdown captures the navigation keys for its
//! panel highlight.

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};

use super::messages::AppMsg;
use super::state::DropdownId;

/// Input context determining how navigation keys are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    /// Normal browsing: navigation keys drive the review list.
    Browse,
    /// A dropdown panel is open: navigation keys drive its highlight.
    DropdownOpen,
}

/// Maps a key event to an application message.
///
/// Returns `None` for unrecognised key events, allowing them to be ignored.
#[must_use]
pub fn map_key_to_message(key: &KeyEvent, context: InputContext) -> Option<AppMsg> {
    match key.code {
        KeyCode::Char('q') => Some(AppMsg::Quit),
        KeyCode::Char('d') => Some(AppMsg::ToggleDropdown(DropdownId::Calendar)),
        KeyCode::Char('l') => Some(AppMsg::ToggleDropdown(DropdownId::Location)),
        KeyCode::Char('t') => Some(AppMsg::ToggleDropdown(DropdownId::TourType)),
        KeyCode::Char('c') => Some(AppMsg::ToggleDropdown(DropdownId::Country)),
        KeyCode::Char('x') => Some(AppMsg::ClearSelections),
        KeyCode::Char('r') => Some(AppMsg::ReloadRequested),
        KeyCode::Char('?') => Some(AppMsg::ToggleHelp),
        _ => match context {
            InputContext::Browse => map_browse_key(key.code),
            InputContext::DropdownOpen => map_panel_key(key.code),
        },
    }
}

fn map_browse_key(code: KeyCode) -> Option<AppMsg> {
    match code {
        KeyCode::Char('j') | KeyCode::Down => Some(AppMsg::CursorDown),
        KeyCode::Char('k') | KeyCode::Up => Some(AppMsg::CursorUp),
        KeyCode::PageDown => Some(AppMsg::PageDown),
        KeyCode::PageUp => Some(AppMsg::PageUp),
        KeyCode::Home | KeyCode::Char('g') => Some(AppMsg::Home),
        KeyCode::End | KeyCode::Char('G') => Some(AppMsg::End),
        KeyCode::Esc => Some(AppMsg::ClearSelections),
        _ => None,
    }
}

fn map_panel_key(code: KeyCode) -> Option<AppMsg> {
    match code {
        KeyCode::Char('j') | KeyCode::Down => Some(AppMsg::HighlightDown),
        KeyCode::Char('k') | KeyCode::Up => Some(AppMsg::HighlightUp),
        KeyCode::Enter => Some(AppMsg::ConfirmHighlight),
        KeyCode::Esc => Some(AppMsg::DismissDropdowns),
        _ => None,
    }
}

/// Maps a mouse event to an application message.
///
/// Only left-button presses and wheel scrolling are meaningful; every
/// other pointer event is ignored.
#[must_use]
pub const fn map_mouse_to_message(mouse: &MouseEvent) -> Option<AppMsg> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(AppMsg::PointerPressed {
            column: mouse.column,
            row: mouse.row,
        }),
        MouseEventKind::ScrollUp => Some(AppMsg::CursorUp),
        MouseEventKind::ScrollDown => Some(AppMsg::CursorDown),
        _ => None,
    }
}
