//! UI components for the review browsing TUI.
//!
//! Each component is a pure view: it renders state handed to it through a
//! context value and never mutates application state itself.

pub mod dropdown;
pub mod loader;
pub mod review_list;
pub mod text_clip;

pub use dropdown::{PanelViewContext, panel_lines, panel_size, trigger_cell};
pub use loader::LoaderComponent;
pub use review_list::{ReviewListComponent, ReviewListViewContext};
pub use text_clip::clip_review_text;
