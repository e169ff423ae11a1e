//! Dropdown trigger and panel rendering for the search bar.
//!
//! Every dropdown satisfies the same narrow interface: a trigger cell in
//! the search bar and, when expanded, a bordered panel of rows. The rows
//! themselves come from the application model (distinct values derived
//! from the loaded reviews); this component only renders and measures.

use unicode_width::UnicodeWidthStr;

use crate::tui::state::DropdownId;

/// Marker appended to every trigger label.
const TRIGGER_MARKER: &str = "v";

/// Horizontal padding inside a panel row, each side.
const PANEL_PADDING: usize = 1;

/// Context for rendering an expanded dropdown panel.
#[derive(Debug, Clone)]
pub struct PanelViewContext<'a> {
    /// Panel rows, topmost first.
    pub rows: &'a [String],
    /// Index of the highlighted row.
    pub highlight: usize,
    /// Whether rows respond to selection (informational panels do not).
    pub selectable: bool,
}

/// Renders a dropdown trigger cell for the search bar.
///
/// The cell shows the tracked selection when one is active and the
/// dropdown's own label otherwise.
#[must_use]
pub fn trigger_cell(id: DropdownId, selection: Option<&str>, expanded: bool) -> String {
    let text = selection.unwrap_or_else(|| id.label());
    let marker = if expanded { "^" } else { TRIGGER_MARKER };
    format!("[ {text} {marker} ]")
}

/// Returns the outer width and height of a panel in terminal cells.
///
/// Height covers the rows plus the top and bottom border; width covers the
/// widest row plus padding and the side borders.
#[must_use]
pub fn panel_size(rows: &[String]) -> (usize, usize) {
    let widest = rows.iter().map(|row| row.width()).max().unwrap_or(0);
    let width = widest + 2 * PANEL_PADDING + 2;
    let height = rows.len() + 2;
    (width, height)
}

/// Renders an expanded panel as bordered display lines.
///
/// The highlighted row carries a `>` marker when the panel is selectable.
#[must_use]
pub fn panel_lines(ctx: &PanelViewContext<'_>) -> Vec<String> {
    let (width, _) = panel_size(ctx.rows);
    let inner = width.saturating_sub(2);

    let mut lines = Vec::with_capacity(ctx.rows.len() + 2);
    lines.push(format!("+{}+", "-".repeat(inner)));

    for (index, row) in ctx.rows.iter().enumerate() {
        let marker = if ctx.selectable && index == ctx.highlight {
            ">"
        } else {
            " "
        };
        let cell = format!("{marker}{row}");
        lines.push(format!(
            "|{}|",
            super::text_clip::pad_to_width(&cell, inner)
        ));
    }

    lines.push(format!("+{}+", "-".repeat(inner)));
    lines
}
