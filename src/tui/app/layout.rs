//! Screen-region layout for the page header and search bar.
//!
//! The layout is the single source of truth for where the dropdown
//! triggers and the open panel sit on screen: the renderer places cells by
//! these regions and the pointer handler hit-tests against the same
//! regions, so what the user sees and what a press means cannot drift
//! apart.

use unicode_width::UnicodeWidthStr;

use crate::tui::components::dropdown;
use crate::tui::state::DropdownId;

/// Row of the search bar, below the two header lines and a blank line.
pub(crate) const SEARCH_BAR_ROW: usize = 3;

/// First row of an open dropdown panel.
pub(crate) const PANEL_TOP_ROW: usize = 4;

/// Column where the first trigger cell starts.
const BAR_LEFT_MARGIN: usize = 1;

/// Columns between trigger cells.
const TRIGGER_GAP: usize = 2;

/// A rectangular region of terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Region {
    /// Leftmost column.
    pub x: usize,
    /// Topmost row.
    pub y: usize,
    /// Width in columns.
    pub width: usize,
    /// Height in rows.
    pub height: usize,
}

impl Region {
    /// Returns true if the cell lies within this region.
    pub(crate) const fn contains(&self, column: usize, row: usize) -> bool {
        column >= self.x
            && column < self.x.saturating_add(self.width)
            && row >= self.y
            && row < self.y.saturating_add(self.height)
    }
}

/// A dropdown trigger cell placed in the search bar.
#[derive(Debug, Clone)]
pub(crate) struct TriggerCell {
    /// Which dropdown this trigger controls.
    pub id: DropdownId,
    /// Rendered cell text.
    pub cell: String,
    /// Screen region the cell occupies.
    pub region: Region,
}

/// An open dropdown panel placed under its trigger.
#[derive(Debug, Clone)]
pub(crate) struct PanelPlacement {
    /// Which dropdown the panel belongs to.
    pub id: DropdownId,
    /// Screen region the panel occupies, borders included.
    pub region: Region,
    /// Number of content rows inside the borders.
    pub row_count: usize,
}

/// What a pointer press at a given cell refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum HitTarget {
    /// A dropdown trigger cell.
    Trigger(DropdownId),
    /// A content row of the open panel (0-indexed).
    PanelRow(usize),
    /// Inside the control group but on nothing interactive.
    Inert,
    /// Outside the control group's bounding region.
    Outside,
}

/// Computed layout of the search bar and any open panel.
#[derive(Debug, Clone)]
pub(crate) struct HeaderLayout {
    triggers: Vec<TriggerCell>,
    container: Region,
    panel: Option<PanelPlacement>,
}

impl HeaderLayout {
    /// Computes the layout from rendered trigger cells and the open panel.
    ///
    /// `triggers` is the search-bar content in display order; `panel`
    /// carries the open dropdown and its content rows, if any.
    pub(crate) fn compute(
        triggers: Vec<(DropdownId, String)>,
        panel: Option<(DropdownId, &[String])>,
    ) -> Self {
        let mut cells = Vec::with_capacity(triggers.len());
        let mut x = BAR_LEFT_MARGIN;
        for (id, cell) in triggers {
            let width = cell.width();
            cells.push(TriggerCell {
                id,
                cell,
                region: Region {
                    x,
                    y: SEARCH_BAR_ROW,
                    width,
                    height: 1,
                },
            });
            x = x.saturating_add(width).saturating_add(TRIGGER_GAP);
        }

        let bar_end = cells
            .last()
            .map_or(BAR_LEFT_MARGIN, |cell| cell.region.x + cell.region.width);
        let container = Region {
            x: BAR_LEFT_MARGIN,
            y: SEARCH_BAR_ROW,
            width: bar_end.saturating_sub(BAR_LEFT_MARGIN),
            height: 1,
        };

        let panel = panel.map(|(id, rows)| {
            let (width, height) = dropdown::panel_size(rows);
            let anchor_x = cells
                .iter()
                .find(|cell| cell.id == id)
                .map_or(BAR_LEFT_MARGIN, |cell| cell.region.x);
            PanelPlacement {
                id,
                region: Region {
                    x: anchor_x,
                    y: PANEL_TOP_ROW,
                    width,
                    height,
                },
                row_count: rows.len(),
            }
        });

        Self {
            triggers: cells,
            container,
            panel,
        }
    }

    /// Returns the trigger cells in display order.
    pub(crate) fn triggers(&self) -> &[TriggerCell] {
        &self.triggers
    }

    /// Returns the open panel placement, if any.
    pub(crate) const fn panel(&self) -> Option<&PanelPlacement> {
        self.panel.as_ref()
    }

    /// Classifies a pointer press against the layout.
    pub(crate) fn hit_test(&self, column: usize, row: usize) -> HitTarget {
        for cell in &self.triggers {
            if cell.region.contains(column, row) {
                return HitTarget::Trigger(cell.id);
            }
        }

        if let Some(panel) = &self.panel {
            if panel.region.contains(column, row) {
                let content_top = panel.region.y.saturating_add(1);
                if row >= content_top && row < content_top.saturating_add(panel.row_count) {
                    return HitTarget::PanelRow(row - content_top);
                }
                return HitTarget::Inert;
            }
        }

        if self.container.contains(column, row) {
            return HitTarget::Inert;
        }

        HitTarget::Outside
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar_triggers() -> Vec<(DropdownId, String)> {
        DropdownId::ALL
            .into_iter()
            .map(|id| (id, format!("[ {} v ]", id.label())))
            .collect()
    }

    #[test]
    fn triggers_are_laid_out_left_to_right_without_overlap() {
        let layout = HeaderLayout::compute(bar_triggers(), None);

        let mut last_end = 0;
        for cell in layout.triggers() {
            assert!(cell.region.x >= last_end);
            last_end = cell.region.x + cell.region.width;
        }
    }

    #[test]
    fn press_on_a_trigger_resolves_to_its_dropdown() {
        let layout = HeaderLayout::compute(bar_triggers(), None);
        let second = layout.triggers().get(1).cloned().map(|cell| cell.region);
        let region = second.unwrap_or(Region {
            x: 0,
            y: 0,
            width: 0,
            height: 0,
        });

        assert_eq!(
            layout.hit_test(region.x, SEARCH_BAR_ROW),
            HitTarget::Trigger(DropdownId::Location)
        );
    }

    #[test]
    fn press_between_triggers_is_inert() {
        let layout = HeaderLayout::compute(bar_triggers(), None);
        let first_end = layout
            .triggers()
            .first()
            .map_or(0, |cell| cell.region.x + cell.region.width);

        assert_eq!(layout.hit_test(first_end, SEARCH_BAR_ROW), HitTarget::Inert);
    }

    #[test]
    fn press_below_the_bar_is_outside_without_a_panel() {
        let layout = HeaderLayout::compute(bar_triggers(), None);

        assert_eq!(layout.hit_test(2, 10), HitTarget::Outside);
        assert_eq!(layout.hit_test(2, 0), HitTarget::Outside);
    }

    #[test]
    fn panel_rows_resolve_by_content_row() {
        let rows = vec!["All locations".to_owned(), "Lisbon".to_owned()];
        let layout =
            HeaderLayout::compute(bar_triggers(), Some((DropdownId::Location, rows.as_slice())));
        let panel = layout.panel().map(|panel| panel.region);
        let region = panel.unwrap_or(Region {
            x: 0,
            y: 0,
            width: 0,
            height: 0,
        });

        // Top border is inert, first content row is row 0.
        assert_eq!(layout.hit_test(region.x, region.y), HitTarget::Inert);
        assert_eq!(layout.hit_test(region.x, region.y + 1), HitTarget::PanelRow(0));
        assert_eq!(layout.hit_test(region.x, region.y + 2), HitTarget::PanelRow(1));
        // Below the bottom border is outside again.
        assert_eq!(
            layout.hit_test(region.x, region.y + region.height),
            HitTarget::Outside
        );
    }

    #[test]
    fn panel_anchors_under_its_trigger() {
        let rows = vec!["Safari".to_owned()];
        let layout = HeaderLayout::compute(bar_triggers(), Some((DropdownId::TourType, rows.as_slice())));

        let trigger_x = layout
            .triggers()
            .iter()
            .find(|cell| cell.id == DropdownId::TourType)
            .map_or(0, |cell| cell.region.x);
        let panel_x = layout.panel().map_or(usize::MAX, |panel| panel.region.x);

        assert_eq!(panel_x, trigger_x);
    }
}
