//! Rendering logic for the review browsing TUI.
//!
//! These are pure query methods that read state without modification and
//! produce the frame as a string. The frame is normalised to the terminal
//! dimensions so every cell is rewritten on redraw.

use unicode_width::UnicodeWidthStr;

use crate::tui::components::dropdown::PanelViewContext;
use crate::tui::components::{ReviewListViewContext, dropdown};

use super::ReviewsApp;
use super::layout::HeaderLayout;
use crate::tui::components::text_clip::{centre_to_width, pad_to_width};

impl ReviewsApp {
    /// Renders the full frame for the current state.
    #[must_use]
    pub fn view(&self) -> String {
        if self.show_help {
            return self.normalise_frame(&self.render_help_overlay());
        }

        let mut output = String::new();
        output.push_str(&self.render_header());

        if self.loading {
            output.push_str(&self.render_loader_block());
        } else {
            let layout = self.header_layout();
            output.push_str(&Self::render_search_bar(&layout));
            output.push_str(&self.render_panel(&layout));
            output.push_str(&self.render_list_block());
        }

        output.push_str(&self.render_status_bar());
        self.normalise_frame(&output)
    }

    /// Renders the page header: title, tagline, and a spacer line.
    fn render_header(&self) -> String {
        format!("{}\n{}\n\n", self.heading, self.tagline)
    }

    /// Renders the search bar from the computed layout.
    ///
    /// Cells are placed at their layout regions so the rendered bar and
    /// pointer hit-testing can never disagree.
    fn render_search_bar(layout: &HeaderLayout) -> String {
        let mut bar = String::new();
        for trigger in layout.triggers() {
            let current = bar.width();
            if trigger.region.x > current {
                bar.push_str(&" ".repeat(trigger.region.x - current));
            }
            bar.push_str(&trigger.cell);
        }
        bar.push('\n');
        bar
    }

    /// Renders the open dropdown panel, indented under its trigger.
    fn render_panel(&self, layout: &HeaderLayout) -> String {
        let Some(placement) = layout.panel() else {
            return String::new();
        };

        let rows = self.panel_rows(placement.id);
        let lines = dropdown::panel_lines(&PanelViewContext {
            rows: &rows,
            highlight: self.panel_highlight,
            selectable: Self::panel_selectable(placement.id),
        });

        let indent = " ".repeat(placement.region.x);
        let mut output = String::new();
        for line in lines {
            output.push_str(&indent);
            output.push_str(&line);
            output.push('\n');
        }
        output
    }

    /// Renders the review list, padded to the list area height.
    fn render_list_block(&self) -> String {
        let list_height = self.list_height();
        let ctx = ReviewListViewContext {
            reviews: &self.reviews,
            filtered_indices: &self.filtered_indices,
            cursor_position: self.cursor.position,
            scroll_offset: self.cursor.scroll_offset,
            visible_height: list_height,
        };
        let mut block = self.review_list.view(&ctx);

        let rendered = block.lines().count();
        for _ in rendered..list_height {
            block.push('\n');
        }
        block
    }

    /// Renders the loading animation, centred in the body area.
    fn render_loader_block(&self) -> String {
        let (width, _) = self.dimensions();
        let body_height = self.body_height();
        let lines = self.loader.view();

        let top_pad = body_height
            .saturating_sub(lines.len())
            .saturating_div(2);

        let mut output = String::new();
        for _ in 0..top_pad {
            output.push('\n');
        }
        for line in &lines {
            output.push_str(&centre_to_width(line, usize::from(width)));
            output.push('\n');
        }
        for _ in top_pad.saturating_add(lines.len())..body_height {
            output.push('\n');
        }
        output
    }

    /// Renders the status bar with counts, hints, or the current error.
    fn render_status_bar(&self) -> String {
        if let Some(error) = &self.error {
            return format!("Error: {error}  r:retry q:quit\n");
        }

        if self.loading {
            return "Loading reviews...  q:quit\n".to_owned();
        }

        if self.disclosure.active().is_some() {
            return "Up/Down:choose  Enter:select  Esc:close  q:quit\n".to_owned();
        }

        format!(
            "{}/{} reviews  d:dates l:location t:type c:country x:clear r:reload ?:help q:quit\n",
            self.filtered_count(),
            self.reviews.len()
        )
    }

    /// Renders the help overlay if visible.
    fn render_help_overlay(&self) -> String {
        if !self.show_help {
            return String::new();
        }

        let help_text = r"
=== Keyboard Shortcuts ===

Navigation:
  j, Down    Move cursor down
  k, Up      Move cursor up
  PgDn/PgUp  Page down / up
  Home, g    Go to first review
  End, G     Go to last review

Search bar:
  d          Open departure dates
  l          Open location filter
  t          Open tour type filter
  c          Open country filter
  x, Esc     Clear selections

Open dropdown:
  j/k        Move highlight
  Enter      Select highlighted row
  Esc        Close dropdown

Other:
  r          Reload reviews
  ?          Toggle this help
  q          Quit

Press any key to close this help.
";
        help_text.to_owned()
    }

    /// Rows between the header chrome and the status bar.
    fn body_height(&self) -> usize {
        let (_, height) = self.dimensions();
        usize::from(height).saturating_sub(4).max(1)
    }

    /// Normalises the rendered frame to terminal dimensions.
    ///
    /// Rows are clamped to one column less than terminal width to avoid
    /// autowrap behaviour, while still padding with spaces so stale cells
    /// from a previous frame are cleared.
    fn normalise_frame(&self, output: &str) -> String {
        let (width, height) = self.dimensions();
        let safe_width = usize::from(width).saturating_sub(1).max(1);
        let rows = usize::from(height).max(1);

        let mut lines: Vec<String> = output
            .lines()
            .map(|line| pad_to_width(line, safe_width))
            .collect();
        lines.truncate(rows);

        let missing = rows.saturating_sub(lines.len());
        let blank = " ".repeat(safe_width);
        lines.extend(std::iter::repeat_with(|| blank.clone()).take(missing));

        let mut normalised = lines.join("\n");
        normalised.push('\n');
        normalised
    }
}
