use crate::components::palette_view::PaletteView;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Widget},
};

use super::helpers::{centered_rect_fixed_height, dim_area, draw_drop_shadow};

pub const MAX_VISIBLE_ROWS: u16 = 10;

/// Screen geometry of the palette, shared by rendering and mouse hit-testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteLayout {
    pub modal: Rect,
    pub query: Rect,
    pub separator: Rect,
    pub list: Rect,
}

impl PaletteLayout {
    #[must_use]
    pub fn compute(area: Rect) -> Self {
        // Borders + query + separator + rows
        let modal = centered_rect_fixed_height(60, 4 + MAX_VISIBLE_ROWS, area);
        let inner = Block::default().borders(Borders::ALL).inner(modal);
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Query input
                Constraint::Length(1), // Separator
                Constraint::Min(0),    // Results
            ])
            .split(inner);

        Self {
            modal,
            query: rows[0],
            separator: rows[1],
            list: rows[2],
        }
    }

    /// Row offset inside the result list, if `(column, row)` falls on it.
    #[must_use]
    pub fn list_row(&self, column: u16, row: u16) -> Option<usize> {
        contains(self.list, column, row).then(|| usize::from(row - self.list.y))
    }

    #[must_use]
    pub fn in_modal(&self, column: u16, row: u16) -> bool {
        contains(self.modal, column, row)
    }
}

fn contains(r: Rect, column: u16, row: u16) -> bool {
    column >= r.x && column < r.x + r.width && row >= r.y && row < r.y + r.height
}

pub struct CommandPaletteModal<'a> {
    pub theme: &'a Theme,
    pub view: &'a PaletteView,
    pub query: &'a str,
}

impl Widget for CommandPaletteModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let layout = PaletteLayout::compute(area);
        if layout.modal.width == 0 || layout.modal.height == 0 {
            return;
        }

        dim_area(buf, area);
        draw_drop_shadow(buf, layout.modal, area);
        Clear.render(layout.modal, buf);

        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(" COMMAND MENU ", self.theme.header_active),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_focus);
        block.render(layout.modal, buf);

        let query_line = Line::from(vec![
            Span::styled(" > ", self.theme.footer_segment_key),
            Span::styled(self.query, self.theme.footer_segment_val),
            Span::styled(
                "_",
                self.theme
                    .footer_segment_val
                    .add_modifier(Modifier::SLOW_BLINK),
            ),
        ]);
        buf.set_line(layout.query.x, layout.query.y, &query_line, layout.query.width);

        if layout.separator.height > 0 {
            let separator = "─".repeat(layout.separator.width as usize);
            buf.set_string(
                layout.separator.x,
                layout.separator.y,
                separator,
                self.theme.border_focus,
            );
        }

        if self.view.items.is_empty() {
            let no_results = Line::from(Span::styled("  No results found.", self.theme.dimmed));
            buf.set_line(layout.list.x, layout.list.y, &no_results, layout.list.width);
            return;
        }

        let width = layout.list.width as usize;
        let visible = self
            .view
            .items
            .iter()
            .enumerate()
            .skip(self.view.offset())
            .take(layout.list.height as usize);
        for (row, (i, item)) in visible.enumerate() {
            let selected = self.view.highlighted == Some(i);
            let style = if selected {
                self.theme.list_selected
            } else {
                self.theme.list_item
            };
            let prefix = if selected { "> " } else { "  " };
            let tag = Span::styled(
                format!("{} ", item.tag.as_deref().unwrap_or_default()),
                self.theme.dimmed,
            );
            let label = Span::styled(item.label.as_str(), style);
            // Widths in terminal columns, not bytes
            let padding = width.saturating_sub(2 + label.width() + tag.width());

            let line = Line::from(vec![
                Span::styled(prefix, style),
                label,
                Span::styled(" ".repeat(padding), style),
                tag,
            ]);
            buf.set_line(
                layout.list.x,
                layout.list.y + row as u16,
                &line,
                layout.list.width,
            );
        }
    }
}
