use crate::domain::{models::Command, ports::MenuSurface};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteItem {
    pub id: String,
    pub label: String,
    pub tag: Option<String>,
}

/// Terminal rendering surface for the command menu.
///
/// Holds a snapshot of what the menu last told it, plus the scroll
/// offset of the result list, which only the view cares about.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaletteView {
    pub visible: bool,
    pub items: Vec<PaletteItem>,
    pub highlighted: Option<usize>,
    pub no_results: bool,
    offset: usize,
}

impl PaletteView {
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Scrolls so the highlighted row is inside a window of `height` rows.
    pub fn scroll_to_highlight(&mut self, height: usize) {
        if height == 0 {
            return;
        }
        let max_offset = self.items.len().saturating_sub(height);
        if let Some(h) = self.highlighted {
            if h < self.offset {
                self.offset = h;
            } else if h >= self.offset + height {
                self.offset = h + 1 - height;
            }
        }
        self.offset = self.offset.min(max_offset);
    }

    /// Maps a row inside the result list to an item index.
    #[must_use]
    pub fn item_at_row(&self, row: usize) -> Option<usize> {
        let index = self.offset + row;
        (index < self.items.len()).then_some(index)
    }
}

impl MenuSurface for PaletteView {
    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn render_items(&mut self, items: &[&Command], selected: Option<usize>) {
        self.items = items
            .iter()
            .map(|cmd| PaletteItem {
                id: cmd.id.clone(),
                label: cmd.label.clone(),
                tag: cmd.tag().map(str::to_string),
            })
            .collect();
        self.highlighted = selected;
        self.no_results = false;
        self.offset = 0;
    }

    fn highlight(&mut self, index: usize) {
        self.highlighted = Some(index);
    }

    fn show_no_results(&mut self) {
        self.no_results = true;
    }
}
