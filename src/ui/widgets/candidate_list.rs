//! Selectable list of candidate rows.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, ListState},
};

/// Cursor over an ordered set of rows
#[derive(Debug, Clone, Default)]
pub struct ListSelection {
    rows: Vec<String>,
    selected: usize,
}

impl ListSelection {
    /// Create a selection with the first row highlighted
    pub fn new(rows: Vec<String>) -> Self {
        Self { rows, selected: 0 }
    }

    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// Text of the highlighted row
    pub fn selected_row(&self) -> Option<&str> {
        self.rows.get(self.selected).map(String::as_str)
    }

    /// Move the highlight down, stopping at the last row
    pub fn move_down(&mut self) {
        if self.selected + 1 < self.rows.len() {
            self.selected += 1;
        }
    }

    /// Move the highlight up, stopping at the first row
    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn first(&mut self) {
        self.selected = 0;
    }

    pub fn last(&mut self) {
        self.selected = self.rows.len().saturating_sub(1);
    }
}

/// Widget rendering a [`ListSelection`] inside a titled box
pub struct CandidateListWidget<'a> {
    title: &'a str,
    selection: &'a ListSelection,
}

impl<'a> CandidateListWidget<'a> {
    pub fn new(title: &'a str, selection: &'a ListSelection) -> Self {
        Self { title, selection }
    }

    fn build_items(&self) -> Vec<ListItem<'a>> {
        self.selection
            .rows()
            .iter()
            .map(|row| ListItem::new(row.as_str()))
            .collect()
    }
}

impl Widget for CandidateListWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let items = self.build_items();

        let mut state = ListState::default();
        state.select(Some(self.selection.selected_index()));

        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title(self.title))
            .highlight_style(Style::default().fg(Color::Green));

        StatefulWidget::render(list, area, buf, &mut state);
    }
}
