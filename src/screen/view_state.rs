use crate::data::{Filter, ViewMode};
use crate::widgets::SearchBox;

/// Ephemeral per-mount UI state; dropped with the screen
#[derive(Clone, Debug, Default)]
pub struct ViewState {
    pub search: SearchBox,
    pub filter: Filter,
    pub view_mode: ViewMode,
}

impl ViewState {
    pub fn search_text(&self) -> &str {
        self.search.value()
    }

    /// Whether search or filter currently narrows the collection
    pub fn is_narrowed(&self) -> bool {
        self.filter != Filter::All || !self.search_text().trim().is_empty()
    }

    /// Reset search text and filter; the layout is kept
    pub fn clear_filters(&mut self) {
        self.search.reset();
        self.search.blur();
        self.filter = Filter::All;
    }
}
