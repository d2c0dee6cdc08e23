use crossterm::event::KeyEvent;
use tui_input::backend::crossterm::EventHandler;

/// What a key did to the search box
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Text changed; the visible subset must be re-derived
    Changed,
    /// Focus returned to the list
    Left,
    /// Cursor moved or the key was not for us
    Unchanged,
}

/// Single-line free-text search input
#[derive(Clone, Debug, Default)]
pub struct SearchBox {
    pub(crate) input: tui_input::Input,
    focused: bool,
}

impl SearchBox {
    pub fn value(&self) -> &str {
        self.input.value()
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }

    pub fn reset(&mut self) {
        self.input.reset();
    }

    pub fn handle_key(&mut self, event: KeyEvent) -> SearchOutcome {
        match event {
            key!(Esc) | key!(Enter) | key!(Tab) => {
                self.focused = false;
                SearchOutcome::Left
            }
            _ => {
                let evt = crossterm::event::Event::Key(event);
                match self.input.handle_event(&evt) {
                    Some(change) if change.value => SearchOutcome::Changed,
                    _ => SearchOutcome::Unchanged,
                }
            }
        }
    }
}
