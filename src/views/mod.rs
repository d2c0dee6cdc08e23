use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::screen::WatchlistScreen;
use crate::widgets::Loading;

pub mod away;
mod footer;
mod help;
mod navbar;
mod popup;
mod watchlist;

pub use watchlist::grid_columns;

pub fn render(frame: &mut Frame, screen: &WatchlistScreen, loading: &Loading) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(frame.size());

    navbar::render(frame, chunks[0], screen);
    watchlist::chips(frame, chunks[1], screen);
    watchlist::search(frame, chunks[2], screen);
    watchlist::body(frame, chunks[3], screen, loading);
    footer::render(frame, chunks[4], screen);

    if !screen.removal().is_idle() {
        popup::render(frame, frame.size(), screen.removal().phase());
    }
    if screen.help_visible() {
        help::render(frame, frame.size());
    }
}
