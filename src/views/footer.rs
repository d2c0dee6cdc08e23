use ratatui::{
    prelude::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::screen::{Outcome, RemovalPhase, ViewStatus, WatchlistScreen};
use crate::ui::styles;

/// One status line: removal notice first, then data problems, then hints
pub fn render(frame: &mut Frame, rect: Rect, screen: &WatchlistScreen) {
    let line = match screen.removal().phase() {
        RemovalPhase::Notice {
            symbol,
            outcome: Outcome::Removed,
            ..
        } => Line::from(Span::styled(
            t!("removal.removed", symbol = symbol),
            styles::success(),
        )),
        RemovalPhase::Notice {
            symbol,
            outcome: Outcome::Failed(message),
            ..
        } => Line::from(Span::styled(
            t!("removal.failed", symbol = symbol, message = message),
            styles::failure(),
        )),
        RemovalPhase::Idle | RemovalPhase::ConfirmPending { .. } | RemovalPhase::Deleting { .. } => {
            idle_line(screen)
        }
    };
    frame.render_widget(Paragraph::new(line), rect);
}

fn idle_line(screen: &WatchlistScreen) -> Line<'static> {
    if let Some(violations) = screen.watchlist().map(|w| w.violations()) {
        if let Some(first) = violations.first() {
            let text = if violations.len() == 1 {
                t!("status.violation", detail = first)
            } else {
                t!(
                    "status.violations",
                    count = violations.len(),
                    detail = first
                )
            };
            return Line::from(Span::styled(text, styles::warning()));
        }
    }

    let hint = match screen.status() {
        ViewStatus::Ready => t!("status.ready", shown = screen.visible().len()),
        ViewStatus::FilteredEmpty => t!("status.filtered_empty"),
        ViewStatus::TrueEmpty => t!("status.true_empty"),
        ViewStatus::Error => t!("status.error"),
        ViewStatus::Loading => t!("status.loading"),
    };
    Line::from(Span::styled(hint, styles::dark_gray()))
}
