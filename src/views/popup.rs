use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap},
    Frame,
};

use crate::screen::{Outcome, RemovalPhase};
use crate::ui::styles;

const MAX_SIZE: (u16, u16) = (56, 8);

/// Removal confirmation modal; nothing is drawn while idle
pub fn render(frame: &mut Frame, rect: Rect, phase: &RemovalPhase) {
    let lines = match phase {
        RemovalPhase::Idle => return,
        RemovalPhase::ConfirmPending { symbol } => vec![
            Line::from(t!("removal.confirm", symbol = symbol)),
            Line::from(""),
            Line::from(vec![
                Span::styled(t!("removal.yes"), styles::failure()),
                Span::raw("    "),
                Span::styled(t!("removal.no"), styles::gray()),
            ]),
        ],
        RemovalPhase::Deleting { symbol } => vec![
            Line::from(t!("removal.deleting", symbol = symbol)),
            Line::from(""),
            Line::from(Span::styled(t!("removal.processing"), styles::dark_gray())),
        ],
        RemovalPhase::Notice {
            symbol,
            outcome: Outcome::Removed,
            ..
        } => vec![Line::from(Span::styled(
            t!("removal.removed", symbol = symbol),
            styles::success(),
        ))],
        RemovalPhase::Notice {
            symbol,
            outcome: Outcome::Failed(message),
            ..
        } => vec![
            Line::from(Span::styled(
                t!("removal.failed", symbol = symbol, message = message),
                styles::failure(),
            )),
            Line::from(""),
            Line::from(Span::styled(t!("removal.close"), styles::dark_gray())),
        ],
    };

    let rect = crate::ui::rect::centered(MAX_SIZE.0, MAX_SIZE.1, rect);
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .style(styles::popup())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(styles::border())
                .padding(Padding::uniform(1))
                .title(Span::styled(t!("removal.title"), styles::title())),
        );
    frame.render_widget(Clear, rect);
    frame.render_widget(paragraph, rect);
}
