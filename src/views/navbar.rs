use ratatui::{
    prelude::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::{screen::WatchlistScreen, ui::styles};

pub fn render(frame: &mut Frame, rect: Rect, screen: &WatchlistScreen) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rect);

    let plan = screen.plan();
    let mut spans = vec![
        Span::styled(format!(" {} ", t!("watchlist.title")), styles::title()),
        Span::styled(format!("[{}] ", plan.label()), styles::dark_gray()),
    ];
    if let Some(watchlist) = screen.watchlist() {
        let used = watchlist.len();
        let limit = plan.watchlist_limit();
        let style = if used >= limit {
            styles::warning()
        } else {
            styles::dark_gray()
        };
        spans.push(Span::styled(
            t!("watchlist.slots", used = used, limit = limit),
            style,
        ));
    }

    let dark_gray_style = styles::dark_gray();
    let hints = Paragraph::new(Line::from(vec![
        Span::styled(t!("keyboard.help"), dark_gray_style),
        Span::styled(" ", dark_gray_style),
        Span::styled(t!("keyboard.search"), dark_gray_style),
        Span::styled(" ", dark_gray_style),
        Span::styled(t!("keyboard.quit"), dark_gray_style),
    ]))
    .alignment(Alignment::Right);

    frame.render_widget(Paragraph::new(Line::from(spans)), chunks[0]);
    frame.render_widget(hints, chunks[1]);
}
