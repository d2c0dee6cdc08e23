use ratatui::{
    text::{Line, Span, Text},
    Frame,
};

use crate::screen::Navigation;
use crate::ui::{styles, Content};

/// Web app route for a navigation request; `Back` has none
pub fn web_link(navigation: &Navigation, base: &str) -> Option<String> {
    let path = match navigation {
        Navigation::DiscoverStocks => "/dashboard".to_string(),
        Navigation::Upgrade => "/subscription".to_string(),
        Navigation::StockDetail(symbol) => format!("/stockresults/{symbol}"),
        Navigation::Back => return None,
    };
    Some(format!("{}{path}", base.trim_end_matches('/')))
}

/// Placeholder page for destinations that live outside this terminal
pub fn render(frame: &mut Frame, navigation: &Navigation, web_url: Option<&str>) {
    let (heading, content) = match navigation {
        Navigation::DiscoverStocks => (t!("away.discover.heading"), t!("away.discover.content")),
        Navigation::Upgrade => (t!("away.upgrade.heading"), t!("away.upgrade.content")),
        Navigation::StockDetail(symbol) => (
            t!("away.detail.heading", symbol = symbol),
            t!("away.detail.content"),
        ),
        Navigation::Back => return,
    };

    let mut lines = vec![Line::from(Span::styled(content, styles::gray()))];
    if let Some(url) = web_url.and_then(|base| web_link(navigation, base)) {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            t!("away.open", url = url),
            styles::text(),
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(t!("away.back"), styles::dark_gray())));

    frame.render_widget(
        Content::new(Span::styled(heading, styles::title()), Text::from(lines)),
        frame.size(),
    );
}
