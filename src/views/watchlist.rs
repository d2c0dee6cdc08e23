use ratatui::{
    layout::{Constraint, Rect},
    style::Modifier,
    text::{Line, Span, Text},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::data::{Filter, StockEntry, ViewMode};
use crate::helper::{format_change, format_price, format_volume, Sign};
use crate::screen::{Phase, ViewStatus, WatchlistScreen};
use crate::ui::text::{align_right, truncate};
use crate::ui::{styles, Content};
use crate::widgets::{Loading, LoadingWidget};

pub const CARD_WIDTH: u16 = 34;
pub const CARD_HEIGHT: u16 = 7;

/// Number of card columns that fit `width`
pub fn grid_columns(width: u16) -> usize {
    usize::from((width / CARD_WIDTH).max(1))
}

/// Filter chips with per-classification counts
pub fn chips(frame: &mut Frame, rect: Rect, screen: &WatchlistScreen) {
    let counts = screen.counts();
    let active = screen.view().filter;
    let mut spans = vec![Span::raw(" ")];
    for (idx, filter) in Filter::ORDER.into_iter().enumerate() {
        let selected = filter == active;
        let mut style = styles::chip(selected);
        if let (Some(c), false) = (filter.classification(), selected) {
            style = styles::classification(c);
        }
        spans.push(Span::styled(
            format!(" {} ({}) ", filter.label(), counts.get(filter)),
            style,
        ));
        spans.push(Span::styled(format!("[{idx}]  "), styles::dark_gray()));
    }
    let mode = match screen.view().view_mode {
        ViewMode::Grid => t!("view.grid"),
        ViewMode::List => t!("view.list"),
    };
    spans.push(Span::styled(format!("{mode} [v]"), styles::dark_gray()));
    frame.render_widget(Paragraph::new(Line::from(spans)), rect);
}

fn safe_cursor_x(chunk_x: u16, visual_cursor: usize) -> u16 {
    let offset = u16::try_from(visual_cursor).unwrap_or(u16::MAX - 1);
    chunk_x.saturating_add(offset).saturating_add(1)
}

pub fn search(frame: &mut Frame, rect: Rect, screen: &WatchlistScreen) {
    let search = &screen.view().search;
    let border = if search.is_focused() {
        styles::border_selected()
    } else {
        styles::border()
    };
    let value = search.value();
    let body = if value.is_empty() && !search.is_focused() {
        Span::styled(t!("search.placeholder"), styles::dark_gray())
    } else {
        Span::raw(value.to_string())
    };
    // one line, without scroll
    let paragraph = Paragraph::new(Line::from(body)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(t!("search.title")),
    );
    frame.render_widget(paragraph, rect);
    if search.is_focused() {
        frame.set_cursor(
            safe_cursor_x(rect.x, search.input.visual_cursor()),
            rect.y + 1,
        );
    }
}

/// Body area: one of the five view states
pub fn body(frame: &mut Frame, rect: Rect, screen: &WatchlistScreen, loading: &Loading) {
    match screen.status() {
        ViewStatus::Loading => frame.render_widget(LoadingWidget::from(loading), rect),
        ViewStatus::Error => {
            let message = match screen.phase() {
                Phase::Failed(message) => message.clone(),
                Phase::Loading | Phase::Loaded(_) => String::new(),
            };
            let content = Text::from(vec![
                Line::from(Span::styled(message, styles::failure())),
                Line::from(Span::styled(t!("empty.error.retry"), styles::gray())),
            ]);
            frame.render_widget(
                Content::new(
                    Span::styled(t!("empty.error.heading"), styles::title()),
                    content,
                ),
                rect,
            );
        }
        ViewStatus::TrueEmpty => {
            let mut lines = vec![Line::from(Span::styled(
                t!("empty.none.content"),
                styles::gray(),
            ))];
            if screen.plan().is_free() {
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(
                    t!(
                        "empty.none.upgrade",
                        limit = screen.plan().watchlist_limit()
                    ),
                    styles::warning(),
                )));
            }
            frame.render_widget(
                Content::new(
                    Span::styled(t!("empty.none.heading"), styles::title()),
                    Text::from(lines),
                ),
                rect,
            );
        }
        ViewStatus::FilteredEmpty => frame.render_widget(
            Content::new(
                Span::styled(t!("empty.filtered.heading"), styles::title()),
                Span::styled(t!("empty.filtered.content"), styles::gray()),
            ),
            rect,
        ),
        ViewStatus::Ready => {
            let visible = screen.visible();
            match screen.view().view_mode {
                ViewMode::Grid => grid(frame, rect, &visible, screen.selected()),
                ViewMode::List => list(frame, rect, &visible, screen.selected()),
            }
        }
    }
}

fn grid(frame: &mut Frame, rect: Rect, entries: &[&StockEntry], selected: Option<usize>) {
    let columns = grid_columns(rect.width);
    let fit_rows = usize::from(rect.height / CARD_HEIGHT).max(1);
    let selected_row = selected.unwrap_or(0) / columns;
    let first_row = selected_row.saturating_sub(fit_rows - 1);
    let cells = crate::ui::rect::grid(
        rect,
        u16::try_from(columns).unwrap_or(1),
        CARD_HEIGHT,
        first_row,
        entries.len(),
    );
    let offset = first_row * columns;
    for (slot, area) in cells.into_iter().enumerate() {
        let idx = offset + slot;
        if let Some(entry) = entries.get(idx) {
            card(frame, area, entry, selected == Some(idx));
        }
    }
}

fn card(frame: &mut Frame, rect: Rect, entry: &StockEntry, selected: bool) {
    let border = if selected {
        styles::classification(entry.classification).add_modifier(Modifier::BOLD)
    } else {
        styles::border()
    };
    let block = Block::default().borders(Borders::ALL).border_style(border);
    let inner = block.inner(rect);
    frame.render_widget(block, rect);

    let width = usize::from(inner.width);
    let pill = format!(" {} ", entry.classification.label());
    let symbol_width = width.saturating_sub(pill.chars().count() + 1);
    let symbol_style = if selected {
        styles::text_selected()
    } else {
        styles::title()
    };

    let (price_line, range_line) = match &entry.price {
        Some(price) => {
            let change = Span::styled(
                format!(" {}", format_change(price.change_percent)),
                styles::up(price.change_percent.map_or(std::cmp::Ordering::Equal, |p| p.sign())),
            );
            (
                Line::from(vec![Span::raw(format_price(Some(price.current))), change]),
                Line::from(Span::styled(
                    format!(
                        "H {}  L {}  {} {}",
                        format_price(price.high24),
                        format_price(price.low24),
                        t!("watchlist.vol"),
                        format_volume(price.volume.unwrap_or_default()),
                    ),
                    styles::dark_gray(),
                )),
            )
        }
        None => (
            Line::from(Span::styled(format_price(None), styles::dark_gray())),
            Line::from(""),
        ),
    };

    let reason = entry
        .haram_reason
        .as_deref()
        .map_or_else(Line::default, |reason| {
            Line::from(Span::styled(
                truncate(reason, width),
                styles::classification(entry.classification),
            ))
        });

    let lines = vec![
        Line::from(vec![
            Span::styled(
                format!("{:<symbol_width$} ", truncate(&entry.symbol, symbol_width)),
                symbol_style,
            ),
            Span::styled(pill, styles::pill(entry.classification)),
        ]),
        Line::from(Span::styled(truncate(&entry.company_name, width), styles::gray())),
        price_line,
        range_line,
        reason,
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

fn list(frame: &mut Frame, rect: Rect, entries: &[&StockEntry], selected: Option<usize>) {
    const COLUMN_WIDTHS: [Constraint; 8] = [
        Constraint::Length(12),
        Constraint::Length(28),
        Constraint::Length(10),
        Constraint::Length(12),
        Constraint::Length(9),
        Constraint::Length(12),
        Constraint::Length(12),
        Constraint::Length(9),
    ];

    let header = Row::new(vec![
        Cell::from(t!("watchlist.symbol")),
        Cell::from(t!("watchlist.company")),
        Cell::from(t!("watchlist.classification")),
        Cell::from(t!("watchlist.price")),
        Cell::from(t!("watchlist.change")),
        Cell::from(t!("watchlist.high")),
        Cell::from(t!("watchlist.low")),
        Cell::from(t!("watchlist.vol")),
    ])
    .style(styles::header());

    let rows = entries
        .iter()
        .map(|entry| {
            let price = entry.price.as_ref();
            let change = price.and_then(|p| p.change_percent);
            Row::new(vec![
                Cell::from(entry.symbol.clone()),
                Cell::from(entry.company_name.clone()),
                Cell::from(entry.classification.label())
                    .style(styles::classification(entry.classification)),
                Cell::from(align_right(&format_price(price.map(|p| p.current)), 12)),
                Cell::from(align_right(&format_change(change), 9))
                    .style(styles::up(change.map_or(std::cmp::Ordering::Equal, |p| p.sign()))),
                Cell::from(align_right(&format_price(price.and_then(|p| p.high24)), 12)),
                Cell::from(align_right(&format_price(price.and_then(|p| p.low24)), 12)),
                Cell::from(align_right(
                    &format_volume(price.and_then(|p| p.volume).unwrap_or_default()),
                    9,
                )),
            ])
        })
        .collect::<Vec<_>>();

    let table = Table::new(rows)
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(styles::border()),
        )
        .highlight_style(styles::text_selected())
        .widths(&COLUMN_WIDTHS)
        .column_spacing(1);

    let mut state = TableState::default();
    state.select(selected);
    frame.render_stateful_widget(table, rect, &mut state);
}
