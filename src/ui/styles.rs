use std::cmp::Ordering;

use ratatui::style::{Color, Modifier, Style};

use crate::data::Classification;

#[inline]
pub fn header() -> Style {
    Style::default().fg(Color::Gray)
}

#[inline]
pub fn gray() -> Style {
    Style::default().fg(Color::Gray)
}

#[inline]
pub fn dark_gray() -> Style {
    Style::default().fg(Color::DarkGray)
}

#[inline]
pub fn text() -> Style {
    Style::default().fg(Color::Reset)
}

#[inline]
pub fn text_selected() -> Style {
    text().add_modifier(Modifier::REVERSED)
}

#[inline]
pub fn popup() -> Style {
    text()
}

#[inline]
pub fn title() -> Style {
    text().add_modifier(Modifier::BOLD)
}

#[inline]
pub fn border() -> Style {
    Style::default().fg(Color::DarkGray)
}

#[inline]
pub fn border_selected() -> Style {
    Style::default().fg(Color::White)
}

/// Price movement colours; green is up
#[inline]
pub fn up(val: Ordering) -> Style {
    match val {
        Ordering::Less => Style::default().fg(Color::LightRed),
        Ordering::Equal => Style::default().fg(Color::Reset),
        Ordering::Greater => Style::default().fg(Color::LightGreen),
    }
}

#[inline]
pub fn classification_color(c: Classification) -> Color {
    match c {
        Classification::Halal => Color::Green,
        Classification::Doubtful => Color::Yellow,
        Classification::Haram => Color::Red,
    }
}

#[inline]
pub fn classification(c: Classification) -> Style {
    Style::default().fg(classification_color(c))
}

/// Filled badge used on cards and in the list
#[inline]
pub fn pill(c: Classification) -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(classification_color(c))
        .add_modifier(Modifier::BOLD)
}

#[inline]
pub fn chip(selected: bool) -> Style {
    if selected {
        text_selected().add_modifier(Modifier::BOLD)
    } else {
        gray()
    }
}

pub fn success() -> Style {
    Style::default().fg(Color::Green)
}

pub fn failure() -> Style {
    Style::default().fg(Color::Red)
}

pub fn warning() -> Style {
    Style::default().fg(Color::Yellow)
}
