use std::sync::atomic::{AtomicU8, Ordering};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    widgets::{Paragraph, Widget},
};

/// Spinner state; every rendered frame advances it by one step
#[derive(Debug, Default)]
pub struct Loading {
    index: AtomicU8,
}

#[derive(Copy, Clone, Debug, Default)]
pub struct LoadingWidget {
    index: u8,
}

impl From<&Loading> for LoadingWidget {
    fn from(loading: &Loading) -> Self {
        Self {
            index: loading.index.fetch_add(1, Ordering::Relaxed),
        }
    }
}

impl Widget for LoadingWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let text = match self.index % 6 {
            1 => "◰ LOADING.  ",
            2 => "◳ LOADING.. ",
            3 => "◲ LOADING...",
            4 => "◲ LOADING ..",
            5 => "◱ LOADING  .",
            _ => "◰ LOADING   ",
        };
        let area = crate::ui::rect::centered(12, 1, area);
        Paragraph::new(text).render(area, buf);
    }
}
