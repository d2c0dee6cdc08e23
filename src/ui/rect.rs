use ratatui::layout::{Margin, Rect};

pub fn centered(width: u16, height: u16, r: Rect) -> Rect {
    let horizontal = if width == 0 {
        0
    } else {
        r.width.saturating_sub(width) / 2
    };
    let vertical = if height == 0 {
        0
    } else {
        r.height.saturating_sub(height) / 2
    };
    r.inner(&Margin {
        horizontal,
        vertical,
    })
}

/// Cells of a `columns`-wide grid of `cell_height` rows, row-major,
/// starting at grid row `first_row`; cells that do not fit are omitted
pub fn grid(r: Rect, columns: u16, cell_height: u16, first_row: usize, count: usize) -> Vec<Rect> {
    let columns = columns.max(1);
    let cell_width = r.width / columns;
    let fit_rows = usize::from(r.height / cell_height.max(1));
    (0..count)
        .skip(first_row * usize::from(columns))
        .take(fit_rows * usize::from(columns))
        .enumerate()
        .map(|(slot, _)| {
            let col = u16::try_from(slot % usize::from(columns)).unwrap_or(0);
            let row = u16::try_from(slot / usize::from(columns)).unwrap_or(0);
            Rect {
                x: r.x + col * cell_width,
                y: r.y + row * cell_height,
                width: cell_width,
                height: cell_height,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{centered, grid};
    use ratatui::layout::Rect;

    #[test]
    fn centered_shrinks_to_size() {
        let r = centered(10, 4, Rect::new(0, 0, 30, 10));
        assert_eq!(r, Rect::new(10, 3, 10, 4));
    }

    #[test]
    fn grid_lays_out_row_major_and_clips() {
        let cells = grid(Rect::new(0, 0, 60, 14), 2, 7, 0, 5);
        assert_eq!(cells.len(), 4);
        assert_eq!(cells[1], Rect::new(30, 0, 30, 7));
        assert_eq!(cells[2], Rect::new(0, 7, 30, 7));

        let scrolled = grid(Rect::new(0, 0, 60, 14), 2, 7, 2, 5);
        assert_eq!(scrolled.len(), 1);
        assert_eq!(scrolled[0], Rect::new(0, 0, 30, 7));
    }
}
