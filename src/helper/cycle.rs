pub fn prev(idx: Option<usize>, all: usize) -> Option<usize> {
    if let Some(idx) = idx {
        idx.checked_sub(1).or_else(|| all.checked_sub(1))
    } else {
        all.checked_sub(1)
    }
}

pub fn next(idx: Option<usize>, all: usize) -> Option<usize> {
    if let Some(idx) = idx {
        let next = idx + 1;
        if next < all {
            Some(next)
        } else {
            (all > 0).then_some(0)
        }
    } else {
        (all > 0).then_some(0)
    }
}

/// Move one row up in a grid of `columns`, staying put on the first row
pub fn row_up(idx: Option<usize>, columns: usize, all: usize) -> Option<usize> {
    let idx = idx.filter(|i| *i < all)?;
    Some(idx.checked_sub(columns.max(1)).unwrap_or(idx))
}

/// Move one row down in a grid of `columns`, clamping to the last item
pub fn row_down(idx: Option<usize>, columns: usize, all: usize) -> Option<usize> {
    let Some(idx) = idx.filter(|i| *i < all) else {
        return (all > 0).then_some(0);
    };
    let below = idx + columns.max(1);
    if below < all {
        Some(below)
    } else if idx / columns.max(1) < (all - 1) / columns.max(1) {
        Some(all - 1)
    } else {
        Some(idx)
    }
}
