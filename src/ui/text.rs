use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub fn align_right(text: &str, width: usize) -> String {
    let extra: usize = text
        .chars()
        .filter_map(|c| c.width_cjk().and_then(|w| w.checked_sub(1)))
        .sum();
    format!(
        "{text:>width$}",
        width = width.checked_sub(extra).unwrap_or(width)
    )
}

/// Cut `text` to at most `width` columns, marking the cut with `…`
pub fn truncate(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        used += w;
        out.push(c);
    }
    if width > 0 {
        out.push('…');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_align_right() {
        assert_eq!(align_right("text", 3), "text");
        assert_eq!(align_right("text", 10), "      text");
        // wide characters
        assert_eq!(align_right("₹१२", 3), "₹१२");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Infosys", 10), "Infosys");
        assert_eq!(truncate("Tata Consultancy Services", 10), "Tata Cons…");
        assert_eq!(truncate("abc", 0), "");
    }
}
