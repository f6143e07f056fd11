use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Terminal columns taken by `text`; CJK characters count double
pub fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Cut `text` to at most `width` columns, ending in `…` when shortened
pub fn truncate_to_width(text: &str, width: usize) -> String {
    if display_width(text) <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let budget = width - 1;
    let mut used = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}

/// Right-pad `text` with spaces to exactly `width` columns (never truncates)
pub fn pad(text: &str, width: usize) -> String {
    let w = display_width(text);
    if w >= width {
        text.to_string()
    } else {
        format!("{}{}", text, " ".repeat(width - w))
    }
}

/// Truncate then pad, so the result always spans `width` columns
pub fn fit(text: &str, width: usize) -> String {
    pad(&truncate_to_width(text, width), width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wide_characters_count_double() {
        assert_eq!(display_width("abc"), 3);
        assert_eq!(display_width("現場"), 4);
    }

    #[test]
    fn test_fit_truncates_and_pads() {
        assert_eq!(fit("ab", 4), "ab  ");
        assert_eq!(fit("abcdef", 4), "abc…");
        // A wide char that would overflow the budget is dropped, then padded
        assert_eq!(fit("現場作業", 6), "現場… ");
        assert_eq!(display_width(&fit("現場作業", 6)), 6);
    }

    #[test]
    fn test_pad_never_truncates() {
        assert_eq!(pad("abcdef", 3), "abcdef");
    }
}
