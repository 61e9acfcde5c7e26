//! Text utilities for TUI rendering.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncates a string with a trailing ellipsis if it exceeds `max_width`
/// terminal columns (unicode-aware).
pub fn truncate_with_ellipsis(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let mut truncated = String::new();
    let mut width = 0;
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width + 1 > max_width {
            break;
        }
        truncated.push(ch);
        width += ch_width;
    }
    truncated.push('…');
    truncated
}

/// Keeps the end of a string, replacing the dropped start with an ellipsis.
///
/// Used for text being typed so the cursor end stays visible.
pub fn truncate_start_with_ellipsis(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let mut kept: Vec<char> = Vec::new();
    let mut width = 0;
    for ch in text.chars().rev() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width + 1 > max_width {
            break;
        }
        kept.push(ch);
        width += ch_width;
    }
    std::iter::once('…').chain(kept.into_iter().rev()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_is_untouched() {
        assert_eq!(truncate_with_ellipsis("Email", 10), "Email");
        assert_eq!(truncate_start_with_ellipsis("Email", 5), "Email");
    }

    #[test]
    fn test_truncate_end() {
        assert_eq!(truncate_with_ellipsis("Username", 5), "User…");
        assert_eq!(truncate_with_ellipsis("Username", 0), "");
    }

    #[test]
    fn test_truncate_start() {
        assert_eq!(truncate_start_with_ellipsis("abcdefgh", 4), "…fgh");
        assert_eq!(truncate_start_with_ellipsis("••••••", 3), "…••");
    }
}
