// Text formatters
//
// Shared formatting utilities for fitting text into TUI cells.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncate `text` to at most `max_width` display columns, ending in `…` when cut
///
/// Uses unicode display width (not byte length) so wide glyphs are counted
/// by the columns they occupy.
///
/// # Examples
/// ```ignore
/// assert_eq!(truncate_to_width("Reading list", 8), "Reading…");
/// assert_eq!(truncate_to_width("short", 8), "short");
/// ```
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    // Leave room for the ellipsis (1 column)
    let target_width = max_width - 1;
    let mut current_width = 0;
    let mut truncate_at = 0;
    for (i, c) in text.char_indices() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > target_width {
            break;
        }
        current_width += char_width;
        truncate_at = i + c.len_utf8();
    }

    let mut line = text[..truncate_at].to_string();
    line.push('…');
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_ascii() {
        assert_eq!(truncate_to_width("Reading list", 8), "Reading…");
        assert_eq!(truncate_to_width("short", 8), "short");
        assert_eq!(truncate_to_width("exactly8", 8), "exactly8");
        assert_eq!(truncate_to_width("abc", 0), "");
    }

    #[test]
    fn test_truncate_counts_wide_glyphs() {
        // Each CJK glyph is two columns wide
        let cut = truncate_to_width("日本語テキスト", 7);
        assert_eq!(cut, "日本語…");
        assert!(cut.width() <= 7);
    }
}
