//! Indentation measurement and content normalization
//!
//! Only ASCII space and tab count as indentation. Every indentation character counts
//! as one unit of depth; tabs are not expanded.

/// Check if a character is indentation-class whitespace
pub fn is_indent_char(c: char) -> bool {
    c == ' ' || c == '\t'
}

/// Count the leading indentation characters of a line.
///
/// For a blank line this is the length of the whole line, which is why blank lines
/// never use it to decide their depth.
pub fn measure_depth(raw: &str) -> usize {
    raw.chars().take_while(|c| is_indent_char(*c)).count()
}

/// Remove leading indentation and, when `strip` is set, trailing spaces and tabs.
pub fn normalize_text(raw: &str, strip: bool) -> &str {
    let content = raw.trim_start_matches(is_indent_char);
    if strip {
        content.trim_end_matches(is_indent_char)
    } else {
        content
    }
}
