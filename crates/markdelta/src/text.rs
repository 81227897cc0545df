//! Markdown whitespace rules applied to text leaves.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::node::tags;

/// Tags after which leading spaces of the following text are ignored
pub const LEADING_SPACE_TAGS: &[&str] = &[
    tags::PARAGRAPH,
    tags::ORDERED_LIST,
    tags::LIST_ITEM,
    tags::LINE_BREAK,
];

/// Trailing space, line terminator and leading spaces of a joined line
static SOFT_LINE_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r" ?\n *").expect("soft line break pattern is valid"));

/// Whether text following `last_tag` has its leading spaces stripped
pub fn strips_leading_spaces(last_tag: Option<&str>) -> bool {
    last_tag.is_some_and(|tag| LEADING_SPACE_TAGS.contains(&tag))
}

/// Collapse every soft line break into a single space
pub fn collapse_soft_line_breaks(text: &str) -> Cow<'_, str> {
    SOFT_LINE_BREAK.replace_all(text, " ")
}

/// Apply the Markdown whitespace rules to a text leaf outside of
/// blockquotes and code blocks.
pub fn normalize_text<'a>(text: &'a str, last_tag: Option<&str>, collapse: bool) -> Cow<'a, str> {
    // Spaces at the start of the line after a hard break are ignored
    let text = if strips_leading_spaces(last_tag) {
        text.trim_start_matches(' ')
    } else {
        text
    };

    if collapse {
        collapse_soft_line_breaks(text)
    } else {
        Cow::Borrowed(text)
    }
}
