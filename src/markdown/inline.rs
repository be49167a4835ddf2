//! Inline emphasis for block content.

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

/// Shortest `**text**` run with non-empty text.
static BOLD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\*\*(.+?)\*\*").unwrap_or_else(|e| panic!("invalid bold pattern: {e}"))
});

/// Shortest `*text*` run with non-empty text.
static ITALIC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\*(.+?)\*").unwrap_or_else(|e| panic!("invalid italic pattern: {e}"))
});

/// Applies bold then italic emphasis to a block's content.
///
/// Bold runs are consumed first so that `**x**` never reaches the single
/// asterisk pass. Matching is leftmost and non-overlapping. There is no
/// escape for a literal asterisk and text is not HTML escaped.
///
/// # Arguments
///
/// * `text`: Inline content of one block
///
/// # Returns
///
/// Content with `<strong>` and `<em>` wrappers
pub fn format(text: &str) -> Cow<'_, str> {
    let bold = BOLD.replace_all(text, "<strong>${1}</strong>");
    match bold {
        Cow::Borrowed(unchanged) => ITALIC.replace_all(unchanged, "<em>${1}</em>"),
        Cow::Owned(bolded) => {
            Cow::Owned(ITALIC.replace_all(&bolded, "<em>${1}</em>").into_owned())
        }
    }
}
