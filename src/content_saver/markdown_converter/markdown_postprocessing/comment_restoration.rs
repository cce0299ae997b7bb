//! Undo htmd's escaping of the "more" separator.

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

/// `\<!--more-->` or `\<!--more label-->` as htmd writes the text node the
/// preprocessor produced.
static ESCAPED_MORE_SEPARATOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\\(<!--more( [^\n]*?)?-->)")
        .expect("ESCAPED_MORE_SEPARATOR: hardcoded regex is valid")
});

/// Drop the backslash htmd puts before the first "more" separator so it is a
/// literal comment again. Only the first one was escaped on the way in.
#[must_use]
pub fn restore_more_separator(markdown: &str) -> Cow<'_, str> {
    ESCAPED_MORE_SEPARATOR.replacen(markdown, 1, "${1}")
}
