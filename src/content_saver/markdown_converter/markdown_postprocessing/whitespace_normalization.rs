//! Whitespace cleanup of htmd output.

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

/// A `-` or `N.` marker followed by one or more spaces.
static LIST_MARKER_SPACING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(-|\d+\.) +").expect("LIST_MARKER_SPACING: hardcoded regex is valid")
});

static EXCESS_LINE_BREAKS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\r?\n){3,}").expect("EXCESS_LINE_BREAKS: hardcoded regex is valid")
});

/// `-   item` → `- item`, `1.  item` → `1. item`.
///
/// htmd pads list markers to a tab stop; the vault expects a single space.
#[must_use]
pub fn collapse_list_marker_spacing(markdown: &str) -> Cow<'_, str> {
    LIST_MARKER_SPACING.replace_all(markdown, "${1} ")
}

/// Runs of three or more line breaks become one blank line. Most of these
/// come from the empty `<div>` paragraph markers.
#[must_use]
pub fn collapse_blank_lines(markdown: &str) -> Cow<'_, str> {
    EXCESS_LINE_BREAKS.replace_all(markdown, "\n\n")
}
