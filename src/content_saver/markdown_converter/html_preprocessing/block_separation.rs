//! Block-level separation markers inserted before DOM parsing.
//!
//! htmd merges adjacent paragraphs that the export only separated with blank
//! lines, and drops HTML comments. Both are worked around here at text
//! level, before the HTML is ever parsed.

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

static DOUBLE_LINE_BREAK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\r?\n){2}").expect("DOUBLE_LINE_BREAK: hardcoded regex is valid")
});

/// `<!--more-->`, optionally with a custom label: `<!--more Keep reading-->`.
static MORE_SEPARATOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<(!--more( .*)?--)>").expect("MORE_SEPARATOR: hardcoded regex is valid")
});

/// Empty block element placed between paragraphs.
pub const PARAGRAPH_MARKER: &str = "\n<div></div>\n";

/// Replace each pair of consecutive line breaks with an empty `<div>`.
///
/// The inert element forces htmd to emit separate blocks, while text inside
/// `<pre>` keeps both line breaks since the marker itself has no text.
/// Input without a double line break is returned unchanged.
#[must_use]
pub fn insert_paragraph_markers(html: &str) -> Cow<'_, str> {
    DOUBLE_LINE_BREAK.replace_all(html, PARAGRAPH_MARKER)
}

/// Escape the angle brackets of the first "more" separator so the parser
/// keeps it as text; it comes back as a literal comment when htmd unescapes
/// text nodes. Only one separator per post is meaningful.
#[must_use]
pub fn escape_more_separator(html: &str) -> Cow<'_, str> {
    MORE_SEPARATOR.replacen(html, 1, "&lt;${1}&gt;")
}
