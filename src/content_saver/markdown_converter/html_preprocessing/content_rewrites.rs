//! Content rewrites that must happen before conversion rules see the tree.

use fancy_regex::Regex as FancyRegex;
use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

use crate::content_saver::markdown_converter::custom_handlers::LANGUAGE_ATTR;
use crate::utils::IMAGES_FOLDER;

/// `<img ... src="...">` where `src` is its own whitespace-delimited attribute
/// (so `data-src=` is left alone).
///
/// - `$1`: `<img ... src="`
/// - `$2`: file name (last path segment)
/// - `$3`: optional query string
/// - `$4`: closing quote and the rest of the tag
static IMG_SRC: LazyLock<FancyRegex> = LazyLock::new(|| {
    FancyRegex::new(r#"(?i)(<img(?=\s)[^>]+?(?<=\s)src=")[^"]*?([^/"]+?)(\?[^"]*)?("[^>]*>)"#)
        .expect("IMG_SRC: hardcoded regex is valid")
});

/// `[html]<h2>Title</h2>[/html]`, with the angle brackets either literal or
/// entity-escaped (consistently within one match).
static BRACKETED_HEADING: LazyLock<FancyRegex> = LazyLock::new(|| {
    FancyRegex::new(r"\[html\](&lt;|<)(h[1-6])(&gt;|>)(.+?)\1/\2\3\[/html\]")
        .expect("BRACKETED_HEADING: hardcoded regex is valid")
});

/// A block-editor comment carrying `{"language":"..."}` directly above a
/// `<pre ` opening tag.
static LANGUAGE_COMMENT_BEFORE_PRE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(<!-- wp:.+? \{"language":"(.+?)"\} -->\r?\n<pre )"#)
        .expect("LANGUAGE_COMMENT_BEFORE_PRE: hardcoded regex is valid")
});

/// Point every content image at the local `images/` folder the image saver
/// writes to. The query string and the rest of the tag are kept.
#[must_use]
pub fn rewrite_image_paths(html: &str) -> Cow<'_, str> {
    IMG_SRC.replace_all(html, format!("${{1}}{IMAGES_FOLDER}/${{2}}${{3}}${{4}}").as_str())
}

/// Turn the legacy `[html]&lt;hN&gt;...&lt;/hN&gt;[/html]` shorthand into a
/// real heading. Only `h1`..`h6` without attributes are recognised.
#[must_use]
pub fn unwrap_bracketed_headings(html: &str) -> Cow<'_, str> {
    BRACKETED_HEADING.replace_all(html, "<${2}>${4}</${2}>")
}

/// Copy the language from a preceding block-editor comment onto the `<pre>`
/// itself, where the code block rule reads it.
#[must_use]
pub fn propagate_code_language(html: &str) -> Cow<'_, str> {
    LANGUAGE_COMMENT_BEFORE_PRE.replace_all(html, format!(r#"${{1}}{LANGUAGE_ATTR}="${{2}}" "#).as_str())
}
