//! Rules that keep third-party embeds as raw HTML.
//!
//! Tweets, codepens, scripts and iframes have no Markdown equivalent, and
//! the embeds only work if their markup survives untouched, so these rules
//! re-serialize the original element instead of converting it.

use htmd::Element;
use htmd::element_handler::Handlers;

use super::node_util::{get_attr, has_attr, is_text, outer_html, previous_sibling};

pub(super) fn is_tweet(element: &Element<'_>) -> bool {
    get_attr(element.attrs, "class").as_deref() == Some("twitter-tweet")
}

/// Codepen embed snippets changed shape over the years; the `codepen` class
/// plus a `data-slug-hash` attribute is what they all share.
pub(super) fn is_codepen(element: &Element<'_>) -> bool {
    has_attr(element.attrs, "data-slug-hash")
        && get_attr(element.attrs, "class").as_deref() == Some("codepen")
}

pub(super) fn is_script(_element: &Element<'_>) -> bool {
    true
}

pub(super) fn is_iframe(_element: &Element<'_>) -> bool {
    true
}

/// Raw outer markup surrounded by blank lines.
pub(super) fn preserve_block(_handlers: &dyn Handlers, element: &Element<'_>) -> String {
    format!("\n\n{}\n\n", outer_html(element.node))
}

/// Raw `<script>` markup with `async=""` written as a bare boolean attribute.
///
/// A script that directly follows another element (the tweet or codepen it
/// belongs to) gets a single leading newline so it stays attached to it.
pub(super) fn preserve_script(_handlers: &dyn Handlers, element: &Element<'_>) -> String {
    let before = match previous_sibling(element.node) {
        Some(prev) if !is_text(&prev) => "\n",
        _ => "\n\n",
    };
    let html = outer_html(element.node).replacen(r#"async="""#, "async", 1);
    format!("{before}{html}\n\n")
}

/// Raw `<iframe>` markup with empty boolean attributes written bare.
pub(super) fn preserve_iframe(_handlers: &dyn Handlers, element: &Element<'_>) -> String {
    let html = outer_html(element.node)
        .replacen(r#"allowfullscreen="""#, "allowfullscreen", 1)
        .replacen(r#"allowpaymentrequest="""#, "allowpaymentrequest", 1);
    format!("\n\n{html}\n\n")
}
