//! Rules that reshape post content for the notes vault.

use htmd::Element;
use htmd::element_handler::Handlers;

use super::node_util::{
    find_descendant_tag, find_descendant_tag_with_class, get_attr, has_ancestor, has_attr,
    has_class, text_content,
};

/// Class of the SWELL theme's numbered step badge.
const STEP_NUMBER_CLASS: &str = "swell-block-step__number";
const STEP_LABEL_CLASS: &str = "__label";

/// Attribute the preprocessor copies a code block's language into.
pub(crate) const LANGUAGE_ATTR: &str = "data-wetm-language";

pub(super) fn always(_element: &Element<'_>) -> bool {
    true
}

/// Children only. Underscore emphasis markers get misread as image captions
/// in the vault, so `<em>` is dropped rather than converted.
pub(super) fn inner_content(handlers: &dyn Handlers, element: &Element<'_>) -> String {
    handlers.walk_children(element.node).content
}

/// A `<div>` inside a link adds whitespace that breaks `[text](url)` syntax.
pub(super) fn is_div_in_anchor(element: &Element<'_>) -> bool {
    has_ancestor(element.node, "a")
}

pub(super) fn is_step_label(element: &Element<'_>) -> bool {
    has_class(element.attrs, STEP_NUMBER_CLASS)
        && find_descendant_tag_with_class(element.node, "span", STEP_LABEL_CLASS).is_some()
}

pub(super) fn remove(_handlers: &dyn Handlers, _element: &Element<'_>) -> String {
    String::new()
}

/// `<figure>` with an image becomes `![[name|caption]]`, plus the caption
/// text in italics on the next line when a `<figcaption>` exists.
pub(super) fn figure_embed(handlers: &dyn Handlers, element: &Element<'_>) -> String {
    let Some(img) = find_descendant_tag(element.node, "img") else {
        return inner_content(handlers, element);
    };

    let src = match &img.data {
        markup5ever_rcdom::NodeData::Element { attrs, .. } => {
            get_attr(&attrs.borrow(), "src").unwrap_or_default()
        }
        _ => String::new(),
    };
    let image_name = basename(&src);
    let embed = format!("![[{image_name}|caption]]");

    match find_descendant_tag(element.node, "figcaption") {
        Some(caption) => {
            let caption_text = text_content(&caption);
            format!("\n\n{embed}\n*{}*\n\n", caption_text.trim())
        }
        None => format!("\n\n{embed}\n\n"),
    }
}

/// Last non-empty `/`-separated segment.
fn basename(src: &str) -> &str {
    src.trim_end_matches('/').rsplit('/').next().unwrap_or_default()
}

/// A `<pre>` with a `<code>` inside already converts cleanly.
pub(super) fn is_bare_pre(element: &Element<'_>) -> bool {
    find_descendant_tag(element.node, "code").is_none()
}

pub(super) fn fenced_code_block(_handlers: &dyn Handlers, element: &Element<'_>) -> String {
    let language = get_attr(element.attrs, LANGUAGE_ATTR).unwrap_or_default();
    let code = text_content(element.node);
    format!("\n\n```{language}\n{code}\n```\n\n")
}

pub(super) fn is_footnote_ref(element: &Element<'_>) -> bool {
    has_attr(element.attrs, "data-fn")
}

/// `[^label]`, where the label is the trimmed text of the nested link.
/// Without a link the reference's own text is used, also trimmed.
pub(super) fn footnote_ref(_handlers: &dyn Handlers, element: &Element<'_>) -> String {
    let label = find_descendant_tag(element.node, "a")
        .map_or_else(|| text_content(element.node), |link| text_content(&link));
    format!("[^{}]", label.trim())
}
