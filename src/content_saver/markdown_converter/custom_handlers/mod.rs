//! Custom conversion rules for htmd HTML-to-Markdown conversion
//!
//! The rules are an ordered list of `(predicate, replacement)` pairs. For
//! each element whose tag appears in any rule, the list is scanned in order
//! and the first rule whose tag and predicate both match produces the
//! output. When nothing matches, the element falls through to htmd's own
//! handler for that tag (paragraphs, headings, links, lists, tables, ...).
//!
//! Predicates only look at the element itself, its descendants and its
//! ancestors, never at conversion state, so conversion stays bottom-up and
//! composable.

mod content_rules;
mod embed_rules;
mod node_util;

pub(crate) use content_rules::LANGUAGE_ATTR;

use htmd::{
    Element, HtmlToMarkdown,
    element_handler::{HandlerResult, Handlers},
    options::{BulletListMarker, Options},
};

/// One node-level override of the generic conversion.
pub struct ConversionRule {
    /// Stable name, used in trace logs.
    pub name: &'static str,
    /// Tags this rule can apply to.
    pub tags: &'static [&'static str],
    /// Must be side-effect free.
    pub filter: fn(&Element<'_>) -> bool,
    /// Produces the replacement Markdown (or raw HTML) for a matched element.
    pub replacement: fn(&dyn Handlers, &Element<'_>) -> String,
}

impl ConversionRule {
    /// Whether this rule claims the element.
    #[must_use]
    pub fn matches(&self, element: &Element<'_>) -> bool {
        self.tags.iter().any(|tag| *tag == element.tag) && (self.filter)(element)
    }
}

/// Rules in priority order. Site-specific rules come before generic ones
/// sharing a tag: a codepen or step-label `<div>` is checked before the
/// div-in-link unwrap.
pub static CONVERSION_RULES: &[ConversionRule] = &[
    ConversionRule {
        name: "em",
        tags: &["em"],
        filter: content_rules::always,
        replacement: content_rules::inner_content,
    },
    ConversionRule {
        name: "tweet",
        tags: &["blockquote"],
        filter: embed_rules::is_tweet,
        replacement: embed_rules::preserve_block,
    },
    ConversionRule {
        name: "codepen",
        tags: &["p", "div"],
        filter: embed_rules::is_codepen,
        replacement: embed_rules::preserve_block,
    },
    ConversionRule {
        name: "step-label",
        tags: &["div"],
        filter: content_rules::is_step_label,
        replacement: content_rules::remove,
    },
    ConversionRule {
        name: "div-in-anchor",
        tags: &["div"],
        filter: content_rules::is_div_in_anchor,
        replacement: content_rules::inner_content,
    },
    ConversionRule {
        name: "script",
        tags: &["script"],
        filter: embed_rules::is_script,
        replacement: embed_rules::preserve_script,
    },
    ConversionRule {
        name: "iframe",
        tags: &["iframe"],
        filter: embed_rules::is_iframe,
        replacement: embed_rules::preserve_iframe,
    },
    ConversionRule {
        name: "figure",
        tags: &["figure"],
        filter: content_rules::always,
        replacement: content_rules::figure_embed,
    },
    ConversionRule {
        name: "pre",
        tags: &["pre"],
        filter: content_rules::is_bare_pre,
        replacement: content_rules::fenced_code_block,
    },
    ConversionRule {
        name: "footnote",
        tags: &["sup"],
        filter: content_rules::is_footnote_ref,
        replacement: content_rules::footnote_ref,
    },
];

/// First rule in `rules` claiming the element.
pub fn find_rule<'r>(rules: &'r [ConversionRule], element: &Element<'_>) -> Option<&'r ConversionRule> {
    rules.iter().find(|rule| rule.matches(element))
}

/// Every tag any rule can apply to, without duplicates, in rule order.
fn rule_tags() -> Vec<&'static str> {
    let mut tags: Vec<&'static str> = Vec::new();
    for tag in CONVERSION_RULES.iter().flat_map(|rule| rule.tags.iter().copied()) {
        if !tags.contains(&tag) {
            tags.push(tag);
        }
    }
    tags
}

/// Single htmd handler for every rule tag: first matching rule wins, otherwise
/// hand the element back to htmd's built-in handler.
fn dispatch_rules(handlers: &dyn Handlers, element: Element) -> Option<HandlerResult> {
    match find_rule(CONVERSION_RULES, &element) {
        Some(rule) => {
            tracing::trace!(rule = rule.name, tag = element.tag, "Conversion rule matched");
            Some(HandlerResult::from((rule.replacement)(handlers, &element)))
        }
        None => handlers.fallback(element),
    }
}

/// Create an htmd converter with the site-specific rules installed
///
/// Base settings: ATX headings, `-` bullets, fenced code blocks. `<style>`
/// contents would otherwise be dumped as plain text, so they are skipped.
/// Tables are handled by htmd's built-in table support.
pub fn create_converter() -> HtmlToMarkdown {
    HtmlToMarkdown::builder()
        .options(Options {
            bullet_list_marker: BulletListMarker::Dash,
            ..Default::default()
        })
        .skip_tags(vec!["style"])
        .add_handler(rule_tags(), dispatch_rules)
        .build()
}
