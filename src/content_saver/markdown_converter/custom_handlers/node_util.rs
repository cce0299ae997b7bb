//! Read-only DOM queries over `markup5ever_rcdom` nodes.
//!
//! These are the queries the conversion rules need from the parsed tree:
//! attribute lookup, ancestor and descendant search, sibling inspection,
//! text extraction and outer-markup serialization. None of them mutate the
//! tree, so rule predicates built on them stay side-effect free.

use html5ever::Attribute;
use html5ever::serialize::{SerializeOpts, TraversalScope, serialize};
use markup5ever_rcdom::{Node, NodeData, SerializableHandle};
use std::rc::Rc;

/// Attribute value by name, including empty values.
pub(super) fn get_attr(attrs: &[Attribute], name: &str) -> Option<String> {
    attrs
        .iter()
        .find(|a| &*a.name.local == name)
        .map(|a| a.value.to_string())
}

pub(super) fn has_attr(attrs: &[Attribute], name: &str) -> bool {
    attrs.iter().any(|a| &*a.name.local == name)
}

/// Whitespace-separated `class` tokens contain `class_name`.
pub(super) fn has_class(attrs: &[Attribute], class_name: &str) -> bool {
    get_attr(attrs, "class")
        .is_some_and(|classes| classes.split_whitespace().any(|c| c == class_name))
}

/// Tag name of an element node.
pub(super) fn tag_name(node: &Node) -> Option<&str> {
    match &node.data {
        NodeData::Element { name, .. } => Some(&*name.local),
        _ => None,
    }
}

fn node_has_class(node: &Node, class_name: &str) -> bool {
    match &node.data {
        NodeData::Element { attrs, .. } => has_class(&attrs.borrow(), class_name),
        _ => false,
    }
}

fn parent_of(node: &Rc<Node>) -> Option<Rc<Node>> {
    // `parent` is a Cell, so read it by taking and putting it back.
    let weak = node.parent.take();
    node.parent.set(weak.clone());
    weak.and_then(|w| w.upgrade())
}

/// Whether any ancestor (not the node itself) is a `tag` element.
pub(super) fn has_ancestor(node: &Rc<Node>, tag: &str) -> bool {
    let mut current = parent_of(node);
    while let Some(parent) = current {
        if tag_name(&parent) == Some(tag) {
            return true;
        }
        current = parent_of(&parent);
    }
    false
}

/// First descendant in document order matching `predicate`.
pub(super) fn find_descendant<F>(node: &Rc<Node>, predicate: &F) -> Option<Rc<Node>>
where
    F: Fn(&Node) -> bool,
{
    for child in node.children.borrow().iter() {
        if predicate(child.as_ref()) {
            return Some(Rc::clone(child));
        }
        if let Some(found) = find_descendant(child, predicate) {
            return Some(found);
        }
    }
    None
}

/// First descendant element with the given tag name.
pub(super) fn find_descendant_tag(node: &Rc<Node>, tag: &str) -> Option<Rc<Node>> {
    find_descendant(node, &|n: &Node| tag_name(n) == Some(tag))
}

/// First descendant element with the given tag name and class.
pub(super) fn find_descendant_tag_with_class(
    node: &Rc<Node>,
    tag: &str,
    class_name: &str,
) -> Option<Rc<Node>> {
    find_descendant(node, &|n: &Node| {
        tag_name(n) == Some(tag) && node_has_class(n, class_name)
    })
}

/// The node immediately before this one under the same parent, of any kind
/// (element, text, comment).
pub(super) fn previous_sibling(node: &Rc<Node>) -> Option<Rc<Node>> {
    let parent = parent_of(node)?;
    let siblings = parent.children.borrow();
    let idx = siblings.iter().position(|s| Rc::ptr_eq(s, node))?;
    idx.checked_sub(1).map(|prev| Rc::clone(&siblings[prev]))
}

pub(super) fn is_text(node: &Node) -> bool {
    matches!(node.data, NodeData::Text { .. })
}

/// Concatenated text of all descendant text nodes, whitespace preserved.
/// Comments and processing instructions contribute nothing.
pub(super) fn text_content(node: &Rc<Node>) -> String {
    let mut text = String::new();
    collect_text(node, &mut text);
    text
}

fn collect_text(node: &Rc<Node>, out: &mut String) {
    match &node.data {
        NodeData::Text { contents } => out.push_str(&contents.borrow()),
        NodeData::Element { .. } | NodeData::Document | NodeData::Doctype { .. } => {
            for child in node.children.borrow().iter() {
                collect_text(child, out);
            }
        }
        NodeData::Comment { .. } | NodeData::ProcessingInstruction { .. } => {}
    }
}

/// Serialize the node and its subtree back to HTML.
///
/// Serialization into memory only fails on invalid UTF-8, which the parser
/// never produces; if it does happen the node's text is returned instead so
/// callers never see an error.
pub(super) fn outer_html(node: &Rc<Node>) -> String {
    let opts = SerializeOpts {
        traversal_scope: TraversalScope::IncludeNode,
        ..Default::default()
    };
    let handle = SerializableHandle::from(Rc::clone(node));
    let mut bytes = Vec::new();

    let serialized = serialize(&mut bytes, &handle, opts)
        .and_then(|()| String::from_utf8(bytes).map_err(std::io::Error::other));

    match serialized {
        Ok(html) => html,
        Err(e) => {
            tracing::warn!("Failed to serialize element: {e}, falling back to its text");
            text_content(node)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use html5ever::parse_document;
    use html5ever::tendril::TendrilSink;
    use markup5ever_rcdom::RcDom;

    fn parse(html: &str) -> Rc<Node> {
        let dom = parse_document(RcDom::default(), Default::default()).one(html);
        Rc::clone(&dom.document)
    }

    #[test]
    fn test_has_ancestor_walks_past_parent() {
        let doc = parse(r#"<a href="x"><span><div id="inner">hi</div></span></a>"#);
        let div = find_descendant_tag(&doc, "div").unwrap();
        assert!(has_ancestor(&div, "a"));
        assert!(!has_ancestor(&div, "p"));
    }

    #[test]
    fn test_previous_sibling_sees_text_nodes() {
        let doc = parse("<p>text<script></script><em>x</em><script></script></p>");
        let p = find_descendant_tag(&doc, "p").unwrap();
        let children = p.children.borrow();

        let first_script_prev = previous_sibling(&children[1]).unwrap();
        assert!(is_text(&first_script_prev));

        let second_script_prev = previous_sibling(&children[3]).unwrap();
        assert_eq!(tag_name(&second_script_prev), Some("em"));

        assert!(previous_sibling(&children[0]).is_none());
    }

    #[test]
    fn test_text_content_skips_comments() {
        let doc = parse("<pre>line 1\n<!-- note -->line 2</pre>");
        let pre = find_descendant_tag(&doc, "pre").unwrap();
        assert_eq!(text_content(&pre), "line 1\nline 2");
    }

    #[test]
    fn test_outer_html_round_trips_simple_markup() {
        let html = r#"<blockquote class="twitter-tweet"><p lang="en">Hello</p></blockquote>"#;
        let doc = parse(html);
        let quote = find_descendant_tag(&doc, "blockquote").unwrap();
        assert_eq!(outer_html(&quote), html);
    }

    #[test]
    fn test_find_descendant_tag_with_class() {
        let doc = parse(r#"<div><span>a</span><span class="x __label">b</span></div>"#);
        let div = find_descendant_tag(&doc, "div").unwrap();
        let label = find_descendant_tag_with_class(&div, "span", "__label").unwrap();
        assert_eq!(text_content(&label), "b");
    }
}
