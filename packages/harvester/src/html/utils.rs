//! Traversal helpers for the catalog document tree.
//!
//! The catalog separates its `<p>` elements (and the links inside them) with
//! whitespace-only text nodes. These helpers own the skipping of such nodes so
//! the walker never has to loop over text itself.

use super::tree::{Document, NodeId};
use crate::text::{is_blank, normalize_text};

/// Check if a node is an element carrying the given class.
pub fn has_class(doc: &Document, id: NodeId, class: &str) -> bool {
    doc.element(id).is_some_and(|e| e.has_class(class))
}

/// Check if a node is an element with the given tag name.
pub fn has_tag(doc: &Document, id: NodeId, tag: &str) -> bool {
    doc.element(id).is_some_and(|e| e.tag() == tag)
}

/// Find all elements with the given tag and class, in document order.
///
/// # Examples
/// ```
/// use degreeplan_harvester::html::{find_elements, Document};
///
/// let doc = Document::parse(r#"<p class="cat-reqa">I.</p><p>x</p><p class="cat-reqa">II.</p>"#);
/// assert_eq!(find_elements(&doc, "p", "cat-reqa").count(), 2);
/// ```
pub fn find_elements<'a>(
    doc: &'a Document,
    tag: &'a str,
    class: &'a str,
) -> impl Iterator<Item = NodeId> + 'a {
    doc.descendants(doc.root())
        .filter(move |&id| has_tag(doc, id, tag) && has_class(doc, id, class))
}

/// Get the normalized text content of a node.
///
/// # Returns
/// Text with whitespace collapsed and trimmed, or empty string if no text
pub fn get_text(doc: &Document, id: NodeId) -> String {
    normalize_text(&doc.text_content(id))
}

/// Get an attribute value from an element node.
///
/// # Returns
/// Attribute value, or `None` for text nodes and absent attributes
pub fn get_attribute<'a>(doc: &'a Document, id: NodeId, name: &str) -> Option<&'a str> {
    doc.element(id).and_then(|e| e.attribute(name))
}

/// Check if a node carries visible text.
pub fn is_meaningful(doc: &Document, id: NodeId) -> bool {
    !is_blank(&doc.text_content(id))
}

/// Get the next sibling that is an element, skipping text nodes.
///
/// # Examples
/// ```
/// use degreeplan_harvester::html::{find_elements, next_element_sibling, Document};
///
/// let doc = Document::parse("<p class=\"a\">1</p>\n  \n<p class=\"b\">2</p>");
/// let first = find_elements(&doc, "p", "a").next().unwrap();
/// let next = next_element_sibling(&doc, first).unwrap();
/// assert!(doc.element(next).unwrap().has_class("b"));
/// ```
pub fn next_element_sibling(doc: &Document, id: NodeId) -> Option<NodeId> {
    let mut current = doc.next_sibling(id);
    while let Some(sibling) = current {
        if doc.node(sibling).is_element() {
            return Some(sibling);
        }
        current = doc.next_sibling(sibling);
    }
    None
}

/// Get the first child with visible text.
///
/// Whitespace-only text nodes and empty elements are skipped.
pub fn first_meaningful_child(doc: &Document, id: NodeId) -> Option<NodeId> {
    first_meaningful_child_where(doc, id, |_| true)
}

/// Get the first child with visible text that also satisfies `accept`.
pub fn first_meaningful_child_where(
    doc: &Document,
    id: NodeId,
    accept: impl Fn(NodeId) -> bool,
) -> Option<NodeId> {
    doc.children(id)
        .iter()
        .copied()
        .find(|&child| is_meaningful(doc, child) && accept(child))
}

/// Short description of a node for error messages, e.g. `<p class="cat-reqi">`.
pub fn describe(doc: &Document, id: NodeId) -> String {
    match doc.element(id) {
        Some(element) if element.classes().is_empty() => format!("<{}>", element.tag()),
        Some(element) => format!(
            "<{} class=\"{}\">",
            element.tag(),
            element.classes().join(" ")
        ),
        None => format!("text '{}'", get_text(doc, id)),
    }
}
