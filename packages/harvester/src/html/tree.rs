//! Owned document tree built from parsed HTML.
//!
//! The tree is an arena of nodes addressed by [`NodeId`]. Only two kinds of
//! node survive parsing: elements and text. Comments, doctypes and processing
//! instructions are dropped, so "skip non-element siblings" means exactly
//! "skip text".

use std::collections::BTreeMap;

use scraper::Html;

/// Index of a node inside a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// An element node: tag name, class list and attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: String,
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
}

impl Element {
    /// Create an element.
    #[must_use]
    pub fn new(
        tag: impl Into<String>,
        classes: impl IntoIterator<Item = impl Into<String>>,
        attributes: impl IntoIterator<Item = (impl Into<String>, impl Into<String>)>,
    ) -> Self {
        Self {
            tag: tag.into(),
            classes: classes.into_iter().map(Into::into).collect(),
            attributes: attributes
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Lowercase tag name.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Classes in source order.
    #[must_use]
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

/// A node in the document tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl Node {
    #[must_use]
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(element) => Some(element),
            Self::Text(_) => None,
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Element(_) => None,
            Self::Text(text) => Some(text),
        }
    }

    #[must_use]
    pub fn is_element(&self) -> bool {
        matches!(self, Self::Element(_))
    }

    #[must_use]
    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }
}

#[derive(Debug, Clone)]
struct Slot {
    node: Node,
    next_sibling: Option<NodeId>,
    children: Vec<NodeId>,
}

/// A parsed HTML document.
#[derive(Debug, Clone, Default)]
pub struct Document {
    slots: Vec<Slot>,
}

impl Document {
    /// Parse an HTML document.
    ///
    /// Parsing never fails: the HTML5 algorithm recovers from any markup, so
    /// structural problems only surface when the walker looks for catalog
    /// elements.
    ///
    /// # Examples
    /// ```
    /// use degreeplan_harvester::html::Document;
    ///
    /// let doc = Document::parse(r#"<p class="cat-reqi"><a title="x">CS 1200</a></p>"#);
    /// let p = doc.descendants(doc.root()).find(|&id| {
    ///     doc.element(id).is_some_and(|e| e.tag() == "p")
    /// });
    /// assert!(p.is_some());
    /// ```
    #[must_use]
    pub fn parse(markup: &str) -> Self {
        let html = Html::parse_document(markup);
        let mut doc = Self::default();

        // Pre-order walk with an explicit stack; children are pushed in
        // reverse so they are appended to their parent in document order.
        let mut pending = vec![(*html.root_element(), None)];
        while let Some((node, parent)) = pending.pop() {
            let id = match node.value() {
                scraper::Node::Element(element) => doc.push(
                    Node::Element(Element::new(
                        element.name(),
                        element.classes(),
                        element.attrs(),
                    )),
                    parent,
                ),
                scraper::Node::Text(text) => {
                    doc.push(Node::Text(String::from(&**text)), parent);
                    continue;
                }
                _ => continue,
            };
            pending.extend(node.children().rev().map(|child| (child, Some(id))));
        }

        doc
    }

    fn push(&mut self, node: Node, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.slots.len());
        self.slots.push(Slot {
            node,
            next_sibling: None,
            children: Vec::new(),
        });

        if let Some(parent) = parent {
            if let Some(&previous) = self.slots[parent.0].children.last() {
                self.slots[previous.0].next_sibling = Some(id);
            }
            self.slots[parent.0].children.push(id);
        }

        id
    }

    /// The `<html>` element.
    #[must_use]
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Number of nodes in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    #[must_use]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.slots[id.0].node
    }

    /// The element at `id`, or `None` for text nodes.
    #[must_use]
    pub fn element(&self, id: NodeId) -> Option<&Element> {
        self.node(id).as_element()
    }

    /// The next sibling of any kind, text included.
    #[must_use]
    pub fn next_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.slots[id.0].next_sibling
    }

    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.slots[id.0].children
    }

    /// Iterate over `id` and all nodes below it in document order.
    #[must_use]
    pub fn descendants(&self, id: NodeId) -> Descendants<'_> {
        Descendants {
            doc: self,
            stack: vec![id],
        }
    }

    /// Concatenated text of all text nodes below `id`, unmodified.
    #[must_use]
    pub fn text_content(&self, id: NodeId) -> String {
        self.descendants(id)
            .filter_map(|n| self.node(n).as_text())
            .collect()
    }
}

/// Pre-order iterator returned by [`Document::descendants`].
pub struct Descendants<'a> {
    doc: &'a Document,
    stack: Vec<NodeId>,
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        self.stack
            .extend(self.doc.children(id).iter().rev().copied());
        Some(id)
    }
}
