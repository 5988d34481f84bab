//! HTML document tree and traversal helpers.

mod tree;
mod utils;

pub use tree::{Descendants, Document, Element, Node, NodeId};
pub use utils::{
    describe, find_elements, first_meaningful_child, first_meaningful_child_where, get_attribute,
    get_text, has_class, has_tag, is_meaningful, next_element_sibling,
};
