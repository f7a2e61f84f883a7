//! Placeholder Widget
//!
//! Shown for sections that have no content yet.

use crate::view::{NodeKind, ViewNode};

pub const COMING_SOON: &str = "Content for this section is coming soon...";

/// Heading "<Id> Section" plus the coming-soon message
///
/// Only the first character of `id` is upper-cased; the rest is kept as is.
pub fn placeholder(id: &str) -> ViewNode {
    ViewNode::new(NodeKind::Placeholder)
        .key(id)
        .child(ViewNode::text_node(
            NodeKind::Heading,
            format!("{} Section", title_case_first(id)),
        ))
        .child(ViewNode::text_node(NodeKind::Text, COMING_SOON))
}

pub fn title_case_first(id: &str) -> String {
    let mut chars = id.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
