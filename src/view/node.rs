//! View tree nodes
//!
//! Widgets return a [`ViewNode`] tree. A node has a kind, optional key and
//! text, string attributes, an optional interaction [`Action`], and ordered
//! children. Front ends decide how each kind looks; the tree only carries
//! content and structure.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::navigation::Section;

/// What a node represents
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum NodeKind {
    Shell,
    Sidebar,
    Brand,
    NavList,
    NavItem,
    ActiveIndicator,
    Tooltip,
    Header,
    Title,
    Subtitle,
    SearchBox,
    Button,
    Badge,
    Main,
    Stack,
    Grid,
    Heading,
    Text,
    Icon,
    StatCard,
    Trend,
    LineChart,
    BarChart,
    DonutChart,
    RegionPanel,
    Legend,
    LegendItem,
    Series,
    Point,
    Bar,
    Slice,
    RegionRow,
    ProgressBar,
    Caption,
    Footer,
    Placeholder,
}

/// Interaction bound to a clickable or editable node
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    /// Make a section active
    Select { section: Section },
    /// Flip the sidebar collapse flag
    ToggleSidebar,
    /// Replace the header search text
    Search { query: String },
}

/// A node in the rendered view tree
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ViewNode {
    pub kind: NodeKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub attrs: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<Action>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ViewNode>,
}

impl ViewNode {
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            key: None,
            text: None,
            attrs: BTreeMap::new(),
            action: None,
            children: Vec::new(),
        }
    }

    /// Leaf node carrying text
    pub fn text_node(kind: NodeKind, text: impl Into<String>) -> Self {
        Self::new(kind).text(text)
    }

    /// Builder method: set key
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Builder method: set text
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Builder method: set an attribute
    pub fn attr(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.attrs.insert(name.into(), value.to_string());
        self
    }

    /// Builder method: bind an action
    pub fn action(mut self, action: Action) -> Self {
        self.action = Some(action);
        self
    }

    /// Builder method: append a child
    pub fn child(mut self, child: ViewNode) -> Self {
        self.children.push(child);
        self
    }

    /// Builder method: append several children
    pub fn children(mut self, children: impl IntoIterator<Item = ViewNode>) -> Self {
        self.children.extend(children);
        self
    }

    /// Builder method: append a child only when present
    pub fn maybe_child(mut self, child: Option<ViewNode>) -> Self {
        self.children.extend(child);
        self
    }

    /// Attribute value by name
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    /// Attribute parsed as a number, ignoring a trailing `%`
    pub fn num_attr(&self, name: &str) -> Option<f64> {
        self.get_attr(name)?.trim_end_matches('%').parse().ok()
    }

    /// Whether a flag attribute is set to "true"
    pub fn flag(&self, name: &str) -> bool {
        self.get_attr(name) == Some("true")
    }

    /// This node and every descendant, depth-first pre-order
    pub fn descendants(&self) -> Vec<&ViewNode> {
        let mut out = Vec::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            out.push(node);
            stack.extend(node.children.iter().rev());
        }
        out
    }

    /// Every node of the given kind, in document order
    pub fn find_all(&self, kind: NodeKind) -> Vec<&ViewNode> {
        self.descendants()
            .into_iter()
            .filter(|n| n.kind == kind)
            .collect()
    }

    /// First node of the given kind
    pub fn find(&self, kind: NodeKind) -> Option<&ViewNode> {
        self.descendants().into_iter().find(|n| n.kind == kind)
    }

    pub fn count(&self, kind: NodeKind) -> usize {
        self.find_all(kind).len()
    }

    /// Texts of this subtree joined by single spaces, in document order
    pub fn text_content(&self) -> String {
        self.descendants()
            .into_iter()
            .filter_map(|n| n.text.as_deref())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// First node with an action whose key or subtree text equals `label`
    ///
    /// Tooltips count, so collapsed nav items are still reachable by label.
    pub fn clickable(&self, label: &str) -> Option<&ViewNode> {
        self.descendants().into_iter().find(|n| {
            n.action.is_some()
                && (n.key.as_deref() == Some(label)
                    || n.descendants()
                        .into_iter()
                        .any(|d| d.text.as_deref() == Some(label)))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ViewNode {
        ViewNode::new(NodeKind::Stack)
            .child(ViewNode::text_node(NodeKind::Heading, "Top"))
            .child(
                ViewNode::new(NodeKind::Grid)
                    .child(ViewNode::text_node(NodeKind::Text, "a").attr("width", "85%"))
                    .child(
                        ViewNode::new(NodeKind::Button)
                            .action(Action::ToggleSidebar)
                            .child(ViewNode::text_node(NodeKind::Text, "b")),
                    ),
            )
            .child(ViewNode::text_node(NodeKind::Text, "c"))
    }

    #[test]
    fn test_descendants_document_order() {
        let tree = sample();
        let texts: Vec<_> = tree
            .descendants()
            .into_iter()
            .filter_map(|n| n.text.as_deref())
            .collect();
        assert_eq!(texts, ["Top", "a", "b", "c"]);
        assert_eq!(tree.text_content(), "Top a b c");
    }

    #[test]
    fn test_find_and_count() {
        let tree = sample();
        assert_eq!(tree.count(NodeKind::Text), 3);
        assert_eq!(tree.find(NodeKind::Heading).unwrap().text.as_deref(), Some("Top"));
        assert!(tree.find(NodeKind::Sidebar).is_none());
    }

    #[test]
    fn test_num_attr_strips_percent() {
        let tree = sample();
        let node = tree.find_all(NodeKind::Text)[0];
        assert_eq!(node.num_attr("width"), Some(85.0));
        assert_eq!(node.num_attr("height"), None);
    }

    #[test]
    fn test_clickable_by_label() {
        let tree = sample();
        let button = tree.clickable("b").unwrap();
        assert_eq!(button.action, Some(Action::ToggleSidebar));
        assert!(tree.clickable("a").is_none());

        let keyed = ViewNode::new(NodeKind::Button)
            .key("sidebar-toggle")
            .action(Action::ToggleSidebar);
        assert!(keyed.clickable("sidebar-toggle").is_some());
    }

    #[test]
    fn test_serialize_skips_empty_fields() {
        let node = ViewNode::text_node(NodeKind::Heading, "Hi");
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "heading", "text": "Hi"}));

        let button = ViewNode::new(NodeKind::NavItem).action(Action::Select {
            section: Section::Genres,
        });
        let json = serde_json::to_value(&button).unwrap();
        assert_eq!(
            json["action"],
            serde_json::json!({"type": "select", "section": "genres"})
        );
    }
}
