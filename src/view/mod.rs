//! View Tree
//!
//! The output of every widget and of the shell:
//!
//! - **node**: `ViewNode`, `NodeKind` and the `Action` bindings
//! - **text**: Plain-text renderer for terminal previews
//!
//! Trees serialize to JSON with `serde`, which is how the CLI exports a
//! screen for inspection.

pub mod node;
pub mod text;

pub use node::{Action, NodeKind, ViewNode};
pub use text::{render_text, TextRenderer};

/// Serialize a tree as pretty JSON
pub fn to_json(node: &ViewNode) -> serde_json::Result<String> {
    serde_json::to_string_pretty(node)
}
