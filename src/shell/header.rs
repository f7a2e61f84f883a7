//! Header bar
//!
//! Title, search box and action buttons. The search box keeps whatever is
//! typed; nothing filters or submits on it. The buttons are decorative.

use crate::dataset::Icon;
use crate::view::{Action, NodeKind, ViewNode};
use crate::widgets::icon_node;

pub const TITLE: &str = "Global Music Trends Analysis";
pub const SUBTITLE: &str = "Real-time insights from Indian music market";
pub const SEARCH_PLACEHOLDER: &str = "Search artists, songs, genres...";

pub fn header(search_query: &str) -> ViewNode {
    let search = ViewNode::new(NodeKind::SearchBox)
        .key("search")
        .attr("placeholder", SEARCH_PLACEHOLDER)
        .attr("value", search_query)
        .action(Action::Search {
            query: search_query.to_string(),
        })
        .child(icon_node(Icon::Search));

    let buttons = [
        ("notifications", Icon::Bell),
        ("settings", Icon::Settings),
        ("account", Icon::User),
    ]
    .into_iter()
    .map(|(key, icon)| {
        ViewNode::new(NodeKind::Button)
            .key(key)
            .child(icon_node(icon))
            .maybe_child((icon == Icon::Bell).then(|| ViewNode::new(NodeKind::Badge)))
    });

    ViewNode::new(NodeKind::Header)
        .child(ViewNode::text_node(NodeKind::Title, TITLE))
        .child(ViewNode::text_node(NodeKind::Subtitle, SUBTITLE))
        .child(search)
        .children(buttons)
}
