//! Sidebar navigation
//!
//! Brand, collapse toggle and one entry per section. Collapsed, the sidebar
//! shows icons only and moves each label into a tooltip.

use crate::composer::{RenderOptions, STAGGER_MS};
use crate::dataset::Icon;
use crate::navigation::{NavState, Section};
use crate::view::{Action, NodeKind, ViewNode};
use crate::widgets::icon_node;

pub const BRAND: &str = "Music AI";
pub const TOGGLE_KEY: &str = "sidebar-toggle";

/// Render the sidebar for a navigation snapshot
pub fn sidebar(nav: NavState, options: &RenderOptions) -> ViewNode {
    let collapsed = nav.is_collapsed();

    let toggle_icon = if collapsed {
        Icon::ChevronRight
    } else {
        Icon::ChevronLeft
    };
    let toggle = ViewNode::new(NodeKind::Button)
        .key(TOGGLE_KEY)
        .action(Action::ToggleSidebar)
        .child(icon_node(toggle_icon));

    let items = Section::all().iter().enumerate().map(|(i, section)| {
        options.decorate(
            nav_item(*section, nav.active() == *section, collapsed),
            "slide-right",
            i as u64 * STAGGER_MS,
        )
    });

    ViewNode::new(NodeKind::Sidebar)
        .attr("collapsed", collapsed)
        .maybe_child((!collapsed).then(|| ViewNode::text_node(NodeKind::Brand, BRAND)))
        .child(toggle)
        .child(ViewNode::new(NodeKind::NavList).children(items))
}

fn nav_item(section: Section, active: bool, collapsed: bool) -> ViewNode {
    let label = section.label();
    ViewNode::new(NodeKind::NavItem)
        .key(section.id())
        .attr("active", active)
        .action(Action::Select { section })
        .child(icon_node(section.icon()))
        .maybe_child((!collapsed).then(|| ViewNode::text_node(NodeKind::Text, label)))
        .maybe_child(active.then(|| ViewNode::new(NodeKind::ActiveIndicator)))
        .maybe_child(collapsed.then(|| ViewNode::text_node(NodeKind::Tooltip, label)))
}
