//! Region Panel Widget
//!
//! Lists regions with listener count, growth and a popularity meter.

use super::icon_node;
use crate::dataset::{Icon, RegionEntry};
use crate::view::{NodeKind, ViewNode};

pub const REGION_PANEL_TITLE: &str = "Regional Music Popularity";
pub const REGION_PANEL_FOOTER: &str = "Global music trends analyzed across 195+ countries";

/// Render the regional breakdown
pub fn region_panel(regions: &[RegionEntry]) -> ViewNode {
    ViewNode::new(NodeKind::RegionPanel)
        .key(REGION_PANEL_TITLE)
        .child(ViewNode::text_node(NodeKind::Heading, REGION_PANEL_TITLE))
        .child(icon_node(Icon::MapPin))
        .children(regions.iter().map(region_row))
        .child(ViewNode::text_node(NodeKind::Footer, REGION_PANEL_FOOTER).child(icon_node(Icon::Globe)))
}

fn region_row(region: &RegionEntry) -> ViewNode {
    ViewNode::new(NodeKind::RegionRow)
        .key(&region.name)
        .attr("color", region.color)
        .child(ViewNode::text_node(NodeKind::Text, &region.name).attr("role", "name"))
        .child(
            ViewNode::text_node(NodeKind::Text, &region.listeners)
                .attr("role", "listeners")
                .child(icon_node(Icon::Users)),
        )
        .child(
            ViewNode::text_node(NodeKind::Text, &region.growth)
                .attr("role", "growth")
                .child(icon_node(Icon::TrendingUp)),
        )
        .child(
            ViewNode::new(NodeKind::ProgressBar)
                .attr("width", progress_width(region.popularity))
                .attr("color", region.color),
        )
        .child(ViewNode::text_node(
            NodeKind::Caption,
            format!("Popularity Score: {}%", region.popularity),
        ))
}

/// Meter width for a popularity score, capped at a full bar
pub fn progress_width(score: u8) -> String {
    format!("{}%", score.min(100))
}
