//! Presentational Widgets
//!
//! Pure functions from a dataset slice to a view tree. None of them hold
//! state or trigger navigation; the same slice always yields the same tree.
//!
//! - **stat_card**: One headline statistic
//! - **line_chart**: Multi-series time chart
//! - **bar_chart**: Category breakdown
//! - **donut_chart**: Percentage shares with legend
//! - **region_panel**: Regional popularity rows
//! - **placeholder**: Stand-in for sections without content

pub mod bar_chart;
pub mod donut_chart;
pub mod line_chart;
pub mod placeholder;
pub mod region_panel;
pub mod stat_card;

pub use bar_chart::bar_chart;
pub use donut_chart::donut_chart;
pub use line_chart::line_chart;
pub use placeholder::{placeholder, title_case_first};
pub use region_panel::region_panel;
pub use stat_card::stat_card;

use crate::dataset::Icon;
use crate::view::{NodeKind, ViewNode};

/// Icon reference node
pub fn icon_node(icon: Icon) -> ViewNode {
    ViewNode::new(NodeKind::Icon)
        .attr("name", icon.name())
        .attr("glyph", icon.glyph())
}

/// Chart root with its title heading and optional subtitle caption
pub(crate) fn chart_frame(kind: NodeKind, title: &str, subtitle: Option<&str>) -> ViewNode {
    ViewNode::new(kind)
        .key(title)
        .child(ViewNode::text_node(NodeKind::Heading, title))
        .maybe_child(subtitle.map(|s| ViewNode::text_node(NodeKind::Caption, s)))
}

/// Legend entry: colored label with an optional value
pub(crate) fn legend_item(label: &str, color: &str, value: Option<String>) -> ViewNode {
    ViewNode::new(NodeKind::LegendItem)
        .attr("color", color)
        .child(ViewNode::text_node(NodeKind::Text, label))
        .maybe_child(value.map(|v| ViewNode::text_node(NodeKind::Text, v).attr("role", "value")))
}

/// Round to two decimals for stable attribute strings
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
