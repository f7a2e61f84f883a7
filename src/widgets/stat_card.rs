//! Stat Card Widget
//!
//! Displays a single headline statistic with icon, optional trend and subtitle.

use super::icon_node;
use crate::dataset::SummaryStat;
use crate::view::{NodeKind, ViewNode};

/// Render one summary statistic
pub fn stat_card(stat: &SummaryStat) -> ViewNode {
    ViewNode::new(NodeKind::StatCard)
        .key(&stat.label)
        .attr("color", stat.color)
        .child(icon_node(stat.icon))
        .maybe_child(
            stat.trend
                .as_deref()
                .map(|t| ViewNode::text_node(NodeKind::Trend, t).attr("color", stat.color)),
        )
        .child(ViewNode::text_node(NodeKind::Heading, &stat.label))
        .child(ViewNode::text_node(NodeKind::Text, &stat.value).attr("role", "value"))
        .maybe_child(
            stat.subtitle
                .as_deref()
                .map(|s| ViewNode::text_node(NodeKind::Caption, s)),
        )
}
