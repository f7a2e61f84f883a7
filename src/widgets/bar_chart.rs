//! Bar Chart Widget

use super::{chart_frame, round2};
use crate::dataset::CategoryEntry;
use crate::view::{NodeKind, ViewNode};

pub const BAR_CHART_TITLE: &str = "Top 8 Genres Worldwide";
pub const BAR_CHART_SUBTITLE: &str = "Streams in millions";

/// Render a category breakdown, one bar per entry in insertion order
///
/// `height` is the bar's length as a percentage of the tallest bar.
pub fn bar_chart(entries: &[CategoryEntry]) -> ViewNode {
    let max = entries.iter().map(|e| e.value).fold(0.0, f64::max);

    let bars = entries.iter().map(|entry| {
        let height = if max > 0.0 {
            round2(entry.value / max * 100.0)
        } else {
            0.0
        };
        ViewNode::text_node(NodeKind::Bar, &entry.name)
            .key(&entry.name)
            .attr("value", entry.value)
            .attr("color", &entry.color)
            .attr("height", height)
    });

    chart_frame(NodeKind::BarChart, BAR_CHART_TITLE, Some(BAR_CHART_SUBTITLE))
        .attr("y-max", max)
        .children(bars)
}
