//! Dashboard Composer
//!
//! Picks the widgets for a section and feeds them slices of the dataset.
//! Overview gets the full widget set; every other section gets a
//! placeholder. Composition never fails.
//!
//! ```text
//! overview
//!   ├─ grid(4): stat card × 4
//!   ├─ grid(2): line chart, donut chart
//!   └─ grid(2): bar chart, region panel
//! ```

use crate::dataset::MetricDataset;
use crate::navigation::Section;
use crate::view::{NodeKind, ViewNode};
use crate::widgets::{bar_chart, donut_chart, line_chart, placeholder, region_panel, stat_card};

/// Stagger between entrance effects of sibling widgets
pub const STAGGER_MS: u64 = 100;

/// Presentation switches that do not affect content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Attach decorative entrance-effect attributes
    pub animations: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { animations: true }
    }
}

impl RenderOptions {
    pub fn static_only() -> Self {
        Self { animations: false }
    }

    /// Tag a node with an entrance effect when animations are on
    pub fn decorate(&self, node: ViewNode, effect: &str, delay_ms: u64) -> ViewNode {
        if self.animations {
            node.attr("animate", effect).attr("delay", delay_ms)
        } else {
            node
        }
    }
}

/// Render the content area for a section
pub fn compose(section: Section, data: &MetricDataset, options: &RenderOptions) -> ViewNode {
    tracing::debug!(%section, "Composing section");
    match section {
        Section::Overview => overview(data, options),
        other => options.decorate(placeholder(other.id()), "fade-in", 0),
    }
}

/// Render the content area for a raw section id
///
/// Ids outside the section set are not an error: they render the same
/// placeholder as any unimplemented section, headed by the raw id.
pub fn compose_id(id: &str, data: &MetricDataset, options: &RenderOptions) -> ViewNode {
    match Section::from_id(id) {
        Ok(section) => compose(section, data, options),
        Err(e) => {
            tracing::debug!(error = %e, "Rendering placeholder for unknown section");
            options.decorate(placeholder(id), "fade-in", 0)
        }
    }
}

fn overview(data: &MetricDataset, options: &RenderOptions) -> ViewNode {
    let stats = ViewNode::new(NodeKind::Grid)
        .attr("columns", 4)
        .children(data.stats.iter().enumerate().map(|(i, stat)| {
            options.decorate(stat_card(stat), "fade-up", i as u64 * STAGGER_MS)
        }));

    let trends = ViewNode::new(NodeKind::Grid)
        .attr("columns", 2)
        .child(options.decorate(
            line_chart(&data.streaming_growth),
            "slide-left",
            2 * STAGGER_MS,
        ))
        .child(options.decorate(
            donut_chart(&data.platform_share),
            "slide-right",
            3 * STAGGER_MS,
        ));

    let breakdowns = ViewNode::new(NodeKind::Grid)
        .attr("columns", 2)
        .child(options.decorate(bar_chart(&data.top_genres), "slide-left", 4 * STAGGER_MS))
        .child(options.decorate(region_panel(&data.regions), "slide-right", 5 * STAGGER_MS));

    ViewNode::new(NodeKind::Stack)
        .key(Section::Overview.id())
        .child(stats)
        .child(trends)
        .child(breakdowns)
}
