//! Donut Chart Widget
//!
//! Slices carry a label computed from their fraction of the total, the way a
//! charting library labels a pie. The legend shows each entry's percentage
//! exactly as given; nothing is re-normalized.

use super::{chart_frame, legend_item, round2};
use crate::dataset::ShareEntry;
use crate::view::{NodeKind, ViewNode};

pub const DONUT_CHART_TITLE: &str = "Streaming Platform Market Share";
pub const DONUT_CHART_SUBTITLE: &str = "Current distribution";

/// Render percentage shares as slices plus a legend
pub fn donut_chart(entries: &[ShareEntry]) -> ViewNode {
    let total: f64 = entries.iter().map(|e| e.percent).sum();

    let mut start = 0.0;
    let mut slices = Vec::with_capacity(entries.len());
    for entry in entries {
        let fraction = if total > 0.0 { entry.percent / total } else { 0.0 };
        let sweep = fraction * 360.0;
        slices.push(
            ViewNode::text_node(NodeKind::Slice, &entry.name)
                .key(&entry.name)
                .attr("value", entry.percent)
                .attr("color", &entry.color)
                .attr("label", slice_label(fraction))
                .attr("start", round2(start))
                .attr("sweep", round2(sweep)),
        );
        start += sweep;
    }

    let legend = ViewNode::new(NodeKind::Legend).children(
        entries
            .iter()
            .map(|e| legend_item(&e.name, &e.color, Some(format_percent(e.percent)))),
    );

    chart_frame(NodeKind::DonutChart, DONUT_CHART_TITLE, Some(DONUT_CHART_SUBTITLE))
        .children(slices)
        .child(legend)
}

/// Percentage as written in the data, e.g. `35` -> "35%", `12.5` -> "12.5%"
pub fn format_percent(value: f64) -> String {
    format!("{value}%")
}

/// Whole-number percentage of a fraction, e.g. `0.35` -> "35%"
///
/// Halves round up: `0.125` -> "13%".
pub fn slice_label(fraction: f64) -> String {
    format!("{}%", (fraction * 100.0).round())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::MetricDataset;

    fn legend_values(chart: &ViewNode) -> Vec<String> {
        chart
            .find(NodeKind::Legend)
            .unwrap()
            .descendants()
            .into_iter()
            .filter(|n| n.get_attr("role") == Some("value"))
            .filter_map(|n| n.text.clone())
            .collect()
    }

    #[test]
    fn test_legend_values_verbatim() {
        let data = MetricDataset::mock();
        let chart = donut_chart(&data.platform_share);
        assert_eq!(legend_values(&chart), ["35%", "28%", "22%", "15%"]);
    }

    #[test]
    fn test_legend_not_renormalized() {
        // Shares that do not add up to 100 are shown as given
        let entries = vec![
            ShareEntry::new("A", 60.0, "#111111"),
            ShareEntry::new("B", 30.0, "#222222"),
        ];
        let chart = donut_chart(&entries);
        assert_eq!(legend_values(&chart), ["60%", "30%"]);

        // Slice labels are fractions of the drawn total
        let labels: Vec<_> = chart
            .find_all(NodeKind::Slice)
            .into_iter()
            .filter_map(|s| s.get_attr("label"))
            .collect();
        assert_eq!(labels, ["67%", "33%"]);
    }

    #[test]
    fn test_slices_cover_full_circle() {
        let data = MetricDataset::mock();
        let chart = donut_chart(&data.platform_share);
        let slices = chart.find_all(NodeKind::Slice);
        assert_eq!(slices.len(), 4);
        assert_eq!(slices[0].get_attr("start"), Some("0"));
        assert_eq!(slices[0].get_attr("sweep"), Some("126"));
        let total: f64 = slices.iter().filter_map(|s| s.num_attr("sweep")).sum();
        assert!((total - 360.0).abs() < 0.05);
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(35.0), "35%");
        assert_eq!(format_percent(12.5), "12.5%");
        assert_eq!(slice_label(0.0), "0%");
    }

    #[test]
    fn test_slice_label_rounds_halves_up() {
        assert_eq!(slice_label(0.125), "13%");
        assert_eq!(slice_label(0.875), "88%");
        assert_eq!(slice_label(1.0), "100%");

        let entries = vec![
            ShareEntry::new("A", 1.0, "#111111"),
            ShareEntry::new("B", 7.0, "#222222"),
        ];
        let chart = donut_chart(&entries);
        let labels: Vec<_> = chart
            .find_all(NodeKind::Slice)
            .into_iter()
            .filter_map(|s| s.get_attr("label"))
            .collect();
        assert_eq!(labels, ["13%", "88%"]);
    }

    #[test]
    fn test_zero_total() {
        let chart = donut_chart(&[ShareEntry::new("None", 0.0, "#000000")]);
        let slice = chart.find(NodeKind::Slice).unwrap();
        assert_eq!(slice.get_attr("label"), Some("0%"));
        assert_eq!(slice.get_attr("sweep"), Some("0"));
    }
}
