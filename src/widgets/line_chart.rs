//! Line Chart Widget
//!
//! One series per measure descriptor, one point per period in caller order.

use super::{chart_frame, legend_item};
use crate::dataset::TimeSeries;
use crate::view::{NodeKind, ViewNode};

pub const LINE_CHART_TITLE: &str = "Global Streaming Growth";

/// Render a multi-series time chart
///
/// The y-axis domain runs from 0 to the largest plotted value.
pub fn line_chart(data: &TimeSeries) -> ViewNode {
    let legend = ViewNode::new(NodeKind::Legend).children(
        data.series
            .iter()
            .map(|spec| legend_item(&spec.label, spec.color.hex(), None)),
    );

    let series = data.series.iter().map(|spec| {
        ViewNode::new(NodeKind::Series)
            .key(&spec.key)
            .attr("label", &spec.label)
            .attr("color", spec.color.hex())
            .children(data.values(&spec.key).into_iter().map(|(period, value)| {
                ViewNode::new(NodeKind::Point)
                    .attr("x", period)
                    .attr("y", value)
            }))
    });

    chart_frame(NodeKind::LineChart, LINE_CHART_TITLE, None)
        .attr("y-min", 0)
        .attr("y-max", data.max_value())
        .child(legend)
        .children(series)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::MetricDataset;

    #[test]
    fn test_series_follow_descriptors() {
        let data = MetricDataset::mock();
        let chart = line_chart(&data.streaming_growth);

        let series = chart.find_all(NodeKind::Series);
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].get_attr("label"), Some("Streams (M)"));
        assert_eq!(series[1].get_attr("label"), Some("Listeners (M)"));
        assert_eq!(series[0].children.len(), 6);
        assert_eq!(chart.get_attr("y-max"), Some("2600"));
    }

    #[test]
    fn test_points_keep_caller_order() {
        let data = MetricDataset::mock();
        let chart = line_chart(&data.streaming_growth);
        let streams = chart.find_all(NodeKind::Series)[0];
        let xs: Vec<_> = streams
            .children
            .iter()
            .filter_map(|p| p.get_attr("x"))
            .collect();
        assert_eq!(xs, ["Jan", "Feb", "Mar", "Apr", "May", "Jun"]);
        assert_eq!(streams.children[5].num_attr("y"), Some(2400.0));
    }

    #[test]
    fn test_legend_labels() {
        let data = MetricDataset::mock();
        let chart = line_chart(&data.streaming_growth);
        let legend = chart.find(NodeKind::Legend).unwrap();
        assert_eq!(legend.text_content(), "Streams (M) Listeners (M)");
        assert_eq!(legend.children[0].get_attr("color"), Some("#00D4FF"));
    }
}
