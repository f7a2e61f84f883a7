//! Plain-text rendering of view trees
//!
//! Used by the CLI to preview a screen in a terminal. Chart nodes are drawn
//! with block characters; everything else becomes one line per node.

use super::node::{NodeKind, ViewNode};

const SPARK_LEVELS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];
const RULE_WIDTH: usize = 48;

/// Renders a view tree as indented text
#[derive(Debug, Clone, Copy)]
pub struct TextRenderer {
    /// Columns used by a full-length bar or progress meter
    pub bar_width: usize,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self { bar_width: 30 }
    }
}

/// Render with default settings
pub fn render_text(node: &ViewNode) -> String {
    TextRenderer::default().render(node)
}

impl TextRenderer {
    pub fn new(bar_width: usize) -> Self {
        Self { bar_width }
    }

    pub fn render(&self, node: &ViewNode) -> String {
        let mut out = String::new();
        self.write_node(node, 0, &mut out);
        out
    }

    fn write_node(&self, node: &ViewNode, depth: usize, out: &mut String) {
        match node.kind {
            NodeKind::Shell | NodeKind::Stack | NodeKind::Grid | NodeKind::NavList => {
                self.write_children(node, depth, out);
            }
            NodeKind::Sidebar => {
                let state = if node.flag("collapsed") {
                    "collapsed"
                } else {
                    "expanded"
                };
                push_line(out, depth, &format!("[sidebar: {state}]"));
                self.write_children(node, depth + 1, out);
            }
            NodeKind::Header | NodeKind::RegionPanel => {
                self.write_children(node, depth, out);
            }
            NodeKind::Main => {
                push_line(out, depth, &"─".repeat(RULE_WIDTH));
                self.write_children(node, depth, out);
            }
            NodeKind::Brand | NodeKind::Title => {
                push_line(out, depth, &format!("# {}", text_of(node)));
            }
            NodeKind::Heading => {
                push_line(out, depth, &format!("## {}", text_of(node)));
            }
            NodeKind::Button => push_line(out, depth, &button_line(node)),
            NodeKind::NavItem => push_line(out, depth, &nav_item_line(node)),
            NodeKind::SearchBox => {
                let value = node.get_attr("value").unwrap_or("");
                let shown = if value.is_empty() {
                    node.get_attr("placeholder").unwrap_or("")
                } else {
                    value
                };
                push_line(out, depth, &format!("🔍 [{shown}]"));
            }
            NodeKind::StatCard => push_line(out, depth, &stat_card_line(node)),
            NodeKind::LineChart => self.write_line_chart(node, depth, out),
            NodeKind::BarChart => self.write_bar_chart(node, depth, out),
            NodeKind::DonutChart => self.write_donut_chart(node, depth, out),
            NodeKind::RegionRow => self.write_region_row(node, depth, out),
            NodeKind::Legend => push_line(out, depth, &legend_line(node)),
            NodeKind::Footer => {
                push_line(out, depth, &format!("{} {}", glyph_of(node), text_of(node)));
            }
            NodeKind::Placeholder => {
                push_line(out, depth, "");
                self.write_children(node, depth + 1, out);
                push_line(out, depth, "");
            }
            // Decorations are drawn by their parents
            NodeKind::Icon | NodeKind::Badge | NodeKind::ActiveIndicator | NodeKind::Tooltip => {}
            _ => {
                if let Some(text) = node.text.as_deref() {
                    push_line(out, depth, text);
                }
                self.write_children(node, depth, out);
            }
        }
    }

    fn write_children(&self, node: &ViewNode, depth: usize, out: &mut String) {
        for child in &node.children {
            self.write_node(child, depth, out);
        }
    }

    fn write_chart_header(&self, node: &ViewNode, depth: usize, out: &mut String) {
        for child in &node.children {
            match child.kind {
                NodeKind::Heading => push_line(out, depth, &format!("## {}", text_of(child))),
                NodeKind::Caption => push_line(out, depth, &format!("   {}", text_of(child))),
                NodeKind::Legend => push_line(out, depth, &legend_line(child)),
                _ => {}
            }
        }
    }

    fn write_line_chart(&self, node: &ViewNode, depth: usize, out: &mut String) {
        self.write_chart_header(node, depth, out);
        let y_max = node.num_attr("y-max").unwrap_or(0.0);

        for series in node.children.iter().filter(|c| c.kind == NodeKind::Series) {
            let points: Vec<_> = series
                .children
                .iter()
                .filter_map(|p| Some((p.get_attr("x")?, p.num_attr("y")?)))
                .collect();

            let spark: String = points.iter().map(|(_, y)| spark_char(*y, y_max)).collect();
            let values = points
                .iter()
                .map(|(x, y)| format!("{x} {y}"))
                .collect::<Vec<_>>()
                .join(" · ");
            let label = series.get_attr("label").unwrap_or("");
            push_line(out, depth, &format!("{label:<14} {spark}  {values}"));
        }
    }

    fn write_bar_chart(&self, node: &ViewNode, depth: usize, out: &mut String) {
        self.write_chart_header(node, depth, out);
        let bars: Vec<_> = node
            .children
            .iter()
            .filter(|c| c.kind == NodeKind::Bar)
            .collect();
        let label_width = bars
            .iter()
            .map(|b| text_of(b).chars().count())
            .max()
            .unwrap_or(0);

        for bar in bars {
            let height = bar.num_attr("height").unwrap_or(0.0);
            let value = bar.get_attr("value").unwrap_or("");
            push_line(
                out,
                depth,
                &format!(
                    "{:<width$} {} {value}",
                    text_of(bar),
                    self.meter(height, '█', ' ').trim_end(),
                    width = label_width
                ),
            );
        }
    }

    fn write_donut_chart(&self, node: &ViewNode, depth: usize, out: &mut String) {
        for child in &node.children {
            match child.kind {
                NodeKind::Heading => push_line(out, depth, &format!("## {}", text_of(child))),
                NodeKind::Caption => push_line(out, depth, &format!("   {}", text_of(child))),
                _ => {}
            }
        }

        let slices = node
            .children
            .iter()
            .filter(|c| c.kind == NodeKind::Slice)
            .map(|s| format!("◔ {}", s.get_attr("label").unwrap_or("")))
            .collect::<Vec<_>>()
            .join("  ");
        push_line(out, depth, &slices);

        if let Some(legend) = node.children.iter().find(|c| c.kind == NodeKind::Legend) {
            for item in &legend.children {
                let texts: Vec<_> = item
                    .children
                    .iter()
                    .filter_map(|t| t.text.as_deref())
                    .collect();
                push_line(out, depth, &format!("● {}", texts.join("  ")));
            }
        }
    }

    fn write_region_row(&self, node: &ViewNode, depth: usize, out: &mut String) {
        let mut name = "";
        let mut details = Vec::new();
        let mut caption = "";
        let mut width = 0.0;

        for child in &node.children {
            match (child.kind, child.get_attr("role")) {
                (NodeKind::Text, Some("name")) => name = text_of(child),
                (NodeKind::Text, _) => details.push(format!("{} {}", glyph_of(child), text_of(child))),
                (NodeKind::ProgressBar, _) => width = child.num_attr("width").unwrap_or(0.0),
                (NodeKind::Caption, _) => caption = text_of(child),
                _ => {}
            }
        }

        push_line(out, depth, &format!("{name}  {}", details.join("  ")));
        push_line(
            out,
            depth,
            &format!("[{}] {caption}", self.meter(width, '█', '░')),
        );
    }

    /// Fixed-width meter filled to `percent` of `bar_width`
    fn meter(&self, percent: f64, fill: char, empty: char) -> String {
        let filled = ((percent.clamp(0.0, 100.0) / 100.0) * self.bar_width as f64).round() as usize;
        let mut s = String::with_capacity(self.bar_width * 3);
        s.extend(std::iter::repeat(fill).take(filled));
        s.extend(std::iter::repeat(empty).take(self.bar_width - filled));
        s
    }
}

fn push_line(out: &mut String, depth: usize, line: &str) {
    for _ in 0..depth {
        out.push_str("  ");
    }
    out.push_str(line);
    out.push('\n');
}

fn text_of(node: &ViewNode) -> &str {
    node.text.as_deref().unwrap_or("")
}

/// Glyph of the node's first direct icon child
fn glyph_of(node: &ViewNode) -> &str {
    node.children
        .iter()
        .find(|c| c.kind == NodeKind::Icon)
        .and_then(|c| c.get_attr("glyph"))
        .unwrap_or("")
}

fn child_text(node: &ViewNode, kind: NodeKind) -> Option<&str> {
    node.children
        .iter()
        .find(|c| c.kind == kind)
        .and_then(|c| c.text.as_deref())
}

fn spark_char(value: f64, max: f64) -> char {
    if max <= 0.0 {
        return SPARK_LEVELS[0];
    }
    let idx = ((value / max).clamp(0.0, 1.0) * (SPARK_LEVELS.len() - 1) as f64).round() as usize;
    SPARK_LEVELS[idx]
}

fn button_line(node: &ViewNode) -> String {
    let badge = if node.children.iter().any(|c| c.kind == NodeKind::Badge) {
        "•"
    } else {
        ""
    };
    match node.text.as_deref() {
        Some(text) => format!("[{} {text}]{badge}", glyph_of(node)),
        None => format!("[{}]{badge}", glyph_of(node)),
    }
}

fn nav_item_line(node: &ViewNode) -> String {
    let marker = if node.flag("active") { "▶" } else { " " };
    match child_text(node, NodeKind::Text) {
        Some(label) => format!("{marker} {} {label}", glyph_of(node)),
        None => format!("{marker} {}", glyph_of(node)),
    }
}

fn stat_card_line(node: &ViewNode) -> String {
    let mut line = format!(
        "{} {}: {}",
        glyph_of(node),
        child_text(node, NodeKind::Heading).unwrap_or(""),
        child_text(node, NodeKind::Text).unwrap_or("")
    );
    if let Some(subtitle) = child_text(node, NodeKind::Caption) {
        line.push(' ');
        line.push_str(subtitle);
    }
    if let Some(trend) = child_text(node, NodeKind::Trend) {
        line.push_str(&format!("  ({trend})"));
    }
    line
}

fn legend_line(node: &ViewNode) -> String {
    node.children
        .iter()
        .map(|item| {
            let texts: Vec<_> = item
                .children
                .iter()
                .filter_map(|t| t.text.as_deref())
                .collect();
            format!("● {}", texts.join(" "))
        })
        .collect::<Vec<_>>()
        .join("  ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spark_char_bounds() {
        assert_eq!(spark_char(0.0, 100.0), '▁');
        assert_eq!(spark_char(100.0, 100.0), '█');
        assert_eq!(spark_char(500.0, 100.0), '█');
        assert_eq!(spark_char(5.0, 0.0), '▁');
    }

    #[test]
    fn test_meter_fills_proportionally() {
        let renderer = TextRenderer::new(10);
        assert_eq!(renderer.meter(85.0, '#', '.'), "#########.");
        assert_eq!(renderer.meter(0.0, '#', '.'), "..........");
        assert_eq!(renderer.meter(150.0, '#', '.'), "##########");
    }

    #[test]
    fn test_heading_and_indent() {
        let tree = ViewNode::new(NodeKind::Sidebar)
            .attr("collapsed", true)
            .child(ViewNode::text_node(NodeKind::Heading, "Genres Section"));
        let text = render_text(&tree);
        assert_eq!(text, "[sidebar: collapsed]\n  ## Genres Section\n");
    }

    #[test]
    fn test_button_with_badge() {
        let button = ViewNode::new(NodeKind::Button)
            .child(ViewNode::new(NodeKind::Icon).attr("glyph", "🔔"))
            .child(ViewNode::new(NodeKind::Badge));
        assert_eq!(button_line(&button), "[🔔]•");
    }

    #[test]
    fn test_overview_screen() {
        use crate::shell::Shell;

        let mut shell = Shell::default();
        let screen = TextRenderer::new(20).render(&shell.render());

        assert!(screen.contains("[sidebar: expanded]"));
        assert!(screen.contains("▶ 📊 Overview"));
        assert!(screen.contains("# Global Music Trends Analysis"));
        assert!(screen.contains("Total Streams: 2.4B  (+12.5%)"));
        assert!(screen.contains("Global Reach: 195 countries  (+2)"));

        // Line chart: legend and one sparkline row per series
        assert!(screen.contains("## Global Streaming Growth"));
        assert!(screen.contains("● Streams (M)  ● Listeners (M)"));
        assert!(screen.contains("Jan 1200 · Feb 1350"));

        // Bar chart: tallest bar fills the meter
        assert!(screen.contains(&format!("Bollywood  {} 850", "█".repeat(20))));

        // Donut chart: slice labels then legend rows
        assert!(screen.contains("◔ 35%  ◔ 28%  ◔ 22%  ◔ 15%"));
        assert!(screen.contains("● JioSaavn  35%"));

        // Region panel: details line and a meter sized by score
        assert!(screen.contains("North America  👥 45M  📈 +12%"));
        assert!(screen.contains(&format!(
            "[{}{}] Popularity Score: 85%",
            "█".repeat(17),
            "░".repeat(3)
        )));

        shell.click("Genre Popularity").unwrap();
        let screen = TextRenderer::new(20).render(&shell.render());
        assert!(screen.contains("## Genres Section"));
        assert!(screen.contains("Content for this section is coming soon..."));
        assert!(!screen.contains("Total Streams"));
    }
}
