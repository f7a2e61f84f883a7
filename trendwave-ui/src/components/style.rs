//! Node Styling
//!
//! Maps view nodes to Tailwind classes and inline styles.

use trendwave::dataset::ColorTag;
use trendwave::view::{NodeKind, ViewNode};

/// Base classes for a node kind
pub fn base_class(kind: NodeKind) -> &'static str {
    match kind {
        NodeKind::Shell => "min-h-screen flex",
        NodeKind::Sidebar => "bg-slate-900 border-r border-slate-800 p-4 flex flex-col gap-4",
        NodeKind::Brand => "text-xl font-bold text-cyan-400",
        NodeKind::NavList => "flex flex-col gap-1",
        NodeKind::NavItem => {
            "group relative flex items-center gap-3 px-3 py-2 rounded-lg text-slate-300 hover:bg-slate-800 transition-colors"
        }
        NodeKind::ActiveIndicator => "absolute right-0 top-2 bottom-2 w-1 rounded-full bg-cyan-400",
        NodeKind::Tooltip => {
            "absolute left-full ml-2 px-2 py-1 rounded bg-slate-800 text-sm whitespace-nowrap hidden group-hover:block"
        }
        NodeKind::Header => "flex items-center justify-between gap-4 px-8 py-4 border-b border-slate-800",
        NodeKind::Title => "text-2xl font-bold",
        NodeKind::Subtitle => "text-sm text-slate-400",
        NodeKind::SearchBox => "relative flex items-center gap-2 bg-slate-900 rounded-lg px-3 py-2",
        NodeKind::Button => "relative p-2 rounded-lg text-slate-300 hover:bg-slate-800 transition-colors",
        NodeKind::Badge => "absolute top-1 right-1 w-2 h-2 rounded-full bg-fuchsia-500",
        NodeKind::Main => "flex-1 p-8 overflow-y-auto",
        NodeKind::Stack => "flex flex-col gap-6",
        NodeKind::Grid => "grid gap-6",
        NodeKind::Heading => "text-lg font-semibold",
        NodeKind::Text => "text-slate-200",
        NodeKind::Icon => "inline-block",
        NodeKind::StatCard => "bg-slate-900 rounded-xl p-6 border-l-4 flex flex-col gap-2",
        NodeKind::Trend => "text-sm font-medium",
        NodeKind::LineChart | NodeKind::BarChart | NodeKind::DonutChart => {
            "bg-slate-900 rounded-xl p-6 flex flex-col gap-4"
        }
        NodeKind::RegionPanel => "bg-slate-900 rounded-xl p-6 flex flex-col gap-4",
        NodeKind::Legend => "flex justify-center flex-wrap gap-4",
        NodeKind::LegendItem => "flex items-center gap-2 text-sm text-slate-300",
        NodeKind::Series | NodeKind::Point | NodeKind::Bar | NodeKind::Slice => "hidden",
        NodeKind::RegionRow => "flex flex-col gap-2",
        NodeKind::ProgressBar => "h-2 rounded-full",
        NodeKind::Caption => "text-xs text-slate-400",
        NodeKind::Footer => "flex items-center gap-2 text-xs text-slate-500 pt-2 border-t border-slate-800",
        NodeKind::Placeholder => "flex flex-col items-center justify-center min-h-[60vh] text-center gap-4",
    }
}

/// Full class list: base classes plus layout and entrance effect
pub fn class_for(node: &ViewNode) -> String {
    let mut classes = vec![base_class(node.kind).to_string()];

    if node.kind == NodeKind::Grid {
        classes.push(grid_columns(node.num_attr("columns").unwrap_or(1.0) as usize));
    }
    if node.kind == NodeKind::NavItem && node.flag("active") {
        classes.push("bg-slate-800 text-white".to_string());
    }
    if node.kind == NodeKind::Sidebar {
        classes.push(if node.flag("collapsed") { "w-20" } else { "w-64" }.to_string());
    }
    if let Some(effect) = node.get_attr("animate") {
        classes.push(format!("animate-{}", effect));
    }

    classes.join(" ")
}

/// Responsive column classes for a grid
fn grid_columns(columns: usize) -> String {
    match columns {
        0 | 1 => "grid-cols-1".to_string(),
        2 => "grid-cols-1 lg:grid-cols-2".to_string(),
        n => format!("grid-cols-1 md:grid-cols-2 lg:grid-cols-{}", n),
    }
}

/// Hex value for a color attribute, which may be a palette tag or already hex
pub fn resolve_color(value: &str) -> String {
    if value.starts_with('#') {
        return value.to_string();
    }
    ColorTag::all()
        .iter()
        .find(|tag| tag.to_string() == value)
        .map(|tag| tag.hex().to_string())
        .unwrap_or_else(|| value.to_string())
}

/// Inline style for colors, meter widths and animation delays
pub fn inline_style(node: &ViewNode) -> Option<String> {
    let mut rules = Vec::new();

    if let Some(color) = node.get_attr("color").map(resolve_color) {
        match node.kind {
            NodeKind::StatCard => rules.push(format!("border-left-color: {}", color)),
            NodeKind::Trend => rules.push(format!("color: {}", color)),
            NodeKind::ProgressBar => rules.push(format!("background-color: {}", color)),
            _ => {}
        }
    }
    if node.kind == NodeKind::ProgressBar {
        if let Some(width) = node.get_attr("width") {
            rules.push(format!("width: {}", width));
        }
    }
    if let Some(delay) = node.get_attr("delay") {
        rules.push(format!("animation-delay: {}ms", delay));
    }

    (!rules.is_empty()).then(|| rules.join("; "))
}
