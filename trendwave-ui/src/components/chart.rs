//! Chart Component
//!
//! Line, bar and donut charts painted on HTML5 Canvas from chart nodes.

use leptos::*;
use std::f64::consts::PI;
use trendwave::view::{NodeKind, ViewNode};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::style::resolve_color;

const BACKGROUND: &str = "#0f172a"; // slate-900
const GRID: &str = "#1e293b"; // slate-800
const LABEL: &str = "#94a3b8"; // slate-400

/// Plot area inside the canvas margins
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Area {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Area {
    pub fn for_canvas(width: f64, height: f64) -> Self {
        let (margin_left, margin_right, margin_top, margin_bottom) = (50.0, 20.0, 20.0, 30.0);
        Self {
            left: margin_left,
            top: margin_top,
            width: (width - margin_left - margin_right).max(0.0),
            height: (height - margin_top - margin_bottom).max(0.0),
        }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Horizontal position of the i-th of `count` evenly spaced points
    pub fn x_at(&self, index: usize, count: usize) -> f64 {
        if count <= 1 {
            return self.left + self.width / 2.0;
        }
        self.left + self.width * index as f64 / (count - 1) as f64
    }

    /// Vertical position of a value on a zero-based axis
    pub fn y_at(&self, value: f64, y_max: f64) -> f64 {
        if y_max <= 0.0 {
            return self.bottom();
        }
        self.bottom() - self.height * (value / y_max).clamp(0.0, 1.0)
    }

    /// Rectangle (x, y, w, h) for the i-th bar at a percentage height
    pub fn bar_rect(&self, index: usize, count: usize, height_pct: f64) -> (f64, f64, f64, f64) {
        let slot = self.width / count.max(1) as f64;
        let h = self.height * height_pct.clamp(0.0, 100.0) / 100.0;
        (
            self.left + slot * index as f64 + slot * 0.15,
            self.bottom() - h,
            slot * 0.7,
            h,
        )
    }
}

/// Canvas angle for a clockwise degree offset from 12 o'clock
pub fn canvas_angle(degrees: f64) -> f64 {
    (degrees - 90.0) * PI / 180.0
}

/// Canvas size in pixels per chart kind
fn canvas_size(kind: NodeKind) -> (u32, u32) {
    match kind {
        NodeKind::DonutChart => (400, 300),
        _ => (800, 320),
    }
}

/// Canvas painted from a chart node
#[component]
pub fn ChartCanvas(node: ViewNode) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();
    let (width, height) = canvas_size(node.kind);

    create_effect(move |_| {
        if let Some(canvas) = canvas_ref.get() {
            paint_chart(&canvas, &node);
        }
    });

    view! {
        <canvas
            node_ref=canvas_ref
            width=width
            height=height
            class="w-full h-64 md:h-80 rounded-lg"
        />
    }
}

/// Draw a chart node on canvas
fn paint_chart(canvas: &HtmlCanvasElement, node: &ViewNode) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    ctx.set_fill_style(&BACKGROUND.into());
    ctx.fill_rect(0.0, 0.0, width, height);
    ctx.set_font("12px sans-serif");

    match node.kind {
        NodeKind::LineChart => paint_line(&ctx, node, Area::for_canvas(width, height)),
        NodeKind::BarChart => paint_bars(&ctx, node, Area::for_canvas(width, height)),
        NodeKind::DonutChart => paint_donut(&ctx, node, width, height),
        _ => {}
    }
}

fn paint_grid(ctx: &CanvasRenderingContext2d, area: Area, y_max: f64) {
    ctx.set_stroke_style(&GRID.into());
    ctx.set_line_width(1.0);
    ctx.set_text_align("right");

    for i in 0..=4 {
        let y = area.top + (i as f64 / 4.0) * area.height;
        ctx.begin_path();
        ctx.move_to(area.left, y);
        ctx.line_to(area.left + area.width, y);
        ctx.stroke();

        let value = y_max * (1.0 - i as f64 / 4.0);
        ctx.set_fill_style(&LABEL.into());
        let _ = ctx.fill_text(&format!("{:.0}", value), area.left - 8.0, y + 4.0);
    }
}

fn paint_line(ctx: &CanvasRenderingContext2d, node: &ViewNode, area: Area) {
    let y_max = node.num_attr("y-max").unwrap_or(0.0);
    paint_grid(ctx, area, y_max);

    let series = node.find_all(NodeKind::Series);

    // Period labels come from the first series
    if let Some(first) = series.first() {
        let count = first.children.len();
        ctx.set_fill_style(&LABEL.into());
        ctx.set_text_align("center");
        for (i, point) in first.children.iter().enumerate() {
            if let Some(x_label) = point.get_attr("x") {
                let _ = ctx.fill_text(x_label, area.x_at(i, count), area.bottom() + 20.0);
            }
        }
    }

    for s in series {
        let color = resolve_color(s.get_attr("color").unwrap_or(LABEL));
        let values: Vec<f64> = s.children.iter().filter_map(|p| p.num_attr("y")).collect();
        if values.is_empty() {
            continue;
        }

        ctx.set_stroke_style(&color.as_str().into());
        ctx.set_line_width(3.0);
        ctx.begin_path();
        for (i, value) in values.iter().enumerate() {
            let (x, y) = (area.x_at(i, values.len()), area.y_at(*value, y_max));
            if i == 0 {
                ctx.move_to(x, y);
            } else {
                ctx.line_to(x, y);
            }
        }
        ctx.stroke();

        ctx.set_fill_style(&color.as_str().into());
        for (i, value) in values.iter().enumerate() {
            ctx.begin_path();
            let _ = ctx.arc(
                area.x_at(i, values.len()),
                area.y_at(*value, y_max),
                4.0,
                0.0,
                PI * 2.0,
            );
            ctx.fill();
        }
    }
}

fn paint_bars(ctx: &CanvasRenderingContext2d, node: &ViewNode, area: Area) {
    paint_grid(ctx, area, node.num_attr("y-max").unwrap_or(0.0));

    let bars = node.find_all(NodeKind::Bar);
    ctx.set_text_align("center");

    for (i, bar) in bars.iter().enumerate() {
        let (x, y, w, h) = area.bar_rect(i, bars.len(), bar.num_attr("height").unwrap_or(0.0));
        let color = resolve_color(bar.get_attr("color").unwrap_or(LABEL));

        ctx.set_fill_style(&color.as_str().into());
        ctx.fill_rect(x, y, w, h);

        ctx.set_fill_style(&LABEL.into());
        if let Some(name) = bar.text.as_deref() {
            let _ = ctx.fill_text(name, x + w / 2.0, area.bottom() + 20.0);
        }
        if let Some(value) = bar.get_attr("value") {
            let _ = ctx.fill_text(value, x + w / 2.0, y - 6.0);
        }
    }
}

fn paint_donut(ctx: &CanvasRenderingContext2d, node: &ViewNode, width: f64, height: f64) {
    let (cx, cy) = (width / 2.0, height / 2.0);
    let outer = (width.min(height) / 2.0 - 20.0).max(0.0);
    let inner = outer * 0.6;

    ctx.set_text_align("center");

    for slice in node.find_all(NodeKind::Slice) {
        let start = slice.num_attr("start").unwrap_or(0.0);
        let sweep = slice.num_attr("sweep").unwrap_or(0.0);
        if sweep <= 0.0 {
            continue;
        }
        let (a0, a1) = (canvas_angle(start), canvas_angle(start + sweep));
        let color = resolve_color(slice.get_attr("color").unwrap_or(LABEL));

        ctx.set_fill_style(&color.as_str().into());
        ctx.begin_path();
        let _ = ctx.arc(cx, cy, outer, a0, a1);
        let _ = ctx.arc_with_anticlockwise(cx, cy, inner, a1, a0, true);
        ctx.close_path();
        ctx.fill();

        if let Some(label) = slice.get_attr("label") {
            let mid = canvas_angle(start + sweep / 2.0);
            let r = (outer + inner) / 2.0;
            ctx.set_fill_style(&"#ffffff".into());
            let _ = ctx.fill_text(label, cx + r * mid.cos(), cy + r * mid.sin() + 4.0);
        }
    }
}
