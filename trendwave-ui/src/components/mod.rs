//! UI Components
//!
//! Leptos components that paint the dashboard's view trees.

pub mod chart;
pub mod node;
pub mod style;

pub use chart::ChartCanvas;
pub use node::NodeView;
