//! # Trendwave
//!
//! Music streaming analytics dashboard. The crate composes the dashboard
//! screen (sidebar, header and the active section's content) into a
//! renderer-neutral [`view::ViewNode`] tree from an in-memory dataset.
//! The web front end paints that tree into the DOM; the CLI prints it as
//! text or JSON.
//!
//! ## Modules
//!
//! - [`dataset`]: Metric shapes, the built-in dataset and exports
//! - [`navigation`]: Sections and the navigation state machine
//! - [`widgets`]: Stat cards and chart panels
//! - [`composer`]: Per-section content composition
//! - [`shell`]: Layout, session state and actions
//! - [`view`]: View tree and text rendering
//! - [`config`]: Configuration files and environment overrides
//!
//! ## Quick Start
//!
//! ```rust
//! use trendwave::shell::Shell;
//! use trendwave::view::TextRenderer;
//!
//! let mut shell = Shell::default();
//! shell.click("Regional Trends").unwrap();
//!
//! let screen = TextRenderer::default().render(&shell.render());
//! assert!(screen.contains("Regional Section"));
//! ```

pub mod composer;
pub mod config;
pub mod dataset;
#[cfg(feature = "cli")]
pub mod logging;
pub mod navigation;
pub mod shell;
pub mod view;
pub mod widgets;

// Re-export top-level types for convenience
pub use composer::{compose, compose_id, RenderOptions};

pub use config::{Config, ConfigError, DashboardConfig, LoggingConfig};

pub use dataset::{
    export_slice, DatasetSlice, ExportError, ExportFormat, MetricDataset, SummaryStat, TimeSeries,
};

pub use navigation::{NavError, NavMsg, NavState, Section};

pub use shell::{Shell, ShellError};

pub use view::{Action, NodeKind, TextRenderer, ViewNode};
