//! Dashboard Shell
//!
//! The composition root. The shell owns the session state (navigation and
//! search text) and the dataset, renders the full screen, and applies the
//! [`Action`]s bound to clicked nodes.
//!
//! - **sidebar**: Section navigation
//! - **header**: Title, search and buttons
//! - **error**: Error types
//!
//! # Example
//!
//! ```rust
//! use trendwave::shell::Shell;
//! use trendwave::navigation::Section;
//!
//! let mut shell = Shell::default();
//! shell.click("Genre Popularity").unwrap();
//! assert_eq!(shell.nav().active(), Section::Genres);
//! assert!(shell.render().text_content().contains("Genres Section"));
//! ```

pub mod error;
pub mod header;
pub mod sidebar;

pub use error::{ShellError, ShellResult};
pub use header::header;
pub use sidebar::sidebar;

use crate::composer::{compose, RenderOptions};
use crate::config::Config;
use crate::dataset::MetricDataset;
use crate::navigation::{NavMsg, NavState};
use crate::view::{Action, NodeKind, ViewNode};

/// Top-level dashboard layout and session state
#[derive(Debug, Clone)]
pub struct Shell {
    nav: NavState,
    search: String,
    data: MetricDataset,
    options: RenderOptions,
}

impl Default for Shell {
    fn default() -> Self {
        Self::new(MetricDataset::mock(), RenderOptions::default())
    }
}

impl Shell {
    /// Start a session on the overview with the sidebar expanded
    pub fn new(data: MetricDataset, options: RenderOptions) -> Self {
        Self {
            nav: NavState::default(),
            search: String::new(),
            data,
            options,
        }
    }

    /// Start a session with the configured defaults and the built-in dataset
    pub fn from_config(config: &Config) -> Self {
        Self::new(MetricDataset::mock(), config.dashboard.render_options())
            .with_nav(config.dashboard.initial_nav())
    }

    /// Builder method: replace the initial navigation state
    pub fn with_nav(mut self, nav: NavState) -> Self {
        self.nav = nav;
        self
    }

    /// Snapshot of the navigation state
    pub fn nav(&self) -> NavState {
        self.nav
    }

    pub fn search_query(&self) -> &str {
        &self.search
    }

    pub fn dataset(&self) -> &MetricDataset {
        &self.data
    }

    pub fn options(&self) -> RenderOptions {
        self.options
    }

    /// Apply an action; returns whether anything changed
    pub fn dispatch(&mut self, action: Action) -> bool {
        tracing::debug!(?action, "Dispatching action");
        match action {
            Action::Select { section } => self.nav.update(NavMsg::Select(section)),
            Action::ToggleSidebar => self.nav.update(NavMsg::ToggleSidebar),
            Action::Search { query } => {
                let changed = self.search != query;
                self.search = query;
                changed
            }
        }
    }

    /// Click the first element whose label or key matches, as a user would
    ///
    /// Returns the action that was applied.
    pub fn click(&mut self, label: &str) -> ShellResult<Action> {
        let action = self
            .render()
            .clickable(label)
            .and_then(|node| node.action.clone())
            .ok_or_else(|| ShellError::NoSuchTarget(label.to_string()))?;
        self.dispatch(action.clone());
        Ok(action)
    }

    /// Render the whole screen
    pub fn render(&self) -> ViewNode {
        ViewNode::new(NodeKind::Shell)
            .attr("collapsed", self.nav.is_collapsed())
            .child(self.render_sidebar())
            .child(self.render_header())
            .child(self.render_main())
    }

    pub fn render_sidebar(&self) -> ViewNode {
        sidebar(self.nav, &self.options)
    }

    pub fn render_header(&self) -> ViewNode {
        header(&self.search)
    }

    /// Content area for the active section
    ///
    /// Keyed by the section id, so a section change replaces the subtree as
    /// a whole.
    pub fn render_main(&self) -> ViewNode {
        let section = self.nav.active();
        ViewNode::new(NodeKind::Main)
            .key(section.id())
            .attr("section", section)
            .child(compose(section, &self.data, &self.options))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::Section;

    fn main_area(tree: &ViewNode) -> &ViewNode {
        tree.find(NodeKind::Main).unwrap()
    }

    #[test]
    fn test_initial_state() {
        let shell = Shell::default();
        assert_eq!(shell.nav(), NavState::new(Section::Overview, false));
        assert_eq!(shell.search_query(), "");

        let tree = shell.render();
        assert_eq!(main_area(&tree).key.as_deref(), Some("overview"));
        assert_eq!(tree.count(NodeKind::StatCard), 4);
    }

    #[test]
    fn test_click_genre_popularity_swaps_content() {
        let mut shell = Shell::default();
        let action = shell.click("Genre Popularity").unwrap();
        assert_eq!(
            action,
            Action::Select {
                section: Section::Genres
            }
        );
        assert_eq!(shell.nav().active(), Section::Genres);
        assert!(!shell.nav().is_collapsed());

        let tree = shell.render();
        let main = main_area(&tree);
        assert_eq!(main.key.as_deref(), Some("genres"));
        assert_eq!(
            main.find(NodeKind::Heading).unwrap().text.as_deref(),
            Some("Genres Section")
        );
        assert_eq!(tree.count(NodeKind::StatCard), 0);
    }

    #[test]
    fn test_toggle_does_not_change_section() {
        let mut shell = Shell::default();
        shell.click("Predictions").unwrap();
        shell.click(sidebar::TOGGLE_KEY).unwrap();
        assert_eq!(shell.nav(), NavState::new(Section::Predictions, true));

        // Collapsed: labels live in tooltips and are still clickable
        shell.click("Overview").unwrap();
        assert_eq!(shell.nav(), NavState::new(Section::Overview, true));

        shell.click(sidebar::TOGGLE_KEY).unwrap();
        assert_eq!(shell.nav(), NavState::new(Section::Overview, false));
    }

    #[test]
    fn test_search_is_stored_only() {
        let mut shell = Shell::default();
        let before = shell.render();
        assert!(shell.dispatch(Action::Search {
            query: "arijit singh".to_string()
        }));
        assert_eq!(shell.search_query(), "arijit singh");
        assert_eq!(shell.nav(), NavState::default());

        let after = shell.render();
        assert_eq!(main_area(&before), main_area(&after));
        assert_eq!(
            after.find(NodeKind::SearchBox).unwrap().get_attr("value"),
            Some("arijit singh")
        );
    }

    #[test]
    fn test_click_unknown_label() {
        let mut shell = Shell::default();
        let err = shell.click("Albums").unwrap_err();
        assert_eq!(err, ShellError::NoSuchTarget("Albums".to_string()));
        // Non-interactive text is not a click target
        assert!(shell.click("Total Streams").is_err());
        assert_eq!(shell.nav(), NavState::default());
    }

    #[test]
    fn test_from_config() {
        let mut config = Config::default();
        config.dashboard.default_section = Section::Regional;
        config.dashboard.sidebar_collapsed = true;
        config.dashboard.animations = false;

        let shell = Shell::from_config(&config);
        assert_eq!(shell.nav(), NavState::new(Section::Regional, true));
        let tree = shell.render();
        assert!(tree.flag("collapsed"));
        assert!(tree.descendants().iter().all(|n| n.get_attr("animate").is_none()));
        assert_eq!(
            main_area(&tree).find(NodeKind::Heading).unwrap().text.as_deref(),
            Some("Regional Section")
        );
    }

    #[test]
    fn test_dispatch_reports_changes() {
        let mut shell = Shell::default();
        assert!(!shell.dispatch(Action::Select {
            section: Section::Overview
        }));
        assert!(shell.dispatch(Action::ToggleSidebar));
        assert!(!shell.dispatch(Action::Search {
            query: String::new()
        }));
    }
}
