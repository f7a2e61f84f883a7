//! Navigation state holder
//!
//! Two independent pieces of session state: the active section and the
//! sidebar collapse flag. Only the shell writes them; everything else reads
//! snapshots.

use serde::Serialize;

use super::error::NavResult;
use super::section::Section;

/// Messages accepted by [`NavState::update`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavMsg {
    Select(Section),
    ToggleSidebar,
    SetCollapsed(bool),
}

/// Active section plus sidebar collapse flag
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct NavState {
    active: Section,
    collapsed: bool,
}

impl NavState {
    /// Create state with explicit initial values
    pub fn new(active: Section, collapsed: bool) -> Self {
        Self { active, collapsed }
    }

    pub fn active(&self) -> Section {
        self.active
    }

    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    /// Make `section` the active one
    pub fn select(&mut self, section: Section) {
        if self.active != section {
            tracing::debug!(from = %self.active, to = %section, "Section changed");
        }
        self.active = section;
    }

    /// Select by raw id; unknown ids are rejected and leave the state unchanged
    pub fn select_id(&mut self, id: &str) -> NavResult<()> {
        let section = Section::from_id(id).inspect_err(|e| {
            tracing::debug!(error = %e, "Ignoring section change");
        })?;
        self.select(section);
        Ok(())
    }

    pub fn toggle_collapsed(&mut self) {
        self.set_collapsed(!self.collapsed);
    }

    pub fn set_collapsed(&mut self, collapsed: bool) {
        if self.collapsed != collapsed {
            tracing::debug!(collapsed, "Sidebar collapse changed");
        }
        self.collapsed = collapsed;
    }

    /// Apply a message; returns whether the state changed
    pub fn update(&mut self, msg: NavMsg) -> bool {
        let before = *self;
        match msg {
            NavMsg::Select(section) => self.select(section),
            NavMsg::ToggleSidebar => self.toggle_collapsed(),
            NavMsg::SetCollapsed(collapsed) => self.set_collapsed(collapsed),
        }
        *self != before
    }
}
