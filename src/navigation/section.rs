//! Dashboard sections
//!
//! The closed set of views selectable from the sidebar, in sidebar order.

use serde::{Deserialize, Serialize};

use super::error::{NavError, NavResult};
use crate::dataset::Icon;

/// Top-level sections in the dashboard navigation
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    /// Stats, charts and the regional panel
    #[default]
    Overview,
    Regional,
    Genres,
    Streaming,
    Artists,
    Predictions,
}

const SECTIONS: [Section; 6] = [
    Section::Overview,
    Section::Regional,
    Section::Genres,
    Section::Streaming,
    Section::Artists,
    Section::Predictions,
];

impl Section {
    /// All sections in sidebar order
    pub fn all() -> &'static [Section] {
        &SECTIONS
    }

    /// Stable lowercase id ("overview", "genres", ...)
    pub fn id(self) -> &'static str {
        match self {
            Section::Overview => "overview",
            Section::Regional => "regional",
            Section::Genres => "genres",
            Section::Streaming => "streaming",
            Section::Artists => "artists",
            Section::Predictions => "predictions",
        }
    }

    /// Sidebar label
    pub fn label(self) -> &'static str {
        match self {
            Section::Overview => "Overview",
            Section::Regional => "Regional Trends",
            Section::Genres => "Genre Popularity",
            Section::Streaming => "Streaming Analytics",
            Section::Artists => "Artist Insights",
            Section::Predictions => "Predictions",
        }
    }

    pub fn icon(self) -> Icon {
        match self {
            Section::Overview => Icon::BarChart,
            Section::Regional => Icon::Globe,
            Section::Genres => Icon::Music,
            Section::Streaming => Icon::TrendingUp,
            Section::Artists => Icon::Users,
            Section::Predictions => Icon::Zap,
        }
    }

    /// Resolve an id from the closed set
    pub fn from_id(id: &str) -> NavResult<Self> {
        SECTIONS
            .iter()
            .copied()
            .find(|s| s.id() == id)
            .ok_or_else(|| NavError::UnknownSection(id.to_string()))
    }

    fn position(self) -> usize {
        SECTIONS.iter().position(|s| *s == self).unwrap_or(0)
    }

    /// Next section in sidebar order, wrapping to the first
    pub fn next(self) -> Self {
        SECTIONS[(self.position() + 1) % SECTIONS.len()]
    }

    /// Previous section in sidebar order, wrapping to the last
    pub fn prev(self) -> Self {
        SECTIONS[(self.position() + SECTIONS.len() - 1) % SECTIONS.len()]
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

impl std::str::FromStr for Section {
    type Err = NavError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::from_id(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_round_trip() {
        for section in Section::all() {
            assert_eq!(Section::from_id(section.id()).unwrap(), *section);
        }
    }

    #[test]
    fn test_unknown_id() {
        let err = Section::from_id("charts").unwrap_err();
        assert_eq!(err.to_string(), "Unknown section: charts");
        // ids are case-sensitive
        assert!(Section::from_id("Overview").is_err());
    }

    #[test]
    fn test_next_prev_wrap() {
        assert_eq!(Section::Overview.next(), Section::Regional);
        assert_eq!(Section::Predictions.next(), Section::Overview);
        assert_eq!(Section::Overview.prev(), Section::Predictions);
        for section in Section::all() {
            assert_eq!(section.next().prev(), *section);
        }
    }

    #[test]
    fn test_default_is_overview() {
        assert_eq!(Section::default(), Section::Overview);
    }

    #[test]
    fn test_serde_uses_ids() {
        let json = serde_json::to_string(&Section::Genres).unwrap();
        assert_eq!(json, "\"genres\"");
        let parsed: Section = serde_json::from_str("\"artists\"").unwrap();
        assert_eq!(parsed, Section::Artists);
    }
}
