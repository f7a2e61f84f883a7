//! Data shapes consumed by the dashboard widgets
//!
//! This module defines the slices of the metric dataset:
//! - `SummaryStat`: A headline number shown on a stat card
//! - `TimeSeries` / `TimeSeriesPoint`: Chronological multi-measure series
//! - `CategoryEntry`: A named measure in a category breakdown
//! - `ShareEntry`: A named percentage of a whole
//! - `RegionEntry`: Regional popularity with display strings
//! - `ColorTag` and `Icon`: Presentation references

use serde::{Deserialize, Serialize};

/// Accent colors available to stat cards and region rows
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ColorTag {
    Cyan,
    Violet,
    Neon,
    Purple,
}

impl ColorTag {
    /// Get all color tags for iteration
    pub fn all() -> &'static [ColorTag] {
        &[
            ColorTag::Cyan,
            ColorTag::Violet,
            ColorTag::Neon,
            ColorTag::Purple,
        ]
    }

    /// Hex value of the accent color
    pub fn hex(self) -> &'static str {
        match self {
            ColorTag::Cyan => "#00D4FF",
            ColorTag::Violet => "#8B5CF6",
            ColorTag::Neon => "#00FF88",
            ColorTag::Purple => "#A855F7",
        }
    }
}

impl std::fmt::Display for ColorTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColorTag::Cyan => write!(f, "cyan"),
            ColorTag::Violet => write!(f, "violet"),
            ColorTag::Neon => write!(f, "neon"),
            ColorTag::Purple => write!(f, "purple"),
        }
    }
}

/// Icon references used across the dashboard
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    BarChart,
    Globe,
    Music,
    TrendingUp,
    Users,
    Zap,
    MapPin,
    Search,
    Bell,
    Settings,
    User,
    ChevronLeft,
    ChevronRight,
}

impl Icon {
    /// Stable kebab-case name, used as a node attribute
    pub fn name(self) -> &'static str {
        match self {
            Icon::BarChart => "bar-chart",
            Icon::Globe => "globe",
            Icon::Music => "music",
            Icon::TrendingUp => "trending-up",
            Icon::Users => "users",
            Icon::Zap => "zap",
            Icon::MapPin => "map-pin",
            Icon::Search => "search",
            Icon::Bell => "bell",
            Icon::Settings => "settings",
            Icon::User => "user",
            Icon::ChevronLeft => "chevron-left",
            Icon::ChevronRight => "chevron-right",
        }
    }

    /// Single glyph for terminal and DOM rendering
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::BarChart => "📊",
            Icon::Globe => "🌐",
            Icon::Music => "🎵",
            Icon::TrendingUp => "📈",
            Icon::Users => "👥",
            Icon::Zap => "⚡",
            Icon::MapPin => "📍",
            Icon::Search => "🔍",
            Icon::Bell => "🔔",
            Icon::Settings => "⚙",
            Icon::User => "👤",
            Icon::ChevronLeft => "‹",
            Icon::ChevronRight => "›",
        }
    }
}

impl std::fmt::Display for Icon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Headline statistic shown on a stat card
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SummaryStat {
    pub label: String,
    /// Pre-formatted value ("2.4B", "180M")
    pub value: String,
    pub icon: Icon,
    pub color: ColorTag,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trend: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
}

impl SummaryStat {
    /// Create a stat without trend or subtitle
    pub fn new(
        label: impl Into<String>,
        value: impl Into<String>,
        icon: Icon,
        color: ColorTag,
    ) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            icon,
            color,
            trend: None,
            subtitle: None,
        }
    }

    /// Builder method: set trend delta
    pub fn trend(mut self, trend: impl Into<String>) -> Self {
        self.trend = Some(trend.into());
        self
    }

    /// Builder method: set subtitle
    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }
}

/// One named measure of a time-series point
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Measure {
    pub name: String,
    pub value: f64,
}

/// A single period of a time series
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimeSeriesPoint {
    /// Period label ("Jan", "Feb", ...)
    pub period: String,
    pub measures: Vec<Measure>,
}

impl TimeSeriesPoint {
    pub fn new(period: impl Into<String>) -> Self {
        Self {
            period: period.into(),
            measures: Vec::new(),
        }
    }

    /// Builder method: add a named measure
    pub fn measure(mut self, name: impl Into<String>, value: f64) -> Self {
        self.measures.push(Measure {
            name: name.into(),
            value,
        });
        self
    }

    /// Look up a measure by name
    pub fn get(&self, name: &str) -> Option<f64> {
        self.measures
            .iter()
            .find(|m| m.name == name)
            .map(|m| m.value)
    }
}

/// Describes one plotted series: which measure, how it is labeled and colored
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SeriesSpec {
    /// Measure name looked up in each point
    pub key: String,
    /// Legend label ("Streams (M)")
    pub label: String,
    pub color: ColorTag,
}

/// Ordered multi-measure time series
///
/// Points are kept in caller order; the series list fixes legend order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimeSeries {
    pub series: Vec<SeriesSpec>,
    pub points: Vec<TimeSeriesPoint>,
}

impl TimeSeries {
    /// Values of one measure across all points, in point order
    ///
    /// Points missing the measure are skipped.
    pub fn values(&self, key: &str) -> Vec<(String, f64)> {
        self.points
            .iter()
            .filter_map(|p| p.get(key).map(|v| (p.period.clone(), v)))
            .collect()
    }

    /// Largest value of any plotted measure
    pub fn max_value(&self) -> f64 {
        self.series
            .iter()
            .flat_map(|s| self.values(&s.key))
            .map(|(_, v)| v)
            .fold(0.0, f64::max)
    }
}

/// A named measure in a category breakdown
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryEntry {
    pub name: String,
    pub value: f64,
    /// Hex display color
    pub color: String,
}

impl CategoryEntry {
    pub fn new(name: impl Into<String>, value: f64, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value,
            color: color.into(),
        }
    }
}

/// A named percentage of a whole
///
/// Percentages are not validated against a total.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShareEntry {
    pub name: String,
    /// Percentage in 0..=100
    pub percent: f64,
    /// Hex display color
    pub color: String,
}

impl ShareEntry {
    pub fn new(name: impl Into<String>, percent: f64, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            percent,
            color: color.into(),
        }
    }
}

/// Regional popularity row
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RegionEntry {
    pub name: String,
    /// Popularity score in 0..=100
    pub popularity: u8,
    /// Display string ("45M")
    pub listeners: String,
    /// Display string ("+12%")
    pub growth: String,
    pub color: ColorTag,
}

impl RegionEntry {
    pub fn new(
        name: impl Into<String>,
        popularity: u8,
        listeners: impl Into<String>,
        growth: impl Into<String>,
        color: ColorTag,
    ) -> Self {
        Self {
            name: name.into(),
            popularity,
            listeners: listeners.into(),
            growth: growth.into(),
            color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_series_values_skip_missing_measures() {
        let series = TimeSeries {
            series: vec![SeriesSpec {
                key: "streams".to_string(),
                label: "Streams".to_string(),
                color: ColorTag::Cyan,
            }],
            points: vec![
                TimeSeriesPoint::new("Jan").measure("streams", 10.0),
                TimeSeriesPoint::new("Feb").measure("listeners", 4.0),
                TimeSeriesPoint::new("Mar").measure("streams", 30.0),
            ],
        };

        let values = series.values("streams");
        assert_eq!(
            values,
            vec![("Jan".to_string(), 10.0), ("Mar".to_string(), 30.0)]
        );
        assert_eq!(series.max_value(), 30.0);
    }

    #[test]
    fn test_summary_stat_builder() {
        let stat = SummaryStat::new("Global Reach", "195", Icon::Globe, ColorTag::Purple)
            .trend("+2")
            .subtitle("countries");
        assert_eq!(stat.trend.as_deref(), Some("+2"));
        assert_eq!(stat.subtitle.as_deref(), Some("countries"));
    }

    #[test]
    fn test_color_tag_display_matches_serde() {
        for tag in ColorTag::all() {
            let json = serde_json::to_string(tag).unwrap();
            assert_eq!(json, format!("\"{}\"", tag));
        }
    }

    #[test]
    fn test_icon_name_matches_serde() {
        let json = serde_json::to_string(&Icon::TrendingUp).unwrap();
        assert_eq!(json, "\"trending-up\"");
        assert_eq!(Icon::TrendingUp.name(), "trending-up");
    }
}
