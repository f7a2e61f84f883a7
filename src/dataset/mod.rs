//! Trendwave Metric Dataset
//!
//! The static bundle of figures the dashboard renders:
//!
//! - **types**: Data shapes (SummaryStat, TimeSeries, CategoryEntry, ShareEntry, RegionEntry)
//! - **mock**: The built-in figures
//! - **export**: JSON/CSV export of dataset slices
//!
//! A dataset is built once and only read afterwards; widgets receive
//! borrowed slices of it.

pub mod export;
pub mod mock;
pub mod types;

use serde::Serialize;

pub use export::{export_slice, ExportError, ExportFormat, ExportResult};
pub use types::{
    CategoryEntry, ColorTag, Icon, Measure, RegionEntry, SeriesSpec, ShareEntry, SummaryStat,
    TimeSeries, TimeSeriesPoint,
};

/// Every figure shown on the overview section
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MetricDataset {
    pub stats: Vec<SummaryStat>,
    pub streaming_growth: TimeSeries,
    pub top_genres: Vec<CategoryEntry>,
    pub platform_share: Vec<ShareEntry>,
    pub regions: Vec<RegionEntry>,
}

impl Default for MetricDataset {
    fn default() -> Self {
        Self::mock()
    }
}

/// Named part of the dataset, used for export
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetSlice {
    Stats,
    Growth,
    Genres,
    Platforms,
    Regions,
    All,
}

impl DatasetSlice {
    /// Get all slices for iteration
    pub fn all() -> &'static [DatasetSlice] {
        &[
            DatasetSlice::Stats,
            DatasetSlice::Growth,
            DatasetSlice::Genres,
            DatasetSlice::Platforms,
            DatasetSlice::Regions,
            DatasetSlice::All,
        ]
    }

    pub fn name(self) -> &'static str {
        match self {
            DatasetSlice::Stats => "stats",
            DatasetSlice::Growth => "growth",
            DatasetSlice::Genres => "genres",
            DatasetSlice::Platforms => "platforms",
            DatasetSlice::Regions => "regions",
            DatasetSlice::All => "all",
        }
    }
}

impl std::fmt::Display for DatasetSlice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for DatasetSlice {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DatasetSlice::all()
            .iter()
            .copied()
            .find(|slice| slice.name() == s)
            .ok_or_else(|| ExportError::UnknownSlice(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slice_from_str() {
        assert_eq!("genres".parse::<DatasetSlice>().unwrap(), DatasetSlice::Genres);
        assert!(matches!(
            "albums".parse::<DatasetSlice>(),
            Err(ExportError::UnknownSlice(_))
        ));
    }

    #[test]
    fn test_default_is_mock() {
        assert_eq!(MetricDataset::default(), MetricDataset::mock());
    }
}
