//! Dataset export
//!
//! Renders a dataset slice as pretty JSON or CSV. JSON carries a
//! `generated_at` timestamp; CSV is one flat row per entry.

use chrono::Utc;
use serde::Serialize;
use thiserror::Error;

use super::{DatasetSlice, MetricDataset};

/// Errors that can occur while exporting
#[derive(Error, Debug)]
pub enum ExportError {
    /// JSON serialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// CSV writing failed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Output could not be flushed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Slice name not recognized
    #[error("Unknown dataset slice: {0}")]
    UnknownSlice(String),

    /// CSV cannot represent the combined dataset
    #[error("Format {format} does not support slice {slice}")]
    Unsupported { format: String, slice: String },
}

/// Result type alias for export operations
pub type ExportResult<T> = Result<T, ExportError>;

/// Output format for exported data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Json => write!(f, "json"),
            ExportFormat::Csv => write!(f, "csv"),
        }
    }
}

#[derive(Serialize)]
struct JsonEnvelope<'a, T: Serialize> {
    slice: &'a str,
    generated_at: String,
    data: T,
}

#[derive(Serialize)]
struct StatRow<'a> {
    label: &'a str,
    value: &'a str,
    icon: &'a str,
    color: String,
    trend: &'a str,
    subtitle: &'a str,
}

#[derive(Serialize)]
struct GrowthRow<'a> {
    period: &'a str,
    measure: &'a str,
    value: f64,
}

#[derive(Serialize)]
struct NamedValueRow<'a> {
    name: &'a str,
    value: f64,
    color: &'a str,
}

#[derive(Serialize)]
struct RegionRow<'a> {
    name: &'a str,
    popularity: u8,
    listeners: &'a str,
    growth: &'a str,
    color: String,
}

/// Export one slice of the dataset in the given format
pub fn export_slice(
    data: &MetricDataset,
    slice: DatasetSlice,
    format: ExportFormat,
) -> ExportResult<String> {
    tracing::debug!(%slice, %format, "Exporting dataset slice");
    match format {
        ExportFormat::Json => export_json(data, slice),
        ExportFormat::Csv => export_csv(data, slice),
    }
}

fn export_json(data: &MetricDataset, slice: DatasetSlice) -> ExportResult<String> {
    let generated_at = Utc::now().to_rfc3339();
    let value = match slice {
        DatasetSlice::Stats => serde_json::to_value(&data.stats)?,
        DatasetSlice::Growth => serde_json::to_value(&data.streaming_growth)?,
        DatasetSlice::Genres => serde_json::to_value(&data.top_genres)?,
        DatasetSlice::Platforms => serde_json::to_value(&data.platform_share)?,
        DatasetSlice::Regions => serde_json::to_value(&data.regions)?,
        DatasetSlice::All => serde_json::to_value(data)?,
    };

    let envelope = JsonEnvelope {
        slice: slice.name(),
        generated_at,
        data: value,
    };
    Ok(serde_json::to_string_pretty(&envelope)?)
}

fn export_csv(data: &MetricDataset, slice: DatasetSlice) -> ExportResult<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    match slice {
        DatasetSlice::Stats => {
            for stat in &data.stats {
                writer.serialize(StatRow {
                    label: &stat.label,
                    value: &stat.value,
                    icon: stat.icon.name(),
                    color: stat.color.to_string(),
                    trend: stat.trend.as_deref().unwrap_or(""),
                    subtitle: stat.subtitle.as_deref().unwrap_or(""),
                })?;
            }
        }
        DatasetSlice::Growth => {
            for point in &data.streaming_growth.points {
                for measure in &point.measures {
                    writer.serialize(GrowthRow {
                        period: &point.period,
                        measure: &measure.name,
                        value: measure.value,
                    })?;
                }
            }
        }
        DatasetSlice::Genres => {
            for entry in &data.top_genres {
                writer.serialize(NamedValueRow {
                    name: &entry.name,
                    value: entry.value,
                    color: &entry.color,
                })?;
            }
        }
        DatasetSlice::Platforms => {
            for entry in &data.platform_share {
                writer.serialize(NamedValueRow {
                    name: &entry.name,
                    value: entry.percent,
                    color: &entry.color,
                })?;
            }
        }
        DatasetSlice::Regions => {
            for region in &data.regions {
                writer.serialize(RegionRow {
                    name: &region.name,
                    popularity: region.popularity,
                    listeners: &region.listeners,
                    growth: &region.growth,
                    color: region.color.to_string(),
                })?;
            }
        }
        DatasetSlice::All => {
            return Err(ExportError::Unsupported {
                format: ExportFormat::Csv.to_string(),
                slice: slice.to_string(),
            })
        }
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::Io(e.into_error()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
