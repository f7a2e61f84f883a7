//! Built-in mock dataset
//!
//! The dashboard ships with fixed figures; nothing here is fetched or computed.

use super::types::*;
use super::MetricDataset;

impl MetricDataset {
    /// The fixed music-streaming figures the dashboard renders
    pub fn mock() -> Self {
        Self {
            stats: mock_stats(),
            streaming_growth: mock_streaming_growth(),
            top_genres: mock_top_genres(),
            platform_share: mock_platform_share(),
            regions: mock_regions(),
        }
    }
}

fn mock_stats() -> Vec<SummaryStat> {
    vec![
        SummaryStat::new("Total Streams", "2.4B", Icon::TrendingUp, ColorTag::Cyan).trend("+12.5%"),
        SummaryStat::new("Active Listeners", "180M", Icon::Users, ColorTag::Violet).trend("+8.2%"),
        SummaryStat::new("Trending Artists", "15.2K", Icon::Music, ColorTag::Neon).trend("+15.7%"),
        SummaryStat::new("Global Reach", "195", Icon::Globe, ColorTag::Purple)
            .trend("+2")
            .subtitle("countries"),
    ]
}

fn mock_streaming_growth() -> TimeSeries {
    // (month, streams, listeners), millions
    let rows = [
        ("Jan", 1200.0, 800.0),
        ("Feb", 1350.0, 920.0),
        ("Mar", 1800.0, 1100.0),
        ("Apr", 2200.0, 1300.0),
        ("May", 2600.0, 1500.0),
        ("Jun", 2400.0, 1400.0),
    ];

    TimeSeries {
        series: vec![
            SeriesSpec {
                key: "streams".to_string(),
                label: "Streams (M)".to_string(),
                color: ColorTag::Cyan,
            },
            SeriesSpec {
                key: "listeners".to_string(),
                label: "Listeners (M)".to_string(),
                color: ColorTag::Violet,
            },
        ],
        points: rows
            .iter()
            .map(|(month, streams, listeners)| {
                TimeSeriesPoint::new(*month)
                    .measure("streams", *streams)
                    .measure("listeners", *listeners)
            })
            .collect(),
    }
}

fn mock_top_genres() -> Vec<CategoryEntry> {
    vec![
        CategoryEntry::new("Bollywood", 850.0, "#00D4FF"),
        CategoryEntry::new("Hip Hop", 720.0, "#8B5CF6"),
        CategoryEntry::new("Pop", 680.0, "#00FF88"),
        CategoryEntry::new("Regional", 550.0, "#A855F7"),
        CategoryEntry::new("Classical", 420.0, "#F59E0B"),
        CategoryEntry::new("Electronic", 380.0, "#EF4444"),
        CategoryEntry::new("Rock", 320.0, "#10B981"),
        CategoryEntry::new("Jazz", 280.0, "#F97316"),
    ]
}

fn mock_platform_share() -> Vec<ShareEntry> {
    vec![
        ShareEntry::new("JioSaavn", 35.0, "#00D4FF"),
        ShareEntry::new("Spotify", 28.0, "#1DB954"),
        ShareEntry::new("YouTube Music", 22.0, "#FF0000"),
        ShareEntry::new("Apple Music", 15.0, "#FC3C44"),
    ]
}

fn mock_regions() -> Vec<RegionEntry> {
    vec![
        RegionEntry::new("North America", 85, "45M", "+12%", ColorTag::Cyan),
        RegionEntry::new("Europe", 78, "38M", "+8%", ColorTag::Violet),
        RegionEntry::new("Asia Pacific", 92, "67M", "+18%", ColorTag::Neon),
        RegionEntry::new("South America", 71, "22M", "+15%", ColorTag::Purple),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_shapes() {
        let data = MetricDataset::mock();
        assert_eq!(data.stats.len(), 4);
        assert_eq!(data.streaming_growth.points.len(), 6);
        assert_eq!(data.streaming_growth.series.len(), 2);
        assert_eq!(data.top_genres.len(), 8);
        assert_eq!(data.platform_share.len(), 4);
        assert_eq!(data.regions.len(), 4);
    }

    #[test]
    fn test_mock_order_is_preserved() {
        let data = MetricDataset::mock();
        let months: Vec<_> = data
            .streaming_growth
            .points
            .iter()
            .map(|p| p.period.as_str())
            .collect();
        assert_eq!(months, ["Jan", "Feb", "Mar", "Apr", "May", "Jun"]);
        assert_eq!(data.top_genres[0].name, "Bollywood");
        assert_eq!(data.top_genres[7].name, "Jazz");
    }

    #[test]
    fn test_only_global_reach_has_subtitle() {
        let data = MetricDataset::mock();
        let with_subtitle: Vec<_> = data
            .stats
            .iter()
            .filter(|s| s.subtitle.is_some())
            .map(|s| s.label.as_str())
            .collect();
        assert_eq!(with_subtitle, ["Global Reach"]);
    }
}
