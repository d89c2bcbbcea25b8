#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Turns an [`AnalysisReport`] into the chart payloads the dashboard
//! renders, and exports the whole bundle as a JSON file.

use std::path::Path;

use crime_patterns_analytics_models::{
    AnalysisReport, DateCluster, LocationCount, TimePatterns, TypeCount,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Color palette applied to ranked bar/pie charts, in rank order.
pub const CHART_COLORS: [&str; 5] = ["#3B82F6", "#10B981", "#F59E0B", "#EF4444", "#8B5CF6"];

/// Line color for the hourly time-pattern chart.
pub const TIME_PATTERN_COLOR: &str = "#3B82F6";

/// Bar color for cluster charts.
pub const CLUSTER_COLOR: &str = "#EF4444";

/// Errors that can occur while exporting chart data.
#[derive(Debug, Error)]
pub enum ChartError {
    /// I/O failure writing the output file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Chart bundle could not be serialized.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Rendering style of a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    /// Vertical bar chart.
    Bar,
    /// Pie chart.
    Pie,
    /// Line chart.
    Line,
}

/// Label/value series for one chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartData {
    /// X-axis (or slice) labels.
    pub labels: Vec<String>,
    /// Value per label.
    pub values: Vec<u64>,
    /// Per-value colors, when each datum gets its own.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colors: Option<Vec<String>>,
    /// Single series color, for line charts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// One renderable chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chart {
    /// Rendering style.
    pub kind: ChartKind,
    /// Chart title.
    pub title: String,
    /// Series data.
    pub data: ChartData,
}

/// Headline figures shown alongside the charts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryStats {
    /// Total number of analyzed records.
    pub total_crimes: u64,
    /// Number of distinct crime types.
    pub unique_types: u64,
    /// Number of distinct locations.
    pub unique_locations: u64,
    /// Top-ranked crime type, or `"N/A"` when there is no data.
    pub most_common_crime: String,
    /// Top-ranked location, or `"N/A"` when there is no data.
    pub top_hotspot: String,
}

/// Bar chart of the most frequent crime types.
#[must_use]
pub fn crime_type_chart(frequent_crimes: &[TypeCount]) -> Chart {
    Chart {
        kind: ChartKind::Bar,
        title: "Most Frequent Crime Types".to_string(),
        data: ChartData {
            labels: frequent_crimes.iter().map(|x| x.crime_type.clone()).collect(),
            values: frequent_crimes.iter().map(|x| x.count).collect(),
            colors: Some(palette(frequent_crimes.len())),
            color: None,
        },
    }
}

/// Pie chart of the highest-volume locations.
#[must_use]
pub fn hotspot_chart(hotspots: &[LocationCount]) -> Chart {
    Chart {
        kind: ChartKind::Pie,
        title: "Crime Hotspots by Location".to_string(),
        data: ChartData {
            labels: hotspots.iter().map(|x| x.location.clone()).collect(),
            values: hotspots.iter().map(|x| x.count).collect(),
            colors: Some(palette(hotspots.len())),
            color: None,
        },
    }
}

/// Line chart of incident counts across the 24 hours of the day.
#[must_use]
pub fn time_pattern_chart(time_patterns: &TimePatterns) -> Chart {
    Chart {
        kind: ChartKind::Line,
        title: "Crime Patterns by Hour".to_string(),
        data: ChartData {
            labels: time_patterns
                .hourly
                .iter()
                .map(|x| format!("{:02}:00", x.hour))
                .collect(),
            values: time_patterns.hourly.iter().map(|x| x.count).collect(),
            colors: None,
            color: Some(TIME_PATTERN_COLOR.to_string()),
        },
    }
}

/// Bar chart of detected high-activity windows.
#[must_use]
pub fn cluster_chart(clusters: &[DateCluster]) -> Chart {
    Chart {
        kind: ChartKind::Bar,
        title: "Crime Clusters (7-day windows)".to_string(),
        data: ChartData {
            labels: clusters
                .iter()
                .map(|x| format!("{} to {}", x.start_date, x.end_date))
                .collect(),
            values: clusters.iter().map(|x| x.total_crimes).collect(),
            colors: Some(vec![CLUSTER_COLOR.to_string(); clusters.len()]),
            color: None,
        },
    }
}

/// Headline stats for the report, falling back to `"N/A"` when the
/// ranked lists are empty.
#[must_use]
pub fn summary_stats(report: &AnalysisReport) -> SummaryStats {
    SummaryStats {
        total_crimes: report.total_crimes,
        unique_types: report.unique_types,
        unique_locations: report.unique_locations,
        most_common_crime: report
            .frequent_crimes
            .first()
            .map_or_else(|| "N/A".to_string(), |x| x.crime_type.clone()),
        top_hotspot: report
            .hotspots
            .first()
            .map_or_else(|| "N/A".to_string(), |x| x.location.clone()),
    }
}

fn palette(len: usize) -> Vec<String> {
    CHART_COLORS.iter().cycle().take(len).map(ToString::to_string).collect()
}

/// Every chart the dashboard shows, plus headline stats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartBundle {
    /// Frequent-crime-types bar chart.
    pub crime_types: Chart,
    /// Hotspots pie chart.
    pub hotspots: Chart,
    /// Hourly line chart.
    pub time_patterns: Chart,
    /// Cluster bar chart.
    pub clusters: Chart,
    /// Headline figures.
    pub summary: SummaryStats,
}

impl ChartBundle {
    /// Builds every chart from one analysis report.
    #[must_use]
    pub fn from_report(report: &AnalysisReport) -> Self {
        Self {
            crime_types: crime_type_chart(&report.frequent_crimes),
            hotspots: hotspot_chart(&report.hotspots),
            time_patterns: time_pattern_chart(&report.time_patterns),
            clusters: cluster_chart(&report.clusters),
            summary: summary_stats(report),
        }
    }

    /// Serializes the bundle as pretty JSON and writes it to `path`,
    /// staging through a temp file renamed into place.
    ///
    /// # Errors
    ///
    /// Returns [`ChartError`] if serialization or any file operation fails.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), ChartError> {
        let path = path.as_ref();

        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, serde_json::to_string_pretty(self)?)?;
        std::fs::rename(&tmp, path)?;

        log::info!("Chart data written to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crime_patterns_analytics_models::{HourCount, PeriodCount, TimePeriod};
    use serde_json::json;

    fn sample_report() -> AnalysisReport {
        AnalysisReport {
            frequent_crimes: vec![
                TypeCount {
                    crime_type: "Theft".to_string(),
                    count: 12,
                },
                TypeCount {
                    crime_type: "Assault".to_string(),
                    count: 7,
                },
            ],
            hotspots: vec![LocationCount {
                location: "Downtown".to_string(),
                count: 15,
            }],
            time_patterns: TimePatterns {
                hourly: vec![
                    HourCount { hour: 9, count: 4 },
                    HourCount { hour: 22, count: 11 },
                ],
                periods: vec![PeriodCount {
                    period: TimePeriod::Evening,
                    count: 11,
                }],
            },
            clusters: vec![DateCluster {
                start_date: "2024-01-01".parse().unwrap(),
                end_date: "2024-01-07".parse().unwrap(),
                total_crimes: 19,
                avg_daily_crimes: 2.71,
            }],
            total_crimes: 19,
            unique_types: 2,
            unique_locations: 1,
        }
    }

    #[test]
    fn crime_type_chart_applies_palette_in_rank_order() {
        let chart = crime_type_chart(&sample_report().frequent_crimes);

        assert_eq!(chart.kind, ChartKind::Bar);
        assert_eq!(chart.title, "Most Frequent Crime Types");
        assert_eq!(chart.data.labels, vec!["Theft", "Assault"]);
        assert_eq!(chart.data.values, vec![12, 7]);
        assert_eq!(chart.data.colors, Some(vec!["#3B82F6".to_string(), "#10B981".to_string()]));
        assert_eq!(chart.data.color, None);
    }

    #[test]
    fn palette_wraps_past_five_entries() {
        let crimes: Vec<TypeCount> = (0..7)
            .map(|i| TypeCount {
                crime_type: format!("Type {i}"),
                count: 10 - i,
            })
            .collect();
        let chart = crime_type_chart(&crimes);

        let colors = chart.data.colors.unwrap();
        assert_eq!(colors.len(), 7);
        assert_eq!(colors[5], "#3B82F6");
        assert_eq!(colors[6], "#10B981");
    }

    #[test]
    fn time_pattern_chart_formats_hour_labels() {
        let chart = time_pattern_chart(&sample_report().time_patterns);

        assert_eq!(chart.kind, ChartKind::Line);
        assert_eq!(chart.data.labels, vec!["09:00", "22:00"]);
        assert_eq!(chart.data.values, vec![4, 11]);
        assert_eq!(chart.data.colors, None);
        assert_eq!(chart.data.color, Some("#3B82F6".to_string()));
    }

    #[test]
    fn cluster_chart_labels_span_and_repeats_color() {
        let chart = cluster_chart(&sample_report().clusters);

        assert_eq!(chart.title, "Crime Clusters (7-day windows)");
        assert_eq!(chart.data.labels, vec!["2024-01-01 to 2024-01-07"]);
        assert_eq!(chart.data.values, vec![19]);
        assert_eq!(chart.data.colors, Some(vec!["#EF4444".to_string()]));
    }

    #[test]
    fn summary_stats_picks_top_entries() {
        let stats = summary_stats(&sample_report());

        assert_eq!(stats.total_crimes, 19);
        assert_eq!(stats.most_common_crime, "Theft");
        assert_eq!(stats.top_hotspot, "Downtown");
    }

    #[test]
    fn summary_stats_falls_back_to_na() {
        let report = AnalysisReport {
            frequent_crimes: vec![],
            hotspots: vec![],
            time_patterns: TimePatterns {
                hourly: vec![],
                periods: vec![],
            },
            clusters: vec![],
            total_crimes: 0,
            unique_types: 0,
            unique_locations: 0,
        };
        let stats = summary_stats(&report);

        assert_eq!(stats.most_common_crime, "N/A");
        assert_eq!(stats.top_hotspot, "N/A");
    }

    #[test]
    fn chart_serializes_camel_case_and_omits_absent_colors() {
        let chart = time_pattern_chart(&sample_report().time_patterns);
        let value = serde_json::to_value(&chart).unwrap();

        assert_eq!(
            value,
            json!({
                "kind": "line",
                "title": "Crime Patterns by Hour",
                "data": {
                    "labels": ["09:00", "22:00"],
                    "values": [4, 11],
                    "color": "#3B82F6",
                },
            })
        );
    }

    #[test]
    fn bundle_from_report_wires_every_section() {
        let report = sample_report();
        let bundle = ChartBundle::from_report(&report);

        assert_eq!(bundle.crime_types.kind, ChartKind::Bar);
        assert_eq!(bundle.hotspots.kind, ChartKind::Pie);
        assert_eq!(bundle.time_patterns.kind, ChartKind::Line);
        assert_eq!(bundle.clusters.kind, ChartKind::Bar);
        assert_eq!(bundle.summary.total_crimes, report.total_crimes);

        let value = serde_json::to_value(&bundle).unwrap();
        assert!(value.get("crimeTypes").is_some());
        assert!(value.get("timePatterns").is_some());
        assert_eq!(value["summary"]["mostCommonCrime"], json!("Theft"));
    }

    #[test]
    fn bundle_round_trips_through_json() {
        let bundle = ChartBundle::from_report(&sample_report());
        let json = serde_json::to_string(&bundle).unwrap();
        let back: ChartBundle = serde_json::from_str(&json).unwrap();
        assert_eq!(back, bundle);
    }
}
