#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Result types produced by the pattern analyzer.
//!
//! Everything here is a plain derived output: computed eagerly from the
//! input record set, immutable afterwards, and serialized camelCase for
//! the dashboard. The [`AnalysisReport`] bundle is the entire contract
//! downstream consumers rely on.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub use crime_patterns_incident_models::TimePeriod;

/// Count of incidents of a single crime type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeCount {
    /// Normalized crime type (Title Case).
    pub crime_type: String,
    /// Number of incidents.
    pub count: u64,
}

/// Count of incidents at a single location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationCount {
    /// Normalized location name (Title Case).
    pub location: String,
    /// Number of incidents.
    pub count: u64,
}

/// Count of incidents in a single hour of the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HourCount {
    /// Hour of day (0-23).
    pub hour: u8,
    /// Number of incidents.
    pub count: u64,
}

/// Count of incidents in one six-hour time period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodCount {
    /// The time-of-day bucket.
    pub period: TimePeriod,
    /// Number of incidents.
    pub count: u64,
}

/// Time-of-day breakdown of the record set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimePatterns {
    /// Counts for each hour present in the data, ascending by hour.
    pub hourly: Vec<HourCount>,
    /// Counts for all four periods (zero-filled), descending by count.
    pub periods: Vec<PeriodCount>,
}

/// A run of consecutive distinct dates with above-average activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateCluster {
    /// First distinct date in the window.
    pub start_date: NaiveDate,
    /// Last distinct date in the window.
    pub end_date: NaiveDate,
    /// Total incidents across the window.
    pub total_crimes: u64,
    /// Window average per distinct date, rounded to 2 decimals.
    pub avg_daily_crimes: f64,
}

/// The comprehensive analysis bundle consumed by presenters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    /// Most frequent crime types, descending by count.
    pub frequent_crimes: Vec<TypeCount>,
    /// Highest-activity locations, descending by count.
    pub hotspots: Vec<LocationCount>,
    /// Hourly and period time-of-day breakdowns.
    pub time_patterns: TimePatterns,
    /// High-activity date windows, in window-start order.
    pub clusters: Vec<DateCluster>,
    /// Total incident count.
    pub total_crimes: u64,
    /// Number of distinct crime types.
    pub unique_types: u64,
    /// Number of distinct locations.
    pub unique_locations: u64,
}

/// Inclusive date range covered by a record set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    /// Earliest date present.
    pub start: NaiveDate,
    /// Latest date present.
    pub end: NaiveDate,
}

/// Basic summary of a loaded record set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataSummary {
    /// Number of records loaded.
    pub total_records: u64,
    /// Inclusive date range, or `None` for an empty set.
    pub date_range: Option<DateRange>,
    /// Number of distinct crime types.
    pub unique_types: u64,
    /// Number of distinct locations.
    pub unique_locations: u64,
}
