#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! In-memory pattern analysis over a set of incident records.
//!
//! [`PatternAnalyzer`] borrows a record slice at construction, builds its
//! frequency tables in a single pass, and answers every query from those
//! tables and the slice alone. Queries are pure and idempotent; a shared
//! `&PatternAnalyzer` is safe to use from multiple threads.
//!
//! Construction never fails. The typed [`IncidentRecord`] guarantees the
//! field invariants the tables rely on, and an empty slice is a valid
//! input that yields zero counts and empty result lists.

mod cluster;
mod search;
mod time;

use std::collections::BTreeMap;

use crime_patterns_analytics_models::{AnalysisReport, LocationCount, TypeCount};
use crime_patterns_incident_models::IncidentRecord;

/// Default number of entries returned by the ranking queries.
pub const DEFAULT_TOP_N: usize = 5;

/// Default sliding-window width, in distinct dates, for cluster detection.
pub const DEFAULT_CLUSTER_WINDOW: usize = 7;

/// Frequency and temporal pattern analysis over a borrowed record set.
#[derive(Debug, Clone)]
pub struct PatternAnalyzer<'a> {
    records: &'a [IncidentRecord],
    type_counts: BTreeMap<&'a str, u64>,
    location_counts: BTreeMap<&'a str, u64>,
    hour_counts: BTreeMap<u8, u64>,
}

impl<'a> PatternAnalyzer<'a> {
    /// Builds the analyzer, populating the type, location, and hour
    /// frequency tables in one pass over `records`.
    #[must_use]
    pub fn new(records: &'a [IncidentRecord]) -> Self {
        let mut type_counts: BTreeMap<&'a str, u64> = BTreeMap::new();
        let mut location_counts: BTreeMap<&'a str, u64> = BTreeMap::new();
        let mut hour_counts: BTreeMap<u8, u64> = BTreeMap::new();

        for record in records {
            *type_counts.entry(record.incident_type.as_str()).or_default() += 1;
            *location_counts.entry(record.location.as_str()).or_default() += 1;
            *hour_counts.entry(record.hour()).or_default() += 1;
        }

        Self {
            records,
            type_counts,
            location_counts,
            hour_counts,
        }
    }

    /// The record set this analyzer was built over, in load order.
    #[must_use]
    pub const fn records(&self) -> &'a [IncidentRecord] {
        self.records
    }

    /// Total number of incidents.
    #[must_use]
    pub const fn total_crimes(&self) -> u64 {
        self.records.len() as u64
    }

    /// Number of distinct crime types.
    #[must_use]
    pub fn unique_types(&self) -> u64 {
        self.type_counts.len() as u64
    }

    /// Number of distinct locations.
    #[must_use]
    pub fn unique_locations(&self) -> u64 {
        self.location_counts.len() as u64
    }

    /// Per-type incident counts, keyed alphabetically.
    #[must_use]
    pub const fn type_counts(&self) -> &BTreeMap<&'a str, u64> {
        &self.type_counts
    }

    /// Per-location incident counts, keyed alphabetically.
    #[must_use]
    pub const fn location_counts(&self) -> &BTreeMap<&'a str, u64> {
        &self.location_counts
    }

    /// Per-hour incident counts, keyed by hour of day.
    #[must_use]
    pub const fn hour_counts(&self) -> &BTreeMap<u8, u64> {
        &self.hour_counts
    }

    /// The most frequent crime types, descending by count.
    ///
    /// Returns at most `top_n` entries, fewer if the data has fewer
    /// distinct types. Ties order alphabetically ascending.
    #[must_use]
    pub fn frequent_types(&self, top_n: usize) -> Vec<TypeCount> {
        rank(&self.type_counts, top_n)
            .into_iter()
            .map(|(crime_type, count)| TypeCount {
                crime_type: crime_type.to_string(),
                count,
            })
            .collect()
    }

    /// The highest-activity locations, descending by count.
    ///
    /// Same ranking contract as [`Self::frequent_types`].
    #[must_use]
    pub fn hotspots(&self, top_n: usize) -> Vec<LocationCount> {
        rank(&self.location_counts, top_n)
            .into_iter()
            .map(|(location, count)| LocationCount {
                location: location.to_string(),
                count,
            })
            .collect()
    }

    /// Runs every analysis with the default parameters and bundles the
    /// results into a single [`AnalysisReport`].
    #[must_use]
    pub fn comprehensive_report(&self) -> AnalysisReport {
        self.report_with(DEFAULT_TOP_N, DEFAULT_CLUSTER_WINDOW)
    }

    /// Like [`Self::comprehensive_report`], but with explicit ranking
    /// depth and cluster window.
    #[must_use]
    pub fn report_with(&self, top_n: usize, window_size: usize) -> AnalysisReport {
        AnalysisReport {
            frequent_crimes: self.frequent_types(top_n),
            hotspots: self.hotspots(top_n),
            time_patterns: self.time_patterns(),
            clusters: self.detect_clusters(window_size),
            total_crimes: self.total_crimes(),
            unique_types: self.unique_types(),
            unique_locations: self.unique_locations(),
        }
    }
}

/// Sorts a frequency table descending by count and caps it at `top_n`.
///
/// The sort is stable over the map's alphabetical iteration, so equal
/// counts come out alphabetically ascending.
fn rank<'k>(counts: &BTreeMap<&'k str, u64>, top_n: usize) -> Vec<(&'k str, u64)> {
    let mut ranked: Vec<(&'k str, u64)> = counts
        .iter()
        .map(|(&key, &count)| (key, count))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(top_n);
    ranked
}
