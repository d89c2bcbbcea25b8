//! Sliding-window cluster detection over the distinct date axis.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use crime_patterns_analytics_models::DateCluster;

use crate::PatternAnalyzer;

impl PatternAnalyzer<'_> {
    /// Finds runs of `window_size` consecutive distinct dates whose average
    /// daily incident count strictly exceeds the global per-date mean.
    ///
    /// The window slides over the sorted distinct dates present in the
    /// data; calendar gaps are not filled. Overlapping qualifying windows
    /// are all emitted, in window-start order. The minimum-size guard
    /// compares the total record count against `window_size`, not the
    /// distinct-date count, so a set with enough records on fewer distinct
    /// dates than `window_size` yields no windows.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn detect_clusters(&self, window_size: usize) -> Vec<DateCluster> {
        if window_size == 0 || self.records.len() < window_size {
            return Vec::new();
        }

        let mut date_counts: BTreeMap<NaiveDate, u64> = BTreeMap::new();
        for record in self.records {
            *date_counts.entry(record.date).or_default() += 1;
        }

        if date_counts.is_empty() {
            return Vec::new();
        }

        let total: u64 = date_counts.values().sum();
        let global_mean = total as f64 / date_counts.len() as f64;

        let axis: Vec<(NaiveDate, u64)> = date_counts.into_iter().collect();

        let mut clusters = Vec::new();
        for window in axis.windows(window_size) {
            let window_total: u64 = window.iter().map(|(_, count)| count).sum();
            let window_avg = window_total as f64 / window_size as f64;
            if window_avg > global_mean {
                clusters.push(DateCluster {
                    start_date: window[0].0,
                    end_date: window[window_size - 1].0,
                    total_crimes: window_total,
                    avg_daily_crimes: round2(window_avg),
                });
            }
        }

        clusters
    }
}

/// Rounds to 2 decimal places, half away from zero.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
