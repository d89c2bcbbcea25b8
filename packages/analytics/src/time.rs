//! Time-of-day bucketing.

use crime_patterns_analytics_models::{HourCount, PeriodCount, TimePatterns};
use crime_patterns_incident_models::TimePeriod;

use crate::PatternAnalyzer;

impl PatternAnalyzer<'_> {
    /// Hourly and period breakdowns of the record set.
    ///
    /// `hourly` lists only the hours that occur in the data, ascending by
    /// hour. `periods` always contains all four [`TimePeriod`] buckets
    /// (zero-filled), descending by count; equal counts keep day order
    /// starting from morning. The period counts and the hourly counts each
    /// sum to the total record count.
    #[must_use]
    pub fn time_patterns(&self) -> TimePatterns {
        let hourly: Vec<HourCount> = self
            .hour_counts
            .iter()
            .map(|(&hour, &count)| HourCount { hour, count })
            .collect();

        let mut periods: Vec<PeriodCount> = TimePeriod::ALL
            .iter()
            .map(|&period| PeriodCount {
                period,
                count: self
                    .hour_counts
                    .iter()
                    .filter(|&(&hour, _)| TimePeriod::from_hour(hour) == period)
                    .map(|(_, &count)| count)
                    .sum(),
            })
            .collect();
        periods.sort_by(|a, b| b.count.cmp(&a.count));

        TimePatterns { hourly, periods }
    }
}
