//! Linear search over the record set.

use chrono::NaiveDate;
use crime_patterns_incident_models::IncidentRecord;

use crate::PatternAnalyzer;

impl<'a> PatternAnalyzer<'a> {
    /// Records whose type matches `query` exactly, case-insensitively.
    ///
    /// Results come back in load order.
    #[must_use]
    pub fn search_by_type(&self, query: &str) -> Vec<&'a IncidentRecord> {
        let query = query.to_lowercase();
        self.records
            .iter()
            .filter(|record| record.incident_type.to_lowercase() == query)
            .collect()
    }

    /// Records whose location contains `query` anywhere, case-insensitively.
    ///
    /// Results come back in load order.
    #[must_use]
    pub fn search_by_location(&self, query: &str) -> Vec<&'a IncidentRecord> {
        let query = query.to_lowercase();
        self.records
            .iter()
            .filter(|record| record.location.to_lowercase().contains(&query))
            .collect()
    }

    /// Records dated within the inclusive `[from, to]` range.
    ///
    /// Either bound may be omitted to leave that side open. Results come
    /// back in load order.
    #[must_use]
    pub fn search_by_date_range(
        &self,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Vec<&'a IncidentRecord> {
        self.records
            .iter()
            .filter(|record| {
                from.is_none_or(|from| record.date >= from)
                    && to.is_none_or(|to| record.date <= to)
            })
            .collect()
    }
}
