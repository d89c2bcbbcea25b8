//! CSV loader for incident records.
//!
//! [`CsvLoader`] reads a CSV feed, maps its columns through a
//! [`DatasetProfile`], normalizes and validates each row, and produces the
//! typed records the analyzer consumes. Invalid rows are skipped with a
//! warning by default; strict mode turns the first one into an error.

use std::collections::BTreeSet;
use std::fs::File;
use std::path::{Path, PathBuf};

use chrono::{NaiveDate, NaiveTime};
use crime_patterns_analytics_models::{DataSummary, DateRange};
use crime_patterns_incident_models::IncidentRecord;

use crate::profile::DatasetProfile;
use crate::{IngestError, RowErrorKind, normalize};

/// Configurable CSV reader producing [`IncidentRecord`]s.
#[derive(Debug, Clone)]
pub struct CsvLoader {
    /// Path of the CSV file to read.
    path: PathBuf,
    /// Field delimiter byte (defaults to `,`).
    delimiter: u8,
    /// Optional cap on the number of records to load.
    max_records: Option<u64>,
    /// Column mapping for the feed.
    profile: DatasetProfile,
    /// Whether an invalid row aborts the load instead of being skipped.
    strict: bool,
}

impl CsvLoader {
    /// Creates a loader for the given file with default settings
    /// (comma-delimited, default profile, lenient, no record limit).
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            delimiter: b',',
            max_records: None,
            profile: DatasetProfile::default(),
            strict: false,
        }
    }

    /// Sets the field delimiter (e.g. `b'\t'` for TSV files).
    #[must_use]
    pub const fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Limits the number of records that will be loaded from the file.
    #[must_use]
    pub const fn with_max_records(mut self, max: u64) -> Self {
        self.max_records = Some(max);
        self
    }

    /// Replaces the default column mapping.
    #[must_use]
    pub fn with_profile(mut self, profile: DatasetProfile) -> Self {
        self.profile = profile;
        self
    }

    /// Makes the first invalid row abort the load with
    /// [`IngestError::InvalidRow`] instead of being skipped.
    #[must_use]
    pub const fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Reads and validates the configured file.
    ///
    /// # Errors
    ///
    /// Returns [`IngestError`] if the file cannot be opened or parsed, if a
    /// required column is missing from the header, or (in strict mode) if a
    /// row fails validation.
    pub fn load(&self) -> Result<Vec<IncidentRecord>, IngestError> {
        let file = File::open(&self.path)?;
        let records = self.load_from_reader(file)?;
        log::info!("Loaded {} records from {}", records.len(), self.path.display());
        Ok(records)
    }

    /// Reads and validates records from any CSV byte stream.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Self::load`], minus the file open.
    pub fn load_from_reader<R: std::io::Read>(
        &self,
        input: R,
    ) -> Result<Vec<IncidentRecord>, IngestError> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .flexible(true)
            .from_reader(input);

        let headers: Vec<String> = reader.headers()?.iter().map(|h| h.trim().to_owned()).collect();
        let columns = ColumnIndices::resolve(&self.profile, &headers)?;

        let mut records = Vec::new();
        for result in reader.records() {
            if let Some(max) = self.max_records
                && records.len() as u64 >= max
            {
                log::info!("Reached max_records limit ({max}), stopping CSV parse");
                break;
            }

            let row = result?;
            let line = row.position().map_or(0, csv::Position::line);

            match parse_row(&row, &columns) {
                Ok(record) => records.push(record),
                Err(kind) => {
                    if self.strict {
                        return Err(IngestError::InvalidRow { line, kind });
                    }
                    log::warn!("Skipping row at line {line}: {kind}");
                }
            }
        }

        Ok(records)
    }

    /// The file this loader reads.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Computes the [`DataSummary`] for a loaded record set.
#[must_use]
pub fn summarize(records: &[IncidentRecord]) -> DataSummary {
    let date_range = records
        .iter()
        .map(|r| r.date)
        .min()
        .zip(records.iter().map(|r| r.date).max())
        .map(|(start, end)| DateRange { start, end });

    let unique_types = records
        .iter()
        .map(|r| r.incident_type.as_str())
        .collect::<BTreeSet<_>>()
        .len() as u64;
    let unique_locations = records
        .iter()
        .map(|r| r.location.as_str())
        .collect::<BTreeSet<_>>()
        .len() as u64;

    DataSummary {
        total_records: records.len() as u64,
        date_range,
        unique_types,
        unique_locations,
    }
}

/// Header indices resolved from a [`DatasetProfile`].
struct ColumnIndices {
    id: Option<usize>,
    incident_type: usize,
    location: usize,
    date: usize,
    time: usize,
    description: Option<usize>,
}

impl ColumnIndices {
    /// Finds each field's column by trying its candidates in order
    /// (case-insensitive header match). Required fields error when no
    /// candidate is present; optional fields resolve to `None`.
    fn resolve(profile: &DatasetProfile, headers: &[String]) -> Result<Self, IngestError> {
        let find = |candidates: &[String]| {
            candidates.iter().find_map(|candidate| {
                headers
                    .iter()
                    .position(|header| header.eq_ignore_ascii_case(candidate))
            })
        };

        Ok(Self {
            id: find(&profile.id),
            incident_type: find(&profile.crime_type)
                .ok_or(IngestError::MissingColumn { field: "type" })?,
            location: find(&profile.location)
                .ok_or(IngestError::MissingColumn { field: "location" })?,
            date: find(&profile.date).ok_or(IngestError::MissingColumn { field: "date" })?,
            time: find(&profile.time).ok_or(IngestError::MissingColumn { field: "time" })?,
            description: find(&profile.description),
        })
    }
}

/// Normalizes and validates one CSV row into an [`IncidentRecord`].
fn parse_row(
    row: &csv::StringRecord,
    columns: &ColumnIndices,
) -> Result<IncidentRecord, RowErrorKind> {
    let incident_type = normalize::clean_field(row.get(columns.incident_type).unwrap_or(""));
    if incident_type.is_empty() {
        return Err(RowErrorKind::EmptyField { field: "type" });
    }

    let location = normalize::clean_field(row.get(columns.location).unwrap_or(""));
    if location.is_empty() {
        return Err(RowErrorKind::EmptyField { field: "location" });
    }

    let date_str = row.get(columns.date).unwrap_or("").trim();
    let date =
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|_| RowErrorKind::InvalidDate {
            value: date_str.to_string(),
        })?;

    let time_str = row.get(columns.time).unwrap_or("").trim();
    let time = parse_time(time_str).ok_or_else(|| RowErrorKind::InvalidTime {
        value: time_str.to_string(),
    })?;

    // An unparsable id is treated as absent rather than invalid; feeds
    // mix numeric and free-form id schemes.
    let id = columns
        .id
        .and_then(|index| row.get(index))
        .and_then(|value| value.trim().parse::<u64>().ok());

    let description = columns
        .description
        .and_then(|index| row.get(index))
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(String::from);

    Ok(IncidentRecord {
        id,
        incident_type,
        location,
        date,
        time,
        description,
    })
}

/// Parses a `HH:MM` or `HH:MM:SS` time-of-day string.
fn parse_time(value: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const FEED: &str = "\
id,type,location,date,time,description
1, theft ,downtown,2024-01-15,14:30,Bike stolen from rack
2,ASSAULT,harbor district,2024-01-16,22:05,
3,Theft,DOWNTOWN,2024-01-17,09:00,Shoplifting
";

    fn load_feed(loader: &CsvLoader, feed: &str) -> Result<Vec<IncidentRecord>, IngestError> {
        loader.load_from_reader(feed.as_bytes())
    }

    #[test]
    fn loads_and_normalizes_rows() {
        let loader = CsvLoader::new("feed.csv");
        let records = load_feed(&loader, FEED).unwrap();

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].incident_type, "Theft");
        assert_eq!(records[0].location, "Downtown");
        assert_eq!(records[0].id, Some(1));
        assert_eq!(records[0].hour(), 14);
        assert_eq!(records[0].description.as_deref(), Some("Bike stolen from rack"));
        assert_eq!(records[1].incident_type, "Assault");
        assert_eq!(records[1].location, "Harbor District");
        assert_eq!(records[1].description, None);
    }

    #[test]
    fn lenient_mode_skips_invalid_rows() {
        let feed = "\
id,type,location,date,time
1,Theft,Downtown,2024-01-15,14:30
2,Assault,Uptown,not-a-date,10:00
3,,Midtown,2024-01-16,11:00
4,Fraud,Harbor,2024-01-17,25:99
5,Burglary,Westside,2024-01-18,08:15
";
        let loader = CsvLoader::new("feed.csv");
        let records = load_feed(&loader, feed).unwrap();

        let ids: Vec<u64> = records.iter().filter_map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 5]);
    }

    #[test]
    fn strict_mode_errors_on_first_invalid_row() {
        let feed = "\
id,type,location,date,time
1,Theft,Downtown,2024-01-15,14:30
2,Assault,Uptown,2024/01/16,10:00
";
        let loader = CsvLoader::new("feed.csv").strict(true);
        let err = load_feed(&loader, feed).unwrap_err();

        match err {
            IngestError::InvalidRow { line, kind } => {
                assert_eq!(line, 3);
                assert_eq!(
                    kind,
                    RowErrorKind::InvalidDate {
                        value: "2024/01/16".to_string(),
                    }
                );
            }
            other => panic!("expected InvalidRow, got {other:?}"),
        }
    }

    #[test]
    fn respects_max_records() {
        let loader = CsvLoader::new("feed.csv").with_max_records(2);
        let records = load_feed(&loader, FEED).unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn resolves_candidate_columns_in_order() {
        let feed = "\
incident_number,offense,district,occurred_date,occurred_time
77,Vandalism,Eastside,2024-02-01,03:45
";
        let profile = DatasetProfile::from_toml_str(
            r#"
            id = ["incident_number"]
            crime_type = ["offense_code", "offense"]
            location = ["district"]
            date = ["occurred_date"]
            time = ["occurred_time"]
            "#,
        )
        .unwrap();

        let loader = CsvLoader::new("feed.csv").with_profile(profile);
        let records = load_feed(&loader, feed).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, Some(77));
        assert_eq!(records[0].incident_type, "Vandalism");
        assert_eq!(records[0].location, "Eastside");
        assert_eq!(records[0].hour(), 3);
    }

    #[test]
    fn header_match_is_case_insensitive() {
        let feed = "\
ID,Type,Location,Date,Time
9,Theft,Downtown,2024-01-15,14:30
";
        let loader = CsvLoader::new("feed.csv");
        let records = load_feed(&loader, feed).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, Some(9));
    }

    #[test]
    fn missing_required_column_errors() {
        let feed = "\
id,type,location,date
1,Theft,Downtown,2024-01-15
";
        let loader = CsvLoader::new("feed.csv");
        let err = load_feed(&loader, feed).unwrap_err();

        assert!(matches!(err, IngestError::MissingColumn { field: "time" }));
    }

    #[test]
    fn accepts_times_with_seconds() {
        let feed = "\
id,type,location,date,time
1,Theft,Downtown,2024-01-15,23:59:59
";
        let loader = CsvLoader::new("feed.csv");
        let records = load_feed(&loader, feed).unwrap();
        assert_eq!(records[0].hour(), 23);
    }

    #[test]
    fn unparsable_id_becomes_none() {
        let feed = "\
id,type,location,date,time
CASE-44,Theft,Downtown,2024-01-15,14:30
";
        let loader = CsvLoader::new("feed.csv");
        let records = load_feed(&loader, feed).unwrap();
        assert_eq!(records[0].id, None);
    }

    #[test]
    fn supports_custom_delimiter() {
        let feed = "\
id;type;location;date;time
1;Theft;Downtown;2024-01-15;14:30
";
        let loader = CsvLoader::new("feed.csv").with_delimiter(b';');
        let records = load_feed(&loader, feed).unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn summarize_reports_range_and_uniques() {
        let loader = CsvLoader::new("feed.csv");
        let records = load_feed(&loader, FEED).unwrap();
        let summary = summarize(&records);

        assert_eq!(summary.total_records, 3);
        let range = summary.date_range.unwrap();
        assert_eq!(range.start, "2024-01-15".parse::<NaiveDate>().unwrap());
        assert_eq!(range.end, "2024-01-17".parse::<NaiveDate>().unwrap());
        assert_eq!(summary.unique_types, 2);
        assert_eq!(summary.unique_locations, 2);
    }

    #[test]
    fn summarize_empty_set_has_no_range() {
        let summary = summarize(&[]);
        assert_eq!(summary.total_records, 0);
        assert!(summary.date_range.is_none());
        assert_eq!(summary.unique_types, 0);
    }
}
