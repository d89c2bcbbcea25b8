#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! CSV ingestion and normalization for incident records.
//!
//! This crate is the validation boundary of the system: raw feed rows are
//! mapped through a [`profile::DatasetProfile`], normalized, and checked
//! here, so that only well-formed
//! [`IncidentRecord`](crime_patterns_incident_models::IncidentRecord)s
//! reach the analyzer. Rows that fail validation are skipped with a
//! warning by default, or rejected outright in strict mode.

pub mod loader;
pub mod normalize;
pub mod profile;

use thiserror::Error;

/// Errors that can occur while loading incident data.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Reading the input file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The CSV reader failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The dataset profile TOML could not be parsed.
    #[error("Invalid dataset profile: {0}")]
    Profile(#[from] toml::de::Error),

    /// No candidate column for a required field exists in the CSV header.
    #[error("No column for '{field}' found in CSV header")]
    MissingColumn {
        /// The record field that could not be mapped.
        field: &'static str,
    },

    /// A row failed validation in strict mode.
    #[error("Row at line {line}: {kind}")]
    InvalidRow {
        /// Line number of the offending row.
        line: u64,
        /// What was wrong with the row.
        kind: RowErrorKind,
    },
}

/// What made a CSV row unusable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowErrorKind {
    /// A required field is empty after normalization.
    #[error("empty '{field}' field")]
    EmptyField {
        /// The empty field.
        field: &'static str,
    },

    /// The date field is not a `YYYY-MM-DD` date.
    #[error("invalid date '{value}': expected YYYY-MM-DD")]
    InvalidDate {
        /// The raw field value.
        value: String,
    },

    /// The time field is not a `HH:MM` or `HH:MM:SS` time.
    #[error("invalid time '{value}': expected HH:MM or HH:MM:SS")]
    InvalidTime {
        /// The raw field value.
        value: String,
    },
}
