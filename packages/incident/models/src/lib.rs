#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Core incident record types shared across the crime-patterns system.
//!
//! This crate defines the fixed-shape [`IncidentRecord`] that every data
//! source normalizes into, plus the [`TimePeriod`] partition used for
//! time-of-day bucketing. All downstream analysis operates on these types
//! only; loosely-typed source rows never escape the ingest boundary.

use chrono::{NaiveDate, NaiveTime, Timelike as _};
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// A single normalized incident record.
///
/// Records are immutable once constructed and owned by the caller; the
/// analyzer borrows them for the duration of an analysis. Field validation
/// (non-empty type/location, parsable date and time) is the loader's job,
/// so holders of an `IncidentRecord` can rely on its invariants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncidentRecord {
    /// Source-assigned record identifier, when the feed provides one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Normalized incident type (Title Case, e.g. "Theft").
    #[serde(rename = "type")]
    pub incident_type: String,
    /// Normalized location name (Title Case, e.g. "Downtown").
    pub location: String,
    /// Date the incident occurred.
    pub date: NaiveDate,
    /// Time of day the incident occurred.
    pub time: NaiveTime,
    /// Free-text description, when the feed provides one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl IncidentRecord {
    /// Hour-of-day component of [`Self::time`], always in the range 0-23.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn hour(&self) -> u8 {
        self.time.hour() as u8
    }

    /// The [`TimePeriod`] bucket this incident falls into.
    #[must_use]
    pub fn period(&self) -> TimePeriod {
        TimePeriod::from_hour(self.hour())
    }
}

/// Fixed six-hour bucket partitioning the 24-hour day.
///
/// The four buckets are non-overlapping and exhaustive: every hour 0-23
/// belongs to exactly one period.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TimePeriod {
    /// Hours 6-11.
    Morning,
    /// Hours 12-17.
    Afternoon,
    /// Hours 18-23.
    Evening,
    /// Hours 0-5.
    Night,
}

impl TimePeriod {
    /// The four periods in day order, starting from morning.
    pub const ALL: [Self; 4] = [Self::Morning, Self::Afternoon, Self::Evening, Self::Night];

    /// Maps an hour of day (0-23) to its period.
    ///
    /// Hours 0-5 and any out-of-range value map to [`Self::Night`]; callers
    /// passing `IncidentRecord::hour()` never hit the out-of-range arm.
    #[must_use]
    pub const fn from_hour(hour: u8) -> Self {
        match hour {
            6..=11 => Self::Morning,
            12..=17 => Self::Afternoon,
            18..=23 => Self::Evening,
            _ => Self::Night,
        }
    }

    /// Capitalized human-readable name (e.g. "Morning") for display output.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Morning => "Morning",
            Self::Afternoon => "Afternoon",
            Self::Evening => "Evening",
            Self::Night => "Night",
        }
    }
}
