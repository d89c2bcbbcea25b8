//! Dataset profiles: how source CSV columns map onto record fields.
//!
//! Feeds name their columns differently, so a profile lists, for each
//! record field, the candidate column names to try in order (the first
//! one present in the header wins). The default profile matches the
//! bundled city feed; other feeds ship a small TOML file instead of code.

use serde::Deserialize;

/// Maps source CSV column names to canonical incident record fields.
#[derive(Debug, Clone, Deserialize)]
pub struct DatasetProfile {
    /// Column names for the record id, tried in order.
    #[serde(default)]
    pub id: Vec<String>,
    /// Column names for the crime type, tried in order (first present
    /// column wins).
    pub crime_type: Vec<String>,
    /// Column names for the location, tried in order.
    pub location: Vec<String>,
    /// Column names for the date, tried in order.
    pub date: Vec<String>,
    /// Column names for the time, tried in order.
    pub time: Vec<String>,
    /// Column names for the description, tried in order.
    #[serde(default)]
    pub description: Vec<String>,
}

impl DatasetProfile {
    /// Parses a profile from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed or missing required keys.
    pub fn from_toml_str(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::de::from_str(toml_str)
    }
}

impl Default for DatasetProfile {
    fn default() -> Self {
        Self {
            id: vec!["id".to_string()],
            crime_type: vec![
                "type".to_string(),
                "crime_type".to_string(),
                "offense".to_string(),
            ],
            location: vec![
                "location".to_string(),
                "area".to_string(),
                "neighborhood".to_string(),
            ],
            date: vec!["date".to_string()],
            time: vec!["time".to_string()],
            description: vec!["description".to_string(), "details".to_string()],
        }
    }
}
