//! History entry recorded for every successfully generated link.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One generation event in the history log.
///
/// Serialized field names match logs written by earlier releases
/// (`phoneNumber`, `fullLink`, `timestamp`), so existing history keeps loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: String,
    /// Dial code plus normalized number, e.g. `+20 1012345678`.
    #[serde(rename = "phoneNumber")]
    pub display_number: String,
    #[serde(rename = "fullLink")]
    pub link: String,
    /// Creation time in epoch milliseconds.
    #[serde(rename = "timestamp")]
    pub created_at: i64,
    #[serde(rename = "countryCode")]
    pub country_code: String,
}

impl HistoryEntry {
    pub fn new(
        id: String,
        display_number: String,
        link: String,
        created_at: i64,
        country_code: String,
    ) -> Self {
        Self {
            id,
            display_number,
            link,
            created_at,
            country_code,
        }
    }

    /// Creation time as a UTC datetime, `None` if the stored value is out of range.
    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.created_at)
    }
}
