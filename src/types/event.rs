//! Timeline event types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A dated event in the timeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineEvent {
    pub id: u64,
    pub title: String,
    pub description: String,
    /// Calendar date, day granularity, serialized as `YYYY-MM-DD`
    pub date: NaiveDate,
}

impl TimelineEvent {
    /// Create a new event with the given id and fields
    pub fn new(
        id: u64,
        title: impl Into<String>,
        description: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            date,
        }
    }
}

/// Incoming create/update payload, unvalidated
///
/// Fields arrive as raw strings; `validation::validate_draft` turns this
/// into trimmed text plus a parsed date.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventDraft {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub date: String,
}
