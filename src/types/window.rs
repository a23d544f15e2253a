//! Window and window-request types

use std::str::FromStr;

use chrono::NaiveDate;
use serde::Serialize;

use super::TimelineEvent;
use crate::error::StoreError;

/// A bounded, ordered slice of the sorted collection
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Window {
    pub events: Vec<TimelineEvent>,
    /// True iff events exist before the window's start index
    pub has_more_past: bool,
    /// True iff events exist after the window's end index
    pub has_more_future: bool,
}

impl Window {
    pub fn empty() -> Self {
        Self {
            events: Vec::new(),
            has_more_past: false,
            has_more_future: false,
        }
    }
}

/// Paging direction relative to a cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Past,
    Future,
}

impl FromStr for Direction {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "past" => Ok(Direction::Past),
            "future" => Ok(Direction::Future),
            other => Err(StoreError::InvalidArgument(format!(
                "direction must be 'past' or 'future', got '{}'",
                other
            ))),
        }
    }
}

/// The four read shapes, made explicit
///
/// The HTTP layer collapses its optional-parameter surface into one of
/// these variants before touching the store, so the paging state machine
/// stays exhaustive.
#[derive(Debug, Clone, Copy)]
pub enum WindowQuery {
    /// Center on the cursor's index, or on the middle of the collection
    Centered { cursor: Option<u64> },
    /// Up to `limit` events immediately preceding the cursor
    Past { cursor: u64 },
    /// Up to `limit` events immediately following the cursor
    Future { cursor: u64 },
    /// Center on the first event dated on or after `date`
    AroundDate { date: NaiveDate },
}
