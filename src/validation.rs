//! Payload validation shared by create and update

use chrono::NaiveDate;

use crate::error::{StoreError, StoreResult};
use crate::types::EventDraft;

/// A draft that passed validation: trimmed text and a parsed date
#[derive(Debug, Clone)]
pub struct ValidatedDraft {
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
}

/// Validate a create/update payload
///
/// Title and description must be non-empty after trimming; the date must
/// parse as a `YYYY-MM-DD` calendar date. The parsed `NaiveDate` serializes
/// back in zero-padded ISO form, which normalizes inputs like `2020-1-5`.
pub fn validate_draft(draft: &EventDraft) -> StoreResult<ValidatedDraft> {
    let title = draft.title.trim();
    if title.is_empty() {
        return Err(StoreError::InvalidArgument("title is required".into()));
    }

    let description = draft.description.trim();
    if description.is_empty() {
        return Err(StoreError::InvalidArgument(
            "description is required".into(),
        ));
    }

    let date = parse_date(&draft.date)?;

    Ok(ValidatedDraft {
        title: title.to_string(),
        description: description.to_string(),
        date,
    })
}

/// Parse a `YYYY-MM-DD` date string
pub fn parse_date(raw: &str) -> StoreResult<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(StoreError::InvalidArgument("date is required".into()));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| {
        StoreError::InvalidArgument(format!("invalid date '{}', expected YYYY-MM-DD", raw))
    })
}
