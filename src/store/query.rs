//! Read operations: windows, date anchoring, substring search

use rayon::prelude::*;

use crate::error::{StoreError, StoreResult};
use crate::types::{TimelineEvent, Window, WindowQuery};

use super::EventStore;

/// Window size used when the caller omits or mangles `limit`
pub const DEFAULT_WINDOW_SIZE: usize = 8;

/// Hard cap on window size regardless of what was requested
pub const MAX_WINDOW_SIZE: usize = 50;

/// Threshold for using parallel search (event count)
const PARALLEL_SEARCH_THRESHOLD: usize = 1000;

/// Clamp a raw `limit` query value: missing, non-numeric, or <= 0 falls
/// back to the default; the effective value is capped
pub fn clamp_limit(raw: Option<&str>) -> usize {
    let parsed = raw.and_then(|s| s.trim().parse::<i64>().ok()).unwrap_or(0);
    if parsed <= 0 {
        DEFAULT_WINDOW_SIZE
    } else {
        (parsed as usize).min(MAX_WINDOW_SIZE)
    }
}

/// Apply the same default/cap rule to an already-numeric limit
fn effective_limit(limit: usize) -> usize {
    if limit == 0 {
        DEFAULT_WINDOW_SIZE
    } else {
        limit.min(MAX_WINDOW_SIZE)
    }
}

/// Centered window bounds around an anchor index
///
/// `start = max(0, anchor - limit/2)`, `end = min(len, start + limit)`;
/// near the tail, `start` slides back so a full window is returned whenever
/// the collection holds at least `limit` events.
fn centered_bounds(anchor: usize, limit: usize, len: usize) -> (usize, usize) {
    let mut start = anchor.saturating_sub(limit / 2);
    let end = len.min(start + limit);
    if end - start < limit {
        start = end.saturating_sub(limit);
    }
    (start, end)
}

/// Index of the event with the given id, or `NotFound`
fn index_of(events: &[TimelineEvent], id: u64) -> StoreResult<usize> {
    events
        .iter()
        .position(|e| e.id == id)
        .ok_or_else(|| StoreError::NotFound(format!("no event with id {}", id)))
}

/// Compute a pagination window over the sorted collection
///
/// `has_more_past` / `has_more_future` are derived from the returned
/// slice's absolute `[start, end)` indices for every variant, directional
/// ones included, so a "past" page still reports that events exist at and
/// beyond the cursor.
pub fn window(store: &EventStore, request: WindowQuery, limit: usize) -> StoreResult<Window> {
    let limit = effective_limit(limit);
    let events = store.events.read();
    let len = events.len();

    let (start, end) = match request {
        WindowQuery::Centered { cursor } => {
            let anchor = match cursor {
                Some(id) => index_of(&events, id)?,
                None => {
                    if len == 0 {
                        return Ok(Window::empty());
                    }
                    len / 2
                }
            };
            centered_bounds(anchor, limit, len)
        }
        WindowQuery::Past { cursor } => {
            let idx = index_of(&events, cursor)?;
            (idx.saturating_sub(limit), idx)
        }
        WindowQuery::Future { cursor } => {
            let idx = index_of(&events, cursor)?;
            (len.min(idx + 1), len.min(idx + 1 + limit))
        }
        WindowQuery::AroundDate { date } => {
            if len == 0 {
                return Ok(Window::empty());
            }
            // First event dated on or after the target; past the end means
            // anchor on the last event
            let mut anchor = events.partition_point(|e| e.date < date);
            if anchor == len {
                anchor = len - 1;
            }
            centered_bounds(anchor, limit, len)
        }
    };

    Ok(Window {
        events: events[start..end].to_vec(),
        has_more_past: start > 0,
        has_more_future: end < len,
    })
}

/// Case-insensitive substring search over title OR description
///
/// Flat truncated list in ascending date order; no cursor semantics.
/// Large collections are scanned in parallel.
pub fn search(store: &EventStore, text: &str, limit: usize) -> StoreResult<Vec<TimelineEvent>> {
    let needle = text.trim().to_lowercase();
    if needle.is_empty() {
        return Err(StoreError::InvalidArgument(
            "search query must not be blank".into(),
        ));
    }

    let events = store.events.read();

    let matches_needle = |e: &TimelineEvent| {
        e.title.to_lowercase().contains(&needle) || e.description.to_lowercase().contains(&needle)
    };

    let mut matches: Vec<TimelineEvent> = if events.len() > PARALLEL_SEARCH_THRESHOLD {
        events
            .par_iter()
            .filter(|e| matches_needle(e))
            .cloned()
            .collect()
    } else {
        events.iter().filter(|e| matches_needle(e)).cloned().collect()
    };

    matches.truncate(effective_limit(limit));
    Ok(matches)
}
