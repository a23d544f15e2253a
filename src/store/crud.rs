//! Mutation operations: create, update, delete
//!
//! Every mutation validates before touching the collection, mutates under
//! the write lock, re-sorts, and rewrites the snapshot before returning, so
//! callers observe the change only once it is durable.

use crate::error::{StoreError, StoreResult};
use crate::types::{EventDraft, TimelineEvent};
use crate::validation::validate_draft;

use super::EventStore;

/// Create a new event from a validated draft
pub fn create(store: &EventStore, draft: &EventDraft) -> StoreResult<TimelineEvent> {
    let validated = validate_draft(draft)?;

    let mut events = store.events.write();
    let event = TimelineEvent::new(
        store.mint_id(),
        validated.title,
        validated.description,
        validated.date,
    );
    events.push(event.clone());
    events.sort_by(|a, b| a.date.cmp(&b.date));

    store.persist(&events)?;
    Ok(event)
}

/// Replace an existing event's fields wholesale (no merge)
pub fn update(store: &EventStore, id: u64, draft: &EventDraft) -> StoreResult<TimelineEvent> {
    let validated = validate_draft(draft)?;

    let mut events = store.events.write();
    let event = events
        .iter_mut()
        .find(|e| e.id == id)
        .ok_or_else(|| StoreError::NotFound(format!("no event with id {}", id)))?;

    event.title = validated.title;
    event.description = validated.description;
    event.date = validated.date;
    let updated = event.clone();
    events.sort_by(|a, b| a.date.cmp(&b.date));

    store.persist(&events)?;
    Ok(updated)
}

/// Remove an event, returning it for caller confirmation
pub fn delete(store: &EventStore, id: u64) -> StoreResult<TimelineEvent> {
    let mut events = store.events.write();
    let idx = events
        .iter()
        .position(|e| e.id == id)
        .ok_or_else(|| StoreError::NotFound(format!("no event with id {}", id)))?;

    let removed = events.remove(idx);
    store.persist(&events)?;
    Ok(removed)
}
