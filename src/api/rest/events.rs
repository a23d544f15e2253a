//! Event endpoints

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use super::{error_response, AroundParams, SearchParams, WindowParams};
use crate::error::{StoreError, StoreResult};
use crate::store::{clamp_limit, EventStore};
use crate::types::{Direction, EventDraft, WindowQuery};
use crate::validation::parse_date;

/// Parse an id or cursor string; anything non-numeric matches no event
fn parse_id(raw: &str) -> StoreResult<u64> {
    raw.trim()
        .parse::<u64>()
        .map_err(|_| StoreError::NotFound(format!("no event with id '{}'", raw)))
}

/// Build the tagged window request from the endpoint's optional parameters
fn window_request(params: &WindowParams) -> StoreResult<WindowQuery> {
    match params.direction.as_deref() {
        Some(dir) => {
            let direction: Direction = dir.parse()?;
            let cursor_raw = params.cursor_id.as_deref().ok_or_else(|| {
                StoreError::InvalidArgument("direction requires a cursorId".into())
            })?;
            let cursor = parse_id(cursor_raw)?;
            Ok(match direction {
                Direction::Past => WindowQuery::Past { cursor },
                Direction::Future => WindowQuery::Future { cursor },
            })
        }
        None => {
            let cursor = match params.cursor_id.as_deref() {
                Some(raw) => Some(parse_id(raw)?),
                None => None,
            };
            Ok(WindowQuery::Centered { cursor })
        }
    }
}

/// GET /events - sequential or directional window
pub async fn get_window(
    State(store): State<Arc<EventStore>>,
    Query(params): Query<WindowParams>,
) -> impl IntoResponse {
    let limit = clamp_limit(params.limit.as_deref());
    let result = window_request(&params).and_then(|request| store.window(request, limit));

    match result {
        Ok(window) => (StatusCode::OK, Json(window)).into_response(),
        Err(e) => {
            let (status, error) = error_response(e);
            (status, Json(error)).into_response()
        }
    }
}

/// GET /events/around - window centered on the first event at or after a date
pub async fn get_window_around(
    State(store): State<Arc<EventStore>>,
    Query(params): Query<AroundParams>,
) -> impl IntoResponse {
    let limit = clamp_limit(params.limit.as_deref());
    let result = parse_date(params.date.as_deref().unwrap_or(""))
        .and_then(|date| store.window(WindowQuery::AroundDate { date }, limit));

    match result {
        Ok(window) => (StatusCode::OK, Json(window)).into_response(),
        Err(e) => {
            let (status, error) = error_response(e);
            (status, Json(error)).into_response()
        }
    }
}

/// GET /events/search - case-insensitive substring search
pub async fn search_events(
    State(store): State<Arc<EventStore>>,
    Query(params): Query<SearchParams>,
) -> impl IntoResponse {
    let limit = clamp_limit(params.limit.as_deref());

    match store.search(params.query.as_deref().unwrap_or(""), limit) {
        Ok(events) => (StatusCode::OK, Json(serde_json::json!({ "events": events }))).into_response(),
        Err(e) => {
            let (status, error) = error_response(e);
            (status, Json(error)).into_response()
        }
    }
}

/// POST /events - create an event
pub async fn create_event(
    State(store): State<Arc<EventStore>>,
    Json(draft): Json<EventDraft>,
) -> impl IntoResponse {
    match store.create(&draft) {
        Ok(event) => (StatusCode::CREATED, Json(event)).into_response(),
        Err(e) => {
            let (status, error) = error_response(e);
            (status, Json(error)).into_response()
        }
    }
}

/// PUT /events/:id - replace an event's fields
pub async fn update_event(
    State(store): State<Arc<EventStore>>,
    Path(id): Path<String>,
    Json(draft): Json<EventDraft>,
) -> impl IntoResponse {
    let result = parse_id(&id).and_then(|id| store.update(id, &draft));

    match result {
        Ok(event) => (StatusCode::OK, Json(event)).into_response(),
        Err(e) => {
            let (status, error) = error_response(e);
            (status, Json(error)).into_response()
        }
    }
}

/// DELETE /events/:id - remove an event, returning it
pub async fn delete_event(
    State(store): State<Arc<EventStore>>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let result = parse_id(&id).and_then(|id| store.delete(id));

    match result {
        Ok(event) => (StatusCode::OK, Json(event)).into_response(),
        Err(e) => {
            let (status, error) = error_response(e);
            (status, Json(error)).into_response()
        }
    }
}
