//! Page session handlers
//!
//! A session is one initialized page. Its state can be read as a snapshot or
//! followed as a stream of Server-Sent Events, one `snapshot` event per change.

use std::convert::Infallible;

use application::{PageSnapshot, PageSubscription};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::sse::{Event, KeepAlive, Sse},
};
use futures::stream::{self, Stream, StreamExt};
use serde::Serialize;
use tracing::warn;
use uuid::Uuid;

use super::common;
use crate::{error::ApiError, state::AppState};

/// Newly created session
#[derive(Debug, Serialize)]
pub struct SessionCreated {
    pub id: Uuid,
    pub snapshot: PageSnapshot,
}

/// Initialize a page
pub async fn create_session(State(state): State<AppState>) -> (StatusCode, Json<SessionCreated>) {
    let (id, page) = state.open_session();
    (
        StatusCode::CREATED,
        Json(SessionCreated {
            id,
            snapshot: page.snapshot(),
        }),
    )
}

/// Current page state
pub async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<PageSnapshot>, ApiError> {
    Ok(Json(common::session(&state, &id)?.snapshot()))
}

/// Tear the page down
pub async fn delete_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if state.sessions.remove(&id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound(format!("Session {id}")))
    }
}

/// Stream page snapshots until the session is closed
pub async fn session_events(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Sse<impl Stream<Item = Result<Event, Infallible>>>, ApiError> {
    // The stream holds only receivers so a closed session ends it.
    let mut subscription = common::session(&state, &id)?.subscribe();
    let initial = subscription.current();

    let updates = stream::unfold(subscription, |mut subscription: PageSubscription| async move {
        if subscription.changed().await {
            let snapshot = subscription.current();
            Some((snapshot_event(&snapshot), subscription))
        } else {
            None
        }
    });

    let events = stream::once(async move { snapshot_event(&initial) }).chain(updates);

    Ok(Sse::new(events).keep_alive(KeepAlive::default()))
}

fn snapshot_event(snapshot: &PageSnapshot) -> Result<Event, Infallible> {
    Ok(Event::default()
        .event("snapshot")
        .json_data(snapshot)
        .unwrap_or_else(|e| {
            warn!(error = %e, "Failed to encode page snapshot");
            Event::default().event("error").data("snapshot encoding failed")
        }))
}
