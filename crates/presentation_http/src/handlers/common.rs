//! Shared helper functions for HTTP handlers

use std::sync::Arc;

use application::{InputField, PageContext};
use uuid::Uuid;

use crate::{error::ApiError, state::AppState};

/// Look up a live session
pub fn session(state: &AppState, id: &Uuid) -> Result<Arc<PageContext>, ApiError> {
    state
        .sessions
        .get(id)
        .ok_or_else(|| ApiError::NotFound(format!("Session {id}")))
}

/// Parse the `{field}` path segment
pub fn input_field(raw: &str) -> Result<InputField, ApiError> {
    raw.parse().map_err(ApiError::BadRequest)
}
