//! Route calculation handler
//!
//! Failed calculations are page outcomes, not HTTP errors: the response is
//! always 200 for a live session and carries the outcome code plus the message
//! written into the page's error area.

use application::PageSnapshot;
use axum::{
    Json,
    extract::{Path, State},
};
use domain::RouteResult;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::common;
use crate::{error::ApiError, state::AppState};

/// Optional input texts applied before calculating
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CalculateRouteRequest {
    pub start: Option<String>,
    pub end: Option<String>,
}

/// Outcome of one calculation
#[derive(Debug, Serialize)]
pub struct CalculateRouteResponse {
    /// `found`, `empty_input`, `no_route` or `failed`
    pub outcome: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<RouteResult>,
    pub snapshot: PageSnapshot,
}

/// Press the calculate button
pub async fn calculate_route(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<CalculateRouteRequest>,
) -> Result<Json<CalculateRouteResponse>, ApiError> {
    let page = common::session(&state, &id)?;

    if let Some(start) = body.start {
        page.input(application::InputField::Start).set(start);
    }
    if let Some(end) = body.end {
        page.input(application::InputField::End).set(end);
    }

    let (outcome, message, result) = match page.calculate_route().await {
        Ok(route) => ("found", None, Some(route)),
        Err(e) => (e.code(), Some(e.to_string()), None),
    };

    Ok(Json(CalculateRouteResponse {
        outcome,
        message,
        result,
        snapshot: page.snapshot(),
    }))
}
