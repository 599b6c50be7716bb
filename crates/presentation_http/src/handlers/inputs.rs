//! Location input handlers: typing, autocomplete suggestions and selection

use application::{PageSnapshot, PlaceDetails, PlaceSuggestion};
use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::common;
use crate::{error::ApiError, state::AppState};

/// Request body for typed text
#[derive(Debug, Deserialize)]
pub struct SetInputRequest {
    pub text: String,
}

/// Overwrite an input's text
pub async fn set_input(
    State(state): State<AppState>,
    Path((id, field)): Path<(Uuid, String)>,
    Json(body): Json<SetInputRequest>,
) -> Result<Json<PageSnapshot>, ApiError> {
    let field = common::input_field(&field)?;
    let page = common::session(&state, &id)?;
    page.input(field).set(body.text);
    Ok(Json(page.snapshot()))
}

/// Query parameters for suggestions
#[derive(Debug, Deserialize)]
pub struct SuggestionParams {
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Serialize)]
pub struct SuggestionsResponse {
    pub suggestions: Vec<PlaceSuggestion>,
}

/// Autocomplete predictions for the text typed into an input
pub async fn suggestions(
    State(state): State<AppState>,
    Path((id, field)): Path<(Uuid, String)>,
    Query(params): Query<SuggestionParams>,
) -> Result<Json<SuggestionsResponse>, ApiError> {
    let field = common::input_field(&field)?;
    let page = common::session(&state, &id)?;
    let suggestions = page.autocomplete(field).suggest(&params.q).await?;
    Ok(Json(SuggestionsResponse { suggestions }))
}

/// Request body for a chosen suggestion
#[derive(Debug, Deserialize)]
pub struct SelectRequest {
    pub place_id: String,
}

#[derive(Debug, Serialize)]
pub struct SelectResponse {
    pub place: PlaceDetails,
    pub snapshot: PageSnapshot,
}

/// Resolve a chosen suggestion, writing its address into the input
pub async fn select_place(
    State(state): State<AppState>,
    Path((id, field)): Path<(Uuid, String)>,
    Json(body): Json<SelectRequest>,
) -> Result<Json<SelectResponse>, ApiError> {
    let field = common::input_field(&field)?;
    let page = common::session(&state, &id)?;
    let place = page.autocomplete(field).select(&body.place_id).await?;
    Ok(Json(SelectResponse {
        place,
        snapshot: page.snapshot(),
    }))
}
