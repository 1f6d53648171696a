use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::api::errors::ApiError;
use crate::api::AppState;
use crate::domain::repositories::CounterSummary;

/// Request body for creating a counter
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCounterRequest {
    pub name: String,
    pub step_count: i64,
}

/// Request body for incrementing a counter
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncrementCounterRequest {
    pub step_count: i64,
}

/// Response from counter creation
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCounterResponse {
    pub message: String,
    pub id: i64,
    pub team_id: i64,
    pub name: String,
    pub step_count: i64,
}

/// Response from a counter increment
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IncrementCounterResponse {
    pub message: String,
    pub counter_id: i64,
    pub step_count: i64,
}

/// Add a counter to a specified team
///
/// POST /api/counter/team/:team_id
pub async fn create_counter(
    State(state): State<AppState>,
    Path(team_id): Path<i64>,
    Json(req): Json<CreateCounterRequest>,
) -> Result<Json<CreateCounterResponse>, ApiError> {
    let counter = state
        .counters
        .create_counter(team_id, &req.name, req.step_count)
        .await?;

    Ok(Json(CreateCounterResponse {
        message: "Counter has been added successfully".to_string(),
        id: counter.id(),
        team_id: counter.team_id(),
        name: counter.name().to_string(),
        step_count: counter.step_count(),
    }))
}

/// Increment the step count of a counter
///
/// POST /api/counter/:counter_id/increment
pub async fn increment_counter(
    State(state): State<AppState>,
    Path(counter_id): Path<i64>,
    Json(req): Json<IncrementCounterRequest>,
) -> Result<Json<IncrementCounterResponse>, ApiError> {
    let counter = state
        .counters
        .increment_counter(counter_id, req.step_count)
        .await?;

    Ok(Json(IncrementCounterResponse {
        message: "Counter incremented successfully".to_string(),
        counter_id: counter.id(),
        step_count: counter.step_count(),
    }))
}

/// List all counters in a team
///
/// GET /api/counter/team/:team_id
pub async fn list_counters_by_team(
    State(state): State<AppState>,
    Path(team_id): Path<i64>,
) -> Result<Json<Vec<CounterSummary>>, ApiError> {
    let counters = state.counters.counters_by_team(team_id).await?;
    Ok(Json(counters))
}

/// Delete a counter
///
/// DELETE /api/counter/:counter_id
pub async fn delete_counter(
    State(state): State<AppState>,
    Path(counter_id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.counters.delete_counter(counter_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
