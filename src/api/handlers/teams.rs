use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::api::errors::ApiError;
use crate::api::AppState;
use crate::domain::repositories::TeamStepsSummary;

/// Request body for creating a team
#[derive(Debug, Deserialize)]
pub struct CreateTeamRequest {
    pub name: String,
}

/// Response from team creation
#[derive(Debug, Serialize)]
pub struct CreateTeamResponse {
    pub message: String,
    pub id: i64,
    pub name: String,
}

/// Response from the total-steps lookup
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalStepsResponse {
    pub total_steps: i64,
}

/// Create a new team
///
/// POST /api/teams
pub async fn create_team(
    State(state): State<AppState>,
    Json(req): Json<CreateTeamRequest>,
) -> Result<(StatusCode, Json<CreateTeamResponse>), ApiError> {
    let team = state.teams.create_team(&req.name).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateTeamResponse {
            message: "Team has been created successfully".to_string(),
            id: team.id(),
            name: team.name().to_string(),
        }),
    ))
}

/// List all teams with their total step counts
///
/// GET /api/teams
pub async fn list_teams(
    State(state): State<AppState>,
) -> Result<Json<Vec<TeamStepsSummary>>, ApiError> {
    let rows = state.teams.all_teams_with_step_counts().await?;
    Ok(Json(rows))
}

/// Get the total steps taken by a team
///
/// GET /api/teams/:team_id/total-steps
pub async fn get_total_steps(
    State(state): State<AppState>,
    Path(team_id): Path<i64>,
) -> Result<Json<TotalStepsResponse>, ApiError> {
    let total_steps = state.teams.total_steps_by_team(team_id).await?;
    Ok(Json(TotalStepsResponse { total_steps }))
}

/// Delete a team and all of its counters
///
/// DELETE /api/teams/:team_id
pub async fn delete_team(
    State(state): State<AppState>,
    Path(team_id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.teams.delete_team(team_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
