// API layer module (adapters for controllers)
// Follows Hexagonal Architecture - API is an adapter

pub mod errors;
pub mod handlers;

use std::sync::Arc;

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::domain::repositories::{CounterRepository, TeamRepository};
use crate::domain::services::{CounterService, TeamService};

/// Shared handler state: the wired domain services
#[derive(Clone)]
pub struct AppState {
    pub teams: Arc<TeamService>,
    pub counters: Arc<CounterService>,
}

impl AppState {
    /// Wires the services onto a pair of persistence ports
    pub fn new(teams: Arc<dyn TeamRepository>, counters: Arc<dyn CounterRepository>) -> Self {
        Self {
            teams: Arc::new(TeamService::new(teams.clone(), counters.clone())),
            counters: Arc::new(CounterService::new(teams, counters)),
        }
    }
}

/// Builds the application router
///
/// Used by the binary and by the integration tests, which run it against
/// the in-memory adapter.
pub fn router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Team routes
        .route("/api/teams", post(handlers::teams::create_team))
        .route("/api/teams", get(handlers::teams::list_teams))
        .route(
            "/api/teams/:team_id/total-steps",
            get(handlers::teams::get_total_steps),
        )
        .route("/api/teams/:team_id", delete(handlers::teams::delete_team))
        // Counter routes
        .route(
            "/api/counter/team/:team_id",
            post(handlers::counters::create_counter),
        )
        .route(
            "/api/counter/team/:team_id",
            get(handlers::counters::list_counters_by_team),
        )
        .route(
            "/api/counter/:counter_id/increment",
            post(handlers::counters::increment_counter),
        )
        .route(
            "/api/counter/:counter_id",
            delete(handlers::counters::delete_counter),
        )
        .with_state(state)
}
