use async_trait::async_trait;
use serde::Serialize;

use crate::domain::error::DomainResult;
use crate::domain::team::{NewTeam, Team};

/// One row of the per-team step aggregate
///
/// Produced by a left-outer join over team x counter, so teams without
/// counters appear with `total_steps = 0`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct TeamStepsSummary {
    pub id: i64,
    pub name: String,
    pub total_steps: i64,
}

/// Repository trait for the Team aggregate
///
/// Defines the persistence contract the domain services depend on.
/// Implementations handle the storage-specific details.
#[async_trait]
pub trait TeamRepository: Send + Sync {
    /// Insert a new team, assigning a fresh id
    async fn insert(&self, team: &NewTeam) -> DomainResult<Team>;

    /// Find a team by its id
    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Team>>;

    /// Delete a team by id, cascading to all of its counters
    async fn delete(&self, id: i64) -> DomainResult<()>;

    /// Total steps per team, one row per existing team, in storage order
    async fn aggregate_steps_per_team(&self) -> DomainResult<Vec<TeamStepsSummary>>;
}
