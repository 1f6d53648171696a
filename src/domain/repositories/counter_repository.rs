use async_trait::async_trait;
use serde::Serialize;

use crate::domain::counter::{Counter, NewCounter};
use crate::domain::error::DomainResult;

/// Projection of a counter as listed per team
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct CounterSummary {
    pub id: i64,
    pub name: String,
    pub step_count: i64,
}

/// Repository trait for Counter entities
#[async_trait]
pub trait CounterRepository: Send + Sync {
    /// Insert a new counter, assigning a fresh id
    async fn insert(&self, counter: &NewCounter) -> DomainResult<Counter>;

    /// Find a counter by its id
    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Counter>>;

    /// Persist a changed counter (the step count after an increment)
    async fn update(&self, counter: &Counter) -> DomainResult<()>;

    /// Delete a counter by id
    async fn delete(&self, id: i64) -> DomainResult<()>;

    /// All counters owned by a team, in storage order
    async fn find_by_team(&self, team_id: i64) -> DomainResult<Vec<CounterSummary>>;
}
