use std::sync::Arc;

use crate::domain::counter::{Counter, NewCounter};
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::repositories::{CounterRepository, CounterSummary, TeamRepository};

/// Orchestrates counter lifecycle operations over the persistence ports
pub struct CounterService {
    teams: Arc<dyn TeamRepository>,
    counters: Arc<dyn CounterRepository>,
}

impl CounterService {
    pub fn new(teams: Arc<dyn TeamRepository>, counters: Arc<dyn CounterRepository>) -> Self {
        Self { teams, counters }
    }

    /// Creates and persists a counter under an existing team
    ///
    /// Fails with `NotFound` if the team does not exist, and with
    /// `Validation` on a bad name or a negative initial step count. An
    /// initial count of 0 is legal.
    pub async fn create_counter(
        &self,
        team_id: i64,
        name: &str,
        initial_step_count: i64,
    ) -> DomainResult<Counter> {
        self.require_team(team_id).await?;
        let draft = NewCounter::new(team_id, name, initial_step_count)?;
        let counter = self.counters.insert(&draft).await?;
        tracing::info!(counter_id = counter.id(), team_id, "counter created");
        Ok(counter)
    }

    /// Adds `steps` to a counter and persists the new total
    ///
    /// Fails with `NotFound` if the counter does not exist, and with
    /// `Validation` unless `steps >= 1`. Returns the updated counter.
    pub async fn increment_counter(&self, counter_id: i64, steps: i64) -> DomainResult<Counter> {
        let mut counter = self
            .counters
            .find_by_id(counter_id)
            .await?
            .ok_or_else(|| {
                DomainError::not_found(format!("Counter with id {} not found", counter_id))
            })?;

        counter.increment(steps)?;
        self.counters.update(&counter).await?;
        Ok(counter)
    }

    /// All counters owned by a team, in storage order
    ///
    /// Fails with `NotFound` if the team does not exist; an existing team
    /// without counters yields an empty list.
    pub async fn counters_by_team(&self, team_id: i64) -> DomainResult<Vec<CounterSummary>> {
        self.require_team(team_id).await?;
        self.counters.find_by_team(team_id).await
    }

    /// Deletes a counter, leaving its team intact
    ///
    /// Fails with `NotFound` if the counter does not exist.
    pub async fn delete_counter(&self, counter_id: i64) -> DomainResult<()> {
        self.counters
            .find_by_id(counter_id)
            .await?
            .ok_or_else(|| {
                DomainError::not_found(format!("Counter with id {} not found", counter_id))
            })?;
        self.counters.delete(counter_id).await?;
        tracing::info!(counter_id, "counter deleted");
        Ok(())
    }

    async fn require_team(&self, team_id: i64) -> DomainResult<()> {
        self.teams
            .find_by_id(team_id)
            .await?
            .map(|_| ())
            .ok_or_else(|| DomainError::not_found(format!("Team with id {} not found", team_id)))
    }
}
