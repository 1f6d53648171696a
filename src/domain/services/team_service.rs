use std::sync::Arc;

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::repositories::{CounterRepository, TeamRepository, TeamStepsSummary};
use crate::domain::team::{NewTeam, Team};

/// Orchestrates team lifecycle operations over the persistence ports
///
/// Holds its repositories as trait objects so adapters can be swapped
/// (Postgres in production, in-memory in tests) without touching the
/// service logic.
pub struct TeamService {
    teams: Arc<dyn TeamRepository>,
    counters: Arc<dyn CounterRepository>,
}

impl TeamService {
    pub fn new(teams: Arc<dyn TeamRepository>, counters: Arc<dyn CounterRepository>) -> Self {
        Self { teams, counters }
    }

    /// Creates and persists a new team with an empty counter set
    ///
    /// Fails with `Validation` if the name is empty or longer than 255
    /// characters.
    pub async fn create_team(&self, name: &str) -> DomainResult<Team> {
        let draft = NewTeam::new(name)?;
        let team = self.teams.insert(&draft).await?;
        tracing::info!(team_id = team.id(), "team created");
        Ok(team)
    }

    /// Sum of step counts over all counters owned by the team
    ///
    /// Returns 0 for a team without counters. Fails with `NotFound` if no
    /// team with `team_id` exists.
    pub async fn total_steps_by_team(&self, team_id: i64) -> DomainResult<i64> {
        self.require_team(team_id).await?;
        let counters = self.counters.find_by_team(team_id).await?;
        Ok(counters.iter().map(|c| c.step_count).sum())
    }

    /// All teams with their aggregate step totals, in storage order
    ///
    /// Teams without counters appear with a total of 0.
    pub async fn all_teams_with_step_counts(&self) -> DomainResult<Vec<TeamStepsSummary>> {
        self.teams.aggregate_steps_per_team().await
    }

    /// Deletes a team and cascades to all of its counters
    ///
    /// Fails with `NotFound` if the team does not exist; a second delete of
    /// the same id therefore also fails with `NotFound`.
    pub async fn delete_team(&self, team_id: i64) -> DomainResult<()> {
        self.require_team(team_id).await?;
        self.teams.delete(team_id).await?;
        tracing::info!(team_id, "team deleted");
        Ok(())
    }

    async fn require_team(&self, team_id: i64) -> DomainResult<Team> {
        self.teams
            .find_by_id(team_id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("Team with id {} not found", team_id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::counter::NewCounter;
    use crate::infrastructure::repositories::{InMemoryCounterRepository, InMemoryStore};

    fn service() -> (TeamService, Arc<InMemoryCounterRepository>) {
        let store = InMemoryStore::new();
        let counters = Arc::new(store.counter_repository());
        let service = TeamService::new(Arc::new(store.team_repository()), counters.clone());
        (service, counters)
    }

    #[tokio::test]
    async fn create_team_assigns_fresh_id_and_keeps_name() {
        let (service, _) = service();

        let a = service.create_team("Alpha").await.unwrap();
        let b = service.create_team("Beta").await.unwrap();

        assert_eq!(a.name(), "Alpha");
        assert_eq!(b.name(), "Beta");
        assert_ne!(a.id(), b.id());
    }

    #[tokio::test]
    async fn create_team_rejects_empty_name() {
        let (service, _) = service();
        let result = service.create_team("").await;
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[tokio::test]
    async fn total_steps_is_zero_for_team_without_counters() {
        let (service, _) = service();
        let team = service.create_team("Alpha").await.unwrap();
        assert_eq!(service.total_steps_by_team(team.id()).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn total_steps_sums_all_counters() {
        let (service, counters) = service();
        let team = service.create_team("Alpha").await.unwrap();
        counters
            .insert(&NewCounter::new(team.id(), "A", 7).unwrap())
            .await
            .unwrap();
        counters
            .insert(&NewCounter::new(team.id(), "B", 5).unwrap())
            .await
            .unwrap();

        assert_eq!(service.total_steps_by_team(team.id()).await.unwrap(), 12);
    }

    #[tokio::test]
    async fn total_steps_for_missing_team_is_not_found() {
        let (service, _) = service();
        let result = service.total_steps_by_team(42).await;
        assert!(matches!(result, Err(DomainError::NotFound(_))));
    }

    #[tokio::test]
    async fn all_teams_with_step_counts_includes_counterless_teams() {
        let (service, counters) = service();
        let t1 = service.create_team("T1").await.unwrap();
        let t2 = service.create_team("T2").await.unwrap();
        counters
            .insert(&NewCounter::new(t2.id(), "C", 7).unwrap())
            .await
            .unwrap();

        let mut rows = service.all_teams_with_step_counts().await.unwrap();
        rows.sort_by_key(|r| r.id);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].id, t1.id());
        assert_eq!(rows[0].name, "T1");
        assert_eq!(rows[0].total_steps, 0);
        assert_eq!(rows[1].id, t2.id());
        assert_eq!(rows[1].total_steps, 7);
    }

    #[tokio::test]
    async fn aggregate_agrees_with_per_team_total() {
        let (service, counters) = service();
        let team = service.create_team("Alpha").await.unwrap();
        counters
            .insert(&NewCounter::new(team.id(), "A", 3).unwrap())
            .await
            .unwrap();
        counters
            .insert(&NewCounter::new(team.id(), "B", 9).unwrap())
            .await
            .unwrap();

        let total = service.total_steps_by_team(team.id()).await.unwrap();
        let rows = service.all_teams_with_step_counts().await.unwrap();
        let row = rows.iter().find(|r| r.id == team.id()).unwrap();

        assert_eq!(total, row.total_steps);
    }

    #[tokio::test]
    async fn delete_team_cascades_to_counters() {
        let (service, counters) = service();
        let team = service.create_team("Alpha").await.unwrap();
        let counter = counters
            .insert(&NewCounter::new(team.id(), "A", 3).unwrap())
            .await
            .unwrap();

        service.delete_team(team.id()).await.unwrap();

        assert!(counters.find_by_id(counter.id()).await.unwrap().is_none());
        let result = service.total_steps_by_team(team.id()).await;
        assert!(matches!(result, Err(DomainError::NotFound(_))));
    }

    #[tokio::test]
    async fn second_delete_of_same_team_is_not_found() {
        let (service, _) = service();
        let team = service.create_team("Alpha").await.unwrap();

        service.delete_team(team.id()).await.unwrap();
        let result = service.delete_team(team.id()).await;

        assert!(matches!(result, Err(DomainError::NotFound(_))));
    }
}
