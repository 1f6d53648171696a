use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::counter::{Counter, NewCounter};
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::repositories::{
    CounterRepository, CounterSummary, TeamRepository, TeamStepsSummary,
};
use crate::domain::team::{NewTeam, Team};

#[derive(Default)]
struct StoreInner {
    teams: BTreeMap<i64, Team>,
    counters: BTreeMap<i64, Counter>,
    next_team_id: i64,
    next_counter_id: i64,
}

/// In-memory storage backing both persistence ports
///
/// Used by the test suite and handy for local development without a
/// database. A single store is shared by its team and counter handles, so
/// cascading deletes see both tables.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    inner: Arc<Mutex<StoreInner>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Team port over this store
    pub fn team_repository(&self) -> InMemoryTeamRepository {
        InMemoryTeamRepository {
            store: self.clone(),
        }
    }

    /// Counter port over this store
    pub fn counter_repository(&self) -> InMemoryCounterRepository {
        InMemoryCounterRepository {
            store: self.clone(),
        }
    }

    fn lock(&self) -> DomainResult<MutexGuard<'_, StoreInner>> {
        self.inner
            .lock()
            .map_err(|_| DomainError::Storage("in-memory store lock poisoned".to_string()))
    }
}

/// [`TeamRepository`] adapter over an [`InMemoryStore`]
#[derive(Clone)]
pub struct InMemoryTeamRepository {
    store: InMemoryStore,
}

#[async_trait]
impl TeamRepository for InMemoryTeamRepository {
    async fn insert(&self, team: &NewTeam) -> DomainResult<Team> {
        let mut inner = self.store.lock()?;
        inner.next_team_id += 1;
        let id = inner.next_team_id;
        let team = Team::from_persistence(id, team.name().to_string());
        inner.teams.insert(id, team.clone());
        Ok(team)
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Team>> {
        let inner = self.store.lock()?;
        Ok(inner.teams.get(&id).cloned())
    }

    async fn delete(&self, id: i64) -> DomainResult<()> {
        let mut inner = self.store.lock()?;
        if inner.teams.remove(&id).is_none() {
            return Err(DomainError::not_found(format!(
                "Team with id {} not found",
                id
            )));
        }
        // cascade, matching the foreign key behavior of the SQL schema
        inner.counters.retain(|_, counter| counter.team_id() != id);
        Ok(())
    }

    async fn aggregate_steps_per_team(&self) -> DomainResult<Vec<TeamStepsSummary>> {
        let inner = self.store.lock()?;
        Ok(inner
            .teams
            .values()
            .map(|team| TeamStepsSummary {
                id: team.id(),
                name: team.name().to_string(),
                total_steps: inner
                    .counters
                    .values()
                    .filter(|counter| counter.team_id() == team.id())
                    .map(Counter::step_count)
                    .sum(),
            })
            .collect())
    }
}

/// [`CounterRepository`] adapter over an [`InMemoryStore`]
#[derive(Clone)]
pub struct InMemoryCounterRepository {
    store: InMemoryStore,
}

#[async_trait]
impl CounterRepository for InMemoryCounterRepository {
    async fn insert(&self, counter: &NewCounter) -> DomainResult<Counter> {
        let mut inner = self.store.lock()?;
        // same failure a foreign key violation would produce
        if !inner.teams.contains_key(&counter.team_id()) {
            return Err(DomainError::Storage(format!(
                "no team with id {} to attach counter to",
                counter.team_id()
            )));
        }
        inner.next_counter_id += 1;
        let id = inner.next_counter_id;
        let counter = Counter::from_persistence(
            id,
            counter.team_id(),
            counter.name().to_string(),
            counter.step_count(),
        );
        inner.counters.insert(id, counter.clone());
        Ok(counter)
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Counter>> {
        let inner = self.store.lock()?;
        Ok(inner.counters.get(&id).cloned())
    }

    async fn update(&self, counter: &Counter) -> DomainResult<()> {
        let mut inner = self.store.lock()?;
        match inner.counters.get_mut(&counter.id()) {
            Some(stored) => {
                *stored = counter.clone();
                Ok(())
            }
            None => Err(DomainError::not_found(format!(
                "Counter with id {} not found",
                counter.id()
            ))),
        }
    }

    async fn delete(&self, id: i64) -> DomainResult<()> {
        let mut inner = self.store.lock()?;
        if inner.counters.remove(&id).is_none() {
            return Err(DomainError::not_found(format!(
                "Counter with id {} not found",
                id
            )));
        }
        Ok(())
    }

    async fn find_by_team(&self, team_id: i64) -> DomainResult<Vec<CounterSummary>> {
        let inner = self.store.lock()?;
        Ok(inner
            .counters
            .values()
            .filter(|counter| counter.team_id() == team_id)
            .map(|counter| CounterSummary {
                id: counter.id(),
                name: counter.name().to_string(),
                step_count: counter.step_count(),
            })
            .collect())
    }
}
