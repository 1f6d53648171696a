use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::counter::{Counter, NewCounter};
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::repositories::{CounterRepository, CounterSummary};

#[derive(sqlx::FromRow)]
struct CounterRow {
    id: i64,
    team_id: i64,
    name: String,
    step_count: i64,
}

impl From<CounterRow> for Counter {
    fn from(row: CounterRow) -> Self {
        Counter::from_persistence(row.id, row.team_id, row.name, row.step_count)
    }
}

/// PostgreSQL implementation of CounterRepository
pub struct PostgresCounterRepository {
    pool: PgPool,
}

impl PostgresCounterRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CounterRepository for PostgresCounterRepository {
    async fn insert(&self, counter: &NewCounter) -> DomainResult<Counter> {
        let row: CounterRow = sqlx::query_as(
            r#"
            INSERT INTO counters (team_id, name, step_count)
            VALUES ($1, $2, $3)
            RETURNING id, team_id, name, step_count
            "#,
        )
        .bind(counter.team_id())
        .bind(counter.name())
        .bind(counter.step_count())
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Counter>> {
        let row: Option<CounterRow> = sqlx::query_as(
            r#"
            SELECT id, team_id, name, step_count
            FROM counters
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Counter::from))
    }

    async fn update(&self, counter: &Counter) -> DomainResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE counters
            SET step_count = $2
            WHERE id = $1
            "#,
        )
        .bind(counter.id())
        .bind(counter.step_count())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found(format!(
                "Counter with id {} not found",
                counter.id()
            )));
        }

        Ok(())
    }

    async fn delete(&self, id: i64) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM counters WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found(format!(
                "Counter with id {} not found",
                id
            )));
        }

        Ok(())
    }

    async fn find_by_team(&self, team_id: i64) -> DomainResult<Vec<CounterSummary>> {
        let rows: Vec<CounterSummary> = sqlx::query_as(
            r#"
            SELECT id, name, step_count
            FROM counters
            WHERE team_id = $1
            ORDER BY id
            "#,
        )
        .bind(team_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}
