use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::repositories::{TeamRepository, TeamStepsSummary};
use crate::domain::team::{NewTeam, Team};

#[derive(sqlx::FromRow)]
struct TeamRow {
    id: i64,
    name: String,
}

impl From<TeamRow> for Team {
    fn from(row: TeamRow) -> Self {
        Team::from_persistence(row.id, row.name)
    }
}

/// PostgreSQL implementation of TeamRepository
///
/// Ids come from the `teams` BIGSERIAL column; the cascade from team to
/// counters is enforced by the `ON DELETE CASCADE` foreign key.
pub struct PostgresTeamRepository {
    pool: PgPool,
}

impl PostgresTeamRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TeamRepository for PostgresTeamRepository {
    async fn insert(&self, team: &NewTeam) -> DomainResult<Team> {
        let row: TeamRow = sqlx::query_as(
            r#"
            INSERT INTO teams (name)
            VALUES ($1)
            RETURNING id, name
            "#,
        )
        .bind(team.name())
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Team>> {
        let row: Option<TeamRow> = sqlx::query_as(
            r#"
            SELECT id, name
            FROM teams
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Team::from))
    }

    async fn delete(&self, id: i64) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM teams WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found(format!(
                "Team with id {} not found",
                id
            )));
        }

        Ok(())
    }

    async fn aggregate_steps_per_team(&self) -> DomainResult<Vec<TeamStepsSummary>> {
        // SUM over BIGINT yields NUMERIC, hence the cast back
        let rows: Vec<TeamStepsSummary> = sqlx::query_as(
            r#"
            SELECT t.id, t.name, COALESCE(SUM(c.step_count), 0)::BIGINT AS total_steps
            FROM teams t
            LEFT JOIN counters c ON c.team_id = t.id
            GROUP BY t.id, t.name
            ORDER BY t.id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}
