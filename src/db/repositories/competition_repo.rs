//! Competition repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::{error::AppResult, models::Competition};

/// Repository for competition reads
pub struct CompetitionRepository;

impl CompetitionRepository {
    /// Find competition by ID
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<Competition>> {
        let competition = sqlx::query_as::<_, Competition>(
            r#"
            SELECT
                id,
                name,
                description,
                host_id,
                start_date,
                end_date,
                goal_value::numeric AS goal_value,
                COALESCE(prize_value, 0)::numeric AS prize_value,
                allow_teams,
                max_members
            FROM competitions
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(competition)
    }
}
