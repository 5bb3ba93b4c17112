//! Competition member repository

use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{CompetitionMember, MemberRole},
};

/// Raw member row; `role` is stored as text
#[derive(Debug, FromRow)]
struct MemberRow {
    user_id: Uuid,
    competition_id: Uuid,
    display_name: String,
    role: String,
    is_competitor: bool,
    team_id: Option<Uuid>,
    team_name: Option<String>,
}

impl TryFrom<MemberRow> for CompetitionMember {
    type Error = AppError;

    fn try_from(row: MemberRow) -> Result<Self, Self::Error> {
        let role: MemberRole = row.role.parse().map_err(AppError::Database)?;

        Ok(Self {
            user_id: row.user_id,
            competition_id: row.competition_id,
            display_name: row.display_name,
            role,
            is_competitor: row.is_competitor,
            team_id: row.team_id,
            team_name: row.team_name,
        })
    }
}

/// Repository for competition membership reads
pub struct MemberRepository;

impl MemberRepository {
    /// List all members of a competition, spectators included
    pub async fn list_by_competition(
        pool: &PgPool,
        competition_id: &Uuid,
    ) -> AppResult<Vec<CompetitionMember>> {
        let rows = sqlx::query_as::<_, MemberRow>(
            r#"
            SELECT
                cm.user_id,
                cm.competition_id,
                COALESCE(p.display_name, p.full_name, 'Driver') AS display_name,
                cm.role,
                cm.is_competitor,
                cm.team_id,
                t.name AS team_name
            FROM competition_members cm
            LEFT JOIN profiles p ON p.id = cm.user_id
            LEFT JOIN competition_teams t ON t.id = cm.team_id
            WHERE cm.competition_id = $1
            ORDER BY cm.joined_at
            "#,
        )
        .bind(competition_id)
        .fetch_all(pool)
        .await?;

        rows.into_iter().map(CompetitionMember::try_from).collect()
    }
}
