//! Income repository

use std::collections::HashMap;

use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{error::AppResult, models::DateRange};

/// Repository for income aggregates
pub struct IncomeRepository;

impl IncomeRepository {
    /// Total income of one driver over an inclusive date range
    pub async fn total_for_user(
        pool: &PgPool,
        user_id: &Uuid,
        range: DateRange,
    ) -> AppResult<Decimal> {
        let total: Decimal = sqlx::query_scalar(
            r#"
            SELECT COALESCE(SUM(amount), 0)::numeric
            FROM income_entries
            WHERE user_id = $1 AND entry_date >= $2 AND entry_date <= $3
            "#,
        )
        .bind(user_id)
        .bind(range.start)
        .bind(range.end)
        .fetch_one(pool)
        .await?;

        Ok(total)
    }

    /// Totals for several drivers at once; drivers without entries are absent
    pub async fn totals_for_users(
        pool: &PgPool,
        user_ids: &[Uuid],
        range: DateRange,
    ) -> AppResult<HashMap<Uuid, Decimal>> {
        if user_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows: Vec<(Uuid, Decimal)> = sqlx::query_as(
            r#"
            SELECT user_id, COALESCE(SUM(amount), 0)::numeric AS total_income
            FROM income_entries
            WHERE user_id = ANY($1) AND entry_date >= $2 AND entry_date <= $3
            GROUP BY user_id
            "#,
        )
        .bind(user_ids)
        .bind(range.start)
        .bind(range.end)
        .fetch_all(pool)
        .await?;

        Ok(rows.into_iter().collect())
    }
}
