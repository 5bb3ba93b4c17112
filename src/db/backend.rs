//! Backend collaborator
//!
//! The backend database owns every persisted row. The service reads
//! snapshots through this trait so the engine never touches the pool.

use std::collections::HashMap;

use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{Competition, CompetitionMember, DateRange},
};

use super::repositories::{CompetitionRepository, IncomeRepository, MemberRepository};

/// Read access to competition snapshots
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompetitionBackend: Send + Sync {
    /// Load a competition, `None` when it does not exist
    async fn fetch_competition(&self, id: Uuid) -> AppResult<Option<Competition>>;

    /// All members of a competition, spectators included
    async fn fetch_members(&self, competition_id: Uuid) -> AppResult<Vec<CompetitionMember>>;

    /// Total income of one driver over an inclusive date range
    async fn fetch_income_total(&self, user_id: Uuid, range: DateRange) -> AppResult<Decimal>;

    /// Totals for several drivers; drivers without income may be absent
    async fn fetch_income_totals(
        &self,
        user_ids: &[Uuid],
        range: DateRange,
    ) -> AppResult<HashMap<Uuid, Decimal>> {
        let mut totals = HashMap::with_capacity(user_ids.len());
        for user_id in user_ids {
            totals.insert(*user_id, self.fetch_income_total(*user_id, range).await?);
        }
        Ok(totals)
    }
}

/// Postgres implementation backed by the shared pool
#[derive(Clone)]
pub struct PgCompetitionBackend {
    pool: PgPool,
}

impl PgCompetitionBackend {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CompetitionBackend for PgCompetitionBackend {
    async fn fetch_competition(&self, id: Uuid) -> AppResult<Option<Competition>> {
        CompetitionRepository::find_by_id(&self.pool, &id).await
    }

    async fn fetch_members(&self, competition_id: Uuid) -> AppResult<Vec<CompetitionMember>> {
        MemberRepository::list_by_competition(&self.pool, &competition_id).await
    }

    async fn fetch_income_total(&self, user_id: Uuid, range: DateRange) -> AppResult<Decimal> {
        IncomeRepository::total_for_user(&self.pool, &user_id, range).await
    }

    async fn fetch_income_totals(
        &self,
        user_ids: &[Uuid],
        range: DateRange,
    ) -> AppResult<HashMap<Uuid, Decimal>> {
        IncomeRepository::totals_for_users(&self.pool, user_ids, range).await
    }
}
