//! Competition handler implementations

use axum::{
    extract::{Path, Query, State},
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::{AppError, AppErrorWithDetails, AppResult},
    services::CompetitionService,
    state::AppState,
};

use super::{
    request::{PermissionsQuery, ValidateCompetitionRequest},
    response::{
        CompetitionDraftResponse, CompetitionOverviewResponse, LeaderboardResponse,
        PermissionsResponse, ResultPreviewResponse,
    },
};

/// Get a competition overview
pub async fn get_competition(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<CompetitionOverviewResponse>> {
    let overview = CompetitionService::overview(state.backend(), id, state.now_local()).await?;
    Ok(Json(overview))
}

/// Get member and team leaderboards
pub async fn get_leaderboard(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<LeaderboardResponse>> {
    let leaderboard =
        CompetitionService::leaderboard(state.backend(), id, state.now_local()).await?;
    Ok(Json(leaderboard))
}

/// Preview the winner and payouts
pub async fn get_result_preview(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ResultPreviewResponse>> {
    let preview =
        CompetitionService::result_preview(state.backend(), id, state.now_local()).await?;
    Ok(Json(preview))
}

/// Get what a user may do in a competition
pub async fn get_permissions(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<PermissionsQuery>,
) -> AppResult<Json<PermissionsResponse>> {
    let permissions =
        CompetitionService::permissions(state.backend(), id, query.user_id, state.now_local())
            .await?;
    Ok(Json(permissions))
}

/// Validate a competition draft
pub async fn validate_competition(
    State(state): State<AppState>,
    Json(payload): Json<ValidateCompetitionRequest>,
) -> Result<Json<CompetitionDraftResponse>, AppErrorWithDetails> {
    if let Err(errors) = payload.validate() {
        let details = serde_json::to_value(&errors).unwrap_or_default();
        return Err(AppError::from(errors).with_details(details));
    }

    let draft = CompetitionService::validate_draft(payload, state.now_local())?;
    Ok(Json(draft))
}
