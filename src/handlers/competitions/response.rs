//! Competition response DTOs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use crate::{competition::CompetitionStatus, models::CompetitionResult};

/// Competition overview with status and aggregate progress
#[derive(Debug, Serialize)]
pub struct CompetitionOverviewResponse {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub host_id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: CompetitionStatus,
    pub status_label: String,
    pub duration_days: i64,
    pub days_until_start: i64,
    pub days_remaining: i64,
    pub countdown: String,
    /// Precise time until the next status change, absent once finished
    pub time_left: Option<String>,
    pub goal_value: Decimal,
    pub total_goal: Decimal,
    pub total_income: Decimal,
    pub remaining: Decimal,
    pub percent: Decimal,
    pub goal_reached: bool,
    pub prize_value: Decimal,
    pub allow_teams: bool,
    pub max_members: Option<i32>,
    pub member_count: usize,
    pub competitor_count: usize,
    pub spectator_count: usize,
    pub team_count: usize,
    pub display: OverviewDisplay,
}

/// Preformatted strings for the overview card
#[derive(Debug, Serialize)]
pub struct OverviewDisplay {
    pub goal_value: String,
    pub total_goal: String,
    pub total_income: String,
    pub remaining: String,
    pub percent: String,
    pub prize_value: String,
}

/// Ranked leaderboard of a competition
#[derive(Debug, Serialize)]
pub struct LeaderboardResponse {
    pub competition_id: Uuid,
    pub status: CompetitionStatus,
    pub goal_value: Decimal,
    pub members: Vec<MemberStandingResponse>,
    pub teams: Vec<TeamStandingResponse>,
}

/// Leaderboard row of one competitor
#[derive(Debug, Serialize)]
pub struct MemberStandingResponse {
    pub position: usize,
    pub user_id: Uuid,
    pub display_name: String,
    pub team_id: Option<Uuid>,
    pub total_income: Decimal,
    pub percent: Decimal,
    pub total_income_display: String,
    pub percent_display: String,
}

/// Leaderboard row of one team
#[derive(Debug, Serialize)]
pub struct TeamStandingResponse {
    pub position: usize,
    pub team_id: Uuid,
    pub team_name: String,
    pub member_count: usize,
    pub total_income: Decimal,
    pub team_goal: Decimal,
    pub percent: Decimal,
    pub total_income_display: String,
    pub percent_display: String,
}

/// Previewed outcome of a competition
#[derive(Debug, Serialize)]
pub struct ResultPreviewResponse {
    pub competition_id: Uuid,
    pub status: CompetitionStatus,
    /// True once the window closed; the backend may then finalize
    pub is_final: bool,
    #[serde(flatten)]
    pub result: CompetitionResult,
    pub winner_name: Option<String>,
    pub payouts: Vec<PayoutResponse>,
}

/// Prize share of one driver
#[derive(Debug, Serialize)]
pub struct PayoutResponse {
    pub user_id: Uuid,
    pub display_name: String,
    pub amount: Decimal,
    pub amount_display: String,
}

/// What a given user may do in a competition
#[derive(Debug, Serialize)]
pub struct PermissionsResponse {
    pub competition_id: Uuid,
    pub user_id: Uuid,
    pub is_member: bool,
    pub is_host: bool,
    pub can_join: bool,
    pub can_edit: bool,
    pub can_toggle_competitor: bool,
}

/// Normalized competition draft
#[derive(Debug, Serialize)]
pub struct CompetitionDraftResponse {
    pub name: String,
    pub description: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub duration_days: i64,
    pub goal_value: Decimal,
    pub prize_value: Decimal,
    pub allow_teams: bool,
    pub max_members: Option<u32>,
    /// Status the competition would have right now
    pub status: CompetitionStatus,
}
