//! Competition request DTOs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::constants::{MAX_COMPETITION_DESCRIPTION_LENGTH, MAX_COMPETITION_NAME_LENGTH};

/// Draft of a competition a host is about to create or edit
#[derive(Debug, Deserialize, Validate)]
pub struct ValidateCompetitionRequest {
    #[validate(length(min = 1, max = MAX_COMPETITION_NAME_LENGTH))]
    pub name: String,

    #[validate(length(max = MAX_COMPETITION_DESCRIPTION_LENGTH))]
    pub description: Option<String>,

    /// First day of the competition
    pub start_date: NaiveDate,

    /// Last day of the competition (inclusive)
    pub end_date: NaiveDate,

    /// Revenue goal per participant
    pub goal_value: Decimal,

    /// Checked in draft validation, absent means no prize
    pub prize_value: Option<Decimal>,

    pub allow_teams: Option<bool>,

    /// Member cap, 0 or absent for unlimited
    pub max_members: Option<u32>,
}

/// Query for membership permissions
#[derive(Debug, Deserialize)]
pub struct PermissionsQuery {
    pub user_id: Uuid,
}
