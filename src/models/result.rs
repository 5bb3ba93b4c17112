//! Competition result models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::winner_types;

/// Winner class of a competition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WinnerType {
    Individual,
    Team,
    None,
}

impl std::fmt::Display for WinnerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Individual => winner_types::INDIVIDUAL,
            Self::Team => winner_types::TEAM,
            Self::None => winner_types::NONE,
        };
        write!(f, "{}", s)
    }
}

/// Outcome of a competition, previewed before the backend finalizes it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetitionResult {
    pub meta_reached: bool,
    pub winner_type: WinnerType,
    pub winner_user_id: Option<Uuid>,
    pub winner_team_id: Option<Uuid>,
    pub winner_total: Decimal,
}

impl CompetitionResult {
    /// Result for a competition that ended without a winner
    pub fn no_winner(meta_reached: bool) -> Self {
        Self {
            meta_reached,
            winner_type: WinnerType::None,
            winner_user_id: None,
            winner_team_id: None,
            winner_total: Decimal::ZERO,
        }
    }
}

/// Prize share owed to one driver
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payout {
    pub user_id: Uuid,
    pub amount: Decimal,
}
