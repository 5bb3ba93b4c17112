//! Goal and progress math
//!
//! Amounts are exact decimals, so income that matches the goal to the cent
//! always counts as reaching it.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::constants::GOAL_REACHED_PERCENT;
use crate::models::RankingMember;

/// Progress of an amount of income toward a goal
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Progress {
    pub total_income: Decimal,
    pub total_goal: Decimal,
    /// Clamped to `[0, 100]` and rounded to two places for display
    pub percent: Decimal,
    /// Unclamped
    pub raw_percent: Decimal,
    pub remaining: Decimal,
}

impl Progress {
    /// Reaching exactly 100% counts as success
    pub fn goal_reached(&self) -> bool {
        self.total_goal > Decimal::ZERO && self.total_income >= self.total_goal
    }
}

/// Compute progress of `total_income` toward `individual_goal` scaled by
/// the number of active participants.
///
/// A goal of zero or less gives a total goal of zero and 0%.
pub fn compute_progress(
    total_income: Decimal,
    individual_goal: Decimal,
    active_participants: usize,
) -> Progress {
    let total_goal = if individual_goal > Decimal::ZERO {
        individual_goal
            .checked_mul(Decimal::from(active_participants))
            .unwrap_or(Decimal::MAX)
    } else {
        Decimal::ZERO
    };

    // Zero participants also collapses the goal to zero
    let raw_percent = if total_goal > Decimal::ZERO {
        total_income
            .checked_div(total_goal)
            .and_then(|fraction| fraction.checked_mul(GOAL_REACHED_PERCENT))
            .unwrap_or(Decimal::MAX)
    } else {
        Decimal::ZERO
    };

    Progress {
        total_income,
        total_goal,
        percent: raw_percent
            .clamp(Decimal::ZERO, GOAL_REACHED_PERCENT)
            .round_dp(2),
        raw_percent,
        remaining: (total_goal - total_income).max(Decimal::ZERO),
    }
}

/// Progress of one competitor toward the individual goal
pub fn member_progress(member: &RankingMember, individual_goal: Decimal) -> Progress {
    compute_progress(member.total_income, individual_goal, 1)
}

/// Sum of income across competitors
pub fn total_income(members: &[RankingMember]) -> Decimal {
    members.iter().map(|m| m.total_income).sum()
}
