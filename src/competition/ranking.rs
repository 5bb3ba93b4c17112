//! Leaderboard ordering
//!
//! Members and teams are ordered by progress fraction (descending), then
//! absolute income (descending), then name (ascending). Sorting is stable,
//! so rows equal on all three keys keep their input order.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use crate::models::{RankingMember, TeamStanding};

use super::progress::member_progress;

/// Fraction of the goal covered by `income`; 0 when the goal is not positive
fn goal_fraction(income: Decimal, goal: Decimal) -> Decimal {
    if goal > Decimal::ZERO {
        income.checked_div(goal).unwrap_or(Decimal::MAX)
    } else {
        Decimal::ZERO
    }
}

fn compare_keys(
    (fraction_a, income_a, name_a): (Decimal, Decimal, &str),
    (fraction_b, income_b, name_b): (Decimal, Decimal, &str),
) -> Ordering {
    fraction_b
        .cmp(&fraction_a)
        .then_with(|| income_b.cmp(&income_a))
        .then_with(|| name_a.cmp(name_b))
}

fn member_keys(member: &RankingMember, goal_value: Decimal) -> (Decimal, Decimal, &str) {
    (
        goal_fraction(member.total_income, goal_value),
        member.total_income,
        member.display_name.as_str(),
    )
}

fn team_keys(team: &TeamStanding, goal_value: Decimal) -> (Decimal, Decimal, &str) {
    let team_goal = goal_value
        .checked_mul(Decimal::from(team.member_ids.len()))
        .unwrap_or(Decimal::MAX);
    (
        goal_fraction(team.total_income, team_goal),
        team.total_income,
        team.team_name.as_str(),
    )
}

/// Order competitors for the leaderboard
pub fn rank_members(mut members: Vec<RankingMember>, goal_value: Decimal) -> Vec<RankingMember> {
    members.sort_by(|a, b| compare_keys(member_keys(a, goal_value), member_keys(b, goal_value)));
    members
}

/// Order teams; each team's goal is `goal_value` times its member count
pub fn rank_teams(mut teams: Vec<TeamStanding>, goal_value: Decimal) -> Vec<TeamStanding> {
    teams.sort_by(|a, b| compare_keys(team_keys(a, goal_value), team_keys(b, goal_value)));
    teams
}

/// Group competitors that belong to a team into team standings.
///
/// Competitors without a team are left out. Output order follows team id
/// and must be ranked with [`rank_teams`] before display.
pub fn build_team_standings(members: &[RankingMember]) -> Vec<TeamStanding> {
    let mut teams: BTreeMap<Uuid, TeamStanding> = BTreeMap::new();

    for member in members {
        let Some(team_id) = member.team_id else {
            continue;
        };
        let standing = teams.entry(team_id).or_insert_with(|| TeamStanding {
            team_id,
            team_name: member.team_name.clone().unwrap_or_default(),
            member_ids: Vec::new(),
            total_income: Decimal::ZERO,
        });
        standing.member_ids.push(member.user_id);
        standing.total_income += member.total_income;
    }

    teams.into_values().collect()
}

/// A ranked leaderboard row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaderboardEntry {
    /// 1-based; rows equal on every key share a position
    pub position: usize,
    pub user_id: Uuid,
    pub display_name: String,
    pub team_id: Option<Uuid>,
    pub total_income: Decimal,
    pub percent: Decimal,
}

/// Attach positions and individual progress to already ranked members
pub fn leaderboard(ranked: &[RankingMember], goal_value: Decimal) -> Vec<LeaderboardEntry> {
    let mut entries: Vec<LeaderboardEntry> = Vec::with_capacity(ranked.len());

    for (index, member) in ranked.iter().enumerate() {
        let position = match index.checked_sub(1).map(|prev| &ranked[prev]) {
            Some(prev)
                if compare_keys(member_keys(prev, goal_value), member_keys(member, goal_value))
                    == Ordering::Equal =>
            {
                entries[index - 1].position
            }
            _ => index + 1,
        };

        entries.push(LeaderboardEntry {
            position,
            user_id: member.user_id,
            display_name: member.display_name.clone(),
            team_id: member.team_id,
            total_income: member.total_income,
            percent: member_progress(member, goal_value).percent,
        });
    }

    entries
}
