//! Winner determination and payout preview
//!
//! The backend finalizes results once a competition finishes. The functions
//! here compute the same outcome ahead of time for display.

use std::cmp::Ordering;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::constants::CENT;
use crate::models::{
    Competition, CompetitionResult, Payout, RankingMember, TeamStanding, WinnerType,
};

use super::progress::{compute_progress, total_income};

fn by_absolute_income(
    income_a: Decimal,
    name_a: &str,
    income_b: Decimal,
    name_b: &str,
) -> Ordering {
    income_b.cmp(&income_a).then_with(|| name_a.cmp(name_b))
}

/// Determine the outcome of a competition from its competitors.
///
/// The goal is met when the competitors' combined income reaches
/// `goal_value` times the number of competitors. Winners are picked by
/// absolute income, not by percentage: teams compete when the
/// competition allows them and at least one team exists.
pub fn determine_result(
    competition: &Competition,
    members: &[RankingMember],
    teams: &[TeamStanding],
) -> CompetitionResult {
    let progress = compute_progress(total_income(members), competition.goal_value, members.len());
    let meta_reached = progress.goal_reached();

    if !meta_reached {
        return CompetitionResult::no_winner(false);
    }

    if competition.allow_teams && !teams.is_empty() {
        let winner = teams.iter().min_by(|a, b| {
            by_absolute_income(a.total_income, &a.team_name, b.total_income, &b.team_name)
        });
        if let Some(team) = winner {
            return CompetitionResult {
                meta_reached,
                winner_type: WinnerType::Team,
                winner_user_id: None,
                winner_team_id: Some(team.team_id),
                winner_total: team.total_income,
            };
        }
    }

    let winner = members.iter().min_by(|a, b| {
        by_absolute_income(a.total_income, &a.display_name, b.total_income, &b.display_name)
    });

    match winner {
        Some(member) => CompetitionResult {
            meta_reached,
            winner_type: WinnerType::Individual,
            winner_user_id: Some(member.user_id),
            winner_team_id: None,
            winner_total: member.total_income,
        },
        None => CompetitionResult::no_winner(meta_reached),
    }
}

/// Split the prize according to a result.
///
/// An individual winner takes the whole prize. A winning team splits it
/// equally among its competitors, each share truncated to the cent; the
/// leftover cents go one by one to the first members in `ranked` order, so
/// the shares always add up to the prize.
pub fn preview_payouts(
    competition: &Competition,
    result: &CompetitionResult,
    ranked: &[RankingMember],
) -> Vec<Payout> {
    let prize = competition
        .prize_value
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    if !result.meta_reached || prize <= Decimal::ZERO {
        return Vec::new();
    }

    let recipients: Vec<&RankingMember> = match result.winner_type {
        WinnerType::Individual => ranked
            .iter()
            .filter(|m| Some(m.user_id) == result.winner_user_id)
            .take(1)
            .collect(),
        WinnerType::Team => ranked
            .iter()
            .filter(|m| m.team_id.is_some() && m.team_id == result.winner_team_id)
            .collect(),
        WinnerType::None => Vec::new(),
    };

    if recipients.is_empty() {
        return Vec::new();
    }

    let count = Decimal::from(recipients.len());
    let share = (prize / count).round_dp_with_strategy(2, RoundingStrategy::ToZero);
    let mut leftover = prize - share * count;

    recipients
        .into_iter()
        .map(|member| {
            let mut amount = share;
            if leftover >= CENT {
                amount += CENT;
                leftover -= CENT;
            }
            Payout {
                user_id: member.user_id,
                amount,
            }
        })
        .collect()
}
