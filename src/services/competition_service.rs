//! Competition service
//!
//! Loads competition snapshots from the backend and runs them through the
//! engine to build view models. Every read is fresh; nothing is cached.

use std::collections::HashMap;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{
    competition::{
        build_team_standings, compute_progress, determine_result, leaderboard, preview_payouts,
        rank_members, rank_teams, resolve_status, total_income, CompetitionStatus,
        CompetitionWindow,
    },
    db::CompetitionBackend,
    error::{AppError, AppResult},
    handlers::competitions::{
        request::ValidateCompetitionRequest,
        response::{
            CompetitionDraftResponse, CompetitionOverviewResponse, LeaderboardResponse,
            MemberStandingResponse, OverviewDisplay, PayoutResponse, PermissionsResponse,
            ResultPreviewResponse, TeamStandingResponse,
        },
    },
    models::{Competition, CompetitionMember, RankingMember, TeamStanding},
    utils::{
        format_days, format_money, format_percent,
        time::{format_duration, time_until},
        validation::{
            sanitize_string, validate_competition_dates, validate_competition_name,
            validate_goal_value, validate_max_members, validate_prize_value,
        },
    },
};

/// Competition with its members and ranked competitors
struct Snapshot {
    competition: Competition,
    members: Vec<CompetitionMember>,
    /// Competitors only, in leaderboard order
    ranked: Vec<RankingMember>,
}

impl Snapshot {
    fn ranked_teams(&self) -> Vec<TeamStanding> {
        if !self.competition.allow_teams {
            return Vec::new();
        }
        rank_teams(build_team_standings(&self.ranked), self.competition.goal_value)
    }
}

/// Competition service for business logic
pub struct CompetitionService;

impl CompetitionService {
    /// Overview card: status, countdown and aggregate goal progress
    pub async fn overview(
        backend: &dyn CompetitionBackend,
        id: Uuid,
        now: NaiveDateTime,
    ) -> AppResult<CompetitionOverviewResponse> {
        let snapshot = Self::load_snapshot(backend, id).await?;
        let competition = &snapshot.competition;
        let window = competition.window();
        let status = resolve_status(competition.start_date, competition.end_date, now);

        let competitor_count = snapshot.ranked.len();
        let progress = compute_progress(
            total_income(&snapshot.ranked),
            competition.goal_value,
            competitor_count,
        );

        let days_until_start = window.days_until_start(now);
        let days_remaining = window.days_remaining(now);
        let countdown = match status.status {
            CompetitionStatus::Upcoming => format!("starts in {}", format_days(days_until_start)),
            CompetitionStatus::Active => format!("{} left", format_days(days_remaining)),
            CompetitionStatus::Finished => status.label.to_lowercase(),
        };
        let next_transition = match status.status {
            CompetitionStatus::Upcoming => Some(window.start),
            CompetitionStatus::Active => Some(window.end_exclusive),
            CompetitionStatus::Finished => None,
        };
        let time_left = next_transition
            .and_then(|at| time_until(at, now))
            .map(format_duration);

        let team_count = if competition.allow_teams {
            build_team_standings(&snapshot.ranked).len()
        } else {
            0
        };

        Ok(CompetitionOverviewResponse {
            id: competition.id,
            name: competition.name.clone(),
            description: competition.description.clone(),
            host_id: competition.host_id,
            start_date: competition.start_date,
            end_date: competition.end_date,
            status: status.status,
            status_label: status.label.to_string(),
            duration_days: window.duration_days(),
            days_until_start,
            days_remaining,
            countdown,
            time_left,
            goal_value: competition.goal_value,
            total_goal: progress.total_goal,
            total_income: progress.total_income,
            remaining: progress.remaining,
            percent: progress.percent,
            goal_reached: progress.goal_reached(),
            prize_value: competition.prize_value,
            allow_teams: competition.allow_teams,
            max_members: competition.max_members,
            member_count: snapshot.members.len(),
            competitor_count,
            spectator_count: snapshot.members.len() - competitor_count,
            team_count,
            display: OverviewDisplay {
                goal_value: format_money(competition.goal_value),
                total_goal: format_money(progress.total_goal),
                total_income: format_money(progress.total_income),
                remaining: format_money(progress.remaining),
                percent: format_percent(progress.percent),
                prize_value: format_money(competition.prize_value),
            },
        })
    }

    /// Member and team leaderboards
    pub async fn leaderboard(
        backend: &dyn CompetitionBackend,
        id: Uuid,
        now: NaiveDateTime,
    ) -> AppResult<LeaderboardResponse> {
        let snapshot = Self::load_snapshot(backend, id).await?;
        let goal_value = snapshot.competition.goal_value;

        let members = leaderboard(&snapshot.ranked, goal_value)
            .into_iter()
            .map(|entry| MemberStandingResponse {
                total_income_display: format_money(entry.total_income),
                percent_display: format_percent(entry.percent),
                position: entry.position,
                user_id: entry.user_id,
                display_name: entry.display_name,
                team_id: entry.team_id,
                total_income: entry.total_income,
                percent: entry.percent,
            })
            .collect();

        let teams = snapshot
            .ranked_teams()
            .into_iter()
            .enumerate()
            .map(|(i, team)| {
                let progress =
                    compute_progress(team.total_income, goal_value, team.member_ids.len());
                TeamStandingResponse {
                    position: i + 1,
                    team_id: team.team_id,
                    member_count: team.member_ids.len(),
                    total_income: team.total_income,
                    team_goal: progress.total_goal,
                    percent: progress.percent,
                    total_income_display: format_money(team.total_income),
                    percent_display: format_percent(progress.percent),
                    team_name: team.team_name,
                }
            })
            .collect();

        Ok(LeaderboardResponse {
            competition_id: id,
            status: snapshot.competition.status_at(now),
            goal_value,
            members,
            teams,
        })
    }

    /// Winner and payout preview ahead of backend finalization
    pub async fn result_preview(
        backend: &dyn CompetitionBackend,
        id: Uuid,
        now: NaiveDateTime,
    ) -> AppResult<ResultPreviewResponse> {
        let snapshot = Self::load_snapshot(backend, id).await?;
        let competition = &snapshot.competition;
        let teams = snapshot.ranked_teams();

        let result = determine_result(competition, &snapshot.ranked, &teams);
        let payouts = preview_payouts(competition, &result, &snapshot.ranked);

        let names: HashMap<Uuid, &str> = snapshot
            .ranked
            .iter()
            .map(|m| (m.user_id, m.display_name.as_str()))
            .collect();

        let winner_name = match (result.winner_user_id, result.winner_team_id) {
            (Some(user_id), _) => names.get(&user_id).map(|n| n.to_string()),
            (None, Some(team_id)) => teams
                .iter()
                .find(|t| t.team_id == team_id)
                .map(|t| t.team_name.clone()),
            (None, None) => None,
        };

        let payouts = payouts
            .into_iter()
            .map(|p| PayoutResponse {
                display_name: names.get(&p.user_id).map(|n| n.to_string()).unwrap_or_default(),
                amount_display: format_money(p.amount),
                user_id: p.user_id,
                amount: p.amount,
            })
            .collect();

        let status = competition.status_at(now);

        tracing::debug!(
            competition_id = %id,
            status = %status,
            meta_reached = result.meta_reached,
            winner_type = %result.winner_type,
            "Previewed competition result"
        );

        Ok(ResultPreviewResponse {
            competition_id: id,
            status,
            is_final: status == CompetitionStatus::Finished,
            result,
            winner_name,
            payouts,
        })
    }

    /// Which membership actions `user_id` may take right now
    pub async fn permissions(
        backend: &dyn CompetitionBackend,
        id: Uuid,
        user_id: Uuid,
        now: NaiveDateTime,
    ) -> AppResult<PermissionsResponse> {
        let competition = backend
            .fetch_competition(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Competition not found".to_string()))?;
        let members = backend.fetch_members(id).await?;
        let member = members.iter().find(|m| m.user_id == user_id);

        Ok(PermissionsResponse {
            competition_id: id,
            user_id,
            is_member: member.is_some(),
            is_host: competition.host_id == user_id,
            can_join: Self::ensure_can_join(&competition, &members, user_id, now).is_ok(),
            can_edit: Self::ensure_can_edit(&competition, user_id, now).is_ok(),
            can_toggle_competitor: Self::ensure_can_toggle_competitor(&competition, member, now)
                .is_ok(),
        })
    }

    /// Validate and normalize a competition draft
    pub fn validate_draft(
        payload: ValidateCompetitionRequest,
        now: NaiveDateTime,
    ) -> AppResult<CompetitionDraftResponse> {
        let name = validate_competition_name(&payload.name)
            .map_err(|e| AppError::Validation(e.to_string()))?;
        validate_competition_dates(payload.start_date, payload.end_date)
            .map_err(|e| AppError::Validation(e.to_string()))?;
        validate_goal_value(payload.goal_value)
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let prize_value = payload.prize_value.unwrap_or(Decimal::ZERO);
        validate_prize_value(prize_value).map_err(|e| AppError::Validation(e.to_string()))?;

        if let Some(max_members) = payload.max_members {
            validate_max_members(max_members).map_err(|e| AppError::Validation(e.to_string()))?;
        }

        let window = CompetitionWindow::from_dates(payload.start_date, payload.end_date);

        Ok(CompetitionDraftResponse {
            name,
            description: payload
                .description
                .map(|d| sanitize_string(&d))
                .filter(|d| !d.is_empty()),
            start_date: payload.start_date,
            end_date: payload.end_date,
            duration_days: window.duration_days(),
            goal_value: payload.goal_value,
            prize_value,
            allow_teams: payload.allow_teams.unwrap_or(false),
            max_members: payload.max_members.filter(|m| *m > 0),
            status: window.status_at(now),
        })
    }

    /// A user may join while the competition runs or is upcoming and has room
    pub fn ensure_can_join(
        competition: &Competition,
        members: &[CompetitionMember],
        user_id: Uuid,
        now: NaiveDateTime,
    ) -> AppResult<()> {
        if competition.is_finished_at(now) {
            return Err(AppError::Validation(
                "Competition has already finished".to_string(),
            ));
        }
        if members.iter().any(|m| m.user_id == user_id) {
            return Err(AppError::Conflict(
                "Already a member of this competition".to_string(),
            ));
        }
        if !competition.has_capacity_for(members.len()) {
            return Err(AppError::Conflict("Competition is full".to_string()));
        }
        Ok(())
    }

    /// Only the host edits, and never after the competition finished
    pub fn ensure_can_edit(
        competition: &Competition,
        requester_id: Uuid,
        now: NaiveDateTime,
    ) -> AppResult<()> {
        if competition.host_id != requester_id {
            return Err(AppError::Forbidden(
                "Only the host can edit this competition".to_string(),
            ));
        }
        if competition.is_finished_at(now) {
            return Err(AppError::Validation(
                "Finished competitions cannot be edited".to_string(),
            ));
        }
        Ok(())
    }

    /// Members switch between competitor and spectator until the end
    pub fn ensure_can_toggle_competitor(
        competition: &Competition,
        member: Option<&CompetitionMember>,
        now: NaiveDateTime,
    ) -> AppResult<()> {
        if member.is_none() {
            return Err(AppError::Forbidden(
                "Not a member of this competition".to_string(),
            ));
        }
        if competition.is_finished_at(now) {
            return Err(AppError::Validation(
                "Competition has already finished".to_string(),
            ));
        }
        Ok(())
    }

    async fn load_snapshot(backend: &dyn CompetitionBackend, id: Uuid) -> AppResult<Snapshot> {
        let competition = backend
            .fetch_competition(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Competition not found".to_string()))?;

        let members = backend.fetch_members(id).await?;
        let competitor_ids: Vec<Uuid> = members
            .iter()
            .filter(|m| m.is_competitor)
            .map(|m| m.user_id)
            .collect();

        let totals = backend
            .fetch_income_totals(&competitor_ids, competition.income_range())
            .await?;

        let ranking: Vec<RankingMember> = members
            .iter()
            .filter(|m| m.is_competitor)
            .map(|m| {
                let income = totals.get(&m.user_id).copied().unwrap_or(Decimal::ZERO);
                RankingMember::from_member(m, income)
            })
            .collect();

        tracing::debug!(
            competition_id = %id,
            members = members.len(),
            competitors = ranking.len(),
            "Loaded competition snapshot"
        );

        let ranked = rank_members(ranking, competition.goal_value);

        Ok(Snapshot {
            competition,
            members,
            ranked,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        db::MockCompetitionBackend,
        models::{
            competition::fixtures::{at, competition, date},
            MemberRole, WinnerType,
        },
    };
    use rust_decimal_macros::dec;

    fn member(competition: &Competition, name: &str, competitor: bool) -> CompetitionMember {
        CompetitionMember {
            user_id: Uuid::new_v4(),
            competition_id: competition.id,
            display_name: name.to_string(),
            role: MemberRole::Member,
            is_competitor: competitor,
            team_id: None,
            team_name: None,
        }
    }

    /// Backend serving one competition, its members and fixed income totals
    fn backend_for(
        competition: Competition,
        members: Vec<CompetitionMember>,
        incomes: Vec<(Uuid, Decimal)>,
    ) -> MockCompetitionBackend {
        let mut backend = MockCompetitionBackend::new();
        let id = competition.id;

        backend
            .expect_fetch_competition()
            .returning(move |requested| Ok((requested == id).then(|| competition.clone())));
        backend
            .expect_fetch_members()
            .returning(move |_| Ok(members.clone()));
        backend
            .expect_fetch_income_totals()
            .returning(move |ids, _| {
                Ok(incomes
                    .iter()
                    .filter(|(user_id, _)| ids.contains(user_id))
                    .cloned()
                    .collect())
            });
        backend
    }

    #[tokio::test]
    async fn test_overview_scales_goal_by_competitors() {
        let c = competition(dec!(100), false);
        let ana = member(&c, "Ana", true);
        let beto = member(&c, "Beto", true);
        let spectator = member(&c, "Caio", false);
        let incomes = vec![
            (ana.user_id, dec!(120)),
            (beto.user_id, dec!(30)),
            (spectator.user_id, dec!(999)),
        ];
        let backend = backend_for(c.clone(), vec![ana, beto, spectator], incomes);

        let overview = CompetitionService::overview(&backend, c.id, at(2024, 1, 5, 10, 0, 0))
            .await
            .unwrap();

        assert_eq!(overview.status, CompetitionStatus::Active);
        assert_eq!(overview.status_label, "Active");
        assert_eq!(overview.competitor_count, 2);
        assert_eq!(overview.spectator_count, 1);
        assert_eq!(overview.total_goal, dec!(200));
        assert_eq!(overview.total_income, dec!(150));
        assert_eq!(overview.percent, dec!(75));
        assert_eq!(overview.remaining, dec!(50));
        assert!(!overview.goal_reached);
        assert_eq!(overview.days_remaining, 3);
        assert_eq!(overview.countdown, "3 days left");
        assert_eq!(overview.time_left.as_deref(), Some("2d 14h"));
        assert_eq!(overview.display.percent, "75%");
        assert_eq!(overview.display.total_income, "$150.00");
    }

    #[tokio::test]
    async fn test_overview_fractional_goal_reached_exactly() {
        let c = competition(dec!(10.05), false);
        let drivers: Vec<CompetitionMember> = ["Ana", "Beto", "Caio"]
            .iter()
            .map(|name| member(&c, name, true))
            .collect();
        let incomes = drivers.iter().map(|m| (m.user_id, dec!(10.05))).collect();
        let backend = backend_for(c.clone(), drivers, incomes);

        let overview = CompetitionService::overview(&backend, c.id, at(2024, 1, 5, 10, 0, 0))
            .await
            .unwrap();

        assert_eq!(overview.total_goal, dec!(30.15));
        assert_eq!(overview.total_income, dec!(30.15));
        assert_eq!(overview.remaining, Decimal::ZERO);
        assert_eq!(overview.percent, dec!(100));
        assert!(overview.goal_reached);
        assert_eq!(overview.display.total_goal, "$30.15");
        assert_eq!(overview.display.percent, "100%");
    }

    #[tokio::test]
    async fn test_overview_unknown_competition() {
        let c = competition(dec!(100), false);
        let backend = backend_for(c, vec![], vec![]);

        let err = CompetitionService::overview(&backend, Uuid::new_v4(), at(2024, 1, 5, 0, 0, 0))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_leaderboard_orders_competitors() {
        let c = competition(dec!(100), false);
        let b = member(&c, "B", true);
        let a = member(&c, "A", true);
        let z = member(&c, "Z", true);
        let incomes = vec![(b.user_id, dec!(100)), (a.user_id, dec!(100)), (z.user_id, dec!(180))];
        let backend = backend_for(c.clone(), vec![b, a, z], incomes);

        let board = CompetitionService::leaderboard(&backend, c.id, at(2024, 1, 2, 0, 0, 0))
            .await
            .unwrap();

        let names: Vec<&str> = board.members.iter().map(|m| m.display_name.as_str()).collect();
        assert_eq!(names, vec!["Z", "A", "B"]);
        assert_eq!(board.members[0].percent, dec!(100));
        assert_eq!(board.members[1].position, 2);
        assert_eq!(board.members[2].position, 3);
        assert!(board.teams.is_empty());
    }

    #[tokio::test]
    async fn test_leaderboard_with_teams() {
        let c = competition(dec!(100), true);
        let team_id = Uuid::new_v4();
        let mut ana = member(&c, "Ana", true);
        ana.team_id = Some(team_id);
        ana.team_name = Some("Owls".to_string());
        let mut beto = member(&c, "Beto", true);
        beto.team_id = Some(team_id);
        beto.team_name = Some("Owls".to_string());
        let incomes = vec![(ana.user_id, dec!(50)), (beto.user_id, dec!(100))];
        let backend = backend_for(c.clone(), vec![ana, beto], incomes);

        let board = CompetitionService::leaderboard(&backend, c.id, at(2024, 1, 2, 0, 0, 0))
            .await
            .unwrap();

        assert_eq!(board.teams.len(), 1);
        let team = &board.teams[0];
        assert_eq!(team.team_name, "Owls");
        assert_eq!(team.member_count, 2);
        assert_eq!(team.team_goal, dec!(200));
        assert_eq!(team.percent, dec!(75));
    }

    #[tokio::test]
    async fn test_result_preview_after_finish() {
        let c = competition(dec!(100), false);
        let ana = member(&c, "Ana", true);
        let beto = member(&c, "Beto", true);
        let incomes = vec![(ana.user_id, dec!(150)), (beto.user_id, dec!(60))];
        let ana_id = ana.user_id;
        let backend = backend_for(c.clone(), vec![ana, beto], incomes);

        let preview = CompetitionService::result_preview(&backend, c.id, at(2024, 1, 8, 0, 0, 1))
            .await
            .unwrap();

        assert!(preview.is_final);
        assert!(preview.result.meta_reached);
        assert_eq!(preview.result.winner_type, WinnerType::Individual);
        assert_eq!(preview.result.winner_user_id, Some(ana_id));
        assert_eq!(preview.winner_name.as_deref(), Some("Ana"));
        assert_eq!(preview.payouts.len(), 1);
        assert_eq!(preview.payouts[0].amount, dec!(300));
        assert_eq!(preview.payouts[0].amount_display, "$300.00");
    }

    #[tokio::test]
    async fn test_permissions() {
        let c = competition(dec!(100), false);
        let host = CompetitionMember {
            role: MemberRole::Host,
            user_id: c.host_id,
            ..member(&c, "Host", true)
        };
        let other = member(&c, "Other", false);
        let other_id = other.user_id;
        let backend = backend_for(c.clone(), vec![host, other], vec![]);
        let during = at(2024, 1, 3, 0, 0, 0);

        let as_host = CompetitionService::permissions(&backend, c.id, c.host_id, during)
            .await
            .unwrap();
        assert!(as_host.is_host && as_host.is_member);
        assert!(as_host.can_edit);
        assert!(!as_host.can_join);
        assert!(as_host.can_toggle_competitor);

        let outsider = Uuid::new_v4();
        let as_outsider = CompetitionService::permissions(&backend, c.id, outsider, during)
            .await
            .unwrap();
        assert!(as_outsider.can_join);
        assert!(!as_outsider.can_edit);
        assert!(!as_outsider.can_toggle_competitor);

        let after_end = at(2024, 1, 9, 0, 0, 0);
        let late = CompetitionService::permissions(&backend, c.id, other_id, after_end)
            .await
            .unwrap();
        assert!(!late.can_toggle_competitor);
        assert!(!late.can_join);
    }

    #[tokio::test]
    async fn test_host_role_without_ownership_is_not_host() {
        let c = competition(dec!(100), false);
        let stale = CompetitionMember {
            role: MemberRole::Host,
            ..member(&c, "Former host", true)
        };
        let stale_id = stale.user_id;
        let backend = backend_for(c.clone(), vec![stale], vec![]);

        let during = at(2024, 1, 3, 0, 0, 0);
        let perms = CompetitionService::permissions(&backend, c.id, stale_id, during)
            .await
            .unwrap();
        assert!(perms.is_member);
        assert!(!perms.is_host);
        assert!(!perms.can_edit);
        assert_eq!(perms.is_host, perms.can_edit);
    }

    #[test]
    fn test_join_rules() {
        let c = competition(dec!(100), false);
        let members = vec![member(&c, "A", true), member(&c, "B", true)];
        let during = at(2024, 1, 3, 0, 0, 0);
        let after_end = at(2024, 1, 8, 0, 0, 0);

        assert!(CompetitionService::ensure_can_join(&c, &members, Uuid::new_v4(), during).is_ok());

        let existing = members[0].user_id;
        assert!(matches!(
            CompetitionService::ensure_can_join(&c, &members, existing, during),
            Err(AppError::Conflict(_))
        ));

        let full: Vec<CompetitionMember> =
            (0..3).map(|i| member(&c, &i.to_string(), true)).collect();
        assert!(matches!(
            CompetitionService::ensure_can_join(&c, &full, Uuid::new_v4(), during),
            Err(AppError::Conflict(_))
        ));

        assert!(matches!(
            CompetitionService::ensure_can_join(&c, &members, Uuid::new_v4(), after_end),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_edit_rules() {
        let c = competition(dec!(100), false);
        let during = at(2024, 1, 3, 0, 0, 0);

        assert!(CompetitionService::ensure_can_edit(&c, c.host_id, during).is_ok());
        assert!(matches!(
            CompetitionService::ensure_can_edit(&c, Uuid::new_v4(), during),
            Err(AppError::Forbidden(_))
        ));
        assert!(matches!(
            CompetitionService::ensure_can_edit(&c, c.host_id, at(2024, 1, 8, 0, 0, 0)),
            Err(AppError::Validation(_))
        ));
    }

    fn draft() -> ValidateCompetitionRequest {
        ValidateCompetitionRequest {
            name: "  Weekend rush ".to_string(),
            description: Some("   ".to_string()),
            start_date: date(2024, 2, 1),
            end_date: date(2024, 2, 3),
            goal_value: dec!(250),
            prize_value: None,
            allow_teams: None,
            max_members: Some(0),
        }
    }

    #[test]
    fn test_validate_draft_normalizes() {
        let now = at(2024, 1, 20, 0, 0, 0);
        let normalized = CompetitionService::validate_draft(draft(), now).unwrap();

        assert_eq!(normalized.name, "Weekend rush");
        assert_eq!(normalized.description, None);
        assert_eq!(normalized.duration_days, 3);
        assert_eq!(normalized.prize_value, Decimal::ZERO);
        assert!(!normalized.allow_teams);
        assert_eq!(normalized.max_members, None);
        assert_eq!(normalized.status, CompetitionStatus::Upcoming);
    }

    #[test]
    fn test_validate_draft_rejects_inverted_dates() {
        let mut payload = draft();
        payload.end_date = date(2024, 1, 31);

        let err = CompetitionService::validate_draft(payload, at(2024, 1, 20, 0, 0, 0));
        assert!(matches!(err, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_validate_draft_rejects_bad_amounts() {
        let now = at(2024, 1, 20, 0, 0, 0);

        let mut payload = draft();
        payload.goal_value = Decimal::ZERO;
        assert!(CompetitionService::validate_draft(payload, now).is_err());

        let mut payload = draft();
        payload.prize_value = Some(dec!(-0.01));
        assert!(CompetitionService::validate_draft(payload, now).is_err());
    }
}
