//! Competition status resolution
//!
//! A competition runs over whole local calendar days. The last day is
//! inclusive through 23:59:59, so the window is modelled as the half-open
//! interval `[start_date 00:00, (end_date + 1 day) 00:00)`.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::constants::status_labels;

/// Temporal state of a competition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompetitionStatus {
    Upcoming,
    Active,
    Finished,
}

impl CompetitionStatus {
    /// Human readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Upcoming => status_labels::UPCOMING,
            Self::Active => status_labels::ACTIVE,
            Self::Finished => status_labels::FINISHED,
        }
    }
}

impl std::fmt::Display for CompetitionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Upcoming => write!(f, "upcoming"),
            Self::Active => write!(f, "active"),
            Self::Finished => write!(f, "finished"),
        }
    }
}

/// Status together with its display label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusInfo {
    pub status: CompetitionStatus,
    pub label: &'static str,
}

impl From<CompetitionStatus> for StatusInfo {
    fn from(status: CompetitionStatus) -> Self {
        Self {
            status,
            label: status.label(),
        }
    }
}

/// Half-open local wall-clock interval `[start, end_exclusive)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompetitionWindow {
    pub start: NaiveDateTime,
    pub end_exclusive: NaiveDateTime,
}

impl CompetitionWindow {
    /// Build the window for an inclusive pair of calendar dates.
    ///
    /// `end_date < start_date` is not rejected; such a window is empty and
    /// resolves straight from upcoming to finished.
    pub fn from_dates(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        let start = start_date.and_time(NaiveTime::MIN);
        let end_exclusive = end_date
            .succ_opt()
            .map(|next| next.and_time(NaiveTime::MIN))
            .unwrap_or(NaiveDateTime::MAX);

        Self {
            start,
            end_exclusive,
        }
    }

    pub fn status_at(&self, now: NaiveDateTime) -> CompetitionStatus {
        if now < self.start {
            CompetitionStatus::Upcoming
        } else if now >= self.end_exclusive {
            CompetitionStatus::Finished
        } else {
            CompetitionStatus::Active
        }
    }

    /// Calendar days left including today; 0 once finished
    pub fn days_remaining(&self, now: NaiveDateTime) -> i64 {
        if now >= self.end_exclusive {
            return 0;
        }
        let from = now.max(self.start).date();
        (self.end_exclusive.date() - from).num_days().max(0)
    }

    /// Calendar days until the first day; 0 once started
    pub fn days_until_start(&self, now: NaiveDateTime) -> i64 {
        (self.start.date() - now.date()).num_days().max(0)
    }

    /// Length of the competition in days
    pub fn duration_days(&self) -> i64 {
        (self.end_exclusive.date() - self.start.date()).num_days().max(0)
    }
}

/// Resolve the status of a competition running from `start_date` through
/// `end_date` (inclusive) at local time `now`.
pub fn resolve_status(
    start_date: NaiveDate,
    end_date: NaiveDate,
    now: NaiveDateTime,
) -> StatusInfo {
    CompetitionWindow::from_dates(start_date, end_date)
        .status_at(now)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::competition::fixtures::{at, date};

    #[test]
    fn test_upcoming_before_start() {
        let info = resolve_status(date(2024, 1, 1), date(2024, 1, 7), at(2023, 12, 31, 23, 59, 59));
        assert_eq!(info.status, CompetitionStatus::Upcoming);
        assert_eq!(info.label, "Upcoming");
    }

    #[test]
    fn test_active_through_last_day() {
        let start = date(2024, 1, 1);
        let end = date(2024, 1, 7);

        for now in [
            at(2024, 1, 1, 0, 0, 0),
            at(2024, 1, 4, 12, 30, 0),
            at(2024, 1, 7, 23, 0, 0),
            at(2024, 1, 7, 23, 59, 59),
        ] {
            assert_eq!(resolve_status(start, end, now).status, CompetitionStatus::Active);
        }
    }

    #[test]
    fn test_finished_from_midnight_after_end() {
        let start = date(2024, 1, 1);
        let end = date(2024, 1, 7);

        assert_eq!(
            resolve_status(start, end, at(2024, 1, 8, 0, 0, 0)).status,
            CompetitionStatus::Finished
        );
        let info = resolve_status(start, end, at(2024, 1, 8, 0, 0, 1));
        assert_eq!(info.status, CompetitionStatus::Finished);
        assert_eq!(info.label, "Finished");
        assert_eq!(
            resolve_status(start, end, at(2025, 6, 1, 0, 0, 0)).status,
            CompetitionStatus::Finished
        );
    }

    #[test]
    fn test_single_day_competition() {
        let day = date(2024, 3, 10);
        assert_eq!(
            resolve_status(day, day, at(2024, 3, 10, 18, 0, 0)).status,
            CompetitionStatus::Active
        );
        assert_eq!(
            resolve_status(day, day, at(2024, 3, 11, 0, 0, 0)).status,
            CompetitionStatus::Finished
        );
    }

    #[test]
    fn test_inverted_dates_never_active() {
        let window = CompetitionWindow::from_dates(date(2024, 1, 7), date(2024, 1, 1));
        assert_eq!(window.status_at(at(2024, 1, 6, 0, 0, 0)), CompetitionStatus::Upcoming);
        assert_eq!(window.status_at(at(2024, 1, 7, 12, 0, 0)), CompetitionStatus::Finished);
        assert_eq!(window.duration_days(), 0);
    }

    #[test]
    fn test_max_end_date_does_not_overflow() {
        let window = CompetitionWindow::from_dates(date(2024, 1, 1), NaiveDate::MAX);
        assert_eq!(window.status_at(at(3000, 1, 1, 0, 0, 0)), CompetitionStatus::Active);
    }

    #[test]
    fn test_day_counters() {
        let window = CompetitionWindow::from_dates(date(2024, 1, 1), date(2024, 1, 7));

        assert_eq!(window.duration_days(), 7);
        assert_eq!(window.days_until_start(at(2023, 12, 29, 10, 0, 0)), 3);
        assert_eq!(window.days_until_start(at(2024, 1, 3, 10, 0, 0)), 0);

        assert_eq!(window.days_remaining(at(2023, 12, 29, 10, 0, 0)), 7);
        assert_eq!(window.days_remaining(at(2024, 1, 1, 10, 0, 0)), 7);
        assert_eq!(window.days_remaining(at(2024, 1, 7, 23, 0, 0)), 1);
        assert_eq!(window.days_remaining(at(2024, 1, 8, 0, 0, 1)), 0);
    }
}
