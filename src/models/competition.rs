//! Competition model

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::competition::{CompetitionStatus, CompetitionWindow};

/// Competition snapshot as stored by the backend
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Competition {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub host_id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Revenue goal per participant
    pub goal_value: Decimal,
    pub prize_value: Decimal,
    pub allow_teams: bool,
    /// `None` or zero means unlimited
    pub max_members: Option<i32>,
}

impl Competition {
    /// Half-open wall-clock window covered by the competition
    pub fn window(&self) -> CompetitionWindow {
        CompetitionWindow::from_dates(self.start_date, self.end_date)
    }

    /// Inclusive date range over which income counts
    pub fn income_range(&self) -> DateRange {
        DateRange {
            start: self.start_date,
            end: self.end_date,
        }
    }

    /// Status of the competition at the given local time
    pub fn status_at(&self, now: NaiveDateTime) -> CompetitionStatus {
        self.window().status_at(now)
    }

    /// Check whether the competition is over at the given local time
    pub fn is_finished_at(&self, now: NaiveDateTime) -> bool {
        self.status_at(now) == CompetitionStatus::Finished
    }

    /// Check whether another member fits under `max_members`
    pub fn has_capacity_for(&self, current_members: usize) -> bool {
        match self.max_members {
            Some(max) if max > 0 => current_members < max as usize,
            _ => true,
        }
    }
}

/// Inclusive calendar date range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}


#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_capacity() {
        let mut c = competition(dec!(100), false);
        assert!(c.has_capacity_for(2));
        assert!(!c.has_capacity_for(3));

        c.max_members = Some(0);
        assert!(c.has_capacity_for(10_000));

        c.max_members = None;
        assert!(c.has_capacity_for(10_000));
    }

    #[test]
    fn test_income_range_is_inclusive() {
        let range = competition(dec!(100), false).income_range();
        assert_eq!(range.start, date(2024, 1, 1));
        assert_eq!(range.end, date(2024, 1, 7));
    }

    #[test]
    fn test_finished_after_last_day() {
        let c = competition(dec!(100), false);
        assert!(!c.is_finished_at(at(2024, 1, 7, 23, 59, 59)));
        assert!(c.is_finished_at(at(2024, 1, 8, 0, 0, 0)));
    }
}
