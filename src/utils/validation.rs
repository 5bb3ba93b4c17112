//! Input validation utilities

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::constants::{MAX_COMPETITION_DAYS, MAX_COMPETITION_MEMBERS, MAX_COMPETITION_NAME_LENGTH};

/// Sanitize string input (remove control characters, trim whitespace)
pub fn sanitize_string(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_control() || *c == '\n' || *c == '\t')
        .collect::<String>()
        .trim()
        .to_string()
}

/// Validate and sanitize a competition name
pub fn validate_competition_name(name: &str) -> Result<String, &'static str> {
    let sanitized = sanitize_string(name);
    if sanitized.is_empty() {
        return Err("Competition name cannot be empty");
    }
    if sanitized.chars().count() as u64 > MAX_COMPETITION_NAME_LENGTH {
        return Err("Competition name is too long");
    }
    Ok(sanitized)
}

/// Validate the inclusive date window of a competition
pub fn validate_competition_dates(start: NaiveDate, end: NaiveDate) -> Result<(), &'static str> {
    if end < start {
        return Err("End date must not be before start date");
    }
    if (end - start).num_days() + 1 > MAX_COMPETITION_DAYS {
        return Err("Competition cannot last more than a year");
    }
    Ok(())
}

/// Validate the per-participant revenue goal
pub fn validate_goal_value(goal: Decimal) -> Result<(), &'static str> {
    if goal <= Decimal::ZERO {
        return Err("Goal must be greater than zero");
    }
    Ok(())
}

/// Validate the prize value
pub fn validate_prize_value(prize: Decimal) -> Result<(), &'static str> {
    if prize < Decimal::ZERO {
        return Err("Prize cannot be negative");
    }
    Ok(())
}

/// Validate the member cap; zero means unlimited
pub fn validate_max_members(max_members: u32) -> Result<(), &'static str> {
    if max_members == 1 {
        return Err("A competition needs room for at least two members");
    }
    if max_members > MAX_COMPETITION_MEMBERS {
        return Err("Too many members");
    }
    Ok(())
}
