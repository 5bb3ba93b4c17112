//! Utility functions

pub mod format;
pub mod rate_limit;
pub mod time;
pub mod validation;

pub use format::{format_money, format_percent};
pub use rate_limit::{RateLimitDecision, RateLimiter};
pub use time::{format_days, now_local};
