//! Competition lifecycle and ranking engine
//!
//! Pure, synchronous functions over snapshots fetched from the backend:
//!
//! - [`status`]: upcoming / active / finished from the date window
//! - [`progress`]: goal scaling and progress percentages
//! - [`ranking`]: leaderboard ordering and team grouping
//! - [`result`]: winner and payout preview

pub mod progress;
pub mod ranking;
pub mod result;
pub mod status;

pub use progress::{compute_progress, member_progress, total_income, Progress};
pub use ranking::{build_team_standings, leaderboard, rank_members, rank_teams, LeaderboardEntry};
pub use result::{determine_result, preview_payouts};
pub use status::{resolve_status, CompetitionStatus, CompetitionWindow, StatusInfo};
