//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

use rust_decimal::Decimal;

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

/// Request timeout in seconds
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

// =============================================================================
// DATABASE DEFAULTS
// =============================================================================

/// Default maximum database connections in the pool
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 10;

// =============================================================================
// COMPETITION SETTINGS
// =============================================================================

/// Offset applied to UTC instants to obtain the drivers' local wall time
pub const DEFAULT_LOCAL_UTC_OFFSET_MINUTES: i32 = 0;

/// Competition status labels shown to drivers
pub mod status_labels {
    pub const UPCOMING: &str = "Upcoming";
    pub const ACTIVE: &str = "Active";
    pub const FINISHED: &str = "Finished";
}

/// Member roles inside a competition
pub mod member_roles {
    pub const HOST: &str = "host";
    pub const MEMBER: &str = "member";
}

/// Winner classes of a competition result
pub mod winner_types {
    pub const INDIVIDUAL: &str = "individual";
    pub const TEAM: &str = "team";
    pub const NONE: &str = "none";
}

/// Percent at which a goal counts as reached
pub const GOAL_REACHED_PERCENT: Decimal = Decimal::ONE_HUNDRED;

/// Smallest currency unit
pub const CENT: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Currency symbol used by the money formatter
pub const CURRENCY_SYMBOL: &str = "$";

// =============================================================================
// RATE LIMITING
// =============================================================================

/// Default maximum requests per client within one window
pub const DEFAULT_RATE_LIMIT_MAX_REQUESTS: u32 = 60;

/// Default rate limit window in seconds
pub const DEFAULT_RATE_LIMIT_WINDOW_SECS: u64 = 60;

/// Store size above which expired rate limit entries are purged
pub const DEFAULT_RATE_LIMIT_CLEANUP_THRESHOLD: usize = 10_000;

// =============================================================================
// API VERSIONING
// =============================================================================

/// API base path
pub const API_BASE_PATH: &str = "/api/v1";

// =============================================================================
// VALIDATION
// =============================================================================

/// Maximum competition name length
pub const MAX_COMPETITION_NAME_LENGTH: u64 = 80;

/// Maximum competition description length
pub const MAX_COMPETITION_DESCRIPTION_LENGTH: u64 = 1000;

/// Maximum number of members a host may allow
pub const MAX_COMPETITION_MEMBERS: u32 = 500;

/// Maximum competition length in days
pub const MAX_COMPETITION_DAYS: i64 = 366;
