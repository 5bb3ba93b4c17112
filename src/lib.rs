//! DriverHub - Competition Lifecycle & Ranking Engine
//!
//! This library powers the competition features of the DriverHub dashboard,
//! where gig drivers race each other toward income goals over a span of days.
//!
//! # Features
//!
//! - Status resolution over whole local calendar days
//! - Aggregate and per-member goal progress
//! - Leaderboards for members and teams with deterministic tie-breaks
//! - Winner determination and prize payout preview
//! - Bounded in-memory rate limiting
//!
//! # Architecture
//!
//! The application follows a layered architecture:
//! - **Handlers**: HTTP request handlers (thin layer)
//! - **Services**: Load snapshots and build view models
//! - **Competition**: Pure ranking and lifecycle engine
//! - **Repositories**: Database access behind the backend trait
//! - **Models**: Domain models

pub mod competition;
pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;
