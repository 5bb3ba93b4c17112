//! Database module
//!
//! Connection handling, read-only repositories over the backend's tables,
//! and the [`CompetitionBackend`] collaborator built on them. The schema
//! and its migrations belong to the backend.

pub mod backend;
pub mod connection;
pub mod repositories;

pub use backend::{CompetitionBackend, PgCompetitionBackend};
pub use connection::*;

#[cfg(test)]
pub use backend::MockCompetitionBackend;
