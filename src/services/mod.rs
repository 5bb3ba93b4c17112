//! Business logic services

pub mod competition_service;

pub use competition_service::CompetitionService;
