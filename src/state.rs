//! Application state management
//!
//! This module contains the shared application state that is passed
//! to all request handlers via Axum's State extractor.

use std::sync::Arc;

use chrono::NaiveDateTime;

use crate::{config::Config, db::CompetitionBackend, utils::{now_local, RateLimiter}};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

/// Inner state (wrapped in Arc for cheap cloning)
struct AppStateInner {
    /// Backend collaborator holding competition data
    backend: Arc<dyn CompetitionBackend>,

    /// Per-client request counters
    rate_limiter: RateLimiter,

    /// Application configuration
    config: Config,
}

impl AppState {
    /// Create a new application state
    pub fn new(backend: Arc<dyn CompetitionBackend>, config: Config) -> Self {
        let rate_limiter = RateLimiter::new(&config.rate_limit);
        Self {
            inner: Arc::new(AppStateInner {
                backend,
                rate_limiter,
                config,
            }),
        }
    }

    /// Get a reference to the backend collaborator
    pub fn backend(&self) -> &dyn CompetitionBackend {
        self.inner.backend.as_ref()
    }

    /// Get a reference to the rate limiter
    pub fn rate_limiter(&self) -> &RateLimiter {
        &self.inner.rate_limiter
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    /// Current wall-clock time in the drivers' timezone
    pub fn now_local(&self) -> NaiveDateTime {
        now_local(self.inner.config.competition.local_offset())
    }
}
