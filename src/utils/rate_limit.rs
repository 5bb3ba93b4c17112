//! In-memory fixed-window rate limiting
//!
//! Counters live in a map keyed by client. The map is bounded: whenever it
//! grows past the cleanup threshold, expired windows are purged, and if it
//! is still too large the oldest windows are dropped.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use crate::config::RateLimitConfig;

/// Outcome of a rate limit check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitDecision {
    pub allowed: bool,
    pub limit: u32,
    pub remaining: u32,
    /// Time until the current window resets
    pub reset_after: Duration,
}

#[derive(Debug, Clone, Copy)]
struct WindowEntry {
    started_at: Instant,
    count: u32,
}

/// Expiring counter store; not synchronized
#[derive(Debug)]
pub struct RateLimitStore {
    entries: HashMap<String, WindowEntry>,
    max_requests: u32,
    window: Duration,
    cleanup_threshold: usize,
}

impl RateLimitStore {
    pub fn new(max_requests: u32, window: Duration, cleanup_threshold: usize) -> Self {
        Self {
            entries: HashMap::new(),
            max_requests,
            window,
            cleanup_threshold: cleanup_threshold.max(1),
        }
    }

    /// Count a request for `key` at `now` and decide whether it may pass
    pub fn check(&mut self, key: &str, now: Instant) -> RateLimitDecision {
        let window = self.window;
        let entry = self
            .entries
            .entry(key.to_string())
            .or_insert(WindowEntry {
                started_at: now,
                count: 0,
            });

        if now.saturating_duration_since(entry.started_at) >= window {
            *entry = WindowEntry {
                started_at: now,
                count: 0,
            };
        }

        entry.count = entry.count.saturating_add(1);
        let count = entry.count;
        let reset_after = window.saturating_sub(now.saturating_duration_since(entry.started_at));

        if self.entries.len() > self.cleanup_threshold {
            self.evict(now);
        }

        RateLimitDecision {
            allowed: count <= self.max_requests,
            limit: self.max_requests,
            remaining: self.max_requests.saturating_sub(count),
            reset_after,
        }
    }

    /// Drop expired windows, then the oldest ones while over the threshold
    fn evict(&mut self, now: Instant) {
        let before = self.entries.len();
        let window = self.window;
        self.entries
            .retain(|_, e| now.saturating_duration_since(e.started_at) < window);

        let overflow = self.entries.len().saturating_sub(self.cleanup_threshold);
        if overflow > 0 {
            let mut by_age: Vec<(Instant, String)> = self
                .entries
                .iter()
                .map(|(k, e)| (e.started_at, k.clone()))
                .collect();
            by_age.sort_by_key(|(started_at, _)| *started_at);
            for (_, key) in by_age.into_iter().take(overflow) {
                self.entries.remove(&key);
            }
        }

        tracing::debug!(
            before,
            after = self.entries.len(),
            "Evicted rate limit entries"
        );
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Thread-safe rate limiter shared through the application state
#[derive(Debug)]
pub struct RateLimiter {
    store: Mutex<RateLimitStore>,
}

impl RateLimiter {
    pub fn new(config: &RateLimitConfig) -> Self {
        Self {
            store: Mutex::new(RateLimitStore::new(
                config.max_requests,
                config.window(),
                config.cleanup_threshold,
            )),
        }
    }

    /// Count a request for `key` now
    pub fn check(&self, key: &str) -> RateLimitDecision {
        let mut store = match self.store.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        store.check(key, Instant::now())
    }
}
