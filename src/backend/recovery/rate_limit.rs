//! Fixed-window request counter.
//!
//! The window state is two values stored on the user row: how many requests
//! were accepted and when the last one was. The counter restarts at 1 only
//! when a check finds the window since the last accepted request has fully
//! elapsed; it never decays.

use chrono::{DateTime, Duration, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedWindow {
    pub limit: i64,
    pub window: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowDecision {
    /// Accept the request and store the new counter with `now` as last-request time
    Allowed { count: i64 },
    /// Reject without touching the stored state
    Limited,
}

impl FixedWindow {
    pub fn new(limit: i64, window: Duration) -> Self {
        Self { limit, window }
    }

    /// Three password reset requests per hour
    pub fn password_reset() -> Self {
        Self::new(3, Duration::hours(1))
    }

    pub fn check(&self, count: i64, last: Option<DateTime<Utc>>, now: DateTime<Utc>) -> WindowDecision {
        match last {
            Some(last) if now - last < self.window => {
                if count < self.limit {
                    WindowDecision::Allowed { count: count + 1 }
                } else {
                    WindowDecision::Limited
                }
            }
            _ => WindowDecision::Allowed { count: 1 },
        }
    }
}
