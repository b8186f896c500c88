//! Minimum inter-arrival gate for tap-triggered effects.
//!
//! DESIGN
//! ======
//! A single timestamp of the last admitted request. Requests inside the
//! window are dropped outright: no queue, no error, and a dropped request
//! does not extend the window. Timestamps are plain milliseconds supplied by
//! the caller (`Date.now()` in the browser) so the gate is testable without
//! a clock.

#[cfg(test)]
#[path = "throttle_test.rs"]
mod throttle_test;

#[derive(Debug, Clone)]
pub struct Throttle {
    min_gap_ms: f64,
    last_admitted_ms: Option<f64>,
}

impl Throttle {
    #[must_use]
    pub fn new(min_gap_ms: f64) -> Self {
        Self { min_gap_ms, last_admitted_ms: None }
    }

    /// Admit and record the request at `now_ms`, or drop it.
    pub fn admit(&mut self, now_ms: f64) -> bool {
        if let Some(last) = self.last_admitted_ms
            && now_ms - last < self.min_gap_ms
        {
            return false;
        }
        self.last_admitted_ms = Some(now_ms);
        true
    }
}
