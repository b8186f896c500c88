//! Hold-to-fill meter.
//!
//! ```text
//!   idle ──start──▶ filling ──stop──▶ idle
//!                      │
//!                      └──reaches 100──▶ full
//! ```
//!
//! The meter does not own a timer. [`FillMeter::start`] tells the host to
//! (re)arm its repeating ticker, replacing any running one; each tick calls
//! [`FillMeter::tick`]; [`FillMeter::stop`] tells the host to drop the ticker.
//! Releasing keeps the accumulated percentage, so holding again resumes
//! where the last hold left off.

#[cfg(test)]
#[path = "meter_test.rs"]
mod meter_test;

use crate::config::PageConfig;
use crate::consts::METER_FULL_MESSAGE;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeterPhase {
    Idle,
    Filling,
    Full,
}

/// Completion line state carried by every reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeterMessage {
    /// Below 100: empty message, section not marked full.
    Clear,
    /// The tick that reached 100: show the text, mark the section full.
    Show(&'static str),
}

/// What one tick published.
#[derive(Debug, Clone, PartialEq)]
pub struct MeterReading {
    /// Exact fill, used for the bar width.
    pub percent: f64,
    /// Rounded fill, used for the label and `aria-valuenow`.
    pub rounded: u8,
    pub message: MeterMessage,
}

impl MeterReading {
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}%", self.rounded)
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        matches!(self.message, MeterMessage::Show(_))
    }
}

#[derive(Debug, Clone)]
pub struct FillMeter {
    step: f64,
    period_ms: u32,
    percent: f64,
    phase: MeterPhase,
}

impl FillMeter {
    #[must_use]
    pub fn new(config: &PageConfig) -> Self {
        Self { step: config.meter_step, period_ms: config.meter_tick_ms, percent: 0.0, phase: MeterPhase::Idle }
    }

    #[must_use]
    pub fn percent(&self) -> f64 {
        self.percent
    }

    #[must_use]
    pub fn phase(&self) -> MeterPhase {
        self.phase
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.phase == MeterPhase::Full
    }

    /// Tick period the host should arm its ticker with.
    #[must_use]
    pub fn period_ms(&self) -> u32 {
        self.period_ms
    }

    /// Begin (or restart) a hold. Returns `false` once full: there is
    /// nothing left to fill, so no ticker should be armed.
    pub fn start(&mut self) -> bool {
        if self.is_full() {
            return false;
        }
        self.phase = MeterPhase::Filling;
        true
    }

    /// End a hold. The percentage is retained.
    pub fn stop(&mut self) {
        if self.phase == MeterPhase::Filling {
            self.phase = MeterPhase::Idle;
        }
    }

    /// Advance one step. `None` when not filling (stale tick after a
    /// stop, or any tick after completion).
    pub fn tick(&mut self) -> Option<MeterReading> {
        if self.phase != MeterPhase::Filling {
            return None;
        }
        self.percent = (self.percent + self.step).min(100.0);
        let message = if self.percent >= 100.0 {
            self.phase = MeterPhase::Full;
            log::debug!("love meter full");
            MeterMessage::Show(METER_FULL_MESSAGE)
        } else {
            MeterMessage::Clear
        };
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let rounded = self.percent.round() as u8;
        Some(MeterReading { percent: self.percent, rounded, message })
    }
}
