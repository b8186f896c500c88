//! Locket: opens once, then bursts hearts after the hinge animation.

#[cfg(test)]
#[path = "locket_test.rs"]
mod locket_test;

use crate::config::PageConfig;
use crate::consts::LOCKET_OPEN_LABEL;

/// Instructions for the first (and only) opening.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocketOpening {
    /// New `aria-label` for the locket control.
    pub label: &'static str,
    /// Delay before the burst so the opening transition can play.
    pub burst_delay_ms: u32,
}

#[derive(Debug, Clone)]
pub struct Locket {
    burst_delay_ms: u32,
    open: bool,
}

impl Locket {
    #[must_use]
    pub fn new(config: &PageConfig) -> Self {
        Self { burst_delay_ms: config.locket_burst_delay_ms, open: false }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Open the locket. Only the first call does anything.
    pub fn open(&mut self) -> Option<LocketOpening> {
        if self.open {
            return None;
        }
        self.open = true;
        log::debug!("locket opened");
        Some(LocketOpening { label: LOCKET_OPEN_LABEL, burst_delay_ms: self.burst_delay_ms })
    }
}
