//! Page configuration: input-dependent defaults plus optional JSON overrides.
//!
//! The host may embed a `<script id="page-config" type="application/json">`
//! block; any field present there replaces the default for the detected
//! input mode. Unknown fields are rejected.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts::*;
use crate::input::InputMode;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config parse failed: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageConfig {
    pub input: InputMode,
    pub tap_throttle_ms: f64,
    pub tap_heart_lifetime_ms: u32,
    pub confetti_count: usize,
    pub confetti_lifetime_ms: u32,
    pub locket_burst_count: usize,
    pub locket_burst_delay_ms: u32,
    pub locket_heart_lifetime_ms: u32,
    pub meter_tick_ms: u32,
    pub meter_step: f64,
    pub evade_near_margin_px: f64,
    pub evade_far_margin_px: f64,
    pub haptics: bool,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self::for_input(InputMode::Pointer)
    }
}

/// Wire shape of the overrides block. Every field is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
struct ConfigOverrides {
    tap_throttle_ms: Option<f64>,
    tap_heart_lifetime_ms: Option<u32>,
    confetti_count: Option<usize>,
    confetti_lifetime_ms: Option<u32>,
    locket_burst_count: Option<usize>,
    locket_burst_delay_ms: Option<u32>,
    locket_heart_lifetime_ms: Option<u32>,
    meter_tick_ms: Option<u32>,
    meter_step: Option<f64>,
    evade_near_margin_px: Option<f64>,
    evade_far_margin_px: Option<f64>,
    haptics: Option<bool>,
}

impl PageConfig {
    /// Defaults for the given input mode.
    #[must_use]
    pub fn for_input(input: InputMode) -> Self {
        let touch = input.is_touch();
        Self {
            input,
            tap_throttle_ms: if touch { TAP_THROTTLE_TOUCH_MS } else { TAP_THROTTLE_POINTER_MS },
            tap_heart_lifetime_ms: TAP_HEART_LIFETIME_MS,
            confetti_count: if touch { CONFETTI_COUNT_TOUCH } else { CONFETTI_COUNT_POINTER },
            confetti_lifetime_ms: CONFETTI_LIFETIME_MS,
            locket_burst_count: LOCKET_BURST_COUNT,
            locket_burst_delay_ms: LOCKET_BURST_DELAY_MS,
            locket_heart_lifetime_ms: LOCKET_HEART_LIFETIME_MS,
            meter_tick_ms: METER_TICK_MS,
            meter_step: METER_STEP,
            evade_near_margin_px: EVADE_NEAR_MARGIN_PX,
            evade_far_margin_px: EVADE_FAR_MARGIN_PX,
            haptics: touch,
        }
    }

    /// Defaults for `input` with the JSON overrides in `raw` applied on top.
    pub fn from_json(raw: &str, input: InputMode) -> Result<Self, ConfigError> {
        let overrides: ConfigOverrides = serde_json::from_str(raw)?;
        let mut cfg = Self::for_input(input);
        cfg.apply(overrides);
        cfg.validate()?;
        Ok(cfg)
    }

    fn apply(&mut self, o: ConfigOverrides) {
        if let Some(v) = o.tap_throttle_ms {
            self.tap_throttle_ms = v;
        }
        if let Some(v) = o.tap_heart_lifetime_ms {
            self.tap_heart_lifetime_ms = v;
        }
        if let Some(v) = o.confetti_count {
            self.confetti_count = v;
        }
        if let Some(v) = o.confetti_lifetime_ms {
            self.confetti_lifetime_ms = v;
        }
        if let Some(v) = o.locket_burst_count {
            self.locket_burst_count = v;
        }
        if let Some(v) = o.locket_burst_delay_ms {
            self.locket_burst_delay_ms = v;
        }
        if let Some(v) = o.locket_heart_lifetime_ms {
            self.locket_heart_lifetime_ms = v;
        }
        if let Some(v) = o.meter_tick_ms {
            self.meter_tick_ms = v;
        }
        if let Some(v) = o.meter_step {
            self.meter_step = v;
        }
        if let Some(v) = o.evade_near_margin_px {
            self.evade_near_margin_px = v;
        }
        if let Some(v) = o.evade_far_margin_px {
            self.evade_far_margin_px = v;
        }
        if let Some(v) = o.haptics {
            self.haptics = v;
        }
    }

    /// Reject values that would stall or break an effect.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.tap_throttle_ms.is_finite() && self.tap_throttle_ms >= 0.0) {
            return Err(invalid("tapThrottleMs", "must be a non-negative number"));
        }
        if self.meter_tick_ms == 0 {
            return Err(invalid("meterTickMs", "must be greater than zero"));
        }
        if !(self.meter_step > 0.0 && self.meter_step <= 100.0) {
            return Err(invalid("meterStep", "must be in (0, 100]"));
        }
        for (field, lifetime) in [
            ("tapHeartLifetimeMs", self.tap_heart_lifetime_ms),
            ("confettiLifetimeMs", self.confetti_lifetime_ms),
            ("locketHeartLifetimeMs", self.locket_heart_lifetime_ms),
        ] {
            if lifetime == 0 {
                return Err(invalid(field, "must be greater than zero"));
            }
        }
        if !(self.evade_near_margin_px >= 0.0 && self.evade_far_margin_px >= self.evade_near_margin_px) {
            return Err(invalid(
                "evadeFarMarginPx",
                "margins must be non-negative and the far margin at least the near margin",
            ));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: &str) -> ConfigError {
    ConfigError::Invalid { field, reason: reason.to_owned() }
}
