//! Ephemeral effect spawner and the ledger of live effect elements.
//!
//! Every spawn produces an [`EffectSpec`]: the glyph, placement and timing the
//! host needs to build one short-lived element, plus the lifetime after which
//! the host must remove it. The spawner records each spec in a live ledger
//! keyed by [`EffectId`]; the host reports removal through
//! [`Spawner::expire`], which succeeds exactly once per id.
//!
//! Three placement modes exist:
//! - tap effects sit at absolute pixel coordinates under the pointer,
//! - full-screen effects pick a random horizontal percentage,
//! - radial effects carry a polar-random offset from a fixed centre.

#[cfg(test)]
#[path = "spawn_test.rs"]
mod spawn_test;

use std::collections::BTreeSet;
use std::f64::consts::TAU;

use rand::Rng;

use crate::config::PageConfig;
use crate::consts::*;
use crate::geom::Point;
use crate::palette;
use crate::throttle::Throttle;

/// Identifier of one spawned element, unique for the life of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EffectId(pub u64);

/// Effect category; decides class, placement mode and lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectKind {
    /// Heart floating up from a tap or click.
    TapHeart,
    /// Confetti piece falling across the whole viewport.
    Confetti,
    /// Heart flying out of the opened locket.
    LocketBurst,
}

impl EffectKind {
    /// CSS class carrying the kind's animation.
    #[must_use]
    pub fn class_name(self) -> &'static str {
        match self {
            Self::TapHeart => "floating-heart",
            Self::Confetti => "confetti",
            Self::LocketBurst => "locket-spawn-heart",
        }
    }
}

/// What the element shows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Glyph {
    /// Text content (an emoji heart).
    Text(&'static str),
    /// A coloured swatch; round pieces get a 50% border radius.
    Swatch { color: &'static str, round: bool },
}

/// Where the element sits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Placement {
    /// Absolute pixel coordinates inside the container.
    At(Point),
    /// Horizontal offset in viewport-width percent.
    Across { left_vw: f64 },
    /// Offset from the container centre, exposed as `--dx` / `--dy`.
    Radial { dx: f64, dy: f64 },
}

/// Animation timing overrides; `None` leaves the stylesheet value in place.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Timing {
    pub delay_s: Option<f64>,
    pub duration_s: Option<f64>,
}

/// Everything the host needs to build, insert and later remove one element.
#[derive(Debug, Clone, PartialEq)]
pub struct EffectSpec {
    pub id: EffectId,
    pub kind: EffectKind,
    pub glyph: Glyph,
    pub placement: Placement,
    pub timing: Timing,
    /// Removal delay, counted from insertion. Never cancelled.
    pub lifetime_ms: u32,
}

pub struct Spawner {
    next_id: u64,
    live: BTreeSet<EffectId>,
    tap_throttle: Throttle,
    tap_lifetime_ms: u32,
    confetti_count: usize,
    confetti_lifetime_ms: u32,
    burst_count: usize,
    burst_lifetime_ms: u32,
}

impl Spawner {
    #[must_use]
    pub fn new(config: &PageConfig) -> Self {
        Self {
            next_id: 1,
            live: BTreeSet::new(),
            tap_throttle: Throttle::new(config.tap_throttle_ms),
            tap_lifetime_ms: config.tap_heart_lifetime_ms,
            confetti_count: config.confetti_count,
            confetti_lifetime_ms: config.confetti_lifetime_ms,
            burst_count: config.locket_burst_count,
            burst_lifetime_ms: config.locket_heart_lifetime_ms,
        }
    }

    /// Spawn effects of `kind`.
    ///
    /// Tap hearts need an `origin` and are rate-limited; the other kinds
    /// ignore `origin` and always produce their full batch.
    pub fn spawn<R: Rng + ?Sized>(
        &mut self,
        kind: EffectKind,
        origin: Option<Point>,
        now_ms: f64,
        rng: &mut R,
    ) -> Vec<EffectSpec> {
        match kind {
            EffectKind::TapHeart => origin
                .and_then(|at| self.tap(at, now_ms, rng))
                .into_iter()
                .collect(),
            EffectKind::Confetti => self.confetti(rng),
            EffectKind::LocketBurst => self.burst(rng),
        }
    }

    /// One heart under the pointer, unless throttled.
    ///
    /// A zero coordinate means the host had no usable position; such taps
    /// are ignored without consuming the throttle window.
    pub fn tap<R: Rng + ?Sized>(&mut self, at: Point, now_ms: f64, rng: &mut R) -> Option<EffectSpec> {
        if at.x == 0.0 || at.y == 0.0 {
            return None;
        }
        if !self.tap_throttle.admit(now_ms) {
            log::trace!("tap heart throttled at {now_ms}ms");
            return None;
        }
        let glyph = Glyph::Text(palette::heart(rng));
        let lifetime_ms = self.tap_lifetime_ms;
        Some(self.register(EffectKind::TapHeart, glyph, Placement::At(at), Timing::default(), lifetime_ms))
    }

    /// A full-screen confetti batch.
    pub fn confetti<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Vec<EffectSpec> {
        let lifetime_ms = self.confetti_lifetime_ms;
        (0..self.confetti_count)
            .map(|_| {
                let glyph = Glyph::Swatch { color: palette::confetti_color(rng), round: rng.random_bool(0.5) };
                let placement = Placement::Across { left_vw: rng.random_range(0.0..100.0) };
                let timing = Timing {
                    delay_s: Some(rng.random_range(0.0..CONFETTI_MAX_DELAY_S)),
                    duration_s: Some(CONFETTI_MIN_DURATION_S + rng.random_range(0.0..CONFETTI_DURATION_SPAN_S)),
                };
                self.register(EffectKind::Confetti, glyph, placement, timing, lifetime_ms)
            })
            .collect()
    }

    /// A radial burst: evenly spaced angles with jitter, staggered starts.
    pub fn burst<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Vec<EffectSpec> {
        let count = self.burst_count;
        let lifetime_ms = self.burst_lifetime_ms;
        if count == 0 {
            return Vec::new();
        }
        #[allow(clippy::cast_precision_loss)]
        let angle_step = TAU / count as f64;
        (0..count)
            .map(|i| {
                #[allow(clippy::cast_precision_loss)]
                let index = i as f64;
                let angle = angle_step * index + rng.random_range(0.0..LOCKET_ANGLE_JITTER);
                let dist = LOCKET_MIN_DISTANCE_PX + rng.random_range(0.0..LOCKET_DISTANCE_SPAN_PX);
                let placement = Placement::Radial { dx: angle.cos() * dist, dy: angle.sin() * dist - LOCKET_LIFT_PX };
                let timing = Timing { delay_s: Some(index * LOCKET_STAGGER_S), duration_s: None };
                self.register(
                    EffectKind::LocketBurst,
                    Glyph::Text(palette::heart(rng)),
                    placement,
                    timing,
                    lifetime_ms,
                )
            })
            .collect()
    }

    /// Drop `id` from the live ledger. Returns `false` if it was already gone.
    pub fn expire(&mut self, id: EffectId) -> bool {
        self.live.remove(&id)
    }

    #[must_use]
    pub fn is_live(&self, id: EffectId) -> bool {
        self.live.contains(&id)
    }

    #[must_use]
    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    fn register(
        &mut self,
        kind: EffectKind,
        glyph: Glyph,
        placement: Placement,
        timing: Timing,
        lifetime_ms: u32,
    ) -> EffectSpec {
        let id = EffectId(self.next_id);
        self.next_id += 1;
        self.live.insert(id);
        EffectSpec { id, kind, glyph, placement, timing, lifetime_ms }
    }
}
