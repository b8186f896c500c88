//! Background hearts created once at startup.
//!
//! Unlike spawned effects these loop for the life of the page and are never
//! removed, so they carry no id or lifetime.

#[cfg(test)]
#[path = "ambient_test.rs"]
mod ambient_test;

use rand::Rng;

use crate::consts::*;
use crate::palette;

/// One looping background heart.
#[derive(Debug, Clone, PartialEq)]
pub struct Decoration {
    pub glyph: &'static str,
    /// Horizontal offset in percent of the container width.
    pub left_pct: f64,
    pub delay_s: f64,
    pub duration_s: f64,
}

/// CSS class of a background heart.
pub const AMBIENT_CLASS: &str = "ambient-heart";

/// How many background hearts suit a viewport `width` pixels wide.
#[must_use]
pub fn count_for_width(width: f64) -> usize {
    if width <= AMBIENT_NARROW_BREAKPOINT_PX { AMBIENT_COUNT_NARROW } else { AMBIENT_COUNT_WIDE }
}

/// Build the decoration set for a viewport `width` pixels wide.
pub fn decorations<R: Rng + ?Sized>(width: f64, rng: &mut R) -> Vec<Decoration> {
    (0..count_for_width(width))
        .map(|_| Decoration {
            glyph: palette::heart(rng),
            left_pct: rng.random_range(0.0..100.0),
            delay_s: rng.random_range(0.0..AMBIENT_MAX_DELAY_S),
            duration_s: AMBIENT_MIN_DURATION_S + rng.random_range(0.0..AMBIENT_DURATION_SPAN_S),
        })
        .collect()
}
