//! The button that slips away from the pointer.
//!
//! The first relocation lifts the button out of its section: the host
//! reparents it to `<body>` with fixed positioning, pinned at its current
//! on-screen rect with transitions off, then re-enables transitions. Every
//! relocation (first included) picks a uniform random spot that keeps the
//! whole box inside the viewport: at least the near margin from the
//! left/top edges and the far margin from the right/bottom edges.

#[cfg(test)]
#[path = "evasive_test.rs"]
mod evasive_test;

use rand::Rng;

use crate::config::PageConfig;
use crate::geom::{Point, Rect, Viewport};

/// One move for the host to animate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Relocation {
    /// Set on the first move only: where to pin the button before it
    /// starts travelling.
    pub reparent_at: Option<Point>,
    /// New top-left corner in viewport coordinates.
    pub target: Point,
}

#[derive(Debug, Clone)]
pub struct EvasiveButton {
    near_margin: f64,
    far_margin: f64,
    reparented: bool,
}

impl EvasiveButton {
    #[must_use]
    pub fn new(config: &PageConfig) -> Self {
        Self {
            near_margin: config.evade_near_margin_px,
            far_margin: config.evade_far_margin_px,
            reparented: false,
        }
    }

    #[must_use]
    pub fn is_reparented(&self) -> bool {
        self.reparented
    }

    /// Pick the next spot for a button currently occupying `current`.
    pub fn relocate<R: Rng + ?Sized>(&mut self, current: Rect, viewport: Viewport, rng: &mut R) -> Relocation {
        let reparent_at = if self.reparented {
            None
        } else {
            self.reparented = true;
            Some(current.origin())
        };
        let target = Point::new(
            self.pick_axis(viewport.width, current.width, rng),
            self.pick_axis(viewport.height, current.height, rng),
        );
        Relocation { reparent_at, target }
    }

    /// Uniform offset along one axis; pins to the near margin when the
    /// viewport is too small to leave any room.
    fn pick_axis<R: Rng + ?Sized>(&self, extent: f64, size: f64, rng: &mut R) -> f64 {
        let max = extent - size - self.far_margin;
        if max <= self.near_margin {
            self.near_margin
        } else {
            rng.random_range(self.near_margin..=max)
        }
    }
}
