//! Glyph and colour palettes for spawned effects.

use rand::Rng;
use rand::seq::IndexedRandom;

/// Heart glyphs used by tap hearts, burst hearts and ambient decoration.
pub const HEARTS: &[&str] = &[
    "\u{2764}\u{FE0F}",
    "\u{1F495}",
    "\u{1F497}",
    "\u{1F496}",
    "\u{1F49D}",
    "\u{1F498}",
];

/// Confetti fill colours.
pub const CONFETTI_COLORS: &[&str] = &["#a63652", "#d892a8", "#b8964f", "#f0d4dc", "#8f2d47"];

/// A uniformly chosen heart glyph.
pub fn heart<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    HEARTS.choose(rng).copied().unwrap_or(HEARTS[0])
}

/// A uniformly chosen confetti colour.
pub fn confetti_color<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    CONFETTI_COLORS.choose(rng).copied().unwrap_or(CONFETTI_COLORS[0])
}
