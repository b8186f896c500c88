//! Shared numeric constants for the effects crate.

// ── Tap hearts ──────────────────────────────────────────────────

/// Minimum gap between admitted tap hearts on pointer devices.
pub const TAP_THROTTLE_POINTER_MS: f64 = 180.0;

/// Minimum gap between admitted tap hearts on touch devices.
///
/// Longer than the pointer gap so multi-touch bursts do not flood the page.
pub const TAP_THROTTLE_TOUCH_MS: f64 = 350.0;

/// How long a tap heart stays in the document.
pub const TAP_HEART_LIFETIME_MS: u32 = 2800;

// ── Confetti ────────────────────────────────────────────────────

/// Confetti pieces per burst on pointer devices.
pub const CONFETTI_COUNT_POINTER: usize = 60;

/// Confetti pieces per burst on touch devices.
pub const CONFETTI_COUNT_TOUCH: usize = 40;

/// How long a confetti piece stays in the document.
pub const CONFETTI_LIFETIME_MS: u32 = 5000;

/// Upper bound (exclusive) of a confetti piece's animation delay, in seconds.
pub const CONFETTI_MAX_DELAY_S: f64 = 0.5;

/// Confetti animation duration range `[min, min + span)`, in seconds.
pub const CONFETTI_MIN_DURATION_S: f64 = 3.0;
pub const CONFETTI_DURATION_SPAN_S: f64 = 2.0;

// ── Locket ──────────────────────────────────────────────────────

/// Number of hearts in the locket burst.
pub const LOCKET_BURST_COUNT: usize = 8;

/// Delay between opening the locket and the burst, letting the hinge play.
pub const LOCKET_BURST_DELAY_MS: u32 = 400;

/// How long a burst heart stays in the document.
pub const LOCKET_HEART_LIFETIME_MS: u32 = 2500;

/// Random angular jitter added to each burst heart, in radians.
pub const LOCKET_ANGLE_JITTER: f64 = 0.5;

/// Burst distance range `[min, min + span)`, in pixels.
pub const LOCKET_MIN_DISTANCE_PX: f64 = 80.0;
pub const LOCKET_DISTANCE_SPAN_PX: f64 = 40.0;

/// Upward lift applied to every burst heart's vertical offset, in pixels.
pub const LOCKET_LIFT_PX: f64 = 20.0;

/// Per-heart stagger of the burst animation, in seconds.
pub const LOCKET_STAGGER_S: f64 = 0.05;

/// Accessible label applied once the locket is open.
pub const LOCKET_OPEN_LABEL: &str = "Locket opened";

// ── Meter ───────────────────────────────────────────────────────

/// Meter tick period.
pub const METER_TICK_MS: u32 = 50;

/// Percentage added per tick.
pub const METER_STEP: f64 = 1.5;

/// Message shown once the meter is full.
pub const METER_FULL_MESSAGE: &str = "All of it. \u{2764}\u{FE0F}";

// ── Evasive button ──────────────────────────────────────────────

/// Minimum distance from the left/top viewport edge.
pub const EVADE_NEAR_MARGIN_PX: f64 = 12.0;

/// Space reserved from the right/bottom viewport edge.
pub const EVADE_FAR_MARGIN_PX: f64 = 24.0;

// ── Haptics ─────────────────────────────────────────────────────

pub const HAPTIC_ACCEPT_MS: u32 = 50;
pub const HAPTIC_LOCKET_MS: u32 = 30;
pub const HAPTIC_REVEAL_MS: u32 = 20;

// ── Focus ───────────────────────────────────────────────────────

/// Delay before focusing the confirmation message's close control.
pub const ACCEPT_FOCUS_DELAY_MS: u32 = 100;

// ── Ambient ─────────────────────────────────────────────────────

/// Viewport widths at or below this get the reduced ambient count.
pub const AMBIENT_NARROW_BREAKPOINT_PX: f64 = 480.0;
pub const AMBIENT_COUNT_NARROW: usize = 6;
pub const AMBIENT_COUNT_WIDE: usize = 12;
pub const AMBIENT_MAX_DELAY_S: f64 = 20.0;
pub const AMBIENT_MIN_DURATION_S: f64 = 15.0;
pub const AMBIENT_DURATION_SPAN_S: f64 = 10.0;
