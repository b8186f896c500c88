//! Input model: modality detected at startup and the keys the page reacts to.
//!
//! `InputMode` is decided once (touch capability is feature-tested by the
//! host) and then drives which events get bound, the tap throttle window,
//! the confetti count, and whether haptic pulses are attempted.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

/// How the user is expected to interact with the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Mouse or trackpad; taps arrive as `click`.
    #[default]
    Pointer,
    /// Touch screen; taps arrive as `touchend`.
    Touch,
}

impl InputMode {
    /// Pick the mode from the host's touch capability probe.
    #[must_use]
    pub fn detect(has_touch: bool) -> Self {
        if has_touch { Self::Touch } else { Self::Pointer }
    }

    #[must_use]
    pub fn is_touch(self) -> bool {
        matches!(self, Self::Touch)
    }
}

/// A keyboard key as reported by `KeyboardEvent.key`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

impl Key {
    /// The cancel key that closes whichever panel is open.
    #[must_use]
    pub fn is_cancel(&self) -> bool {
        self.0 == "Escape"
    }
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}
