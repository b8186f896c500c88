//! Binary open/closed panels with accessibility mirroring and focus hand-off.
//!
//! DESIGN
//! ======
//! A toggle owns only its flag. Opening hands focus to the panel's close
//! control, closing hands it back to the control that opened it; the host
//! applies the resulting [`ToggleChange`] (class, `aria-hidden`, focus).
//! Repeating an open on an open panel, or a close on a closed one, yields
//! nothing, so stray events never steal focus.

#[cfg(test)]
#[path = "toggle_test.rs"]
mod toggle_test;

/// The page's toggle panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    /// Full-screen letter overlay.
    Letter,
    /// Confirmation message shown after accepting.
    YesMessage,
}

impl Panel {
    /// Class that marks the panel as shown.
    #[must_use]
    pub fn visible_class(self) -> &'static str {
        match self {
            Self::Letter => "is-open",
            Self::YesMessage => "is-visible",
        }
    }
}

/// Focusable controls that toggles hand focus between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    OpenLetter,
    CloseLetter,
    Yes,
    CloseYes,
}

/// When the host should move focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTiming {
    /// Inside the current callback.
    Now,
    /// After a timer of the given length (0 = next tick).
    After(u32),
}

/// What closed the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dismissal {
    /// The panel's own close control.
    Control,
    /// The global cancel key.
    Cancel,
    /// A click on the backdrop outside the content.
    Backdrop,
}

/// A state flip for the host to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleChange {
    pub panel: Panel,
    pub open: bool,
    pub focus: Control,
    pub focus_timing: FocusTiming,
}

impl ToggleChange {
    /// Value for the panel's `aria-hidden` attribute.
    #[must_use]
    pub fn aria_hidden(&self) -> &'static str {
        if self.open { "false" } else { "true" }
    }
}

#[derive(Debug, Clone)]
pub struct Toggle {
    panel: Panel,
    opener: Control,
    closer: Control,
    open_focus: FocusTiming,
    close_focus: FocusTiming,
    open: bool,
}

impl Toggle {
    /// The letter overlay: focus moves synchronously both ways.
    #[must_use]
    pub fn letter() -> Self {
        Self {
            panel: Panel::Letter,
            opener: Control::OpenLetter,
            closer: Control::CloseLetter,
            open_focus: FocusTiming::Now,
            close_focus: FocusTiming::Now,
            open: false,
        }
    }

    /// The confirmation message: focus waits for the entrance transition on
    /// open, and for the next tick when closed from its button.
    #[must_use]
    pub fn yes_message(open_focus_delay_ms: u32) -> Self {
        Self {
            panel: Panel::YesMessage,
            opener: Control::Yes,
            closer: Control::CloseYes,
            open_focus: FocusTiming::After(open_focus_delay_ms),
            close_focus: FocusTiming::After(0),
            open: false,
        }
    }

    #[must_use]
    pub fn panel(&self) -> Panel {
        self.panel
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) -> Option<ToggleChange> {
        if self.open {
            return None;
        }
        self.open = true;
        Some(ToggleChange { panel: self.panel, open: true, focus: self.closer, focus_timing: self.open_focus })
    }

    pub fn close(&mut self, via: Dismissal) -> Option<ToggleChange> {
        if !self.open {
            return None;
        }
        self.open = false;
        let focus_timing = match via {
            Dismissal::Cancel => FocusTiming::Now,
            Dismissal::Control | Dismissal::Backdrop => self.close_focus,
        };
        Some(ToggleChange { panel: self.panel, open: false, focus: self.opener, focus_timing })
    }
}
