//! Page-level façade over every widget.
//!
//! `PageCore` owns all per-widget state and the random source. Each input
//! handler returns the [`Action`]s the host must apply, in order, within the
//! same callback. Nothing here touches the DOM or a timer, so the whole page
//! can be driven from tests with explicit timestamps and a seeded RNG.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

use rand::Rng;

use crate::ambient::{self, Decoration};
use crate::config::PageConfig;
use crate::consts::{ACCEPT_FOCUS_DELAY_MS, HAPTIC_ACCEPT_MS, HAPTIC_LOCKET_MS, HAPTIC_REVEAL_MS};
use crate::evasive::{EvasiveButton, Relocation};
use crate::geom::{Point, Rect, Viewport};
use crate::input::Key;
use crate::locket::Locket;
use crate::meter::{FillMeter, MeterReading};
use crate::reveal::RevealDeck;
use crate::spawn::{EffectId, EffectKind, EffectSpec, Spawner};
use crate::toggle::{Dismissal, Toggle, ToggleChange};

/// Work the host must run later, after a fixed delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deferred {
    /// Spawn the locket's radial burst.
    LocketBurst,
}

/// Actions returned from input handlers for the host to apply.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Insert an element and arm its removal timer.
    Spawn(EffectSpec),
    /// Flip a panel, mirror `aria-hidden`, move focus.
    Toggle(ToggleChange),
    /// Move the evasive button.
    Relocate(Relocation),
    /// Arm the meter ticker, replacing any running one.
    StartTicker { period_ms: u32 },
    /// Drop the meter ticker.
    StopTicker,
    /// Publish a meter reading.
    Meter(MeterReading),
    /// Show a card's reason text.
    Revealed { index: usize, text: String },
    /// Mark the locket open and relabel it.
    LocketOpened { label: &'static str },
    /// Run `task` after `delay_ms`.
    Schedule { delay_ms: u32, task: Deferred },
    /// Haptic pulse.
    Vibrate { ms: u32 },
    /// Suppress the triggering event's default action.
    PreventDefault,
}

pub struct PageCore<R> {
    config: PageConfig,
    rng: R,
    spawner: Spawner,
    letter: Toggle,
    yes_message: Toggle,
    no_button: EvasiveButton,
    meter: FillMeter,
    reasons: RevealDeck,
    locket: Locket,
}

impl<R: Rng> PageCore<R> {
    #[must_use]
    pub fn new(config: PageConfig, rng: R) -> Self {
        Self {
            spawner: Spawner::new(&config),
            letter: Toggle::letter(),
            yes_message: Toggle::yes_message(ACCEPT_FOCUS_DELAY_MS),
            no_button: EvasiveButton::new(&config),
            meter: FillMeter::new(&config),
            reasons: RevealDeck::default(),
            locket: Locket::new(&config),
            config,
            rng,
        }
    }

    /// Bind reason texts to cards, in document order.
    #[must_use]
    pub fn with_reasons(mut self, reasons: impl IntoIterator<Item = String>) -> Self {
        self.reasons = RevealDeck::new(reasons);
        self
    }

    // --- Startup ---

    /// Background hearts for a viewport `width` pixels wide.
    pub fn decorations(&mut self, width: f64) -> Vec<Decoration> {
        ambient::decorations(width, &mut self.rng)
    }

    // --- Tap hearts ---

    pub fn on_tap(&mut self, at: Point, now_ms: f64) -> Vec<Action> {
        self.spawner
            .spawn(EffectKind::TapHeart, Some(at), now_ms, &mut self.rng)
            .into_iter()
            .map(Action::Spawn)
            .collect()
    }

    /// The host removed (or is about to remove) effect `id`.
    pub fn expire(&mut self, id: EffectId) -> bool {
        self.spawner.expire(id)
    }

    // --- Letter overlay ---

    pub fn open_letter(&mut self) -> Vec<Action> {
        self.letter.open().map(Action::Toggle).into_iter().collect()
    }

    pub fn close_letter(&mut self) -> Vec<Action> {
        self.letter.close(Dismissal::Control).map(Action::Toggle).into_iter().collect()
    }

    /// A click landed on the overlay; only the backdrop itself dismisses.
    pub fn on_overlay_click(&mut self, on_backdrop: bool) -> Vec<Action> {
        if !on_backdrop {
            return Vec::new();
        }
        self.letter.close(Dismissal::Backdrop).map(Action::Toggle).into_iter().collect()
    }

    // --- Global keys ---

    /// Cancel closes the letter if open, else the confirmation message.
    pub fn on_key(&mut self, key: &Key) -> Vec<Action> {
        if !key.is_cancel() {
            return Vec::new();
        }
        let change = if self.letter.is_open() {
            self.letter.close(Dismissal::Cancel)
        } else {
            self.yes_message.close(Dismissal::Cancel)
        };
        match change {
            Some(change) => vec![Action::Toggle(change), Action::PreventDefault],
            None => Vec::new(),
        }
    }

    // --- Proposal ---

    /// "Yes": confetti, confirmation message, haptic pulse.
    pub fn accept(&mut self, now_ms: f64) -> Vec<Action> {
        let mut actions: Vec<Action> = self
            .spawner
            .spawn(EffectKind::Confetti, None, now_ms, &mut self.rng)
            .into_iter()
            .map(Action::Spawn)
            .collect();
        actions.extend(self.yes_message.open().map(Action::Toggle));
        actions.extend(self.haptic(HAPTIC_ACCEPT_MS));
        actions
    }

    pub fn dismiss_yes(&mut self) -> Vec<Action> {
        self.yes_message.close(Dismissal::Control).map(Action::Toggle).into_iter().collect()
    }

    /// "No": run away from a button currently at `current`.
    pub fn evade(&mut self, current: Rect, viewport: Viewport) -> Vec<Action> {
        vec![Action::Relocate(self.no_button.relocate(current, viewport, &mut self.rng))]
    }

    // --- Meter ---

    pub fn hold_start(&mut self) -> Vec<Action> {
        if self.meter.start() {
            vec![Action::StartTicker { period_ms: self.meter.period_ms() }]
        } else {
            vec![Action::StopTicker]
        }
    }

    pub fn hold_tick(&mut self) -> Vec<Action> {
        match self.meter.tick() {
            Some(reading) => {
                let done = reading.is_complete();
                let mut actions = vec![Action::Meter(reading)];
                if done {
                    actions.push(Action::StopTicker);
                }
                actions
            }
            None => vec![Action::StopTicker],
        }
    }

    pub fn hold_end(&mut self) -> Vec<Action> {
        self.meter.stop();
        vec![Action::StopTicker]
    }

    // --- Reason cards ---

    pub fn reveal(&mut self, index: usize) -> Vec<Action> {
        let Some(text) = self.reasons.reveal(index) else {
            return Vec::new();
        };
        let mut actions = vec![Action::Revealed { index, text }];
        actions.extend(self.haptic(HAPTIC_REVEAL_MS));
        actions
    }

    // --- Locket ---

    pub fn open_locket(&mut self) -> Vec<Action> {
        let Some(opening) = self.locket.open() else {
            return Vec::new();
        };
        let mut actions = vec![
            Action::LocketOpened { label: opening.label },
            Action::Schedule { delay_ms: opening.burst_delay_ms, task: Deferred::LocketBurst },
        ];
        actions.extend(self.haptic(HAPTIC_LOCKET_MS));
        actions
    }

    /// Run a task previously handed out through [`Action::Schedule`].
    pub fn run_deferred(&mut self, task: Deferred, now_ms: f64) -> Vec<Action> {
        match task {
            Deferred::LocketBurst => self
                .spawner
                .spawn(EffectKind::LocketBurst, None, now_ms, &mut self.rng)
                .into_iter()
                .map(Action::Spawn)
                .collect(),
        }
    }

    // --- Queries ---

    #[must_use]
    pub fn spawner(&self) -> &Spawner {
        &self.spawner
    }

    #[must_use]
    pub fn letter(&self) -> &Toggle {
        &self.letter
    }

    #[must_use]
    pub fn yes_message(&self) -> &Toggle {
        &self.yes_message
    }

    #[must_use]
    pub fn no_button(&self) -> &EvasiveButton {
        &self.no_button
    }

    #[must_use]
    pub fn meter(&self) -> &FillMeter {
        &self.meter
    }

    #[must_use]
    pub fn reasons(&self) -> &RevealDeck {
        &self.reasons
    }

    #[must_use]
    pub fn locket(&self) -> &Locket {
        &self.locket
    }

    fn haptic(&self, ms: u32) -> Option<Action> {
        self.config.haptics.then_some(Action::Vibrate { ms })
    }
}
