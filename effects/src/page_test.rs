#![allow(clippy::float_cmp)]

use rand::SeedableRng;
use rand::rngs::StdRng;

use super::*;
use crate::consts::*;
use crate::input::InputMode;
use crate::meter::MeterPhase;
use crate::toggle::{Control, FocusTiming, Panel};

// =============================================================
// Helpers
// =============================================================

fn page(input: InputMode) -> PageCore<StdRng> {
    PageCore::new(PageConfig::for_input(input), StdRng::seed_from_u64(42))
        .with_reasons(["Your laugh".to_owned(), "Rainy walks".to_owned()])
}

fn pointer_page() -> PageCore<StdRng> {
    page(InputMode::Pointer)
}

fn touch_page() -> PageCore<StdRng> {
    page(InputMode::Touch)
}

fn spawned(actions: &[Action]) -> Vec<&EffectSpec> {
    actions
        .iter()
        .filter_map(|a| match a {
            Action::Spawn(spec) => Some(spec),
            _ => None,
        })
        .collect()
}

fn toggles(actions: &[Action]) -> Vec<ToggleChange> {
    actions
        .iter()
        .filter_map(|a| match a {
            Action::Toggle(change) => Some(*change),
            _ => None,
        })
        .collect()
}

fn vibrations(actions: &[Action]) -> Vec<u32> {
    actions
        .iter()
        .filter_map(|a| match a {
            Action::Vibrate { ms } => Some(*ms),
            _ => None,
        })
        .collect()
}

// =============================================================
// Tap hearts
// =============================================================

#[test]
fn tap_spawns_one_heart_and_throttles_the_rest() {
    let mut p = pointer_page();
    let first = p.on_tap(Point::new(100.0, 100.0), 0.0);
    assert_eq!(spawned(&first).len(), 1);
    assert!(p.on_tap(Point::new(110.0, 100.0), 100.0).is_empty());
    assert_eq!(spawned(&p.on_tap(Point::new(120.0, 100.0), 200.0)).len(), 1);
}

#[test]
fn expired_hearts_leave_no_live_effects() {
    let mut p = pointer_page();
    let ids: Vec<EffectId> = (0..5)
        .flat_map(|i| p.on_tap(Point::new(10.0, 10.0), f64::from(i) * 500.0))
        .filter_map(|a| match a {
            Action::Spawn(spec) => Some(spec.id),
            _ => None,
        })
        .collect();
    assert_eq!(ids.len(), 5);
    for id in &ids {
        assert!(p.expire(*id));
    }
    for id in &ids {
        assert!(!p.expire(*id));
    }
    assert_eq!(p.spawner().live_count(), 0);
}

// =============================================================
// Letter overlay
// =============================================================

#[test]
fn letter_open_close_round_trip() {
    let mut p = pointer_page();
    let opened = toggles(&p.open_letter());
    assert_eq!(opened.len(), 1);
    assert_eq!(opened[0].panel, Panel::Letter);
    assert_eq!(opened[0].focus, Control::CloseLetter);
    assert!(p.letter().is_open());

    let closed = toggles(&p.close_letter());
    assert_eq!(closed[0].aria_hidden(), "true");
    assert_eq!(closed[0].focus, Control::OpenLetter);
    assert!(!p.letter().is_open());
}

#[test]
fn overlay_click_inside_content_keeps_letter_open() {
    let mut p = pointer_page();
    p.open_letter();
    assert!(p.on_overlay_click(false).is_empty());
    assert!(p.letter().is_open());
    assert_eq!(toggles(&p.on_overlay_click(true)).len(), 1);
    assert!(!p.letter().is_open());
}

// =============================================================
// Cancel key
// =============================================================

#[test]
fn escape_closes_letter_first() {
    let mut p = pointer_page();
    p.accept(0.0);
    p.open_letter();
    let actions = p.on_key(&Key::from("Escape"));
    assert_eq!(toggles(&actions)[0].panel, Panel::Letter);
    assert!(actions.contains(&Action::PreventDefault));
    assert!(p.yes_message().is_open());

    let actions = p.on_key(&Key::from("Escape"));
    let change = toggles(&actions)[0];
    assert_eq!(change.panel, Panel::YesMessage);
    assert_eq!(change.focus, Control::Yes);
    assert_eq!(change.focus_timing, FocusTiming::Now);
    assert!(!p.yes_message().is_open());
}

#[test]
fn escape_with_nothing_open_does_nothing() {
    let mut p = pointer_page();
    assert!(p.on_key(&Key::from("Escape")).is_empty());
}

#[test]
fn other_keys_are_ignored() {
    let mut p = pointer_page();
    p.open_letter();
    assert!(p.on_key(&Key::from("Enter")).is_empty());
    assert!(p.letter().is_open());
}

// =============================================================
// Proposal
// =============================================================

#[test]
fn accept_spawns_confetti_and_opens_message() {
    let mut p = pointer_page();
    let actions = p.accept(0.0);
    assert_eq!(spawned(&actions).len(), CONFETTI_COUNT_POINTER);
    let change = toggles(&actions)[0];
    assert_eq!(change.panel, Panel::YesMessage);
    assert_eq!(change.focus, Control::CloseYes);
    assert_eq!(change.focus_timing, FocusTiming::After(ACCEPT_FOCUS_DELAY_MS));
    assert!(vibrations(&actions).is_empty());
}

#[test]
fn accept_on_touch_pulses_haptics() {
    let mut p = touch_page();
    let actions = p.accept(0.0);
    assert_eq!(spawned(&actions).len(), CONFETTI_COUNT_TOUCH);
    assert_eq!(vibrations(&actions), vec![HAPTIC_ACCEPT_MS]);
}

#[test]
fn accepting_twice_only_adds_confetti() {
    let mut p = pointer_page();
    p.accept(0.0);
    let again = p.accept(10.0);
    assert_eq!(spawned(&again).len(), CONFETTI_COUNT_POINTER);
    assert!(toggles(&again).is_empty());
}

#[test]
fn dismiss_yes_returns_focus_next_tick() {
    let mut p = pointer_page();
    p.accept(0.0);
    let change = toggles(&p.dismiss_yes())[0];
    assert_eq!(change.focus, Control::Yes);
    assert_eq!(change.focus_timing, FocusTiming::After(0));
}

#[test]
fn evade_keeps_button_on_screen() {
    let mut p = pointer_page();
    let vp = Viewport::new(800.0, 600.0);
    let mut rect = Rect::new(400.0, 300.0, 80.0, 40.0);
    for i in 0..50 {
        let actions = p.evade(rect, vp);
        let [Action::Relocate(moved)] = actions.as_slice() else { panic!("expected one relocation") };
        assert_eq!(moved.reparent_at.is_some(), i == 0);
        rect = rect.moved_to(moved.target);
        assert!(vp.contains_with_margin(&rect, EVADE_NEAR_MARGIN_PX));
    }
}

// =============================================================
// Meter
// =============================================================

#[test]
fn hold_arms_ticker_and_release_stops_it() {
    let mut p = pointer_page();
    assert_eq!(p.hold_start(), vec![Action::StartTicker { period_ms: METER_TICK_MS }]);
    assert_eq!(p.meter().phase(), MeterPhase::Filling);
    assert_eq!(p.hold_end(), vec![Action::StopTicker]);
    assert_eq!(p.meter().phase(), MeterPhase::Idle);
}

#[test]
fn holding_to_full_stops_ticker_once_complete() {
    let mut p = pointer_page();
    p.hold_start();
    let mut completions = 0;
    let mut stop_after_full = false;
    for _ in 0..67 {
        let actions = p.hold_tick();
        if let Some(Action::Meter(reading)) = actions.first()
            && reading.is_complete()
        {
            completions += 1;
            stop_after_full = actions.contains(&Action::StopTicker);
        }
    }
    assert_eq!(completions, 1);
    assert!(stop_after_full);
    assert!(p.meter().is_full());
    assert_eq!(p.hold_tick(), vec![Action::StopTicker]);
    assert_eq!(p.hold_start(), vec![Action::StopTicker]);
}

#[test]
fn release_and_rehold_resumes() {
    let mut p = pointer_page();
    p.hold_start();
    for _ in 0..20 {
        p.hold_tick();
    }
    p.hold_end();
    assert_eq!(p.hold_tick(), vec![Action::StopTicker]);
    p.hold_start();
    let actions = p.hold_tick();
    let Some(Action::Meter(reading)) = actions.first() else { panic!("expected a reading") };
    assert!((reading.percent - 31.5).abs() < 1e-9);
}

// =============================================================
// Reason cards
// =============================================================

#[test]
fn reveal_shows_reason_once() {
    let mut p = touch_page();
    let actions = p.reveal(0);
    assert_eq!(actions[0], Action::Revealed { index: 0, text: "Your laugh".to_owned() });
    assert_eq!(vibrations(&actions), vec![HAPTIC_REVEAL_MS]);
    assert!(p.reveal(0).is_empty());
    assert_eq!(p.reasons().revealed_count(), 1);
}

#[test]
fn reveal_unknown_card_is_ignored() {
    let mut p = pointer_page();
    assert!(p.reveal(7).is_empty());
}

// =============================================================
// Locket
// =============================================================

#[test]
fn locket_opens_once_and_schedules_burst() {
    let mut p = touch_page();
    let actions = p.open_locket();
    assert_eq!(actions[0], Action::LocketOpened { label: LOCKET_OPEN_LABEL });
    assert_eq!(actions[1], Action::Schedule { delay_ms: LOCKET_BURST_DELAY_MS, task: Deferred::LocketBurst });
    assert_eq!(vibrations(&actions), vec![HAPTIC_LOCKET_MS]);
    assert!(p.locket().is_open());
    assert!(p.open_locket().is_empty());
}

#[test]
fn deferred_burst_spawns_configured_count() {
    let mut p = pointer_page();
    p.open_locket();
    let burst = p.run_deferred(Deferred::LocketBurst, f64::from(LOCKET_BURST_DELAY_MS));
    let specs = spawned(&burst);
    assert_eq!(specs.len(), LOCKET_BURST_COUNT);
    assert!(specs.iter().all(|s| s.kind == EffectKind::LocketBurst));
    assert!(p.open_locket().is_empty());
    assert_eq!(p.spawner().live_count(), LOCKET_BURST_COUNT);
}

// =============================================================
// Ambient
// =============================================================

#[test]
fn decorations_follow_viewport_width() {
    let mut p = pointer_page();
    assert_eq!(p.decorations(375.0).len(), AMBIENT_COUNT_NARROW);
    assert_eq!(p.decorations(1280.0).len(), AMBIENT_COUNT_WIDE);
}
