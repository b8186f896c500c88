//! Interaction core for the greeting page.
//!
//! This crate holds every piece of page behaviour that does not need a
//! browser: the ephemeral-effect spawner and its tap throttle, the toggle
//! panels, the evasive button's placement math, the hold-to-fill meter, the
//! reveal cards and the locket. [`page::PageCore`] ties them together and
//! turns input events into [`page::Action`]s. The host crate is responsible
//! only for wiring DOM events to the core and applying the resulting actions
//! to the document.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`page`] | Top-level [`page::PageCore`] and the [`page::Action`] list |
//! | [`spawn`] | Ephemeral effect specs, placement, and the live-element ledger |
//! | [`throttle`] | Minimum inter-arrival gate for tap effects |
//! | [`ambient`] | Background decoration created once at startup |
//! | [`toggle`] | Open/close panels with focus hand-off |
//! | [`evasive`] | The button that runs away from the pointer |
//! | [`meter`] | Hold-to-fill percentage meter |
//! | [`reveal`] | One-way reveal cards |
//! | [`locket`] | Locket opening and its radial burst |
//! | [`input`] | Input modality and key types |
//! | [`geom`] | Points, rectangles and the viewport |
//! | [`palette`] | Glyph and colour palettes |
//! | [`config`] | Typed page configuration with JSON overrides |
//! | [`consts`] | Default timings, counts and margins |

pub mod ambient;
pub mod config;
pub mod consts;
pub mod evasive;
pub mod geom;
pub mod input;
pub mod locket;
pub mod meter;
pub mod page;
pub mod palette;
pub mod reveal;
pub mod spawn;
pub mod throttle;
pub mod toggle;
