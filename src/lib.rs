//! Watchface rendering core for a fixed 144x168 display.
//!
//! The face shows the time as four large bitmap digits, the date as four
//! small digits with a separator and a day-of-week icon, a battery gauge,
//! and two analog hands whose endpoints slide along the display bezel.
//!
//! All host services are trait seams, so the whole core runs and tests on
//! the host machine:
//!
//! - [`assets::GlyphStore`]: image loading/release by resource id
//! - [`render::Invalidator`]: dirty-region marking
//! - [`state::RecheckScheduler`]: the single cancelable recheck timer
//! - [`state::SettingsStore`]: persisted color preferences
//!
//! Wall-clock time and the changed-units mask arrive as plain values in
//! [`face::Face::handle_tick`]; the core never reads a clock itself.
//!
//! # Testing
//!
//! Run tests on host with:
//! ```bash
//! cargo test --lib
//! ```
//!
//! Tests run with `std` enabled (via `cfg_attr`), allowing use of the
//! standard test framework while embedders build the crate as `no_std`.

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod assets;
pub mod colors;
pub mod config;
pub mod face;
pub mod geometry;
pub mod layout;
pub mod render;
pub mod slots;
pub mod state;
pub mod thresholds;
pub mod time;
pub mod widgets;

// Re-export the types an embedder touches on every event
pub use assets::GlyphStore;
pub use face::{Face, FaceConfig};
pub use layout::{DateLayout, DateOrder};
pub use render::{Invalidator, Region};
pub use state::{
    BatteryStatus,
    ConnectivityMonitor,
    HandColors,
    Haptics,
    PrefKey,
    PrefMessage,
    RecheckScheduler,
    SettingsStore,
};
pub use time::{HourStyle, TickUnits, TimeParts};
