//! Centralized battery gauge threshold configuration.
//!
//! All thresholds are compile-time constants with validation assertions,
//! so the gauge color function and any host-side checks can never drift
//! apart. There is no hysteresis: every battery event re-evaluates the
//! tiers from scratch.

/// Charge percentage at or above which the gauge fills in the high-tier
/// color.
pub const BATT_HIGH_PCT: u8 = 40;

/// Charge percentage at or above which (but below [`BATT_HIGH_PCT`]) the
/// gauge fills in the mid-tier color. Below this the alert color is used.
pub const BATT_LOW_PCT: u8 = 20;

// Compile-time validation: tiers must be in ascending order
const _: () = assert!(BATT_LOW_PCT < BATT_HIGH_PCT);
const _: () = assert!(BATT_HIGH_PCT <= 100);

/// Height in pixels of a full gauge bar.
pub const BAR_MAX_HEIGHT: u32 = 10;
