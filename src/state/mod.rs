//! Event-driven status state for the face.
//!
//! - `battery`: charge snapshot and the pure gauge decision
//! - `bluetooth`: connectivity machine with the single recheck timer
//! - `settings`: user hand colors, preference channel, persistence seam

mod battery;
mod bluetooth;
mod settings;

pub use battery::{BatteryGlyph, BatteryStatus};
pub use bluetooth::{
    ConnectionEffect,
    ConnectivityMonitor,
    ConnectivityState,
    Haptics,
    RECHECK_DELAY_MS,
    RecheckScheduler,
};
pub use settings::{HandColors, PrefKey, PrefMessage, SettingsStore};
