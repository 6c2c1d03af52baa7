//! User hand colors: preference channel parsing and persistence.
//!
//! The host messaging layer delivers color preferences as keyed byte
//! entries, one key per color component, mirroring the wire protocol. A
//! hand's color is applied only when all three of its components arrive
//! in one message; a partial role is ignored entirely. Accepted values
//! are persisted through [`SettingsStore`] immediately, so the next
//! startup reads them back.

use embedded_graphics::pixelcolor::Rgb888;
use log::warn;

use crate::colors::{DEFAULT_HOUR_COLOR, DEFAULT_MINUTE_COLOR};

/// Persisted preference keys, numbered as on the wire.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PrefKey {
    MinuteRed = 0,
    MinuteGreen = 1,
    MinuteBlue = 2,
    HourRed = 3,
    HourGreen = 4,
    HourBlue = 5,
}

/// Inbound preference message: keyed components in arrival order.
pub type PrefMessage = heapless::Vec<(PrefKey, u8), 8>;

/// Host-side durable settings storage.
pub trait SettingsStore {
    /// Read a persisted component, `None` when never written.
    fn read(&self, key: PrefKey) -> Option<u8>;

    /// Persist a component.
    fn write(&mut self, key: PrefKey, value: u8);
}

/// The two user-configurable hand colors.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct HandColors {
    pub minute: Rgb888,
    pub hour: Rgb888,
}

impl HandColors {
    /// Compiled-in defaults.
    pub const fn defaults() -> Self {
        Self {
            minute: DEFAULT_MINUTE_COLOR,
            hour: DEFAULT_HOUR_COLOR,
        }
    }

    /// Read persisted colors, falling back to the defaults per hand.
    ///
    /// Presence of a hand's red component is the marker that a triple
    /// was ever persisted; missing green/blue components then read as
    /// zero.
    pub fn load<S: SettingsStore>(store: &S) -> Self {
        let read_hand = |red: PrefKey, green: PrefKey, blue: PrefKey| {
            store.read(red).map(|r| {
                Rgb888::new(
                    r,
                    store.read(green).unwrap_or(0),
                    store.read(blue).unwrap_or(0),
                )
            })
        };

        Self {
            minute: read_hand(
                PrefKey::MinuteRed,
                PrefKey::MinuteGreen,
                PrefKey::MinuteBlue,
            )
            .unwrap_or(DEFAULT_MINUTE_COLOR),
            hour: read_hand(PrefKey::HourRed, PrefKey::HourGreen, PrefKey::HourBlue)
                .unwrap_or(DEFAULT_HOUR_COLOR),
        }
    }

    /// Apply one inbound message; returns true when any hand changed.
    ///
    /// Each hand applies independently: a complete triple is persisted
    /// and applied, an incomplete one is dropped without touching the
    /// current color.
    pub fn apply_update<S: SettingsStore>(
        &mut self,
        entries: &[(PrefKey, u8)],
        store: &mut S,
    ) -> bool {
        let minute = apply_hand(
            entries,
            [PrefKey::MinuteRed, PrefKey::MinuteGreen, PrefKey::MinuteBlue],
            "minute",
            store,
        );
        if let Some(color) = minute {
            self.minute = color;
        }

        let hour = apply_hand(
            entries,
            [PrefKey::HourRed, PrefKey::HourGreen, PrefKey::HourBlue],
            "hour",
            store,
        );
        if let Some(color) = hour {
            self.hour = color;
        }

        minute.is_some() || hour.is_some()
    }
}

impl Default for HandColors {
    fn default() -> Self {
        Self::defaults()
    }
}

fn find(entries: &[(PrefKey, u8)], key: PrefKey) -> Option<u8> {
    entries
        .iter()
        .find(|(k, _)| *k == key)
        .map(|&(_, value)| value)
}

/// Extract, persist, and return one hand's triple, or `None` when the
/// message does not fully deliver it.
fn apply_hand<S: SettingsStore>(
    entries: &[(PrefKey, u8)],
    keys: [PrefKey; 3],
    hand: &str,
    store: &mut S,
) -> Option<Rgb888> {
    let [red_key, green_key, blue_key] = keys;
    let red = find(entries, red_key);
    let green = find(entries, green_key);
    let blue = find(entries, blue_key);

    match (red, green, blue) {
        (Some(r), Some(g), Some(b)) => {
            store.write(red_key, r);
            store.write(green_key, g);
            store.write(blue_key, b);
            Some(Rgb888::new(r, g, b))
        }
        (None, None, None) => None,
        _ => {
            warn!("ignoring partial {hand} color update");
            None
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
