//! Application configuration.
//!
//! - `layout`: Display dimensions and pre-computed layout constants

pub mod layout;

// Re-export layout constants at config level for convenience
pub use layout::{
    BATTERY_GLYPH_HEIGHT,
    BATTERY_GLYPH_WIDTH,
    BATTERY_ORIGIN,
    CENTER_X,
    CENTER_Y,
    DATE_BAND_Y,
    DATE_DAY_GAP,
    DATE_PART_SPACE,
    DAY_ICON_HEIGHT,
    DAY_ICON_WIDTH,
    HOUR_HAND_INSET,
    HOUR_KNOB_RADIUS,
    MARGIN,
    MINUTE_HAND_INSET,
    MINUTE_KNOB_RADIUS,
    SCREEN_HEIGHT,
    SCREEN_WIDTH,
    SMALL_DIGIT_HEIGHT,
    SMALL_DIGIT_WIDTH,
    TIME_DIGIT_HEIGHT,
    TIME_DIGIT_WIDTH,
    TIME_MARGIN_X,
    TIME_SLOT_SPACE,
};
