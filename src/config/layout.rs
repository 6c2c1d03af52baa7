//! Display and layout configuration constants.
//!
//! The face is designed for one fixed panel; every frame below is a design
//! input, not a runtime setting. Positions that drawing code needs every
//! frame are pre-computed as `const` (and pre-cast to `i32` where the
//! drawing code wants coordinates, to avoid casts at the call sites).

use embedded_graphics::geometry::Point;

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels.
pub const SCREEN_WIDTH: u32 = 144;

/// Display height in pixels.
pub const SCREEN_HEIGHT: u32 = 168;

/// Screen center X coordinate, pre-cast for drawing code.
pub const CENTER_X: i32 = (SCREEN_WIDTH / 2) as i32;

/// Screen center Y coordinate, pre-cast for drawing code.
pub const CENTER_Y: i32 = (SCREEN_HEIGHT / 2) as i32;

// =============================================================================
// Glyph Dimensions
// =============================================================================

/// Large time digit glyph width.
pub const TIME_DIGIT_WIDTH: u32 = 58;

/// Large time digit glyph height.
pub const TIME_DIGIT_HEIGHT: u32 = 70;

/// Small date digit glyph width.
pub const SMALL_DIGIT_WIDTH: u32 = 11;

/// Small date digit glyph height.
pub const SMALL_DIGIT_HEIGHT: u32 = 18;

/// Day-of-week icon width.
pub const DAY_ICON_WIDTH: u32 = 20;

/// Day-of-week icon height.
pub const DAY_ICON_HEIGHT: u32 = 20;

/// Battery glyph width.
pub const BATTERY_GLYPH_WIDTH: u32 = 8;

/// Battery glyph height.
pub const BATTERY_GLYPH_HEIGHT: u32 = 15;

// =============================================================================
// Face Layout
// =============================================================================

/// Outer margin around the face content.
pub const MARGIN: i32 = 1;

/// Left margin of the 2x2 time digit grid.
pub const TIME_MARGIN_X: i32 = 13;

/// Spacing between adjacent time digit slots, both axes.
pub const TIME_SLOT_SPACE: i32 = 2;

/// Spacing between the two date parts; the separator glyph fills it.
pub const DATE_PART_SPACE: i32 = 7;

/// Horizontal gap between the date block and the day-of-week icon.
pub const DATE_DAY_GAP: i32 = 2;

/// Top of the lower band holding date, day icon, and battery.
pub const DATE_BAND_Y: i32 = SCREEN_WIDTH as i32 + 4;

/// Top-left of the battery glyph, flush right in the lower band.
pub const BATTERY_ORIGIN: Point = Point::new(
    (SCREEN_WIDTH - BATTERY_GLYPH_WIDTH) as i32 - 2 * MARGIN,
    SCREEN_WIDTH as i32 + 7,
);

// =============================================================================
// Analog Hands
// =============================================================================

/// Minute hand endpoint inset from the display border.
pub const MINUTE_HAND_INSET: i32 = 15;

/// Hour hand endpoint inset from the display border.
pub const HOUR_HAND_INSET: i32 = 40;

/// Radius of the filled dot at the minute hand endpoint.
pub const MINUTE_KNOB_RADIUS: i32 = 15;

/// Radius of the filled dot at the hour hand endpoint.
pub const HOUR_KNOB_RADIUS: i32 = 20;
