//! Color constants for the watchface.
//!
//! The face renders in `Rgb565`, the native format of the target panel.
//! User-configurable hand colors arrive from the preference channel as
//! 8-bit RGB triples and are held as `Rgb888`, converted at draw time.

use embedded_graphics::pixelcolor::{Rgb565, Rgb888, RgbColor};

/// Pure black. Face background and the hand overshoot stroke.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// High-tier battery gauge fill.
pub const GREEN: Rgb565 = Rgb565::GREEN;

/// Mid-tier battery gauge fill.
pub const YELLOW: Rgb565 = Rgb565::YELLOW;

/// Alert-tier battery gauge fill.
pub const RED: Rgb565 = Rgb565::RED;

/// Default minute hand color: muted army green.
pub const DEFAULT_MINUTE_COLOR: Rgb888 = Rgb888::new(85, 85, 0);

/// Default hour hand color: muted blue-grey.
pub const DEFAULT_HOUR_COLOR: Rgb888 = Rgb888::new(85, 85, 170);
