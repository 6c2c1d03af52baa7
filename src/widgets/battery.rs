//! Battery region rendering.

use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::geometry::{Point, Size};
use embedded_graphics::image::{Image, ImageDrawable};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};

use crate::config::BATTERY_ORIGIN;
use crate::state::{BatteryGlyph, BatteryStatus};

/// Top-left of the gauge fill inside the battery outline.
const FILL_INSET_X: i32 = 2;

/// Bottom of the gauge fill inside the battery outline.
const FILL_BOTTOM_Y: i32 = 13;

/// Width of the gauge fill bar.
const FILL_WIDTH: u32 = 4;

/// Draw the battery region: charging icon while plugged, otherwise the
/// outline icon with the tier-colored fill bar growing from the bottom.
pub fn draw_battery<I, D>(
    display: &mut D,
    status: BatteryStatus,
    outline: &I,
    charging: &I,
) where
    I: ImageDrawable<Color = Rgb565>,
    D: DrawTarget<Color = Rgb565>,
{
    match BatteryGlyph::for_status(status) {
        BatteryGlyph::Charging => {
            Image::new(charging, BATTERY_ORIGIN).draw(display).ok();
        }
        BatteryGlyph::Gauge { fill_px, color } => {
            Image::new(outline, BATTERY_ORIGIN).draw(display).ok();

            if fill_px > 0 {
                let top_left = BATTERY_ORIGIN
                    + Point::new(FILL_INSET_X, FILL_BOTTOM_Y - fill_px as i32);
                Rectangle::new(top_left, Size::new(FILL_WIDTH, fill_px))
                    .into_styled(PrimitiveStyle::with_fill(color))
                    .draw(display)
                    .ok();
            }
        }
    }
}
