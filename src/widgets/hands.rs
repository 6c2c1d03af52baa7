//! Analog hand rendering.
//!
//! Each hand is a colored spoke from the display center to a bezel
//! point, a filled knob at that endpoint, and a background-colored
//! continuation of the spoke past the knob so the knob reads as riding
//! on the bezel rather than capping a ray. Two concentric center dots
//! (hour ring under minute core) finish the hub.

use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::geometry::Point;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, Line, PrimitiveStyle};

use crate::colors::BLACK;
use crate::config::{
    CENTER_X,
    CENTER_Y,
    HOUR_HAND_INSET,
    HOUR_KNOB_RADIUS,
    MINUTE_HAND_INSET,
    MINUTE_KNOB_RADIUS,
};
use crate::geometry::bezel_point;
use crate::state::HandColors;
use crate::time::{TimeParts, hour_angle, minute_angle};

const CENTER: Point = Point::new(CENTER_X, CENTER_Y);

fn draw_hand<D>(
    display: &mut D,
    angle: i32,
    inset: i32,
    knob_radius: i32,
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let endpoint = bezel_point(inset, angle);

    Circle::with_center(endpoint, 2 * knob_radius as u32)
        .into_styled(PrimitiveStyle::with_fill(color))
        .draw(display)
        .ok();

    Line::new(CENTER, endpoint)
        .into_styled(PrimitiveStyle::with_stroke(color, 1))
        .draw(display)
        .ok();

    // continuation past the knob, mirrored through the endpoint
    let beyond = Point::new(
        2 * endpoint.x - CENTER_X,
        2 * endpoint.y - CENTER_Y,
    );
    Line::new(endpoint, beyond)
        .into_styled(PrimitiveStyle::with_stroke(BLACK, 1))
        .draw(display)
        .ok();
}

/// Draw both hands and the center hub for `time`.
pub fn draw_hands<D>(display: &mut D, time: &TimeParts, colors: &HandColors)
where
    D: DrawTarget<Color = Rgb565>,
{
    let hour_color = Rgb565::from(colors.hour);
    let minute_color = Rgb565::from(colors.minute);

    draw_hand(
        display,
        hour_angle(time),
        HOUR_HAND_INSET,
        HOUR_KNOB_RADIUS,
        hour_color,
    );
    draw_hand(
        display,
        minute_angle(time),
        MINUTE_HAND_INSET,
        MINUTE_KNOB_RADIUS,
        minute_color,
    );

    // hub: hour ring under the minute core
    Circle::with_center(CENTER, 2 * (HOUR_KNOB_RADIUS / 3) as u32)
        .into_styled(PrimitiveStyle::with_fill(hour_color))
        .draw(display)
        .ok();
    Circle::with_center(CENTER, 2 * (MINUTE_KNOB_RADIUS / 3) as u32)
        .into_styled(PrimitiveStyle::with_fill(minute_color))
        .draw(display)
        .ok();
}
