//! Bezel geometry: mapping a clock angle to a point on an inset border
//! rectangle.
//!
//! The face's hand endpoints do not sweep a circle; they slide along the
//! border of the (non-square) display, inset by a per-hand distance. The
//! mapping splits the circle into four angular sectors, one per rectangle
//! edge. Within the left/right sectors the x coordinate is pinned to the
//! edge and y follows `cos/sin`; within the top/bottom sectors y is pinned
//! and x follows `sin/cos`, so the result always lies exactly on the inset
//! rectangle.
//!
//! The sector boundaries are the angles from center to the inset corners
//! of this panel's 144x168 aspect, nudged off the axis angles so neither
//! ratio ever divides by zero.

use embedded_graphics::geometry::Point;
#[cfg(not(test))]
use micromath::F32Ext;

use crate::config::{CENTER_X, CENTER_Y, SCREEN_HEIGHT, SCREEN_WIDTH};

/// Which inset-rectangle edge an angle resolves to.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

/// Sector classification. Half-open interval boundaries; every degree
/// lands in exactly one edge.
const fn edge_for(angle: i32) -> Edge {
    if angle >= 228 && angle < 316 {
        Edge::Left
    } else if angle > 45 && angle < 136 {
        Edge::Right
    } else if angle >= 136 && angle < 228 {
        Edge::Bottom
    } else {
        Edge::Top
    }
}

/// Point on the border of the display rectangle inset by `inset` on all
/// sides, where a ray from the display center at `angle_degrees`
/// (clockwise from 12 o'clock, 0-359) crosses it.
///
/// Pure and total; angles outside 0-359 are wrapped.
pub fn bezel_point(inset: i32, angle_degrees: i32) -> Point {
    let angle = angle_degrees.rem_euclid(360);
    let half_w = (SCREEN_WIDTH as i32 - 2 * inset) / 2;
    let half_h = (SCREEN_HEIGHT as i32 - 2 * inset) / 2;

    let radians = (angle as f32).to_radians();
    let sin = radians.sin();
    let cos = radians.cos();

    match edge_for(angle) {
        Edge::Left => Point::new(
            inset,
            CENTER_Y + (half_h as f32 * cos / sin) as i32,
        ),
        Edge::Right => Point::new(
            SCREEN_WIDTH as i32 - inset,
            CENTER_Y - (half_h as f32 * cos / sin) as i32,
        ),
        Edge::Bottom => Point::new(
            CENTER_X - (half_w as f32 * sin / cos) as i32,
            SCREEN_HEIGHT as i32 - inset,
        ),
        Edge::Top => Point::new(
            CENTER_X + (half_w as f32 * sin / cos) as i32,
            inset,
        ),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
