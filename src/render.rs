//! Redraw plumbing: dirty regions, the invalidation seam, and the
//! fail-mode inversion.
//!
//! The core never repaints on its own; it marks regions dirty through
//! [`Invalidator`] and the host schedules the actual redraw, calling back
//! into [`crate::face::Face::draw`] for a full-face pass. Sub-layers that
//! change independently (battery, time digits, the date band) get their
//! own regions so a battery event does not repaint the whole panel.

use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::geometry::{Dimensions, Point, Size};
use embedded_graphics::pixelcolor::{Rgb565, RgbColor};
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::config::{
    BATTERY_GLYPH_HEIGHT,
    BATTERY_GLYPH_WIDTH,
    BATTERY_ORIGIN,
    DATE_BAND_Y,
    DAY_ICON_HEIGHT,
    SCREEN_HEIGHT,
    SCREEN_WIDTH,
};

/// Independently repaintable parts of the face.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Region {
    /// Everything; used for hand color changes and fail-mode flips.
    FullFace,
    /// The 2x2 large digit grid.
    TimeGrid,
    /// The lower band: date digits, separator, day icon.
    DateBand,
    /// The day-of-week icon alone. Covers every position the icon can
    /// occupy across date widths.
    DayIcon,
    /// The battery glyph.
    Battery,
}

impl Region {
    /// Display-absolute bounds of the region.
    pub const fn bounds(self) -> Rectangle {
        match self {
            Self::FullFace => Rectangle::new(
                Point::zero(),
                Size::new(SCREEN_WIDTH, SCREEN_HEIGHT),
            ),
            Self::TimeGrid => Rectangle::new(
                Point::zero(),
                Size::new(SCREEN_WIDTH, SCREEN_WIDTH),
            ),
            Self::DateBand => Rectangle::new(
                Point::new(0, SCREEN_WIDTH as i32),
                Size::new(SCREEN_WIDTH, SCREEN_HEIGHT - SCREEN_WIDTH),
            ),
            Self::DayIcon => Rectangle::new(
                Point::new(32, DATE_BAND_Y),
                Size::new(42, DAY_ICON_HEIGHT),
            ),
            Self::Battery => Rectangle::new(
                BATTERY_ORIGIN,
                Size::new(BATTERY_GLYPH_WIDTH, BATTERY_GLYPH_HEIGHT),
            ),
        }
    }
}

/// Host-side dirty marking.
pub trait Invalidator {
    /// Schedule `region` for repaint.
    fn mark_dirty(&mut self, region: Region);
}

// =============================================================================
// Fail-Mode Inversion
// =============================================================================

/// Invert an `Rgb565` color channel-wise.
#[inline]
pub fn invert(color: Rgb565) -> Rgb565 {
    Rgb565::new(
        Rgb565::MAX_R - color.r(),
        Rgb565::MAX_G - color.g(),
        Rgb565::MAX_B - color.b(),
    )
}

/// Draw target adapter inverting every pixel written through it.
///
/// Fail mode draws the whole face through this adapter, which inverts
/// the entire frame without any widget knowing about it.
pub struct Inverted<'a, D> {
    target: &'a mut D,
}

impl<'a, D> Inverted<'a, D> {
    pub fn new(target: &'a mut D) -> Self {
        Self { target }
    }
}

impl<D> Dimensions for Inverted<'_, D>
where
    D: DrawTarget<Color = Rgb565>,
{
    fn bounding_box(&self) -> Rectangle {
        self.target.bounding_box()
    }
}

impl<D> DrawTarget for Inverted<'_, D>
where
    D: DrawTarget<Color = Rgb565>,
{
    type Color = Rgb565;
    type Error = D::Error;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Rgb565>>,
    {
        self.target.draw_iter(
            pixels
                .into_iter()
                .map(|Pixel(point, color)| Pixel(point, invert(color))),
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
