//! Blitting loaded glyph images at their slot frames.

use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::geometry::Point;
use embedded_graphics::image::{Image, ImageDrawable};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use crate::slots::{ImageItem, Slot};

/// Draw a slot's occupant, if any, at its frame shifted by `offset`.
///
/// `offset` is the parent block's origin; time slots pass zero, date
/// slots pass the date block origin their frames are relative to.
pub fn draw_slot<I, D>(slot: &Slot<I>, offset: Point, display: &mut D)
where
    I: ImageDrawable<Color = Rgb565>,
    D: DrawTarget<Color = Rgb565>,
{
    if let Some(image) = slot.image() {
        Image::new(image, slot.frame().top_left + offset)
            .draw(display)
            .ok();
    }
}

/// Draw an image item's occupant, if any, at its frame shifted by
/// `offset`.
pub fn draw_item<I, D>(item: &ImageItem<I>, offset: Point, display: &mut D)
where
    I: ImageDrawable<Color = Rgb565>,
    D: DrawTarget<Color = Rgb565>,
{
    if let Some(image) = item.image() {
        Image::new(image, item.frame().top_left + offset)
            .draw(display)
            .ok();
    }
}
