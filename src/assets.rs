//! Compiled-in image resources and the glyph loading seam.
//!
//! Image storage and decoding belong to the host; the core refers to every
//! image by a stable [`ResourceId`] and goes through [`GlyphStore`] to turn
//! an id into an owned, drawable handle. The asset set is fixed at build
//! time, so loading is total: a missing resource is a broken firmware
//! image, not a runtime condition.

use embedded_graphics::geometry::Size;
use embedded_graphics::image::ImageDrawable;
use embedded_graphics::pixelcolor::Rgb565;

use crate::config::{
    DAY_ICON_HEIGHT,
    DAY_ICON_WIDTH,
    SMALL_DIGIT_HEIGHT,
    SMALL_DIGIT_WIDTH,
    TIME_DIGIT_HEIGHT,
    TIME_DIGIT_WIDTH,
};

/// Stable identifier of one compiled-in image.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ResourceId(pub u16);

/// Large time digits 0-9.
pub const TIME_DIGITS: [ResourceId; 10] = resource_range::<10>(0);

/// Small date digits 0-9.
pub const SMALL_DIGITS: [ResourceId; 10] = resource_range::<10>(10);

/// Day-of-week icons, Sunday first.
pub const DAY_ICONS: [ResourceId; 7] = resource_range::<7>(20);

/// Date separator glyph.
pub const SEPARATOR: ResourceId = ResourceId(27);

/// Battery outline glyph.
pub const BATTERY: ResourceId = ResourceId(28);

/// Battery charging glyph.
pub const CHARGING: ResourceId = ResourceId(29);

const fn resource_range<const N: usize>(base: u16) -> [ResourceId; N] {
    let mut ids = [ResourceId(0); N];
    let mut i = 0;
    while i < N {
        ids[i] = ResourceId(base + i as u16);
        i += 1;
    }
    ids
}

// =============================================================================
// Glyph Sets
// =============================================================================

/// A digit-indexed family of same-sized glyphs.
///
/// Slots take the set as a parameter, so one load/unload path serves both
/// the large time digits and the small date digits.
#[derive(Clone, Copy, Debug)]
pub struct GlyphSet {
    ids: &'static [ResourceId],
    size: Size,
}

impl GlyphSet {
    /// Resource id for `digit`, or `None` when the digit has no glyph in
    /// this set.
    #[inline]
    pub fn get(&self, digit: u8) -> Option<ResourceId> {
        self.ids.get(digit as usize).copied()
    }

    /// Pixel size shared by every glyph in the set.
    #[inline]
    pub const fn size(&self) -> Size {
        self.size
    }
}

/// The large 2x2 time grid digits.
pub const TIME_GLYPHS: GlyphSet = GlyphSet {
    ids: &TIME_DIGITS,
    size: Size::new(TIME_DIGIT_WIDTH, TIME_DIGIT_HEIGHT),
};

/// The small date digits.
pub const SMALL_GLYPHS: GlyphSet = GlyphSet {
    ids: &SMALL_DIGITS,
    size: Size::new(SMALL_DIGIT_WIDTH, SMALL_DIGIT_HEIGHT),
};

/// Day-of-week icon size.
pub const DAY_ICON_SIZE: Size = Size::new(DAY_ICON_WIDTH, DAY_ICON_HEIGHT);

// =============================================================================
// Host Seam
// =============================================================================

/// Host-side image storage.
///
/// `load` hands out an exclusively-owned handle; the core returns every
/// handle through `unload` exactly once (on digit change, on layout
/// rebuild, and at teardown). Handles are drawable directly so the render
/// pass needs no second lookup.
pub trait GlyphStore {
    /// Owned, drawable image handle.
    type Image: ImageDrawable<Color = Rgb565>;

    /// Load the image behind `id`. Total: the asset set is compiled in.
    fn load(&mut self, id: ResourceId) -> Self::Image;

    /// Release a handle obtained from [`GlyphStore::load`].
    fn unload(&mut self, image: Self::Image);
}

// =============================================================================
// Unit Tests
// =============================================================================
