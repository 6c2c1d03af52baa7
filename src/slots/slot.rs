//! Digit slots and single-image items.

use embedded_graphics::primitives::Rectangle;

use crate::assets::{GlyphSet, GlyphStore, ResourceId};

/// A digit together with the exclusively-owned image that renders it.
struct LoadedGlyph<I> {
    digit: u8,
    image: I,
}

/// One fixed display position holding at most one loaded digit glyph.
pub struct Slot<I> {
    index: usize,
    frame: Rectangle,
    loaded: Option<LoadedGlyph<I>>,
}

impl<I> Slot<I> {
    /// Create an empty slot at `frame`.
    pub const fn new(index: usize, frame: Rectangle) -> Self {
        Self {
            index,
            frame,
            loaded: None,
        }
    }

    /// Stable identity within its grid or row.
    #[inline]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Frame the glyph is drawn into.
    #[inline]
    pub const fn frame(&self) -> Rectangle {
        self.frame
    }

    /// Reposition the slot. Callers unload first when the occupant must
    /// not survive the move.
    #[inline]
    pub fn set_frame(&mut self, frame: Rectangle) {
        self.frame = frame;
    }

    /// Digit currently displayed, `None` when empty.
    #[inline]
    pub fn digit(&self) -> Option<u8> {
        self.loaded.as_ref().map(|glyph| glyph.digit)
    }

    /// Image handle currently displayed, `None` when empty.
    #[inline]
    pub fn image(&self) -> Option<&I> {
        self.loaded.as_ref().map(|glyph| &glyph.image)
    }

    /// Load `digit` from `set` into this slot.
    ///
    /// Silent no-op (returns `false`) when the digit has no glyph in the
    /// set or the slot is already occupied; occupied slots must be
    /// unloaded first, keeping at-most-one-load at the call boundary.
    pub fn load<S>(&mut self, digit: u8, set: &GlyphSet, store: &mut S) -> bool
    where
        S: GlyphStore<Image = I>,
    {
        if self.loaded.is_some() {
            return false;
        }
        let Some(id) = set.get(digit) else {
            return false;
        };

        self.loaded = Some(LoadedGlyph {
            digit,
            image: store.load(id),
        });
        true
    }

    /// Release the occupant back to the store. Idempotent.
    pub fn unload<S>(&mut self, store: &mut S)
    where
        S: GlyphStore<Image = I>,
    {
        if let Some(glyph) = self.loaded.take() {
            store.unload(glyph.image);
        }
    }

    /// Display `digit`, reloading only on change.
    ///
    /// A slot already showing `digit` is left untouched (returns `false`,
    /// nothing to redraw). Otherwise the old glyph is released before the
    /// new one is loaded, so the slot never holds two handles.
    pub fn update<S>(&mut self, digit: u8, set: &GlyphSet, store: &mut S) -> bool
    where
        S: GlyphStore<Image = I>,
    {
        if self.digit() == Some(digit) {
            return false;
        }

        self.unload(store);
        self.load(digit, set, store)
    }
}

/// A single-image holder (day-of-week icon, date separator) with the same
/// owned-handle lifecycle as a slot, keyed by resource id instead of
/// digit.
pub struct ImageItem<I> {
    frame: Rectangle,
    image: Option<I>,
}

impl<I> ImageItem<I> {
    /// Create an empty item at `frame`.
    pub const fn new(frame: Rectangle) -> Self {
        Self { frame, image: None }
    }

    #[inline]
    pub const fn frame(&self) -> Rectangle {
        self.frame
    }

    #[inline]
    pub fn set_frame(&mut self, frame: Rectangle) {
        self.frame = frame;
    }

    #[inline]
    pub fn image(&self) -> Option<&I> {
        self.image.as_ref()
    }

    /// Show the image behind `id`, releasing any previous occupant first.
    pub fn show<S>(&mut self, id: ResourceId, store: &mut S)
    where
        S: GlyphStore<Image = I>,
    {
        if let Some(old) = self.image.take() {
            store.unload(old);
        }
        self.image = Some(store.load(id));
    }

    /// Release the image back to the store. Idempotent.
    pub fn unload<S>(&mut self, store: &mut S)
    where
        S: GlyphStore<Image = I>,
    {
        if let Some(image) = self.image.take() {
            store.unload(image);
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
