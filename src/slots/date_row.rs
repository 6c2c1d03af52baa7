//! The four small date digit slots and their separator.

use crate::assets::{GlyphStore, SEPARATOR, SMALL_GLYPHS};
use crate::layout::{DateLayout, DateOrder};
use crate::slots::{ImageItem, Slot};
use crate::time::TimeParts;

use embedded_graphics::primitives::Rectangle;

/// Number of date digit slots (two parts of up to two digits).
pub const DATE_SLOT_COUNT: usize = 4;

/// The date block: tens/ones for each part plus the separator glyph.
pub struct DateRow<I> {
    slots: [Slot<I>; DATE_SLOT_COUNT],
    separator: ImageItem<I>,
}

impl<I> DateRow<I> {
    /// Create the row empty; frames arrive with the first layout.
    pub fn new() -> Self {
        Self {
            slots: core::array::from_fn(|i| Slot::new(i, Rectangle::zero())),
            separator: ImageItem::new(Rectangle::zero()),
        }
    }

    /// Slots for rendering.
    #[inline]
    pub fn slots(&self) -> &[Slot<I>] {
        &self.slots
    }

    /// Separator item for rendering.
    #[inline]
    pub fn separator(&self) -> &ImageItem<I> {
        &self.separator
    }

    /// Adopt a freshly planned layout.
    ///
    /// Every slot and the separator are unloaded first; the digit-width
    /// boundary moves frames under them, so occupants never survive a
    /// replan. Callers re-display the date afterwards.
    pub fn apply_layout<S>(&mut self, layout: &DateLayout, store: &mut S)
    where
        S: GlyphStore<Image = I>,
    {
        for (slot, frame) in self.slots.iter_mut().zip(layout.slot_frames) {
            slot.unload(store);
            slot.set_frame(frame);
        }
        self.separator.unload(store);
        self.separator.set_frame(layout.separator_frame);
    }

    /// Render up to two digits of `value` into part `part` (0 = left),
    /// least significant digit first into the part's rightmost slot.
    ///
    /// A zero tens digit always leaves the tens slot blank; date parts
    /// are 1-indexed, so a displayed leading zero can never be
    /// legitimate. Parts outside the row are ignored.
    pub fn display_part<S>(&mut self, value: u32, part: usize, store: &mut S)
    where
        S: GlyphStore<Image = I>,
    {
        if part > 1 {
            return;
        }

        let mut value = value % 100;
        for column in (0..2).rev() {
            let slot = &mut self.slots[part * 2 + column];

            if column == 0 && value == 0 {
                slot.unload(store);
            } else {
                slot.update((value % 10) as u8, &SMALL_GLYPHS, store);
            }

            value /= 10;
        }
    }

    /// Display the full date in the configured part order.
    pub fn display_date<S>(
        &mut self,
        time: &TimeParts,
        order: DateOrder,
        store: &mut S,
    ) where
        S: GlyphStore<Image = I>,
    {
        let (left, right) = match order {
            DateOrder::MonthFirst => (time.month, time.day),
            DateOrder::DayFirst => (time.day, time.month),
        };
        self.display_part(left as u32, 0, store);
        self.display_part(right as u32, 1, store);
    }

    /// Show the separator glyph at its layout frame.
    pub fn show_separator<S>(&mut self, store: &mut S)
    where
        S: GlyphStore<Image = I>,
    {
        self.separator.show(SEPARATOR, store);
    }

    /// Release every loaded glyph, separator included.
    pub fn unload_all<S>(&mut self, store: &mut S)
    where
        S: GlyphStore<Image = I>,
    {
        for slot in &mut self.slots {
            slot.unload(store);
        }
        self.separator.unload(store);
    }
}

impl<I> Default for DateRow<I> {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
