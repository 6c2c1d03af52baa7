//! The 2x2 grid of large time digits.

use embedded_graphics::geometry::{Point, Size};
use embedded_graphics::primitives::Rectangle;

use crate::assets::{GlyphStore, TIME_GLYPHS};
use crate::config::{
    MARGIN,
    TIME_DIGIT_HEIGHT,
    TIME_DIGIT_WIDTH,
    TIME_MARGIN_X,
    TIME_SLOT_SPACE,
};
use crate::slots::Slot;
use crate::time::{HourStyle, TimeParts};

/// Number of time digit slots (hour tens/ones over minute tens/ones).
pub const TIME_SLOT_COUNT: usize = 4;

/// Grid row showing the hour.
pub const HOUR_ROW: usize = 0;

/// Grid row showing the minute.
pub const MINUTE_ROW: usize = 1;

/// Frame of time slot `index` (row-major: 0 1 / 2 3).
fn frame_for_slot(index: usize) -> Rectangle {
    let x = TIME_MARGIN_X
        + (index % 2) as i32 * (TIME_DIGIT_WIDTH as i32 + TIME_SLOT_SPACE);
    let y = MARGIN
        + (index / 2) as i32 * (TIME_DIGIT_HEIGHT as i32 + TIME_SLOT_SPACE);

    Rectangle::new(
        Point::new(x, y),
        Size::new(TIME_DIGIT_WIDTH, TIME_DIGIT_HEIGHT),
    )
}

/// The four large time digit slots.
pub struct TimeGrid<I> {
    slots: [Slot<I>; TIME_SLOT_COUNT],
}

impl<I> TimeGrid<I> {
    /// Create the grid with every slot empty at its fixed frame.
    pub fn new() -> Self {
        Self {
            slots: core::array::from_fn(|i| Slot::new(i, frame_for_slot(i))),
        }
    }

    /// Slots for rendering.
    #[inline]
    pub fn slots(&self) -> &[Slot<I>] {
        &self.slots
    }

    /// Render up to two digits of `value` into `row`, least significant
    /// digit first into the rightmost slot.
    ///
    /// On the hour row a zero tens digit leaves the tens slot blank
    /// instead of showing a leading zero; the minute row always shows
    /// both digits. Rows outside the grid are ignored.
    pub fn display_value<S>(&mut self, value: u32, row: usize, store: &mut S)
    where
        S: GlyphStore<Image = I>,
    {
        if row > MINUTE_ROW {
            return;
        }

        let mut value = value % 100;
        for column in (0..2).rev() {
            let slot = &mut self.slots[row * 2 + column];

            if row == HOUR_ROW && column == 0 && value == 0 {
                slot.unload(store);
                return;
            }

            slot.update((value % 10) as u8, &TIME_GLYPHS, store);
            value /= 10;
        }
    }

    /// Display the full time: hour row (converted per `style`) and minute
    /// row.
    pub fn display_time<S>(
        &mut self,
        time: &TimeParts,
        style: HourStyle,
        store: &mut S,
    ) where
        S: GlyphStore<Image = I>,
    {
        self.display_value(style.display_hour(time.hour) as u32, HOUR_ROW, store);
        self.display_value(time.minute as u32, MINUTE_ROW, store);
    }

    /// Release every loaded glyph.
    pub fn unload_all<S>(&mut self, store: &mut S)
    where
        S: GlyphStore<Image = I>,
    {
        for slot in &mut self.slots {
            slot.unload(store);
        }
    }
}

impl<I> Default for TimeGrid<I> {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slots::test_support::CountingStore;

    fn digits<I>(grid: &TimeGrid<I>) -> [Option<u8>; 4] {
        core::array::from_fn(|i| grid.slots()[i].digit())
    }

    #[test]
    fn test_frames_tile_the_upper_square() {
        assert_eq!(frame_for_slot(0).top_left, Point::new(13, 1));
        assert_eq!(frame_for_slot(1).top_left, Point::new(73, 1));
        assert_eq!(frame_for_slot(2).top_left, Point::new(13, 73));
        assert_eq!(frame_for_slot(3).top_left, Point::new(73, 73));
    }

    #[test]
    fn test_hour_leading_zero_is_suppressed() {
        let mut store = CountingStore::new();
        let mut grid = TimeGrid::new();

        grid.display_value(5, HOUR_ROW, &mut store);
        assert_eq!(digits(&grid), [None, Some(5), None, None]);
    }

    #[test]
    fn test_hour_zero_leaves_tens_empty() {
        let mut store = CountingStore::new();
        let mut grid = TimeGrid::new();

        grid.display_value(0, HOUR_ROW, &mut store);
        assert_eq!(digits(&grid), [None, Some(0), None, None]);
    }

    #[test]
    fn test_two_digit_hour_fills_both_slots() {
        let mut store = CountingStore::new();
        let mut grid = TimeGrid::new();

        grid.display_value(12, HOUR_ROW, &mut store);
        assert_eq!(digits(&grid), [Some(1), Some(2), None, None]);
    }

    #[test]
    fn test_minute_row_keeps_leading_zero() {
        let mut store = CountingStore::new();
        let mut grid = TimeGrid::new();

        grid.display_value(5, MINUTE_ROW, &mut store);
        assert_eq!(digits(&grid), [None, None, Some(0), Some(5)]);
    }

    #[test]
    fn test_hour_tens_unloads_when_dropping_to_one_digit() {
        let mut store = CountingStore::new();
        let mut grid = TimeGrid::new();

        grid.display_value(12, HOUR_ROW, &mut store);
        grid.display_value(9, HOUR_ROW, &mut store);
        assert_eq!(digits(&grid), [None, Some(9), None, None]);
    }

    #[test]
    fn test_repeat_display_loads_once() {
        let mut store = CountingStore::new();
        let mut grid = TimeGrid::new();

        grid.display_value(37, MINUTE_ROW, &mut store);
        let loads = store.loads.len();
        grid.display_value(37, MINUTE_ROW, &mut store);
        assert_eq!(store.loads.len(), loads);
    }

    #[test]
    fn test_minute_rollover_touches_changed_slot_only() {
        let mut store = CountingStore::new();
        let mut grid = TimeGrid::new();

        grid.display_value(30, MINUTE_ROW, &mut store);
        let loads = store.loads.len();
        grid.display_value(31, MINUTE_ROW, &mut store);
        // tens slot still shows 3, only the ones slot reloaded
        assert_eq!(store.loads.len(), loads + 1);
    }

    #[test]
    fn test_display_time_uses_hour_style() {
        let mut store = CountingStore::new();
        let mut grid = TimeGrid::new();
        let time = TimeParts {
            hour: 0,
            minute: 7,
            day: 1,
            month: 1,
            weekday: 0,
        };

        grid.display_time(&time, HourStyle::H12, &mut store);
        assert_eq!(digits(&grid), [Some(1), Some(2), Some(0), Some(7)]);

        grid.display_time(&time, HourStyle::H24, &mut store);
        assert_eq!(digits(&grid), [None, Some(0), Some(0), Some(7)]);
    }

    #[test]
    fn test_unload_all_balances_handles() {
        let mut store = CountingStore::new();
        let mut grid = TimeGrid::new();

        grid.display_value(12, HOUR_ROW, &mut store);
        grid.display_value(34, MINUTE_ROW, &mut store);
        grid.unload_all(&mut store);
        assert_eq!(store.live(), 0);
        assert_eq!(digits(&grid), [None; 4]);
    }
}
