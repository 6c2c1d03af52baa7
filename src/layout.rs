//! Date block layout planning.
//!
//! The date renders as two parts (month and day) of one or two small
//! digits each, so the block width changes when either part crosses the
//! 9/10 boundary. The plan is recomputed once per day rollover and feeds
//! the date slot frames, the separator frame, and the day-of-week icon
//! position, which hangs off the block's right edge.

use embedded_graphics::geometry::{Point, Size};
use embedded_graphics::primitives::Rectangle;

use crate::assets::DAY_ICON_SIZE;
use crate::config::{
    DATE_BAND_Y,
    DATE_DAY_GAP,
    DATE_PART_SPACE,
    MARGIN,
    SMALL_DIGIT_HEIGHT,
    SMALL_DIGIT_WIDTH,
};
use crate::slots::DATE_SLOT_COUNT;

/// Which date part renders first (leftmost).
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum DateOrder {
    /// Month before day (e.g. 3/25).
    #[default]
    MonthFirst,
    /// Day before month (e.g. 25/3).
    DayFirst,
}

/// Computed frames for one date layout.
///
/// Slot and separator frames are relative to [`DateLayout::origin`]; the
/// day icon frame is absolute.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct DateLayout {
    /// Total block width: both parts' digit widths plus the part spacing.
    pub width: i32,
    /// Top-left of the date block on the display.
    pub origin: Point,
    /// Slot frames, block-relative. Tens/ones of the left part, then
    /// tens/ones of the right part; a 1-digit part collapses its tens
    /// frame onto its ones frame.
    pub slot_frames: [Rectangle; DATE_SLOT_COUNT],
    /// Separator frame, block-relative, filling the part spacing.
    pub separator_frame: Rectangle,
    /// Day-of-week icon frame, absolute, right of the block.
    pub day_icon_frame: Rectangle,
}

const fn digit_count(value: u8) -> i32 {
    if value > 9 { 2 } else { 1 }
}

impl DateLayout {
    /// Plan the block for today's `month` and `day`.
    ///
    /// `order` permutes which part owns the left slot pair; the width
    /// formula is order-independent.
    pub fn plan(month: u8, day: u8, order: DateOrder) -> Self {
        let month_digits = digit_count(month);
        let day_digits = digit_count(day);
        let (left_digits, right_digits) = match order {
            DateOrder::MonthFirst => (month_digits, day_digits),
            DateOrder::DayFirst => (day_digits, month_digits),
        };

        let digit_w = SMALL_DIGIT_WIDTH as i32;
        let width = digit_w * (month_digits + day_digits) + DATE_PART_SPACE;

        let digit_size = Size::new(SMALL_DIGIT_WIDTH, SMALL_DIGIT_HEIGHT);
        let mut xs = [0i32; DATE_SLOT_COUNT];
        xs[1] = xs[0] + if left_digits > 1 { digit_w } else { 0 };
        xs[2] = xs[1] + digit_w + DATE_PART_SPACE;
        xs[3] = xs[2] + if right_digits > 1 { digit_w } else { 0 };

        let mut slot_frames = [Rectangle::zero(); DATE_SLOT_COUNT];
        for (frame, x) in slot_frames.iter_mut().zip(xs) {
            *frame = Rectangle::new(Point::new(x, 0), digit_size);
        }

        let separator_frame = Rectangle::new(
            Point::new(left_digits * digit_w, 0),
            Size::new(DATE_PART_SPACE as u32, SMALL_DIGIT_HEIGHT),
        );

        let day_icon_frame = Rectangle::new(
            Point::new(width + MARGIN + DATE_DAY_GAP, DATE_BAND_Y),
            DAY_ICON_SIZE,
        );

        Self {
            width,
            origin: Point::new(MARGIN, DATE_BAND_Y),
            slot_frames,
            separator_frame,
            day_icon_frame,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_for_single_digit_parts() {
        let layout = DateLayout::plan(3, 5, DateOrder::MonthFirst);
        assert_eq!(layout.width, 2 * 11 + 7);
    }

    #[test]
    fn test_width_for_two_digit_parts() {
        let layout = DateLayout::plan(11, 25, DateOrder::MonthFirst);
        assert_eq!(layout.width, 4 * 11 + 7);
    }

    #[test]
    fn test_width_is_order_independent() {
        let a = DateLayout::plan(11, 5, DateOrder::MonthFirst);
        let b = DateLayout::plan(11, 5, DateOrder::DayFirst);
        assert_eq!(a.width, b.width);
    }

    #[test]
    fn test_day_icon_hangs_off_the_block() {
        for (month, day) in [(3, 5), (11, 25), (9, 10)] {
            let layout = DateLayout::plan(month, day, DateOrder::MonthFirst);
            assert_eq!(
                layout.day_icon_frame.top_left.x,
                layout.width + MARGIN + DATE_DAY_GAP
            );
            assert_eq!(layout.day_icon_frame.top_left.y, DATE_BAND_Y);
        }
    }

    #[test]
    fn test_one_digit_part_collapses_tens_frame() {
        let layout = DateLayout::plan(3, 5, DateOrder::MonthFirst);
        let xs: Vec<i32> =
            layout.slot_frames.iter().map(|f| f.top_left.x).collect();
        assert_eq!(xs, [0, 0, 18, 18]);
    }

    #[test]
    fn test_two_digit_parts_spread_all_frames() {
        let layout = DateLayout::plan(11, 25, DateOrder::MonthFirst);
        let xs: Vec<i32> =
            layout.slot_frames.iter().map(|f| f.top_left.x).collect();
        assert_eq!(xs, [0, 11, 29, 40]);
    }

    #[test]
    fn test_separator_sits_after_the_left_part() {
        let month_first = DateLayout::plan(11, 5, DateOrder::MonthFirst);
        assert_eq!(month_first.separator_frame.top_left.x, 22);

        let day_first = DateLayout::plan(11, 5, DateOrder::DayFirst);
        assert_eq!(day_first.separator_frame.top_left.x, 11);
    }

    #[test]
    fn test_boundary_crossing_moves_the_day_icon() {
        let before = DateLayout::plan(9, 9, DateOrder::MonthFirst);
        let after = DateLayout::plan(9, 10, DateOrder::MonthFirst);
        assert_eq!(
            after.day_icon_frame.top_left.x - before.day_icon_frame.top_left.x,
            11
        );
    }
}
