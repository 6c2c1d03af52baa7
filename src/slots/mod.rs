//! Glyph slot lifecycle.
//!
//! A [`Slot`] is one fixed display position holding at most one loaded
//! glyph image. The displayed digit and the owned image handle live inside
//! a single `Option`, so "digit present without image" (or the reverse) is
//! unrepresentable, and a slot can never hold two live handles.
//!
//! - `slot`: the digit slot and the simpler single-image [`ImageItem`]
//! - `time_grid`: the 2x2 large-digit time grid
//! - `date_row`: the four small date digit slots plus separator

mod date_row;
mod slot;
mod time_grid;

pub use date_row::{DATE_SLOT_COUNT, DateRow};
pub use slot::{ImageItem, Slot};
pub use time_grid::{HOUR_ROW, MINUTE_ROW, TIME_SLOT_COUNT, TimeGrid};

// =============================================================================
// Shared Test Support
// =============================================================================
