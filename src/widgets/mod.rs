//! Drawing code for the face's visual parts.
//!
//! Every function here takes a `DrawTarget<Color = Rgb565>` and swallows
//! draw errors with `.ok()`; the panel write path has no meaningful
//! recovery, and a dropped frame self-heals on the next redraw.

mod battery;
mod glyphs;
mod hands;

pub use battery::draw_battery;
pub use glyphs::{draw_item, draw_slot};
pub use hands::draw_hands;
