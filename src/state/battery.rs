//! Battery status and the gauge rendering decision.

use embedded_graphics::pixelcolor::Rgb565;

use crate::colors::{GREEN, RED, YELLOW};
use crate::thresholds::{BAR_MAX_HEIGHT, BATT_HIGH_PCT, BATT_LOW_PCT};

/// Snapshot of the battery service state.
///
/// Replaced wholesale on every battery event; there is no partial update.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct BatteryStatus {
    /// Charge percentage, 0-100.
    pub percent: u8,
    /// True while on external power.
    pub plugged: bool,
}

impl Default for BatteryStatus {
    /// Full and unplugged, the optimistic value shown until the host
    /// pushes the first real reading.
    fn default() -> Self {
        Self {
            percent: 100,
            plugged: false,
        }
    }
}

/// What the battery region should draw.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum BatteryGlyph {
    /// On external power: the charging icon alone.
    Charging,
    /// On battery: the outline icon plus a filled bar.
    Gauge {
        /// Bar height in pixels, `floor(percent * BAR_MAX_HEIGHT / 100)`.
        fill_px: u32,
        /// Tier color for the fill.
        color: Rgb565,
    },
}

impl BatteryGlyph {
    /// Pure decision from a status snapshot. Recomputed fresh on every
    /// battery event; no hysteresis, no memory of prior tiers.
    pub fn for_status(status: BatteryStatus) -> Self {
        if status.plugged {
            return Self::Charging;
        }

        let color = if status.percent >= BATT_HIGH_PCT {
            GREEN
        } else if status.percent >= BATT_LOW_PCT {
            YELLOW
        } else {
            RED
        };

        Self::Gauge {
            fill_px: status.percent as u32 * BAR_MAX_HEIGHT / 100,
            color,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn unplugged(percent: u8) -> BatteryStatus {
        BatteryStatus {
            percent,
            plugged: false,
        }
    }

    #[test]
    fn test_plugged_shows_charging_only() {
        let status = BatteryStatus {
            percent: 5,
            plugged: true,
        };
        assert_eq!(BatteryGlyph::for_status(status), BatteryGlyph::Charging);
    }

    #[test]
    fn test_tier_boundaries_inclusive_on_the_high_side() {
        let gauge = |p| match BatteryGlyph::for_status(unplugged(p)) {
            BatteryGlyph::Gauge { color, .. } => color,
            BatteryGlyph::Charging => panic!("unplugged status charged"),
        };

        assert_eq!(gauge(40), GREEN);
        assert_eq!(gauge(39), YELLOW);
        assert_eq!(gauge(20), YELLOW);
        assert_eq!(gauge(19), RED);
        assert_eq!(gauge(100), GREEN);
        assert_eq!(gauge(0), RED);
    }

    #[test]
    fn test_fill_height_floors() {
        let fill = |p| match BatteryGlyph::for_status(unplugged(p)) {
            BatteryGlyph::Gauge { fill_px, .. } => fill_px,
            BatteryGlyph::Charging => panic!("unplugged status charged"),
        };

        assert_eq!(fill(100), 10);
        assert_eq!(fill(99), 9);
        assert_eq!(fill(45), 4);
        assert_eq!(fill(9), 0);
        assert_eq!(fill(0), 0);
    }
}
