//! The face: owned state plus the event handlers the host wires up.
//!
//! Everything mutable lives here and is touched only inside the
//! handlers, so a draw always observes a consistent face: fully-old or
//! fully-new, never a half-applied update. The host event loop is
//! expected to be single-threaded and to push the initial battery and
//! connectivity readings through the normal handlers right after
//! construction.

use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::geometry::Point;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::assets::{BATTERY, CHARGING, DAY_ICONS, GlyphStore};
use crate::colors::BLACK;
use crate::layout::{DateLayout, DateOrder};
use crate::render::{Invalidator, Inverted, Region};
use crate::slots::{DateRow, ImageItem, TimeGrid};
use crate::state::{
    BatteryStatus,
    ConnectionEffect,
    ConnectivityMonitor,
    ConnectivityState,
    HandColors,
    Haptics,
    PrefKey,
    RecheckScheduler,
    SettingsStore,
};
use crate::time::{HourStyle, TickUnits, TimeParts};
use crate::widgets::{draw_battery, draw_hands, draw_item, draw_slot};

/// Build-time face options.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct FaceConfig {
    /// Hour display style for the time grid.
    pub hour_style: HourStyle,
    /// Date part ordering for the lower band.
    pub date_order: DateOrder,
}

/// The whole face state.
///
/// `S` supplies image handles, `R` supplies the recheck timer handle;
/// both are host services passed into the handlers that need them.
pub struct Face<S: GlyphStore, R: RecheckScheduler> {
    config: FaceConfig,
    time_grid: TimeGrid<S::Image>,
    date: DateRow<S::Image>,
    day_icon: ImageItem<S::Image>,
    layout: DateLayout,
    colors: HandColors,
    battery: BatteryStatus,
    battery_outline: S::Image,
    battery_charging: S::Image,
    bluetooth: ConnectivityMonitor<R::Handle>,
}

impl<S: GlyphStore, R: RecheckScheduler> Face<S, R> {
    /// Build the face and render the initial time, date, day icon and
    /// separator into their slots.
    pub fn new(
        config: FaceConfig,
        time: &TimeParts,
        settings: &impl SettingsStore,
        store: &mut S,
    ) -> Self {
        let mut face = Self {
            config,
            time_grid: TimeGrid::new(),
            date: DateRow::new(),
            day_icon: ImageItem::new(Rectangle::zero()),
            layout: DateLayout::plan(time.month, time.day, config.date_order),
            colors: HandColors::load(settings),
            battery: BatteryStatus::default(),
            battery_outline: store.load(BATTERY),
            battery_charging: store.load(CHARGING),
            bluetooth: ConnectivityMonitor::new(),
        };

        face.apply_day(time, store);
        face.time_grid
            .display_time(time, face.config.hour_style, store);
        face
    }

    /// Current date layout.
    #[inline]
    pub fn layout(&self) -> &DateLayout {
        &self.layout
    }

    /// Current hand colors.
    #[inline]
    pub fn colors(&self) -> HandColors {
        self.colors
    }

    /// Last battery snapshot.
    #[inline]
    pub fn battery(&self) -> BatteryStatus {
        self.battery
    }

    /// Current connectivity machine state.
    #[inline]
    pub fn connectivity(&self) -> ConnectivityState {
        self.bluetooth.state()
    }

    /// Day rollover: replan the layout, then re-display everything whose
    /// frame depends on it. The layout must land before the day icon.
    fn apply_day(&mut self, time: &TimeParts, store: &mut S) {
        self.layout =
            DateLayout::plan(time.month, time.day, self.config.date_order);
        self.date.apply_layout(&self.layout, store);
        self.date
            .display_date(time, self.config.date_order, store);
        self.date.show_separator(store);
        self.day_icon.set_frame(self.layout.day_icon_frame);
        self.day_icon
            .show(DAY_ICONS[(time.weekday % 7) as usize], store);
    }

    /// Periodic tick. `units` selects the cheap minute path, the full
    /// day-rollover path, or both.
    pub fn handle_tick(
        &mut self,
        time: &TimeParts,
        units: TickUnits,
        store: &mut S,
        out: &mut impl Invalidator,
    ) {
        if units.contains(TickUnits::MINUTE) {
            self.time_grid
                .display_time(time, self.config.hour_style, store);
            out.mark_dirty(Region::TimeGrid);
        }

        if units.contains(TickUnits::DAY) {
            self.apply_day(time, store);
            out.mark_dirty(Region::DateBand);
        }
    }

    /// Battery event: the snapshot is replaced wholesale.
    pub fn handle_battery(
        &mut self,
        status: BatteryStatus,
        out: &mut impl Invalidator,
    ) {
        self.battery = status;
        out.mark_dirty(Region::Battery);
    }

    /// Connectivity event from the host.
    pub fn handle_bluetooth(
        &mut self,
        connected: bool,
        scheduler: &mut R,
        haptics: &mut impl Haptics,
        out: &mut impl Invalidator,
    ) {
        let effect = self.bluetooth.connection_changed(connected, scheduler);
        self.apply_connection_effect(effect, haptics, out);
    }

    /// Recheck timer expiry, with the host's current link reading.
    pub fn handle_recheck(
        &mut self,
        still_connected: bool,
        haptics: &mut impl Haptics,
        out: &mut impl Invalidator,
    ) {
        let effect = self.bluetooth.recheck_fired(still_connected);
        self.apply_connection_effect(effect, haptics, out);
    }

    fn apply_connection_effect(
        &mut self,
        effect: Option<ConnectionEffect>,
        haptics: &mut impl Haptics,
        out: &mut impl Invalidator,
    ) {
        match effect {
            Some(ConnectionEffect::EnterFailMode) => {
                haptics.long_pulse();
                out.mark_dirty(Region::FullFace);
            }
            Some(ConnectionEffect::ExitFailMode) => {
                out.mark_dirty(Region::FullFace);
            }
            None => {}
        }
    }

    /// Inbound preference message. Only an accepted update repaints.
    pub fn handle_message(
        &mut self,
        entries: &[(PrefKey, u8)],
        settings: &mut impl SettingsStore,
        out: &mut impl Invalidator,
    ) {
        if self.colors.apply_update(entries, settings) {
            out.mark_dirty(Region::FullFace);
        }
    }

    /// Full-face render. In fail mode the frame is drawn through the
    /// inverting adapter.
    pub fn draw<D>(&self, display: &mut D, time: &TimeParts)
    where
        D: DrawTarget<Color = Rgb565>,
    {
        if self.bluetooth.is_fail_mode() {
            self.draw_layers(&mut Inverted::new(display), time);
        } else {
            self.draw_layers(display, time);
        }
    }

    fn draw_layers<D>(&self, display: &mut D, time: &TimeParts)
    where
        D: DrawTarget<Color = Rgb565>,
    {
        display.clear(BLACK).ok();

        draw_hands(display, time, &self.colors);

        for slot in self.time_grid.slots() {
            draw_slot(slot, Point::zero(), display);
        }

        let origin = self.layout.origin;
        for slot in self.date.slots() {
            draw_slot(slot, origin, display);
        }
        draw_item(self.date.separator(), origin, display);
        draw_item(&self.day_icon, Point::zero(), display);

        draw_battery(
            display,
            self.battery,
            &self.battery_outline,
            &self.battery_charging,
        );
    }

    /// Release every image handle back to the store.
    pub fn teardown(mut self, store: &mut S) {
        self.time_grid.unload_all(store);
        self.date.unload_all(store);
        self.day_icon.unload(store);
        store.unload(self.battery_outline);
        store.unload(self.battery_charging);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slots::test_support::CountingStore;
    use crate::state::RECHECK_DELAY_MS;

    struct TestScheduler {
        next_id: u32,
        armed: Vec<u32>,
    }

    impl TestScheduler {
        fn new() -> Self {
            Self {
                next_id: 0,
                armed: Vec::new(),
            }
        }
    }

    impl RecheckScheduler for TestScheduler {
        type Handle = u32;

        fn schedule(&mut self, delay_ms: u32) -> u32 {
            assert_eq!(delay_ms, RECHECK_DELAY_MS);
            let id = self.next_id;
            self.next_id += 1;
            self.armed.push(id);
            id
        }

        fn cancel(&mut self, handle: u32) {
            self.armed.retain(|&id| id != handle);
        }
    }

    #[derive(Default)]
    struct TestSettings {
        values: std::collections::HashMap<u8, u8>,
    }

    impl SettingsStore for TestSettings {
        fn read(&self, key: PrefKey) -> Option<u8> {
            self.values.get(&(key as u8)).copied()
        }

        fn write(&mut self, key: PrefKey, value: u8) {
            self.values.insert(key as u8, value);
        }
    }

    #[derive(Default)]
    struct TestInvalidator {
        regions: Vec<Region>,
    }

    impl Invalidator for TestInvalidator {
        fn mark_dirty(&mut self, region: Region) {
            self.regions.push(region);
        }
    }

    #[derive(Default)]
    struct TestHaptics {
        pulses: usize,
    }

    impl Haptics for TestHaptics {
        fn long_pulse(&mut self) {
            self.pulses += 1;
        }
    }

    /// Plain framebuffer target at the face's resolution.
    struct TestFrame {
        pixels: Vec<Rgb565>,
    }

    impl TestFrame {
        fn new() -> Self {
            Self {
                pixels: vec![Rgb565::new(9, 9, 9); 144 * 168],
            }
        }

        fn pixel(&self, x: i32, y: i32) -> Rgb565 {
            self.pixels[(y * 144 + x) as usize]
        }
    }

    impl Dimensions for TestFrame {
        fn bounding_box(&self) -> Rectangle {
            Rectangle::new(Point::zero(), Size::new(144, 168))
        }
    }

    impl DrawTarget for TestFrame {
        type Color = Rgb565;
        type Error = core::convert::Infallible;

        fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
        where
            I: IntoIterator<Item = Pixel<Rgb565>>,
        {
            for Pixel(point, color) in pixels {
                if (0..144).contains(&point.x) && (0..168).contains(&point.y) {
                    self.pixels[(point.y * 144 + point.x) as usize] = color;
                }
            }
            Ok(())
        }
    }

    fn at(hour: u8, minute: u8, month: u8, day: u8) -> TimeParts {
        TimeParts {
            hour,
            minute,
            day,
            month,
            weekday: 2,
        }
    }

    fn new_face(
        time: &TimeParts,
        store: &mut CountingStore,
    ) -> Face<CountingStore, TestScheduler> {
        Face::new(FaceConfig::default(), time, &TestSettings::default(), store)
    }

    #[test]
    fn test_new_populates_every_layer() {
        let mut store = CountingStore::new();
        let face = new_face(&at(12, 34, 3, 25), &mut store);

        // 4 time digits, "3" + "25", separator, day icon, 2 battery icons
        assert_eq!(store.live(), 11);
        assert_eq!(face.connectivity(), ConnectivityState::Connected);
    }

    #[test]
    fn test_minute_tick_marks_time_grid_only() {
        let mut store = CountingStore::new();
        let mut out = TestInvalidator::default();
        let mut face = new_face(&at(12, 34, 3, 25), &mut store);

        face.handle_tick(
            &at(12, 35, 3, 25),
            TickUnits::MINUTE,
            &mut store,
            &mut out,
        );
        assert_eq!(out.regions, [Region::TimeGrid]);
    }

    #[test]
    fn test_minute_tick_reloads_only_changed_digits() {
        let mut store = CountingStore::new();
        let mut out = TestInvalidator::default();
        let mut face = new_face(&at(12, 30, 3, 25), &mut store);

        let loads = store.loads.len();
        face.handle_tick(
            &at(12, 31, 3, 25),
            TickUnits::MINUTE,
            &mut store,
            &mut out,
        );
        assert_eq!(store.loads.len(), loads + 1);
    }

    #[test]
    fn test_day_rollover_replans_and_moves_the_day_icon() {
        let mut store = CountingStore::new();
        let mut out = TestInvalidator::default();
        let mut face = new_face(&at(23, 59, 9, 9), &mut store);

        let icon_x_before = face.layout().day_icon_frame.top_left.x;
        face.handle_tick(
            &at(0, 0, 9, 10),
            TickUnits::MINUTE | TickUnits::DAY,
            &mut store,
            &mut out,
        );

        assert_eq!(out.regions, [Region::TimeGrid, Region::DateBand]);
        assert_eq!(
            face.layout().day_icon_frame.top_left.x,
            icon_x_before + 11
        );
        assert_eq!(face.day_icon.frame(), face.layout().day_icon_frame);
    }

    #[test]
    fn test_battery_event_marks_battery_region() {
        let mut store = CountingStore::new();
        let mut out = TestInvalidator::default();
        let mut face = new_face(&at(12, 0, 3, 25), &mut store);

        let status = BatteryStatus {
            percent: 55,
            plugged: false,
        };
        face.handle_battery(status, &mut out);
        assert_eq!(face.battery(), status);
        assert_eq!(out.regions, [Region::Battery]);
    }

    #[test]
    fn test_sustained_disconnect_pulses_and_inverts() {
        let mut store = CountingStore::new();
        let mut sched = TestScheduler::new();
        let mut haptics = TestHaptics::default();
        let mut out = TestInvalidator::default();
        let time = at(12, 0, 3, 25);
        let mut face = new_face(&time, &mut store);

        face.handle_bluetooth(false, &mut sched, &mut haptics, &mut out);
        assert!(out.regions.is_empty());

        face.handle_recheck(false, &mut haptics, &mut out);
        assert_eq!(haptics.pulses, 1);
        assert_eq!(out.regions, [Region::FullFace]);
        assert_eq!(face.connectivity(), ConnectivityState::FailMode);

        // fail mode renders the background inverted
        let mut frame = TestFrame::new();
        face.draw(&mut frame, &time);
        assert_eq!(frame.pixel(0, 0), Rgb565::WHITE);
    }

    #[test]
    fn test_reconnect_before_recheck_never_fails() {
        let mut store = CountingStore::new();
        let mut sched = TestScheduler::new();
        let mut haptics = TestHaptics::default();
        let mut out = TestInvalidator::default();
        let mut face = new_face(&at(12, 0, 3, 25), &mut store);

        face.handle_bluetooth(false, &mut sched, &mut haptics, &mut out);
        face.handle_bluetooth(true, &mut sched, &mut haptics, &mut out);
        assert!(sched.armed.is_empty());
        assert_eq!(face.connectivity(), ConnectivityState::Connected);
        assert_eq!(haptics.pulses, 0);
    }

    #[test]
    fn test_normal_draw_has_black_background() {
        let mut store = CountingStore::new();
        let time = at(12, 0, 3, 25);
        let face = new_face(&time, &mut store);

        let mut frame = TestFrame::new();
        face.draw(&mut frame, &time);
        assert_eq!(frame.pixel(0, 0), Rgb565::BLACK);
    }

    #[test]
    fn test_message_applies_colors_and_repaints() {
        let mut store = CountingStore::new();
        let mut settings = TestSettings::default();
        let mut out = TestInvalidator::default();
        let mut face = new_face(&at(12, 0, 3, 25), &mut store);

        face.handle_message(
            &[
                (PrefKey::MinuteRed, 200),
                (PrefKey::MinuteGreen, 100),
                (PrefKey::MinuteBlue, 50),
            ],
            &mut settings,
            &mut out,
        );
        assert_eq!(out.regions, [Region::FullFace]);
        assert_eq!(
            face.colors().minute,
            embedded_graphics::pixelcolor::Rgb888::new(200, 100, 50)
        );

        // partial role: no repaint, no change
        face.handle_message(
            &[(PrefKey::HourRed, 1)],
            &mut settings,
            &mut out,
        );
        assert_eq!(out.regions, [Region::FullFace]);
    }

    #[test]
    fn test_teardown_returns_every_handle() {
        let mut store = CountingStore::new();
        let face = new_face(&at(12, 34, 11, 25), &mut store);

        face.teardown(&mut store);
        assert_eq!(store.live(), 0);
    }
}
