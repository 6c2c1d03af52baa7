//! Connectivity state machine.
//!
//! Losing the phone link is modeled state, not an error: a disconnect
//! arms a single-shot recheck, and only a recheck that still finds no
//! link enters fail mode (inverted display plus a haptic pulse). Any
//! reconnect cancels the pending recheck and restores the normal face.

use log::{debug, info};

/// Delay before a disconnect is rechecked, in milliseconds.
pub const RECHECK_DELAY_MS: u32 = 3000;

/// Connectivity machine states.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ConnectivityState {
    /// Link up, normal display.
    Connected,
    /// Link reported down; the recheck timer is armed.
    PendingRecheck,
    /// Sustained loss: display inverted until the link returns.
    FailMode,
}

/// Externally visible transition of the machine.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ConnectionEffect {
    /// Invert the display and pulse the vibe motor.
    EnterFailMode,
    /// Restore the normal display.
    ExitFailMode,
}

/// Host timer service for the recheck.
///
/// `schedule` arms a single-shot timer and hands back a cancel handle;
/// the monitor owns at most one handle at a time.
pub trait RecheckScheduler {
    /// Cancel handle for an armed timer.
    type Handle;

    /// Arm a single-shot timer firing after `delay_ms`.
    fn schedule(&mut self, delay_ms: u32) -> Self::Handle;

    /// Cancel an armed timer before it fires.
    fn cancel(&mut self, handle: Self::Handle);
}

/// Host vibe motor.
pub trait Haptics {
    /// One long attention pulse.
    fn long_pulse(&mut self);
}

/// The connectivity monitor: two user-visible states plus the armed
/// recheck in between.
pub struct ConnectivityMonitor<H> {
    state: ConnectivityState,
    pending: Option<H>,
}

impl<H> ConnectivityMonitor<H> {
    /// Start connected; the host pushes the real initial reading through
    /// [`ConnectivityMonitor::connection_changed`] right after setup.
    pub const fn new() -> Self {
        Self {
            state: ConnectivityState::Connected,
            pending: None,
        }
    }

    #[inline]
    pub const fn state(&self) -> ConnectivityState {
        self.state
    }

    /// True while the display should render inverted.
    #[inline]
    pub const fn is_fail_mode(&self) -> bool {
        matches!(self.state, ConnectivityState::FailMode)
    }

    /// Feed a connectivity event from the host.
    ///
    /// A disconnect arms the recheck (re-arming cancels the previous
    /// handle first, so at most one timer is ever live). A reconnect
    /// cancels any pending recheck and restores the normal display.
    pub fn connection_changed<S>(
        &mut self,
        connected: bool,
        scheduler: &mut S,
    ) -> Option<ConnectionEffect>
    where
        S: RecheckScheduler<Handle = H>,
    {
        if connected {
            if let Some(handle) = self.pending.take() {
                scheduler.cancel(handle);
            }
            let was_failed = self.is_fail_mode();
            self.state = ConnectivityState::Connected;
            if was_failed {
                info!("link restored, leaving fail mode");
                return Some(ConnectionEffect::ExitFailMode);
            }
            return None;
        }

        match self.state {
            ConnectivityState::Connected | ConnectivityState::PendingRecheck => {
                if let Some(handle) = self.pending.take() {
                    scheduler.cancel(handle);
                }
                debug!("link down, rechecking in {RECHECK_DELAY_MS}ms");
                self.pending = Some(scheduler.schedule(RECHECK_DELAY_MS));
                self.state = ConnectivityState::PendingRecheck;
                None
            }
            // already failed; nothing to re-enter
            ConnectivityState::FailMode => None,
        }
    }

    /// Feed the recheck timer expiry, with the host's current link
    /// reading.
    pub fn recheck_fired(
        &mut self,
        still_connected: bool,
    ) -> Option<ConnectionEffect> {
        // the single-shot has fired; its handle is dead either way
        self.pending = None;

        if self.state != ConnectivityState::PendingRecheck {
            return None;
        }

        if still_connected {
            self.state = ConnectivityState::Connected;
            None
        } else {
            info!("link still down after recheck, entering fail mode");
            self.state = ConnectivityState::FailMode;
            Some(ConnectionEffect::EnterFailMode)
        }
    }
}

impl<H> Default for ConnectivityMonitor<H> {
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

    /// Scheduler that tracks which timer ids are still armed.
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
            let ix = self
                .armed
                .iter()
                .position(|&id| id == handle)
                .expect("cancelled a timer that was not armed");
            self.armed.remove(ix);
        }
    }

    #[test]
    fn test_reconnect_before_recheck_cancels_and_stays_normal() {
        let mut sched = TestScheduler::new();
        let mut monitor = ConnectivityMonitor::new();

        assert_eq!(monitor.connection_changed(false, &mut sched), None);
        assert_eq!(monitor.state(), ConnectivityState::PendingRecheck);
        assert_eq!(sched.armed.len(), 1);

        assert_eq!(monitor.connection_changed(true, &mut sched), None);
        assert_eq!(monitor.state(), ConnectivityState::Connected);
        assert!(sched.armed.is_empty());
        assert!(!monitor.is_fail_mode());
    }

    #[test]
    fn test_sustained_loss_enters_fail_mode_exactly_once() {
        let mut sched = TestScheduler::new();
        let mut monitor = ConnectivityMonitor::new();

        monitor.connection_changed(false, &mut sched);
        assert_eq!(
            monitor.recheck_fired(false),
            Some(ConnectionEffect::EnterFailMode)
        );
        assert!(monitor.is_fail_mode());

        // further disconnect reports do not re-enter
        assert_eq!(monitor.connection_changed(false, &mut sched), None);
        assert!(sched.armed.is_empty());
    }

    #[test]
    fn test_recheck_after_reconnect_is_quiet() {
        let mut sched = TestScheduler::new();
        let mut monitor = ConnectivityMonitor::new();

        monitor.connection_changed(false, &mut sched);
        assert_eq!(monitor.recheck_fired(true), None);
        assert_eq!(monitor.state(), ConnectivityState::Connected);
    }

    #[test]
    fn test_rearm_cancels_the_previous_timer() {
        let mut sched = TestScheduler::new();
        let mut monitor = ConnectivityMonitor::new();

        monitor.connection_changed(false, &mut sched);
        monitor.connection_changed(false, &mut sched);
        assert_eq!(sched.armed.len(), 1);
        assert_eq!(sched.next_id, 2);
    }

    #[test]
    fn test_reconnect_from_fail_mode_reports_exit() {
        let mut sched = TestScheduler::new();
        let mut monitor = ConnectivityMonitor::new();

        monitor.connection_changed(false, &mut sched);
        monitor.recheck_fired(false);
        assert_eq!(
            monitor.connection_changed(true, &mut sched),
            Some(ConnectionEffect::ExitFailMode)
        );
        assert!(!monitor.is_fail_mode());
    }

    #[test]
    fn test_plain_reconnect_reports_nothing() {
        let mut sched = TestScheduler::new();
        let mut monitor = ConnectivityMonitor::new();

        assert_eq!(monitor.connection_changed(true, &mut sched), None);
    }
}
