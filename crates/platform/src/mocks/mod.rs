//! Mock implementations for testing
//!
//! Recording mocks for every platform trait the panel driver uses. All mocks
//! created from the same [`Journal`] append to one shared event log, so tests
//! can assert the exact interleaving of rail switching, reset edges, delays
//! and DSI packets. Each mock can be told to fail specific operations.

#![cfg(any(test, feature = "std"))]

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use std::vec::Vec;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, OutputPin};
use panel_specs::DsiLinkConfig;

use crate::{DcsCommand, DsiTransport, PowerRail, RailId};

/// One observable hardware side effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Rail switched on.
    RailOn(RailId),
    /// Rail switched off.
    RailOff(RailId),
    /// A rail enable or disable attempt failed.
    RailFault(RailId),
    /// Reset pin driven low.
    ResetLow,
    /// Reset pin driven high.
    ResetHigh,
    /// Blocking delay.
    Delay(Duration),
    /// Generic write packet that reached the panel.
    GenericWrite(Vec<u8>),
    /// DCS command that reached the panel.
    Dcs(DcsCommand),
    /// A packet the transport rejected.
    TransportFault,
    /// Link attached with the given configuration.
    Attached(DsiLinkConfig),
    /// Link detached.
    Detached,
}

/// Shared, ordered event log.
#[derive(Debug, Clone, Default)]
pub struct Journal(Rc<RefCell<Vec<Event>>>);

impl Journal {
    /// Create an empty journal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event.
    pub fn record(&self, event: Event) {
        self.0.borrow_mut().push(event);
    }

    /// Snapshot of all events so far.
    pub fn events(&self) -> Vec<Event> {
        self.0.borrow().clone()
    }

    /// Number of recorded events.
    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    /// Returns `true` if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    /// Forget all recorded events.
    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }

    /// Payloads of every generic write that reached the panel, in order.
    pub fn generic_writes(&self) -> Vec<Vec<u8>> {
        self.0
            .borrow()
            .iter()
            .filter_map(|event| match event {
                Event::GenericWrite(payload) => Some(payload.clone()),
                _ => None,
            })
            .collect()
    }

    /// Every DCS command that reached the panel, in order.
    pub fn dcs_commands(&self) -> Vec<DcsCommand> {
        self.0
            .borrow()
            .iter()
            .filter_map(|event| match event {
                Event::Dcs(command) => Some(*command),
                _ => None,
            })
            .collect()
    }

    /// Every delay, in order.
    pub fn delays(&self) -> Vec<Duration> {
        self.0
            .borrow()
            .iter()
            .filter_map(|event| match event {
                Event::Delay(duration) => Some(*duration),
                _ => None,
            })
            .collect()
    }

    /// Index of the first event equal to `event`.
    pub fn position(&self, event: &Event) -> Option<usize> {
        self.0.borrow().iter().position(|e| e == event)
    }

    /// Index of the last event equal to `event`.
    pub fn last_position(&self, event: &Event) -> Option<usize> {
        self.0.borrow().iter().rposition(|e| e == event)
    }
}

/// Error returned by a mock that was told to fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InjectedFault;

impl core::fmt::Display for InjectedFault {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("injected fault")
    }
}

/// Mock power rail: records switching and can refuse to switch.
pub struct MockRail {
    id: RailId,
    journal: Journal,
    enabled: bool,
    /// Fail every enable attempt.
    pub fail_enable: bool,
    /// Fail every disable attempt (the rail stays on).
    pub fail_disable: bool,
    /// Number of enable attempts.
    pub enable_count: usize,
    /// Number of disable attempts.
    pub disable_count: usize,
}

impl MockRail {
    /// Create a rail that starts off.
    pub fn new(id: RailId, journal: &Journal) -> Self {
        Self {
            id,
            journal: journal.clone(),
            enabled: false,
            fail_enable: false,
            fail_disable: false,
            enable_count: 0,
            disable_count: 0,
        }
    }

    /// Make every enable attempt fail.
    #[must_use]
    pub fn failing_enable(mut self) -> Self {
        self.fail_enable = true;
        self
    }

    /// Make every disable attempt fail.
    #[must_use]
    pub fn failing_disable(mut self) -> Self {
        self.fail_disable = true;
        self
    }
}

impl PowerRail for MockRail {
    type Error = InjectedFault;

    fn enable(&mut self) -> Result<(), Self::Error> {
        self.enable_count = self.enable_count.saturating_add(1);
        if self.fail_enable {
            self.journal.record(Event::RailFault(self.id));
            return Err(InjectedFault);
        }
        self.enabled = true;
        self.journal.record(Event::RailOn(self.id));
        Ok(())
    }

    fn disable(&mut self) -> Result<(), Self::Error> {
        self.disable_count = self.disable_count.saturating_add(1);
        if self.fail_disable {
            self.journal.record(Event::RailFault(self.id));
            return Err(InjectedFault);
        }
        self.enabled = false;
        self.journal.record(Event::RailOff(self.id));
        Ok(())
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }
}

/// Mock GPIO for the reset line: records levels.
pub struct MockResetPin {
    journal: Journal,
}

impl MockResetPin {
    /// Create a pin that logs into `journal`.
    pub fn new(journal: &Journal) -> Self {
        Self {
            journal: journal.clone(),
        }
    }
}

impl ErrorType for MockResetPin {
    type Error = core::convert::Infallible;
}

impl OutputPin for MockResetPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.journal.record(Event::ResetLow);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.journal.record(Event::ResetHigh);
        Ok(())
    }
}

/// Mock delay: records the requested duration and returns immediately.
pub struct MockDelay {
    journal: Journal,
}

impl MockDelay {
    /// Create a delay that logs into `journal`.
    pub fn new(journal: &Journal) -> Self {
        Self {
            journal: journal.clone(),
        }
    }
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.journal
            .record(Event::Delay(Duration::from_nanos(u64::from(ns))));
    }

    fn delay_us(&mut self, us: u32) {
        self.journal
            .record(Event::Delay(Duration::from_micros(u64::from(us))));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.journal
            .record(Event::Delay(Duration::from_millis(u64::from(ms))));
    }
}

/// Mock DSI transport: records packets and fails on request.
pub struct MockTransport {
    journal: Journal,
    /// Zero-based index (counted over all generic writes ever attempted) of
    /// the write that fails.
    pub fail_write_at: Option<usize>,
    /// DCS commands that always fail.
    pub fail_dcs: Vec<DcsCommand>,
    /// Reject `attach`.
    pub fail_attach: bool,
    /// Reject `detach`.
    pub fail_detach: bool,
    writes_attempted: usize,
}

impl MockTransport {
    /// Create a transport that accepts everything.
    pub fn new(journal: &Journal) -> Self {
        Self {
            journal: journal.clone(),
            fail_write_at: None,
            fail_dcs: Vec::new(),
            fail_attach: false,
            fail_detach: false,
            writes_attempted: 0,
        }
    }

    /// Fail the generic write with zero-based attempt number `index`.
    #[must_use]
    pub fn failing_write(mut self, index: usize) -> Self {
        self.fail_write_at = Some(index);
        self
    }

    /// Fail every occurrence of `command`.
    #[must_use]
    pub fn failing_dcs(mut self, command: DcsCommand) -> Self {
        self.fail_dcs.push(command);
        self
    }

    /// Fail every DCS command.
    #[must_use]
    pub fn failing_all_dcs(mut self) -> Self {
        self.fail_dcs = std::vec![
            DcsCommand::EnterSleepMode,
            DcsCommand::ExitSleepMode,
            DcsCommand::SetDisplayOff,
            DcsCommand::SetDisplayOn,
        ];
        self
    }

    /// Number of generic writes attempted, including failed ones.
    pub fn writes_attempted(&self) -> usize {
        self.writes_attempted
    }
}

impl DsiTransport for MockTransport {
    type Error = InjectedFault;

    fn generic_write(&mut self, payload: &[u8]) -> Result<(), Self::Error> {
        let index = self.writes_attempted;
        self.writes_attempted = self.writes_attempted.saturating_add(1);
        if self.fail_write_at == Some(index) {
            self.journal.record(Event::TransportFault);
            return Err(InjectedFault);
        }
        self.journal.record(Event::GenericWrite(payload.to_vec()));
        Ok(())
    }

    fn dcs_write(&mut self, command: DcsCommand) -> Result<(), Self::Error> {
        if self.fail_dcs.contains(&command) {
            self.journal.record(Event::TransportFault);
            return Err(InjectedFault);
        }
        self.journal.record(Event::Dcs(command));
        Ok(())
    }

    fn attach(&mut self, link: &DsiLinkConfig) -> Result<(), Self::Error> {
        if self.fail_attach {
            return Err(InjectedFault);
        }
        self.journal.record(Event::Attached(*link));
        Ok(())
    }

    fn detach(&mut self) -> Result<(), Self::Error> {
        if self.fail_detach {
            return Err(InjectedFault);
        }
        self.journal.record(Event::Detached);
        Ok(())
    }
}
