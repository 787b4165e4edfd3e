//! Host-facing panel interface
//!
//! Display hosts drive panels through `&mut dyn Panel` so one host build can
//! serve any board wiring.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use platform::{DsiTransport, PowerRail};

use crate::error::PanelError;
use crate::lifecycle::{PanelLifecycle, PowerState};
use crate::mode::{DisplayMode, ModeSink};

/// Operations a display host may invoke on a bound panel.
///
/// The trait is object safe.
pub trait Panel {
    /// Power up and start video. Idempotent.
    fn activate(&mut self) -> Result<(), PanelError>;

    /// Stop video and power down. Idempotent; always ends
    /// [`PowerState::Off`].
    fn deactivate(&mut self) -> Result<(), PanelError>;

    /// The single supported mode.
    fn preferred_mode(&self) -> Result<DisplayMode, PanelError>;

    /// Report physical size and modes to `sink`; returns the mode count.
    fn get_modes(&self, sink: &mut dyn ModeSink) -> Result<usize, PanelError>;

    /// Current power state.
    fn power_state(&self) -> PowerState;
}

impl<T, C, I, R, D> Panel for PanelLifecycle<'_, T, C, I, R, D>
where
    T: DsiTransport,
    C: PowerRail,
    I: PowerRail,
    R: OutputPin,
    D: DelayNs,
{
    fn activate(&mut self) -> Result<(), PanelError> {
        PanelLifecycle::activate(self)
    }

    fn deactivate(&mut self) -> Result<(), PanelError> {
        PanelLifecycle::deactivate(self)
    }

    fn preferred_mode(&self) -> Result<DisplayMode, PanelError> {
        PanelLifecycle::preferred_mode(self)
    }

    fn get_modes(&self, sink: &mut dyn ModeSink) -> Result<usize, PanelError> {
        PanelLifecycle::get_modes(self, sink)
    }

    fn power_state(&self) -> PowerState {
        self.state()
    }
}
