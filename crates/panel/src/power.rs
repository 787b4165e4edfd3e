//! Supply rail and reset sequencing
//!
//! [`PowerController`] owns both supplies, the reset line and the delay
//! source of one panel. It knows the switching order but nothing about the
//! panel's command set.
//!
//! ```text
//! enable_all:   vcc on ──▶ iovcc on            (iovcc fails ⇒ vcc off)
//! disable_all:  iovcc off ──▶ vcc off          (both always attempted)
//! pulse_reset:  assert ─ assert_us ─▶ deassert ─ settle_us ─▶
//! ```

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use platform::{PowerRail, RailId, ResetLine};

use crate::error::PanelError;
use crate::log::Dbg;

/// Which rails failed to switch off in [`PowerController::disable_all`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RailShutdown {
    /// The I/O rail reported an error and may still be on.
    pub io_failed: bool,
    /// The core rail reported an error and may still be on.
    pub core_failed: bool,
}

impl RailShutdown {
    /// Returns `true` if both rails switched off.
    pub fn is_clean(&self) -> bool {
        !self.io_failed && !self.core_failed
    }

    /// First rail that failed, in switch-off order.
    pub fn first_failure(&self) -> Option<PanelError> {
        if self.io_failed {
            Some(PanelError::Supply { rail: RailId::Io })
        } else if self.core_failed {
            Some(PanelError::Supply { rail: RailId::Core })
        } else {
            None
        }
    }
}

/// Ordered control of the two panel supplies and the reset line.
pub struct PowerController<C, I, R, D> {
    core: C,
    io: I,
    reset: ResetLine<R>,
    delay: D,
}

impl<C, I, R, D> PowerController<C, I, R, D>
where
    C: PowerRail,
    I: PowerRail,
    R: OutputPin,
    D: DelayNs,
{
    /// Take ownership of the panel's power hardware.
    ///
    /// Nothing is switched here. Rails are expected to start off and the
    /// reset line to be deasserted (which [`ResetLine::new`] guarantees).
    pub fn new(core: C, io: I, reset: ResetLine<R>, delay: D) -> Self {
        Self {
            core,
            io,
            reset,
            delay,
        }
    }

    /// Switch on the core rail, then the I/O rail.
    ///
    /// On error neither rail is left on: a failed I/O enable switches the
    /// core rail back off before returning.
    pub fn enable_all(&mut self) -> Result<(), PanelError> {
        if let Err(e) = self.core.enable() {
            error!("failed to enable {} supply: {}", RailId::Core, Dbg(&e));
            return Err(PanelError::Supply { rail: RailId::Core });
        }

        if let Err(e) = self.io.enable() {
            error!("failed to enable {} supply: {}", RailId::Io, Dbg(&e));
            if let Err(e) = self.core.disable() {
                error!("failed to disable {} supply: {}", RailId::Core, Dbg(&e));
            }
            return Err(PanelError::Supply { rail: RailId::Io });
        }

        debug!("{} and {} supplies on", RailId::Core, RailId::Io);
        Ok(())
    }

    /// Switch off the I/O rail, then the core rail.
    ///
    /// Both rails are always attempted. Failures are logged and reported,
    /// never propagated.
    pub fn disable_all(&mut self) -> RailShutdown {
        let mut report = RailShutdown::default();

        if let Err(e) = self.io.disable() {
            error!("failed to disable {} supply: {}", RailId::Io, Dbg(&e));
            report.io_failed = true;
        }
        if let Err(e) = self.core.disable() {
            error!("failed to disable {} supply: {}", RailId::Core, Dbg(&e));
            report.core_failed = true;
        }

        if report.is_clean() {
            debug!("{} and {} supplies off", RailId::Io, RailId::Core);
        }
        report
    }

    /// Pulse the reset line and wait for the controller to come out of reset.
    ///
    /// Both waits happen even when no reset GPIO is fitted or the GPIO
    /// reports an error.
    pub fn pulse_reset(&mut self, assert_us: u32, settle_us: u32) {
        if let Err(e) = self.reset.assert() {
            warn!("failed to assert reset: {}", Dbg(&e));
        }
        self.delay.delay_us(assert_us);
        if let Err(e) = self.reset.deassert() {
            warn!("failed to deassert reset: {}", Dbg(&e));
        }
        self.delay.delay_us(settle_us);
    }

    /// Block for `ms` milliseconds.
    pub fn settle_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }

    /// The core rail.
    pub fn core(&self) -> &C {
        &self.core
    }

    /// The I/O rail.
    pub fn io(&self) -> &I {
        &self.io
    }

    /// The reset line.
    pub fn reset(&self) -> &ResetLine<R> {
        &self.reset
    }

    /// Returns `true` if both rails are on.
    pub fn is_powered(&self) -> bool {
        self.core.is_enabled() && self.io.is_enabled()
    }

    /// Returns `true` if both rails are off.
    pub fn is_unpowered(&self) -> bool {
        !self.core.is_enabled() && !self.io.is_enabled()
    }

    /// Rails currently on, in the shape of a [`disable_all`](Self::disable_all)
    /// report.
    pub fn rails_left_on(&self) -> RailShutdown {
        RailShutdown {
            io_failed: self.io.is_enabled(),
            core_failed: self.core.is_enabled(),
        }
    }

    /// Give the hardware back.
    pub fn release(self) -> (C, I, ResetLine<R>, D) {
        (self.core, self.io, self.reset, self.delay)
    }
}
