//! Panel power state machine
//!
//! ```text
//!            activate()                     deactivate()
//!   Off ──▶ PoweringUp ──▶ On ──▶ PoweringDown ──▶ Off
//!              │  any step fails                 ▲
//!              └────── rails off ────────────────┘
//! ```
//!
//! Power-up is strict: the first failure switches both rails off and
//! returns. Power-down is best-effort: every step runs, and the instance
//! always ends `Off`. Delays are never shortened on either path.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use panel_specs::{catalog, DisplayTiming, PanelProfile};
use platform::{DcsCommand, DsiTransport, PowerRail, ResetLine};

use crate::error::{PanelError, TeardownReport};
use crate::log::Dbg;
use crate::mode::{DisplayMode, ModeProvider, ModeSink};
use crate::power::{PowerController, RailShutdown};

/// Power state of one panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PowerState {
    /// Rails off, panel dark.
    #[default]
    Off,
    /// `activate` in progress.
    PoweringUp,
    /// Initialised and displaying video.
    On,
    /// `deactivate` in progress.
    PoweringDown,
}

impl PowerState {
    /// Returns `true` for `PoweringUp` and `PoweringDown`.
    pub const fn is_transitional(self) -> bool {
        matches!(self, Self::PoweringUp | Self::PoweringDown)
    }
}

impl core::fmt::Display for PowerState {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            Self::Off => "off",
            Self::PoweringUp => "powering up",
            Self::On => "on",
            Self::PoweringDown => "powering down",
        })
    }
}

/// Hardware handed to [`PanelLifecycle::bind`] and returned by
/// [`PanelLifecycle::unbind`].
pub struct PanelResources<T, C, I, R, D> {
    /// DSI link to the panel.
    pub transport: T,
    /// Core (VCC) rail.
    pub core: C,
    /// I/O (IOVCC) rail.
    pub io: I,
    /// Reset line, possibly [`ResetLine::absent`].
    pub reset: ResetLine<R>,
    /// Blocking delay source.
    pub delay: D,
}

/// One bound panel: its profile, its transport and its power hardware.
///
/// All state changes go through `&mut self`, so a single instance can never
/// run `activate` and `deactivate` concurrently.
pub struct PanelLifecycle<'a, T, C, I, R, D> {
    profile: &'a PanelProfile,
    transport: T,
    power: PowerController<C, I, R, D>,
    state: PowerState,
    last_teardown: Option<TeardownReport>,
}

impl<'a, T, C, I, R, D> PanelLifecycle<'a, T, C, I, R, D>
where
    T: DsiTransport,
    C: PowerRail,
    I: PowerRail,
    R: OutputPin,
    D: DelayNs,
{
    /// Create an `Off` lifecycle for `profile`.
    ///
    /// The transport is used as-is; see [`bind`](Self::bind) for the variant
    /// that also attaches the DSI link.
    pub fn new(
        profile: &'a PanelProfile,
        transport: T,
        power: PowerController<C, I, R, D>,
    ) -> Self {
        Self {
            profile,
            transport,
            power,
            state: PowerState::Off,
            last_teardown: None,
        }
    }

    /// Create an `Off` lifecycle from a resource bundle.
    pub fn from_resources(
        profile: &'a PanelProfile,
        resources: PanelResources<T, C, I, R, D>,
    ) -> Self {
        let PanelResources {
            transport,
            core,
            io,
            reset,
            delay,
        } = resources;
        Self::new(
            profile,
            transport,
            PowerController::new(core, io, reset, delay),
        )
    }

    /// Current power state.
    pub fn state(&self) -> PowerState {
        self.state
    }

    /// The bound profile.
    pub fn profile(&self) -> &'a PanelProfile {
        self.profile
    }

    /// The power controller.
    pub fn power(&self) -> &PowerController<C, I, R, D> {
        &self.power
    }

    /// The DSI transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Mutable access to the DSI transport, for host glue that shares the link.
    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Report of the most recent power-down or power-up rollback, if any has
    /// run.
    pub fn last_teardown(&self) -> Option<TeardownReport> {
        self.last_teardown
    }

    /// Power the panel up and start video.
    ///
    /// No-op if already `On`. On error the state is `Off` and the rollback
    /// is recorded in [`last_teardown`](Self::last_teardown). Unless that
    /// report names a rail still on, both rails are off and the call can
    /// simply be repeated.
    pub fn activate(&mut self) -> Result<(), PanelError> {
        match self.state {
            PowerState::On => {
                debug!("{} already on", self.profile.name);
                return Ok(());
            }
            PowerState::Off => {}
            state @ (PowerState::PoweringUp | PowerState::PoweringDown) => {
                warn!("{}: activate refused while {}", self.profile.name, state);
                return Err(PanelError::InvalidState { state });
            }
        }

        info!("{}: powering up", self.profile.name);
        self.state = PowerState::PoweringUp;

        if let Err(e) = self.power.enable_all() {
            let rails = self.power.rails_left_on();
            self.abort_power_up(rails);
            return Err(e);
        }

        if let Err(e) = self.power_up_sequence() {
            error!("{}: power-up aborted: {}", self.profile.name, e);
            let rails = self.power.disable_all();
            self.abort_power_up(rails);
            return Err(e);
        }

        self.state = PowerState::On;
        info!("{}: on", self.profile.name);
        Ok(())
    }

    /// Record the rollback of a failed power-up and return to `Off`.
    fn abort_power_up(&mut self, rails: RailShutdown) {
        let report = TeardownReport {
            rails,
            ..TeardownReport::default()
        };
        if !report.rails_off() {
            error!("{}: rollback left supplies on: {}", self.profile.name, report);
        }
        self.last_teardown = Some(report);
        self.state = PowerState::Off;
    }

    /// Everything between rails-on and `On`.
    fn power_up_sequence(&mut self) -> Result<(), PanelError> {
        let sequence = self.profile.sequence;

        self.power
            .pulse_reset(sequence.reset_pulse_us, sequence.reset_settle_us);
        self.send_init_table()?;
        self.send_dcs(DcsCommand::ExitSleepMode)?;
        self.power.settle_ms(sequence.sleep_out_settle_ms);
        self.send_dcs(DcsCommand::SetDisplayOn)
    }

    fn send_init_table(&mut self) -> Result<(), PanelError> {
        let commands = self.profile.commands;
        for (index, command) in commands.iter().enumerate() {
            trace!(
                "init {}: reg {} <- {}",
                index,
                command.address,
                command.value
            );
            if let Err(e) = self.transport.write_register(command.address, command.value) {
                error!(
                    "init command {} (page {}, reg {}) failed: {}",
                    index,
                    commands.page_at(index).unwrap_or(0),
                    command.address,
                    Dbg(&e)
                );
                return Err(PanelError::CommandWrite { index });
            }
        }
        debug!("{}: {} init commands sent", self.profile.name, commands.len());
        Ok(())
    }

    fn send_dcs(&mut self, command: DcsCommand) -> Result<(), PanelError> {
        self.transport.dcs_write(command).map_err(|e| {
            error!("failed to send {}: {}", command, Dbg(&e));
            PanelError::DisplayCommand { command }
        })
    }

    /// Stop video and power the panel down.
    ///
    /// No-op if already `Off`. Otherwise runs to completion whatever fails
    /// and always leaves the state `Off`. Failed DCS commands are recorded
    /// in [`last_teardown`](Self::last_teardown) only; a rail that would not
    /// switch off is returned as [`PanelError::Teardown`].
    pub fn deactivate(&mut self) -> Result<(), PanelError> {
        if self.state == PowerState::Off {
            debug!("{} already off", self.profile.name);
            return Ok(());
        }

        info!("{}: powering down from {}", self.profile.name, self.state);
        self.state = PowerState::PoweringDown;
        let sequence = self.profile.sequence;

        let display_off_failed = self.send_dcs(DcsCommand::SetDisplayOff).is_err();
        let enter_sleep_failed = self.send_dcs(DcsCommand::EnterSleepMode).is_err();
        self.power.settle_ms(sequence.sleep_in_settle_ms);
        let report = TeardownReport {
            display_off_failed,
            enter_sleep_failed,
            rails: self.power.disable_all(),
        };

        self.state = PowerState::Off;
        self.last_teardown = Some(report);

        if report.rails_off() {
            if !report.is_clean() {
                warn!("{}: off with errors: {}", self.profile.name, report);
            }
            info!("{}: off", self.profile.name);
            Ok(())
        } else {
            error!("{}: {}", self.profile.name, report);
            Err(PanelError::Teardown(report))
        }
    }

    /// Host shutdown hook: power down, logging rather than returning errors.
    pub fn shutdown(&mut self) {
        if let Err(e) = self.deactivate() {
            error!("{}: shutdown: {}", self.profile.name, e);
        }
    }

    /// Single supported mode, see [`ModeProvider::preferred_mode`].
    pub fn preferred_mode(&self) -> Result<DisplayMode, PanelError> {
        self.profile.preferred_mode()
    }

    /// Report modes to `sink`, see [`ModeProvider::get_modes`].
    pub fn get_modes(&self, sink: &mut dyn ModeSink) -> Result<usize, PanelError> {
        self.profile.get_modes(sink)
    }

    /// Take the hardware back without touching it.
    pub fn into_resources(self) -> PanelResources<T, C, I, R, D> {
        let (core, io, reset, delay) = self.power.release();
        PanelResources {
            transport: self.transport,
            core,
            io,
            reset,
            delay,
        }
    }

    #[cfg(test)]
    pub(crate) fn force_state(&mut self, state: PowerState) {
        self.state = state;
    }
}

impl<T, C, I, R, D> PanelLifecycle<'static, T, C, I, R, D>
where
    T: DsiTransport,
    C: PowerRail,
    I: PowerRail,
    R: OutputPin,
    D: DelayNs,
{
    /// Bind the catalog panel matching `compatible` to `resources`.
    ///
    /// Attaches the DSI link with the profile's lane count, pixel format and
    /// mode flags. The panel is left `Off`. On error the resources are
    /// dropped.
    pub fn bind(
        compatible: &str,
        resources: PanelResources<T, C, I, R, D>,
    ) -> Result<Self, PanelError> {
        let Some(profile) = catalog::find_profile(compatible) else {
            error!("no panel matches {}", compatible);
            return Err(PanelError::UnknownPanel);
        };

        let mut panel = Self::from_resources(profile, resources);
        if let Err(e) = panel.transport.attach(&profile.link) {
            error!("{}: DSI attach failed: {}", profile.name, Dbg(&e));
            return Err(PanelError::Attach);
        }

        info!(
            "{}: bound, {} lanes, reset {}",
            profile.name,
            profile.link.lanes,
            if panel.power.reset().is_present() {
                "gpio"
            } else {
                "none"
            }
        );
        Ok(panel)
    }

    /// Power down, detach the DSI link and give the hardware back.
    pub fn unbind(mut self) -> PanelResources<T, C, I, R, D> {
        self.shutdown();
        if let Err(e) = self.transport.detach() {
            error!("{}: DSI detach failed: {}", self.profile.name, Dbg(&e));
        }
        self.into_resources()
    }
}

impl<T, C, I, R, D> ModeProvider for PanelLifecycle<'_, T, C, I, R, D> {
    fn timing(&self) -> DisplayTiming {
        self.profile.timing
    }
}
