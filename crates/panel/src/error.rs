//! Driver error types

use platform::{DcsCommand, RailId};

use crate::lifecycle::PowerState;
use crate::power::RailShutdown;

/// Errors returned by the panel driver.
///
/// Transport and HAL errors are logged where they happen and reduced to the
/// step that failed, so this type stays `Copy` and independent of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PanelError {
    /// A supply rail refused to switch on.
    Supply {
        /// The rail that failed.
        rail: RailId,
    },
    /// An init-table entry failed to transmit.
    CommandWrite {
        /// Zero-based position of the entry in the command table.
        index: usize,
    },
    /// A standard DCS command failed to transmit.
    DisplayCommand {
        /// The command that failed.
        command: DcsCommand,
    },
    /// Mode storage (name buffer or sink) is full.
    ResourceExhausted,
    /// No catalog entry matches the requested compatible string.
    UnknownPanel,
    /// The DSI host rejected the link configuration.
    Attach,
    /// The requested transition is not valid from the current state.
    InvalidState {
        /// State the lifecycle was in.
        state: PowerState,
    },
    /// Power-down completed but at least one rail did not switch off.
    Teardown(TeardownReport),
}

impl core::fmt::Display for PanelError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Supply { rail } => write!(f, "failed to enable {rail} supply"),
            Self::CommandWrite { index } => write!(f, "init command {index} failed to transmit"),
            Self::DisplayCommand { command } => write!(f, "DCS {command} failed"),
            Self::ResourceExhausted => write!(f, "out of mode storage"),
            Self::UnknownPanel => write!(f, "no panel matches the compatible string"),
            Self::Attach => write!(f, "DSI host rejected the link configuration"),
            Self::InvalidState { state } => write!(f, "operation not valid while {state}"),
            Self::Teardown(report) => write!(f, "power-down incomplete: {report}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PanelError {}

/// What went wrong during the last power-down.
///
/// Power-down never stops early, so every step has a result. The rollback of
/// a failed power-up produces a report with only `rails` filled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TeardownReport {
    /// `set_display_off` was not acknowledged.
    pub display_off_failed: bool,
    /// `enter_sleep_mode` was not acknowledged.
    pub enter_sleep_failed: bool,
    /// Outcome of switching the rails off.
    pub rails: RailShutdown,
}

impl TeardownReport {
    /// Returns `true` if every step succeeded.
    pub fn is_clean(&self) -> bool {
        !self.display_off_failed && !self.enter_sleep_failed && self.rails.is_clean()
    }

    /// Returns `true` if both rails were switched off.
    pub fn rails_off(&self) -> bool {
        self.rails.is_clean()
    }

    /// First failure in sequence order, as a [`PanelError`].
    pub fn first_failure(&self) -> Option<PanelError> {
        if self.display_off_failed {
            Some(PanelError::DisplayCommand {
                command: DcsCommand::SetDisplayOff,
            })
        } else if self.enter_sleep_failed {
            Some(PanelError::DisplayCommand {
                command: DcsCommand::EnterSleepMode,
            })
        } else {
            self.rails.first_failure()
        }
    }
}

impl core::fmt::Display for TeardownReport {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if self.is_clean() {
            return f.write_str("clean");
        }
        let mut sep = "";
        if self.display_off_failed {
            write!(f, "{sep}set_display_off failed")?;
            sep = ", ";
        }
        if self.enter_sleep_failed {
            write!(f, "{sep}enter_sleep_mode failed")?;
            sep = ", ";
        }
        if self.rails.io_failed {
            write!(f, "{sep}iovcc still on")?;
            sep = ", ";
        }
        if self.rails.core_failed {
            write!(f, "{sep}vcc still on")?;
        }
        Ok(())
    }
}
