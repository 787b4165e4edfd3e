//! Video modes reported to the display host
//!
//! A panel has exactly one mode, taken verbatim from its profile. The host
//! collects modes through a [`ModeSink`]; [`ProbedModes`] is a fixed-capacity
//! sink for hosts that have no connector object of their own.

use core::fmt::Write as _;

use panel_specs::{DisplayTiming, PanelProfile};

use crate::error::PanelError;

/// Capacity of a mode name (`"1280x1280"` plus headroom).
pub const MODE_NAME_LEN: usize = 32;

/// Mode type flags, bit-compatible with the usual DRM mode-type bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ModeKind(u32);

impl ModeKind {
    /// Mode is the panel's preferred mode.
    pub const PREFERRED: Self = Self(1 << 3);
    /// Mode comes from the driver rather than EDID or the user.
    pub const DRIVER: Self = Self(1 << 6);

    /// Raw bits.
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Returns `true` if every flag in `other` is set.
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl core::ops::BitOr for ModeKind {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// One video mode as handed to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayMode {
    /// Timing, identical to the profile's.
    pub timing: DisplayTiming,
    /// `"<hdisplay>x<vdisplay>"`.
    pub name: heapless::String<MODE_NAME_LEN>,
    /// Vertical refresh in Hz, rounded to nearest.
    pub vrefresh: u32,
    /// Mode type flags.
    pub kind: ModeKind,
}

impl DisplayMode {
    /// Build a mode from `timing`, naming it after its active area.
    pub fn from_timing(timing: DisplayTiming, kind: ModeKind) -> Result<Self, PanelError> {
        let mut name = heapless::String::new();
        write!(name, "{}x{}", timing.hdisplay, timing.vdisplay)
            .map_err(|_| PanelError::ResourceExhausted)?;
        Ok(Self {
            timing,
            name,
            vrefresh: timing.refresh_hz(),
            kind,
        })
    }

    /// Active width in pixels.
    pub fn width(&self) -> u16 {
        self.timing.hdisplay
    }

    /// Active height in pixels.
    pub fn height(&self) -> u16 {
        self.timing.vdisplay
    }

    /// Returns `true` for the preferred mode.
    pub fn is_preferred(&self) -> bool {
        self.kind.contains(ModeKind::PREFERRED)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for DisplayMode {
    fn format(&self, f: defmt::Formatter<'_>) {
        defmt::write!(
            f,
            "{}@{}Hz ({} kHz)",
            self.name.as_str(),
            self.vrefresh,
            self.timing.clock_khz
        );
    }
}

/// Receiver for probed modes (the host's connector).
pub trait ModeSink {
    /// Record the physical size of the active area.
    fn set_physical_size(&mut self, width_mm: u16, height_mm: u16);

    /// Add one mode to the candidate list.
    fn add_mode(&mut self, mode: DisplayMode) -> Result<(), PanelError>;
}

/// Bounded mode list with the connector's physical size.
#[derive(Debug, Clone, Default)]
pub struct ProbedModes<const N: usize> {
    modes: heapless::Vec<DisplayMode, N>,
    width_mm: u16,
    height_mm: u16,
}

impl<const N: usize> ProbedModes<N> {
    /// Create an empty list.
    pub fn new() -> Self {
        Self {
            modes: heapless::Vec::new(),
            width_mm: 0,
            height_mm: 0,
        }
    }

    /// Modes in the order they were added.
    pub fn modes(&self) -> &[DisplayMode] {
        &self.modes
    }

    /// The first mode flagged preferred.
    pub fn preferred(&self) -> Option<&DisplayMode> {
        self.modes.iter().find(|mode| mode.is_preferred())
    }

    /// Physical size as `(width_mm, height_mm)`; zero until reported.
    pub fn physical_size(&self) -> (u16, u16) {
        (self.width_mm, self.height_mm)
    }

    /// Number of modes.
    pub fn len(&self) -> usize {
        self.modes.len()
    }

    /// Returns `true` if no mode was added.
    pub fn is_empty(&self) -> bool {
        self.modes.is_empty()
    }

    /// Forget all modes and the physical size.
    pub fn clear(&mut self) {
        self.modes.clear();
        self.width_mm = 0;
        self.height_mm = 0;
    }
}

impl<const N: usize> ModeSink for ProbedModes<N> {
    fn set_physical_size(&mut self, width_mm: u16, height_mm: u16) {
        self.width_mm = width_mm;
        self.height_mm = height_mm;
    }

    fn add_mode(&mut self, mode: DisplayMode) -> Result<(), PanelError> {
        self.modes
            .push(mode)
            .map_err(|_| PanelError::ResourceExhausted)
    }
}

/// Source of a panel's modes.
pub trait ModeProvider {
    /// Timing of the single supported mode.
    fn timing(&self) -> DisplayTiming;

    /// The preferred mode, flagged `DRIVER | PREFERRED`.
    ///
    /// Pure: the timing is copied unmodified.
    fn preferred_mode(&self) -> Result<DisplayMode, PanelError> {
        DisplayMode::from_timing(self.timing(), ModeKind::DRIVER | ModeKind::PREFERRED)
    }

    /// Report the physical size and the preferred mode to `sink`.
    ///
    /// Returns the number of modes added.
    fn get_modes(&self, sink: &mut dyn ModeSink) -> Result<usize, PanelError> {
        let timing = self.timing();
        let mode = match self.preferred_mode() {
            Ok(mode) => mode,
            Err(e) => {
                error!(
                    "failed to add mode {}x{}@{}",
                    timing.hdisplay,
                    timing.vdisplay,
                    timing.refresh_hz()
                );
                return Err(e);
            }
        };
        sink.set_physical_size(timing.width_mm, timing.height_mm);
        sink.add_mode(mode)?;
        Ok(1)
    }
}

impl ModeProvider for PanelProfile {
    fn timing(&self) -> DisplayTiming {
        self.timing
    }
}

impl ModeProvider for DisplayTiming {
    fn timing(&self) -> DisplayTiming {
        *self
    }
}
