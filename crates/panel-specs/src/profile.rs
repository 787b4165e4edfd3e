//! Panel descriptor types
//!
//! A [`PanelProfile`] bundles everything the driver needs to know about one
//! panel variant: the preferred video mode, the vendor init table, the DSI
//! link parameters and the datasheet power-sequencing delays.

use crate::{CommandTable, DisplayTiming};

/// Pixel format carried on the DSI video stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PixelFormat {
    /// 24 bpp, 8 bits per channel.
    Rgb888,
    /// 18 bpp, loosely packed into 24-bit words.
    Rgb666,
    /// 18 bpp, tightly packed.
    Rgb666Packed,
    /// 16 bpp.
    Rgb565,
}

impl PixelFormat {
    /// Bits transmitted per pixel.
    pub const fn bits_per_pixel(self) -> u8 {
        match self {
            Self::Rgb888 | Self::Rgb666 => 24,
            Self::Rgb666Packed => 18,
            Self::Rgb565 => 16,
        }
    }
}

/// DSI peripheral mode flags.
///
/// Bit values match the MIPI DSI host flag layout used by most DSI host
/// controllers, so a transport can forward them without translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DsiModeFlags(u32);

impl DsiModeFlags {
    /// Video mode (as opposed to command mode).
    pub const VIDEO: Self = Self(1 << 0);
    /// Burst video transfers.
    pub const VIDEO_BURST: Self = Self(1 << 1);
    /// Send commands in low-power mode.
    pub const LPM: Self = Self(1 << 11);
    /// Do not send end-of-transmission packets.
    pub const NO_EOT_PACKET: Self = Self(1 << 9);

    /// No flags set.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Raw flag bits.
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Union of two flag sets.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Returns `true` if every flag in `other` is set in `self`.
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl core::ops::BitOr for DsiModeFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

/// DSI link parameters the panel must be attached with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DsiLinkConfig {
    /// Number of data lanes (1–4).
    pub lanes: u8,
    /// Video stream pixel format.
    pub format: PixelFormat,
    /// Peripheral mode flags.
    pub mode_flags: DsiModeFlags,
}

/// Datasheet delays used by the power sequence.
///
/// These are minimums from the panel datasheet. The driver waits at least
/// this long and never cuts a wait short, including on error paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SequenceTimings {
    /// Reset assertion width (tRW) in microseconds.
    pub reset_pulse_us: u32,
    /// Wait after reset release before the first command (tRT) in microseconds.
    pub reset_settle_us: u32,
    /// Wait after "exit sleep mode" before "display on", in milliseconds.
    pub sleep_out_settle_ms: u32,
    /// Wait after "enter sleep mode" before removing power, in milliseconds.
    pub sleep_in_settle_ms: u32,
}

/// Complete description of one supported panel variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PanelProfile {
    /// Human-readable module name (e.g. `"Leadtek LTK500HD1829"`).
    pub name: &'static str,
    /// Selection key matched at bind time (device-tree compatible string).
    pub compatible: &'static str,
    /// Preferred (and only) video mode.
    pub timing: DisplayTiming,
    /// Vendor initialisation sequence.
    pub commands: CommandTable,
    /// DSI link parameters.
    pub link: DsiLinkConfig,
    /// Power-sequencing delays.
    pub sequence: SequenceTimings,
}
