//! MIPI-DSI command transport
//!
//! The driver never touches the DSI host directly. It hands short packets to
//! a [`DsiTransport`], which owns the link and reports success or failure per
//! packet. One packet is in flight at a time; ordering between packets is
//! significant.

use panel_specs::DsiLinkConfig;

/// Standard MIPI DCS commands used by the power sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DcsCommand {
    /// `enter_sleep_mode` (0x10).
    EnterSleepMode,
    /// `exit_sleep_mode` (0x11).
    ExitSleepMode,
    /// `set_display_off` (0x28).
    SetDisplayOff,
    /// `set_display_on` (0x29).
    SetDisplayOn,
}

impl DcsCommand {
    /// DCS opcode byte.
    pub const fn opcode(self) -> u8 {
        match self {
            Self::EnterSleepMode => 0x10,
            Self::ExitSleepMode => 0x11,
            Self::SetDisplayOff => 0x28,
            Self::SetDisplayOn => 0x29,
        }
    }

    /// DCS command name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::EnterSleepMode => "enter_sleep_mode",
            Self::ExitSleepMode => "exit_sleep_mode",
            Self::SetDisplayOff => "set_display_off",
            Self::SetDisplayOn => "set_display_on",
        }
    }
}

impl core::fmt::Display for DcsCommand {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// Packet-level access to a DSI peripheral.
pub trait DsiTransport {
    /// Error type returned by transport operations.
    type Error: core::fmt::Debug;

    /// Send `payload` as one generic (manufacturer) write packet.
    fn generic_write(&mut self, payload: &[u8]) -> Result<(), Self::Error>;

    /// Send a standard DCS command without parameters.
    fn dcs_write(&mut self, command: DcsCommand) -> Result<(), Self::Error>;

    /// Write one vendor register: a single two-byte generic write.
    fn write_register(&mut self, address: u8, value: u8) -> Result<(), Self::Error> {
        self.generic_write(&[address, value])
    }

    /// Attach the peripheral to the host with the given link parameters.
    fn attach(&mut self, link: &DsiLinkConfig) -> Result<(), Self::Error> {
        let _ = link;
        Ok(())
    }

    /// Detach the peripheral from the host.
    fn detach(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl<T: DsiTransport + ?Sized> DsiTransport for &mut T {
    type Error = T::Error;

    fn generic_write(&mut self, payload: &[u8]) -> Result<(), Self::Error> {
        T::generic_write(self, payload)
    }

    fn dcs_write(&mut self, command: DcsCommand) -> Result<(), Self::Error> {
        T::dcs_write(self, command)
    }

    fn write_register(&mut self, address: u8, value: u8) -> Result<(), Self::Error> {
        T::write_register(self, address, value)
    }

    fn attach(&mut self, link: &DsiLinkConfig) -> Result<(), Self::Error> {
        T::attach(self, link)
    }

    fn detach(&mut self) -> Result<(), Self::Error> {
        T::detach(self)
    }
}
