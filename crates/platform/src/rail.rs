//! Power rail abstraction
//!
//! A panel module is fed by independent supplies that must be switched in a
//! fixed order. [`PowerRail`] abstracts one switchable supply; [`GpioRail`]
//! implements it for the common case of a load switch or LDO whose enable
//! input is wired to a GPIO.

use embedded_hal::digital::OutputPin;

/// Identifies one of the panel supplies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RailId {
    /// Core/analog supply (VCC / VCI).
    Core,
    /// I/O logic supply (IOVCC).
    Io,
}

impl RailId {
    /// Supply name as it appears on schematics and in device trees.
    pub const fn supply_name(self) -> &'static str {
        match self {
            Self::Core => "vcc",
            Self::Io => "iovcc",
        }
    }
}

impl core::fmt::Display for RailId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.supply_name())
    }
}

/// A switchable power supply.
pub trait PowerRail {
    /// Error type returned by rail operations.
    type Error: core::fmt::Debug;

    /// Energise the rail.
    ///
    /// On `Ok` the rail is on. On `Err` the rail must be left off.
    fn enable(&mut self) -> Result<(), Self::Error>;

    /// De-energise the rail.
    fn disable(&mut self) -> Result<(), Self::Error>;

    /// Returns `true` if the rail is currently energised.
    fn is_enabled(&self) -> bool;
}

/// Supply switched by a GPIO driving a load switch / LDO enable input.
///
/// Holds ownership of the enable pin and tracks the switched state.
pub struct GpioRail<P: OutputPin> {
    enable_pin: P,
    active_high: bool,
    enabled: bool,
}

impl<P: OutputPin> GpioRail<P> {
    /// Create a rail whose enable input is active-high.
    ///
    /// Takes ownership of the pin and immediately drives it inactive, so the
    /// rail starts off.
    pub fn new(enable_pin: P) -> Self {
        Self::with_polarity(enable_pin, true)
    }

    /// Create a rail whose enable input is active-low (e.g. a P-FET switch).
    pub fn new_active_low(enable_pin: P) -> Self {
        Self::with_polarity(enable_pin, false)
    }

    fn with_polarity(mut enable_pin: P, active_high: bool) -> Self {
        // Ignore the error here; if the pin is broken the first enable()
        // call will surface it.
        let _ = if active_high {
            enable_pin.set_low()
        } else {
            enable_pin.set_high()
        };
        Self {
            enable_pin,
            active_high,
            enabled: false,
        }
    }

    fn drive(&mut self, on: bool) -> Result<(), P::Error> {
        if on == self.active_high {
            self.enable_pin.set_high()
        } else {
            self.enable_pin.set_low()
        }
    }

    /// Release the enable pin.
    pub fn release(self) -> P {
        self.enable_pin
    }
}

impl<P: OutputPin> PowerRail for GpioRail<P> {
    type Error = P::Error;

    fn enable(&mut self) -> Result<(), Self::Error> {
        self.drive(true)?;
        self.enabled = true;
        Ok(())
    }

    fn disable(&mut self) -> Result<(), Self::Error> {
        self.drive(false)?;
        self.enabled = false;
        Ok(())
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use embedded_hal_mock::eh1::digital::{
        Mock as PinMock, State as PinState, Transaction as PinTransaction,
    };
    use embedded_hal_mock::eh1::MockError;

    #[test]
    fn test_starts_disabled_and_toggles() {
        let mut pin = PinMock::new(&[
            PinTransaction::set(PinState::Low), // construction
            PinTransaction::set(PinState::High),
            PinTransaction::set(PinState::Low),
        ]);
        let mut rail = GpioRail::new(pin.clone());
        assert!(!rail.is_enabled());
        rail.enable().unwrap();
        assert!(rail.is_enabled());
        rail.disable().unwrap();
        assert!(!rail.is_enabled());
        pin.done();
    }

    #[test]
    fn test_active_low_polarity() {
        let mut pin = PinMock::new(&[
            PinTransaction::set(PinState::High), // construction: inactive
            PinTransaction::set(PinState::Low),  // enable
        ]);
        let mut rail = GpioRail::new_active_low(pin.clone());
        rail.enable().unwrap();
        assert!(rail.is_enabled());
        pin.done();
    }

    #[test]
    fn test_failed_enable_leaves_rail_off() {
        let mut pin = PinMock::new(&[
            PinTransaction::set(PinState::Low),
            PinTransaction::set(PinState::High)
                .with_error(MockError::Io(std::io::ErrorKind::Other)),
        ]);
        let mut rail = GpioRail::new(pin.clone());
        assert!(rail.enable().is_err());
        assert!(!rail.is_enabled());
        pin.done();
    }

    #[test]
    fn test_supply_names() {
        assert_eq!(RailId::Core.to_string(), "vcc");
        assert_eq!(RailId::Io.to_string(), "iovcc");
    }
}
