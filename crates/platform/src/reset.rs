//! Panel reset line
//!
//! The reset input of most DSI panel controllers is active-low, but boards
//! sometimes route it through an inverter, so the polarity is configurable.
//! The line is optional: some modules tie reset to a power-good signal and
//! expose no GPIO at all. Operations on an absent line are no-ops.

use embedded_hal::digital::{ErrorType, OutputPin};

/// Electrical level that asserts reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ResetPolarity {
    /// Reset is asserted by driving the pin low (the usual case).
    #[default]
    ActiveLow,
    /// Reset is asserted by driving the pin high.
    ActiveHigh,
}

/// Stand-in pin type for boards without a reset GPIO.
///
/// Use with [`ResetLine::absent`].
#[derive(Debug, Clone, Copy, Default)]
pub struct NoResetPin;

impl ErrorType for NoResetPin {
    type Error = core::convert::Infallible;
}

impl OutputPin for NoResetPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Optional reset GPIO with logical assert/deassert.
pub struct ResetLine<P> {
    pin: Option<P>,
    polarity: ResetPolarity,
    asserted: bool,
}

impl<P: OutputPin> ResetLine<P> {
    /// Take ownership of the reset pin and drive it deasserted.
    pub fn new(mut pin: P, polarity: ResetPolarity) -> Self {
        // Ignore the error here; a broken pin shows up on the first pulse.
        let _ = match polarity {
            ResetPolarity::ActiveLow => pin.set_high(),
            ResetPolarity::ActiveHigh => pin.set_low(),
        };
        Self {
            pin: Some(pin),
            polarity,
            asserted: false,
        }
    }

    /// A reset line that is not connected.
    pub fn absent() -> Self {
        Self {
            pin: None,
            polarity: ResetPolarity::default(),
            asserted: false,
        }
    }

    /// Returns `true` if a GPIO is attached.
    pub fn is_present(&self) -> bool {
        self.pin.is_some()
    }

    /// Returns `true` while reset is logically asserted.
    pub fn is_asserted(&self) -> bool {
        self.asserted
    }

    /// Configured polarity.
    pub fn polarity(&self) -> ResetPolarity {
        self.polarity
    }

    /// Hold the controller in reset.
    pub fn assert(&mut self) -> Result<(), P::Error> {
        self.drive(true)
    }

    /// Release the controller from reset.
    pub fn deassert(&mut self) -> Result<(), P::Error> {
        self.drive(false)
    }

    fn drive(&mut self, assert: bool) -> Result<(), P::Error> {
        let Some(pin) = self.pin.as_mut() else {
            return Ok(());
        };
        let high = match self.polarity {
            ResetPolarity::ActiveLow => !assert,
            ResetPolarity::ActiveHigh => assert,
        };
        if high {
            pin.set_high()?;
        } else {
            pin.set_low()?;
        }
        self.asserted = assert;
        Ok(())
    }

    /// Release the pin, if any.
    pub fn release(self) -> Option<P> {
        self.pin
    }
}
