use embedded_hal::digital::{ErrorType, OutputPin};

use crate::command::control::types::FlowControl;

/// Placeholder for boards where the module power line is not wired to the
/// host.
pub struct NoPin;

impl ErrorType for NoPin {
    type Error = core::convert::Infallible;
}

impl OutputPin for NoPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Board level configuration of a cellular module.
///
/// All of this is decided when the board is put together, and is fixed for
/// the lifetime of the device built from it.
#[derive(Debug)]
pub struct Config<PWR> {
    pub(crate) pwr_pin: PWR,
    pub(crate) active_high: bool,
    pub(crate) baud_rate: u32,
    pub(crate) flow_control: Option<FlowControl>,
}

impl Default for Config<NoPin> {
    fn default() -> Self {
        Self::new(NoPin)
    }
}

impl<PWR> Config<PWR>
where
    PWR: OutputPin,
{
    #[must_use]
    pub fn new(pwr_pin: PWR) -> Self {
        Self {
            pwr_pin,
            active_high: true,
            baud_rate: 115_200_u32,
            flow_control: None,
        }
    }

    /// The power line asserts when driven low
    pub fn active_low(self) -> Self {
        Self {
            active_high: false,
            ..self
        }
    }

    pub fn with_baud_rate<B: Into<u32>>(self, baud_rate: B) -> Self {
        Self {
            baud_rate: baud_rate.into(),
            ..self
        }
    }

    /// RTS and CTS are wired between host and module
    pub fn with_flow_control(self) -> Self {
        Self {
            flow_control: Some(FlowControl::RtsCts),
            ..self
        }
    }

    pub fn active_high(&self) -> bool {
        self.active_high
    }

    /// Baud rate the host UART should be set up with before the AT client is
    /// created
    pub fn baud_rate(&self) -> u32 {
        self.baud_rate
    }

    pub fn flow_control(&self) -> FlowControl {
        self.flow_control.unwrap_or(FlowControl::Disabled)
    }
}
