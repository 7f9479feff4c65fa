pub(crate) mod telit_me910;

use embassy_time::Duration;

use crate::properties::{CellularProperties, GENERIC_PROPERTIES};

pub use telit_me910::{Me910, ME910_PROPERTIES};

/// Pause the AT layer keeps between the end of one command and the start of
/// the next on modules that need one.
pub const DEFAULT_DELAY_BETWEEN_AT_COMMANDS: Duration = Duration::from_millis(20);

pub trait ModuleParams: Copy {
    /// Capability table handed to the generic AT device layer
    fn properties(&self) -> &'static CellularProperties {
        &GENERIC_PROPERTIES
    }

    /// How long to wait between the end of one AT command and the start of the
    /// next, default value
    fn command_delay_default(&self) -> Duration {
        Duration::from_ticks(0)
    }

    /// The time for which the power key must be held active to start the
    /// power-on sequence
    fn power_on_pull_time(&self) -> Duration {
        Duration::from_millis(1000)
    }

    /// The time the power key is released during power-on, before it is
    /// asserted again
    fn power_on_release_time(&self) -> Duration {
        Duration::from_millis(1000)
    }

    /// How long to wait before the module is ready after boot
    fn boot_wait(&self) -> Duration {
        Duration::from_secs(5)
    }

    /// How long the power key must stay inactive for the module to be
    /// considered off
    fn power_off_hold_time(&self) -> Duration {
        Duration::from_millis(3100)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Module {
    Me910(Me910),
    Generic(Generic),
}

impl Module {
    /// Resolve the response of `AT+CGMM`
    pub fn from_model_id(model: &[u8]) -> Self {
        match model {
            id if id.starts_with(b"ME910") => Self::Me910(Me910),
            id => {
                warn!(
                    "Attempting to run {:?} using generic module parameters! This may or may not work.",
                    id
                );
                Self::Generic(Generic)
            }
        }
    }
}

macro_rules! inner {
    ($self: ident, $fn: ident) => {
        match $self {
            Self::Me910(inner) => inner.$fn(),
            Self::Generic(inner) => inner.$fn(),
        }
    };
}

impl ModuleParams for Module {
    fn properties(&self) -> &'static CellularProperties {
        inner!(self, properties)
    }

    fn command_delay_default(&self) -> Duration {
        inner!(self, command_delay_default)
    }

    fn power_on_pull_time(&self) -> Duration {
        inner!(self, power_on_pull_time)
    }

    fn power_on_release_time(&self) -> Duration {
        inner!(self, power_on_release_time)
    }

    fn boot_wait(&self) -> Duration {
        inner!(self, boot_wait)
    }

    fn power_off_hold_time(&self) -> Duration {
        inner!(self, power_off_hold_time)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Generic;

impl ModuleParams for Generic {}
