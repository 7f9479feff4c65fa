//! Cellular devices: the generic AT device layer and the module drivers
//! built on top of it.

pub mod at_device;
pub mod me910;

use embassy_time::Duration;

use crate::error::Error;
use crate::properties::CellularProperties;

pub use at_device::AtDevice;
pub use me910::TelitMe910;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PowerState {
    Off,
    PoweringOn,
    On,
    PoweringOff,
}

/// Operations an orchestrator drives a cellular module through.
///
/// A typical lifetime is `hard_power_on`, `init`, network operations through
/// contexts obtained from `create_context`, and finally `soft_power_off` or
/// `hard_power_off`.
pub trait CellularDevice {
    type Context;

    /// Bring the module into a known configuration.
    async fn init(&mut self) -> Result<(), Error>;

    async fn hard_power_on(&mut self) -> Result<(), Error>;

    async fn hard_power_off(&mut self) -> Result<(), Error>;

    async fn soft_power_on(&mut self) -> Result<(), Error>;

    async fn soft_power_off(&mut self) -> Result<(), Error>;

    /// Create a PDP context over the channel shared with this device.
    ///
    /// `cp_req` requests control plane optimisation and `nonip_req` a
    /// Non-IP PDP type.
    fn create_context(&self, apn: Option<&str>, cp_req: bool, nonip_req: bool) -> Self::Context;

    /// Delay to keep between consecutive AT commands.
    fn send_delay(&self) -> Duration;

    fn properties(&self) -> &'static CellularProperties;
}
