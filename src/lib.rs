#![cfg_attr(not(test), no_std)]
#![allow(async_fn_in_trait)]

// This mod MUST go first, so that the others see its macros.
pub(crate) mod fmt;

pub mod asynch;
pub mod command;
pub mod config;
pub mod context;
pub mod device;
pub mod error;
pub mod modules;
pub mod properties;

#[cfg(test)]
mod test_helpers;

pub use asynch::{AtHandle, State};
pub use config::{Config, NoPin};
pub use context::{CellularContext, Me910Context};
pub use device::{CellularDevice, PowerState, TelitMe910};
pub use error::Error;
pub use modules::{Module, ME910_PROPERTIES};
pub use properties::{CellularProperties, Property, RegistrationMode};
