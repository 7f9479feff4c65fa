use embassy_time::Duration;

use super::{ModuleParams, DEFAULT_DELAY_BETWEEN_AT_COMMANDS};
use crate::properties::{CellularProperties, RegistrationMode};

pub static ME910_PROPERTIES: CellularProperties = CellularProperties {
    creg: RegistrationMode::Lac,
    cgreg: RegistrationMode::Lac,
    cereg: RegistrationMode::Lac,
    cgsn_with_type: false,
    cgdata: false,
    cgauth: true,
    cnmi: true,
    csmp: true,
    cmgf: true,
    csdh: true,
    ipv4_stack: true,
    ipv6_stack: true,
    ipv4v6_stack: true,
    non_ip_pdp_type: false,
    cgerep: true,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Me910;

impl ModuleParams for Me910 {
    fn properties(&self) -> &'static CellularProperties {
        &ME910_PROPERTIES
    }

    fn command_delay_default(&self) -> Duration {
        DEFAULT_DELAY_BETWEEN_AT_COMMANDS
    }

    fn power_on_pull_time(&self) -> Duration {
        Duration::from_millis(500)
    }

    fn power_on_release_time(&self) -> Duration {
        Duration::from_millis(5000)
    }

    fn boot_wait(&self) -> Duration {
        Duration::from_millis(5000)
    }

    fn power_off_hold_time(&self) -> Duration {
        Duration::from_millis(10000)
    }
}
