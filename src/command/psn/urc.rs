//! Unsolicited responses for Packet Switched Data Services Commands
use crate::command::network_service::types::NetworkRegistrationStat;
use heapless::String;

/// GPRS network registration status +CGREG, short format
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GPRSNetworkRegistration {
    pub stat: NetworkRegistrationStat,
}

/// EPS network registration status +CEREG, short format
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EPSNetworkRegistration {
    pub stat: NetworkRegistrationStat,
}

/// Packet domain event +CGEV, e.g. `NW DETACH` or `ME PDN ACT 1`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PacketSwitchedEvent {
    pub event: String<64>,
}
