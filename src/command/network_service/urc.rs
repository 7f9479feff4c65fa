//! Unsolicited responses for Network service Commands
use super::types::NetworkRegistrationStat;

/// Network registration status +CREG, short format
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct NetworkRegistration {
    pub stat: NetworkRegistrationStat,
}
