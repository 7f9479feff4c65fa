//! Unsolicited responses for Telit custom commands
use super::types::{PacketServiceNetworkType, SimStatus};

/// SIM status change #QSS
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SimStatusChanged {
    pub status: SimStatus,
}

/// Packet service network type change #PSNT
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PacketServiceNetworkTypeChanged {
    pub nt: PacketServiceNetworkType,
}
