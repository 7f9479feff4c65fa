//! Argument and parameter types used by Packet Switched Data Services
//! Commands and Responses
use atat::atat_derive::AtatEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, AtatEnum)]
pub enum PSEventReportingMode {
    /// • 0: buffer URCs in the MT; if the buffer is full the oldest ones are
    ///   discarded
    Buffer = 0,
    /// • 1: discard URCs when the link is reserved, otherwise forward them
    ///   directly to the DTE
    DiscardUrcs = 1,
    /// • 2: buffer URCs in the MT when the link is reserved (e.g. in on-line
    ///   data mode) and flush them to the DTE when the link becomes
    ///   available, otherwise forward them directly to the DTE
    BufferUrcs = 2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, AtatEnum)]
pub enum GPRSNetworkRegistrationUrcConfig {
    /// • 0 (factory-programmed value): network registration URC disabled
    UrcDisabled = 0,
    /// • 1: network registration URC enabled
    UrcEnabled = 1,
    /// • 2: network registration and location information URC enabled
    UrcVerbose = 2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, AtatEnum)]
pub enum EPSNetworkRegistrationUrcConfig {
    /// • 0 (factory-programmed value): network registration URC disabled
    UrcDisabled = 0,
    /// • 1: network registration URC +CEREG: <stat> enabled
    UrcEnabled = 1,
    /// • 2: network registration and location information URC +CEREG: <stat>[,[<tac>],[<ci>],[<AcT>]] enabled
    UrcVerbose = 2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, AtatEnum)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PDPContextStatus {
    Deactivated = 0,
    Activated = 1,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, AtatEnum)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AuthenticationType {
    None = 0,
    Pap = 1,
    Chap = 2,
}

/// Packet data protocol type of a PDP context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PdpType {
    Ipv4,
    Ipv6,
    Ipv4v6,
    NonIp,
}

impl PdpType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ipv4 => "IP",
            Self::Ipv6 => "IPV6",
            Self::Ipv4v6 => "IPV4V6",
            Self::NonIp => "Non-IP",
        }
    }
}
