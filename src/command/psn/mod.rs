//! ### Packet Switched Data Services Commands
//!
//! A PDP context is the packet data session configuration used on the
//! network. In LTE, PS data connections are referred to as EPS bearers, which
//! are conceptually equivalent to PDP contexts.
pub mod types;
pub mod urc;

use super::NoResponse;
use atat::atat_derive::AtatCmd;
use types::{
    AuthenticationType, EPSNetworkRegistrationUrcConfig, GPRSNetworkRegistrationUrcConfig,
    PDPContextStatus, PSEventReportingMode,
};

/// PDP context definition +CGDCONT
///
/// Defines the connection parameters for a PDP context, identified by the
/// local context identification parameter <cid>.
#[derive(Clone, AtatCmd)]
#[at_cmd("+CGDCONT", NoResponse)]
pub struct SetPDPContextDefinition<'a> {
    #[at_arg(position = 0)]
    pub cid: u8,
    #[at_arg(position = 1, len = 6)]
    pub pdp_type: &'a str,
    #[at_arg(position = 2, len = 100)]
    pub apn: &'a str,
}

/// PDP context authentication parameters +CGAUTH
///
/// Sets the authentication parameters sent during the activation of the PDP
/// context <cid>.
#[derive(Clone, AtatCmd)]
#[at_cmd("+CGAUTH", NoResponse)]
pub struct SetAuthenticationParameters<'a> {
    #[at_arg(position = 0)]
    pub cid: u8,
    #[at_arg(position = 1)]
    pub auth_type: AuthenticationType,
    #[at_arg(position = 2, len = 64)]
    pub username: &'a str,
    #[at_arg(position = 3, len = 64)]
    pub password: &'a str,
}

/// PDP context activate or deactivate +CGACT
///
/// Activates or deactivates the specified PDP context.
#[derive(Clone, AtatCmd)]
#[at_cmd("+CGACT", NoResponse, attempts = 1, timeout_ms = 150000)]
pub struct SetPDPContextState {
    #[at_arg(position = 0)]
    pub status: PDPContextStatus,
    #[at_arg(position = 1)]
    pub cid: Option<u8>,
}

/// Packet switched event reporting +CGEREP
///
/// Configures sending of +CGEV URCs from MT to the DTE, in case of certain
/// events occurring in the packet switched MT or the network.
#[derive(Clone, AtatCmd)]
#[at_cmd("+CGEREP", NoResponse)]
pub struct SetPacketSwitchedEventReporting {
    #[at_arg(position = 0)]
    pub mode: PSEventReportingMode,
}

/// GPRS network registration status +CGREG
///
/// Configures the +CGREG URC:
/// - short format: +CGREG: <stat>
/// - long format: +CGREG: <stat>[,<lac>,<ci>[,<AcT>,<rac>]]
#[derive(Clone, AtatCmd)]
#[at_cmd("+CGREG", NoResponse)]
pub struct SetGPRSNetworkRegistrationStatus {
    #[at_arg(position = 0)]
    pub n: GPRSNetworkRegistrationUrcConfig,
}

/// EPS network registration status +CEREG
///
/// Configures the network registration URC related to the EPS domain:
/// - short format: +CEREG: <stat>
/// - long format: +CEREG: <stat>[,[<tac>],[<ci>],[<AcT>]]
#[derive(Clone, AtatCmd)]
#[at_cmd("+CEREG", NoResponse)]
pub struct SetEPSNetworkRegistrationStatus {
    #[at_arg(position = 0)]
    pub n: EPSNetworkRegistrationUrcConfig,
}
