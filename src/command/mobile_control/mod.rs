//! ### Mobile equipment control and status Commands
pub mod types;

use super::NoResponse;
use atat::atat_derive::AtatCmd;
use types::{EventReportingMode, Functionality, ResetMode, TerminationErrorMode};

/// Set module functionality +CFUN
///
/// Selects the level of functionality <fun> in the MT.
#[derive(Clone, AtatCmd)]
#[at_cmd("+CFUN", NoResponse, timeout_ms = 180000)]
pub struct SetModuleFunctionality {
    #[at_arg(position = 0)]
    pub fun: Functionality,
    #[at_arg(position = 1)]
    pub rst: Option<ResetMode>,
}

/// Module switch off +CPWROFF
///
/// Switches off the MT in an orderly way. During shut-down current settings
/// are saved in the module's non-volatile memory. Using this command instead
/// of dropping the supply is the generic soft power-off of the AT device
/// layer.
#[derive(Clone, AtatCmd)]
#[at_cmd("+CPWROFF", NoResponse, timeout_ms = 40000)]
pub struct ModuleSwitchOff;

/// Report mobile termination error +CMEE
///
/// Configures the formatting of the result code +CME ERROR: <err> as an
/// indication of an error relating to the functionality of the MT. When
/// enabled, MT related errors cause +CME ERROR: <err> final result code
/// instead of the regular ERROR final result code. The error result code is
/// returned normally when an error is related to syntax, invalid parameters or
/// MT functionality.
#[derive(Clone, AtatCmd)]
#[at_cmd("+CMEE", NoResponse)]
pub struct SetReportMobileTerminationError {
    #[at_arg(position = 0)]
    pub n: TerminationErrorMode,
}

/// Mobile termination event reporting +CMER
///
/// Enables sending of +CIEV unsolicited result codes from the TA to the TE
/// when indicator states change.
#[derive(Clone, AtatCmd)]
#[at_cmd("+CMER", NoResponse)]
pub struct SetMobileTerminationEventReporting {
    #[at_arg(position = 0)]
    pub mode: EventReportingMode,
}
