//! ### V24 control and V25ter
//! These commands, unless specifically stated, do not implement set syntax
//! using "=", read ("?"), or test ("=?").
pub mod types;

use super::NoResponse;
use atat::atat_derive::AtatCmd;
use types::Echo;

/// Command echo E
///
/// Controls whether the module echoes characters received from the DTE while
/// in command state.
#[derive(Clone, AtatCmd)]
#[at_cmd("E", NoResponse, value_sep = false)]
pub struct SetEcho {
    #[at_arg(position = 0)]
    pub enabled: Echo,
}

/// Flow control &K, DCD behaviour &C and DTR behaviour &D, hardware flow
/// control variant
///
/// Selects RTS/CTS flow control, lets DCD follow the remote carrier (`&C1`)
/// and makes the module ignore DTR transitions (`&D0`). The three settings are
/// issued as a single command line.
#[derive(Clone, AtatCmd)]
#[at_cmd("&K3;&C1;&D0", NoResponse, value_sep = false)]
pub struct SetDteBehaviourRtsCts;

/// Flow control &K, DCD behaviour &C and DTR behaviour &D, no flow control
/// variant
///
/// Same as [`SetDteBehaviourRtsCts`], but with flow control disabled (`&K0`)
/// for hosts that do not wire RTS and CTS.
#[derive(Clone, AtatCmd)]
#[at_cmd("&K0;&C1;&D0", NoResponse, value_sep = false)]
pub struct SetDteBehaviourNoFlowControl;

/// Store current configuration &W, select power-up profile &P
///
/// `&W` stores the complete configuration of the device in profile 0, and
/// `&P` selects profile 0 as the one loaded at startup.
#[derive(Clone, AtatCmd)]
#[at_cmd("&W&P", NoResponse, value_sep = false)]
pub struct StoreProfile;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::encode;

    #[test]
    fn dte_behaviour_variants() {
        assert_eq!(encode(&SetDteBehaviourRtsCts), "AT&K3;&C1;&D0");
        assert_eq!(encode(&SetDteBehaviourNoFlowControl), "AT&K0;&C1;&D0");
    }

    #[test]
    fn echo_and_profile() {
        assert_eq!(encode(&SetEcho { enabled: Echo::Off }), "ATE0");
        assert_eq!(encode(&StoreProfile), "AT&W&P");
    }
}
