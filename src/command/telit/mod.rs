//! ### Telit custom commands
//!
//! `#`-prefixed commands specific to the Telit ME910 family.
pub mod types;
pub mod urc;

use super::NoResponse;
use atat::atat_derive::AtatCmd;
use types::{PacketServiceNetworkTypeMode, QuerySimStatusMode};

/// Query SIM status #QSS
///
/// Enables the `#QSS: <status>` unsolicited indication, issued on every SIM
/// status change.
#[derive(Clone, AtatCmd)]
#[at_cmd("#QSS", NoResponse)]
pub struct SetQuerySimStatus {
    #[at_arg(position = 0)]
    pub mode: QuerySimStatusMode,
}

/// Packet service network type #PSNT
///
/// Enables the `#PSNT: <nt>` unsolicited indication reporting the packet
/// service network type.
#[derive(Clone, AtatCmd)]
#[at_cmd("#PSNT", NoResponse)]
pub struct SetPacketServiceNetworkType {
    #[at_arg(position = 0)]
    pub mode: PacketServiceNetworkTypeMode,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::encode;

    #[test]
    fn telit_urcs() {
        assert_eq!(
            encode(&SetQuerySimStatus {
                mode: QuerySimStatusMode::Enabled,
            }),
            "AT#QSS=1"
        );
        assert_eq!(
            encode(&SetPacketServiceNetworkType {
                mode: PacketServiceNetworkTypeMode::Enabled,
            }),
            "AT#PSNT=1"
        );
    }
}
