//! ### Network service
pub mod types;
pub mod urc;

use super::NoResponse;
use atat::atat_derive::AtatCmd;
use types::NetworkRegistrationUrcConfig;

/// Network registration status +CREG
///
/// Configures the network registration URC related to the circuit switched
/// domain:
/// - short format: +CREG: <stat>
/// - long format: +CREG: <stat>[,<lac>,<ci>[,<AcT>]]
#[derive(Clone, AtatCmd)]
#[at_cmd("+CREG", NoResponse)]
pub struct SetNetworkRegistrationStatus {
    #[at_arg(position = 0)]
    pub n: NetworkRegistrationUrcConfig,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::encode;

    #[test]
    fn registration_urc() {
        assert_eq!(
            encode(&SetNetworkRegistrationStatus {
                n: NetworkRegistrationUrcConfig::UrcEnabled,
            }),
            "AT+CREG=1"
        );
    }
}
