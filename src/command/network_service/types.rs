//! Argument and parameter types used by Network service Commands and Responses
use atat::atat_derive::AtatEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, AtatEnum)]
pub enum NetworkRegistrationUrcConfig {
    /// • 0 (factory-programmed value): network registration URC disabled
    UrcDisabled = 0,
    /// • 1: network registration URC +CREG: <stat> enabled
    UrcEnabled = 1,
    /// • 2: network registration and location information URC +CREG: <stat>[,<lac>,<ci>[,
    /// <AcT>]] enabled
    UrcVerbose = 2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, AtatEnum)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum NetworkRegistrationStat {
    /// • 0: not registered, the MT is not currently searching a new operator to register to
    NotRegistered = 0,
    /// • 1: registered, home network
    Registered = 1,
    /// • 2: not registered, but the MT is currently searching a new operator to register to
    NotRegisteredSearching = 2,
    /// • 3: registration denied
    RegistrationDenied = 3,
    /// • 4: unknown (e.g. out of coverage)
    Unknown = 4,
    /// • 5: registered, roaming
    RegisteredRoaming = 5,
}

impl NetworkRegistrationStat {
    pub fn is_registered(&self) -> bool {
        matches!(self, Self::Registered | Self::RegisteredRoaming)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registration_stat_from_raw() {
        assert_eq!(
            NetworkRegistrationStat::try_from(5u8).ok(),
            Some(NetworkRegistrationStat::RegisteredRoaming)
        );
        assert_eq!(
            NetworkRegistrationStat::try_from(0u8).ok(),
            Some(NetworkRegistrationStat::NotRegistered)
        );
        assert!(NetworkRegistrationStat::try_from(6u8).is_err());
        assert!(NetworkRegistrationStat::RegisteredRoaming.is_registered());
        assert!(!NetworkRegistrationStat::NotRegisteredSearching.is_registered());
    }
}
