use atat::atat_derive::AtatEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, AtatEnum)]
pub enum QuerySimStatusMode {
    /// • 0: unsolicited indication disabled
    Disabled = 0,
    /// • 1: basic unsolicited indication `#QSS: <status>`, where <status> is
    ///   0 or 1
    Enabled = 1,
    /// • 2: extended unsolicited indication, <status> ranges 0..3
    Extended = 2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, AtatEnum)]
pub enum PacketServiceNetworkTypeMode {
    Disabled = 0,
    Enabled = 1,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SimStatus {
    NotInserted = 0,
    Inserted = 1,
    InsertedPinUnlocked = 2,
    InsertedReady = 3,
}

impl TryFrom<u8> for SimStatus {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Ok(match value {
            0 => Self::NotInserted,
            1 => Self::Inserted,
            2 => Self::InsertedPinUnlocked,
            3 => Self::InsertedReady,
            other => return Err(other),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PacketServiceNetworkType {
    Gprs = 0,
    Egprs = 1,
    Wcdma = 2,
    Hsdpa = 3,
    Lte = 4,
    /// Unknown or not registered
    Unknown = 5,
}

impl TryFrom<u8> for PacketServiceNetworkType {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Ok(match value {
            0 => Self::Gprs,
            1 => Self::Egprs,
            2 => Self::Wcdma,
            3 => Self::Hsdpa,
            4 => Self::Lte,
            5 => Self::Unknown,
            other => return Err(other),
        })
    }
}
