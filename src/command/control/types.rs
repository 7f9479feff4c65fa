use atat::atat_derive::AtatEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, AtatEnum)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Echo {
    Off = 0,
    On = 1,
}

/// DTE flow control selected by `&K`
#[derive(Debug, Clone, Copy, PartialEq, Eq, AtatEnum)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FlowControl {
    /// • 0: no flow control
    Disabled = 0,
    /// • 3: hardware bi-directional flow control (both RTS/CTS active)
    RtsCts = 3,
}
