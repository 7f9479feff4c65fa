//! Argument and parameter types used by Mobile equipment control and status
//! Commands
use atat::atat_derive::AtatEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, AtatEnum)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Functionality {
    /// Minimum functionality, transmit and receive RF circuits disabled
    Minimum = 0,
    /// Full functionality
    Full = 1,
    /// Disable both transmit and receive RF circuits (airplane mode)
    AirplaneMode = 4,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, AtatEnum)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ResetMode {
    /// Do not reset the MT before setting it to the selected <fun>
    DontReset = 0,
    /// Reset the MT before setting it to the selected <fun>
    Reset = 1,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, AtatEnum)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TerminationErrorMode {
    /// +CME ERROR: <err> result code disabled and ERROR used
    Disabled = 0,
    /// +CME ERROR: <err> result code enabled and numeric <err> values used
    Enabled = 1,
    /// +CME ERROR: <err> result code enabled and verbose <err> values used
    Verbose = 2,
}

/// Processing of +CIEV indicator URCs
#[derive(Debug, Clone, Copy, PartialEq, Eq, AtatEnum)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EventReportingMode {
    /// Buffer URCs in the TA, discarding the oldest when full
    Buffer = 0,
    /// Discard URCs while the TA-TE link is reserved, otherwise forward them
    DiscardWhenReserved = 1,
    /// Buffer URCs while the TA-TE link is reserved (e.g. on-line data mode)
    /// and flush them to the TE afterwards, otherwise forward them directly
    BufferWhenReserved = 2,
}
