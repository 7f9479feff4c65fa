#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// Error reported by the AT channel. Inside a locked command burst this
    /// is the first error seen, not attributable to a single command.
    Atat(atat::Error),

    /// The requested feature is not available according to the module
    /// capability table
    Unsupported,

    /// The module rejected the PDP context credentials
    AuthFailure,

    /// An argument does not fit the fixed size buffer it is stored in
    Overflow,
}

#[cfg(feature = "defmt")]
impl defmt::Format for Error {
    fn format(&self, f: defmt::Formatter<'_>) {
        match self {
            Self::Atat(e) => defmt::write!(f, "Atat({:?})", e),
            Self::Unsupported => defmt::write!(f, "Unsupported"),
            Self::AuthFailure => defmt::write!(f, "AuthFailure"),
            Self::Overflow => defmt::write!(f, "Overflow"),
        }
    }
}

impl From<atat::Error> for Error {
    fn from(e: atat::Error) -> Self {
        Self::Atat(e)
    }
}
