//! Capability tables describing how a module deviates from the generic AT
//! device defaults.

/// Registration URC verbosity for `+CREG`, `+CGREG` and `+CEREG`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RegistrationMode {
    Disable = 0,
    Enable = 1,
    /// Report location area code and cell id
    Lac = 2,
}

/// Identifier of a single entry in [`CellularProperties`], for callers that
/// look properties up by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Property {
    Creg,
    Cgreg,
    Cereg,
    CgsnWithType,
    Cgdata,
    Cgauth,
    Cnmi,
    Csmp,
    Cmgf,
    Csdh,
    Ipv4Stack,
    Ipv6Stack,
    Ipv4v6Stack,
    NonIpPdpType,
    Cgerep,
}

impl Property {
    pub const ALL: [Property; 15] = [
        Self::Creg,
        Self::Cgreg,
        Self::Cereg,
        Self::CgsnWithType,
        Self::Cgdata,
        Self::Cgauth,
        Self::Cnmi,
        Self::Csmp,
        Self::Cmgf,
        Self::Csdh,
        Self::Ipv4Stack,
        Self::Ipv6Stack,
        Self::Ipv4v6Stack,
        Self::NonIpPdpType,
        Self::Cgerep,
    ];
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CellularProperties {
    pub creg: RegistrationMode,
    pub cgreg: RegistrationMode,
    pub cereg: RegistrationMode,
    /// `AT+CGSN=<snt>` accepts the serial number type argument
    pub cgsn_with_type: bool,
    /// `AT+CGDATA` can be used to enter data mode
    pub cgdata: bool,
    /// `AT+CGAUTH` sets PDP context credentials
    pub cgauth: bool,
    pub cnmi: bool,
    pub csmp: bool,
    pub cmgf: bool,
    pub csdh: bool,
    pub ipv4_stack: bool,
    pub ipv6_stack: bool,
    pub ipv4v6_stack: bool,
    pub non_ip_pdp_type: bool,
    /// `AT+CGEREP` packet domain event reporting
    pub cgerep: bool,
}

impl CellularProperties {
    /// Numeric value of a property, as the generic layer formats it into
    /// commands.
    pub const fn get(&self, property: Property) -> isize {
        match property {
            Property::Creg => self.creg as isize,
            Property::Cgreg => self.cgreg as isize,
            Property::Cereg => self.cereg as isize,
            Property::CgsnWithType => self.cgsn_with_type as isize,
            Property::Cgdata => self.cgdata as isize,
            Property::Cgauth => self.cgauth as isize,
            Property::Cnmi => self.cnmi as isize,
            Property::Csmp => self.csmp as isize,
            Property::Cmgf => self.cmgf as isize,
            Property::Csdh => self.csdh as isize,
            Property::Ipv4Stack => self.ipv4_stack as isize,
            Property::Ipv6Stack => self.ipv6_stack as isize,
            Property::Ipv4v6Stack => self.ipv4v6_stack as isize,
            Property::NonIpPdpType => self.non_ip_pdp_type as isize,
            Property::Cgerep => self.cgerep as isize,
        }
    }

    pub const fn supports(&self, property: Property) -> bool {
        self.get(property) != 0
    }
}

/// Defaults used for modules without a dedicated table.
pub static GENERIC_PROPERTIES: CellularProperties = CellularProperties {
    creg: RegistrationMode::Enable,
    cgreg: RegistrationMode::Enable,
    cereg: RegistrationMode::Enable,
    cgsn_with_type: false,
    cgdata: true,
    cgauth: false,
    cnmi: true,
    csmp: true,
    cmgf: true,
    csdh: true,
    ipv4_stack: true,
    ipv6_stack: false,
    ipv4v6_stack: false,
    non_ip_pdp_type: false,
    cgerep: false,
};
