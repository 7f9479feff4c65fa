//! ### General Commands
pub mod responses;

use atat::atat_derive::AtatCmd;
use responses::ModelId;

/// Model identification +CGMM
///
/// Text string identifying the model of the module, e.g. `ME910C1-WW`.
#[derive(Clone, AtatCmd)]
#[at_cmd("+CGMM", ModelId)]
pub struct GetModelId;
