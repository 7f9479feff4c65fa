//! Responses for General Commands
use atat::atat_derive::AtatResp;
use atat::heapless_bytes::Bytes;

/// Model identification
#[derive(Debug, Clone, PartialEq, Eq, AtatResp)]
pub struct ModelId {
    #[at_arg(position = 0)]
    pub model: Bytes<16>,
}
