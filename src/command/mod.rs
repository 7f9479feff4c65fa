//! AT Commands for the Telit ME910 cellular module family\
//! Following the Telit ME910 AT commands reference guide, together with the
//! 3GPP TS 27.007 commands shared by all modules.

pub mod control;
pub mod general;
pub mod mobile_control;
pub mod network_service;
pub mod psn;
pub mod telit;

use atat::atat_derive::{AtatCmd, AtatResp};
use heapless::String;

use network_service::urc::NetworkRegistration;
use psn::urc::{EPSNetworkRegistration, GPRSNetworkRegistration, PacketSwitchedEvent};
use telit::urc::{PacketServiceNetworkTypeChanged, SimStatusChanged};

#[derive(Clone, AtatResp)]
pub struct NoResponse;

#[derive(Clone, AtatCmd)]
#[at_cmd("", NoResponse)]
pub struct AT;

/// Unsolicited result codes enabled by the ME910 initialization sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Urc {
    /// +CREG
    NetworkRegistration(NetworkRegistration),
    /// +CGREG
    GPRSNetworkRegistration(GPRSNetworkRegistration),
    /// +CEREG
    EPSNetworkRegistration(EPSNetworkRegistration),
    /// +CGEV
    PacketSwitchedEvent(PacketSwitchedEvent),
    /// #QSS
    SimStatus(SimStatusChanged),
    /// #PSNT
    PacketServiceNetworkType(PacketServiceNetworkTypeChanged),
}

// The `#` prefixed Telit URCs are not understood by the derived parser, so
// the whole set is decoded by hand.
impl atat::AtatUrc for Urc {
    type Response = Self;

    fn parse(resp: &[u8]) -> Option<Self::Response> {
        let index = resp.iter().position(|&b| b == b':')?;
        let args = trim(&resp[index + 1..]);

        Some(match &resp[..index] {
            b"+CREG" => Self::NetworkRegistration(NetworkRegistration {
                stat: first_arg(args)?.try_into().ok()?,
            }),
            b"+CGREG" => Self::GPRSNetworkRegistration(GPRSNetworkRegistration {
                stat: first_arg(args)?.try_into().ok()?,
            }),
            b"+CEREG" => Self::EPSNetworkRegistration(EPSNetworkRegistration {
                stat: first_arg(args)?.try_into().ok()?,
            }),
            b"+CGEV" => Self::PacketSwitchedEvent(PacketSwitchedEvent {
                event: truncated(core::str::from_utf8(args).ok()?),
            }),
            b"#QSS" => Self::SimStatus(SimStatusChanged {
                status: first_arg(args)?.try_into().ok()?,
            }),
            b"#PSNT" => Self::PacketServiceNetworkType(PacketServiceNetworkTypeChanged {
                nt: first_arg(args)?.try_into().ok()?,
            }),
            _ => return None,
        })
    }
}

fn trim(mut bytes: &[u8]) -> &[u8] {
    while let [first, rest @ ..] = bytes {
        if first.is_ascii_whitespace() {
            bytes = rest;
        } else {
            break;
        }
    }
    while let [rest @ .., last] = bytes {
        if last.is_ascii_whitespace() {
            bytes = rest;
        } else {
            break;
        }
    }
    bytes
}

/// Copy as much of `text` as fits, cutting at a character boundary.
fn truncated<const N: usize>(text: &str) -> String<N> {
    let mut end = text.len().min(N);
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    if end < text.len() {
        warn!("URC text truncated to {} bytes", N);
    }

    let mut s = String::new();
    s.push_str(&text[..end]).ok();
    s
}

fn first_arg(args: &[u8]) -> Option<u8> {
    let end = args.iter().position(|&b| b == b',').unwrap_or(args.len());
    core::str::from_utf8(trim(&args[..end])).ok()?.parse().ok()
}
