//! PDP contexts created by a [`CellularDevice`](crate::device::CellularDevice).

use atat::asynch::AtatClient;
use heapless::String;

use crate::asynch::{AtBatch, AtHandle};
use crate::command::psn::types::{AuthenticationType, PDPContextStatus, PdpType};
use crate::command::psn::{
    SetAuthenticationParameters, SetPDPContextDefinition, SetPDPContextState,
};
use crate::error::Error;
use crate::properties::{CellularProperties, Property};

/// Context identifier used for the single context a device hands out
pub const DEFAULT_CID: u8 = 1;

pub trait CellularContext {
    /// Store credentials used by the next [`CellularContext::connect`].
    fn set_credentials(
        &mut self,
        username: &str,
        password: &str,
        auth: AuthenticationType,
    ) -> Result<(), Error>;

    /// PDP type requested from the network, given the request flags and the
    /// module capabilities.
    fn pdp_type(&self) -> Result<PdpType, Error>;

    fn is_control_plane(&self) -> bool;

    fn is_connected(&self) -> bool;

    async fn authenticate(&mut self) -> Result<(), Error>;

    /// Define, authenticate and activate the context in one locked burst.
    async fn connect(&mut self) -> Result<(), Error>;

    async fn disconnect(&mut self) -> Result<(), Error>;
}

/// Generic PDP context driven through the standard 3GPP commands.
pub struct AtContext<'d, AT: AtatClient> {
    at: AtHandle<'d, AT>,
    properties: &'static CellularProperties,
    cid: u8,
    apn: Option<String<100>>,
    username: Option<String<64>>,
    password: Option<String<64>>,
    auth: AuthenticationType,
    cp_req: bool,
    nonip_req: bool,
    connected: bool,
}

impl<'d, AT: AtatClient> AtContext<'d, AT> {
    pub fn new(
        at: AtHandle<'d, AT>,
        properties: &'static CellularProperties,
        apn: Option<&str>,
        cp_req: bool,
        nonip_req: bool,
    ) -> Self {
        let apn = apn.and_then(|apn| match String::try_from(apn) {
            Ok(apn) => Some(apn),
            Err(_) => {
                warn!("APN too long, using the network default");
                None
            }
        });

        Self {
            at,
            properties,
            cid: DEFAULT_CID,
            apn,
            username: None,
            password: None,
            auth: AuthenticationType::None,
            cp_req,
            nonip_req,
            connected: false,
        }
    }

    pub fn cid(&self) -> u8 {
        self.cid
    }

    pub fn apn(&self) -> Option<&str> {
        self.apn.as_deref()
    }

    pub fn properties(&self) -> &'static CellularProperties {
        self.properties
    }

    async fn send_credentials(&self, at: &mut AtBatch<'d, AT>) -> Result<(), Error> {
        let (Some(username), Some(password)) = (&self.username, &self.password) else {
            return Ok(());
        };

        if !self.properties.supports(Property::Cgauth) {
            return Err(Error::Unsupported);
        }

        at.send(&SetAuthenticationParameters {
            cid: self.cid,
            auth_type: self.auth,
            username: username.as_str(),
            password: password.as_str(),
        })
        .await?;

        Ok(())
    }

    /// Authenticate and activate, mapping an authentication failure with
    /// `auth_error`.
    pub(crate) async fn connect_with(
        &mut self,
        auth_error: fn(Error) -> Error,
    ) -> Result<(), Error> {
        let pdp_type = self.pdp_type()?;
        debug!("Connecting context {} as {}", self.cid, pdp_type.as_str());

        let mut at = self.at.lock().await;

        at.send_discard(&SetPDPContextDefinition {
            cid: self.cid,
            pdp_type: pdp_type.as_str(),
            apn: self.apn.as_deref().unwrap_or(""),
        })
        .await;

        if let Err(e) = self.send_credentials(&mut at).await {
            return Err(match e {
                Error::Unsupported => e,
                e => auth_error(e),
            });
        }

        at.send_discard(&SetPDPContextState {
            status: PDPContextStatus::Activated,
            cid: Some(self.cid),
        })
        .await;

        at.unlock()?;
        self.connected = true;
        Ok(())
    }

    pub(crate) async fn authenticate_with(
        &mut self,
        auth_error: fn(Error) -> Error,
    ) -> Result<(), Error> {
        let mut at = self.at.lock().await;
        self.send_credentials(&mut at).await.map_err(|e| match e {
            Error::Unsupported => e,
            e => auth_error(e),
        })
    }
}

impl<'d, AT: AtatClient> CellularContext for AtContext<'d, AT> {
    fn set_credentials(
        &mut self,
        username: &str,
        password: &str,
        auth: AuthenticationType,
    ) -> Result<(), Error> {
        self.username = Some(String::try_from(username).map_err(|_| Error::Overflow)?);
        self.password = Some(String::try_from(password).map_err(|_| Error::Overflow)?);
        self.auth = auth;
        Ok(())
    }

    fn pdp_type(&self) -> Result<PdpType, Error> {
        let props = self.properties;

        if self.nonip_req {
            return if props.non_ip_pdp_type {
                Ok(PdpType::NonIp)
            } else {
                Err(Error::Unsupported)
            };
        }

        if props.ipv4v6_stack {
            Ok(PdpType::Ipv4v6)
        } else if props.ipv4_stack {
            Ok(PdpType::Ipv4)
        } else if props.ipv6_stack {
            Ok(PdpType::Ipv6)
        } else {
            Err(Error::Unsupported)
        }
    }

    fn is_control_plane(&self) -> bool {
        self.cp_req
    }

    fn is_connected(&self) -> bool {
        self.connected
    }

    async fn authenticate(&mut self) -> Result<(), Error> {
        self.authenticate_with(|e| e).await
    }

    async fn connect(&mut self) -> Result<(), Error> {
        self.connect_with(|e| e).await
    }

    async fn disconnect(&mut self) -> Result<(), Error> {
        self.at
            .send(&SetPDPContextState {
                status: PDPContextStatus::Deactivated,
                cid: Some(self.cid),
            })
            .await?;
        self.connected = false;
        Ok(())
    }
}

/// ME910 context. Rejected credentials surface as [`Error::AuthFailure`].
pub struct Me910Context<'d, AT: AtatClient>(AtContext<'d, AT>);

impl<'d, AT: AtatClient> Me910Context<'d, AT> {
    pub(crate) fn new(inner: AtContext<'d, AT>) -> Self {
        Self(inner)
    }

    pub fn cid(&self) -> u8 {
        self.0.cid()
    }

    pub fn apn(&self) -> Option<&str> {
        self.0.apn()
    }

    pub fn properties(&self) -> &'static CellularProperties {
        self.0.properties()
    }
}

impl<'d, AT: AtatClient> CellularContext for Me910Context<'d, AT> {
    fn set_credentials(
        &mut self,
        username: &str,
        password: &str,
        auth: AuthenticationType,
    ) -> Result<(), Error> {
        self.0.set_credentials(username, password, auth)
    }

    fn pdp_type(&self) -> Result<PdpType, Error> {
        self.0.pdp_type()
    }

    fn is_control_plane(&self) -> bool {
        self.0.is_control_plane()
    }

    fn is_connected(&self) -> bool {
        self.0.is_connected()
    }

    async fn authenticate(&mut self) -> Result<(), Error> {
        self.0.authenticate_with(|_| Error::AuthFailure).await
    }

    async fn connect(&mut self) -> Result<(), Error> {
        self.0.connect_with(|_| Error::AuthFailure).await
    }

    async fn disconnect(&mut self) -> Result<(), Error> {
        self.0.disconnect().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asynch::State;
    use crate::modules::ME910_PROPERTIES;
    use crate::properties::GENERIC_PROPERTIES;
    use crate::test_helpers::SpyClient;
    use embassy_futures::block_on;

    fn leak(props: CellularProperties) -> &'static CellularProperties {
        Box::leak(Box::new(props))
    }

    #[test]
    fn pdp_type_selection() {
        let state = State::new(SpyClient::new());

        let ctx = AtContext::new(state.handle(), &ME910_PROPERTIES, None, false, false);
        assert_eq!(ctx.pdp_type(), Ok(PdpType::Ipv4v6));

        let ctx = AtContext::new(state.handle(), &GENERIC_PROPERTIES, None, false, false);
        assert_eq!(ctx.pdp_type(), Ok(PdpType::Ipv4));

        let ipv6_only = leak(CellularProperties {
            ipv4_stack: false,
            ipv4v6_stack: false,
            ..ME910_PROPERTIES.clone()
        });
        let ctx = AtContext::new(state.handle(), ipv6_only, None, false, false);
        assert_eq!(ctx.pdp_type(), Ok(PdpType::Ipv6));

        let no_stack = leak(CellularProperties {
            ipv6_stack: false,
            ..ipv6_only.clone()
        });
        let ctx = AtContext::new(state.handle(), no_stack, None, false, false);
        assert_eq!(ctx.pdp_type(), Err(Error::Unsupported));

        let ctx = AtContext::new(state.handle(), &ME910_PROPERTIES, None, false, true);
        assert_eq!(ctx.pdp_type(), Err(Error::Unsupported));
    }

    #[test]
    fn connect_without_credentials() {
        let client = SpyClient::new();
        let log = client.log();
        let state = State::new(client);
        let mut ctx = Me910Context::new(AtContext::new(
            state.handle(),
            &ME910_PROPERTIES,
            Some("em"),
            true,
            false,
        ));

        assert!(ctx.is_control_plane());
        assert_eq!(block_on(ctx.connect()), Ok(()));
        assert!(ctx.is_connected());
        assert_eq!(
            log.commands(),
            ["AT+CGDCONT=1,\"IPV4V6\",\"em\"", "AT+CGACT=1,1"]
        );

        assert_eq!(block_on(ctx.disconnect()), Ok(()));
        assert!(!ctx.is_connected());
        assert_eq!(log.commands().last().map(|s| s.as_str()), Some("AT+CGACT=0,1"));
    }

    #[test]
    fn connect_with_credentials() {
        let client = SpyClient::new();
        let log = client.log();
        let state = State::new(client);
        let mut ctx = Me910Context::new(AtContext::new(
            state.handle(),
            &ME910_PROPERTIES,
            Some("em"),
            false,
            false,
        ));

        ctx.set_credentials("user", "secret", AuthenticationType::Chap)
            .unwrap();
        assert_eq!(block_on(ctx.connect()), Ok(()));
        assert_eq!(
            log.commands(),
            [
                "AT+CGDCONT=1,\"IPV4V6\",\"em\"",
                "AT+CGAUTH=1,2,\"user\",\"secret\"",
                "AT+CGACT=1,1"
            ]
        );
    }

    #[test]
    fn rejected_credentials_abort_connect() {
        let client =
            SpyClient::new().fail_on("AT+CGAUTH=1,1,\"user\",\"bad\"", atat::Error::Error);
        let log = client.log();
        let state = State::new(client);

        let mut me910 = Me910Context::new(AtContext::new(
            state.handle(),
            &ME910_PROPERTIES,
            None,
            false,
            false,
        ));
        me910
            .set_credentials("user", "bad", AuthenticationType::Pap)
            .unwrap();
        assert_eq!(block_on(me910.connect()), Err(Error::AuthFailure));
        assert!(!me910.is_connected());
        assert!(!log.commands().iter().any(|c| c.starts_with("AT+CGACT")));

        let mut generic = AtContext::new(state.handle(), &ME910_PROPERTIES, None, false, false);
        generic
            .set_credentials("user", "bad", AuthenticationType::Pap)
            .unwrap();
        assert_eq!(
            block_on(generic.authenticate()),
            Err(Error::Atat(atat::Error::Error))
        );
    }

    #[test]
    fn credentials_need_cgauth() {
        let client = SpyClient::new();
        let log = client.log();
        let state = State::new(client);

        let mut ctx = AtContext::new(state.handle(), &GENERIC_PROPERTIES, None, false, false);
        ctx.set_credentials("user", "secret", AuthenticationType::Pap)
            .unwrap();
        assert_eq!(block_on(ctx.connect()), Err(Error::Unsupported));
        assert_eq!(log.commands(), ["AT+CGDCONT=1,\"IP\",\"\""]);
    }

    #[test]
    fn oversized_arguments() {
        let state = State::new(SpyClient::new());
        let long = "x".repeat(101);

        let mut ctx = AtContext::new(state.handle(), &ME910_PROPERTIES, Some(long.as_str()), false, false);
        assert_eq!(ctx.apn(), None);
        assert_eq!(
            ctx.set_credentials(&long, "secret", AuthenticationType::Pap),
            Err(Error::Overflow)
        );
    }
}
