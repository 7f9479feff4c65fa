use atat::asynch::AtatClient;
use embassy_time::Duration;
use embedded_hal::digital::{OutputPin, PinState};
use embedded_hal_async::delay::DelayNs;

use super::{AtDevice, CellularDevice, PowerState};
use crate::asynch::AtHandle;
use crate::command::control::types::FlowControl;
use crate::command::control::{SetDteBehaviourNoFlowControl, SetDteBehaviourRtsCts, StoreProfile};
use crate::command::mobile_control::types::{EventReportingMode, TerminationErrorMode};
use crate::command::mobile_control::{
    SetMobileTerminationEventReporting, SetReportMobileTerminationError,
};
use crate::command::network_service::types::NetworkRegistrationUrcConfig;
use crate::command::network_service::SetNetworkRegistrationStatus;
use crate::command::psn::types::{
    EPSNetworkRegistrationUrcConfig, GPRSNetworkRegistrationUrcConfig, PSEventReportingMode,
};
use crate::command::psn::{
    SetEPSNetworkRegistrationStatus, SetGPRSNetworkRegistrationStatus,
    SetPacketSwitchedEventReporting,
};
use crate::command::telit::types::{PacketServiceNetworkTypeMode, QuerySimStatusMode};
use crate::command::telit::{SetPacketServiceNetworkType, SetQuerySimStatus};
use crate::config::Config;
use crate::context::Me910Context;
use crate::error::Error;
use crate::modules::{Me910, Module, ModuleParams};
use crate::properties::CellularProperties;

/// Telit ME910 driver.
///
/// Owns the power key line of the module. All writes to it are expressed as
/// active or inactive, relative to the polarity given in [`Config`].
pub struct TelitMe910<'d, AT: AtatClient, PWR: OutputPin, D: DelayNs> {
    base: AtDevice<'d, AT, D>,
    pwr_key: PWR,
    active_high: bool,
    flow_control: FlowControl,
    power_state: PowerState,
}

impl<'d, AT, PWR, D> TelitMe910<'d, AT, PWR, D>
where
    AT: AtatClient,
    PWR: OutputPin,
    D: DelayNs,
{
    pub fn new(at: AtHandle<'d, AT>, config: Config<PWR>, delay: D) -> Self {
        let flow_control = config.flow_control();

        let mut base = AtDevice::new(at, delay);
        base.set_module(Module::Me910(Me910));

        let mut device = Self {
            base,
            pwr_key: config.pwr_pin,
            active_high: config.active_high,
            flow_control,
            power_state: PowerState::Off,
        };
        device.set_pwr_key(false);
        device
    }

    pub fn power_state(&self) -> PowerState {
        self.power_state
    }

    pub fn active_high(&self) -> bool {
        self.active_high
    }

    fn set_pwr_key(&mut self, active: bool) {
        let level = PinState::from(active == self.active_high);
        if self.pwr_key.set_state(level).is_err() {
            error!("Failed to drive the power key {}", active);
        }
    }

    async fn wait(&mut self, duration: Duration) {
        self.base.delay.delay_ms(duration.as_millis() as u32).await;
    }
}

impl<'d, AT, PWR, D> CellularDevice for TelitMe910<'d, AT, PWR, D>
where
    AT: AtatClient,
    PWR: OutputPin,
    D: DelayNs,
{
    type Context = Me910Context<'d, AT>;

    /// Run the generic initialization, then configure flow control, URC
    /// reporting and the power-up profile.
    ///
    /// The configuration commands are sent in one locked burst. A failure of
    /// any of them is only reported as the first error of the burst, after
    /// all of them were sent.
    async fn init(&mut self) -> Result<(), Error> {
        self.base.base_init().await?;

        debug!("Configuring ME910");
        let mut at = self.base.at.lock().await;

        match self.flow_control {
            FlowControl::RtsCts => at.send_discard(&SetDteBehaviourRtsCts).await,
            FlowControl::Disabled => at.send_discard(&SetDteBehaviourNoFlowControl).await,
        }

        // #QSS: <status>, 0 SIM not inserted, 1 SIM inserted
        at.send_discard(&SetQuerySimStatus {
            mode: QuerySimStatusMode::Enabled,
        })
        .await;

        // #PSNT: <nt>, 0 GPRS, 4 LTE, 5 unknown or not registered
        at.send_discard(&SetPacketServiceNetworkType {
            mode: PacketServiceNetworkTypeMode::Enabled,
        })
        .await;

        at.send_discard(&SetPacketSwitchedEventReporting {
            mode: PSEventReportingMode::BufferUrcs,
        })
        .await;

        at.send_discard(&SetMobileTerminationEventReporting {
            mode: EventReportingMode::BufferWhenReserved,
        })
        .await;

        // Short format registration URCs in all three domains
        at.send_discard(&SetNetworkRegistrationStatus {
            n: NetworkRegistrationUrcConfig::UrcEnabled,
        })
        .await;
        at.send_discard(&SetGPRSNetworkRegistrationStatus {
            n: GPRSNetworkRegistrationUrcConfig::UrcEnabled,
        })
        .await;
        at.send_discard(&SetEPSNetworkRegistrationStatus {
            n: EPSNetworkRegistrationUrcConfig::UrcEnabled,
        })
        .await;

        at.send_discard(&SetReportMobileTerminationError {
            n: TerminationErrorMode::Verbose,
        })
        .await;

        at.send_discard(&StoreProfile).await;

        match at.unlock() {
            Ok(()) => {
                info!("ME910 initialized");
                Ok(())
            }
            Err(e) => {
                error!("ME910 configuration failed: {:?}", e);
                Err(e)
            }
        }
    }

    async fn hard_power_on(&mut self) -> Result<(), Error> {
        self.soft_power_on().await
    }

    async fn hard_power_off(&mut self) -> Result<(), Error> {
        let module = self.base.module();

        self.power_state = PowerState::PoweringOff;
        self.set_pwr_key(false);
        self.wait(module.power_off_hold_time()).await;
        self.power_state = PowerState::Off;

        debug!("Powered down");
        Ok(())
    }

    async fn soft_power_on(&mut self) -> Result<(), Error> {
        let module = self.base.module();

        self.power_state = PowerState::PoweringOn;
        self.set_pwr_key(true);
        self.wait(module.power_on_pull_time()).await;
        self.set_pwr_key(false);
        self.wait(module.power_on_release_time()).await;
        self.set_pwr_key(true);
        self.wait(module.boot_wait()).await;
        self.power_state = PowerState::On;

        debug!("Powered up");
        Ok(())
    }

    async fn soft_power_off(&mut self) -> Result<(), Error> {
        let previous = self.power_state;
        self.power_state = PowerState::PoweringOff;

        match self.base.switch_off().await {
            Ok(()) => {
                self.power_state = PowerState::Off;
                Ok(())
            }
            Err(e) => {
                warn!("Soft power off failed: {:?}", e);
                self.power_state = previous;
                Err(e)
            }
        }
    }

    fn create_context(&self, apn: Option<&str>, cp_req: bool, nonip_req: bool) -> Self::Context {
        Me910Context::new(self.base.context(apn, cp_req, nonip_req))
    }

    fn send_delay(&self) -> Duration {
        self.base.send_delay()
    }

    fn properties(&self) -> &'static CellularProperties {
        self.base.properties()
    }
}
