use atat::asynch::AtatClient;
use embassy_time::Duration;
use embedded_hal_async::delay::DelayNs;

use super::CellularDevice;
use crate::asynch::AtHandle;
use crate::command::control::types::Echo;
use crate::command::control::SetEcho;
use crate::command::general::GetModelId;
use crate::command::mobile_control::types::{Functionality, TerminationErrorMode};
use crate::command::mobile_control::{
    ModuleSwitchOff, SetModuleFunctionality, SetReportMobileTerminationError,
};
use crate::context::AtContext;
use crate::error::Error;
use crate::modules::{Generic, Module, ModuleParams};
use crate::properties::CellularProperties;

/// Number of times the base configuration is attempted before giving up
const INIT_ATTEMPTS: usize = 3;
const INIT_RETRY_DELAY_MS: u32 = 100;

/// Generic AT cellular device.
///
/// Drives any module through standard 3GPP commands. Module drivers wrap it,
/// registering their own [`Module`] parameters and overriding the operations
/// they handle differently.
pub struct AtDevice<'d, AT: AtatClient, D: DelayNs> {
    pub(crate) at: AtHandle<'d, AT>,
    pub(crate) delay: D,
    module: Module,
}

impl<'d, AT: AtatClient, D: DelayNs> AtDevice<'d, AT, D> {
    pub fn new(at: AtHandle<'d, AT>, delay: D) -> Self {
        Self {
            at,
            delay,
            module: Module::Generic(Generic),
        }
    }

    /// Replace the module parameters, and with them the capability table.
    pub fn set_module(&mut self, module: Module) {
        self.module = module;
    }

    pub fn module(&self) -> Module {
        self.module
    }

    /// Identify the attached module with `AT+CGMM`.
    pub async fn detect_module(&self) -> Result<Module, Error> {
        let model_id = self.at.send(&GetModelId).await?;
        Ok(Module::from_model_id(model_id.model.as_slice()))
    }

    /// Switch echo off, enable numeric `+CME ERROR` results and set full
    /// functionality.
    ///
    /// The channel stays locked for all attempts; the verdict is the one of
    /// the last attempt.
    pub async fn base_init(&mut self) -> Result<(), Error> {
        let mut at = self.at.lock().await;

        for attempt in 1..=INIT_ATTEMPTS {
            at.clear_error();

            at.send_discard(&SetEcho {
                enabled: Echo::Off,
            })
            .await;

            if at.last_error().is_none() {
                at.send_discard(&SetReportMobileTerminationError {
                    n: TerminationErrorMode::Enabled,
                })
                .await;
                at.send_discard(&SetModuleFunctionality {
                    fun: Functionality::Full,
                    rst: None,
                })
                .await;

                if at.last_error().is_none() {
                    break;
                }
            }

            if attempt < INIT_ATTEMPTS {
                debug!("Module not responding, attempt {}/{}", attempt, INIT_ATTEMPTS);
                self.delay.delay_ms(INIT_RETRY_DELAY_MS).await;
            }
        }

        at.unlock()
    }

    /// Orderly shutdown with `AT+CPWROFF`
    pub async fn switch_off(&mut self) -> Result<(), Error> {
        self.at.send(&ModuleSwitchOff).await?;
        Ok(())
    }

    pub fn context(&self, apn: Option<&str>, cp_req: bool, nonip_req: bool) -> AtContext<'d, AT> {
        AtContext::new(self.at, self.module.properties(), apn, cp_req, nonip_req)
    }
}

impl<'d, AT: AtatClient, D: DelayNs> CellularDevice for AtDevice<'d, AT, D> {
    type Context = AtContext<'d, AT>;

    async fn init(&mut self) -> Result<(), Error> {
        self.base_init().await
    }

    async fn hard_power_on(&mut self) -> Result<(), Error> {
        Ok(())
    }

    async fn hard_power_off(&mut self) -> Result<(), Error> {
        Ok(())
    }

    async fn soft_power_on(&mut self) -> Result<(), Error> {
        Ok(())
    }

    async fn soft_power_off(&mut self) -> Result<(), Error> {
        self.switch_off().await
    }

    fn create_context(&self, apn: Option<&str>, cp_req: bool, nonip_req: bool) -> Self::Context {
        self.context(apn, cp_req, nonip_req)
    }

    fn send_delay(&self) -> Duration {
        self.module.command_delay_default()
    }

    fn properties(&self) -> &'static CellularProperties {
        self.module.properties()
    }
}
