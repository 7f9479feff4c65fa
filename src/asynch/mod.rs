use atat::{asynch::AtatClient, AtatCmd};
use embassy_sync::{
    blocking_mutex::raw::NoopRawMutex,
    mutex::{Mutex, MutexGuard},
};

use crate::error::Error;

/// Owner of the AT client shared by a device and the contexts it creates.
pub struct State<AT: AtatClient> {
    at_handle: Mutex<NoopRawMutex, AT>,
}

impl<AT: AtatClient> State<AT> {
    pub fn new(at_handle: AT) -> Self {
        Self {
            at_handle: Mutex::new(at_handle),
        }
    }

    pub fn handle(&self) -> AtHandle<'_, AT> {
        AtHandle(&self.at_handle)
    }
}

/// Borrowed handle to the shared AT client.
pub struct AtHandle<'d, AT: AtatClient>(&'d Mutex<NoopRawMutex, AT>);

impl<'d, AT: AtatClient> Clone for AtHandle<'d, AT> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'d, AT: AtatClient> Copy for AtHandle<'d, AT> {}

impl<'d, AT: AtatClient> AtHandle<'d, AT> {
    /// Send a single command, holding the channel lock only for that command.
    pub async fn send<Cmd: AtatCmd>(&self, cmd: &Cmd) -> Result<Cmd::Response, Error> {
        Ok(self.0.lock().await.send(cmd).await?)
    }

    /// Take exclusive ownership of the channel for a burst of commands.
    ///
    /// No other user of the channel can interleave commands until the
    /// returned [`AtBatch`] is unlocked or dropped.
    pub async fn lock(&self) -> AtBatch<'d, AT> {
        AtBatch {
            at: self.0.lock().await,
            error: None,
        }
    }
}

/// A locked command burst.
///
/// Every command sent through the batch is forwarded to the client
/// immediately. The first error is latched and reported by [`AtBatch::unlock`],
/// so a burst of configuration commands yields one aggregated verdict.
pub struct AtBatch<'d, AT: AtatClient> {
    at: MutexGuard<'d, NoopRawMutex, AT>,
    error: Option<atat::Error>,
}

impl<'d, AT: AtatClient> AtBatch<'d, AT> {
    pub async fn send<Cmd: AtatCmd>(&mut self, cmd: &Cmd) -> Result<Cmd::Response, Error> {
        match self.at.send(cmd).await {
            Ok(resp) => Ok(resp),
            Err(e) => {
                warn!("AT command failed: {:?}", e);
                if self.error.is_none() {
                    self.error = Some(e.clone());
                }
                Err(Error::Atat(e))
            }
        }
    }

    /// Send a command whose response is of no interest. A failure is only
    /// visible through [`AtBatch::last_error`] and [`AtBatch::unlock`].
    pub async fn send_discard<Cmd: AtatCmd>(&mut self, cmd: &Cmd) {
        self.send(cmd).await.ok();
    }

    pub fn last_error(&self) -> Option<&atat::Error> {
        self.error.as_ref()
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Release the channel and return the aggregated status of the burst.
    pub fn unlock(self) -> Result<(), Error> {
        match self.error {
            Some(e) => Err(Error::Atat(e)),
            None => Ok(()),
        }
    }
}
