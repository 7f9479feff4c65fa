use std::{cell::RefCell, rc::Rc, string::String, vec, vec::Vec};

use atat::{asynch::AtatClient, AtatCmd};
use embassy_time::Duration;
use embedded_hal::digital::{ErrorKind, ErrorType, OutputPin};
use embedded_hal_async::delay::DelayNs;

/// Render a command the way it goes out on the wire, without the line
/// termination.
pub fn encode<Cmd: AtatCmd>(cmd: &Cmd) -> String {
    let mut buf = vec![0u8; Cmd::MAX_LEN];
    let len = cmd.write(&mut buf);
    String::from_utf8_lossy(&buf[..len])
        .trim_end_matches(&['\r', '\n'][..])
        .into()
}

#[derive(Debug, Clone, Default)]
pub struct CommandLog(Rc<RefCell<Vec<String>>>);

impl CommandLog {
    pub fn commands(&self) -> Vec<String> {
        self.0.borrow().clone()
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }
}

/// AT client that records every command it is asked to send, and answers
/// `OK` unless told to fail a specific command or given a response body for
/// it.
pub struct SpyClient {
    log: CommandLog,
    failures: Vec<(String, atat::Error)>,
    responses: Vec<(String, Vec<u8>)>,
}

impl SpyClient {
    pub fn new() -> Self {
        Self {
            log: CommandLog::default(),
            failures: Vec::new(),
            responses: Vec::new(),
        }
    }

    pub fn fail_on(mut self, cmd: &str, err: atat::Error) -> Self {
        self.failures.push((cmd.into(), err));
        self
    }

    pub fn respond_to(mut self, cmd: &str, body: &[u8]) -> Self {
        self.responses.push((cmd.into(), body.to_vec()));
        self
    }

    pub fn log(&self) -> CommandLog {
        self.log.clone()
    }
}

impl AtatClient for SpyClient {
    async fn send<Cmd: AtatCmd>(&mut self, cmd: &Cmd) -> Result<Cmd::Response, atat::Error> {
        let sent = encode(cmd);
        self.log.0.borrow_mut().push(sent.clone());

        if let Some((_, err)) = self.failures.iter().find(|(c, _)| *c == sent) {
            return Err(err.clone());
        }

        match self.responses.iter().find(|(c, _)| *c == sent) {
            Some((_, body)) => cmd.parse(Ok(body.as_slice())),
            None => cmd.parse(Ok(&[])),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Electrical level written to the power pin, `true` being high
    Pin(bool),
    Delay(Duration),
}

/// Ordered record of pin writes and delays, shared between a
/// [`RecordingPin`] and a [`RecordingDelay`].
#[derive(Debug, Clone, Default)]
pub struct Timeline(Rc<RefCell<Vec<Event>>>);

impl Timeline {
    pub fn events(&self) -> Vec<Event> {
        self.0.borrow().clone()
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }

    pub fn pin_level(&self) -> Option<bool> {
        self.0.borrow().iter().rev().find_map(|e| match e {
            Event::Pin(level) => Some(*level),
            Event::Delay(_) => None,
        })
    }

    pub fn total_delay(&self) -> Duration {
        self.0
            .borrow()
            .iter()
            .filter_map(|e| match e {
                Event::Delay(d) => Some(*d),
                Event::Pin(_) => None,
            })
            .fold(Duration::from_ticks(0), |acc, d| acc + d)
    }

    pub fn pin(&self) -> RecordingPin {
        RecordingPin(self.clone())
    }

    pub fn delay(&self) -> RecordingDelay {
        RecordingDelay(self.clone())
    }

    fn push(&self, event: Event) {
        self.0.borrow_mut().push(event);
    }
}

pub struct RecordingPin(Timeline);

impl ErrorType for RecordingPin {
    type Error = core::convert::Infallible;
}

impl OutputPin for RecordingPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.0.push(Event::Pin(false));
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.0.push(Event::Pin(true));
        Ok(())
    }
}

/// Delay that returns immediately, recording how long it was asked to wait.
pub struct RecordingDelay(Timeline);

impl DelayNs for RecordingDelay {
    async fn delay_ns(&mut self, ns: u32) {
        self.0.push(Event::Delay(Duration::from_nanos(ns as u64)));
    }

    async fn delay_us(&mut self, us: u32) {
        self.0.push(Event::Delay(Duration::from_micros(us as u64)));
    }

    async fn delay_ms(&mut self, ms: u32) {
        self.0.push(Event::Delay(Duration::from_millis(ms as u64)));
    }
}

/// Pin whose every write fails.
pub struct BrokenPin;

impl ErrorType for BrokenPin {
    type Error = ErrorKind;
}

impl OutputPin for BrokenPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        Err(ErrorKind::Other)
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Err(ErrorKind::Other)
    }
}
