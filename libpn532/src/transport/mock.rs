// libpn532/src/transport/mock.rs

use std::collections::VecDeque;
use std::time::Duration;

use crate::constants::{PN532_SPI_DATAREAD, PN532_SPI_DATAWRITE, PN532_SPI_READY, PN532_SPI_STATREAD};
use crate::transport::traits::{BusTransport, Clock};
use crate::{Error, Result};

/// One recorded bus operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BusEvent {
    Select(bool),
    Send(Vec<u8>),
    /// Number of bytes requested and number actually returned
    Receive { requested: usize, returned: usize },
}

/// Mock PN532 bus for unit tests. It records every operation, answers
/// status reads from a readiness script and data reads from queued
/// responses.
#[derive(Debug, Default)]
pub struct MockBus {
    pub events: Vec<BusEvent>,
    pub responses: VecDeque<Vec<u8>>,
    /// Scripted answers to status reads; empty means "ready"
    pub ready: VecDeque<bool>,
    /// When set, every status read reports busy
    pub never_ready: bool,
    /// Testing hook: number of sends that should fail with a bus error
    pub send_failures: usize,
    selected: bool,
    opcode: Option<u8>,
}

impl MockBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the bytes returned by the next data read.
    pub fn push_response(&mut self, resp: Vec<u8>) {
        self.responses.push_back(resp);
    }

    pub fn push_ack(&mut self) {
        self.push_response(crate::constants::PN532_ACK.to_vec());
    }

    /// Report busy for the next `n` status reads.
    pub fn push_not_ready(&mut self, n: usize) {
        self.ready.extend(std::iter::repeat(false).take(n));
    }

    pub fn set_never_ready(&mut self, never: bool) {
        self.never_ready = never;
    }

    pub fn set_send_failures(&mut self, n: usize) {
        self.send_failures = n;
    }

    /// Current chip-select level as the device would see it.
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Frames written with the data-write opcode, opcode stripped.
    pub fn sent_frames(&self) -> Vec<Vec<u8>> {
        self.events
            .iter()
            .filter_map(|e| match e {
                BusEvent::Send(data) if data.first() == Some(&PN532_SPI_DATAWRITE) => {
                    Some(data[1..].to_vec())
                }
                _ => None,
            })
            .collect()
    }

    pub fn last_frame(&self) -> Option<Vec<u8>> {
        self.sent_frames().pop()
    }

    /// Number of send/receive operations performed so far.
    pub fn transfer_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| !matches!(e, BusEvent::Select(_)))
            .count()
    }

    pub fn clear_events(&mut self) {
        self.events.clear();
    }
}

impl BusTransport for MockBus {
    fn select(&mut self, selected: bool) -> Result<()> {
        self.events.push(BusEvent::Select(selected));
        self.selected = selected;
        if !selected {
            self.opcode = None;
        }
        Ok(())
    }

    fn send(&mut self, data: &[u8]) -> Result<()> {
        if self.send_failures > 0 {
            self.send_failures -= 1;
            return Err(Error::Bus("mock send failure".into()));
        }
        self.events.push(BusEvent::Send(data.to_vec()));
        if self.opcode.is_none() {
            self.opcode = data.first().copied();
        }
        Ok(())
    }

    fn receive(&mut self, buf: &mut [u8]) -> Result<usize> {
        let returned = match self.opcode {
            Some(PN532_SPI_STATREAD) => {
                let ready = !self.never_ready && self.ready.pop_front().unwrap_or(true);
                match buf.first_mut() {
                    Some(b) => {
                        *b = if ready { PN532_SPI_READY } else { 0x00 };
                        1
                    }
                    None => 0,
                }
            }
            Some(PN532_SPI_DATAREAD) => match self.responses.pop_front() {
                Some(resp) => {
                    let n = resp.len().min(buf.len());
                    buf[..n].copy_from_slice(&resp[..n]);
                    n
                }
                None => 0,
            },
            _ => 0,
        };
        self.events.push(BusEvent::Receive {
            requested: buf.len(),
            returned,
        });
        Ok(returned)
    }
}

/// Clock that never blocks and records how long it was asked to sleep.
#[derive(Debug, Default, Clone)]
pub struct MockClock {
    slept: Duration,
    count: usize,
}

impl MockClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total simulated time slept.
    pub fn slept(&self) -> Duration {
        self.slept
    }

    /// Number of sleep calls.
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn reset(&mut self) {
        self.slept = Duration::ZERO;
        self.count = 0;
    }
}

impl Clock for MockClock {
    fn sleep(&mut self, duration: Duration) {
        self.slept += duration;
        self.count += 1;
    }
}
