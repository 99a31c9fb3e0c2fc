// libpn532/src/device/handshake.rs

use std::time::Duration;

use crate::constants::{
    PACKET_BUFFER_SIZE, PN532_ACK, PN532_SPI_DATAREAD, PN532_SPI_DATAWRITE, PN532_SPI_READY,
    PN532_SPI_STATREAD,
};
use crate::device::config::Timing;
use crate::protocol::frame::{Frame, PacketBuffer};
use crate::transport::{BusTransport, Clock};
use crate::utils::trace_frame;
use crate::{Error, Result};

/// Where the current command is in the write / ACK / response sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    CommandWritten,
    /// First (ACK) or second (response) wait
    WaitingDeviceReady(u8),
    AckChecked,
    ResponseRead,
    TimedOut,
}

/// Asserted chip select; released when dropped, whichever way the
/// operation holding it returns.
pub struct ChipSelect<'a, T: BusTransport> {
    bus: &'a mut T,
}

impl<'a, T: BusTransport> ChipSelect<'a, T> {
    pub fn acquire(bus: &'a mut T) -> Result<Self> {
        bus.select(true)?;
        Ok(Self { bus })
    }

    pub fn send(&mut self, data: &[u8]) -> Result<()> {
        self.bus.send(data)
    }

    pub fn receive(&mut self, buf: &mut [u8]) -> Result<usize> {
        self.bus.receive(buf)
    }
}

impl<T: BusTransport> Drop for ChipSelect<'_, T> {
    fn drop(&mut self) {
        if let Err(e) = self.bus.select(false) {
            log::error!("failed to release chip select: {}", e);
        }
    }
}

/// Low-level PN532 SPI exchange: frame writes, ready polling, ACK checks
/// and response reads. Owns the bus and the clock of one driver.
pub struct Handshake<T, C> {
    bus: T,
    clock: C,
    timing: Timing,
    phase: Phase,
}

impl<T: BusTransport, C: Clock> Handshake<T, C> {
    pub fn new(bus: T, clock: C, timing: Timing) -> Self {
        Self {
            bus,
            clock,
            timing,
            phase: Phase::Idle,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn timing(&self) -> &Timing {
        &self.timing
    }

    pub fn set_timing(&mut self, timing: Timing) {
        self.timing = timing;
    }

    pub fn bus(&self) -> &T {
        &self.bus
    }

    pub fn bus_mut(&mut self) -> &mut T {
        &mut self.bus
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn sleep(&mut self, duration: Duration) {
        self.clock.sleep(duration);
    }

    pub fn into_parts(self) -> (T, C) {
        (self.bus, self.clock)
    }

    /// Select, send the data-write opcode and `frame`, deselect.
    pub fn write_frame(&mut self, frame: &[u8]) -> Result<()> {
        let mut out = PacketBuffer::new();
        out.push(PN532_SPI_DATAWRITE)?;
        out.extend_from_slice(frame)?;
        trace_frame("tx", frame);

        let mut cs = ChipSelect::acquire(&mut self.bus)?;
        cs.send(out.as_slice())?;
        self.phase = Phase::CommandWritten;
        Ok(())
    }

    /// Deselect, settle, select again and clock in `n` bytes after `opcode`.
    fn read_after(&mut self, opcode: u8, buf: &mut [u8]) -> Result<usize> {
        self.bus.select(false)?;
        self.clock.sleep(self.timing.settle_delay);
        let mut cs = ChipSelect::acquire(&mut self.bus)?;
        cs.send(&[opcode])?;
        cs.receive(buf)
    }

    /// One status read: ready iff exactly one byte equal to 0x01 came back.
    pub fn is_ready(&mut self) -> Result<bool> {
        let mut status = [0u8; 1];
        let n = self.read_after(PN532_SPI_STATREAD, &mut status)?;
        Ok(n == 1 && status[0] == PN532_SPI_READY)
    }

    /// Poll `is_ready` every poll interval. A zero `timeout` waits forever;
    /// otherwise fails once the time slept between polls reaches `timeout`.
    pub fn wait_ready(&mut self, timeout: Duration) -> Result<()> {
        let step = self.timing.poll_step();
        let mut elapsed = Duration::ZERO;
        while !self.is_ready()? {
            if !timeout.is_zero() && elapsed >= timeout {
                log::debug!("device not ready after {:?}", elapsed);
                self.phase = Phase::TimedOut;
                return Err(Error::ReadyTimeout);
            }
            self.clock.sleep(step);
            elapsed += step;
        }
        Ok(())
    }

    /// Read `buf.len()` bytes of response data. A short read is only
    /// logged; the returned count says how much arrived.
    pub fn read_data(&mut self, buf: &mut [u8]) -> Result<usize> {
        let n = self.read_after(PN532_SPI_DATAREAD, buf)?;
        if n != buf.len() {
            log::warn!("short read: got {} of {} bytes", n, buf.len());
        }
        trace_frame("rx", &buf[..n.min(buf.len())]);
        Ok(n)
    }

    pub fn read_ack(&mut self) -> Result<()> {
        let mut ack = [0u8; PN532_ACK.len()];
        self.read_data(&mut ack)?;
        if ack != PN532_ACK {
            log::info!("no ACK frame received");
            return Err(Error::AckMismatch);
        }
        self.phase = Phase::AckChecked;
        Ok(())
    }

    /// Write `frame`, wait for and verify the ACK, then wait until the
    /// response is ready. Any failure leaves the exchange `Idle`.
    pub fn send_frame_check_ack(&mut self, frame: &[u8], timeout: Duration) -> Result<()> {
        let res = self.write_and_ack(frame, timeout);
        if res.is_err() {
            self.phase = Phase::Idle;
        }
        res
    }

    fn write_and_ack(&mut self, frame: &[u8], timeout: Duration) -> Result<()> {
        self.write_frame(frame)?;

        self.phase = Phase::WaitingDeviceReady(1);
        self.wait_ready(timeout).map_err(ack_timeout)?;

        self.read_ack()?;

        self.phase = Phase::WaitingDeviceReady(2);
        self.wait_ready(timeout).map_err(ack_timeout)?;
        Ok(())
    }

    /// Frame `command` (opcode first) and run `send_frame_check_ack`.
    pub fn send_command_check_ack(&mut self, command: &[u8], timeout: Duration) -> Result<()> {
        let frame = Frame::encode_raw(command)?;
        self.send_frame_check_ack(frame.as_slice(), timeout)
    }

    /// For commands whose response is never read: the exchange ends at
    /// the ACK.
    pub fn send_command_ack_only(&mut self, command: &[u8], timeout: Duration) -> Result<()> {
        let res = self.send_command_check_ack(command, timeout);
        self.phase = Phase::Idle;
        res
    }

    /// Extra wait before reading a response that may take long to arrive
    /// (a card entering the field). A timeout leaves the exchange `Idle`.
    pub fn wait_response(&mut self, timeout: Duration) -> Result<()> {
        let res = self.wait_ready(timeout);
        if res.is_err() {
            self.phase = Phase::Idle;
        }
        res
    }

    /// Read a fixed-size reply that is inspected at fixed offsets.
    pub fn read_short_reply(&mut self, len: usize) -> Result<PacketBuffer> {
        let len = len.min(PACKET_BUFFER_SIZE);
        let mut raw = [0u8; PACKET_BUFFER_SIZE];
        let res = self.read_data(&mut raw[..len]);
        self.phase = Phase::Idle;
        let n = res?.min(len);
        Ok(PacketBuffer::from_slice(&raw[..n])?)
    }

    /// Read a response frame whose `tfi + payload` is at most `requested`
    /// bytes and return the validated `tfi + payload`.
    pub fn read_frame(&mut self, requested: usize) -> Result<PacketBuffer> {
        let res = self.read_and_decode(requested);
        self.phase = Phase::Idle;
        res
    }

    fn read_and_decode(&mut self, requested: usize) -> Result<PacketBuffer> {
        let max_frame = (requested + 7).min(PACKET_BUFFER_SIZE);
        let mut raw = [0u8; PACKET_BUFFER_SIZE];
        let n = self.read_data(&mut raw[..max_frame])?.min(max_frame);
        self.phase = Phase::ResponseRead;

        let body = Frame::decode(&raw[..n], max_frame).inspect_err(|e| {
            log::warn!("invalid response frame: {}", e);
        })?;
        Ok(PacketBuffer::from_slice(body)?)
    }
}

fn ack_timeout(e: Error) -> Error {
    match e {
        Error::ReadyTimeout => Error::AckTimeout,
        other => other,
    }
}
