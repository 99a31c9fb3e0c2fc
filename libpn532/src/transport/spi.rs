// libpn532/src/transport/spi.rs
//! `embedded-hal` 1.0 adapters.
//!
//! The PN532 talks SPI mode 0, LSB first, at up to 5 MHz; configuring the
//! bus accordingly is up to the caller.

use std::time::Duration;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiBus;

use crate::transport::traits::{BusTransport, Clock};
use crate::{Error, Result};

/// SPI bus plus a dedicated, active-low chip-select pin.
pub struct SpiTransport<SPI, CS> {
    spi: SPI,
    cs: CS,
}

impl<SPI: SpiBus, CS: OutputPin> SpiTransport<SPI, CS> {
    pub fn new(spi: SPI, cs: CS) -> Self {
        Self { spi, cs }
    }

    pub fn release(self) -> (SPI, CS) {
        (self.spi, self.cs)
    }
}

impl<SPI: SpiBus, CS: OutputPin> BusTransport for SpiTransport<SPI, CS> {
    fn select(&mut self, selected: bool) -> Result<()> {
        let res = if selected {
            self.cs.set_low()
        } else {
            self.cs.set_high()
        };
        res.map_err(|e| Error::Bus(format!("chip select: {:?}", e)))
    }

    fn send(&mut self, data: &[u8]) -> Result<()> {
        self.spi
            .write(data)
            .and_then(|_| self.spi.flush())
            .map_err(|e| Error::Bus(format!("spi write: {:?}", e)))
    }

    fn receive(&mut self, buf: &mut [u8]) -> Result<usize> {
        self.spi
            .read(buf)
            .and_then(|_| self.spi.flush())
            .map_err(|e| Error::Bus(format!("spi read: {:?}", e)))?;
        Ok(buf.len())
    }
}

/// Clock backed by an `embedded-hal` delay provider.
pub struct DelayClock<D> {
    delay: D,
}

impl<D: DelayNs> DelayClock<D> {
    pub fn new(delay: D) -> Self {
        Self { delay }
    }

    pub fn release(self) -> D {
        self.delay
    }
}

impl<D: DelayNs> Clock for DelayClock<D> {
    /// Sleeps in `u32::MAX` microsecond chunks, so any duration is honoured
    /// to microsecond precision.
    fn sleep(&mut self, duration: Duration) {
        let mut remaining = duration.as_micros();
        while remaining > 0 {
            let chunk = u32::try_from(remaining).unwrap_or(u32::MAX);
            self.delay.delay_us(chunk);
            remaining -= u128::from(chunk);
        }
    }
}
