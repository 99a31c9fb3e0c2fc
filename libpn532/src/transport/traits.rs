// libpn532/src/transport/traits.rs

use std::time::Duration;

use crate::Result;

/// Byte-level SPI access to the PN532. Keeps chip-select handling and the
/// wire away from protocol/device logic.
pub trait BusTransport {
    /// Assert (`true`) or release (`false`) the chip-select line.
    fn select(&mut self, selected: bool) -> Result<()>;

    /// Clock `data` out to the device.
    fn send(&mut self, data: &[u8]) -> Result<()>;

    /// Clock bytes in from the device into `buf`. Returns how many bytes
    /// were actually received, which may be fewer than `buf.len()`.
    fn receive(&mut self, buf: &mut [u8]) -> Result<usize>;
}

/// Blocking sleep used by the polling loops.
pub trait Clock {
    fn sleep(&mut self, duration: Duration);
}

impl<T: BusTransport + ?Sized> BusTransport for &mut T {
    fn select(&mut self, selected: bool) -> Result<()> {
        (**self).select(selected)
    }

    fn send(&mut self, data: &[u8]) -> Result<()> {
        (**self).send(data)
    }

    fn receive(&mut self, buf: &mut [u8]) -> Result<usize> {
        (**self).receive(buf)
    }
}

impl<T: BusTransport + ?Sized> BusTransport for Box<T> {
    fn select(&mut self, selected: bool) -> Result<()> {
        (**self).select(selected)
    }

    fn send(&mut self, data: &[u8]) -> Result<()> {
        (**self).send(data)
    }

    fn receive(&mut self, buf: &mut [u8]) -> Result<usize> {
        (**self).receive(buf)
    }
}

impl<C: Clock + ?Sized> Clock for &mut C {
    fn sleep(&mut self, duration: Duration) {
        (**self).sleep(duration)
    }
}

impl<C: Clock + ?Sized> Clock for Box<C> {
    fn sleep(&mut self, duration: Duration) {
        (**self).sleep(duration)
    }
}
