// libpn532/src/device/builder.rs

use crate::device::config::Timing;
use crate::device::handle::{Device, Uninitialized};
use crate::transport::{BusTransport, Clock};
use crate::{Error, Result};

/// Helper to construct a Device with optional configuration.
pub struct DeviceBuilder<T, C> {
    transport: Option<T>,
    clock: Option<C>,
    timing: Timing,
}

impl<T: BusTransport, C: Clock> DeviceBuilder<T, C> {
    pub fn new() -> Self {
        Self {
            transport: None,
            clock: None,
            timing: Timing::default(),
        }
    }

    pub fn with_transport(mut self, transport: T) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn with_clock(mut self, clock: C) -> Self {
        self.clock = Some(clock);
        self
    }

    pub fn with_timing(mut self, timing: Timing) -> Self {
        self.timing = timing;
        self
    }

    /// Consume the builder and return an uninitialized Device.
    /// Requires a transport and a clock.
    pub fn build(self) -> Result<Device<T, C, Uninitialized>> {
        let transport = self.transport.ok_or(Error::Incomplete("transport"))?;
        let clock = self.clock.ok_or(Error::Incomplete("clock"))?;
        Ok(Device::with_timing(transport, clock, self.timing))
    }
}

impl<T: BusTransport, C: Clock> Default for DeviceBuilder<T, C> {
    fn default() -> Self {
        Self::new()
    }
}
