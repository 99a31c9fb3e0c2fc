// libpn532/src/lib.rs

//! libpn532
//!
//! Pure Rust driver for the NXP PN532 NFC transceiver on an SPI bus.
//! The bus and the delay source are supplied by the caller through the
//! [`BusTransport`] and [`Clock`] traits; enable the `embedded-hal`
//! feature for adapters over `embedded-hal` 1.0 SPI and GPIO.
//!
//! ```no_run
//! use libpn532::prelude::*;
//! # fn run<T: BusTransport, C: Clock>(bus: T, clock: C) -> libpn532::Result<()> {
//! let (mut dev, fw) = Device::new(bus, clock).check_and_config()?;
//! println!("PN5{:x}", fw.ic());
//! let card = dev.read_passive_target_id(BaudRate::Iso14443A, ms(1000))?;
//! println!("UID {}", card.uid().to_hex());
//! # Ok(())
//! # }
//! ```

pub mod card;
pub mod constants;
pub mod device;
pub mod error;
pub mod prelude;
pub mod protocol;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
