// libpn532/src/transport/mod.rs

pub mod clock;
pub mod mock;
#[cfg(feature = "embedded-hal")]
pub mod spi;
pub mod traits;

pub use clock::StdClock;
pub use mock::{BusEvent, MockBus, MockClock};
#[cfg(feature = "embedded-hal")]
pub use spi::{DelayClock, SpiTransport};
pub use traits::{BusTransport, Clock};
