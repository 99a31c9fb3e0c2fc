// libpn532/src/transport/clock.rs

use std::time::Duration;

use crate::transport::traits::Clock;

/// Clock backed by `std::thread::sleep`.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdClock;

impl Clock for StdClock {
    fn sleep(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}
