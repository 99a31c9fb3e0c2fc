// libpn532/src/device/config.rs

use std::time::Duration;

use crate::utils::timeout::{DEFAULT_ACK_TIMEOUT_MS, LIST_TARGET_TIMEOUT_MS, ms};

/// Interval between two status reads while waiting for the device.
pub const POLL_INTERVAL_MS: u64 = 10;
/// Chip-select settle delay before every status or data read.
pub const SETTLE_DELAY_MS: u64 = 2;
/// Delay between the ACK of a card write and reading its response.
pub const WRITE_SETTLE_MS: u64 = 10;
/// Delay before the dummy firmware request of `begin`.
pub const POWER_UP_DELAY_MS: u64 = 1000;
/// Delay before `check_and_config` starts talking to the chip.
pub const CONFIG_DELAY_MS: u64 = 3000;

/// Session timing of one driver instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timing {
    pub poll_interval: Duration,
    pub settle_delay: Duration,
    pub write_settle: Duration,
    /// Used for commands that don't take an explicit timeout
    pub ack_timeout: Duration,
    pub power_up_delay: Duration,
    pub list_timeout: Duration,
    pub config_delay: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            poll_interval: ms(POLL_INTERVAL_MS),
            settle_delay: ms(SETTLE_DELAY_MS),
            write_settle: ms(WRITE_SETTLE_MS),
            ack_timeout: ms(DEFAULT_ACK_TIMEOUT_MS),
            power_up_delay: ms(POWER_UP_DELAY_MS),
            list_timeout: ms(LIST_TARGET_TIMEOUT_MS),
            config_delay: ms(CONFIG_DELAY_MS),
        }
    }
}

impl Timing {
    /// Timing with every delay zeroed except the poll interval; handy with
    /// mock clocks and fast buses.
    pub fn no_delays() -> Self {
        Self {
            settle_delay: Duration::ZERO,
            write_settle: Duration::ZERO,
            power_up_delay: Duration::ZERO,
            config_delay: Duration::ZERO,
            ..Self::default()
        }
    }

    /// Poll step used by `wait_ready`; never zero so timeouts always elapse.
    pub fn poll_step(&self) -> Duration {
        self.poll_interval.max(Duration::from_millis(1))
    }
}
