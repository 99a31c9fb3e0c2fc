// libpn532/src/prelude.rs

pub use crate::card::{Card, CardKind};
pub use crate::device::{Device, DeviceBuilder, Initialized, Timing, Uninitialized};
pub use crate::protocol::{Command, Response, TargetConfig, UriPrefix};
pub use crate::transport::{BusTransport, Clock, StdClock};
pub use crate::{
    BaudRate, BlockData, Error, FirmwareVersion, GpioState, KeyType, MifareKey, PageData, Result,
    SamMode, TagHandle, Uid,
};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex, bytes_to_hex_spaced, default_ack_timeout, ms};
