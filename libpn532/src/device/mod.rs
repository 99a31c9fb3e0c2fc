// libpn532/src/device/mod.rs

pub mod builder;
pub mod config;
pub mod handle;
pub mod handshake;
pub mod target;

pub use builder::DeviceBuilder;
pub use config::Timing;
pub use handle::{Device, Initialized, Uninitialized};
pub use handshake::{ChipSelect, Handshake, Phase};
