// libpn532/src/protocol/mod.rs

pub mod checksum;
pub mod commands;
pub mod frame;
pub mod ndef;
pub mod parser;
pub mod responses;

pub use checksum::{dcs, lcs};
pub use commands::{Command, TargetConfig};
pub use frame::{Frame, PacketBuffer};
pub use ndef::UriPrefix;
pub use responses::{Response, TargetInfo};
