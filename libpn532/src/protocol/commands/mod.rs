// libpn532/src/protocol/commands/mod.rs

pub mod initiator;
pub mod mifare;
pub mod system;
pub mod target;

pub use initiator::{encode_in_data_exchange, encode_in_list_passive_target};
pub use mifare::{
    encode_mifare_auth, encode_mifare_read, encode_mifare_write, encode_ultralight_write,
};
pub use system::{
    encode_get_firmware_version, encode_read_gpio, encode_rf_max_retries,
    encode_sam_configuration, encode_set_parameters, encode_write_gpio,
};
pub use target::{TargetConfig, encode_tg_get_data, encode_tg_init_as_target, encode_tg_set_data};

use crate::constants::*;
use crate::protocol::frame::{Frame, PacketBuffer};
use crate::types::BaudRate;
use crate::Result;

/// Commands whose reply is a complete response frame, i.e. the ones
/// `Device::execute` can run. System commands answer with short fixed
/// layouts and go through their own `Device` methods instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    InListPassiveTarget {
        max_targets: u8,
        baud: BaudRate,
    },
    InDataExchange {
        target: u8,
        data: Vec<u8>,
    },
    TgInitAsTarget(TargetConfig),
    TgGetData,
    TgSetData {
        data: Vec<u8>,
    },
}

impl Command {
    /// Return the PN532 command code.
    pub fn command_code(&self) -> u8 {
        match self {
            Self::InListPassiveTarget { .. } => PN532_COMMAND_INLISTPASSIVETARGET,
            Self::InDataExchange { .. } => PN532_COMMAND_INDATAEXCHANGE,
            Self::TgInitAsTarget(_) => PN532_COMMAND_TGINITASTARGET,
            Self::TgGetData => PN532_COMMAND_TGGETDATA,
            Self::TgSetData { .. } => PN532_COMMAND_TGSETDATA,
        }
    }

    /// The response code the PN532 answers this command with.
    pub fn response_code(&self) -> u8 {
        self.command_code().wrapping_add(1)
    }

    /// Encode the command into the raw payload (command code + params).
    pub fn encode(&self) -> Vec<u8> {
        match self {
            Self::InListPassiveTarget { max_targets, baud } => {
                encode_in_list_passive_target(*max_targets, *baud)
            }
            Self::InDataExchange { target, data } => encode_in_data_exchange(*target, &data[..]),
            Self::TgInitAsTarget(config) => encode_tg_init_as_target(config),
            Self::TgGetData => encode_tg_get_data(),
            Self::TgSetData { data } => encode_tg_set_data(data),
        }
    }

    /// Encode into a complete host->PN532 wire frame.
    pub fn to_frame(&self) -> Result<PacketBuffer> {
        Ok(Frame::encode_raw(&self.encode())?)
    }
}
