// libpn532/src/protocol/responses/mod.rs

pub mod initiator;
pub mod system;
pub mod target;

pub use initiator::{
    TargetInfo, decode_in_data_exchange, decode_in_list_passive_target, decode_listed_tag,
    decode_mifare_reply,
};
pub use system::{decode_firmware_version, decode_read_gpio, expect_status_reply};
pub use target::{decode_tg_get_data, decode_tg_init_as_target, decode_tg_set_data};

use crate::constants::{
    PN532_COMMAND_INDATAEXCHANGE, PN532_COMMAND_INLISTPASSIVETARGET, PN532_COMMAND_TGGETDATA,
    PN532_COMMAND_TGINITASTARGET, PN532_COMMAND_TGSETDATA,
};

/// High-level Response enum for the commands whose replies are read as
/// complete frames. Per-command decoders live in
/// `protocol::responses::<group>.rs` and are dispatched here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    InListPassiveTarget(TargetInfo),
    InDataExchange { status: u8, data: Vec<u8> },
    TgInitAsTarget { mode: u8, initiator_command: Vec<u8> },
    TgGetData { status: u8, data: Vec<u8> },
    TgSetData { status: u8, data: Vec<u8> },
}

impl Response {
    /// Decode a validated frame body (TFI first) for the given command code.
    pub fn decode(expected_cmd: u8, payload: &[u8]) -> crate::Result<Self> {
        crate::protocol::parser::expect_response_header(payload, expected_cmd.wrapping_add(1))?;

        match expected_cmd {
            PN532_COMMAND_INLISTPASSIVETARGET => Ok(Self::InListPassiveTarget(
                decode_in_list_passive_target(payload)?,
            )),
            PN532_COMMAND_INDATAEXCHANGE => {
                let (status, data) = decode_in_data_exchange(payload)?;
                Ok(Self::InDataExchange {
                    status,
                    data: data.to_vec(),
                })
            }
            PN532_COMMAND_TGINITASTARGET => {
                let (mode, cmd) = decode_tg_init_as_target(payload)?;
                Ok(Self::TgInitAsTarget {
                    mode,
                    initiator_command: cmd.to_vec(),
                })
            }
            PN532_COMMAND_TGGETDATA => {
                let (status, data) = decode_tg_get_data(payload)?;
                Ok(Self::TgGetData {
                    status,
                    data: data.to_vec(),
                })
            }
            PN532_COMMAND_TGSETDATA => {
                let (status, data) = decode_tg_set_data(payload)?;
                Ok(Self::TgSetData {
                    status,
                    data: data.to_vec(),
                })
            }
            other => Err(crate::Error::UnsupportedCommand(other)),
        }
    }
}
