// libpn532/src/protocol/responses/target.rs

use crate::constants::{
    PN532_RESPONSE_TGGETDATA, PN532_RESPONSE_TGINITASTARGET, PN532_RESPONSE_TGSETDATA,
    PN532_STATUS_ERROR_MASK,
};
use crate::protocol::parser;
use crate::{Error, Result};

/// Decode TgInitAsTarget: returns `(mode, initiator_command)`.
pub fn decode_tg_init_as_target(payload: &[u8]) -> Result<(u8, &[u8])> {
    let body = parser::expect_response_header(payload, PN532_RESPONSE_TGINITASTARGET)?;
    let mode = parser::byte_at(body, 0)?;
    Ok((mode, &body[1..]))
}

/// Decode TgGetData: returns `(status, data)`.
pub fn decode_tg_get_data(payload: &[u8]) -> Result<(u8, &[u8])> {
    decode_target_status(payload, PN532_RESPONSE_TGGETDATA)
}

/// Decode TgSetData: returns `(status, echoed data)`.
pub fn decode_tg_set_data(payload: &[u8]) -> Result<(u8, &[u8])> {
    decode_target_status(payload, PN532_RESPONSE_TGSETDATA)
}

fn decode_target_status(payload: &[u8], code: u8) -> Result<(u8, &[u8])> {
    let body = parser::expect_response_header(payload, code)?;
    let status = parser::byte_at(body, 0)?;
    if status & PN532_STATUS_ERROR_MASK != 0 {
        return Err(Error::CardStatus(status));
    }
    Ok((status, &body[1..]))
}
