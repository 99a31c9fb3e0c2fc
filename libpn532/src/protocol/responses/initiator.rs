// libpn532/src/protocol/responses/initiator.rs

use crate::constants::{
    PN532_RESPONSE_INDATAEXCHANGE, PN532_RESPONSE_INLISTPASSIVETARGET, PN532_STATUS_ERROR_MASK,
};
use crate::protocol::parser;
use crate::types::{TagHandle, Uid};
use crate::{Error, Result};

/// One ISO14443A target reported by InListPassiveTarget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetInfo {
    pub tag: TagHandle,
    /// SENS_RES (ATQA), big-endian as sent by the card
    pub sens_res: u16,
    /// SEL_RES (SAK)
    pub sel_res: u8,
    pub uid: Uid,
}

/// Check the InListPassiveTarget header and target count, return the
/// target number. `payload` starts with the TFI.
pub fn decode_listed_tag(payload: &[u8]) -> Result<TagHandle> {
    let body = parser::expect_response_header(payload, PN532_RESPONSE_INLISTPASSIVETARGET)?;
    let found = parser::byte_at(body, 0)?;
    if found != 1 {
        return Err(Error::TagCount(found));
    }
    Ok(TagHandle::new(parser::byte_at(body, 1)?))
}

/// Decode a single type A target.
/// Layout: D5 4B NbTg(1) Tg(1) SENS_RES(2) SEL_RES(1) NFCIDLength(1) NFCID1
pub fn decode_in_list_passive_target(payload: &[u8]) -> Result<TargetInfo> {
    let tag = decode_listed_tag(payload)?;
    let body = &payload[2..];
    let sens_res = parser::be_u16_at(body, 2)?;
    let sel_res = parser::byte_at(body, 4)?;
    let uid_len = parser::byte_at(body, 5)? as usize;
    let uid = Uid::try_from(parser::slice_at(body, 6, uid_len)?)?;
    Ok(TargetInfo {
        tag,
        sens_res,
        sel_res,
        uid,
    })
}

/// Decode InDataExchange: returns `(status, data)`. Only the low six bits
/// of the status carry an error; the rest are chaining/NAD flags.
pub fn decode_in_data_exchange(payload: &[u8]) -> Result<(u8, &[u8])> {
    let body = parser::expect_response_header(payload, PN532_RESPONSE_INDATAEXCHANGE)?;
    let status = parser::byte_at(body, 0)?;
    if status & PN532_STATUS_ERROR_MASK != 0 {
        return Err(Error::CardStatus(status));
    }
    Ok((status, &body[1..]))
}

/// Decode the reply to a tunnelled MIFARE command. Stricter than
/// `decode_in_data_exchange`: any non-zero status byte is a failure.
pub fn decode_mifare_reply(payload: &[u8]) -> Result<&[u8]> {
    let body = parser::expect_response_header(payload, PN532_RESPONSE_INDATAEXCHANGE)?;
    let status = parser::byte_at(body, 0)?;
    if status != 0 {
        return Err(Error::CardStatus(status));
    }
    Ok(&body[1..])
}
