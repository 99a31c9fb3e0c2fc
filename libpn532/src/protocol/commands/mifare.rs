// libpn532/src/protocol/commands/mifare.rs
//! MIFARE Classic / Ultralight commands, tunnelled through InDataExchange
//! to the first listed target.

use crate::constants::{
    MIFARE_CMD_READ, MIFARE_CMD_WRITE, MIFARE_TARGET, MIFARE_ULTRALIGHT_CMD_WRITE,
};
use crate::protocol::commands::initiator::encode_in_data_exchange;
use crate::types::{KeyType, MifareKey, Uid};

/// `40 01 <60|61> <block> <key> <uid>`
pub fn encode_mifare_auth(uid: &Uid, block: u8, key_type: KeyType, key: &MifareKey) -> Vec<u8> {
    let mut data = Vec::with_capacity(2 + key.len() + uid.len());
    data.push(key_type.command());
    data.push(block);
    data.extend_from_slice(key);
    data.extend_from_slice(uid.as_bytes());
    encode_in_data_exchange(MIFARE_TARGET, &data)
}

/// `40 01 30 <block>`; also reads Ultralight/NTAG pages (4 at a time).
pub fn encode_mifare_read(block: u8) -> Vec<u8> {
    encode_in_data_exchange(MIFARE_TARGET, &[MIFARE_CMD_READ, block])
}

/// `40 01 A0 <block> <16 bytes>`
pub fn encode_mifare_write(block: u8, data: &[u8; 16]) -> Vec<u8> {
    let mut buf = vec![MIFARE_CMD_WRITE, block];
    buf.extend_from_slice(data);
    encode_in_data_exchange(MIFARE_TARGET, &buf)
}

/// `40 01 A2 <page> <4 bytes>`
pub fn encode_ultralight_write(page: u8, data: &[u8; 4]) -> Vec<u8> {
    let mut buf = vec![MIFARE_ULTRALIGHT_CMD_WRITE, page];
    buf.extend_from_slice(data);
    encode_in_data_exchange(MIFARE_TARGET, &buf)
}
