// libpn532/src/protocol/commands/initiator.rs

use crate::constants::{PN532_COMMAND_INDATAEXCHANGE, PN532_COMMAND_INLISTPASSIVETARGET};
use crate::types::BaudRate;

/// InListPassiveTarget (0x4A)
pub fn encode_in_list_passive_target(max_targets: u8, baud: BaudRate) -> Vec<u8> {
    vec![PN532_COMMAND_INLISTPASSIVETARGET, max_targets, baud as u8]
}

/// InDataExchange (0x40): target number followed by the data passed
/// through to the card.
pub fn encode_in_data_exchange(target: u8, data: &[u8]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(2 + data.len());
    buf.push(PN532_COMMAND_INDATAEXCHANGE);
    buf.push(target);
    buf.extend_from_slice(data);
    buf
}
