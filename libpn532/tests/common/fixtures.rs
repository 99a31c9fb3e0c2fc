// fixtures.rs: commonly used test payloads and frames

use libpn532::test_support::response_frame;
use libpn532::transport::MockBus;

pub const SAMPLE_UID: [u8; 4] = [0xde, 0xad, 0xbe, 0xef];
pub const SAMPLE_UID7: [u8; 7] = [0x04, 0x52, 0x8a, 0x12, 0x34, 0x56, 0x80];

/// Decode a hex string written with or without spaces.
pub fn bytes(s: &str) -> Vec<u8> {
    let compact: String = s.chars().filter(|c| !c.is_whitespace()).collect();
    hex::decode(compact).unwrap()
}

/// GetFirmwareVersion reply as the short reader sees it.
pub fn firmware_reply(word: u32) -> Vec<u8> {
    let mut raw = bytes("00 ff 06 fa d5 03");
    raw.extend_from_slice(&word.to_be_bytes());
    raw.extend_from_slice(&[0x00, 0x00]);
    raw
}

/// InListPassiveTarget reply with one type A target.
pub fn in_list_frame(sens_res: u16, sel_res: u8, uid: &[u8]) -> Vec<u8> {
    let mut body = vec![0x01, 0x01];
    body.extend_from_slice(&sens_res.to_be_bytes());
    body.push(sel_res);
    body.push(uid.len() as u8);
    body.extend_from_slice(uid);
    response_frame(0x4b, &body)
}

pub fn mifare_ok_frame() -> Vec<u8> {
    response_frame(0x41, &[0x00])
}

pub fn mifare_block_frame(block: &[u8; 16]) -> Vec<u8> {
    let mut body = vec![0x00];
    body.extend_from_slice(block);
    response_frame(0x41, &body)
}

/// Queue `n` successful card writes (ACK + status) on `bus`.
pub fn push_write_oks(bus: &mut MockBus, n: usize) {
    for _ in 0..n {
        bus.push_ack();
        bus.push_response(mifare_ok_frame());
    }
}
