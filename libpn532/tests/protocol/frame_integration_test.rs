#[path = "../common/mod.rs"]
mod common;

use libpn532::constants::{MAX_COMMAND_LEN, PACKET_BUFFER_SIZE};
use libpn532::error::FrameError;
use libpn532::protocol::Frame;
use proptest::prelude::*;

#[test]
fn firmware_request_matches_wire_bytes() {
    let frame = Frame::encode_command(0x02, &[]).unwrap();
    assert_eq!(
        frame.as_slice(),
        common::bytes("00 00 ff 02 fe d4 02 2a 00").as_slice()
    );
}

#[test]
fn decode_rejects_bad_postamble() {
    let mut frame = Frame::encode(0xd5, &[0x41, 0x00]).unwrap().as_slice().to_vec();
    let last = frame.len() - 1;
    frame[last] = 0x01;
    assert_eq!(
        Frame::decode(&frame, frame.len()),
        Err(FrameError::BadPostamble)
    );
}

#[test]
fn decode_short_buffer_never_reads_past_length() {
    let frame = Frame::encode(0xd5, &[0x4b, 0x01, 0x01]).unwrap();
    let raw = frame.as_slice();
    assert!(matches!(
        Frame::decode(&raw[..4], PACKET_BUFFER_SIZE),
        Err(FrameError::BufferTooSmall { .. })
    ));
    assert!(matches!(
        Frame::decode(&raw[..raw.len() - 1], PACKET_BUFFER_SIZE),
        Err(FrameError::BufferTooSmall { .. })
    ));
}

#[test]
fn largest_command_fills_the_buffer() {
    let params = vec![0xa5u8; MAX_COMMAND_LEN - 1];
    let frame = Frame::encode_command(0x40, &params).unwrap();
    assert_eq!(frame.len(), PACKET_BUFFER_SIZE - 1);
}

#[test]
fn decode_rejects_changed_length_byte() {
    let mut frame = Frame::encode(0xd5, &[0x41, 0x00, 0x90]).unwrap().as_slice().to_vec();
    assert_eq!(frame[3], 0x04);
    frame[3] = 0x03;
    assert_eq!(
        Frame::decode(&frame, frame.len()),
        Err(FrameError::LengthChecksumMismatch {
            length: 0x03,
            checksum: 0xfc
        })
    );
}

#[test]
fn decode_rejects_changed_data_checksum() {
    let mut frame = Frame::encode(0xd5, &[0x41, 0x00, 0x90]).unwrap().as_slice().to_vec();
    let dcs = frame.len() - 2;
    frame[dcs] = frame[dcs].wrapping_add(1);
    assert_eq!(
        Frame::decode(&frame, frame.len()),
        Err(FrameError::DataChecksumMismatch)
    );
}

proptest! {
    #[test]
    fn corrupting_one_checked_byte_is_detected(
        params in prop::collection::vec(any::<u8>(), 1..MAX_COMMAND_LEN),
        idx in any::<prop::sample::Index>(),
        flip in 1u8..=255,
    ) {
        let mut raw = Frame::encode_command(0x40, &params).unwrap().as_slice().to_vec();
        // LEN, LCS, then TFI + opcode + params, then DCS
        let body_len = params.len() + 2;
        let at = 3 + idx.index(body_len + 3);
        raw[at] ^= flip;
        let decoded = Frame::decode(&raw, PACKET_BUFFER_SIZE);
        if at < 5 {
            prop_assert!(
                matches!(decoded, Err(FrameError::LengthChecksumMismatch { .. })),
                "byte {} gave {:?}",
                at,
                decoded
            );
        } else {
            prop_assert_eq!(decoded, Err(FrameError::DataChecksumMismatch));
        }
    }
}
