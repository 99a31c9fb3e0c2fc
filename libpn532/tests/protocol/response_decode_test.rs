#[path = "../common/mod.rs"]
mod common;

use libpn532::protocol::responses::{self, Response};
use libpn532::test_support::response_frame;
use libpn532::Error;

fn body(frame: &[u8]) -> Vec<u8> {
    // strip 00 00 FF LEN LCS ... DCS 00
    frame[5..frame.len() - 2].to_vec()
}

#[test]
fn firmware_version_from_short_reply() {
    let raw = common::firmware_reply(0x3201_0607);
    let v = responses::decode_firmware_version(&raw).unwrap();
    assert_eq!(v.ic(), 0x32);
    assert_eq!(v.support(), 0x07);

    let mut bad = raw.clone();
    bad[4] = 0xd4;
    assert!(matches!(
        responses::decode_firmware_version(&bad),
        Err(Error::FirmwareMismatch)
    ));
}

#[test]
fn in_list_with_seven_byte_uid() {
    let frame = common::in_list_frame(0x0044, 0x00, &common::SAMPLE_UID7);
    let info = responses::decode_in_list_passive_target(&body(&frame)).unwrap();
    assert_eq!(info.uid.as_bytes(), &common::SAMPLE_UID7);
    assert_eq!(info.sens_res, 0x0044);
}

#[test]
fn in_list_requires_exactly_one_target() {
    for count in [0u8, 2] {
        let frame = response_frame(0x4b, &[count, 0x01]);
        assert!(matches!(
            responses::decode_listed_tag(&body(&frame)),
            Err(Error::TagCount(c)) if c == count
        ));
    }
}

#[test]
fn in_data_exchange_status_bits() {
    // chaining flag only: still success
    let frame = response_frame(0x41, &[0x40, 0x90, 0x00]);
    let payload = body(&frame);
    let (status, data) = responses::decode_in_data_exchange(&payload).unwrap();
    assert_eq!(status, 0x40);
    assert_eq!(data, &[0x90, 0x00]);

    let frame = response_frame(0x41, &[0x01]);
    assert!(matches!(
        responses::decode_in_data_exchange(&body(&frame)),
        Err(Error::CardStatus(0x01))
    ));
}

#[test]
fn response_dispatch() {
    let frame = response_frame(0x8d, &[0x05, 0x00, 0xa4]);
    assert_eq!(
        Response::decode(0x8c, &body(&frame)).unwrap(),
        Response::TgInitAsTarget {
            mode: 0x05,
            initiator_command: vec![0x00, 0xa4],
        }
    );

    let frame = response_frame(0x03, &[0x32, 0x01, 0x06, 0x07]);
    assert!(matches!(
        Response::decode(0x02, &body(&frame)),
        Err(Error::UnsupportedCommand(0x02))
    ));
}

#[test]
fn response_header_mismatch() {
    let frame = response_frame(0x41, &[0x00]);
    assert!(matches!(
        Response::decode(0x4a, &body(&frame)),
        Err(Error::UnexpectedResponse {
            expected: 0x4b,
            actual: 0x41
        })
    ));
}
