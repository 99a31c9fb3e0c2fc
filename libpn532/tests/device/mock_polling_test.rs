#[path = "../common/mod.rs"]
mod common;

use libpn532::card::CardKind;
use libpn532::test_support::{ack, initialized_mock_device, response_frame};
use libpn532::types::{BaudRate, TagHandle};
use libpn532::utils::ms;
use libpn532::Error;

#[test]
fn read_passive_target_id_four_byte_uid() {
    common::init_logger();
    let mut dev = initialized_mock_device(vec![
        ack(),
        common::in_list_frame(0x0004, 0x08, &common::SAMPLE_UID),
    ]);
    let card = dev
        .read_passive_target_id(BaudRate::Iso14443A, ms(1000))
        .unwrap();
    assert_eq!(card.uid().as_bytes(), &common::SAMPLE_UID);
    assert_eq!(card.sens_res(), 0x0004);
    assert_eq!(card.kind(), CardKind::MifareClassic1K);
    assert_eq!(dev.listed_tag(), Some(TagHandle::new(1)));

    assert_eq!(
        &dev.transport().last_frame().unwrap()[5..9],
        &[0xd4, 0x4a, 0x01, 0x00]
    );
}

#[test]
fn read_passive_target_id_seven_byte_uid() {
    let mut dev = initialized_mock_device(vec![
        ack(),
        common::in_list_frame(0x0044, 0x00, &common::SAMPLE_UID7),
    ]);
    let card = dev
        .read_passive_target_id(BaudRate::Iso14443A, ms(1000))
        .unwrap();
    assert_eq!(card.uid().len(), 7);
    assert_eq!(card.kind(), CardKind::Ultralight);
}

#[test]
fn in_list_rejects_multiple_or_no_targets() {
    for count in [0u8, 2] {
        let mut dev = initialized_mock_device(vec![ack(), response_frame(0x4b, &[count, 0x01])]);
        assert!(matches!(
            dev.in_list_passive_target(),
            Err(Error::TagCount(c)) if c == count
        ));
        assert_eq!(dev.listed_tag(), None);
    }
}

#[test]
fn in_data_exchange_round_trip() {
    let mut dev = initialized_mock_device(vec![
        ack(),
        common::in_list_frame(0x0344, 0x20, &common::SAMPLE_UID7),
        ack(),
        response_frame(0x41, &[0x00, 0x90, 0x00]),
    ]);
    let tag = dev.in_list_passive_target().unwrap();
    let mut resp = [0u8; 32];
    let n = dev
        .in_data_exchange(&[0x00, 0xa4, 0x04, 0x00], &mut resp)
        .unwrap();
    assert_eq!(&resp[..n], &[0x90, 0x00]);
    assert_eq!(
        &dev.transport().last_frame().unwrap()[5..8],
        &[0xd4, 0x40, tag.as_u8()]
    );
}

#[test]
fn in_data_exchange_rejects_oversized_apdu_without_traffic() {
    let mut dev = initialized_mock_device(vec![
        ack(),
        common::in_list_frame(0x0344, 0x20, &common::SAMPLE_UID),
    ]);
    dev.in_list_passive_target().unwrap();
    dev.transport_mut().clear_events();

    let mut resp = [0u8; 8];
    assert!(matches!(
        dev.in_data_exchange(&[0u8; 54], &mut resp),
        Err(Error::DataTooLong { max: 53, actual: 54 })
    ));
    assert_eq!(dev.transport().transfer_count(), 0);
}

#[test]
fn in_data_exchange_card_error_status() {
    let mut dev = initialized_mock_device(vec![
        ack(),
        common::in_list_frame(0x0344, 0x20, &common::SAMPLE_UID),
        ack(),
        response_frame(0x41, &[0x01]),
    ]);
    dev.in_list_passive_target().unwrap();
    let mut resp = [0u8; 8];
    assert!(matches!(
        dev.in_data_exchange(&[0x00], &mut resp),
        Err(Error::CardStatus(0x01))
    ));
}
