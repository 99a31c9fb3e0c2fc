#[path = "../common/mod.rs"]
mod common;

use libpn532::protocol::UriPrefix;
use libpn532::test_support::{ack, initialized_mock_device};
use libpn532::Error;

#[test]
fn page_bounds_are_checked_before_bus_traffic() {
    let mut dev = initialized_mock_device(vec![]);
    dev.transport_mut().clear_events();

    assert!(matches!(
        dev.mifareultralight_read_page(64),
        Err(Error::PageOutOfRange { page: 64, .. })
    ));
    assert!(dev.mifareultralight_write_page(64, &[0; 4]).is_err());
    assert!(dev.ntag2xx_read_page(231).is_err());
    assert!(dev.ntag2xx_write_page(3, &[0; 4]).is_err());
    assert!(dev.ntag2xx_write_page(226, &[0; 4]).is_err());
    assert_eq!(dev.transport().transfer_count(), 0);
}

#[test]
fn ntag_read_then_write_user_page() {
    let mut page = [0u8; 16];
    page[..4].copy_from_slice(&[0x03, 0x00, 0xfe, 0x00]);
    let mut dev = initialized_mock_device(vec![
        ack(),
        common::mifare_block_frame(&page),
        ack(),
        common::mifare_ok_frame(),
    ]);
    assert_eq!(dev.ntag2xx_read_page(4).unwrap(), [0x03, 0x00, 0xfe, 0x00]);
    dev.ntag2xx_write_page(225, &[1, 2, 3, 4]).unwrap();
    assert_eq!(
        &dev.transport().last_frame().unwrap()[8..14],
        &[0xa2, 225, 1, 2, 3, 4]
    );
}

#[test]
fn ntag_write_ndef_uri() {
    // "adafruit.com" + terminator: 3 header pages and 4 data pages
    let mut dev = initialized_mock_device(vec![]);
    common::push_write_oks(dev.transport_mut(), 7);
    dev.transport_mut().clear_events();

    dev.ntag2xx_write_ndef_uri(UriPrefix::HttpWww, "adafruit.com", 144)
        .unwrap();
    let frames = dev.transport().sent_frames();
    assert_eq!(frames.len(), 7);
    assert_eq!(&frames[1][10..14], &[0x44, 0x03, 17, 0xd1]);
    assert_eq!(&frames[2][10..14], &[0x01, 13, 0x55, 0x01]);
    assert_eq!(&frames[3][10..14], b"adaf");
}

#[test]
fn ntag_write_ndef_uri_stops_on_failure() {
    let mut dev = initialized_mock_device(vec![ack(), common::mifare_ok_frame()]);
    // second page gets no ACK
    dev.transport_mut().clear_events();
    assert!(dev
        .ntag2xx_write_ndef_uri(0x03u8, "example.org", 144)
        .is_err());
    assert_eq!(dev.transport().sent_frames().len(), 2);
}
