use libpn532::protocol::ndef::{self, UriPrefix};
use libpn532::Error;

#[test]
fn prefix_split_and_codes() {
    let (prefix, rest) = UriPrefix::split("https://www.adafruit.com");
    assert_eq!(prefix, UriPrefix::HttpsWww);
    assert_eq!(rest, "adafruit.com");
    assert_eq!(u8::from(prefix), 0x02);
    assert!(UriPrefix::try_from(0x24u8).is_err());
}

#[test]
fn classic_sector_for_long_uri() {
    let uri: Vec<u8> = (0..30u8).map(|i| b'a' + i % 26).collect();
    let blocks = ndef::classic_uri_sector(0x01, &uri).unwrap();
    assert_eq!(blocks[0][3], 35);
    assert_eq!(&blocks[1][..], &uri[7..23]);
    assert_eq!(&blocks[2][..7], &uri[23..]);
    assert_eq!(blocks[2][7], 0xfe);
    assert_eq!(blocks[3], ndef::CLASSIC_NDEF_TRAILER);
}

#[test]
fn classic_sector_rejects_bad_lengths() {
    assert!(matches!(
        ndef::classic_uri_sector(0x01, b""),
        Err(Error::UriLength { len: 0, max: 38 })
    ));
    assert!(ndef::classic_uri_sector(0x01, &[b'x'; 39]).is_err());
}
