use libpn532::test_support::{ack, initialized_mock_device, short_response};
use libpn532::Error;

#[test]
fn gpio_read_and_write() {
    let mut dev = initialized_mock_device(vec![
        ack(),
        short_response(0x0d, &[0xff, 0x00, 0x02]),
        ack(),
        short_response(0x0f, &[]),
    ]);
    let state = dev.read_gpio().unwrap();
    assert_eq!(state.p3, 0xff);
    assert_eq!(state.io, 0x02);

    dev.write_gpio(0x00).unwrap();
    let frame = dev.transport().last_frame().unwrap();
    assert_eq!(&frame[5..9], &[0xd4, 0x0e, 0x94, 0x00]);
}

#[test]
fn write_gpio_checks_response_code() {
    let mut dev = initialized_mock_device(vec![ack(), short_response(0x15, &[])]);
    assert!(matches!(
        dev.write_gpio(0x01),
        Err(Error::UnexpectedResponse {
            expected: 0x0f,
            actual: 0x15
        })
    ));
}

#[test]
fn set_parameters_and_retries() {
    let mut dev = initialized_mock_device(vec![ack(), short_response(0x13, &[]), ack()]);
    dev.set_parameters().unwrap();
    assert_eq!(
        &dev.transport().last_frame().unwrap()[5..8],
        &[0xd4, 0x12, 0x36]
    );

    dev.set_passive_activation_retries(0xff).unwrap();
    assert_eq!(
        &dev.transport().last_frame().unwrap()[5..11],
        &[0xd4, 0x32, 0x05, 0xff, 0x01, 0xff]
    );
}
