#[path = "../common/mod.rs"]
mod common;

use std::time::Duration;

use libpn532::device::{Handshake, Phase, Timing};
use libpn532::test_support::initialized_mock_device;
use libpn532::transport::{MockBus, MockClock};
use libpn532::types::BaudRate;
use libpn532::utils::ms;
use libpn532::Error;

#[test]
fn timeouts_are_never_cut_short() {
    for timeout in [1u64, 10, 35, 100, 250] {
        let mut dev = initialized_mock_device(vec![]);
        dev.transport_mut().set_never_ready(true);
        let before = dev.clock().slept();

        let r = dev.read_passive_target_id(BaudRate::Iso14443A, ms(timeout));
        assert!(matches!(r, Err(Error::AckTimeout)), "timeout {}", timeout);
        assert!(dev.clock().slept() - before >= ms(timeout));
        assert!(!dev.transport().is_selected());
        assert_eq!(dev.phase(), Phase::Idle);
        assert_eq!(dev.listed_tag(), None);
    }
}

#[test]
fn zero_timeout_waits_until_ready() {
    let mut bus = MockBus::new();
    bus.push_not_ready(500);
    let mut hs = Handshake::new(bus, MockClock::new(), Timing::no_delays());
    hs.wait_ready(Duration::ZERO).unwrap();
    assert_eq!(hs.clock().slept(), ms(5000));
}

#[test]
fn zero_poll_interval_still_times_out() {
    let mut bus = MockBus::new();
    bus.set_never_ready(true);
    let timing = Timing {
        poll_interval: Duration::ZERO,
        ..Timing::no_delays()
    };
    let mut hs = Handshake::new(bus, MockClock::new(), timing);
    assert!(matches!(hs.wait_ready(ms(5)), Err(Error::ReadyTimeout)));
    assert!(hs.clock().slept() >= ms(5));
}

#[test]
fn missing_ack_is_a_mismatch() {
    let mut dev = initialized_mock_device(vec![]);
    dev.transport_mut().push_response(vec![0x00, 0x00, 0xff, 0xff, 0x00, 0x00]);
    assert!(matches!(dev.firmware_version(), Err(Error::AckMismatch)));
    assert!(!dev.transport().is_selected());
}
