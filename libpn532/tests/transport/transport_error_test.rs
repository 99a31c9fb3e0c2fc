#[path = "../common/mod.rs"]
mod common;

use libpn532::device::Device;
use libpn532::test_support::initialized_mock_device;
use libpn532::transport::{MockBus, MockClock};
use libpn532::Error;

#[test]
fn bus_error_propagates_and_releases_chip_select() {
    common::init_logger();
    let mut dev = initialized_mock_device(vec![]);
    dev.transport_mut().set_send_failures(1);
    match dev.firmware_version() {
        Err(Error::Bus(msg)) => assert!(msg.contains("mock")),
        other => panic!("expected bus error, got: {:?}", other),
    }
    assert!(!dev.transport().is_selected());
}

#[test]
fn begin_swallows_bus_error_but_later_commands_report_it() {
    let mut bus = MockBus::new();
    bus.set_send_failures(2);
    let mut dev = Device::new(bus, MockClock::new()).begin();
    assert!(matches!(dev.sam_config(), Err(Error::Bus(_))));
    assert!(!dev.transport().is_selected());
}
