#[path = "../common/mod.rs"]
mod common;

use libpn532::device::{Device, DeviceBuilder, Timing};
use libpn532::test_support::short_response;
use libpn532::transport::{MockBus, MockClock};
use libpn532::utils::ms;
use libpn532::Error;

#[test]
fn builder_requires_transport_and_clock() {
    let missing_clock = DeviceBuilder::<MockBus, MockClock>::new()
        .with_transport(MockBus::new())
        .build();
    assert!(matches!(missing_clock, Err(Error::Incomplete("clock"))));

    let missing_bus = DeviceBuilder::<MockBus, MockClock>::new()
        .with_clock(MockClock::new())
        .build();
    assert!(matches!(missing_bus, Err(Error::Incomplete("transport"))));
}

#[test]
fn check_and_config_identifies_chip() -> anyhow::Result<()> {
    common::init_logger();
    let mut bus = MockBus::new();
    bus.push_ack();
    bus.push_ack();
    bus.push_response(common::firmware_reply(0x3201_0607));
    bus.push_ack();
    bus.push_response(short_response(0x15, &[]));

    let (dev, fw) = Device::new(bus, MockClock::new()).check_and_config()?;
    assert_eq!(fw.ic(), 0x32);
    assert_eq!(fw.version(), 1);
    assert_eq!(fw.revision(), 6);
    // begin, firmware, SAM
    assert_eq!(dev.transport().sent_frames().len(), 3);
    assert!(dev.clock().slept() >= ms(4000));
    Ok(())
}

#[test]
fn check_and_config_without_chip() {
    common::init_logger();
    let dev = Device::with_timing(MockBus::new(), MockClock::new(), Timing::no_delays());
    assert!(matches!(dev.check_and_config(), Err(Error::ChipNotFound)));
}

#[test]
fn release_returns_bus() {
    let dev = Device::new(MockBus::new(), MockClock::new()).begin();
    let (bus, clock) = dev.release();
    assert!(!bus.is_selected());
    assert!(clock.count() > 0);
}

#[test]
fn borrowed_bus_works() {
    let mut bus = MockBus::new();
    bus.push_ack();
    {
        let dev = Device::new(&mut bus, MockClock::new()).begin();
        assert_eq!(dev.transport().sent_frames().len(), 1);
    }
    assert!(bus.responses.is_empty());
}
