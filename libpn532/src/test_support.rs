//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize common MockBus setup so tests across the
//! crate and tests/ directory can reuse the same logic.
#![allow(dead_code)]

use crate::constants::{PN532_ACK, PN532_PN532_TO_HOST};
use crate::device::{Device, Initialized, Timing};
use crate::protocol::frame::Frame;
use crate::transport::mock::{MockBus, MockClock};

/// A well-formed response frame `D5 <code> <body>`.
#[doc(hidden)]
pub fn response_frame(code: u8, body: &[u8]) -> Vec<u8> {
    let mut payload = Vec::with_capacity(body.len() + 1);
    payload.push(code);
    payload.extend_from_slice(body);
    Frame::encode(PN532_PN532_TO_HOST, &payload)
        .map(|f| f.as_slice().to_vec())
        .unwrap_or_default()
}

/// The same frame as seen by the fixed-offset readers, which start one
/// byte in (at the second start code byte).
#[doc(hidden)]
pub fn short_response(code: u8, body: &[u8]) -> Vec<u8> {
    let mut frame = response_frame(code, body);
    if !frame.is_empty() {
        frame.remove(0);
    }
    frame
}

#[doc(hidden)]
pub fn ack() -> Vec<u8> {
    PN532_ACK.to_vec()
}

/// Create a Device<Initialized> backed by a MockBus. `begin`'s ACK is
/// queued first, then `responses` in order.
#[doc(hidden)]
pub fn initialized_mock_device(responses: Vec<Vec<u8>>) -> Device<MockBus, MockClock, Initialized> {
    let mut bus = MockBus::new();
    bus.push_ack();
    for r in responses {
        bus.push_response(r);
    }
    Device::with_timing(bus, MockClock::new(), Timing::default()).begin()
}
