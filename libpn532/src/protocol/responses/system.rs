// libpn532/src/protocol/responses/system.rs
//! Decoders for the short replies of the system commands. These are read
//! with a fixed byte count and inspected at fixed offsets, starting at the
//! second start-code byte: `00 FF LEN LCS D5 <code> ...`.

use crate::constants::FIRMWARE_SIGNATURE;
use crate::protocol::parser;
use crate::types::{FirmwareVersion, GpioState};
use crate::{Error, Result};

/// Bytes read for a GetFirmwareVersion reply
pub const FIRMWARE_REPLY_LEN: usize = 12;
/// Bytes read for a status-only reply (SAMConfiguration, SetParameters,
/// WriteGPIO)
pub const STATUS_REPLY_LEN: usize = 8;
/// Bytes read for a ReadGPIO reply
pub const GPIO_REPLY_LEN: usize = 11;

/// Offset of the response code in a short reply
pub const RESPONSE_CODE_OFFSET: usize = 5;

/// Decode GetFirmwareVersion.
/// Layout: signature(6) + IC(1) + Ver(1) + Rev(1) + Support(1)
pub fn decode_firmware_version(raw: &[u8]) -> Result<FirmwareVersion> {
    if raw.get(..FIRMWARE_SIGNATURE.len()) != Some(&FIRMWARE_SIGNATURE[..]) {
        return Err(Error::FirmwareMismatch);
    }
    let word = parser::be_u32_at(raw, FIRMWARE_SIGNATURE.len())?;
    Ok(FirmwareVersion::from(word))
}

/// Check that a short reply carries `expected` as its response code.
pub fn expect_status_reply(raw: &[u8], expected: u8) -> Result<()> {
    parser::expect_byte_at(raw, RESPONSE_CODE_OFFSET, expected)
}

/// Decode ReadGPIO. Layout: header(6) + P3(1) + P7(1) + IO(1)
pub fn decode_read_gpio(raw: &[u8]) -> Result<GpioState> {
    let pins = parser::slice_at(raw, 6, 3)?;
    Ok(GpioState {
        p3: pins[0],
        p7: pins[1],
        io: pins[2],
    })
}
