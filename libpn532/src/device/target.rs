// libpn532/src/device/target.rs
//! Target (card emulation) mode: the PN532 answers an external reader.

use crate::constants::{PACKET_BUFFER_SIZE, PN532_RESPONSE_TGGETDATA};
use crate::device::handle::{Device, Initialized};
use crate::protocol::commands::{Command, TargetConfig, encode_tg_get_data};
use crate::protocol::parser;
use crate::protocol::responses::{Response, decode_tg_set_data};
use crate::transport::{BusTransport, Clock};
use crate::utils::ms;
use crate::{Error, Result};

impl<T: BusTransport, C: Clock> Device<T, C, Initialized> {
    /// Enter target mode with the default (phone-like ISO14443-4) profile
    /// and wait until an initiator activates us.
    pub fn as_target(&mut self) -> Result<()> {
        self.as_target_with(&TargetConfig::default()).map(|_| ())
    }

    /// Enter target mode with `config`. Returns the activation mode byte
    /// and the first command the initiator sent.
    pub fn as_target_with(&mut self, config: &TargetConfig) -> Result<(u8, Vec<u8>)> {
        self.listed_tag = None;

        let timeout = self.hs.timing().ack_timeout;
        match self.execute(&Command::TgInitAsTarget(config.clone()), timeout)? {
            Response::TgInitAsTarget {
                mode,
                initiator_command,
            } => {
                log::info!("activated as target, mode {:#04x}", mode);
                Ok((mode, initiator_command))
            }
            other => {
                log::warn!("unexpected response to TgInitAsTarget: {:?}", other);
                Err(Error::UnsupportedCommand(crate::constants::PN532_COMMAND_TGINITASTARGET))
            }
        }
    }

    /// Fetch the data the initiator sent. `buf` receives the whole
    /// validated frame body, TFI first (`D5 87 <status> <data>`); the
    /// return value is its length.
    pub fn get_data_target(&mut self, buf: &mut [u8]) -> Result<usize> {
        self.hs.send_command_check_ack(&encode_tg_get_data(), ms(1000))?;

        let payload = self.hs.read_frame(PACKET_BUFFER_SIZE)?;
        parser::expect_response_header(payload.as_slice(), PN532_RESPONSE_TGGETDATA)?;
        let len = payload.len();
        if buf.len() < len {
            return Err(Error::InvalidLength {
                expected: len,
                actual: buf.len(),
            });
        }
        buf[..len].copy_from_slice(payload.as_slice());
        Ok(len)
    }

    /// Send `command` verbatim (the caller provides the `0x8E` opcode and
    /// the data) and copy whatever follows the status byte of the reply
    /// into `response`, truncated to fit.
    pub fn set_data_target(&mut self, command: &[u8], response: &mut [u8]) -> Result<usize> {
        let timeout = self.hs.timing().ack_timeout;
        self.hs.send_command_check_ack(command, timeout)?;

        let payload = self.hs.read_frame(PACKET_BUFFER_SIZE)?;
        let (_, data) = decode_tg_set_data(payload.as_slice())?;
        let n = data.len().min(response.len());
        response[..n].copy_from_slice(&data[..n]);
        Ok(n)
    }
}
