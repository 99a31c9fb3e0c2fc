// libpn532/src/device/handle.rs

use std::marker::PhantomData;
use std::time::Duration;

use crate::card::Card;
use crate::constants::{
    MAX_COMMAND_LEN, PACKET_BUFFER_SIZE, PN532_RESPONSE_SAMCONFIGURATION,
    PN532_RESPONSE_SETPARAMETERS, PN532_RESPONSE_WRITEGPIO,
};
use crate::device::config::Timing;
use crate::device::handshake::{Handshake, Phase};
use crate::protocol::commands::{self, Command};
use crate::protocol::frame::PacketBuffer;
use crate::protocol::responses::{self, Response, system};
use crate::transport::{BusTransport, Clock};
use crate::types::{BaudRate, FirmwareVersion, GpioState, SamMode, TagHandle};
use crate::utils::ms;
use crate::{Error, Result};

/// Type-state markers
pub struct Uninitialized;
pub struct Initialized;

/// SAMConfiguration timeout in 50 ms units (1 s)
const SAM_TIMEOUT: u8 = 0x14;
/// SetParameters flags: fNADUsed off, fDIDUsed on, fAutomaticATR_RES,
/// fAutomaticRATS and fISO14443-4_PICC on
const SET_PARAMETERS_FLAGS: u8 = 0x36;
/// Largest APDU `in_data_exchange` accepts: the command limit minus the
/// opcode and target bytes
pub const MAX_EXCHANGE_LEN: usize = MAX_COMMAND_LEN - 2;

/// PN532 driver that enforces initialization state at compile time.
pub struct Device<T, C, State = Uninitialized> {
    pub(crate) hs: Handshake<T, C>,
    pub(crate) listed_tag: Option<TagHandle>,
    _state: PhantomData<State>,
}

impl<T: BusTransport, C: Clock, State> Device<T, C, State> {
    pub fn timing(&self) -> &Timing {
        self.hs.timing()
    }

    pub fn set_timing(&mut self, timing: Timing) {
        self.hs.set_timing(timing);
    }

    pub fn transport(&self) -> &T {
        self.hs.bus()
    }

    pub fn transport_mut(&mut self) -> &mut T {
        self.hs.bus_mut()
    }

    pub fn clock(&self) -> &C {
        self.hs.clock()
    }

    pub fn phase(&self) -> Phase {
        self.hs.phase()
    }

    /// Give back the bus and the clock.
    pub fn release(self) -> (T, C) {
        self.hs.into_parts()
    }
}

impl<T: BusTransport, C: Clock> Device<T, C, Uninitialized> {
    pub fn new(transport: T, clock: C) -> Self {
        Self::with_timing(transport, clock, Timing::default())
    }

    pub fn with_timing(transport: T, clock: C, timing: Timing) -> Self {
        Self {
            hs: Handshake::new(transport, clock, timing),
            listed_tag: None,
            _state: PhantomData,
        }
    }

    /// Power-up delay, then a dummy GetFirmwareVersion to get the SPI
    /// interface in sync. A failed resync is logged and ignored.
    pub fn begin(mut self) -> Device<T, C, Initialized> {
        let delay = self.hs.timing().power_up_delay;
        self.hs.sleep(delay);

        let timeout = self.hs.timing().ack_timeout;
        if let Err(e) = self
            .hs
            .send_command_ack_only(&commands::encode_get_firmware_version(), timeout)
        {
            log::info!("begin failed: {}", e);
        }

        Device {
            hs: self.hs,
            listed_tag: None,
            _state: PhantomData,
        }
    }

    /// Full bring-up: wait for the board, `begin`, identify the chip and
    /// configure the SAM for reading tags.
    pub fn check_and_config(mut self) -> Result<(Device<T, C, Initialized>, FirmwareVersion)> {
        let delay = self.hs.timing().config_delay;
        self.hs.sleep(delay);

        let mut dev = self.begin();
        let version = dev.firmware_version().map_err(|e| {
            log::info!("didn't find PN53x board: {}", e);
            Error::ChipNotFound
        })?;
        log::info!("found chip PN5{:x}", version.ic());
        log::info!(
            "firmware ver. {}.{}",
            version.version(),
            version.revision()
        );

        dev.sam_config()?;
        Ok((dev, version))
    }
}

impl<T: BusTransport, C: Clock> Device<T, C, Initialized> {
    /// Tag handle of the last successful list/detect, if still valid.
    pub fn listed_tag(&self) -> Option<TagHandle> {
        self.listed_tag
    }

    /// Execute a command whose reply is a complete frame and return the
    /// parsed Response.
    pub fn execute(&mut self, cmd: &Command, timeout: Duration) -> Result<Response> {
        let frame = cmd.to_frame()?;
        self.hs.send_frame_check_ack(frame.as_slice(), timeout)?;
        let payload = self.hs.read_frame(PACKET_BUFFER_SIZE)?;
        Response::decode(cmd.command_code(), payload.as_slice())
    }

    /// Send `command` with the default ACK timeout and read a short reply
    /// of `len` bytes.
    fn short_command(&mut self, command: &[u8], len: usize) -> Result<PacketBuffer> {
        let timeout = self.hs.timing().ack_timeout;
        self.hs.send_command_check_ack(command, timeout)?;
        self.hs.read_short_reply(len)
    }

    pub fn firmware_version(&mut self) -> Result<FirmwareVersion> {
        let raw = self.short_command(
            &commands::encode_get_firmware_version(),
            system::FIRMWARE_REPLY_LEN,
        )?;
        responses::decode_firmware_version(raw.as_slice()).inspect_err(|_| {
            log::info!("firmware doesn't match");
        })
    }

    /// Normal mode, 1 s virtual card timeout, IRQ pin in use.
    pub fn sam_config(&mut self) -> Result<()> {
        let cmd = commands::encode_sam_configuration(SamMode::Normal, SAM_TIMEOUT, true);
        let raw = self.short_command(&cmd, system::STATUS_REPLY_LEN)?;
        responses::expect_status_reply(raw.as_slice(), PN532_RESPONSE_SAMCONFIGURATION)
    }

    pub fn set_parameters(&mut self) -> Result<()> {
        let cmd = commands::encode_set_parameters(SET_PARAMETERS_FLAGS);
        let raw = self.short_command(&cmd, system::STATUS_REPLY_LEN)?;
        responses::expect_status_reply(raw.as_slice(), PN532_RESPONSE_SETPARAMETERS)
    }

    /// Set MxRtyPassiveActivation: 0xFF retries forever, 0x00..=0xFE gives
    /// up after that many retries.
    pub fn set_passive_activation_retries(&mut self, max_retries: u8) -> Result<()> {
        log::debug!("setting MxRtyPassiveActivation to {}", max_retries);
        let cmd = commands::encode_rf_max_retries(0xFF, 0x01, max_retries);
        let timeout = self.hs.timing().ack_timeout;
        self.hs.send_command_ack_only(&cmd, timeout)
    }

    pub fn read_gpio(&mut self) -> Result<GpioState> {
        let raw = self.short_command(&commands::encode_read_gpio(), system::GPIO_REPLY_LEN)?;
        let state = responses::decode_read_gpio(raw.as_slice())?;
        log::debug!(
            "P3 GPIO: {:#04x}, P7 GPIO: {:#04x}, IO: {:#04x}",
            state.p3,
            state.p7,
            state.io
        );
        Ok(state)
    }

    /// Drive the P3 GPIO pins. P32 and P34 are reserved and stay high no
    /// matter what `pins` says; P7 is taken by SPI and left at zero.
    pub fn write_gpio(&mut self, pins: u8) -> Result<()> {
        let cmd = commands::encode_write_gpio(pins, 0x00);
        log::info!("writing P3 GPIO: {:#04x}", cmd[1]);
        let raw = self.short_command(&cmd, system::STATUS_REPLY_LEN)?;
        responses::expect_status_reply(raw.as_slice(), PN532_RESPONSE_WRITEGPIO)
    }

    /// Wait up to `timeout` for one ISO14443A card and read its identity.
    /// The card becomes the listed target for `in_data_exchange`.
    pub fn read_passive_target_id(&mut self, baud: BaudRate, timeout: Duration) -> Result<Card> {
        self.listed_tag = None;

        let cmd = commands::encode_in_list_passive_target(1, baud);
        self.hs.send_command_check_ack(&cmd, timeout).inspect_err(|_| {
            log::debug!("no card(s) read");
        })?;

        // card presence
        self.hs.wait_response(timeout)?;

        let payload = self.hs.read_frame(PACKET_BUFFER_SIZE)?;
        let info = responses::decode_in_list_passive_target(payload.as_slice())?;
        log::debug!(
            "ATQA: {:#06x} SAK: {:#04x} UID: {}",
            info.sens_res,
            info.sel_res,
            info.uid.to_hex()
        );

        self.listed_tag = Some(info.tag);
        Ok(Card::from(info))
    }

    /// InList one passive type A target for later `in_data_exchange`.
    pub fn in_list_passive_target(&mut self) -> Result<TagHandle> {
        self.listed_tag = None;

        log::debug!("about to inList passive target");
        let cmd = commands::encode_in_list_passive_target(1, BaudRate::Iso14443A);
        self.hs.send_command_check_ack(&cmd, ms(1000))?;

        let timeout = self.hs.timing().list_timeout;
        self.hs.wait_response(timeout)?;

        let payload = self.hs.read_frame(PACKET_BUFFER_SIZE)?;
        let tag = responses::decode_listed_tag(payload.as_slice())?;
        log::debug!("tag number: {}", tag);

        self.listed_tag = Some(tag);
        Ok(tag)
    }

    /// Exchange an APDU with the listed target. The reply is copied into
    /// `response`; a reply longer than `response` is silently truncated.
    /// Returns the number of bytes copied.
    pub fn in_data_exchange(&mut self, send: &[u8], response: &mut [u8]) -> Result<usize> {
        let tag = self.listed_tag.ok_or(Error::NoListedTarget)?;
        if send.len() > MAX_EXCHANGE_LEN {
            log::debug!("APDU length too long for packet buffer");
            return Err(Error::DataTooLong {
                max: MAX_EXCHANGE_LEN,
                actual: send.len(),
            });
        }

        let cmd = commands::encode_in_data_exchange(tag.as_u8(), send);
        self.hs.send_command_check_ack(&cmd, ms(1000)).inspect_err(|_| {
            log::debug!("could not send APDU");
        })?;
        self.hs.wait_response(ms(1000)).inspect_err(|_| {
            log::debug!("response never received for APDU");
        })?;

        let payload = self.hs.read_frame(PACKET_BUFFER_SIZE)?;
        let (_, data) = responses::decode_in_data_exchange(payload.as_slice())?;
        let n = data.len().min(response.len());
        if n < data.len() {
            log::debug!("truncating {} byte reply to {}", data.len(), n);
        }
        response[..n].copy_from_slice(&data[..n]);
        Ok(n)
    }

    /// Send a tunnelled MIFARE command and return the data following the
    /// status byte. `reply_len` bounds `tfi + payload` of the reply.
    pub(crate) fn mifare_command(&mut self, command: &[u8], reply_len: usize) -> Result<PacketBuffer> {
        let timeout = self.hs.timing().ack_timeout;
        self.hs.send_command_check_ack(command, timeout)?;
        self.mifare_reply(reply_len)
    }

    /// Card writes need a settle delay between the ACK and the reply.
    pub(crate) fn mifare_write_command(&mut self, command: &[u8]) -> Result<()> {
        let timeout = self.hs.timing().ack_timeout;
        self.hs.send_command_check_ack(command, timeout)?;
        let settle = self.hs.timing().write_settle;
        self.hs.sleep(settle);
        self.mifare_reply(MIFARE_STATUS_REPLY_LEN).map(|_| ())
    }

    fn mifare_reply(&mut self, reply_len: usize) -> Result<PacketBuffer> {
        let payload = self.hs.read_frame(reply_len)?;
        let data = responses::decode_mifare_reply(payload.as_slice()).inspect_err(|e| {
            log::debug!("MIFARE command failed: {}", e);
        })?;
        Ok(PacketBuffer::from_slice(data)?)
    }
}

/// `D5 41 <status>`
pub(crate) const MIFARE_STATUS_REPLY_LEN: usize = 3;
/// `D5 41 <status> <16 bytes>`
pub(crate) const MIFARE_BLOCK_REPLY_LEN: usize = 3 + 16;
