// libpn532/src/protocol/frame.rs

use crate::constants::{
    FRAME_OVERHEAD, MAX_COMMAND_LEN, PACKET_BUFFER_SIZE, PN532_HOST_TO_PN532, PN532_POSTAMBLE,
    PN532_PREAMBLE, PN532_STARTCODE1, PN532_STARTCODE2,
};
use crate::error::FrameError;
use crate::protocol::checksum::{dcs, lcs, sum};

/// Fixed-capacity byte buffer. Every frame the driver sends or receives
/// lives in one of these; nothing is ever truncated to fit.
#[derive(Clone, PartialEq, Eq)]
pub struct PacketBuffer {
    bytes: [u8; PACKET_BUFFER_SIZE],
    len: usize,
}

impl PacketBuffer {
    pub const CAPACITY: usize = PACKET_BUFFER_SIZE;

    pub const fn new() -> Self {
        Self {
            bytes: [0u8; PACKET_BUFFER_SIZE],
            len: 0,
        }
    }

    pub fn from_slice(data: &[u8]) -> Result<Self, FrameError> {
        let mut buf = Self::new();
        buf.extend_from_slice(data)?;
        Ok(buf)
    }

    pub fn push(&mut self, byte: u8) -> Result<(), FrameError> {
        self.extend_from_slice(&[byte])
    }

    pub fn extend_from_slice(&mut self, data: &[u8]) -> Result<(), FrameError> {
        let end = self.len + data.len();
        if end > Self::CAPACITY {
            return Err(FrameError::CommandTooLong {
                max: Self::CAPACITY,
                actual: end,
            });
        }
        self.bytes[self.len..end].copy_from_slice(data);
        self.len = end;
        Ok(())
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Default for PacketBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl AsRef<[u8]> for PacketBuffer {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl core::fmt::Debug for PacketBuffer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "PacketBuffer[{}]",
            crate::utils::bytes_to_hex_spaced(self.as_slice())
        )
    }
}

/// PN532 frame helper. Provides encode/decode of the wire frame
/// Format: [Preamble(1)] [Start code(2)] [Len(1)] [LCS(1)] [TFI(1)]
///         [Payload(Len-1)] [DCS(1)] [Postamble(1)]
/// Preamble: 0x00, start code: 0x00 0xFF, postamble: 0x00
pub struct Frame;

impl Frame {
    /// Encode `tfi + body` into a full wire frame.
    pub fn encode(tfi: u8, body: &[u8]) -> Result<PacketBuffer, FrameError> {
        let required = body.len() + 1 + FRAME_OVERHEAD;
        if required > PACKET_BUFFER_SIZE {
            return Err(FrameError::CommandTooLong {
                max: PACKET_BUFFER_SIZE - 1 - FRAME_OVERHEAD,
                actual: body.len(),
            });
        }

        let len = (body.len() + 1) as u8;
        let mut out = PacketBuffer::new();
        out.extend_from_slice(&[PN532_PREAMBLE, PN532_STARTCODE1, PN532_STARTCODE2])?;
        out.push(len)?;
        out.push(lcs(len))?;
        out.push(tfi)?;
        out.extend_from_slice(body)?;
        out.push(dcs(body).wrapping_sub(tfi))?;
        out.push(PN532_POSTAMBLE)?;
        Ok(out)
    }

    /// Encode an already assembled host command (opcode first).
    pub fn encode_raw(command: &[u8]) -> Result<PacketBuffer, FrameError> {
        if command.len() > MAX_COMMAND_LEN {
            return Err(FrameError::CommandTooLong {
                max: MAX_COMMAND_LEN,
                actual: command.len(),
            });
        }
        Self::encode(PN532_HOST_TO_PN532, command)
    }

    /// Encode `opcode` and its parameters as a host command frame.
    pub fn encode_command(opcode: u8, params: &[u8]) -> Result<PacketBuffer, FrameError> {
        let mut command = PacketBuffer::new();
        command.push(opcode)?;
        command.extend_from_slice(params)?;
        Self::encode_raw(command.as_slice())
    }

    /// Validate a received frame and return `tfi + payload`.
    ///
    /// `declared_max_len` is how many bytes the caller read into `raw`;
    /// the frame must fit in it. Checks never skip ahead: offsets past the
    /// length byte only mean something once the length has validated.
    pub fn decode(raw: &[u8], declared_max_len: usize) -> Result<&[u8], FrameError> {
        if raw.first() != Some(&PN532_PREAMBLE) {
            return Err(FrameError::BadPreamble);
        }

        if raw.get(1) != Some(&PN532_STARTCODE1) || raw.get(2) != Some(&PN532_STARTCODE2) {
            return Err(FrameError::BadStartCode);
        }

        let capacity = declared_max_len.min(raw.len());
        let (length, checksum) = match (raw.get(3), raw.get(4)) {
            (Some(&l), Some(&c)) => (l, c),
            _ => {
                return Err(FrameError::BufferTooSmall {
                    required: FRAME_OVERHEAD,
                    capacity,
                });
            }
        };
        if length.wrapping_add(checksum) != 0 {
            return Err(FrameError::LengthChecksumMismatch { length, checksum });
        }

        let required = length as usize + FRAME_OVERHEAD;
        if capacity < required {
            return Err(FrameError::BufferTooSmall { required, capacity });
        }

        let body_end = 5 + length as usize;
        let body = &raw[5..body_end];
        if sum(body).wrapping_add(raw[body_end]) != 0 {
            return Err(FrameError::DataChecksumMismatch);
        }

        if raw[body_end + 1] != PN532_POSTAMBLE {
            return Err(FrameError::BadPostamble);
        }

        Ok(body)
    }
}
