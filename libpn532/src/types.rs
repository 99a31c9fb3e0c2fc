// libpn532/src/types.rs

use derive_more::{Display, From, Into};

use crate::Error;

/// Longest NFCID1 the PN532 reports (triple size UID).
pub const MAX_UID_LEN: usize = 10;

/// Card UID (NFCID1). 4 or 7 bytes in practice, up to 10 accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Uid {
    bytes: [u8; MAX_UID_LEN],
    len: u8,
}

impl Uid {
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len as usize]
    }

    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(self.as_bytes())
    }
}

impl TryFrom<&[u8]> for Uid {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.is_empty() || bytes.len() > MAX_UID_LEN {
            return Err(Error::InvalidLength {
                expected: MAX_UID_LEN,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; MAX_UID_LEN];
        arr[..bytes.len()].copy_from_slice(bytes);
        Ok(Self {
            bytes: arr,
            len: bytes.len() as u8,
        })
    }
}

/// Target number handed out by InListPassiveTarget. Only meaningful until
/// the next list/detect/target-mode call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, From, Into)]
#[display(fmt = "Tg{}", _0)]
pub struct TagHandle(u8);

impl TagHandle {
    pub const fn new(tg: u8) -> Self {
        Self(tg)
    }

    pub fn as_u8(&self) -> u8 {
        self.0
    }
}

/// MIFARE Classic key (6 bytes)
pub type MifareKey = [u8; 6];

/// Factory default key A/B
pub const MIFARE_KEY_DEFAULT: MifareKey = [0xFF; 6];
/// Public key A of MAD sectors
pub const MIFARE_KEY_MAD: MifareKey = [0xA0, 0xA1, 0xA2, 0xA3, 0xA4, 0xA5];
/// Public key A of NDEF sectors
pub const MIFARE_KEY_NDEF: MifareKey = [0xD3, 0xF7, 0xD3, 0xF7, 0xD3, 0xF7];

/// KeyType
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum KeyType {
    #[display(fmt = "A")]
    A,
    #[display(fmt = "B")]
    B,
}

impl KeyType {
    /// MIFARE authentication command for this key slot
    pub fn command(&self) -> u8 {
        match self {
            KeyType::A => crate::constants::MIFARE_CMD_AUTH_A,
            KeyType::B => crate::constants::MIFARE_CMD_AUTH_B,
        }
    }
}

/// BlockData (16 バイト)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockData([u8; 16]);

impl BlockData {
    pub fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }
    pub fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex_spaced(self.as_bytes())
    }

    pub fn to_ascii_safe(&self) -> String {
        self.0
            .iter()
            .map(|&b| {
                if b.is_ascii_graphic() || b == b' ' {
                    b as char
                } else {
                    '.'
                }
            })
            .collect()
    }
}

impl TryFrom<&[u8]> for BlockData {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let arr: [u8; 16] = bytes
            .get(..16)
            .and_then(|s| s.try_into().ok())
            .ok_or(Error::InvalidLength {
                expected: 16,
                actual: bytes.len(),
            })?;
        Ok(Self(arr))
    }
}

/// One 4-byte Ultralight/NTAG page
pub type PageData = [u8; 4];

/// GetFirmwareVersion word: IC, Ver, Rev, Support (big-endian)
#[derive(Debug, Clone, Copy, PartialEq, Eq, From, Into)]
pub struct FirmwareVersion(u32);

impl FirmwareVersion {
    pub fn as_u32(&self) -> u32 {
        self.0
    }

    /// IC identifier, 0x32 for a PN532
    pub fn ic(&self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub fn version(&self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub fn revision(&self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Supported card families bitfield
    pub fn support(&self) -> u8 {
        self.0 as u8
    }
}

/// Modulation / baud rate selector of InListPassiveTarget
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaudRate {
    /// 106 kbps type A (ISO/IEC14443 Type A, MIFARE)
    Iso14443A = 0x00,
    /// 212 kbps FeliCa polling
    Felica212 = 0x01,
    /// 424 kbps FeliCa polling
    Felica424 = 0x02,
    /// 106 kbps type B (ISO/IEC14443-3B)
    Iso14443B = 0x03,
    /// 106 kbps Innovision Jewel tag
    Jewel = 0x04,
}

impl Default for BaudRate {
    fn default() -> Self {
        BaudRate::Iso14443A
    }
}

/// SAMConfiguration mode
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SamMode {
    Normal = 0x01,
    VirtualCard = 0x02,
    WiredCard = 0x03,
    DualCard = 0x04,
}

/// ReadGPIO result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GpioState {
    pub p3: u8,
    pub p7: u8,
    /// Interface mode pins (0x00 HSU, 0x01 I2C, 0x02 SPI)
    pub io: u8,
}

impl GpioState {
    /// Level of P3 pin `n` (0..=5)
    pub fn p3_pin(&self, n: u8) -> bool {
        n < 8 && self.p3 & (1 << n) != 0
    }
}
