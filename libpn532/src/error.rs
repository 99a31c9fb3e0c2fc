// libpn532/src/error.rs

use thiserror::Error;

/// Frame-level validation failures. Checks run in wire order, so the
/// variant names the first field that did not validate.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameError {
    #[error("frame does not start with preamble")]
    BadPreamble,

    #[error("frame does not contain start code")]
    BadStartCode,

    #[error("length checksum mismatch: len={length:#04x}, lcs={checksum:#04x}")]
    LengthChecksumMismatch { length: u8, checksum: u8 },

    #[error("frame needs {required} bytes but buffer holds {capacity}")]
    BufferTooSmall { required: usize, capacity: usize },

    #[error("data checksum mismatch")]
    DataChecksumMismatch,

    #[error("frame does not contain postamble")]
    BadPostamble,

    #[error("command of {actual} bytes exceeds the {max} byte limit")]
    CommandTooLong { max: usize, actual: usize },
}

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("bus error: {0}")]
    Bus(String),

    #[error("timed out waiting for ACK")]
    AckTimeout,

    #[error("ACK frame mismatch")]
    AckMismatch,

    #[error("timed out waiting for device ready")]
    ReadyTimeout,

    #[error("frame error: {0}")]
    Frame(#[from] FrameError),

    #[error("invalid packet length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("firmware signature mismatch")]
    FirmwareMismatch,

    #[error("unexpected response code: expected {expected:#04x}, got {actual:#04x}")]
    UnexpectedResponse { expected: u8, actual: u8 },

    #[error("expected exactly one target, found {0}")]
    TagCount(u8),

    #[error("card reported error status {0:#04x}")]
    CardStatus(u8),

    #[error("no target listed")]
    NoListedTarget,

    #[error("page {page} outside {min}..={max}")]
    PageOutOfRange { page: u8, min: u8, max: u8 },

    #[error("sector {0} outside 1..=15")]
    SectorOutOfRange(u8),

    #[error("uri length {len} outside 1..={max}")]
    UriLength { len: usize, max: usize },

    #[error("data of {actual} bytes exceeds the {max} byte limit")]
    DataTooLong { max: usize, actual: usize },

    #[error("command {0:#04x} has no frame response decoder")]
    UnsupportedCommand(u8),

    #[error("didn't find PN53x board")]
    ChipNotFound,

    #[error("device builder is missing a {0}")]
    Incomplete(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;
