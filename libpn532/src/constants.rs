// libpn532/src/constants.rs
//! Wire-level constants of the PN532 host interface

/// Frame preamble byte
pub const PN532_PREAMBLE: u8 = 0x00;
/// First start-code byte
pub const PN532_STARTCODE1: u8 = 0x00;
/// Second start-code byte
pub const PN532_STARTCODE2: u8 = 0xFF;
/// Frame postamble byte
pub const PN532_POSTAMBLE: u8 = 0x00;

/// Frame identifiers: host->PN532 (D4) and PN532->host (D5)
pub const PN532_HOST_TO_PN532: u8 = 0xD4;
pub const PN532_PN532_TO_HOST: u8 = 0xD5;

/// Capacity of every packet buffer used by the driver.
pub const PACKET_BUFFER_SIZE: usize = 64;

/// Bytes a frame adds around `tfi + payload`:
/// preamble, two start codes, LEN, LCS, DCS, postamble.
pub const FRAME_OVERHEAD: usize = 7;

/// Largest command (opcode + params) that fits one packet buffer together
/// with the frame overhead, the TFI and the SPI "data write" opcode.
pub const MAX_COMMAND_LEN: usize = PACKET_BUFFER_SIZE - FRAME_OVERHEAD - 2;

/// ACK frame sent by the PN532 after each accepted command frame.
pub const PN532_ACK: [u8; 6] = [0x00, 0x00, 0xFF, 0x00, 0xFF, 0x00];

/// Leading bytes of a GetFirmwareVersion reply as read over SPI.
pub const FIRMWARE_SIGNATURE: [u8; 6] = [0x00, 0xFF, 0x06, 0xFA, 0xD5, 0x03];

/// SPI operation bytes and the ready sentinel of the status read
pub const PN532_SPI_DATAWRITE: u8 = 0x01;
pub const PN532_SPI_STATREAD: u8 = 0x02;
pub const PN532_SPI_DATAREAD: u8 = 0x03;
pub const PN532_SPI_READY: u8 = 0x01;

// PN532 commands
pub const PN532_COMMAND_DIAGNOSE: u8 = 0x00;
pub const PN532_COMMAND_GETFIRMWAREVERSION: u8 = 0x02;
pub const PN532_COMMAND_GETGENERALSTATUS: u8 = 0x04;
pub const PN532_COMMAND_READGPIO: u8 = 0x0C;
pub const PN532_COMMAND_WRITEGPIO: u8 = 0x0E;
pub const PN532_COMMAND_SETPARAMETERS: u8 = 0x12;
pub const PN532_COMMAND_SAMCONFIGURATION: u8 = 0x14;
pub const PN532_COMMAND_POWERDOWN: u8 = 0x16;
pub const PN532_COMMAND_RFCONFIGURATION: u8 = 0x32;
pub const PN532_COMMAND_INDATAEXCHANGE: u8 = 0x40;
pub const PN532_COMMAND_INLISTPASSIVETARGET: u8 = 0x4A;
pub const PN532_COMMAND_TGINITASTARGET: u8 = 0x8C;
pub const PN532_COMMAND_TGGETDATA: u8 = 0x86;
pub const PN532_COMMAND_TGSETDATA: u8 = 0x8E;

// Response codes are the command code + 1
pub const PN532_RESPONSE_SAMCONFIGURATION: u8 = 0x15;
pub const PN532_RESPONSE_SETPARAMETERS: u8 = 0x13;
pub const PN532_RESPONSE_WRITEGPIO: u8 = 0x0F;
pub const PN532_RESPONSE_INDATAEXCHANGE: u8 = 0x41;
pub const PN532_RESPONSE_INLISTPASSIVETARGET: u8 = 0x4B;
pub const PN532_RESPONSE_TGINITASTARGET: u8 = 0x8D;
pub const PN532_RESPONSE_TGGETDATA: u8 = 0x87;
pub const PN532_RESPONSE_TGSETDATA: u8 = 0x8F;

/// RFConfiguration item carrying the retry counters
pub const PN532_RFCONFIG_MAX_RETRIES: u8 = 0x05;

// MIFARE commands tunnelled through InDataExchange
pub const MIFARE_CMD_AUTH_A: u8 = 0x60;
pub const MIFARE_CMD_AUTH_B: u8 = 0x61;
pub const MIFARE_CMD_READ: u8 = 0x30;
pub const MIFARE_CMD_WRITE: u8 = 0xA0;
pub const MIFARE_ULTRALIGHT_CMD_WRITE: u8 = 0xA2;

/// Target number the PN532 assigns to the first inlisted card.
pub const MIFARE_TARGET: u8 = 0x01;

/// Low six bits of an InDataExchange status byte carry the error code.
pub const PN532_STATUS_ERROR_MASK: u8 = 0x3F;

// GPIO P3 bits and the validation bit of WriteGPIO
pub const PN532_GPIO_VALIDATIONBIT: u8 = 0x80;
pub const PN532_GPIO_P30: u8 = 0;
pub const PN532_GPIO_P31: u8 = 1;
pub const PN532_GPIO_P32: u8 = 2;
pub const PN532_GPIO_P33: u8 = 3;
pub const PN532_GPIO_P34: u8 = 4;
pub const PN532_GPIO_P35: u8 = 5;

// Page limits
pub const MIFARE_ULTRALIGHT_PAGES: u8 = 64;
pub const NTAG2XX_PAGES: u8 = 231;
pub const NTAG2XX_FIRST_USER_PAGE: u8 = 4;
pub const NTAG2XX_LAST_USER_PAGE: u8 = 225;
