// libpn532/src/protocol/commands/target.rs

use crate::constants::{
    PN532_COMMAND_TGGETDATA, PN532_COMMAND_TGINITASTARGET, PN532_COMMAND_TGSETDATA,
};

/// Parameters of TgInitAsTarget (0x8C).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetConfig {
    pub mode: u8,
    /// MIFARE params: SENS_RES(2), NFCID1t(3), SEL_RES(1)
    pub mifare: [u8; 6],
    /// FeliCa params: NFCID2t(8), PAD(8), system code(2)
    pub felica: [u8; 18],
    /// NFCID3t
    pub nfcid3: [u8; 10],
    pub general_bytes: Vec<u8>,
    pub historical_bytes: Vec<u8>,
}

impl Default for TargetConfig {
    /// Emulates an ISO14443-4 card the way phones present themselves.
    fn default() -> Self {
        Self {
            mode: 0x00,
            mifare: [0x04, 0x00, 0x57, 0xda, 0xcd, 0x20],
            felica: [
                0x01, 0xfe, 0xa2, 0xa3, 0xa4, 0xa5, 0xa6, 0xa7, 0xc0, 0xc1, 0xc2, 0xc3, 0xc4,
                0xc5, 0xc6, 0xc7, 0xff, 0xff,
            ],
            nfcid3: [0xaa, 0x99, 0x88, 0x77, 0x66, 0x55, 0x44, 0x33, 0x22, 0x11],
            general_bytes: Vec::new(),
            historical_bytes: Vec::new(),
        }
    }
}

/// TgInitAsTarget: mode, MIFARE and FeliCa params, NFCID3t, then the
/// length-prefixed general and historical bytes.
pub fn encode_tg_init_as_target(config: &TargetConfig) -> Vec<u8> {
    let mut buf = Vec::with_capacity(
        1 + 1 + 6 + 18 + 10 + 2 + config.general_bytes.len() + config.historical_bytes.len(),
    );
    buf.push(PN532_COMMAND_TGINITASTARGET);
    buf.push(config.mode);
    buf.extend_from_slice(&config.mifare);
    buf.extend_from_slice(&config.felica);
    buf.extend_from_slice(&config.nfcid3);
    buf.push(config.general_bytes.len() as u8);
    buf.extend_from_slice(&config.general_bytes);
    buf.push(config.historical_bytes.len() as u8);
    buf.extend_from_slice(&config.historical_bytes);
    buf
}

/// TgGetData (0x86)
pub fn encode_tg_get_data() -> Vec<u8> {
    vec![PN532_COMMAND_TGGETDATA]
}

/// TgSetData (0x8E): the reply handed back to the initiator
pub fn encode_tg_set_data(data: &[u8]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(1 + data.len());
    buf.push(PN532_COMMAND_TGSETDATA);
    buf.extend_from_slice(data);
    buf
}
