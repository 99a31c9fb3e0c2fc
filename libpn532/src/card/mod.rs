// libpn532/src/card/mod.rs

use crate::device::{Device, Initialized};
use crate::protocol::responses::TargetInfo;
use crate::transport::{BusTransport, Clock};
use crate::types::{BlockData, KeyType, MifareKey, TagHandle, Uid};
use crate::Result;

pub mod operations;

/// Card family guessed from SEL_RES (SAK).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardKind {
    /// Ultralight, NTAG2xx and other type 2 tags
    Ultralight,
    MifareClassic1K,
    MifareClassic4K,
    MifareMini,
    /// ISO14443-4 compliant (DESFire, phones in card emulation, ...)
    Iso14443_4,
    Unknown(u8),
}

/// A card detected by `read_passive_target_id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    tag: TagHandle,
    sens_res: u16,
    sel_res: u8,
    uid: Uid,
}

impl Card {
    pub fn new(tag: TagHandle, sens_res: u16, sel_res: u8, uid: Uid) -> Self {
        Self {
            tag,
            sens_res,
            sel_res,
            uid,
        }
    }

    pub fn tag(&self) -> TagHandle {
        self.tag
    }

    /// ATQA
    pub fn sens_res(&self) -> u16 {
        self.sens_res
    }

    /// SAK
    pub fn sel_res(&self) -> u8 {
        self.sel_res
    }

    pub fn uid(&self) -> &Uid {
        &self.uid
    }

    pub fn kind(&self) -> CardKind {
        match self.sel_res {
            0x00 => CardKind::Ultralight,
            0x08 | 0x88 => CardKind::MifareClassic1K,
            0x18 => CardKind::MifareClassic4K,
            0x09 => CardKind::MifareMini,
            s if s & 0x20 != 0 => CardKind::Iso14443_4,
            s => CardKind::Unknown(s),
        }
    }

    /// Authenticate `block` against this card's UID.
    pub fn authenticate<T: BusTransport, C: Clock>(
        &self,
        device: &mut Device<T, C, Initialized>,
        block: u8,
        key_type: KeyType,
        key: &MifareKey,
    ) -> Result<()> {
        device.mifareclassic_authenticate_block(&self.uid, block, key_type, key)
    }

    /// Authenticate then read one MIFARE Classic block.
    pub fn read_block<T: BusTransport, C: Clock>(
        &self,
        device: &mut Device<T, C, Initialized>,
        block: u8,
        key_type: KeyType,
        key: &MifareKey,
    ) -> Result<BlockData> {
        self.authenticate(device, block, key_type, key)?;
        device
            .mifareclassic_read_data_block(block)
            .map(BlockData::from_bytes)
    }
}

impl From<TargetInfo> for Card {
    fn from(info: TargetInfo) -> Self {
        Self::new(info.tag, info.sens_res, info.sel_res, info.uid)
    }
}
