// libpn532/src/card/operations/classic.rs
//! MIFARE Classic 1K/4K: block authentication, block I/O and NDEF
//! formatting.

use crate::device::handle::{MIFARE_BLOCK_REPLY_LEN, MIFARE_STATUS_REPLY_LEN};
use crate::device::{Device, Initialized};
use crate::protocol::commands;
use crate::protocol::ndef;
use crate::transport::{BusTransport, Clock};
use crate::types::{KeyType, MifareKey, Uid};
use crate::{Error, Result};

/// Sectors 0..32 hold 4 blocks, sectors 32..40 of a 4K hold 16.
pub fn mifareclassic_is_first_block(block: u32) -> bool {
    if block < 128 {
        block % 4 == 0
    } else {
        block % 16 == 0
    }
}

pub fn mifareclassic_is_trailer_block(block: u32) -> bool {
    if block < 128 {
        (block + 1) % 4 == 0
    } else {
        (block + 1) % 16 == 0
    }
}

impl<T: BusTransport, C: Clock> Device<T, C, Initialized> {
    /// Authenticate `block` with `key` against the card carrying `uid`.
    pub fn mifareclassic_authenticate_block(
        &mut self,
        uid: &Uid,
        block: u8,
        key_type: KeyType,
        key: &MifareKey,
    ) -> Result<()> {
        log::debug!("authenticating block {} with key {}", block, key_type);
        let cmd = commands::encode_mifare_auth(uid, block, key_type, key);
        self.mifare_command(&cmd, MIFARE_STATUS_REPLY_LEN)
            .map(|_| ())
            .inspect_err(|_| log::debug!("authentication failed"))
    }

    /// Read one 16-byte block. The sector must be authenticated.
    pub fn mifareclassic_read_data_block(&mut self, block: u8) -> Result<[u8; 16]> {
        log::debug!("reading block {}", block);
        let cmd = commands::encode_mifare_read(block);
        let data = self.mifare_command(&cmd, MIFARE_BLOCK_REPLY_LEN)?;
        data.as_slice()
            .get(..16)
            .and_then(|s| <[u8; 16]>::try_from(s).ok())
            .ok_or(Error::InvalidLength {
                expected: 16,
                actual: data.len(),
            })
    }

    /// Write one 16-byte block. The sector must be authenticated.
    pub fn mifareclassic_write_data_block(&mut self, block: u8, data: &[u8; 16]) -> Result<()> {
        log::debug!("writing block {}", block);
        let cmd = commands::encode_mifare_write(block, data);
        self.mifare_write_command(&cmd)
    }

    /// Write the MAD into sector 0 so the card reads as NDEF formatted.
    /// Sector 0 must be authenticated with the MAD key.
    pub fn mifareclassic_format_ndef(&mut self) -> Result<()> {
        for (i, block) in ndef::classic_format_ndef_blocks().iter().enumerate() {
            self.mifareclassic_write_data_block(1 + i as u8, block)?;
        }
        Ok(())
    }

    /// Write a single URI record into `sector` (1..=15), replacing its
    /// trailer with the NDEF one. Stops at the first failing block.
    pub fn mifareclassic_write_ndef_uri(
        &mut self,
        sector: u8,
        prefix: impl Into<u8>,
        uri: &str,
    ) -> Result<()> {
        if !(1..=15).contains(&sector) {
            return Err(Error::SectorOutOfRange(sector));
        }
        let blocks = ndef::classic_uri_sector(prefix.into(), uri.as_bytes())?;

        let first = sector * 4;
        for (i, block) in blocks.iter().enumerate() {
            self.mifareclassic_write_data_block(first + i as u8, block)?;
        }
        Ok(())
    }
}
