// libpn532/src/card/operations/ultralight.rs

use crate::card::operations::check_page;
use crate::constants::MIFARE_ULTRALIGHT_PAGES;
use crate::device::handle::MIFARE_BLOCK_REPLY_LEN;
use crate::device::{Device, Initialized};
use crate::protocol::commands;
use crate::transport::{BusTransport, Clock};
use crate::types::PageData;
use crate::{Error, Result};

impl<T: BusTransport, C: Clock> Device<T, C, Initialized> {
    /// Read one 4-byte page (0..=63).
    pub fn mifareultralight_read_page(&mut self, page: u8) -> Result<PageData> {
        check_page(page, 0, MIFARE_ULTRALIGHT_PAGES - 1)?;
        read_page(self, page)
    }

    /// Write one 4-byte page (0..=63).
    pub fn mifareultralight_write_page(&mut self, page: u8, data: &PageData) -> Result<()> {
        check_page(page, 0, MIFARE_ULTRALIGHT_PAGES - 1)?;
        log::debug!("writing page {}", page);
        let cmd = commands::encode_ultralight_write(page, data);
        self.mifare_write_command(&cmd)
    }
}

/// READ returns 16 bytes (four pages); only the first page is kept.
pub(crate) fn read_page<T: BusTransport, C: Clock>(
    dev: &mut Device<T, C, Initialized>,
    page: u8,
) -> Result<PageData> {
    log::debug!("reading page {}", page);
    let cmd = commands::encode_mifare_read(page);
    let data = dev.mifare_command(&cmd, MIFARE_BLOCK_REPLY_LEN)?;
    data.as_slice()
        .get(..4)
        .and_then(|s| <PageData>::try_from(s).ok())
        .ok_or(Error::InvalidLength {
            expected: 4,
            actual: data.len(),
        })
}
