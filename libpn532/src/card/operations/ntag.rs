// libpn532/src/card/operations/ntag.rs
//! NTAG203/213/215/216 pages. Reads cover the whole memory, writes only
//! the user area.

use crate::card::operations::check_page;
use crate::card::operations::ultralight::read_page;
use crate::constants::{NTAG2XX_FIRST_USER_PAGE, NTAG2XX_LAST_USER_PAGE, NTAG2XX_PAGES};
use crate::device::{Device, Initialized};
use crate::protocol::{commands, ndef};
use crate::transport::{BusTransport, Clock};
use crate::types::PageData;
use crate::Result;

impl<T: BusTransport, C: Clock> Device<T, C, Initialized> {
    /// Read one 4-byte page (0..=230).
    pub fn ntag2xx_read_page(&mut self, page: u8) -> Result<PageData> {
        check_page(page, 0, NTAG2XX_PAGES - 1)?;
        read_page(self, page)
    }

    /// Write one 4-byte user page (4..=225).
    pub fn ntag2xx_write_page(&mut self, page: u8, data: &PageData) -> Result<()> {
        check_page(page, NTAG2XX_FIRST_USER_PAGE, NTAG2XX_LAST_USER_PAGE)?;
        log::debug!("writing page {}", page);
        let cmd = commands::encode_ultralight_write(page, data);
        self.mifare_write_command(&cmd)
    }

    /// Write a URI record from page 4 on. `data_len` is the user area
    /// size of the tag (e.g. 144 for an NTAG213).
    pub fn ntag2xx_write_ndef_uri(
        &mut self,
        prefix: impl Into<u8>,
        uri: &str,
        data_len: usize,
    ) -> Result<()> {
        let pages = ndef::ntag_uri_pages(prefix.into(), uri.as_bytes(), data_len)?;
        for (i, page) in pages.iter().enumerate() {
            self.ntag2xx_write_page(ndef::NTAG_NDEF_FIRST_PAGE + i as u8, page)?;
        }
        Ok(())
    }
}
