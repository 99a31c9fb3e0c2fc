// libpn532/src/card/operations/mod.rs
//! Card commands tunnelled through InDataExchange to the first listed
//! target, implemented as methods on the initialized `Device`.

pub mod classic;
pub mod ntag;
pub mod ultralight;

pub use classic::{mifareclassic_is_first_block, mifareclassic_is_trailer_block};

use crate::Error;

/// Reject `page` outside `min..=max` before any bus traffic.
pub(crate) fn check_page(page: u8, min: u8, max: u8) -> Result<(), Error> {
    if page < min || page > max {
        log::debug!("page {} out of range {}..={}", page, min, max);
        return Err(Error::PageOutOfRange { page, min, max });
    }
    Ok(())
}
