// libpn532/src/protocol/ndef.rs
//! NDEF URI record layouts for MIFARE Classic sectors and NTAG2xx pages.
//!
//! Both layouts wrap a single short URI record (`D1 01 <len+1> 55 <prefix>
//! <uri>`) in an NDEF message TLV and close it with the terminator TLV
//! `0xFE`. Nothing here touches the bus.

use crate::types::PageData;
use crate::{Error, Result};

/// NDEF message TLV tag
pub const NDEF_MESSAGE_TLV: u8 = 0x03;
/// Terminator TLV
pub const NDEF_TERMINATOR_TLV: u8 = 0xFE;
/// Well-known, short record, message begin and end
pub const NDEF_URI_RECORD_HEADER: u8 = 0xD1;
/// Record type `U`
pub const NDEF_URI_RECORD_TYPE: u8 = 0x55;

/// Longest URI that fits the three data blocks of one Classic sector
pub const CLASSIC_MAX_URI_LEN: usize = 38;
/// Bytes of lock-control TLV and record header preceding an NTAG URI
pub const NTAG_URI_HEADER_LEN: usize = 12;
/// First NTAG page of the NDEF area
pub const NTAG_NDEF_FIRST_PAGE: u8 = 4;

/// Access bits and key B of an NDEF sector trailer, key A = `D3 F7 D3 F7 D3 F7`.
pub const CLASSIC_NDEF_TRAILER: [u8; 16] = [
    0xD3, 0xF7, 0xD3, 0xF7, 0xD3, 0xF7, 0x7F, 0x07, 0x88, 0x40, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF,
];

/// Sector 0 trailer of a MAD-formatted card, key A = `A0 A1 A2 A3 A4 A5`.
pub const CLASSIC_MAD_TRAILER: [u8; 16] = [
    0xA0, 0xA1, 0xA2, 0xA3, 0xA4, 0xA5, 0x78, 0x77, 0x88, 0xC1, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF,
];

/// URI identifier codes of the NFC Forum URI record type.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UriPrefix {
    None = 0x00,
    HttpWww = 0x01,
    HttpsWww = 0x02,
    Http = 0x03,
    Https = 0x04,
    Tel = 0x05,
    Mailto = 0x06,
    FtpAnonymous = 0x07,
    FtpFtp = 0x08,
    Ftps = 0x09,
    Sftp = 0x0A,
    Smb = 0x0B,
    Nfs = 0x0C,
    Ftp = 0x0D,
    Dav = 0x0E,
    News = 0x0F,
    Telnet = 0x10,
    Imap = 0x11,
    Rtsp = 0x12,
    Urn = 0x13,
    Pop = 0x14,
    Sip = 0x15,
    Sips = 0x16,
    Tftp = 0x17,
    Btspp = 0x18,
    Btl2cap = 0x19,
    Btgoep = 0x1A,
    Tcpobex = 0x1B,
    Irdaobex = 0x1C,
    File = 0x1D,
    UrnEpcId = 0x1E,
    UrnEpcTag = 0x1F,
    UrnEpcPat = 0x20,
    UrnEpcRaw = 0x21,
    UrnEpc = 0x22,
    UrnNfc = 0x23,
}

impl UriPrefix {
    const ALL: [UriPrefix; 36] = [
        Self::None,
        Self::HttpWww,
        Self::HttpsWww,
        Self::Http,
        Self::Https,
        Self::Tel,
        Self::Mailto,
        Self::FtpAnonymous,
        Self::FtpFtp,
        Self::Ftps,
        Self::Sftp,
        Self::Smb,
        Self::Nfs,
        Self::Ftp,
        Self::Dav,
        Self::News,
        Self::Telnet,
        Self::Imap,
        Self::Rtsp,
        Self::Urn,
        Self::Pop,
        Self::Sip,
        Self::Sips,
        Self::Tftp,
        Self::Btspp,
        Self::Btl2cap,
        Self::Btgoep,
        Self::Tcpobex,
        Self::Irdaobex,
        Self::File,
        Self::UrnEpcId,
        Self::UrnEpcTag,
        Self::UrnEpcPat,
        Self::UrnEpcRaw,
        Self::UrnEpc,
        Self::UrnNfc,
    ];

    /// The text this code abbreviates.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "",
            Self::HttpWww => "http://www.",
            Self::HttpsWww => "https://www.",
            Self::Http => "http://",
            Self::Https => "https://",
            Self::Tel => "tel:",
            Self::Mailto => "mailto:",
            Self::FtpAnonymous => "ftp://anonymous:anonymous@",
            Self::FtpFtp => "ftp://ftp.",
            Self::Ftps => "ftps://",
            Self::Sftp => "sftp://",
            Self::Smb => "smb://",
            Self::Nfs => "nfs://",
            Self::Ftp => "ftp://",
            Self::Dav => "dav://",
            Self::News => "news:",
            Self::Telnet => "telnet://",
            Self::Imap => "imap:",
            Self::Rtsp => "rtsp://",
            Self::Urn => "urn:",
            Self::Pop => "pop:",
            Self::Sip => "sip:",
            Self::Sips => "sips:",
            Self::Tftp => "tftp:",
            Self::Btspp => "btspp://",
            Self::Btl2cap => "btl2cap://",
            Self::Btgoep => "btgoep://",
            Self::Tcpobex => "tcpobex://",
            Self::Irdaobex => "irdaobex://",
            Self::File => "file://",
            Self::UrnEpcId => "urn:epc:id:",
            Self::UrnEpcTag => "urn:epc:tag:",
            Self::UrnEpcPat => "urn:epc:pat:",
            Self::UrnEpcRaw => "urn:epc:raw:",
            Self::UrnEpc => "urn:epc:",
            Self::UrnNfc => "urn:nfc:",
        }
    }

    /// Longest prefix matching the start of `uri`, with the remainder.
    pub fn split(uri: &str) -> (UriPrefix, &str) {
        Self::ALL
            .iter()
            .filter(|p| !p.as_str().is_empty() && uri.starts_with(p.as_str()))
            .max_by_key(|p| p.as_str().len())
            .map(|p| (*p, &uri[p.as_str().len()..]))
            .unwrap_or((Self::None, uri))
    }
}

impl From<UriPrefix> for u8 {
    fn from(p: UriPrefix) -> u8 {
        p as u8
    }
}

impl TryFrom<u8> for UriPrefix {
    type Error = Error;

    fn try_from(code: u8) -> Result<Self> {
        Self::ALL
            .get(code as usize)
            .copied()
            .ok_or(Error::UnexpectedResponse {
                expected: UriPrefix::UrnNfc as u8,
                actual: code,
            })
    }
}

impl std::fmt::Display for UriPrefix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The four blocks of a Classic sector holding one URI record: three data
/// blocks followed by the NDEF sector trailer.
pub fn classic_uri_sector(prefix: u8, uri: &[u8]) -> Result<[[u8; 16]; 4]> {
    let len = uri.len();
    if !(1..=CLASSIC_MAX_URI_LEN).contains(&len) {
        return Err(Error::UriLength {
            len,
            max: CLASSIC_MAX_URI_LEN,
        });
    }

    let mut b1 = [0u8; 16];
    let mut b2 = [0u8; 16];
    let mut b3 = [0u8; 16];
    b1[..9].copy_from_slice(&[
        0x00,
        0x00,
        NDEF_MESSAGE_TLV,
        (len + 5) as u8,
        NDEF_URI_RECORD_HEADER,
        0x01,
        (len + 1) as u8,
        NDEF_URI_RECORD_TYPE,
        prefix,
    ]);

    match len {
        1..=6 => {
            b1[9..9 + len].copy_from_slice(uri);
            b1[9 + len] = NDEF_TERMINATOR_TLV;
        }
        7 => {
            b1[9..].copy_from_slice(uri);
            b2[0] = NDEF_TERMINATOR_TLV;
        }
        8..=22 => {
            b1[9..].copy_from_slice(&uri[..7]);
            b2[..len - 7].copy_from_slice(&uri[7..]);
            b2[len - 7] = NDEF_TERMINATOR_TLV;
        }
        23 => {
            b1[9..].copy_from_slice(&uri[..7]);
            b2.copy_from_slice(&uri[7..]);
            b3[0] = NDEF_TERMINATOR_TLV;
        }
        _ => {
            b1[9..].copy_from_slice(&uri[..7]);
            b2.copy_from_slice(&uri[7..23]);
            b3[..len - 23].copy_from_slice(&uri[23..]);
            b3[len - 23] = NDEF_TERMINATOR_TLV;
        }
    }

    Ok([b1, b2, b3, CLASSIC_NDEF_TRAILER])
}

/// MAD blocks 1 and 2 plus the sector 0 trailer.
pub fn classic_format_ndef_blocks() -> [[u8; 16]; 3] {
    let mut b1 = [0u8; 16];
    b1[..2].copy_from_slice(&[0x14, 0x01]);
    for pair in b1[2..].chunks_exact_mut(2) {
        pair.copy_from_slice(&[0x03, 0xE1]);
    }
    let mut b2 = [0u8; 16];
    for pair in b2.chunks_exact_mut(2) {
        pair.copy_from_slice(&[0x03, 0xE1]);
    }
    [b1, b2, CLASSIC_MAD_TRAILER]
}

/// Lock-control TLV followed by the NDEF TLV and URI record header.
pub fn ntag_uri_header(prefix: u8, len: usize) -> [u8; NTAG_URI_HEADER_LEN] {
    [
        0x01,
        0x03,
        0xA0,
        0x10,
        0x44,
        NDEF_MESSAGE_TLV,
        (len + 5) as u8,
        NDEF_URI_RECORD_HEADER,
        0x01,
        (len + 1) as u8,
        NDEF_URI_RECORD_TYPE,
        prefix,
    ]
}

/// All pages to write from page 4 on: three header pages, then the URI
/// four bytes at a time with the terminator after the last character.
/// `data_len` is the size of the tag's user area.
pub fn ntag_uri_pages(prefix: u8, uri: &[u8], data_len: usize) -> Result<Vec<PageData>> {
    let len = uri.len();
    let max = data_len.saturating_sub(NTAG_URI_HEADER_LEN + 1);
    if len < 1 || data_len < NTAG_URI_HEADER_LEN || len + 1 > data_len - NTAG_URI_HEADER_LEN {
        return Err(Error::UriLength { len, max });
    }

    let header = ntag_uri_header(prefix, len);
    let mut pages: Vec<PageData> = Vec::with_capacity(3 + len / 4 + 1);
    for chunk in header.chunks_exact(4) {
        pages.push([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }

    let mut chunks = uri.chunks_exact(4);
    for chunk in chunks.by_ref() {
        pages.push([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }
    let rest = chunks.remainder();
    let mut last = [0u8; 4];
    last[..rest.len()].copy_from_slice(rest);
    last[rest.len()] = NDEF_TERMINATOR_TLV;
    pages.push(last);

    Ok(pages)
}
