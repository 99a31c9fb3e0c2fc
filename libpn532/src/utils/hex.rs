//! Hexadecimal helpers for trace output and `Display` of byte newtypes.

use std::fmt::Write;

/// Convert a byte slice to a lowercase hex string without separators.
///
/// Example: `&[0xde, 0xad]` -> `"dead"`
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        // write! never fails writing to a String
        let _ = write!(&mut s, "{:02x}", b);
    }
    s
}

/// Convert a byte slice to a lowercase hex string with a single space between
/// each byte.
///
/// Example: `&[0xde, 0xad]` -> `"de ad"`
pub fn bytes_to_hex_spaced(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 3);
    for (i, b) in bytes.iter().enumerate() {
        if i != 0 {
            s.push(' ');
        }
        let _ = write!(&mut s, "{:02x}", b);
    }
    s
}

/// Log `bytes` at trace level prefixed with `label`.
///
/// Frame dumps are noisy; without the `diagnostics` feature only the length
/// is logged.
pub fn trace_frame(label: &str, bytes: &[u8]) {
    if !log::log_enabled!(log::Level::Trace) {
        return;
    }
    if cfg!(feature = "diagnostics") {
        log::trace!("{} [{}]: {}", label, bytes.len(), bytes_to_hex_spaced(bytes));
    } else {
        log::trace!("{} [{} bytes]", label, bytes.len());
    }
}
