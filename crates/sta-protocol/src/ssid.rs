//! SSID codec following the daemon's string convention: printable SSIDs
//! are wrapped in double quotes, everything else is hex-encoded.

use crate::CodecError;

/// Decodes an SSID string into raw bytes.
///
/// A quoted string yields its inner UTF-8 bytes; anything else must be an
/// even-length hex string. This is the write-side counterpart of
/// [`from_bytes`]: network-handle implementations use it to marshal a
/// profile's SSID into the daemon's byte field when saving.
pub fn decode(s: &str) -> Result<Vec<u8>, CodecError> {
    if s.len() >= 2 && s.starts_with('"') && s.ends_with('"') {
        return Ok(s[1..s.len() - 1].as_bytes().to_vec());
    }
    if s.len() % 2 != 0 {
        return Err(CodecError::InvalidSsid(s.to_string()));
    }
    let mut bytes = Vec::with_capacity(s.len() / 2);
    for chunk in s.as_bytes().chunks(2) {
        let pair = std::str::from_utf8(chunk).map_err(|_| CodecError::InvalidSsid(s.to_string()))?;
        bytes.push(
            u8::from_str_radix(pair, 16).map_err(|_| CodecError::InvalidSsid(s.to_string()))?,
        );
    }
    Ok(bytes)
}

/// Encodes raw SSID bytes into the daemon's string convention.
pub fn from_bytes(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(utf8) if !utf8.contains('"') => format!("\"{utf8}\""),
        _ => bytes.iter().map(|b| format!("{b:02x}")).collect(),
    }
}
