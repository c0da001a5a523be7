//! MAC address codec: colon-delimited strings, raw octets, and the
//! big-endian integer form used by the ANQP/HS2.0 event schema.

use crate::CodecError;

/// Parses a colon-delimited MAC address string into six octets.
pub fn parse(s: &str) -> Result<[u8; 6], CodecError> {
    let mut octets = [0u8; 6];
    let mut count = 0;
    for part in s.split(':') {
        if count == 6 || part.len() != 2 {
            return Err(CodecError::InvalidMac(s.to_string()));
        }
        octets[count] = u8::from_str_radix(part, 16)
            .map_err(|_| CodecError::InvalidMac(s.to_string()))?;
        count += 1;
    }
    if count != 6 {
        return Err(CodecError::InvalidMac(s.to_string()));
    }
    Ok(octets)
}

/// Formats six octets as a lowercase colon-delimited string.
pub fn format(octets: &[u8; 6]) -> String {
    format!(
        "{:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}",
        octets[0], octets[1], octets[2], octets[3], octets[4], octets[5]
    )
}

/// Interprets six octets as a big-endian integer.
pub fn to_u64(octets: &[u8; 6]) -> u64 {
    let mut bytes = [0u8; 8];
    bytes[2..].copy_from_slice(octets);
    u64::from_be_bytes(bytes)
}
