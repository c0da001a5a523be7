//! WPS wire constants and field codecs.

use crate::CodecError;

/// WPS configuration error codes carried by fail notifications.
pub mod config_error {
    pub const NO_ERROR: u16 = 0;
    pub const MULTIPLE_PBC_DETECTED: u16 = 12;
    pub const MSG_TIMEOUT: u16 = 16;
}

/// WPS error indications carried by fail notifications.
pub mod error_indication {
    pub const NO_ERROR: u16 = 0;
    pub const SECURITY_TKIP_ONLY_PROHIBITED: u16 = 1;
    pub const SECURITY_WEP_PROHIBITED: u16 = 2;
    pub const AUTH_FAILURE: u16 = 3;
}

/// WPS config method bits, matching the daemon's registrar bitmask.
pub mod config_method {
    pub const USBA: u16 = 0x0001;
    pub const ETHERNET: u16 = 0x0002;
    pub const LABEL: u16 = 0x0004;
    pub const DISPLAY: u16 = 0x0008;
    pub const EXT_NFC_TOKEN: u16 = 0x0010;
    pub const INT_NFC_TOKEN: u16 = 0x0020;
    pub const NFC_INTERFACE: u16 = 0x0040;
    pub const PUSHBUTTON: u16 = 0x0080;
    pub const KEYPAD: u16 = 0x0100;
    pub const VIRT_PUSHBUTTON: u16 = 0x0280;
    pub const PHY_PUSHBUTTON: u16 = 0x0480;
    pub const P2PS: u16 = 0x1000;
    pub const VIRT_DISPLAY: u16 = 0x2008;
    pub const PHY_DISPLAY: u16 = 0x4008;
}

/// Folds a space-separated list of config method names into the daemon's
/// u16 bitmask. Unknown names are a codec error.
pub fn parse_config_methods(methods: &str) -> Result<u16, CodecError> {
    let mut mask = 0u16;
    for name in methods.split_whitespace() {
        mask |= match name {
            "usba" => config_method::USBA,
            "ethernet" => config_method::ETHERNET,
            "label" => config_method::LABEL,
            "display" => config_method::DISPLAY,
            "ext_nfc_token" => config_method::EXT_NFC_TOKEN,
            "int_nfc_token" => config_method::INT_NFC_TOKEN,
            "nfc_interface" => config_method::NFC_INTERFACE,
            "push_button" => config_method::PUSHBUTTON,
            "keypad" => config_method::KEYPAD,
            "virtual_push_button" => config_method::VIRT_PUSHBUTTON,
            "physical_push_button" => config_method::PHY_PUSHBUTTON,
            "p2ps" => config_method::P2PS,
            "virtual_display" => config_method::VIRT_DISPLAY,
            "physical_display" => config_method::PHY_DISPLAY,
            other => return Err(CodecError::UnknownWpsConfigMethod(other.to_string())),
        };
    }
    Ok(mask)
}

/// Parses a WPS primary device type string of the form
/// `<category>-<OUI hex>-<subcategory>` into its 8-byte wire form:
/// big-endian category, four OUI bytes, big-endian subcategory.
pub fn parse_device_type(type_str: &str) -> Result<[u8; 8], CodecError> {
    let invalid = || CodecError::InvalidWpsDeviceType(type_str.to_string());
    let mut parts = type_str.split('-');
    let (Some(cat), Some(oui), Some(subcat), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(invalid());
    };
    if cat.is_empty() || cat.len() > 2 || subcat.is_empty() || subcat.len() > 2 {
        return Err(invalid());
    }
    if oui.len() != 8 || !oui.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }
    let category: u16 = cat.parse().map_err(|_| invalid())?;
    let subcategory: u16 = subcat.parse().map_err(|_| invalid())?;

    let mut bytes = [0u8; 8];
    bytes[..2].copy_from_slice(&category.to_be_bytes());
    for (i, chunk) in oui.as_bytes().chunks(2).enumerate() {
        let pair = std::str::from_utf8(chunk).map_err(|_| invalid())?;
        bytes[2 + i] = u8::from_str_radix(pair, 16).map_err(|_| invalid())?;
    }
    bytes[6..].copy_from_slice(&subcategory.to_be_bytes());
    Ok(bytes)
}
