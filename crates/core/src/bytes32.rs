//! Fixed-width 32-byte text fields.
//!
//! Short strings (bounty titles and descriptions, report descriptions)
//! cross the contract boundary as `bytes32` values: the UTF-8 bytes are
//! written left-aligned at offset 0 and the remainder of the buffer is
//! zero-padded. There is no length prefix — the zero padding doubles as
//! the terminator, which is why at most 31 data bytes fit: a 32nd data
//! byte would be indistinguishable from padding.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::address::hex_digit;
use crate::error::{Bytes32Error, DecodeError, EncodeError};

/// Maximum number of UTF-8 bytes that fit in a fixed-width text field.
pub const MAX_TEXT_BYTES: usize = 31;

// ---------------------------------------------------------------------------
// Bytes32
// ---------------------------------------------------------------------------

/// A 32-byte contract field value.
///
/// Displayed and serialized as a `0x`-prefixed, 64-hex-digit string, the
/// conventional wire form for `bytes32` arguments and return values.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bytes32([u8; 32]);

impl Bytes32 {
    /// Number of raw bytes in the field.
    pub const LEN: usize = 32;

    /// The all-zero value. Decodes to the empty string.
    pub const ZERO: Bytes32 = Bytes32([0u8; 32]);

    /// Wrap a raw byte array.
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// The raw bytes of this field.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Encode text into the fixed-width format.
    ///
    /// Fails closed rather than truncating: text longer than
    /// [`MAX_TEXT_BYTES`] cannot be represented and silently dropping the
    /// tail would corrupt the on-chain record. The empty string is a
    /// caller error, not a legitimate empty value.
    pub fn encode_text(text: &str) -> Result<Self, EncodeError> {
        if text.is_empty() {
            return Err(EncodeError::Empty);
        }
        let raw = text.as_bytes();
        if raw.len() > MAX_TEXT_BYTES {
            return Err(EncodeError::TooLong { len: raw.len() });
        }

        let mut buf = [0u8; Self::LEN];
        buf[..raw.len()].copy_from_slice(raw);
        Ok(Self(buf))
    }

    /// Decode the text payload of this field.
    ///
    /// Strips trailing zero bytes (scanning backward from byte 31) and
    /// UTF-8-decodes the remaining prefix. The all-zero value decodes to
    /// the empty string.
    pub fn decode_text(&self) -> Result<String, DecodeError> {
        let mut end = Self::LEN;
        while end > 0 && self.0[end - 1] == 0 {
            end -= 1;
        }
        Ok(std::str::from_utf8(&self.0[..end])?.to_owned())
    }

    /// Decode for read paths that must keep rendering.
    ///
    /// A corrupted (non-UTF-8) payload yields the empty string and a
    /// diagnostic log instead of an error, so one bad field never takes
    /// down a whole listing.
    pub fn decode_text_lossy(&self) -> String {
        match self.decode_text() {
            Ok(text) => text,
            Err(err) => {
                tracing::debug!(value = %self, error = %err, "substituting empty string for undecodable bytes32");
                String::new()
            }
        }
    }
}

impl FromStr for Bytes32 {
    type Err = Bytes32Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .ok_or(Bytes32Error::MissingPrefix)?;
        if hex.len() != Self::LEN * 2 {
            return Err(Bytes32Error::BadLength(hex.len()));
        }

        let mut bytes = [0u8; Self::LEN];
        for (i, pair) in hex.as_bytes().chunks_exact(2).enumerate() {
            let hi = hex_digit(pair[0]).ok_or(Bytes32Error::BadHex)?;
            let lo = hex_digit(pair[1]).ok_or(Bytes32Error::BadHex)?;
            bytes[i] = (hi << 4) | lo;
        }
        Ok(Self(bytes))
    }
}

impl fmt::Display for Bytes32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x")?;
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Bytes32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bytes32({self})")
    }
}

impl Serialize for Bytes32 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Bytes32 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn encode_decode_round_trip() {
        let encoded = Bytes32::encode_text("Reentrancy bug").unwrap();
        assert_eq!(encoded.decode_text().unwrap(), "Reentrancy bug");
    }

    #[test]
    fn round_trip_preserves_multibyte_text() {
        // 15 two-byte codepoints plus one ASCII byte: exactly 31 bytes.
        let text = format!("{}a", "é".repeat(15));
        assert_eq!(text.len(), MAX_TEXT_BYTES);
        let encoded = Bytes32::encode_text(&text).unwrap();
        assert_eq!(encoded.decode_text().unwrap(), text);
    }

    #[test]
    fn empty_string_is_rejected() {
        assert_matches!(Bytes32::encode_text(""), Err(EncodeError::Empty));
    }

    #[test]
    fn oversized_text_is_rejected_not_truncated() {
        let text = "a".repeat(MAX_TEXT_BYTES + 1);
        assert_matches!(
            Bytes32::encode_text(&text),
            Err(EncodeError::TooLong { len: 32 })
        );
    }

    #[test]
    fn thirty_one_bytes_is_the_exact_limit() {
        let text = "a".repeat(MAX_TEXT_BYTES);
        let encoded = Bytes32::encode_text(&text).unwrap();
        assert_eq!(encoded.decode_text().unwrap(), text);
    }

    #[test]
    fn all_zero_value_decodes_to_empty_string() {
        assert_eq!(Bytes32::ZERO.decode_text().unwrap(), "");
    }

    #[test]
    fn non_utf8_payload_fails_decode() {
        let mut raw = [0u8; 32];
        raw[0] = 0xff;
        raw[1] = 0xfe;
        let value = Bytes32::from_bytes(raw);
        assert_matches!(value.decode_text(), Err(DecodeError::NotUtf8(_)));
    }

    #[test]
    fn lossy_decode_substitutes_empty_string() {
        let mut raw = [0u8; 32];
        raw[0] = 0xff;
        let value = Bytes32::from_bytes(raw);
        assert_eq!(value.decode_text_lossy(), "");
    }

    #[test]
    fn encoded_text_is_left_aligned_and_zero_padded() {
        let encoded = Bytes32::encode_text("hi").unwrap();
        let bytes = encoded.as_bytes();
        assert_eq!(&bytes[..2], b"hi");
        assert!(bytes[2..].iter().all(|&b| b == 0));
    }

    #[test]
    fn hex_parse_and_display_round_trip() {
        let encoded = Bytes32::encode_text("hi").unwrap();
        let hex = encoded.to_string();
        assert!(hex.starts_with("0x6869"));
        assert_eq!(hex.len(), 2 + 64);
        let parsed: Bytes32 = hex.parse().unwrap();
        assert_eq!(parsed, encoded);
    }

    #[test]
    fn malformed_hex_is_rejected() {
        assert_matches!("6869".parse::<Bytes32>(), Err(Bytes32Error::MissingPrefix));
        assert_matches!("0x6869".parse::<Bytes32>(), Err(Bytes32Error::BadLength(4)));
        let bad = format!("0x{}", "zz".repeat(32));
        assert_matches!(bad.parse::<Bytes32>(), Err(Bytes32Error::BadHex));
    }
}
