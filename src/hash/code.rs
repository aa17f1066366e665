//! Hash value type.

use bytes::Bytes;
use std::fmt;

/// An immutable hash value of any width.
///
/// Produced by the bundled processors; cheap to clone since the bytes are
/// reference counted.
///
/// # Example
///
/// ```
/// use streamhash::HashCode;
///
/// let code = HashCode::from_hex("0123456789abcdef").unwrap();
/// assert_eq!(code.bits(), 64);
/// assert_eq!(code.to_string(), "0123456789abcdef");
/// assert_eq!(code.padded_to_u64(), 0xefcd_ab89_6745_2301);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HashCode(Bytes);

impl HashCode {
    /// Creates a hash code from raw bytes.
    pub fn new(bytes: impl Into<Bytes>) -> Self {
        Self(bytes.into())
    }

    /// Creates a hash code by copying a slice.
    pub fn from_slice(slice: &[u8]) -> Self {
        Self(Bytes::copy_from_slice(slice))
    }

    /// Returns the hash bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Returns the width in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true for a zero-width hash.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the width in bits.
    pub fn bits(&self) -> usize {
        self.0.len() * 8
    }

    /// Reads the first eight bytes as a little-endian `u64`.
    ///
    /// Shorter codes are zero-extended.
    pub fn padded_to_u64(&self) -> u64 {
        let mut buf = [0u8; 8];
        let n = self.0.len().min(8);
        buf[..n].copy_from_slice(&self.0[..n]);
        u64::from_le_bytes(buf)
    }

    /// Returns the hash as a lowercase hex string.
    pub fn to_hex(&self) -> String {
        const HEX: &[u8; 16] = b"0123456789abcdef";
        let mut result = String::with_capacity(self.0.len() * 2);
        for byte in self.0.iter() {
            result.push(HEX[(byte >> 4) as usize] as char);
            result.push(HEX[(byte & 0xf) as usize] as char);
        }
        result
    }

    /// Parses a hex string.
    ///
    /// Returns `None` for an empty or odd-length string or a non-hex digit.
    pub fn from_hex(hex_str: &str) -> Option<Self> {
        if hex_str.is_empty() || hex_str.len() % 2 != 0 || !hex_str.is_ascii() {
            return None;
        }
        let bytes = (0..hex_str.len())
            .step_by(2)
            .map(|i| u8::from_str_radix(&hex_str[i..i + 2], 16).ok())
            .collect::<Option<Vec<u8>>>()?;
        Some(Self(Bytes::from(bytes)))
    }
}

impl AsRef<[u8]> for HashCode {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for HashCode {
    fn from(bytes: Vec<u8>) -> Self {
        Self(Bytes::from(bytes))
    }
}

impl<const N: usize> From<[u8; N]> for HashCode {
    fn from(bytes: [u8; N]) -> Self {
        Self::from_slice(&bytes)
    }
}

impl fmt::Display for HashCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0.iter() {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}
