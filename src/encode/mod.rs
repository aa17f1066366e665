//! Little-endian encoding of fixed-width primitives.
//!
//! Every value is serialized at its natural width with the least
//! significant byte first. No sign extension or widening happens:
//!
//! | type          | bytes |
//! |---------------|-------|
//! | `u8` / `i8` / `bool` | 1 |
//! | `u16` / `i16` | 2     |
//! | `u32` / `i32` / `f32` | 4 |
//! | `u64` / `i64` / `f64` | 8 |
//!
//! ```
//! use streamhash::LittleEndian;
//!
//! assert_eq!(0x0403_0201u32.encode_le(), [0x01, 0x02, 0x03, 0x04]);
//! assert_eq!((-2i16).encode_le(), [0xFE, 0xFF]);
//! ```

/// A primitive with a fixed little-endian byte representation.
pub trait LittleEndian: Copy {
    /// Encoded width in bytes.
    const WIDTH: usize;

    /// The encoded form, always `WIDTH` bytes long.
    type Bytes: AsRef<[u8]>;

    /// Encodes `self` least significant byte first.
    fn encode_le(self) -> Self::Bytes;
}

macro_rules! impl_little_endian {
    ($($ty:ty => $width:literal),* $(,)?) => {
        $(
            impl LittleEndian for $ty {
                const WIDTH: usize = $width;
                type Bytes = [u8; $width];

                #[inline]
                fn encode_le(self) -> Self::Bytes {
                    self.to_le_bytes()
                }
            }
        )*
    };
}

impl_little_endian! {
    u8 => 1,
    i8 => 1,
    u16 => 2,
    i16 => 2,
    u32 => 4,
    i32 => 4,
    u64 => 8,
    i64 => 8,
    f32 => 4,
    f64 => 8,
}

impl LittleEndian for bool {
    const WIDTH: usize = 1;
    type Bytes = [u8; 1];

    #[inline]
    fn encode_le(self) -> Self::Bytes {
        [self as u8]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_layout() {
        assert_eq!(0x0403_0201i32.encode_le(), [1, 2, 3, 4]);
    }

    #[test]
    fn test_long_layout() {
        assert_eq!(
            0x0807_0605_0403_0201u64.encode_le(),
            [1, 2, 3, 4, 5, 6, 7, 8]
        );
    }

    #[test]
    fn test_no_sign_extension() {
        assert_eq!((-1i8).encode_le(), [0xFF]);
        assert_eq!((-1i16).encode_le(), [0xFF, 0xFF]);
        assert_eq!(i32::MIN.encode_le(), [0, 0, 0, 0x80]);
    }

    #[test]
    fn test_float_bits() {
        assert_eq!(1.0f32.encode_le(), 0x3F80_0000u32.to_le_bytes());
        assert_eq!((-0.0f64).encode_le(), [0, 0, 0, 0, 0, 0, 0, 0x80]);
    }

    #[test]
    fn test_bool() {
        assert_eq!(true.encode_le(), [1]);
        assert_eq!(false.encode_le(), [0]);
    }

    #[test]
    fn test_widths_match_encoding() {
        fn width_of<T: LittleEndian>(v: T) -> (usize, usize) {
            (T::WIDTH, v.encode_le().as_ref().len())
        }
        for (declared, actual) in [
            width_of(0u8),
            width_of(0u16),
            width_of(0u32),
            width_of(0u64),
            width_of(0f32),
            width_of(0f64),
            width_of(false),
        ] {
            assert_eq!(declared, actual);
        }
    }
}
