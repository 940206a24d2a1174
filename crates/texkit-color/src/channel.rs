//! Scalar channel representations and the channel conversion function.
//!
//! # Types
//!
//! - [`Channel`] - Trait implemented by every scalar a texel channel can be
//!   stored as
//! - [`ChannelKind`] - Numeric classification of a channel type
//!
//! # Conversion
//!
//! [`convert_channel`] is a total function. Out-of-range input is clamped,
//! never rejected:
//!
//! | Source  | Destination | Rule |
//! |---------|-------------|------|
//! | integer | float       | `value / MAX` (`value / -MIN` for negatives), unrounded |
//! | float   | integer     | clamp to `[0, 1]` or `[-1, 1]`, scale, round to nearest |
//! | integer | integer     | exact ratio of maxima (minima for negatives), truncated |
//! | float   | float       | value passes through, rounded to destination precision |
//!
//! Negative values of a signed channel are scaled by `|MIN|` and positive ones
//! by `MAX`, so both ends of a signed range map onto exactly `-1.0` and `+1.0`
//! and convert back to the original integer.
//!
//! Integer to integer conversion of unsigned channels widens by the ratio of
//! the maxima. For 8 to 16 bits that ratio is `257`, which replicates the byte:
//!
//! ```rust
//! use texkit_color::convert_channel;
//!
//! assert_eq!(convert_channel::<u16, u8>(0x7f), 0x7f7f);
//! assert_eq!(convert_channel::<i16, i8>(0x7f), 0x7fff);
//! assert_eq!(convert_channel::<u8, u16>(0x7f7f), 0x7f);
//! ```

use half::f16;
use std::fmt;

/// Numeric classification of a [`Channel`] type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChannelKind {
    /// Unsigned integer, normalized to `[0.0, 1.0]`.
    Unsigned,
    /// Signed integer, normalized to `[-1.0, 1.0]`.
    Signed,
    /// IEEE 754 floating point, unnormalized.
    Float,
}

/// A scalar texel channel representation.
///
/// Implemented for `u8`, `i8`, `u16`, `i16`, `u32`, `i32`, [`f16`] and `f32`.
///
/// Integer types report their numeric range through [`MIN`](Channel::MIN) and
/// [`MAX`](Channel::MAX); float types report `-1` and `1`, the normalized
/// range they are clamped to when converted into a signed integer channel.
pub trait Channel: Copy + Default + PartialEq + fmt::Debug + Send + Sync + 'static {
    /// Storage width in bits.
    const BITS: u32;

    /// Numeric classification.
    const KIND: ChannelKind;

    /// Smallest representable integer value (`-1` for floats).
    const MIN: i64;

    /// Largest representable integer value (`1` for floats).
    const MAX: i64;

    /// Returns the value as an integer (truncated for floats).
    fn to_i64(self) -> i64;

    /// Creates a value from an integer, saturating at the type bounds.
    fn from_i64(v: i64) -> Self;

    /// Returns the value as a double.
    fn to_f64(self) -> f64;

    /// Creates a value from a double (nearest for floats, saturating for integers).
    fn from_f64(v: f64) -> Self;

    /// Raw bit pattern, zero-extended to 64 bits.
    fn to_bits(self) -> u64;

    /// Whether this is a floating-point channel.
    #[inline]
    fn is_float() -> bool {
        Self::KIND == ChannelKind::Float
    }

    /// Whether this channel can hold negative values.
    #[inline]
    fn is_signed() -> bool {
        Self::KIND != ChannelKind::Unsigned
    }
}

macro_rules! impl_int_channel {
    ($ty:ty, $bits_ty:ty, $kind:expr) => {
        impl Channel for $ty {
            const BITS: u32 = <$ty>::BITS;
            const KIND: ChannelKind = $kind;
            const MIN: i64 = <$ty>::MIN as i64;
            const MAX: i64 = <$ty>::MAX as i64;

            #[inline]
            fn to_i64(self) -> i64 {
                self as i64
            }

            #[inline]
            fn from_i64(v: i64) -> Self {
                v.clamp(<Self as Channel>::MIN, <Self as Channel>::MAX) as $ty
            }

            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }

            #[inline]
            fn from_f64(v: f64) -> Self {
                // `as` saturates and maps NaN to zero.
                v as $ty
            }

            #[inline]
            fn to_bits(self) -> u64 {
                self as $bits_ty as u64
            }
        }
    };
}

impl_int_channel!(u8, u8, ChannelKind::Unsigned);
impl_int_channel!(i8, u8, ChannelKind::Signed);
impl_int_channel!(u16, u16, ChannelKind::Unsigned);
impl_int_channel!(i16, u16, ChannelKind::Signed);
impl_int_channel!(u32, u32, ChannelKind::Unsigned);
impl_int_channel!(i32, u32, ChannelKind::Signed);

impl Channel for f16 {
    const BITS: u32 = 16;
    const KIND: ChannelKind = ChannelKind::Float;
    const MIN: i64 = -1;
    const MAX: i64 = 1;

    #[inline]
    fn to_i64(self) -> i64 {
        f16::to_f64(self) as i64
    }

    #[inline]
    fn from_i64(v: i64) -> Self {
        f16::from_f64(v as f64)
    }

    #[inline]
    fn to_f64(self) -> f64 {
        f16::to_f64(self)
    }

    #[inline]
    fn from_f64(v: f64) -> Self {
        f16::from_f64(v)
    }

    #[inline]
    fn to_bits(self) -> u64 {
        f16::to_bits(self) as u64
    }
}

impl Channel for f32 {
    const BITS: u32 = 32;
    const KIND: ChannelKind = ChannelKind::Float;
    const MIN: i64 = -1;
    const MAX: i64 = 1;

    #[inline]
    fn to_i64(self) -> i64 {
        self as i64
    }

    #[inline]
    fn from_i64(v: i64) -> Self {
        v as f32
    }

    #[inline]
    fn to_f64(self) -> f64 {
        self as f64
    }

    #[inline]
    fn from_f64(v: f64) -> Self {
        v as f32
    }

    #[inline]
    fn to_bits(self) -> u64 {
        f32::to_bits(self) as u64
    }
}

/// Converts one channel value from `Src` to `Dst`.
///
/// See the [module documentation](self) for the rules. The conversion never
/// fails; values outside the destination range are clamped, and NaN converts
/// to zero in integer destinations.
///
/// # Example
///
/// ```rust
/// use texkit_color::{convert_channel, f16};
///
/// assert_eq!(convert_channel::<u8, f32>(0.5), 128);
/// assert_eq!(convert_channel::<u8, f32>(-3.0), 0);
/// assert_eq!(convert_channel::<i8, f32>(-1.0), -128);
/// assert_eq!(convert_channel::<f32, i16>(i16::MIN), -1.0);
/// assert_eq!(convert_channel::<f16, f32>(2.5), f16::from_f32(2.5));
/// ```
#[inline]
pub fn convert_channel<Dst: Channel, Src: Channel>(value: Src) -> Dst {
    match (Src::is_float(), Dst::is_float()) {
        (false, false) => {
            let v = value.to_i64() as i128;
            let out = if v >= 0 {
                v * Dst::MAX as i128 / Src::MAX as i128
            } else if Dst::is_signed() {
                v * Dst::MIN as i128 / Src::MIN as i128
            } else {
                0
            };
            Dst::from_i64(out as i64)
        }
        (false, true) => {
            let v = value.to_i64() as f64;
            let norm = if v >= 0.0 {
                v / Src::MAX as f64
            } else {
                -(v / Src::MIN as f64)
            };
            Dst::from_f64(norm)
        }
        (true, false) => {
            let lo = if Dst::is_signed() { -1.0 } else { 0.0 };
            let v = value.to_f64().clamp(lo, 1.0);
            let scaled = if v >= 0.0 {
                (v * Dst::MAX as f64).round()
            } else {
                (-v * Dst::MIN as f64).round()
            };
            Dst::from_f64(scaled)
        }
        (true, true) => Dst::from_f64(value.to_f64()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_ranges() {
        assert_eq!(<u8 as Channel>::MAX, 255);
        assert_eq!(<i8 as Channel>::MIN, -128);
        assert_eq!(<u32 as Channel>::MAX, u32::MAX as i64);
        assert_eq!(<f16 as Channel>::KIND, ChannelKind::Float);
        assert!(<i16 as Channel>::is_signed());
        assert!(!<u16 as Channel>::is_signed());
    }

    #[test]
    fn test_int_to_float() {
        assert_eq!(convert_channel::<f32, u8>(0), 0.0);
        assert_eq!(convert_channel::<f32, u8>(255), 1.0);
        assert_eq!(convert_channel::<f32, i8>(127), 1.0);
        assert_eq!(convert_channel::<f32, i8>(-128), -1.0);
        assert_eq!(convert_channel::<f16, u16>(65535), f16::ONE);
        approx::assert_abs_diff_eq!(convert_channel::<f32, u8>(51), 0.2, epsilon = 1e-6);
    }

    #[test]
    fn test_float_to_int_rounds_and_clamps() {
        assert_eq!(convert_channel::<u8, f32>(0.5), 128);
        assert_eq!(convert_channel::<u8, f32>(1.5), 255);
        assert_eq!(convert_channel::<u8, f32>(-0.5), 0);
        assert_eq!(convert_channel::<i8, f32>(-2.0), -128);
        assert_eq!(convert_channel::<i16, f32>(1.0), i16::MAX);
        assert_eq!(convert_channel::<u16, f32>(f32::NAN), 0);
        assert_eq!(convert_channel::<u32, f32>(1.0), u32::MAX);
    }

    #[test]
    fn test_int_to_int_policy() {
        // Unsigned widening replicates bytes (ratio of maxima is 257).
        assert_eq!(convert_channel::<u16, u8>(0x7f), 0x7f7f);
        assert_eq!(convert_channel::<u16, u8>(0xff), 0xffff);
        assert_eq!(convert_channel::<u32, u8>(0x80), 0x8080_8080);
        // Signed widening maps MAX onto MAX.
        assert_eq!(convert_channel::<i16, i8>(0x7f), 0x7fff);
        assert_eq!(convert_channel::<i16, i8>(-128), i16::MIN);
        // Narrowing truncates.
        assert_eq!(convert_channel::<u8, u16>(0x7f7f), 0x7f);
        assert_eq!(convert_channel::<u8, u16>(0x7f7e), 0x7e);
        // Signed into unsigned drops negatives.
        assert_eq!(convert_channel::<u8, i8>(-5), 0);
        assert_eq!(convert_channel::<u8, i8>(127), 255);
    }

    #[test]
    fn test_float_to_float_is_unclamped() {
        assert_eq!(convert_channel::<f32, f32>(4.25), 4.25);
        assert_eq!(convert_channel::<f32, f16>(f16::from_f32(-3.5)), -3.5);
        assert_eq!(convert_channel::<f16, f32>(1.0e6), f16::INFINITY);
    }

    #[test]
    fn test_bits() {
        assert_eq!((-1i8).to_bits(), 0xff);
        assert_eq!((-1i32).to_bits(), 0xffff_ffff);
        assert_eq!(1.0f32.to_bits(), 0x3f80_0000);
        assert_eq!(<f16 as Channel>::to_bits(f16::ONE), 0x3c00);
    }
}
