//! Four-channel pixel type.
//!
//! [`Rgba`] is the unit every [`ColorVariant`](crate::ColorVariant)
//! representation is built from. Formats with fewer channels fill the missing
//! color channels with zero and the missing alpha with the channel maximum.
//!
//! Channel order is fixed (red, green, blue, alpha). Swizzled storage orders
//! such as BGRA are resolved by whoever reads the texel bytes, not here.

use crate::channel::{convert_channel, Channel};
use std::fmt;

/// RGBA pixel with a generic channel type.
///
/// # Memory Layout
///
/// Uses `#[repr(C)]` for predictable layout: `[R, G, B, A]`
///
/// # Example
///
/// ```
/// use texkit_color::{convert_pixel, Rgba};
///
/// let px = Rgba::<u8>::new(255, 128, 0, 255);
/// let wide: Rgba<u16> = convert_pixel(px);
/// assert_eq!(wide.to_array(), [0xffff, 0x8080, 0, 0xffff]);
/// ```
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgba<T> {
    /// Red channel value.
    pub r: T,
    /// Green channel value.
    pub g: T,
    /// Blue channel value.
    pub b: T,
    /// Alpha channel value.
    pub a: T,
}

impl<T: Channel> Rgba<T> {
    /// Creates a new pixel.
    #[inline]
    pub const fn new(r: T, g: T, b: T, a: T) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a pixel with alpha set to the channel maximum.
    #[inline]
    pub fn opaque(r: T, g: T, b: T) -> Self {
        Self::new(r, g, b, Self::one())
    }

    /// Creates a pixel from an array `[R, G, B, A]`.
    #[inline]
    pub fn from_array(arr: [T; 4]) -> Self {
        Self::new(arr[0], arr[1], arr[2], arr[3])
    }

    /// Returns the channels as an array `[R, G, B, A]`.
    #[inline]
    pub fn to_array(self) -> [T; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Applies a function to each channel.
    #[inline]
    pub fn map<U: Channel, F: Fn(T) -> U>(self, f: F) -> Rgba<U> {
        Rgba::new(f(self.r), f(self.g), f(self.b), f(self.a))
    }

    /// Raw bit patterns of all four channels.
    #[inline]
    pub fn bits(self) -> [u64; 4] {
        [
            self.r.to_bits(),
            self.g.to_bits(),
            self.b.to_bits(),
            self.a.to_bits(),
        ]
    }

    /// Channel maximum: `MAX` for integers, `1.0` for floats.
    #[inline]
    fn one() -> T {
        if T::is_float() {
            T::from_f64(1.0)
        } else {
            T::from_i64(T::MAX)
        }
    }
}

impl<T: Channel + fmt::Display> fmt::Display for Rgba<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RGBA({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// Converts a pixel channel by channel with [`convert_channel`].
///
/// Channel identity is preserved: red stays red, alpha stays alpha.
#[inline]
pub fn convert_pixel<Dst: Channel, Src: Channel>(pixel: Rgba<Src>) -> Rgba<Dst> {
    pixel.map(convert_channel::<Dst, Src>)
}
