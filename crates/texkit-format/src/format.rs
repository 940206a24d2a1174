//! Pixel format enumeration and numeric classification.
//!
//! # Naming
//!
//! Uncompressed formats are named by channel order in *memory* for byte-sized
//! channels (`Bgra8Unorm` stores blue first) and by bit position from the
//! least significant bit for packed formats (`Bgr565Unorm` keeps blue in bits
//! 0-4), matching the Direct3D naming used by most container formats.
//!
//! Multi-byte channels are little-endian.

use crate::descriptor::FormatDescriptor;
use std::fmt;

/// Numeric classification of a [`PixelFormat`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FormatClass {
    /// Not a valid format.
    #[default]
    Invalid,
    /// Unsigned integer read as `[0.0, 1.0]`.
    Unorm,
    /// Signed integer read as `[-1.0, 1.0]`.
    Snorm,
    /// Unsigned integer, unnormalized.
    Uint,
    /// Signed integer, unnormalized.
    Sint,
    /// Floating point.
    Float,
    /// sRGB-encoded unsigned normalized.
    Srgb,
    /// Block-compressed, opaque to the engine.
    Compressed,
}

impl FormatClass {
    /// Short name for display.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Invalid => "invalid",
            Self::Unorm => "unorm",
            Self::Snorm => "snorm",
            Self::Uint => "uint",
            Self::Sint => "sint",
            Self::Float => "float",
            Self::Srgb => "srgb",
            Self::Compressed => "compressed",
        }
    }
}

impl fmt::Display for FormatClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Concrete texel storage format.
///
/// The discriminant is the format's ordinal and its index into the descriptor
/// table. Ordinal `0` is [`PixelFormat::Invalid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u32)]
pub enum PixelFormat {
    /// No format.
    #[default]
    Invalid = 0,

    // 8-bit channels
    /// Alpha only, 8-bit.
    A8Unorm,
    /// Luminance, 8-bit.
    L8Unorm,
    /// Luminance and alpha, 8-bit each.
    La8Unorm,
    /// Red, 8-bit.
    R8Unorm,
    /// Red, 8-bit signed normalized.
    R8Snorm,
    /// Red, 8-bit unsigned integer.
    R8Uint,
    /// Red, 8-bit signed integer.
    R8Sint,
    /// Red-green, 8-bit.
    Rg8Unorm,
    /// Red-green, 8-bit signed normalized.
    Rg8Snorm,
    /// Red-green, 8-bit unsigned integer.
    Rg8Uint,
    /// Red-green, 8-bit signed integer.
    Rg8Sint,
    /// RGB, 8-bit.
    Rgb8Unorm,
    /// RGB, 8-bit signed normalized.
    Rgb8Snorm,
    /// BGR, 8-bit.
    Bgr8Unorm,
    /// RGBA, 8-bit.
    Rgba8Unorm,
    /// RGBA, 8-bit signed normalized.
    Rgba8Snorm,
    /// RGBA, 8-bit unsigned integer.
    Rgba8Uint,
    /// RGBA, 8-bit signed integer.
    Rgba8Sint,
    /// BGRA, 8-bit.
    Bgra8Unorm,
    /// BGR with an unused fourth byte, 8-bit.
    Bgrx8Unorm,
    /// sRGB, 8-bit.
    Rgb8Srgb,
    /// sRGB with linear alpha, 8-bit.
    Rgba8Srgb,
    /// sRGB BGRA with linear alpha, 8-bit.
    Bgra8Srgb,

    // Packed
    /// 16-bit packed: blue 5, green 6, red 5.
    Bgr565Unorm,
    /// 16-bit packed: blue 4, green 4, red 4, alpha 4.
    Bgra4Unorm,
    /// 16-bit packed: blue 5, green 5, red 5, alpha 1.
    Bgr5a1Unorm,
    /// 32-bit packed: red 10, green 10, blue 10, alpha 2.
    Rgb10a2Unorm,
    /// 32-bit packed: blue 10, green 10, red 10, alpha 2.
    Bgr10a2Unorm,

    // 16-bit channels
    /// Red, 16-bit.
    R16Unorm,
    /// Red, 16-bit signed normalized.
    R16Snorm,
    /// Red, 16-bit unsigned integer.
    R16Uint,
    /// Red, 16-bit signed integer.
    R16Sint,
    /// Red, half float.
    R16Float,
    /// Red-green, 16-bit.
    Rg16Unorm,
    /// Red-green, 16-bit signed normalized.
    Rg16Snorm,
    /// Red-green, half float.
    Rg16Float,
    /// RGBA, 16-bit.
    Rgba16Unorm,
    /// RGBA, 16-bit signed normalized.
    Rgba16Snorm,
    /// RGBA, 16-bit unsigned integer.
    Rgba16Uint,
    /// RGBA, 16-bit signed integer.
    Rgba16Sint,
    /// RGBA, half float.
    Rgba16Float,

    // 32-bit channels
    /// Red, 32-bit unsigned integer.
    R32Uint,
    /// Red, 32-bit signed integer.
    R32Sint,
    /// Red, float.
    R32Float,
    /// Red-green, float.
    Rg32Float,
    /// RGB, float.
    Rgb32Float,
    /// RGBA, 32-bit unsigned integer.
    Rgba32Uint,
    /// RGBA, 32-bit signed integer.
    Rgba32Sint,
    /// RGBA, float.
    Rgba32Float,

    // Packed float
    /// 32-bit packed unsigned floats: red 11, green 11, blue 10.
    Rg11b10Float,
    /// 32-bit shared-exponent RGB: 9-bit mantissas, 5-bit exponent.
    Rgb9e5Float,

    // BC (S3TC / RGTC / BPTC)
    /// BC1 (DXT1), RGB.
    Bc1RgbUnorm,
    /// BC1 (DXT1), RGB with 1-bit alpha.
    Bc1RgbaUnorm,
    /// BC1 (DXT1), sRGB with 1-bit alpha.
    Bc1RgbaSrgb,
    /// BC2 (DXT3), RGBA.
    Bc2RgbaUnorm,
    /// BC2 (DXT3), sRGB with alpha.
    Bc2RgbaSrgb,
    /// BC3 (DXT5), RGBA.
    Bc3RgbaUnorm,
    /// BC3 (DXT5), sRGB with alpha.
    Bc3RgbaSrgb,
    /// BC4, red.
    Bc4RUnorm,
    /// BC4, red signed.
    Bc4RSnorm,
    /// BC5, red-green.
    Bc5RgUnorm,
    /// BC5, red-green signed.
    Bc5RgSnorm,
    /// BC6H, unsigned half float RGB.
    Bc6hRgbUfloat,
    /// BC6H, signed half float RGB.
    Bc6hRgbSfloat,
    /// BC7, RGBA.
    Bc7RgbaUnorm,
    /// BC7, sRGB with alpha.
    Bc7RgbaSrgb,

    // ETC / EAC
    /// ETC1, RGB.
    Etc1RgbUnorm,
    /// ETC2, RGB.
    Etc2RgbUnorm,
    /// ETC2, sRGB.
    Etc2RgbSrgb,
    /// ETC2, RGB with punch-through alpha.
    Etc2Rgba1Unorm,
    /// ETC2 + EAC alpha, RGBA.
    Etc2RgbaUnorm,
    /// ETC2 + EAC alpha, sRGB with alpha.
    Etc2RgbaSrgb,
    /// EAC, red 11-bit.
    EacR11Unorm,
    /// EAC, red 11-bit signed.
    EacR11Snorm,
    /// EAC, red-green 11-bit.
    EacRg11Unorm,
    /// EAC, red-green 11-bit signed.
    EacRg11Snorm,

    // ASTC
    /// ASTC 4x4, RGBA.
    Astc4x4Unorm,
    /// ASTC 5x5, RGBA.
    Astc5x5Unorm,
    /// ASTC 6x6, RGBA.
    Astc6x6Unorm,
    /// ASTC 8x8, RGBA.
    Astc8x8Unorm,
    /// ASTC 10x10, RGBA.
    Astc10x10Unorm,
    /// ASTC 12x12, RGBA.
    Astc12x12Unorm,
    /// ASTC 4x4, sRGB with alpha.
    Astc4x4Srgb,
    /// ASTC 8x8, sRGB with alpha.
    Astc8x8Srgb,

    // PVRTC
    /// PVRTC1 4 bpp, RGB.
    Pvrtc1Rgb4Unorm,
    /// PVRTC1 4 bpp, RGBA.
    Pvrtc1Rgba4Unorm,
    /// PVRTC1 2 bpp, RGB.
    Pvrtc1Rgb2Unorm,
    /// PVRTC1 2 bpp, RGBA.
    Pvrtc1Rgba2Unorm,
}

impl PixelFormat {
    /// Number of formats, [`PixelFormat::Invalid`] included.
    pub const COUNT: usize = PixelFormat::Pvrtc1Rgba2Unorm as usize + 1;

    /// Returns the format with the given ordinal, or `None` if out of range.
    ///
    /// ```rust
    /// use texkit_format::PixelFormat;
    ///
    /// assert_eq!(PixelFormat::from_u32(0), Some(PixelFormat::Invalid));
    /// let ordinal = PixelFormat::Rgba8Unorm as u32;
    /// assert_eq!(PixelFormat::from_u32(ordinal), Some(PixelFormat::Rgba8Unorm));
    /// assert_eq!(PixelFormat::from_u32(100_000), None);
    /// ```
    pub fn from_u32(ordinal: u32) -> Option<Self> {
        FormatDescriptor::all()
            .get(ordinal as usize)
            .map(FormatDescriptor::format)
    }

    /// Returns the format's ordinal.
    #[inline]
    pub const fn ordinal(self) -> u32 {
        self as u32
    }

    /// Returns the storage descriptor for this format.
    #[inline]
    pub fn descriptor(self) -> &'static FormatDescriptor {
        FormatDescriptor::lookup(self)
    }

    /// Whether this is [`PixelFormat::Invalid`].
    #[inline]
    pub const fn is_invalid(self) -> bool {
        matches!(self, Self::Invalid)
    }

    /// Whether this is a block-compressed format.
    #[inline]
    pub fn is_compressed(self) -> bool {
        self.descriptor().is_compressed()
    }
}

impl fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl From<PixelFormat> for u32 {
    fn from(format: PixelFormat) -> Self {
        format.ordinal()
    }
}
