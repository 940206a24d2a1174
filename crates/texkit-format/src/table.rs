//! The format descriptor table.
//!
//! One entry per [`PixelFormat`], at the format's ordinal. The `const`
//! assertion at the bottom rejects a table that breaks that rule.

use crate::backend::{gl, BackendCode};
use crate::descriptor::{validate, FormatDescriptor};
use crate::format::{FormatClass::*, PixelFormat as F};

const fn texel(
    format: F,
    class: crate::FormatClass,
    bits: u32,
    internal: u32,
    fmt: u32,
    ty: u32,
) -> FormatDescriptor {
    FormatDescriptor::texel(format, class, bits, BackendCode::new(internal, fmt, ty))
}

pub(crate) static FORMATS: [FormatDescriptor; F::COUNT] = TABLE;

#[rustfmt::skip]
const TABLE: [FormatDescriptor; F::COUNT] = [
    FormatDescriptor::INVALID,
    texel(F::A8Unorm, Unorm, 8, gl::ALPHA8, gl::ALPHA, gl::UNSIGNED_BYTE),
    texel(F::L8Unorm, Unorm, 8, gl::LUMINANCE8, gl::LUMINANCE, gl::UNSIGNED_BYTE),
    texel(F::La8Unorm, Unorm, 16, gl::LUMINANCE8_ALPHA8, gl::LUMINANCE_ALPHA, gl::UNSIGNED_BYTE),
    texel(F::R8Unorm, Unorm, 8, gl::R8, gl::RED, gl::UNSIGNED_BYTE),
    texel(F::R8Snorm, Snorm, 8, gl::R8_SNORM, gl::RED, gl::BYTE),
    texel(F::R8Uint, Uint, 8, gl::R8UI, gl::RED_INTEGER, gl::UNSIGNED_BYTE),
    texel(F::R8Sint, Sint, 8, gl::R8I, gl::RED_INTEGER, gl::BYTE),
    texel(F::Rg8Unorm, Unorm, 16, gl::RG8, gl::RG, gl::UNSIGNED_BYTE),
    texel(F::Rg8Snorm, Snorm, 16, gl::RG8_SNORM, gl::RG, gl::BYTE),
    texel(F::Rg8Uint, Uint, 16, gl::RG8UI, gl::RG_INTEGER, gl::UNSIGNED_BYTE),
    texel(F::Rg8Sint, Sint, 16, gl::RG8I, gl::RG_INTEGER, gl::BYTE),
    texel(F::Rgb8Unorm, Unorm, 24, gl::RGB8, gl::RGB, gl::UNSIGNED_BYTE),
    texel(F::Rgb8Snorm, Snorm, 24, gl::RGB8_SNORM, gl::RGB, gl::BYTE),
    texel(F::Bgr8Unorm, Unorm, 24, gl::RGB8, gl::BGR, gl::UNSIGNED_BYTE),
    texel(F::Rgba8Unorm, Unorm, 32, gl::RGBA8, gl::RGBA, gl::UNSIGNED_BYTE),
    texel(F::Rgba8Snorm, Snorm, 32, gl::RGBA8_SNORM, gl::RGBA, gl::BYTE),
    texel(F::Rgba8Uint, Uint, 32, gl::RGBA8UI, gl::RGBA_INTEGER, gl::UNSIGNED_BYTE),
    texel(F::Rgba8Sint, Sint, 32, gl::RGBA8I, gl::RGBA_INTEGER, gl::BYTE),
    texel(F::Bgra8Unorm, Unorm, 32, gl::RGBA8, gl::BGRA, gl::UNSIGNED_BYTE),
    texel(F::Bgrx8Unorm, Unorm, 32, gl::RGB8, gl::BGRA, gl::UNSIGNED_BYTE),
    texel(F::Rgb8Srgb, Srgb, 24, gl::SRGB8, gl::RGB, gl::UNSIGNED_BYTE),
    texel(F::Rgba8Srgb, Srgb, 32, gl::SRGB8_ALPHA8, gl::RGBA, gl::UNSIGNED_BYTE),
    texel(F::Bgra8Srgb, Srgb, 32, gl::SRGB8_ALPHA8, gl::BGRA, gl::UNSIGNED_BYTE),
    texel(F::Bgr565Unorm, Unorm, 16, gl::RGB565, gl::RGB, gl::UNSIGNED_SHORT_5_6_5),
    texel(F::Bgra4Unorm, Unorm, 16, gl::RGBA4, gl::BGRA, gl::UNSIGNED_SHORT_4_4_4_4_REV),
    texel(F::Bgr5a1Unorm, Unorm, 16, gl::RGB5_A1, gl::BGRA, gl::UNSIGNED_SHORT_1_5_5_5_REV),
    texel(F::Rgb10a2Unorm, Unorm, 32, gl::RGB10_A2, gl::RGBA, gl::UNSIGNED_INT_2_10_10_10_REV),
    texel(F::Bgr10a2Unorm, Unorm, 32, gl::RGB10_A2, gl::BGRA, gl::UNSIGNED_INT_2_10_10_10_REV),
    texel(F::R16Unorm, Unorm, 16, gl::R16, gl::RED, gl::UNSIGNED_SHORT),
    texel(F::R16Snorm, Snorm, 16, gl::R16_SNORM, gl::RED, gl::SHORT),
    texel(F::R16Uint, Uint, 16, gl::R16UI, gl::RED_INTEGER, gl::UNSIGNED_SHORT),
    texel(F::R16Sint, Sint, 16, gl::R16I, gl::RED_INTEGER, gl::SHORT),
    texel(F::R16Float, Float, 16, gl::R16F, gl::RED, gl::HALF_FLOAT),
    texel(F::Rg16Unorm, Unorm, 32, gl::RG16, gl::RG, gl::UNSIGNED_SHORT),
    texel(F::Rg16Snorm, Snorm, 32, gl::RG16_SNORM, gl::RG, gl::SHORT),
    texel(F::Rg16Float, Float, 32, gl::RG16F, gl::RG, gl::HALF_FLOAT),
    texel(F::Rgba16Unorm, Unorm, 64, gl::RGBA16, gl::RGBA, gl::UNSIGNED_SHORT),
    texel(F::Rgba16Snorm, Snorm, 64, gl::RGBA16_SNORM, gl::RGBA, gl::SHORT),
    texel(F::Rgba16Uint, Uint, 64, gl::RGBA16UI, gl::RGBA_INTEGER, gl::UNSIGNED_SHORT),
    texel(F::Rgba16Sint, Sint, 64, gl::RGBA16I, gl::RGBA_INTEGER, gl::SHORT),
    texel(F::Rgba16Float, Float, 64, gl::RGBA16F, gl::RGBA, gl::HALF_FLOAT),
    texel(F::R32Uint, Uint, 32, gl::R32UI, gl::RED_INTEGER, gl::UNSIGNED_INT),
    texel(F::R32Sint, Sint, 32, gl::R32I, gl::RED_INTEGER, gl::INT),
    texel(F::R32Float, Float, 32, gl::R32F, gl::RED, gl::FLOAT),
    texel(F::Rg32Float, Float, 64, gl::RG32F, gl::RG, gl::FLOAT),
    texel(F::Rgb32Float, Float, 96, gl::RGB32F, gl::RGB, gl::FLOAT),
    texel(F::Rgba32Uint, Uint, 128, gl::RGBA32UI, gl::RGBA_INTEGER, gl::UNSIGNED_INT),
    texel(F::Rgba32Sint, Sint, 128, gl::RGBA32I, gl::RGBA_INTEGER, gl::INT),
    texel(F::Rgba32Float, Float, 128, gl::RGBA32F, gl::RGBA, gl::FLOAT),
    texel(F::Rg11b10Float, Float, 32, gl::R11F_G11F_B10F, gl::RGB,
        gl::UNSIGNED_INT_10F_11F_11F_REV),
    texel(F::Rgb9e5Float, Float, 32, gl::RGB9_E5, gl::RGB, gl::UNSIGNED_INT_5_9_9_9_REV),
    // Block-compressed: (block bytes, block width, block height)
    FormatDescriptor::block(F::Bc1RgbUnorm, 8, 4, 4, gl::COMPRESSED_RGB_S3TC_DXT1),
    FormatDescriptor::block(F::Bc1RgbaUnorm, 8, 4, 4, gl::COMPRESSED_RGBA_S3TC_DXT1),
    FormatDescriptor::block(F::Bc1RgbaSrgb, 8, 4, 4, gl::COMPRESSED_SRGB_ALPHA_S3TC_DXT1),
    FormatDescriptor::block(F::Bc2RgbaUnorm, 16, 4, 4, gl::COMPRESSED_RGBA_S3TC_DXT3),
    FormatDescriptor::block(F::Bc2RgbaSrgb, 16, 4, 4, gl::COMPRESSED_SRGB_ALPHA_S3TC_DXT3),
    FormatDescriptor::block(F::Bc3RgbaUnorm, 16, 4, 4, gl::COMPRESSED_RGBA_S3TC_DXT5),
    FormatDescriptor::block(F::Bc3RgbaSrgb, 16, 4, 4, gl::COMPRESSED_SRGB_ALPHA_S3TC_DXT5),
    FormatDescriptor::block(F::Bc4RUnorm, 8, 4, 4, gl::COMPRESSED_RED_RGTC1),
    FormatDescriptor::block(F::Bc4RSnorm, 8, 4, 4, gl::COMPRESSED_SIGNED_RED_RGTC1),
    FormatDescriptor::block(F::Bc5RgUnorm, 16, 4, 4, gl::COMPRESSED_RG_RGTC2),
    FormatDescriptor::block(F::Bc5RgSnorm, 16, 4, 4, gl::COMPRESSED_SIGNED_RG_RGTC2),
    FormatDescriptor::block(F::Bc6hRgbUfloat, 16, 4, 4, gl::COMPRESSED_RGB_BPTC_UNSIGNED_FLOAT),
    FormatDescriptor::block(F::Bc6hRgbSfloat, 16, 4, 4, gl::COMPRESSED_RGB_BPTC_SIGNED_FLOAT),
    FormatDescriptor::block(F::Bc7RgbaUnorm, 16, 4, 4, gl::COMPRESSED_RGBA_BPTC_UNORM),
    FormatDescriptor::block(F::Bc7RgbaSrgb, 16, 4, 4, gl::COMPRESSED_SRGB_ALPHA_BPTC_UNORM),
    FormatDescriptor::block(F::Etc1RgbUnorm, 8, 4, 4, gl::ETC1_RGB8),
    FormatDescriptor::block(F::Etc2RgbUnorm, 8, 4, 4, gl::COMPRESSED_RGB8_ETC2),
    FormatDescriptor::block(F::Etc2RgbSrgb, 8, 4, 4, gl::COMPRESSED_SRGB8_ETC2),
    FormatDescriptor::block(F::Etc2Rgba1Unorm, 8, 4, 4,
        gl::COMPRESSED_RGB8_PUNCHTHROUGH_ALPHA1_ETC2),
    FormatDescriptor::block(F::Etc2RgbaUnorm, 16, 4, 4, gl::COMPRESSED_RGBA8_ETC2_EAC),
    FormatDescriptor::block(F::Etc2RgbaSrgb, 16, 4, 4, gl::COMPRESSED_SRGB8_ALPHA8_ETC2_EAC),
    FormatDescriptor::block(F::EacR11Unorm, 8, 4, 4, gl::COMPRESSED_R11_EAC),
    FormatDescriptor::block(F::EacR11Snorm, 8, 4, 4, gl::COMPRESSED_SIGNED_R11_EAC),
    FormatDescriptor::block(F::EacRg11Unorm, 16, 4, 4, gl::COMPRESSED_RG11_EAC),
    FormatDescriptor::block(F::EacRg11Snorm, 16, 4, 4, gl::COMPRESSED_SIGNED_RG11_EAC),
    FormatDescriptor::block(F::Astc4x4Unorm, 16, 4, 4, gl::COMPRESSED_RGBA_ASTC_4X4),
    FormatDescriptor::block(F::Astc5x5Unorm, 16, 5, 5, gl::COMPRESSED_RGBA_ASTC_5X5),
    FormatDescriptor::block(F::Astc6x6Unorm, 16, 6, 6, gl::COMPRESSED_RGBA_ASTC_6X6),
    FormatDescriptor::block(F::Astc8x8Unorm, 16, 8, 8, gl::COMPRESSED_RGBA_ASTC_8X8),
    FormatDescriptor::block(F::Astc10x10Unorm, 16, 10, 10, gl::COMPRESSED_RGBA_ASTC_10X10),
    FormatDescriptor::block(F::Astc12x12Unorm, 16, 12, 12, gl::COMPRESSED_RGBA_ASTC_12X12),
    FormatDescriptor::block(F::Astc4x4Srgb, 16, 4, 4, gl::COMPRESSED_SRGB8_ALPHA8_ASTC_4X4),
    FormatDescriptor::block(F::Astc8x8Srgb, 16, 8, 8, gl::COMPRESSED_SRGB8_ALPHA8_ASTC_8X8),
    FormatDescriptor::block(F::Pvrtc1Rgb4Unorm, 8, 4, 4, gl::COMPRESSED_RGB_PVRTC_4BPPV1),
    FormatDescriptor::block(F::Pvrtc1Rgba4Unorm, 8, 4, 4, gl::COMPRESSED_RGBA_PVRTC_4BPPV1),
    FormatDescriptor::block(F::Pvrtc1Rgb2Unorm, 8, 8, 4, gl::COMPRESSED_RGB_PVRTC_2BPPV1),
    FormatDescriptor::block(F::Pvrtc1Rgba2Unorm, 8, 8, 4, gl::COMPRESSED_RGBA_PVRTC_2BPPV1),
];

const _: () = assert!(validate(&TABLE), "format table is out of order or malformed");
