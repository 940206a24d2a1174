//! Backend (OpenGL) format codes.
//!
//! Every [`FormatDescriptor`](crate::FormatDescriptor) carries the
//! `(internal format, pixel format, pixel type)` triple an OpenGL upload would
//! use. The engine never interprets these values; they are looked up by GPU
//! helpers and mapped back with
//! [`FormatDescriptor::find_by_backend_code`](crate::FormatDescriptor::find_by_backend_code).
//!
//! Compressed formats only have an internal format; their pixel format and
//! type are zero.

/// OpenGL enumerant triple for one pixel format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BackendCode {
    /// Sized internal format (`GL_RGBA8`, `GL_COMPRESSED_RGBA_BPTC_UNORM`, ...).
    pub internal_format: u32,
    /// Client pixel format (`GL_RGBA`, `GL_BGRA`, ...), zero when compressed.
    pub format: u32,
    /// Client pixel type (`GL_UNSIGNED_BYTE`, ...), zero when compressed.
    pub ty: u32,
}

impl BackendCode {
    /// The all-zero code of [`PixelFormat::Invalid`](crate::PixelFormat::Invalid).
    pub const NONE: Self = Self::new(0, 0, 0);

    /// Creates a code triple.
    pub const fn new(internal_format: u32, format: u32, ty: u32) -> Self {
        Self {
            internal_format,
            format,
            ty,
        }
    }

    /// Creates a code for a compressed internal format.
    pub const fn compressed(internal_format: u32) -> Self {
        Self::new(internal_format, 0, 0)
    }
}

/// OpenGL enumerant values used by the descriptor table.
#[allow(missing_docs)]
pub mod gl {
    // Pixel formats
    pub const ALPHA: u32 = 0x1906;
    pub const RGB: u32 = 0x1907;
    pub const RGBA: u32 = 0x1908;
    pub const LUMINANCE: u32 = 0x1909;
    pub const LUMINANCE_ALPHA: u32 = 0x190A;
    pub const RED: u32 = 0x1903;
    pub const RG: u32 = 0x8227;
    pub const BGR: u32 = 0x80E0;
    pub const BGRA: u32 = 0x80E1;
    pub const RED_INTEGER: u32 = 0x8D94;
    pub const RG_INTEGER: u32 = 0x8228;
    pub const RGBA_INTEGER: u32 = 0x8D99;

    // Pixel types
    pub const BYTE: u32 = 0x1400;
    pub const UNSIGNED_BYTE: u32 = 0x1401;
    pub const SHORT: u32 = 0x1402;
    pub const UNSIGNED_SHORT: u32 = 0x1403;
    pub const INT: u32 = 0x1404;
    pub const UNSIGNED_INT: u32 = 0x1405;
    pub const FLOAT: u32 = 0x1406;
    pub const HALF_FLOAT: u32 = 0x140B;
    pub const UNSIGNED_SHORT_5_6_5: u32 = 0x8363;
    pub const UNSIGNED_SHORT_4_4_4_4_REV: u32 = 0x8365;
    pub const UNSIGNED_SHORT_1_5_5_5_REV: u32 = 0x8366;
    pub const UNSIGNED_INT_2_10_10_10_REV: u32 = 0x8368;
    pub const UNSIGNED_INT_10F_11F_11F_REV: u32 = 0x8C3B;
    pub const UNSIGNED_INT_5_9_9_9_REV: u32 = 0x8C3E;

    // Sized internal formats
    pub const ALPHA8: u32 = 0x803C;
    pub const LUMINANCE8: u32 = 0x8040;
    pub const LUMINANCE8_ALPHA8: u32 = 0x8045;
    pub const R8: u32 = 0x8229;
    pub const R8_SNORM: u32 = 0x8F94;
    pub const R8UI: u32 = 0x8232;
    pub const R8I: u32 = 0x8231;
    pub const RG8: u32 = 0x822B;
    pub const RG8_SNORM: u32 = 0x8F95;
    pub const RG8UI: u32 = 0x8238;
    pub const RG8I: u32 = 0x8237;
    pub const RGB8: u32 = 0x8051;
    pub const RGB8_SNORM: u32 = 0x8F96;
    pub const RGBA8: u32 = 0x8058;
    pub const RGBA8_SNORM: u32 = 0x8F97;
    pub const RGBA8UI: u32 = 0x8D7C;
    pub const RGBA8I: u32 = 0x8D8E;
    pub const SRGB8: u32 = 0x8C41;
    pub const SRGB8_ALPHA8: u32 = 0x8C43;
    pub const RGB565: u32 = 0x8D62;
    pub const RGBA4: u32 = 0x8056;
    pub const RGB5_A1: u32 = 0x8057;
    pub const RGB10_A2: u32 = 0x8059;
    pub const R16: u32 = 0x822A;
    pub const R16_SNORM: u32 = 0x8F98;
    pub const R16UI: u32 = 0x8234;
    pub const R16I: u32 = 0x8233;
    pub const R16F: u32 = 0x822D;
    pub const RG16: u32 = 0x822C;
    pub const RG16_SNORM: u32 = 0x8F99;
    pub const RG16F: u32 = 0x822F;
    pub const RGBA16: u32 = 0x805B;
    pub const RGBA16_SNORM: u32 = 0x8F9B;
    pub const RGBA16UI: u32 = 0x8D76;
    pub const RGBA16I: u32 = 0x8D88;
    pub const RGBA16F: u32 = 0x881A;
    pub const R32UI: u32 = 0x8236;
    pub const R32I: u32 = 0x8235;
    pub const R32F: u32 = 0x822E;
    pub const RG32F: u32 = 0x8230;
    pub const RGB32F: u32 = 0x8815;
    pub const RGBA32UI: u32 = 0x8D70;
    pub const RGBA32I: u32 = 0x8D82;
    pub const RGBA32F: u32 = 0x8814;
    pub const R11F_G11F_B10F: u32 = 0x8C3A;
    pub const RGB9_E5: u32 = 0x8C3D;

    // S3TC / RGTC / BPTC
    pub const COMPRESSED_RGB_S3TC_DXT1: u32 = 0x83F0;
    pub const COMPRESSED_RGBA_S3TC_DXT1: u32 = 0x83F1;
    pub const COMPRESSED_RGBA_S3TC_DXT3: u32 = 0x83F2;
    pub const COMPRESSED_RGBA_S3TC_DXT5: u32 = 0x83F3;
    pub const COMPRESSED_SRGB_ALPHA_S3TC_DXT1: u32 = 0x8C4D;
    pub const COMPRESSED_SRGB_ALPHA_S3TC_DXT3: u32 = 0x8C4E;
    pub const COMPRESSED_SRGB_ALPHA_S3TC_DXT5: u32 = 0x8C4F;
    pub const COMPRESSED_RED_RGTC1: u32 = 0x8DBB;
    pub const COMPRESSED_SIGNED_RED_RGTC1: u32 = 0x8DBC;
    pub const COMPRESSED_RG_RGTC2: u32 = 0x8DBD;
    pub const COMPRESSED_SIGNED_RG_RGTC2: u32 = 0x8DBE;
    pub const COMPRESSED_RGBA_BPTC_UNORM: u32 = 0x8E8C;
    pub const COMPRESSED_SRGB_ALPHA_BPTC_UNORM: u32 = 0x8E8D;
    pub const COMPRESSED_RGB_BPTC_SIGNED_FLOAT: u32 = 0x8E8E;
    pub const COMPRESSED_RGB_BPTC_UNSIGNED_FLOAT: u32 = 0x8E8F;

    // ETC / EAC
    pub const ETC1_RGB8: u32 = 0x8D64;
    pub const COMPRESSED_R11_EAC: u32 = 0x9270;
    pub const COMPRESSED_SIGNED_R11_EAC: u32 = 0x9271;
    pub const COMPRESSED_RG11_EAC: u32 = 0x9272;
    pub const COMPRESSED_SIGNED_RG11_EAC: u32 = 0x9273;
    pub const COMPRESSED_RGB8_ETC2: u32 = 0x9274;
    pub const COMPRESSED_SRGB8_ETC2: u32 = 0x9275;
    pub const COMPRESSED_RGB8_PUNCHTHROUGH_ALPHA1_ETC2: u32 = 0x9276;
    pub const COMPRESSED_RGBA8_ETC2_EAC: u32 = 0x9278;
    pub const COMPRESSED_SRGB8_ALPHA8_ETC2_EAC: u32 = 0x9279;

    // ASTC
    pub const COMPRESSED_RGBA_ASTC_4X4: u32 = 0x93B0;
    pub const COMPRESSED_RGBA_ASTC_5X5: u32 = 0x93B2;
    pub const COMPRESSED_RGBA_ASTC_6X6: u32 = 0x93B4;
    pub const COMPRESSED_RGBA_ASTC_8X8: u32 = 0x93B7;
    pub const COMPRESSED_RGBA_ASTC_10X10: u32 = 0x93BB;
    pub const COMPRESSED_RGBA_ASTC_12X12: u32 = 0x93BD;
    pub const COMPRESSED_SRGB8_ALPHA8_ASTC_4X4: u32 = 0x93D0;
    pub const COMPRESSED_SRGB8_ALPHA8_ASTC_8X8: u32 = 0x93D7;

    // PVRTC
    pub const COMPRESSED_RGB_PVRTC_4BPPV1: u32 = 0x8C00;
    pub const COMPRESSED_RGB_PVRTC_2BPPV1: u32 = 0x8C01;
    pub const COMPRESSED_RGBA_PVRTC_4BPPV1: u32 = 0x8C02;
    pub const COMPRESSED_RGBA_PVRTC_2BPPV1: u32 = 0x8C03;
}
