//! Storage descriptors and table queries.
//!
//! A [`FormatDescriptor`] answers "how many bytes does this format need":
//!
//! - Uncompressed formats have a nonzero [`bits_per_texel`](FormatDescriptor::bits_per_texel).
//! - Compressed formats have a nonzero [`block_size`](FormatDescriptor::block_size)
//!   in bytes, covering [`block_extent`](FormatDescriptor::block_extent) texels.
//!
//! Lookup by format is an index into a static table; reverse lookup by
//! [`BackendCode`] is a linear scan, which is fine for a once-per-upload call.

use crate::backend::BackendCode;
use crate::format::{FormatClass, PixelFormat};
use crate::table::FORMATS;

/// Storage metadata for one [`PixelFormat`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FormatDescriptor {
    format: PixelFormat,
    class: FormatClass,
    bits_per_texel: u32,
    block_size: u32,
    block_width: u32,
    block_height: u32,
    backend: BackendCode,
}

impl FormatDescriptor {
    /// The zero descriptor, stored for [`PixelFormat::Invalid`].
    pub const INVALID: Self = Self {
        format: PixelFormat::Invalid,
        class: FormatClass::Invalid,
        bits_per_texel: 0,
        block_size: 0,
        block_width: 0,
        block_height: 0,
        backend: BackendCode::NONE,
    };

    /// Descriptor of an uncompressed format.
    pub(crate) const fn texel(
        format: PixelFormat,
        class: FormatClass,
        bits_per_texel: u32,
        backend: BackendCode,
    ) -> Self {
        Self {
            format,
            class,
            bits_per_texel,
            block_size: 0,
            block_width: 1,
            block_height: 1,
            backend,
        }
    }

    /// Descriptor of a block-compressed format.
    pub(crate) const fn block(
        format: PixelFormat,
        block_size: u32,
        block_width: u32,
        block_height: u32,
        internal_format: u32,
    ) -> Self {
        Self {
            format,
            class: FormatClass::Compressed,
            bits_per_texel: 0,
            block_size,
            block_width,
            block_height,
            backend: BackendCode::compressed(internal_format),
        }
    }

    /// Returns the descriptor of `format`.
    ///
    /// [`PixelFormat::Invalid`] yields [`FormatDescriptor::INVALID`].
    #[inline]
    pub fn lookup(format: PixelFormat) -> &'static FormatDescriptor {
        &FORMATS[format as usize]
    }

    /// Returns every descriptor in ordinal order, the invalid entry first.
    #[inline]
    pub fn all() -> &'static [FormatDescriptor] {
        &FORMATS
    }

    /// Finds the descriptor whose backend code equals `code`.
    ///
    /// Returns the invalid descriptor when nothing matches; callers check
    /// `format() != PixelFormat::Invalid`.
    ///
    /// ```rust
    /// use texkit_format::{BackendCode, FormatDescriptor, PixelFormat};
    /// use texkit_format::backend::gl;
    ///
    /// let code = BackendCode::new(gl::RGBA8, gl::BGRA, gl::UNSIGNED_BYTE);
    /// assert_eq!(FormatDescriptor::find_by_backend_code(code).format(), PixelFormat::Bgra8Unorm);
    ///
    /// let unknown = BackendCode::new(1, 2, 3);
    /// assert_eq!(FormatDescriptor::find_by_backend_code(unknown).format(), PixelFormat::Invalid);
    /// ```
    pub fn find_by_backend_code(code: BackendCode) -> &'static FormatDescriptor {
        FORMATS
            .iter()
            .skip(1)
            .find(|d| d.backend == code)
            .unwrap_or(&FORMATS[0])
    }

    /// Finds the first descriptor with the given internal format, ignoring the
    /// client format and type.
    pub fn find_by_internal_format(internal_format: u32) -> &'static FormatDescriptor {
        FORMATS
            .iter()
            .skip(1)
            .find(|d| d.backend.internal_format == internal_format)
            .unwrap_or(&FORMATS[0])
    }

    /// The described format.
    #[inline]
    pub const fn format(&self) -> PixelFormat {
        self.format
    }

    /// Numeric classification.
    #[inline]
    pub const fn class(&self) -> FormatClass {
        self.class
    }

    /// Bits per texel; zero for compressed formats.
    #[inline]
    pub const fn bits_per_texel(&self) -> u32 {
        self.bits_per_texel
    }

    /// Bytes per texel, rounded up; zero for compressed formats.
    #[inline]
    pub const fn bytes_per_texel(&self) -> u32 {
        self.bits_per_texel.div_ceil(8)
    }

    /// Bytes per compressed block; zero for uncompressed formats.
    #[inline]
    pub const fn block_size(&self) -> u32 {
        self.block_size
    }

    /// Block width and height in texels; `(1, 1)` for uncompressed formats.
    #[inline]
    pub const fn block_extent(&self) -> (u32, u32) {
        (self.block_width, self.block_height)
    }

    /// Backend code triple.
    #[inline]
    pub const fn backend_code(&self) -> BackendCode {
        self.backend
    }

    /// Whether this is a block-compressed format.
    #[inline]
    pub const fn is_compressed(&self) -> bool {
        self.block_size != 0
    }

    /// Whether this is the invalid descriptor.
    #[inline]
    pub const fn is_invalid(&self) -> bool {
        matches!(self.format, PixelFormat::Invalid)
    }

    /// Whether the format stores sRGB-encoded color.
    #[inline]
    pub const fn is_srgb(&self) -> bool {
        matches!(self.class, FormatClass::Srgb)
    }
}

impl Default for FormatDescriptor {
    fn default() -> Self {
        Self::INVALID
    }
}

/// Checks the table invariants; evaluated at compile time.
pub(crate) const fn validate(table: &[FormatDescriptor]) -> bool {
    if table.len() != PixelFormat::COUNT {
        return false;
    }
    let mut i = 0;
    while i < table.len() {
        let d = &table[i];
        if d.format as usize != i {
            return false;
        }
        if i != 0 {
            // Exactly one of bits_per_texel / block_size.
            if (d.bits_per_texel == 0) == (d.block_size == 0) {
                return false;
            }
            if d.block_size != 0 && (d.block_width == 0 || d.block_height == 0) {
                return false;
            }
            if matches!(d.class, FormatClass::Invalid) {
                return false;
            }
        }
        i += 1;
    }
    true
}
