//! # texkit-format
//!
//! Pixel format enumeration and the static table describing how each format
//! is stored.
//!
//! - [`PixelFormat`] - Every concrete storage format (uncompressed and
//!   block-compressed)
//! - [`FormatClass`] - Numeric classification of a format
//! - [`FormatDescriptor`] - Storage metadata: bits per texel, or block size and
//!   block extent for compressed formats
//! - [`BackendCode`] - Opaque OpenGL enumerant triple carried per format for
//!   upload helpers
//!
//! ## Table Invariants
//!
//! The descriptor table holds exactly one entry per [`PixelFormat`], stored at
//! the format's ordinal, and every entry other than [`PixelFormat::Invalid`]
//! has exactly one of `bits_per_texel` / `block_size` set. Both are checked by
//! a `const` assertion, so a malformed table does not compile.
//!
//! ```rust
//! use texkit_format::{FormatClass, FormatDescriptor, PixelFormat};
//!
//! let d = FormatDescriptor::lookup(PixelFormat::Bc1RgbaUnorm);
//! assert!(d.is_compressed());
//! assert_eq!(d.block_size(), 8);
//! assert_eq!(d.block_extent(), (4, 4));
//!
//! let d = PixelFormat::Rgba16Float.descriptor();
//! assert_eq!(d.bits_per_texel(), 64);
//! assert_eq!(d.class(), FormatClass::Float);
//! ```
//!
//! ## Used By
//!
//! - `texkit-core` - texture layout computation and texel codecs
//! - file-format codecs and viewers (capability enumeration via
//!   [`FormatDescriptor::all`])

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod backend;
pub mod descriptor;
pub mod format;
mod table;

pub use backend::BackendCode;
pub use descriptor::FormatDescriptor;
pub use format::{FormatClass, PixelFormat};
