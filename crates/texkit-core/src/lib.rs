//! # texkit-core
//!
//! Texture storage engine: mipmapped, layered and cube map texel buffers.
//!
//! - [`Texture`] - Handle to a shared texel buffer with copy-on-write
//! - [`TextureDesc`] - Shape of a texture to create
//! - [`Index`], [`Position`] - Addressing of images and texels
//! - [`Error`] - Failure taxonomy of every fallible operation
//!
//! ## Storage Model
//!
//! A texture is a single contiguous byte buffer holding every level, layer
//! and face. Its layout is a pure function of the shape, so two textures
//! created with the same [`TextureDesc`] always have identical
//! [`bytes_per_line`](Texture::bytes_per_line),
//! [`bytes_per_image`](Texture::bytes_per_image) and level offsets.
//!
//! ```rust
//! use texkit_core::prelude::*;
//!
//! let desc = TextureDesc::new_cube(PixelFormat::Rgba8Unorm, 16).with_levels(5);
//! let mut cube = Texture::create_with(&desc);
//! assert_eq!(cube.faces(), 6);
//!
//! let face = Index::new(3, 2, 0); // side 3, level 2
//! let white = ColorVariant::from(Rgba::<u8>::new(255, 255, 255, 255));
//! cube.set_texel(Position::xy(0, 0), face, &white).unwrap();
//!
//! let bytes = cube.to_bytes().unwrap();
//! assert_eq!(Texture::from_bytes(&bytes).unwrap(), cube);
//! ```
//!
//! ## Crate Structure
//!
//! ```text
//! texkit-color (channels, pixels, ColorVariant)
//!    ^
//!    |      texkit-format (PixelFormat, descriptor table)
//!    |         ^
//!    +---------+
//!    |
//! texkit-core (this crate)
//! ```
//!
//! The public items of both dependencies are re-exported.
//!
//! ## Feature Flags
//!
//! - `parallel` - Line-parallel [`Texture::convert`] with rayon (enabled by default)
//! - `serde` - Serialization for descriptions and format enums

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod convert;
pub mod desc;
pub mod error;
pub mod io;
mod layout;
pub mod texel;
pub mod texture;

// Re-exports for convenience
pub use desc::*;
pub use error::*;
pub use texel::texel_kind;
pub use texture::Texture;

pub use texkit_color::{
    convert_channel, convert_pixel, f16, Channel, ChannelKind, ColorKind, ColorVariant,
    Representation, Rgba,
};
pub use texkit_format::{BackendCode, FormatClass, FormatDescriptor, PixelFormat};

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use texkit_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::desc::{Alignment, Index, Position, Size, TextureDesc, TextureType};
    pub use crate::error::{Error, Result};
    pub use crate::texture::Texture;
    pub use texkit_color::{convert_channel, convert_pixel, ColorKind, ColorVariant, Rgba};
    pub use texkit_format::{FormatClass, FormatDescriptor, PixelFormat};
}
