//! # texkit-color
//!
//! Scalar channel and four-channel pixel conversion for texel data.
//!
//! This crate is the leaf of the texkit workspace. It knows nothing about
//! textures or pixel formats; it converts *values*:
//!
//! - [`Channel`] - Scalar channel representations (`u8`, `i8`, `u16`, `i16`,
//!   `u32`, `i32`, [`f16`], `f32`)
//! - [`convert_channel`] - Convert one channel value between representations
//! - [`Rgba`], [`convert_pixel`] - Four-channel pixels, converted per channel
//! - [`ColorVariant`] - Closed sum over the concrete pixel representations,
//!   used when a texel has to be handled without compile-time knowledge of
//!   its layout
//!
//! ## Conversion Rules
//!
//! Integer channels are *normalized*: an unsigned channel maps `[0, MAX]`
//! onto `[0.0, 1.0]`, a signed channel maps `[MIN, MAX]` onto `[-1.0, 1.0]`.
//! Float channels carry their value as-is and are only clamped when the
//! destination is an integer channel.
//!
//! ```rust
//! use texkit_color::{convert_channel, Rgba, ColorVariant};
//!
//! let f: f32 = convert_channel(255u8);
//! assert_eq!(f, 1.0);
//!
//! let wide: u16 = convert_channel(0x7fu8);
//! assert_eq!(wide, 0x7f7f);
//!
//! let color = ColorVariant::from(Rgba::<u8>::new(255, 0, 0, 255));
//! let hdr: Rgba<f32> = color.convert();
//! assert_eq!(hdr.r, 1.0);
//! ```
//!
//! ## Dependencies
//!
//! - [`half`] - `f16` channel storage
//!
//! ## Used By
//!
//! - `texkit-core` - generic texel read/write and texture format conversion

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod channel;
pub mod pixel;
pub mod variant;

pub use channel::{convert_channel, Channel, ChannelKind};
pub use half::f16;
pub use pixel::{convert_pixel, Rgba};
pub use variant::{ColorKind, ColorVariant, Representation};
