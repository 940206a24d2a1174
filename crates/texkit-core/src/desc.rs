//! Texture shape description and addressing types.
//!
//! [`TextureDesc`] is the "header" of a texture: everything needed to compute
//! its byte layout. It is validated once, by
//! [`Texture::try_create_with`](crate::Texture::try_create_with).
//!
//! # Shape Rules
//!
//! | Type | height | depth | layers | faces |
//! |------|--------|-------|--------|-------|
//! | `Texture1D` | 1 | 1 | 1 | 1 |
//! | `Texture1DArray` | 1 | 1 | any | 1 |
//! | `Texture2D` | any | 1 | 1 | 1 |
//! | `Texture2DArray` | any | 1 | any | 1 |
//! | `Texture3D` | any | any | 1 | 1 |
//! | `CubeMap` | = width | 1 | 1 | 6 |
//! | `CubeMapArray` | = width | 1 | any | 6 |
//!
//! Every dimension, `levels` and `layers` must be at least 1.
//!
//! # Usage
//!
//! ```rust
//! use texkit_core::{PixelFormat, TextureDesc, TextureType};
//!
//! let desc = TextureDesc::new_2d(PixelFormat::Rgba8Unorm, 256, 256).with_levels(9);
//! assert_eq!(desc.ty, TextureType::Texture2D);
//! assert!(desc.validate().is_ok());
//!
//! let bad = TextureDesc::new_cube(PixelFormat::Rgba8Unorm, 64).with_height(32);
//! assert!(bad.validate().is_err());
//! ```

use crate::error::{Error, Result};
use std::fmt;
use texkit_format::PixelFormat;

/// Texture dimensionality.
///
/// The discriminant is the serialized value. [`TextureType::None`] is only
/// reported by the null texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u32)]
pub enum TextureType {
    /// Type of the null texture.
    #[default]
    None = 0,
    /// One-dimensional.
    Texture1D,
    /// Array of one-dimensional layers.
    Texture1DArray,
    /// Two-dimensional.
    Texture2D,
    /// Array of two-dimensional layers.
    Texture2DArray,
    /// Three-dimensional (volume).
    Texture3D,
    /// Six square faces.
    CubeMap,
    /// Array of cube maps.
    CubeMapArray,
}

impl TextureType {
    /// Returns the type with the given serialized value.
    pub fn from_u32(value: u32) -> Option<Self> {
        Some(match value {
            0 => Self::None,
            1 => Self::Texture1D,
            2 => Self::Texture1DArray,
            3 => Self::Texture2D,
            4 => Self::Texture2DArray,
            5 => Self::Texture3D,
            6 => Self::CubeMap,
            7 => Self::CubeMapArray,
            _ => return None,
        })
    }

    /// Number of faces per layer: 6 for the cube map family, else 1.
    #[inline]
    pub const fn faces(self) -> u32 {
        match self {
            Self::CubeMap | Self::CubeMapArray => 6,
            _ => 1,
        }
    }

    /// Whether this is `CubeMap` or `CubeMapArray`.
    #[inline]
    pub const fn is_cubemap(self) -> bool {
        matches!(self, Self::CubeMap | Self::CubeMapArray)
    }

    /// Whether this type allows more than one layer.
    #[inline]
    pub const fn is_array(self) -> bool {
        matches!(
            self,
            Self::Texture1DArray | Self::Texture2DArray | Self::CubeMapArray
        )
    }
}

impl fmt::Display for TextureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Row alignment of texel lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Alignment {
    /// Lines are tightly packed.
    #[default]
    Byte,
    /// Lines are padded to a multiple of 4 bytes.
    Word,
}

impl Alignment {
    /// Alignment in bytes.
    #[inline]
    pub const fn bytes(self) -> usize {
        match self {
            Self::Byte => 1,
            Self::Word => 4,
        }
    }

    /// Rounds `n` up to this alignment.
    #[inline]
    pub const fn align(self, n: usize) -> usize {
        n.next_multiple_of(self.bytes())
    }
}

/// Texel coordinates within one image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    /// Column
    pub x: u32,
    /// Row
    pub y: u32,
    /// Slice (3D textures only)
    pub z: u32,
}

impl Position {
    /// Creates a position.
    #[inline]
    pub const fn new(x: u32, y: u32, z: u32) -> Self {
        Self { x, y, z }
    }

    /// Creates a position in the first slice.
    #[inline]
    pub const fn xy(x: u32, y: u32) -> Self {
        Self::new(x, y, 0)
    }
}

impl From<(u32, u32)> for Position {
    fn from((x, y): (u32, u32)) -> Self {
        Self::xy(x, y)
    }
}

impl From<(u32, u32, u32)> for Position {
    fn from((x, y, z): (u32, u32, u32)) -> Self {
        Self::new(x, y, z)
    }
}

/// Selects one image of a texture: cube face, mip level and array layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Index {
    /// Cube face, `0..6`; always 0 for other types
    pub side: u32,
    /// Mip level
    pub level: u32,
    /// Array layer
    pub layer: u32,
}

impl Index {
    /// Creates an index.
    #[inline]
    pub const fn new(side: u32, level: u32, layer: u32) -> Self {
        Self { side, level, layer }
    }

    /// Index of `level` on face 0, layer 0.
    #[inline]
    pub const fn level(level: u32) -> Self {
        Self::new(0, level, 0)
    }

    /// Returns this index with `side` replaced.
    #[inline]
    pub const fn with_side(self, side: u32) -> Self {
        Self { side, ..self }
    }

    /// Returns this index with `layer` replaced.
    #[inline]
    pub const fn with_layer(self, layer: u32) -> Self {
        Self { layer, ..self }
    }
}

/// Width, height and depth of one level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size {
    /// Width in texels
    pub width: u32,
    /// Height in texels
    pub height: u32,
    /// Depth in texels
    pub depth: u32,
}

impl Size {
    /// Creates a size.
    #[inline]
    pub const fn new(width: u32, height: u32, depth: u32) -> Self {
        Self {
            width,
            height,
            depth,
        }
    }

    /// Size of mip level `level`: each dimension halved `level` times, at least 1.
    #[inline]
    pub const fn mip(self, level: u32) -> Self {
        const fn shrink(v: u32, level: u32) -> u32 {
            if level >= u32::BITS {
                1
            } else {
                let s = v >> level;
                if s == 0 { 1 } else { s }
            }
        }
        Self::new(
            shrink(self.width, level),
            shrink(self.height, level),
            shrink(self.depth, level),
        )
    }

    /// Whether all dimensions are 1.
    #[inline]
    pub const fn is_unit(self) -> bool {
        self.width == 1 && self.height == 1 && self.depth == 1
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}x{}", self.width, self.height, self.depth)
    }
}

/// Parameters of a texture to create.
///
/// Fields are public; the `new_*` constructors fill in the defaults of each
/// type and the `with_*` setters adjust single fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextureDesc {
    /// Dimensionality
    pub ty: TextureType,
    /// Storage format
    pub format: PixelFormat,
    /// Width of level 0
    pub width: u32,
    /// Height of level 0
    pub height: u32,
    /// Depth of level 0
    pub depth: u32,
    /// Array length
    pub layers: u32,
    /// Requested mip count; the created texture may hold fewer
    pub levels: u32,
    /// Line alignment
    pub alignment: Alignment,
}

impl Default for TextureDesc {
    fn default() -> Self {
        Self {
            ty: TextureType::Texture2D,
            format: PixelFormat::Invalid,
            width: 1,
            height: 1,
            depth: 1,
            layers: 1,
            levels: 1,
            alignment: Alignment::Byte,
        }
    }
}

impl TextureDesc {
    /// Creates a description with one level and one layer.
    pub fn new(ty: TextureType, format: PixelFormat, width: u32, height: u32, depth: u32) -> Self {
        Self {
            ty,
            format,
            width,
            height,
            depth,
            ..Self::default()
        }
    }

    /// One-dimensional texture.
    pub fn new_1d(format: PixelFormat, width: u32) -> Self {
        Self::new(TextureType::Texture1D, format, width, 1, 1)
    }

    /// Two-dimensional texture.
    pub fn new_2d(format: PixelFormat, width: u32, height: u32) -> Self {
        Self::new(TextureType::Texture2D, format, width, height, 1)
    }

    /// Array of two-dimensional layers.
    pub fn new_2d_array(format: PixelFormat, width: u32, height: u32, layers: u32) -> Self {
        Self::new(TextureType::Texture2DArray, format, width, height, 1).with_layers(layers)
    }

    /// Volume texture.
    pub fn new_3d(format: PixelFormat, width: u32, height: u32, depth: u32) -> Self {
        Self::new(TextureType::Texture3D, format, width, height, depth)
    }

    /// Cube map with square faces of `size`.
    pub fn new_cube(format: PixelFormat, size: u32) -> Self {
        Self::new(TextureType::CubeMap, format, size, size, 1)
    }

    /// Returns this description with `format` replaced.
    pub fn with_format(mut self, format: PixelFormat) -> Self {
        self.format = format;
        self
    }

    /// Returns this description with `height` replaced.
    pub fn with_height(mut self, height: u32) -> Self {
        self.height = height;
        self
    }

    /// Returns this description with `levels` replaced.
    pub fn with_levels(mut self, levels: u32) -> Self {
        self.levels = levels;
        self
    }

    /// Returns this description with `layers` replaced.
    pub fn with_layers(mut self, layers: u32) -> Self {
        self.layers = layers;
        self
    }

    /// Returns this description with `alignment` replaced.
    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Size of level 0.
    #[inline]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height, self.depth)
    }

    /// Number of faces per layer.
    #[inline]
    pub fn faces(&self) -> u32 {
        self.ty.faces()
    }

    /// Checks the format and the shape rules of [`ty`](Self::ty).
    pub fn validate(&self) -> Result<()> {
        if self.format.is_invalid() {
            return Err(Error::invalid_parameters("format is Invalid"));
        }
        if self.width == 0 || self.height == 0 || self.depth == 0 {
            return Err(Error::invalid_parameters(format!(
                "zero dimension {}",
                self.size()
            )));
        }
        if self.levels == 0 {
            return Err(Error::invalid_parameters("levels must be at least 1"));
        }
        if self.layers == 0 {
            return Err(Error::invalid_parameters("layers must be at least 1"));
        }

        let one = |v: u32, what: &str| {
            if v == 1 {
                Ok(())
            } else {
                Err(Error::invalid_parameters(format!(
                    "{} requires {what} 1, got {v}",
                    self.ty
                )))
            }
        };

        match self.ty {
            TextureType::None => return Err(Error::invalid_parameters("texture type is None")),
            TextureType::Texture1D => {
                one(self.height, "height")?;
                one(self.depth, "depth")?;
                one(self.layers, "layers")?;
            }
            TextureType::Texture1DArray => {
                one(self.height, "height")?;
                one(self.depth, "depth")?;
            }
            TextureType::Texture2D => {
                one(self.depth, "depth")?;
                one(self.layers, "layers")?;
            }
            TextureType::Texture2DArray => one(self.depth, "depth")?,
            TextureType::Texture3D => one(self.layers, "layers")?,
            TextureType::CubeMap | TextureType::CubeMapArray => {
                if self.width != self.height {
                    return Err(Error::invalid_parameters(format!(
                        "{} faces must be square, got {}x{}",
                        self.ty, self.width, self.height
                    )));
                }
                one(self.depth, "depth")?;
                if self.ty == TextureType::CubeMap {
                    one(self.layers, "layers")?;
                }
            }
        }
        Ok(())
    }
}
