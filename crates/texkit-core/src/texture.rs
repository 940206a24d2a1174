//! Texture handle with shared, copy-on-write storage.
//!
//! A [`Texture`] is a cheap handle to an immutable-until-detached buffer:
//!
//! - `clone()` shares the buffer (O(1), atomic reference count).
//! - Every mutable accessor first [`detach`](Texture::detach)es: if the buffer
//!   is shared it is deep-copied, so other handles never observe the write.
//! - [`copy`](Texture::copy) always deep-copies.
//!
//! The default texture is *null*: it owns no buffer, every size query returns
//! zero and every addressed access is out of bounds.
//!
//! # Example
//!
//! ```rust
//! use texkit_core::prelude::*;
//!
//! let desc = TextureDesc::new_2d(PixelFormat::Rgba8Unorm, 8, 8).with_levels(10);
//! let a = Texture::create_with(&desc);
//! assert_eq!(a.levels(), 4); // 8, 4, 2, 1
//!
//! let mut b = a.clone();
//! assert!(!b.is_detached());
//! b.image_data_mut(Index::level(1)).unwrap().fill(0xff);
//! assert!(b.is_detached());
//! assert_ne!(a, b);
//! ```

use crate::desc::{Alignment, Index, Position, Size, TextureDesc, TextureType};
use crate::error::{Error, Result};
use crate::layout::{self, LevelLayout};
use std::fmt;
use std::ops::Range;
use std::sync::Arc;
use texkit_format::{FormatDescriptor, PixelFormat};
use tracing::{debug, trace, warn};

/// Shared payload: shape, level table and bytes.
#[derive(Debug)]
pub(crate) struct TextureData {
    pub desc: TextureDesc,
    pub levels: Vec<LevelLayout>,
    pub bytes: Vec<u8>,
}

impl TextureData {
    /// Images per level: `faces * layers`.
    #[inline]
    pub fn images(&self) -> usize {
        self.desc.faces() as usize * self.desc.layers as usize
    }

    /// Deep copy that reports allocation failure instead of aborting.
    fn try_clone(&self) -> Result<Self> {
        let mut bytes = reserve(self.bytes.len())?;
        bytes.extend_from_slice(&self.bytes);
        Ok(Self {
            desc: self.desc,
            levels: self.levels.clone(),
            bytes,
        })
    }
}

/// Empty buffer with room for exactly `len` bytes.
fn reserve(len: usize) -> Result<Vec<u8>> {
    if allocation_refused() {
        return Err(Error::allocation_failed(len, "allocation refused"));
    }
    let mut bytes = Vec::new();
    bytes
        .try_reserve_exact(len)
        .map_err(|e| Error::allocation_failed(len, e.to_string()))?;
    Ok(bytes)
}

#[cfg(not(test))]
#[inline]
fn allocation_refused() -> bool {
    false
}

#[cfg(test)]
thread_local! {
    static REFUSE_ALLOCATION: std::cell::Cell<bool> = const { std::cell::Cell::new(false) };
}

#[cfg(test)]
fn allocation_refused() -> bool {
    REFUSE_ALLOCATION.with(std::cell::Cell::get)
}

/// Mipmapped, layered texel storage.
///
/// See the [module docs](self) for the sharing model.
#[derive(Clone, Default)]
pub struct Texture {
    pub(crate) d: Option<Arc<TextureData>>,
}

impl Texture {
    /// The null texture.
    #[inline]
    pub const fn null() -> Self {
        Self { d: None }
    }

    /// Creates a texture, validating the shape and allocating a zeroed buffer.
    ///
    /// The level count is truncated after the first `1x1x1` level.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidParameters`] if `desc` breaks a shape rule
    /// - [`Error::AllocationFailed`] if the size overflows or memory runs out
    pub fn try_create_with(desc: &TextureDesc) -> Result<Self> {
        desc.validate()?;
        let layout = layout::compute(desc)?;

        let mut bytes = reserve(layout.total)?;
        bytes.resize(layout.total, 0);
        Ok(Self::assemble(desc, layout, bytes))
    }

    /// Wraps an already filled buffer, which must match the layout of `desc`.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidParameters`] if `desc` breaks a shape rule
    /// - [`Error::DecodeMismatch`] if `bytes` has the wrong length
    pub(crate) fn from_parts(desc: &TextureDesc, bytes: Vec<u8>) -> Result<Self> {
        desc.validate()?;
        let layout = layout::compute(desc)?;
        if layout.total != bytes.len() {
            return Err(Error::decode_mismatch(layout.total, bytes.len()));
        }
        Ok(Self::assemble(desc, layout, bytes))
    }

    fn assemble(desc: &TextureDesc, layout: layout::Layout, bytes: Vec<u8>) -> Self {
        let desc = TextureDesc {
            levels: layout.levels.len() as u32,
            ..*desc
        };
        debug!(
            ty = %desc.ty,
            format = %desc.format,
            size = %desc.size(),
            layers = desc.layers,
            levels = desc.levels,
            bytes = layout.total,
            "created texture"
        );

        Self {
            d: Some(Arc::new(TextureData {
                desc,
                levels: layout.levels,
                bytes,
            })),
        }
    }

    /// Creates a texture, or a null texture if creation fails.
    ///
    /// The failure is logged; use [`try_create_with`](Self::try_create_with)
    /// to get the error.
    pub fn create_with(desc: &TextureDesc) -> Self {
        Self::try_create_with(desc).unwrap_or_else(|e| {
            warn!(error = %e, ?desc, "texture creation failed");
            Self::null()
        })
    }

    /// Positional form of [`create_with`](Self::create_with).
    #[allow(clippy::too_many_arguments)]
    pub fn create(
        ty: TextureType,
        format: PixelFormat,
        width: u32,
        height: u32,
        depth: u32,
        layers: u32,
        levels: u32,
        alignment: Alignment,
    ) -> Self {
        Self::create_with(&TextureDesc {
            ty,
            format,
            width,
            height,
            depth,
            layers,
            levels,
            alignment,
        })
    }

    /// Deep copy into a freshly allocated buffer, regardless of sharing.
    ///
    /// Copying the null texture yields the null texture.
    pub fn try_copy(&self) -> Result<Self> {
        match &self.d {
            None => Ok(Self::null()),
            Some(d) => {
                trace!(bytes = d.bytes.len(), "deep copy");
                Ok(Self {
                    d: Some(Arc::new(d.try_clone()?)),
                })
            }
        }
    }

    /// Deep copy, or a null texture if the allocation fails.
    pub fn copy(&self) -> Self {
        self.try_copy().unwrap_or_else(|e| {
            warn!(error = %e, "texture copy failed");
            Self::null()
        })
    }

    /// Makes this handle the sole owner of its buffer, copying if shared.
    ///
    /// Idempotent. If the copy cannot be allocated, this handle becomes null
    /// and the error is returned; other handles are unaffected.
    pub fn detach(&mut self) -> Result<()> {
        let Some(d) = &self.d else {
            return Ok(());
        };
        if Arc::strong_count(d) == 1 {
            return Ok(());
        }
        trace!(
            shares = Arc::strong_count(d),
            bytes = d.bytes.len(),
            "detaching shared texture"
        );
        match d.try_clone() {
            Ok(copy) => {
                self.d = Some(Arc::new(copy));
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "detach failed, texture is now null");
                self.d = None;
                Err(e)
            }
        }
    }

    /// Whether this handle exclusively owns its buffer. Null reports `false`.
    #[inline]
    pub fn is_detached(&self) -> bool {
        self.d.as_ref().is_some_and(|d| Arc::strong_count(d) == 1)
    }

    /// Resets this handle to null, releasing its share of the buffer.
    #[inline]
    pub fn reset(&mut self) {
        self.d = None;
    }

    // ------------------------------------------------------------------
    // Introspection
    // ------------------------------------------------------------------

    /// Whether this is the null texture.
    #[inline]
    pub fn is_null(&self) -> bool {
        self.d.is_none()
    }

    /// Shape of this texture; `levels` is the actual level count.
    ///
    /// The null texture reports a description with type
    /// [`TextureType::None`], format `Invalid` and zero dimensions.
    pub fn desc(&self) -> TextureDesc {
        match &self.d {
            Some(d) => d.desc,
            None => TextureDesc {
                ty: TextureType::None,
                format: PixelFormat::Invalid,
                width: 0,
                height: 0,
                depth: 0,
                layers: 0,
                levels: 0,
                alignment: Alignment::Byte,
            },
        }
    }

    /// Texture type.
    #[inline]
    pub fn texture_type(&self) -> TextureType {
        self.d.as_ref().map_or(TextureType::None, |d| d.desc.ty)
    }

    /// Storage format.
    #[inline]
    pub fn format(&self) -> PixelFormat {
        self.d.as_ref().map_or(PixelFormat::Invalid, |d| d.desc.format)
    }

    /// Format descriptor of [`format`](Self::format).
    #[inline]
    pub fn descriptor(&self) -> &'static FormatDescriptor {
        self.format().descriptor()
    }

    /// Line alignment.
    #[inline]
    pub fn alignment(&self) -> Alignment {
        self.d.as_ref().map_or(Alignment::Byte, |d| d.desc.alignment)
    }

    /// Width of level 0.
    #[inline]
    pub fn width(&self) -> u32 {
        self.size(0).width
    }

    /// Height of level 0.
    #[inline]
    pub fn height(&self) -> u32 {
        self.size(0).height
    }

    /// Depth of level 0.
    #[inline]
    pub fn depth(&self) -> u32 {
        self.size(0).depth
    }

    /// Dimensions of `level`; zero if the level does not exist.
    #[inline]
    pub fn size(&self, level: u32) -> Size {
        self.level(level).map_or(Size::default(), |l| l.size)
    }

    /// Width of `level`; zero if the level does not exist.
    #[inline]
    pub fn level_width(&self, level: u32) -> u32 {
        self.size(level).width
    }

    /// Height of `level`; zero if the level does not exist.
    #[inline]
    pub fn level_height(&self, level: u32) -> u32 {
        self.size(level).height
    }

    /// Depth of `level`; zero if the level does not exist.
    #[inline]
    pub fn level_depth(&self, level: u32) -> u32 {
        self.size(level).depth
    }

    /// Number of mip levels actually stored.
    #[inline]
    pub fn levels(&self) -> u32 {
        self.d.as_ref().map_or(0, |d| d.levels.len() as u32)
    }

    /// Number of array layers.
    #[inline]
    pub fn layers(&self) -> u32 {
        self.d.as_ref().map_or(0, |d| d.desc.layers)
    }

    /// Faces per layer: 6 for cube maps, 1 otherwise, 0 for null.
    #[inline]
    pub fn faces(&self) -> u32 {
        self.d.as_ref().map_or(0, |d| d.desc.faces())
    }

    /// Whether this is a cube map or cube map array.
    #[inline]
    pub fn is_cubemap(&self) -> bool {
        self.texture_type().is_cubemap()
    }

    /// Whether this is an array type.
    #[inline]
    pub fn is_array(&self) -> bool {
        self.texture_type().is_array()
    }

    /// Whether the format is block-compressed.
    #[inline]
    pub fn is_compressed(&self) -> bool {
        self.descriptor().is_compressed()
    }

    /// Total size of the buffer in bytes.
    #[inline]
    pub fn bytes(&self) -> usize {
        self.d.as_ref().map_or(0, |d| d.bytes.len())
    }

    /// Bits per texel of the format; zero for compressed formats.
    #[inline]
    pub fn bits_per_texel(&self) -> u32 {
        self.descriptor().bits_per_texel()
    }

    /// Bytes per line (or block row) of `level`, padding included.
    #[inline]
    pub fn bytes_per_line(&self, level: u32) -> usize {
        self.level(level).map_or(0, |l| l.bytes_per_line)
    }

    /// Bytes per 2D slice of `level`.
    #[inline]
    pub fn bytes_per_slice(&self, level: u32) -> usize {
        self.level(level).map_or(0, |l| l.bytes_per_slice)
    }

    /// Bytes per image (one face of one layer) of `level`.
    #[inline]
    pub fn bytes_per_image(&self, level: u32) -> usize {
        self.level(level).map_or(0, |l| l.bytes_per_image)
    }

    /// Byte offset of `level` within the buffer.
    #[inline]
    pub fn level_offset(&self, level: u32) -> usize {
        self.level(level).map_or(0, |l| l.offset)
    }

    #[inline]
    fn level(&self, level: u32) -> Option<&LevelLayout> {
        self.d.as_ref()?.levels.get(level as usize)
    }

    // ------------------------------------------------------------------
    // Addressing
    // ------------------------------------------------------------------

    /// Byte offset of the image selected by `index`.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfBounds`] if `side`, `level` or `layer` is out of range.
    pub fn offset(&self, index: Index) -> Result<usize> {
        self.check_index(index).map(|(_, start)| start)
    }

    /// Validates `index` and returns its level and image start offset.
    fn check_index(&self, index: Index) -> Result<(&LevelLayout, usize)> {
        let level = self
            .level(index.level)
            .ok_or_else(|| Error::out_of_bounds("level", index.level, self.levels()))?;
        if index.side >= self.faces() {
            return Err(Error::out_of_bounds("side", index.side, self.faces()));
        }
        if index.layer >= self.layers() {
            return Err(Error::out_of_bounds("layer", index.layer, self.layers()));
        }
        let image = self.faces() as usize * index.layer as usize + index.side as usize;
        Ok((level, level.offset + level.bytes_per_image * image))
    }

    fn image_range(&self, index: Index) -> Result<Range<usize>> {
        let (level, start) = self.check_index(index)?;
        Ok(start..start + level.bytes_per_image)
    }

    /// Byte offset of `pos` within the image and the texel (or block) size.
    fn texel_location(&self, pos: Position, index: Index) -> Result<(Range<usize>, usize)> {
        let (level, start) = self.check_index(index)?;
        let size = level.size;
        if pos.x >= size.width {
            return Err(Error::out_of_bounds("x", pos.x, size.width));
        }
        if pos.y >= size.height {
            return Err(Error::out_of_bounds("y", pos.y, size.height));
        }
        if pos.z >= size.depth {
            return Err(Error::out_of_bounds("z", pos.z, size.depth));
        }

        let format = self.descriptor();
        let (bw, bh) = format.block_extent();
        let unit = if format.is_compressed() {
            format.block_size() as usize
        } else {
            format.bytes_per_texel() as usize
        };
        let line_start = start
            + level.bytes_per_slice * pos.z as usize
            + level.bytes_per_line * (pos.y / bh) as usize;
        let x = line_start + unit * (pos.x / bw) as usize;
        Ok((x..line_start + level.bytes_per_line, unit))
    }

    fn line_range(&self, pos: Position, index: Index) -> Result<Range<usize>> {
        self.texel_location(pos, index).map(|(range, _)| range)
    }

    fn texel_range(&self, pos: Position, index: Index) -> Result<Range<usize>> {
        self.texel_location(pos, index)
            .map(|(range, unit)| range.start..range.start + unit)
    }

    // ------------------------------------------------------------------
    // Data access
    // ------------------------------------------------------------------

    /// The whole buffer; empty for the null texture.
    #[inline]
    pub fn data(&self) -> &[u8] {
        match &self.d {
            Some(d) => d.bytes.as_slice(),
            None => &[],
        }
    }

    /// The whole buffer, mutable. Detaches first.
    ///
    /// # Errors
    ///
    /// [`Error::AllocationFailed`] if detaching could not copy the buffer.
    pub fn data_mut(&mut self) -> Result<&mut [u8]> {
        self.detach()?;
        let bytes: &mut [u8] = match self.d.as_mut().and_then(Arc::get_mut) {
            Some(d) => d.bytes.as_mut_slice(),
            None => &mut [],
        };
        Ok(bytes)
    }

    fn slice_mut(&mut self, range: Range<usize>) -> Result<&mut [u8]> {
        let data = self.data_mut()?;
        let len = data.len();
        data.get_mut(range.clone())
            .ok_or_else(|| Error::out_of_bounds("byte", range.end as u32, len as u32))
    }

    /// Bytes of the image (one face of one layer of one level) at `index`.
    ///
    /// ```rust
    /// use texkit_core::prelude::*;
    ///
    /// let desc = TextureDesc::new_2d(PixelFormat::R8Unorm, 4, 4).with_levels(2);
    /// let t = Texture::create_with(&desc);
    /// assert_eq!(t.image_data(Index::level(1)).unwrap().len(), 4);
    ///
    /// let err = t.image_data(Index::new(7, 0, 0)).unwrap_err();
    /// assert!(err.is_bounds_error());
    /// ```
    pub fn image_data(&self, index: Index) -> Result<&[u8]> {
        let range = self.image_range(index)?;
        Ok(&self.data()[range])
    }

    /// Mutable bytes of the image at `index`. Checks bounds, then detaches.
    pub fn image_data_mut(&mut self, index: Index) -> Result<&mut [u8]> {
        let range = self.image_range(index)?;
        self.slice_mut(range)
    }

    /// Bytes from the texel at `pos` to the end of its line, padding included.
    ///
    /// For compressed formats `pos` is in texels and the view starts at the
    /// block containing it and runs to the end of the block row.
    pub fn line_data(&self, pos: Position, index: Index) -> Result<&[u8]> {
        let range = self.line_range(pos, index)?;
        Ok(&self.data()[range])
    }

    /// Mutable form of [`line_data`](Self::line_data). Detaches.
    pub fn line_data_mut(&mut self, pos: Position, index: Index) -> Result<&mut [u8]> {
        let range = self.line_range(pos, index)?;
        self.slice_mut(range)
    }

    /// Bytes of the single texel at `pos`, or of the block containing it.
    pub fn texel_data(&self, pos: Position, index: Index) -> Result<&[u8]> {
        let range = self.texel_range(pos, index)?;
        Ok(&self.data()[range])
    }

    /// Mutable form of [`texel_data`](Self::texel_data). Detaches.
    pub fn texel_data_mut(&mut self, pos: Position, index: Index) -> Result<&mut [u8]> {
        let range = self.texel_range(pos, index)?;
        self.slice_mut(range)
    }

    /// Raw shared payload, for sibling modules.
    #[inline]
    pub(crate) fn inner(&self) -> Option<&TextureData> {
        self.d.as_deref()
    }
}

impl PartialEq for Texture {
    /// Null equals null. A shared buffer equals itself without a byte
    /// compare. Otherwise shape is compared before bytes.
    fn eq(&self, other: &Self) -> bool {
        match (&self.d, &other.d) {
            (None, None) => true,
            (Some(a), Some(b)) => {
                if Arc::ptr_eq(a, b) {
                    return true;
                }
                let (da, db) = (&a.desc, &b.desc);
                da.ty == db.ty
                    && da.format == db.format
                    && da.width == db.width
                    && da.height == db.height
                    && da.depth == db.depth
                    && da.layers == db.layers
                    && da.levels == db.levels
                    && a.bytes == b.bytes
            }
            _ => false,
        }
    }
}

impl Eq for Texture {}

impl fmt::Debug for Texture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.d {
            None => f.write_str("Texture(null)"),
            Some(d) => f
                .debug_struct("Texture")
                .field("type", &d.desc.ty)
                .field("format", &d.desc.format)
                .field("size", &d.desc.size())
                .field("layers", &d.desc.layers)
                .field("levels", &d.levels.len())
                .field("bytes", &d.bytes.len())
                .field("shares", &Arc::strong_count(d))
                .finish(),
        }
    }
}
