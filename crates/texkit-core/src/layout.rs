//! Per-level byte layout.
//!
//! Levels are stored back to back, level 0 first. Within a level the images
//! are ordered layer-major, face-minor:
//!
//! ```text
//! level 0: [layer 0: face 0..faces] [layer 1: face 0..faces] ...
//! level 1: ...
//! ```
//!
//! so the image `(side, level, layer)` starts at
//! `level_offset + bytes_per_image * (faces * layer + side)`.
//!
//! Compressed formats are laid out in rows of blocks: a "line" is one row of
//! blocks and a level has `ceil(height / block_height)` of them.

use crate::desc::{Alignment, Size, TextureDesc};
use crate::error::{Error, Result};
use texkit_format::FormatDescriptor;
use tracing::trace;

/// Geometry of one mip level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct LevelLayout {
    /// Level dimensions in texels.
    pub size: Size,
    /// Byte offset of the level within the buffer.
    pub offset: usize,
    /// Bytes per line (or block row), alignment padding included.
    pub bytes_per_line: usize,
    /// Number of lines (or block rows) per slice.
    pub lines: usize,
    /// `bytes_per_line * lines`.
    pub bytes_per_slice: usize,
    /// `bytes_per_slice * depth`.
    pub bytes_per_image: usize,
}

impl LevelLayout {
    /// Bytes of every image of this level: `bytes_per_image * faces * layers`.
    #[inline]
    pub fn bytes_per_level(&self, images: usize) -> usize {
        self.bytes_per_image * images
    }
}

/// Computed layout of a whole texture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Layout {
    pub levels: Vec<LevelLayout>,
    pub total: usize,
}

fn overflow() -> Error {
    Error::allocation_failed(usize::MAX, "texture size overflows usize")
}

/// Bytes of one line of `width` texels and the number of lines in `height`.
fn line_geometry(
    format: &FormatDescriptor,
    width: u32,
    height: u32,
    alignment: Alignment,
) -> Result<(usize, usize)> {
    let (bytes, lines) = if format.is_compressed() {
        let (bw, bh) = format.block_extent();
        let blocks = width.div_ceil(bw) as usize;
        let bytes = blocks
            .checked_mul(format.block_size() as usize)
            .ok_or_else(overflow)?;
        (bytes, height.div_ceil(bh) as usize)
    } else {
        let bits = (width as usize)
            .checked_mul(format.bits_per_texel() as usize)
            .ok_or_else(overflow)?;
        (bits.div_ceil(8), height as usize)
    };
    let bytes = bytes
        .checked_next_multiple_of(alignment.bytes())
        .ok_or_else(overflow)?;
    Ok((bytes, lines))
}

/// Computes the layout of `desc`, which must already be validated.
///
/// Level generation stops after the first `1x1x1` level, so the returned
/// level count may be smaller than `desc.levels`.
pub(crate) fn compute(desc: &TextureDesc) -> Result<Layout> {
    let format = desc.format.descriptor();
    let images = (desc.faces() as usize)
        .checked_mul(desc.layers as usize)
        .ok_or_else(overflow)?;

    let mut levels = Vec::new();
    let mut offset = 0usize;
    for level in 0..desc.levels {
        let size = desc.size().mip(level);
        let (bytes_per_line, lines) =
            line_geometry(format, size.width, size.height, desc.alignment)?;
        let bytes_per_slice = bytes_per_line.checked_mul(lines).ok_or_else(overflow)?;
        let bytes_per_image = bytes_per_slice
            .checked_mul(size.depth as usize)
            .ok_or_else(overflow)?;

        let entry = LevelLayout {
            size,
            offset,
            bytes_per_line,
            lines,
            bytes_per_slice,
            bytes_per_image,
        };
        trace!(level, %size, offset, bytes_per_line, bytes_per_image, "level layout");

        let level_bytes = bytes_per_image.checked_mul(images).ok_or_else(overflow)?;
        offset = offset.checked_add(level_bytes).ok_or_else(overflow)?;
        levels.push(entry);

        if size.is_unit() {
            break;
        }
    }

    // Vec<u8> cannot exceed isize::MAX bytes.
    if offset > isize::MAX as usize {
        return Err(Error::allocation_failed(offset, "exceeds isize::MAX"));
    }

    Ok(Layout {
        levels,
        total: offset,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::desc::TextureType;
    use texkit_format::PixelFormat;

    #[test]
    fn test_truncates_at_unit_level() {
        let desc = TextureDesc::new_2d(PixelFormat::Rgba8Unorm, 8, 8).with_levels(10);
        let layout = compute(&desc).unwrap();
        assert_eq!(layout.levels.len(), 4);
        let sizes: Vec<_> = layout.levels.iter().map(|l| l.size.width).collect();
        assert_eq!(sizes, [8, 4, 2, 1]);
        assert_eq!(layout.total, (64 + 16 + 4 + 1) * 4);
    }

    #[test]
    fn test_non_square_keeps_going_until_unit() {
        let desc = TextureDesc::new_2d(PixelFormat::R8Unorm, 8, 2).with_levels(10);
        let layout = compute(&desc).unwrap();
        let sizes: Vec<_> = layout
            .levels
            .iter()
            .map(|l| (l.size.width, l.size.height))
            .collect();
        assert_eq!(sizes, [(8, 2), (4, 1), (2, 1), (1, 1)]);
    }

    #[test]
    fn test_word_alignment_pads_lines() {
        let desc =
            TextureDesc::new_2d(PixelFormat::Rgb8Unorm, 5, 3).with_alignment(Alignment::Word);
        let layout = compute(&desc).unwrap();
        let l0 = layout.levels[0];
        assert_eq!(l0.bytes_per_line, 16);
        assert_eq!(l0.bytes_per_image, 48);

        let packed = compute(&desc.with_alignment(Alignment::Byte)).unwrap();
        assert_eq!(packed.levels[0].bytes_per_line, 15);
    }

    #[test]
    fn test_compressed_block_rows() {
        let desc = TextureDesc::new_2d(PixelFormat::Bc1RgbUnorm, 10, 6).with_levels(2);
        let layout = compute(&desc).unwrap();
        let l0 = layout.levels[0];
        assert_eq!(l0.bytes_per_line, 3 * 8);
        assert_eq!(l0.lines, 2);
        assert_eq!(l0.bytes_per_image, 48);
        let l1 = layout.levels[1];
        assert_eq!((l1.size.width, l1.size.height), (5, 3));
        assert_eq!(l1.bytes_per_image, 2 * 8);
        assert_eq!(l1.offset, 48);
    }

    #[test]
    fn test_cube_array_offsets() {
        let desc = TextureDesc::new(TextureType::CubeMapArray, PixelFormat::R8Unorm, 4, 4, 1)
            .with_layers(2)
            .with_levels(2);
        let layout = compute(&desc).unwrap();
        assert_eq!(layout.levels[0].bytes_per_image, 16);
        assert_eq!(layout.levels[1].offset, 16 * 12);
        assert_eq!(layout.total, 16 * 12 + 4 * 12);
    }

    #[test]
    fn test_volume_levels_shrink_depth() {
        let desc = TextureDesc::new_3d(PixelFormat::R8Unorm, 4, 4, 8).with_levels(10);
        let layout = compute(&desc).unwrap();
        let depths: Vec<_> = layout.levels.iter().map(|l| l.size.depth).collect();
        assert_eq!(depths, [8, 4, 2, 1]);
        assert_eq!(layout.levels[0].bytes_per_image, 128);
    }

    #[test]
    fn test_overflow_is_allocation_error() {
        let desc = TextureDesc::new_3d(PixelFormat::Rgba32Float, u32::MAX, u32::MAX, u32::MAX);
        let err = compute(&desc).unwrap_err();
        assert!(err.is_allocation_error());
    }
}
