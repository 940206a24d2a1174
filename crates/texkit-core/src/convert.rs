//! Generic texel access and whole-texture format conversion.
//!
//! These operations go through [`ColorVariant`], so they work for any pair
//! of uncompressed formats the [texel codec](crate::texel) knows. Compressed
//! formats report [`Error::UnsupportedFormat`].
//!
//! Conversion processes texel lines independently; with the `parallel`
//! feature (default) lines are distributed over the rayon thread pool.

use crate::desc::{Index, Position};
use crate::error::{Error, Result};
use crate::layout::LevelLayout;
use crate::texel;
use crate::texture::Texture;
use texkit_color::ColorVariant;
use texkit_format::PixelFormat;
use tracing::debug;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

fn check_supported(format: PixelFormat) -> Result<()> {
    if texel::texel_kind(format).is_none() {
        return Err(Error::unsupported_format(format!("{format} has no texel layout")));
    }
    Ok(())
}

/// Byte range of every image of `level`.
#[inline]
fn level_range(level: &LevelLayout, images: usize) -> std::ops::Range<usize> {
    level.offset..level.offset + level.bytes_per_level(images)
}

/// Converts the first `width` texels of one line.
fn convert_line(
    src: &[u8],
    src_format: PixelFormat,
    dst: &mut [u8],
    dst_format: PixelFormat,
    width: usize,
) -> Result<()> {
    let sbpt = src_format.descriptor().bytes_per_texel() as usize;
    let dbpt = dst_format.descriptor().bytes_per_texel() as usize;
    for (s, d) in src
        .chunks_exact(sbpt)
        .zip(dst.chunks_exact_mut(dbpt))
        .take(width)
    {
        let color = texel::read(src_format, s)?;
        texel::write(dst_format, &color, d)?;
    }
    Ok(())
}

/// Converts every line of one level region.
///
/// Uses rayon for parallel processing when the `parallel` feature is enabled.
#[cfg(feature = "parallel")]
fn convert_level(
    src: &[u8],
    src_level: &LevelLayout,
    src_format: PixelFormat,
    dst: &mut [u8],
    dst_level: &LevelLayout,
    dst_format: PixelFormat,
) -> Result<()> {
    let width = src_level.size.width as usize;
    src.par_chunks(src_level.bytes_per_line)
        .zip(dst.par_chunks_mut(dst_level.bytes_per_line))
        .try_for_each(|(s, d)| convert_line(s, src_format, d, dst_format, width))
}

/// Converts every line of one level region (single-threaded fallback).
#[cfg(not(feature = "parallel"))]
fn convert_level(
    src: &[u8],
    src_level: &LevelLayout,
    src_format: PixelFormat,
    dst: &mut [u8],
    dst_level: &LevelLayout,
    dst_format: PixelFormat,
) -> Result<()> {
    let width = src_level.size.width as usize;
    src.chunks(src_level.bytes_per_line)
        .zip(dst.chunks_mut(dst_level.bytes_per_line))
        .try_for_each(|(s, d)| convert_line(s, src_format, d, dst_format, width))
}

impl Texture {
    /// Reads the texel at `pos` as a [`ColorVariant`].
    ///
    /// The variant kind is the format's representation, see
    /// [`texel_kind`](crate::texel::texel_kind).
    ///
    /// ```rust
    /// use texkit_core::prelude::*;
    ///
    /// let mut t = Texture::create_with(&TextureDesc::new_2d(PixelFormat::Bgra8Unorm, 2, 2));
    /// let red = ColorVariant::from(Rgba::<u8>::new(255, 0, 0, 255));
    /// t.set_texel(Position::xy(1, 0), Index::default(), &red).unwrap();
    ///
    /// assert_eq!(t.texel(Position::xy(1, 0), Index::default()).unwrap(), red);
    /// assert_eq!(t.texel_data(Position::xy(1, 0), Index::default()).unwrap(), &[0, 0, 255, 255]);
    /// ```
    pub fn texel(&self, pos: Position, index: Index) -> Result<ColorVariant> {
        let bytes = self.texel_data(pos, index)?;
        check_supported(self.format())?;
        texel::read(self.format(), bytes)
    }

    /// Writes `color` to the texel at `pos`, converting it to the format's
    /// representation. Detaches.
    pub fn set_texel(&mut self, pos: Position, index: Index, color: &ColorVariant) -> Result<()> {
        let format = self.format();
        self.texel_data(pos, index)?;
        check_supported(format)?;
        texel::write(format, color, self.texel_data_mut(pos, index)?)
    }

    /// Sets every texel of every image and level to `color`. Detaches.
    ///
    /// Line padding is left untouched. Filling the null texture does nothing.
    pub fn fill(&mut self, color: &ColorVariant) -> Result<()> {
        let Some(d) = self.inner() else {
            return Ok(());
        };
        let format = d.desc.format;
        check_supported(format)?;

        let mut pattern = vec![0u8; format.descriptor().bytes_per_texel() as usize];
        texel::write(format, color, &mut pattern)?;
        let levels = d.levels.clone();
        let images = d.images();

        let data = self.data_mut()?;
        for level in &levels {
            let width = level.size.width as usize;
            for line in data[level_range(level, images)].chunks_mut(level.bytes_per_line) {
                for texel in line.chunks_exact_mut(pattern.len()).take(width) {
                    texel.copy_from_slice(&pattern);
                }
            }
        }
        Ok(())
    }

    /// Returns a copy of this texture stored in `format`.
    ///
    /// Shape, level count and alignment are kept. Converting to the current
    /// format returns a shared handle; converting the null texture returns
    /// the null texture.
    ///
    /// # Errors
    ///
    /// - [`Error::UnsupportedFormat`] if either format has no texel layout
    /// - [`Error::AllocationFailed`] if the new buffer cannot be allocated
    pub fn convert(&self, format: PixelFormat) -> Result<Texture> {
        let Some(src) = self.inner() else {
            return Ok(Texture::null());
        };
        let src_format = src.desc.format;
        if format == src_format {
            return Ok(self.clone());
        }
        check_supported(src_format)?;
        check_supported(format)?;

        let mut out = Texture::try_create_with(&src.desc.with_format(format))?;
        let dst_levels = out.inner().map(|d| d.levels.clone()).unwrap_or_default();
        let images = src.images();
        debug!(from = %src_format, to = %format, levels = dst_levels.len(), "converting texture");

        let dst = out.data_mut()?;
        for (sl, dl) in src.levels.iter().zip(&dst_levels) {
            convert_level(
                &src.bytes[level_range(sl, images)],
                sl,
                src_format,
                &mut dst[level_range(dl, images)],
                dl,
                format,
            )?;
        }
        Ok(out)
    }
}
