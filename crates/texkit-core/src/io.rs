//! Binary serialization of textures.
//!
//! # Wire Layout
//!
//! All integers are big-endian.
//!
//! ```text
//! u32 type        TextureType discriminant
//! u32 format      PixelFormat ordinal
//! u32 width
//! u32 height
//! u32 depth
//! u32 layers
//! u32 levels      stored (truncated) level count
//! u64 length      payload bytes
//! [u8] payload    the whole buffer, level 0 first
//! ```
//!
//! The null texture is written with every field zero and an empty payload.
//!
//! The length prefix is 64 bits wide, not 32, so buffers over 4 GiB stay
//! representable. It is redundant with the header: a length that differs
//! from the layout of the stored shape is rejected before anything is
//! allocated.
//!
//! Alignment is not stored. The reader rebuilds the layout with byte
//! alignment and falls back to word alignment when only that matches the
//! payload length.

use crate::desc::{Alignment, TextureDesc, TextureType};
use crate::error::{Error, Result};
use crate::layout;
use crate::texture::Texture;
use byteorder::{BigEndian, ByteOrder, ReadBytesExt, WriteBytesExt};
use std::io::{Read, Write};
use texkit_format::PixelFormat;
use tracing::debug;

/// Size of the fixed header preceding the payload.
pub const HEADER_LEN: usize = 7 * 4 + 8;

impl Texture {
    /// Writes this texture to `w`.
    pub fn write_to<W: Write>(&self, w: &mut W) -> Result<()> {
        let desc = self.desc();
        for field in [
            desc.ty as u32,
            desc.format.ordinal(),
            desc.width,
            desc.height,
            desc.depth,
            desc.layers,
            desc.levels,
        ] {
            w.write_u32::<BigEndian>(field)?;
        }
        let data = self.data();
        w.write_u64::<BigEndian>(data.len() as u64)?;
        w.write_all(data)?;
        Ok(())
    }

    /// Reads a texture written by [`write_to`](Self::write_to).
    ///
    /// # Errors
    ///
    /// - [`Error::DecodeMismatch`] if the payload length does not match the
    ///   layout of the stored shape, or the stream ends inside the payload
    /// - [`Error::InvalidParameters`] / [`Error::UnsupportedFormat`] if the
    ///   header describes no valid texture
    /// - [`Error::Io`] if the stream ends inside the header
    pub fn read_from<R: Read>(r: &mut R) -> Result<Texture> {
        let mut fields = [0u32; 7];
        r.read_u32_into::<BigEndian>(&mut fields)?;
        let [ty, format, width, height, depth, layers, levels] = fields;
        let length = r.read_u64::<BigEndian>()?;
        let length = usize::try_from(length).map_err(|_| {
            Error::allocation_failed(usize::MAX, format!("payload of {length} bytes"))
        })?;

        let format = PixelFormat::from_u32(format).ok_or_else(|| {
            Error::unsupported_format(format!("unknown format ordinal {format}"))
        })?;
        if format.is_invalid() {
            if length != 0 {
                return Err(Error::decode_mismatch(0, length));
            }
            return Ok(Texture::null());
        }
        let ty = TextureType::from_u32(ty)
            .ok_or_else(|| Error::invalid_parameters(format!("unknown texture type {ty}")))?;

        let desc = TextureDesc {
            ty,
            format,
            width,
            height,
            depth,
            layers,
            levels,
            alignment: Alignment::Byte,
        };
        desc.validate()?;

        let expected = layout::compute(&desc)?.total;
        let desc = if expected == length {
            desc
        } else {
            let word = desc.with_alignment(Alignment::Word);
            if layout::compute(&word)?.total != length {
                return Err(Error::decode_mismatch(expected, length));
            }
            word
        };

        // The stream may hold less than the header claims; only keep what
        // actually arrives.
        let mut payload = Vec::new();
        r.take(length as u64).read_to_end(&mut payload)?;
        if payload.len() != length {
            return Err(Error::decode_mismatch(length, payload.len()));
        }

        let texture = Texture::from_parts(&desc, payload)?;
        debug!(%format, bytes = length, "decoded texture");
        Ok(texture)
    }

    /// Serializes this texture into a new buffer.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut out = Vec::with_capacity(HEADER_LEN + self.bytes());
        self.write_to(&mut out)?;
        Ok(out)
    }

    /// Deserializes a texture from `bytes`, which must hold exactly one.
    pub fn from_bytes(bytes: &[u8]) -> Result<Texture> {
        if let Some(header) = bytes.get(..HEADER_LEN) {
            let declared = BigEndian::read_u64(&header[HEADER_LEN - 8..]);
            let available = (bytes.len() - HEADER_LEN) as u64;
            if declared > available {
                return Err(Error::decode_mismatch(
                    usize::try_from(declared).unwrap_or(usize::MAX),
                    available as usize,
                ));
            }
        }
        let mut cursor = bytes;
        let texture = Self::read_from(&mut cursor)?;
        if !cursor.is_empty() {
            return Err(Error::decode_mismatch(bytes.len() - cursor.len(), bytes.len()));
        }
        Ok(texture)
    }
}
