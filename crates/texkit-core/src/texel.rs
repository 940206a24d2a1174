//! Texel codec: native texel bytes to and from [`ColorVariant`].
//!
//! Every uncompressed format with a channel layout is described by a
//! [`TexelLayout`]:
//!
//! - **Array** formats store one little-endian scalar per channel. The
//!   layout lists, in memory order, which color channel each scalar holds.
//! - **Packed** formats store all channels in one 16- or 32-bit
//!   little-endian word, each channel a bit field starting at a given shift.
//!
//! Missing color channels read as zero, missing alpha as the channel
//! maximum. Luminance reads into red, green and blue and is written from red.
//!
//! Integer (`Uint`/`Sint`) formats share the representation of the
//! normalized format of the same width; the variant carries the raw bits.
//!
//! The shared-exponent and packed-float formats and all compressed formats
//! have no layout and report [`Error::UnsupportedFormat`].

use crate::error::{Error, Result};
use byteorder::{ByteOrder, LittleEndian};
use texkit_color::{f16, Channel, ColorKind, ColorVariant, Representation, Rgba};
use texkit_format::PixelFormat;

/// Which color channel a stored scalar or bit field holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Slot {
    R,
    G,
    B,
    A,
    /// Luminance: read into R, G and B; written from R.
    L,
    /// Unused padding; written as the channel maximum.
    X,
}

/// One bit field of a packed word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Field {
    pub shift: u32,
    pub bits: u32,
    pub slot: Slot,
}

const fn field(shift: u32, bits: u32, slot: Slot) -> Field {
    Field { shift, bits, slot }
}

/// Memory layout of one texel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TexelLayout {
    Array {
        kind: ColorKind,
        slots: &'static [Slot],
    },
    Packed {
        kind: ColorKind,
        word_bits: u32,
        fields: &'static [Field],
    },
}

impl TexelLayout {
    /// Representation used for texels of this layout.
    pub fn kind(&self) -> ColorKind {
        match *self {
            Self::Array { kind, .. } | Self::Packed { kind, .. } => kind,
        }
    }
}

use Slot::*;

const R_: &[Slot] = &[R];
const RG: &[Slot] = &[R, G];
const RGB: &[Slot] = &[R, G, B];
const BGR: &[Slot] = &[B, G, R];
const RGBA: &[Slot] = &[R, G, B, A];
const BGRA: &[Slot] = &[B, G, R, A];
const BGRX: &[Slot] = &[B, G, R, X];

const B5G6R5: &[Field] = &[field(0, 5, B), field(5, 6, G), field(11, 5, R)];
const B4G4R4A4: &[Field] = &[field(0, 4, B), field(4, 4, G), field(8, 4, R), field(12, 4, A)];
const B5G5R5A1: &[Field] = &[field(0, 5, B), field(5, 5, G), field(10, 5, R), field(15, 1, A)];
const R10G10B10A2: &[Field] = &[
    field(0, 10, R),
    field(10, 10, G),
    field(20, 10, B),
    field(30, 2, A),
];
const B10G10R10A2: &[Field] = &[
    field(0, 10, B),
    field(10, 10, G),
    field(20, 10, R),
    field(30, 2, A),
];

/// Returns the texel layout of `format`, or `None` if texel access is not
/// defined for it.
pub(crate) fn layout(format: PixelFormat) -> Option<TexelLayout> {
    use ColorKind as K;
    use PixelFormat as F;

    let array = |kind: ColorKind, slots: &'static [Slot]| Some(TexelLayout::Array { kind, slots });
    let packed = |kind: ColorKind, word_bits: u32, fields: &'static [Field]| {
        Some(TexelLayout::Packed {
            kind,
            word_bits,
            fields,
        })
    };

    match format {
        F::A8Unorm => array(K::Rgba8, &[A]),
        F::L8Unorm => array(K::Rgba8, &[L]),
        F::La8Unorm => array(K::Rgba8, &[L, A]),
        F::R8Unorm | F::R8Uint => array(K::Rgba8, R_),
        F::R8Snorm | F::R8Sint => array(K::Rgba8Snorm, R_),
        F::Rg8Unorm | F::Rg8Uint => array(K::Rgba8, RG),
        F::Rg8Snorm | F::Rg8Sint => array(K::Rgba8Snorm, RG),
        F::Rgb8Unorm | F::Rgb8Srgb => array(K::Rgba8, RGB),
        F::Rgb8Snorm => array(K::Rgba8Snorm, RGB),
        F::Bgr8Unorm => array(K::Rgba8, BGR),
        F::Rgba8Unorm | F::Rgba8Uint | F::Rgba8Srgb => array(K::Rgba8, RGBA),
        F::Rgba8Snorm | F::Rgba8Sint => array(K::Rgba8Snorm, RGBA),
        F::Bgra8Unorm | F::Bgra8Srgb => array(K::Rgba8, BGRA),
        F::Bgrx8Unorm => array(K::Rgba8, BGRX),

        F::Bgr565Unorm => packed(K::Rgba8, 16, B5G6R5),
        F::Bgra4Unorm => packed(K::Rgba8, 16, B4G4R4A4),
        F::Bgr5a1Unorm => packed(K::Rgba8, 16, B5G5R5A1),
        F::Rgb10a2Unorm => packed(K::Rgba16, 32, R10G10B10A2),
        F::Bgr10a2Unorm => packed(K::Rgba16, 32, B10G10R10A2),

        F::R16Unorm | F::R16Uint => array(K::Rgba16, R_),
        F::R16Snorm | F::R16Sint => array(K::Rgba16Snorm, R_),
        F::R16Float => array(K::Rgba16F, R_),
        F::Rg16Unorm => array(K::Rgba16, RG),
        F::Rg16Snorm => array(K::Rgba16Snorm, RG),
        F::Rg16Float => array(K::Rgba16F, RG),
        F::Rgba16Unorm | F::Rgba16Uint => array(K::Rgba16, RGBA),
        F::Rgba16Snorm | F::Rgba16Sint => array(K::Rgba16Snorm, RGBA),
        F::Rgba16Float => array(K::Rgba16F, RGBA),

        F::R32Uint => array(K::Rgba32, R_),
        F::R32Sint => array(K::Rgba32Snorm, R_),
        F::R32Float => array(K::Rgba32F, R_),
        F::Rg32Float => array(K::Rgba32F, RG),
        F::Rgb32Float => array(K::Rgba32F, RGB),
        F::Rgba32Uint => array(K::Rgba32, RGBA),
        F::Rgba32Sint => array(K::Rgba32Snorm, RGBA),
        F::Rgba32Float => array(K::Rgba32F, RGBA),

        _ => None,
    }
}

/// Representation [`read`] produces for `format`, or `None` if texel access
/// is not defined for it.
pub fn texel_kind(format: PixelFormat) -> Option<ColorKind> {
    layout(format).map(|l| l.kind())
}

fn unsupported(format: PixelFormat) -> Error {
    Error::unsupported_format(format!("{format} has no texel layout"))
}

/// Little-endian scalar I/O for each channel type.
trait Scalar: Representation {
    const SIZE: usize;
    fn read(buf: &[u8]) -> Self;
    fn write(self, buf: &mut [u8]);
}

macro_rules! impl_scalar {
    ($ty:ty, $size:expr, $read:expr, $write:expr) => {
        impl Scalar for $ty {
            const SIZE: usize = $size;
            #[inline]
            fn read(buf: &[u8]) -> Self {
                $read(buf)
            }
            #[inline]
            fn write(self, buf: &mut [u8]) {
                $write(buf, self)
            }
        }
    };
}

impl_scalar!(u8, 1, |b: &[u8]| b[0], |b: &mut [u8], v| b[0] = v);
impl_scalar!(i8, 1, |b: &[u8]| b[0] as i8, |b: &mut [u8], v: i8| b[0] = v as u8);
impl_scalar!(u16, 2, LittleEndian::read_u16, LittleEndian::write_u16);
impl_scalar!(i16, 2, LittleEndian::read_i16, LittleEndian::write_i16);
impl_scalar!(u32, 4, LittleEndian::read_u32, LittleEndian::write_u32);
impl_scalar!(i32, 4, LittleEndian::read_i32, LittleEndian::write_i32);
impl_scalar!(f32, 4, LittleEndian::read_f32, LittleEndian::write_f32);
impl_scalar!(
    f16,
    2,
    |b: &[u8]| f16::from_bits(LittleEndian::read_u16(b)),
    |b: &mut [u8], v: f16| LittleEndian::write_u16(b, v.to_bits())
);

/// Alpha (and padding) default: the channel maximum.
#[inline]
fn one<T: Channel>() -> T {
    Rgba::<T>::opaque(T::default(), T::default(), T::default()).a
}

fn read_array<T: Scalar>(bytes: &[u8], slots: &[Slot]) -> ColorVariant {
    let mut px = Rgba::<T>::opaque(T::default(), T::default(), T::default());
    for (slot, chunk) in slots.iter().zip(bytes.chunks_exact(T::SIZE)) {
        let v = T::read(chunk);
        match slot {
            R => px.r = v,
            G => px.g = v,
            B => px.b = v,
            A => px.a = v,
            L => {
                px.r = v;
                px.g = v;
                px.b = v;
            }
            X => {}
        }
    }
    T::wrap(px)
}

fn write_array<T: Scalar>(color: &ColorVariant, slots: &[Slot], bytes: &mut [u8]) {
    let px = color.convert::<T>();
    for (slot, chunk) in slots.iter().zip(bytes.chunks_exact_mut(T::SIZE)) {
        let v = match slot {
            R | L => px.r,
            G => px.g,
            B => px.b,
            A => px.a,
            X => one::<T>(),
        };
        v.write(chunk);
    }
}

/// Expands a `bits`-wide field to the full range of `T` with rounding.
#[inline]
fn expand<T: Channel>(raw: u32, bits: u32) -> T {
    let max = (1i64 << bits) - 1;
    T::from_i64((raw as i64 * T::MAX + max / 2) / max)
}

/// Quantizes a full-range value of `T` to a `bits`-wide field with rounding.
#[inline]
fn quantize<T: Channel>(v: T, bits: u32) -> u32 {
    let max = (1i64 << bits) - 1;
    ((v.to_i64() * max + T::MAX / 2) / T::MAX) as u32
}

fn read_word(bytes: &[u8], word_bits: u32) -> u32 {
    if word_bits == 16 {
        LittleEndian::read_u16(bytes) as u32
    } else {
        LittleEndian::read_u32(bytes)
    }
}

fn read_packed<T: Scalar>(bytes: &[u8], word_bits: u32, fields: &[Field]) -> ColorVariant {
    let word = read_word(bytes, word_bits);
    let mut px = Rgba::<T>::opaque(T::default(), T::default(), T::default());
    for f in fields {
        let raw = (word >> f.shift) & ((1u32 << f.bits) - 1);
        let v = expand::<T>(raw, f.bits);
        match f.slot {
            R => px.r = v,
            G => px.g = v,
            B => px.b = v,
            A => px.a = v,
            L | X => {}
        }
    }
    T::wrap(px)
}

fn write_packed<T: Scalar>(
    color: &ColorVariant,
    word_bits: u32,
    fields: &[Field],
    bytes: &mut [u8],
) {
    let px = color.convert::<T>();
    let mut word = 0u32;
    for f in fields {
        let v = match f.slot {
            R | L => px.r,
            G => px.g,
            B => px.b,
            A => px.a,
            X => one::<T>(),
        };
        word |= quantize(v, f.bits) << f.shift;
    }
    if word_bits == 16 {
        LittleEndian::write_u16(bytes, word as u16);
    } else {
        LittleEndian::write_u32(bytes, word);
    }
}

macro_rules! dispatch {
    ($kind:expr, $format:expr, $f:ident::<T>($($arg:expr),*)) => {
        match $kind {
            ColorKind::Rgba8 => $f::<u8>($($arg),*),
            ColorKind::Rgba8Snorm => $f::<i8>($($arg),*),
            ColorKind::Rgba16 => $f::<u16>($($arg),*),
            ColorKind::Rgba16Snorm => $f::<i16>($($arg),*),
            ColorKind::Rgba32 => $f::<u32>($($arg),*),
            ColorKind::Rgba32Snorm => $f::<i32>($($arg),*),
            ColorKind::Rgba16F => $f::<f16>($($arg),*),
            ColorKind::Rgba32F => $f::<f32>($($arg),*),
            ColorKind::Empty => return Err(unsupported($format)),
        }
    };
}

/// Decodes one texel of `format` from the start of `bytes`.
///
/// `bytes` must hold at least one texel.
pub fn read(format: PixelFormat, bytes: &[u8]) -> Result<ColorVariant> {
    let needed = format.descriptor().bytes_per_texel() as usize;
    let layout = layout(format).ok_or_else(|| unsupported(format))?;
    if bytes.len() < needed {
        return Err(Error::decode_mismatch(needed, bytes.len()));
    }
    Ok(match layout {
        TexelLayout::Array { kind, slots } => {
            dispatch!(kind, format, read_array::<T>(bytes, slots))
        }
        TexelLayout::Packed {
            kind,
            word_bits,
            fields,
        } => dispatch!(kind, format, read_packed::<T>(bytes, word_bits, fields)),
    })
}

/// Encodes `color` as one texel of `format` at the start of `bytes`.
///
/// The color is converted to the format's representation first;
/// [`ColorVariant::Empty`] writes zero color with zero alpha.
pub fn write(format: PixelFormat, color: &ColorVariant, bytes: &mut [u8]) -> Result<()> {
    let needed = format.descriptor().bytes_per_texel() as usize;
    let layout = layout(format).ok_or_else(|| unsupported(format))?;
    if bytes.len() < needed {
        return Err(Error::decode_mismatch(needed, bytes.len()));
    }
    match layout {
        TexelLayout::Array { kind, slots } => {
            dispatch!(kind, format, write_array::<T>(color, slots, bytes))
        }
        TexelLayout::Packed {
            kind,
            word_bits,
            fields,
        } => dispatch!(kind, format, write_packed::<T>(color, word_bits, fields, bytes)),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use texkit_format::FormatDescriptor;

    fn rgba8(r: u8, g: u8, b: u8, a: u8) -> ColorVariant {
        Rgba::new(r, g, b, a).into()
    }

    #[test]
    fn test_layouts_match_texel_size() {
        for d in FormatDescriptor::all() {
            let Some(l) = layout(d.format()) else { continue };
            let bytes = match l {
                TexelLayout::Array { kind, slots } => {
                    let scalar = match kind {
                        ColorKind::Rgba8 | ColorKind::Rgba8Snorm => 1,
                        ColorKind::Rgba16 | ColorKind::Rgba16Snorm | ColorKind::Rgba16F => 2,
                        _ => 4,
                    };
                    scalar * slots.len() as u32
                }
                TexelLayout::Packed { word_bits, .. } => word_bits / 8,
            };
            assert_eq!(bytes, d.bytes_per_texel(), "{}", d.format());
        }
    }

    #[test]
    fn test_compressed_is_unsupported() {
        assert_eq!(texel_kind(PixelFormat::Bc1RgbUnorm), None);
        let err = read(PixelFormat::Bc7RgbaUnorm, &[0; 16]).unwrap_err();
        assert!(err.is_unsupported_format());
        let err = read(PixelFormat::Rgb9e5Float, &[0; 4]).unwrap_err();
        assert!(err.is_unsupported_format());
    }

    #[test]
    fn test_bgra_swizzle() {
        let c = read(PixelFormat::Bgra8Unorm, &[1, 2, 3, 4]).unwrap();
        assert_eq!(c, rgba8(3, 2, 1, 4));

        let mut buf = [0u8; 4];
        write(PixelFormat::Bgra8Unorm, &rgba8(3, 2, 1, 4), &mut buf).unwrap();
        assert_eq!(buf, [1, 2, 3, 4]);
    }

    #[test]
    fn test_missing_channels() {
        assert_eq!(read(PixelFormat::R8Unorm, &[9]).unwrap(), rgba8(9, 0, 0, 255));
        assert_eq!(read(PixelFormat::A8Unorm, &[9]).unwrap(), rgba8(0, 0, 0, 9));
        assert_eq!(read(PixelFormat::La8Unorm, &[7, 9]).unwrap(), rgba8(7, 7, 7, 9));

        let mut buf = [0u8; 4];
        write(PixelFormat::Bgrx8Unorm, &rgba8(1, 2, 3, 0), &mut buf).unwrap();
        assert_eq!(buf, [3, 2, 1, 255]);
    }

    #[test]
    fn test_multibyte_little_endian() {
        let c = read(PixelFormat::R16Unorm, &[0x34, 0x12]).unwrap();
        assert_eq!(c, ColorVariant::from(Rgba::<u16>::new(0x1234, 0, 0, u16::MAX)));

        let mut buf = [0u8; 4];
        let one = ColorVariant::from(Rgba::<f32>::new(1.0, 0.0, 0.0, 1.0));
        write(PixelFormat::R32Float, &one, &mut buf).unwrap();
        assert_eq!(buf, 1.0f32.to_le_bytes());
    }

    #[test]
    fn test_565() {
        // Pure red: r in bits 11-15.
        let c = read(PixelFormat::Bgr565Unorm, &0xf800u16.to_le_bytes()).unwrap();
        assert_eq!(c, rgba8(255, 0, 0, 255));
        let c = read(PixelFormat::Bgr565Unorm, &0x07e0u16.to_le_bytes()).unwrap();
        assert_eq!(c, rgba8(0, 255, 0, 255));

        let mut buf = [0u8; 2];
        write(PixelFormat::Bgr565Unorm, &rgba8(0, 0, 255, 255), &mut buf).unwrap();
        assert_eq!(u16::from_le_bytes(buf), 0x001f);
    }

    #[test]
    fn test_4444_and_5551() {
        let c = read(PixelFormat::Bgra4Unorm, &0xf00fu16.to_le_bytes()).unwrap();
        assert_eq!(c, rgba8(0, 0, 255, 255));
        let c = read(PixelFormat::Bgr5a1Unorm, &0x8000u16.to_le_bytes()).unwrap();
        assert_eq!(c, rgba8(0, 0, 0, 255));

        let mut buf = [0u8; 2];
        write(PixelFormat::Bgra4Unorm, &rgba8(0x11, 0x22, 0x33, 0x44), &mut buf).unwrap();
        assert_eq!(u16::from_le_bytes(buf), 0x4123);
    }

    #[test]
    fn test_1010102() {
        let word: u32 = 1023 | (3 << 30);
        let c = read(PixelFormat::Rgb10a2Unorm, &word.to_le_bytes()).unwrap();
        assert_eq!(c, ColorVariant::from(Rgba::<u16>::new(u16::MAX, 0, 0, u16::MAX)));
        let c = read(PixelFormat::Bgr10a2Unorm, &word.to_le_bytes()).unwrap();
        assert_eq!(c, ColorVariant::from(Rgba::<u16>::new(0, 0, u16::MAX, u16::MAX)));

        let mut buf = [0u8; 4];
        write(PixelFormat::Rgb10a2Unorm, &c, &mut buf).unwrap();
        assert_eq!(u32::from_le_bytes(buf), (1023 << 20) | (3 << 30));
    }

    #[test]
    fn test_packed_roundtrip_all_values() {
        for v in 0..=u16::MAX {
            let bytes = v.to_le_bytes();
            let c = read(PixelFormat::Bgr5a1Unorm, &bytes).unwrap();
            let mut out = [0u8; 2];
            write(PixelFormat::Bgr5a1Unorm, &c, &mut out).unwrap();
            assert_eq!(out, bytes);
        }
    }

    #[test]
    fn test_snorm_and_half() {
        let c = read(PixelFormat::Rg8Snorm, &[0x81, 0x7f]).unwrap();
        assert_eq!(c, ColorVariant::from(Rgba::<i8>::new(-127, 127, 0, 127)));

        let c = read(PixelFormat::R16Float, &f16::from_f32(0.5).to_bits().to_le_bytes()).unwrap();
        assert_eq!(c.convert::<f32>().r, 0.5);
    }

    #[test]
    fn test_short_buffer() {
        let err = read(PixelFormat::Rgba8Unorm, &[0; 3]).unwrap_err();
        assert!(err.is_decode_error());
    }
}
