//! Format-agnostic color value.
//!
//! [`ColorVariant`] holds exactly one concrete [`Rgba`] representation and
//! remembers which one. It is what generic texel access hands out when the
//! caller does not know the texture format at compile time.
//!
//! # Representations
//!
//! | Variant | Channel | Kind |
//! |---------|---------|------|
//! | `Empty` | - | converts to zero |
//! | `Rgba8` | `u8` | unsigned normalized |
//! | `Rgba8Snorm` | `i8` | signed normalized |
//! | `Rgba16` | `u16` | unsigned normalized |
//! | `Rgba16Snorm` | `i16` | signed normalized |
//! | `Rgba32` | `u32` | unsigned normalized |
//! | `Rgba32Snorm` | `i32` | signed normalized |
//! | `Rgba16F` | [`f16`] | float |
//! | `Rgba32F` | `f32` | float |
//!
//! # Equality and Ordering
//!
//! Two variants are equal iff they hold the same representation and the same
//! bit patterns; there is no numeric tolerance and no cross-representation
//! equality (`Rgba8(255,..)` != `Rgba16(65535,..)`). Consequently `+0.0` and
//! `-0.0` differ, and a NaN equals itself.
//!
//! [`Ord`] sorts by representation first, then by the raw bit patterns of
//! red, green, blue and alpha. It exists for deterministic sorting and set
//! membership, not as a perceptual ordering.

use crate::channel::Channel;
use crate::pixel::{convert_pixel, Rgba};
use half::f16;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// Discriminant of a [`ColorVariant`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum ColorKind {
    /// No value.
    #[default]
    Empty,
    /// [`Rgba<u8>`]
    Rgba8,
    /// [`Rgba<i8>`]
    Rgba8Snorm,
    /// [`Rgba<u16>`]
    Rgba16,
    /// [`Rgba<i16>`]
    Rgba16Snorm,
    /// [`Rgba<u32>`]
    Rgba32,
    /// [`Rgba<i32>`]
    Rgba32Snorm,
    /// [`Rgba<f16>`]
    Rgba16F,
    /// [`Rgba<f32>`]
    Rgba32F,
}

/// A color value in one of the supported [`Rgba`] representations.
///
/// The default value is [`ColorVariant::Empty`], which converts to the zero
/// pixel of any representation.
///
/// # Example
///
/// ```rust
/// use texkit_color::{ColorKind, ColorVariant, Rgba};
///
/// let c = ColorVariant::from(Rgba::<u16>::new(0xffff, 0, 0, 0xffff));
/// assert_eq!(c.kind(), ColorKind::Rgba16);
///
/// // Type-exact access: no conversion, default on mismatch.
/// assert_eq!(c.value(Rgba::<u8>::default()), Rgba::default());
///
/// // Converting access.
/// assert_eq!(c.convert::<u8>(), Rgba::new(255, 0, 0, 255));
/// ```
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ColorVariant {
    /// No value.
    #[default]
    Empty,
    /// 8-bit unsigned normalized.
    Rgba8(Rgba<u8>),
    /// 8-bit signed normalized.
    Rgba8Snorm(Rgba<i8>),
    /// 16-bit unsigned normalized.
    Rgba16(Rgba<u16>),
    /// 16-bit signed normalized.
    Rgba16Snorm(Rgba<i16>),
    /// 32-bit unsigned normalized.
    Rgba32(Rgba<u32>),
    /// 32-bit signed normalized.
    Rgba32Snorm(Rgba<i32>),
    /// Half-precision float.
    Rgba16F(Rgba<f16>),
    /// Single-precision float.
    Rgba32F(Rgba<f32>),
}

/// Channel types that have a [`ColorVariant`] representation.
pub trait Representation: Channel {
    /// Discriminant of the representation built from this channel type.
    const COLOR_KIND: ColorKind;

    /// Wraps a pixel into the matching variant.
    fn wrap(pixel: Rgba<Self>) -> ColorVariant;

    /// Returns the pixel if `variant` holds this representation.
    fn unwrap(variant: &ColorVariant) -> Option<Rgba<Self>>;
}

macro_rules! impl_representation {
    ($ty:ty, $variant:ident) => {
        impl Representation for $ty {
            const COLOR_KIND: ColorKind = ColorKind::$variant;

            #[inline]
            fn wrap(pixel: Rgba<Self>) -> ColorVariant {
                ColorVariant::$variant(pixel)
            }

            #[inline]
            fn unwrap(variant: &ColorVariant) -> Option<Rgba<Self>> {
                match variant {
                    ColorVariant::$variant(p) => Some(*p),
                    _ => None,
                }
            }
        }

        impl From<Rgba<$ty>> for ColorVariant {
            #[inline]
            fn from(pixel: Rgba<$ty>) -> Self {
                ColorVariant::$variant(pixel)
            }
        }
    };
}

impl_representation!(u8, Rgba8);
impl_representation!(i8, Rgba8Snorm);
impl_representation!(u16, Rgba16);
impl_representation!(i16, Rgba16Snorm);
impl_representation!(u32, Rgba32);
impl_representation!(i32, Rgba32Snorm);
impl_representation!(f16, Rgba16F);
impl_representation!(f32, Rgba32F);

impl ColorVariant {
    /// Returns the discriminant of the live representation.
    #[inline]
    pub fn kind(&self) -> ColorKind {
        match self {
            Self::Empty => ColorKind::Empty,
            Self::Rgba8(_) => ColorKind::Rgba8,
            Self::Rgba8Snorm(_) => ColorKind::Rgba8Snorm,
            Self::Rgba16(_) => ColorKind::Rgba16,
            Self::Rgba16Snorm(_) => ColorKind::Rgba16Snorm,
            Self::Rgba32(_) => ColorKind::Rgba32,
            Self::Rgba32Snorm(_) => ColorKind::Rgba32Snorm,
            Self::Rgba16F(_) => ColorKind::Rgba16F,
            Self::Rgba32F(_) => ColorKind::Rgba32F,
        }
    }

    /// Returns `true` for [`ColorVariant::Empty`].
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Returns the stored pixel if it is a `Rgba<T>`, otherwise `default`.
    ///
    /// No conversion takes place; use [`convert`](Self::convert) for that.
    #[inline]
    pub fn value<T: Representation>(&self, default: Rgba<T>) -> Rgba<T> {
        T::unwrap(self).unwrap_or(default)
    }

    /// Returns the stored pixel if it is a `Rgba<T>`.
    #[inline]
    pub fn try_value<T: Representation>(&self) -> Option<Rgba<T>> {
        T::unwrap(self)
    }

    /// Returns the stored pixel converted to `Rgba<T>`.
    ///
    /// [`ColorVariant::Empty`] converts to `Rgba::default()` (all zero).
    pub fn convert<T: Channel>(&self) -> Rgba<T> {
        match *self {
            Self::Empty => Rgba::default(),
            Self::Rgba8(p) => convert_pixel(p),
            Self::Rgba8Snorm(p) => convert_pixel(p),
            Self::Rgba16(p) => convert_pixel(p),
            Self::Rgba16Snorm(p) => convert_pixel(p),
            Self::Rgba32(p) => convert_pixel(p),
            Self::Rgba32Snorm(p) => convert_pixel(p),
            Self::Rgba16F(p) => convert_pixel(p),
            Self::Rgba32F(p) => convert_pixel(p),
        }
    }

    /// Converts into another variant of the given kind.
    ///
    /// Converting into [`ColorKind::Empty`] yields `Empty`.
    pub fn convert_to(&self, kind: ColorKind) -> ColorVariant {
        match kind {
            ColorKind::Empty => ColorVariant::Empty,
            ColorKind::Rgba8 => self.convert::<u8>().into(),
            ColorKind::Rgba8Snorm => self.convert::<i8>().into(),
            ColorKind::Rgba16 => self.convert::<u16>().into(),
            ColorKind::Rgba16Snorm => self.convert::<i16>().into(),
            ColorKind::Rgba32 => self.convert::<u32>().into(),
            ColorKind::Rgba32Snorm => self.convert::<i32>().into(),
            ColorKind::Rgba16F => self.convert::<f16>().into(),
            ColorKind::Rgba32F => self.convert::<f32>().into(),
        }
    }

    /// Raw channel bit patterns; all zero for `Empty`.
    fn bits(&self) -> [u64; 4] {
        match *self {
            Self::Empty => [0; 4],
            Self::Rgba8(p) => p.bits(),
            Self::Rgba8Snorm(p) => p.bits(),
            Self::Rgba16(p) => p.bits(),
            Self::Rgba16Snorm(p) => p.bits(),
            Self::Rgba32(p) => p.bits(),
            Self::Rgba32Snorm(p) => p.bits(),
            Self::Rgba16F(p) => p.bits(),
            Self::Rgba32F(p) => p.bits(),
        }
    }
}

impl PartialEq for ColorVariant {
    fn eq(&self, other: &Self) -> bool {
        self.kind() == other.kind() && self.bits() == other.bits()
    }
}

impl Eq for ColorVariant {}

impl Hash for ColorVariant {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind().hash(state);
        self.bits().hash(state);
    }
}

impl PartialOrd for ColorVariant {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ColorVariant {
    fn cmp(&self, other: &Self) -> Ordering {
        self.kind()
            .cmp(&other.kind())
            .then_with(|| self.bits().cmp(&other.bits()))
    }
}
