//! Channel conversion laws and format table completeness.

use approx::assert_abs_diff_eq;
use texkit_core::prelude::*;
use texkit_core::{f16, texel_kind, Channel};

/// Evenly spaced samples of a channel type, extremes included.
fn samples<T: Channel>() -> Vec<T> {
    if T::is_float() {
        [-2.0, -1.0, -0.5, -0.0, 0.0, 1.0 / 3.0, 0.5, 1.0, 7.25]
            .into_iter()
            .map(T::from_f64)
            .collect()
    } else {
        let (min, max) = (T::MIN as i128, T::MAX as i128);
        let step = ((max - min) / 97).max(1);
        let mut out: Vec<T> = (0..=97)
            .map(|i| T::from_i64((min + step * i).min(max) as i64))
            .collect();
        out.push(T::from_i64(T::MAX));
        out
    }
}

fn idempotent<T: Channel>() {
    for x in samples::<T>() {
        let y: T = convert_channel(x);
        assert_eq!(y.to_bits(), x.to_bits(), "{x:?}");
    }
}

#[test]
fn same_type_conversion_is_identity() {
    idempotent::<u8>();
    idempotent::<i8>();
    idempotent::<u16>();
    idempotent::<i16>();
    idempotent::<u32>();
    idempotent::<i32>();
    idempotent::<f16>();
    idempotent::<f32>();
}

#[test]
fn same_type_conversion_is_identity_exhaustive_16_bit() {
    for v in 0..=u16::MAX {
        assert_eq!(convert_channel::<u16, u16>(v), v);
        let s = v as i16;
        assert_eq!(convert_channel::<i16, i16>(s), s);
    }
}

fn range_law<I: Channel, F: Channel>() {
    let min = I::from_i64(I::MIN);
    let max = I::from_i64(I::MAX);

    let fmin: F = convert_channel(min);
    let fmax: F = convert_channel(max);
    let expected_min = if I::is_signed() { -1.0 } else { 0.0 };
    assert_eq!(fmin.to_f64(), expected_min, "{min:?}");
    assert_eq!(fmax.to_f64(), 1.0, "{max:?}");

    assert_eq!(convert_channel::<I, F>(fmin), min);
    assert_eq!(convert_channel::<I, F>(fmax), max);
}

#[test]
fn extremes_map_to_normalized_range_and_back() {
    range_law::<u8, f32>();
    range_law::<i8, f32>();
    range_law::<u16, f32>();
    range_law::<i16, f32>();
    range_law::<u8, f16>();
    range_law::<i8, f16>();
    range_law::<u16, f16>();
    range_law::<i16, f16>();
    range_law::<u32, f32>();
    range_law::<i32, f32>();
}

#[test]
fn every_8_bit_value_survives_float() {
    for v in 0..=255u8 {
        let f: f32 = convert_channel(v);
        assert_abs_diff_eq!(f, v as f32 / 255.0, epsilon = 1e-7);
        assert_eq!(convert_channel::<u8, f32>(f), v);
        let h: f16 = convert_channel(v);
        assert_eq!(convert_channel::<u8, f16>(h), v);
    }
    for v in -128..=127i8 {
        let f: f32 = convert_channel(v);
        assert_eq!(convert_channel::<i8, f32>(f), v);
    }
}

#[test]
fn widening_replicates_bytes() {
    assert_eq!(convert_channel::<u16, u8>(0x7f), 0x7f7f);
    assert_eq!(convert_channel::<u16, u8>(0xff), 0xffff);
    assert_eq!(convert_channel::<u32, u16>(0x1234), 0x1234_1234);
    assert_eq!(convert_channel::<i16, i8>(0x7f), 0x7fff);
    assert_eq!(convert_channel::<i16, i8>(-128), i16::MIN);
    assert_eq!(convert_channel::<u8, i8>(-5), 0);
}

#[test]
fn out_of_range_floats_clamp_into_integers() {
    assert_eq!(convert_channel::<u8, f32>(3.5), 255);
    assert_eq!(convert_channel::<u8, f32>(-1.0), 0);
    assert_eq!(convert_channel::<i16, f32>(-9.0), i16::MIN);
    assert_eq!(convert_channel::<u16, f32>(f32::NAN), 0);
    assert_eq!(convert_channel::<f16, f32>(7.25).to_f32(), 7.25);
}

#[test]
fn variant_convert_matches_channel_convert() {
    let px = Rgba::<i16>::new(i16::MIN, -1, 1, i16::MAX);
    let v = ColorVariant::from(px);
    assert_eq!(v.kind(), ColorKind::Rgba16Snorm);
    let f: Rgba<f32> = v.convert();
    assert_eq!(f.r, convert_channel::<f32, i16>(px.r));
    assert_eq!(f.a, 1.0);
    assert_eq!(ColorVariant::default().convert::<u8>(), Rgba::default());
}

#[test]
fn table_is_complete_and_ordered() {
    for i in 0..PixelFormat::COUNT as u32 {
        let format = PixelFormat::from_u32(i).unwrap();
        assert_eq!(FormatDescriptor::lookup(format).format(), format);
        assert_eq!(format.ordinal(), i);
    }
    assert_eq!(FormatDescriptor::all().len(), PixelFormat::COUNT);
    assert!(FormatDescriptor::lookup(PixelFormat::Invalid).is_invalid());
}

#[test]
fn every_format_with_a_layout_roundtrips_through_its_representation() {
    for d in FormatDescriptor::all() {
        let Some(kind) = texel_kind(d.format()) else {
            assert!(d.is_compressed() || d.is_invalid() || d.class() == FormatClass::Float);
            continue;
        };
        let mut t = Texture::create_with(&TextureDesc::new_2d(d.format(), 3, 2));
        if d.class() == FormatClass::Float {
            // Arbitrary bytes could spell a NaN, whose payload is not preserved.
            let c = ColorVariant::from(Rgba::<f32>::new(0.25, -0.5, 2.0, 1.0));
            t.set_texel(Position::xy(1, 1), Index::default(), &c).unwrap();
        } else {
            for (i, b) in t.data_mut().unwrap().iter_mut().enumerate() {
                *b = (i * 37 + 11) as u8;
            }
        }
        let before = t.texel(Position::xy(1, 1), Index::default()).unwrap();
        assert_eq!(before.kind(), kind);

        let mut u = t.clone();
        u.set_texel(Position::xy(1, 1), Index::default(), &before).unwrap();
        let after = u.texel(Position::xy(1, 1), Index::default()).unwrap();
        assert_eq!(after, before, "{}", d.format());
    }
}
