//! Storage engine properties: layout, copy-on-write, serialization, bounds.

use texkit_core::prelude::*;

/// A spread of shapes covering every texture type and a few format families.
fn shapes() -> Vec<TextureDesc> {
    vec![
        TextureDesc::new_1d(PixelFormat::R8Unorm, 17).with_levels(6),
        TextureDesc::new(TextureType::Texture1DArray, PixelFormat::Rg16Float, 9, 1, 1)
            .with_layers(3)
            .with_levels(4),
        TextureDesc::new_2d(PixelFormat::Rgba8Unorm, 8, 8).with_levels(10),
        TextureDesc::new_2d(PixelFormat::Rgb8Unorm, 13, 7)
            .with_levels(3)
            .with_alignment(Alignment::Word),
        TextureDesc::new_2d_array(PixelFormat::Bgr565Unorm, 6, 4, 2).with_levels(2),
        TextureDesc::new_3d(PixelFormat::R32Float, 4, 2, 8).with_levels(4),
        TextureDesc::new_cube(PixelFormat::Rgba16Float, 16).with_levels(5),
        TextureDesc::new(TextureType::CubeMapArray, PixelFormat::Rgb10a2Unorm, 4, 4, 1)
            .with_layers(2)
            .with_levels(3),
        TextureDesc::new_2d(PixelFormat::Bc7RgbaUnorm, 30, 18).with_levels(5),
        TextureDesc::new_2d(PixelFormat::Astc12x12Unorm, 25, 25).with_levels(2),
    ]
}

/// Writes a recognizable byte pattern into every byte.
fn scribble(t: &mut Texture) {
    for (i, b) in t.data_mut().unwrap().iter_mut().enumerate() {
        *b = (i * 31 % 251) as u8;
    }
}

#[test]
fn layout_is_deterministic() {
    for desc in shapes() {
        let a = Texture::create_with(&desc);
        let b = Texture::create_with(&desc);
        assert!(!a.is_null(), "{desc:?}");
        assert_eq!(a.levels(), b.levels());
        assert_eq!(a.bytes(), b.bytes());
        for level in 0..a.levels() {
            assert_eq!(a.bytes_per_line(level), b.bytes_per_line(level));
            assert_eq!(a.bytes_per_image(level), b.bytes_per_image(level));
            assert_eq!(a.level_offset(level), b.level_offset(level));
        }
    }
}

#[test]
fn levels_tile_the_buffer() {
    for desc in shapes() {
        let t = Texture::create_with(&desc);
        let images = (t.faces() * t.layers()) as usize;
        let mut expected = 0;
        for level in 0..t.levels() {
            assert_eq!(t.level_offset(level), expected, "{desc:?} level {level}");
            assert_eq!(
                t.bytes_per_image(level),
                t.bytes_per_slice(level) * t.level_depth(level) as usize
            );
            expected += t.bytes_per_image(level) * images;
        }
        assert_eq!(t.bytes(), expected);
        assert_eq!(t.data().len(), expected);
    }
}

#[test]
fn mip_chain_truncates_at_one_texel() {
    let t = Texture::create(
        TextureType::Texture2D,
        PixelFormat::Rgba8Unorm,
        8,
        8,
        1,
        1,
        10,
        Alignment::Byte,
    );
    assert_eq!(t.levels(), 4);
    assert_eq!(t.level_width(3), 1);
    assert_eq!(t.level_height(3), 1);
    assert_eq!(t.size(4), Size::default());

    let desc = TextureDesc::new_2d(PixelFormat::Rgba8Unorm, 8, 8).with_levels(2);
    let t = Texture::create_with(&desc);
    assert_eq!(t.levels(), 2);
}

#[test]
fn image_offsets_follow_layer_then_face() {
    let t = Texture::create_with(
        &TextureDesc::new(TextureType::CubeMapArray, PixelFormat::R8Unorm, 2, 2, 1)
            .with_layers(3)
            .with_levels(2),
    );
    for level in 0..t.levels() {
        for layer in 0..3 {
            for side in 0..6 {
                let offset = t.offset(Index::new(side, level, layer)).unwrap();
                let expected = t.level_offset(level)
                    + t.bytes_per_image(level) * (6 * layer as usize + side as usize);
                assert_eq!(offset, expected);
            }
        }
    }
}

#[test]
fn shared_handles_detach_on_write() {
    let desc = TextureDesc::new_2d(PixelFormat::Rgba8Unorm, 4, 4).with_levels(2);
    let mut a = Texture::create_with(&desc);
    scribble(&mut a);
    let b = a.clone();
    assert!(!a.is_detached());
    assert!(!b.is_detached());

    a.image_data_mut(Index::level(0)).unwrap().fill(0);
    assert!(a.is_detached());
    assert!(b.is_detached());
    assert!(b.data().iter().any(|&x| x != 0));
    assert!(a.image_data(Index::level(0)).unwrap().iter().all(|&x| x == 0));
    assert_eq!(a.image_data(Index::level(1)).unwrap(), b.image_data(Index::level(1)).unwrap());
}

#[test]
fn detach_is_idempotent() {
    let mut a = Texture::create_with(&TextureDesc::new_2d(PixelFormat::R8Unorm, 4, 4));
    let before = a.data().as_ptr();
    a.detach().unwrap();
    a.detach().unwrap();
    assert_eq!(a.data().as_ptr(), before);

    let b = a.clone();
    a.detach().unwrap();
    assert_ne!(a.data().as_ptr(), b.data().as_ptr());
    assert_eq!(a, b);
}

#[test]
fn handles_cross_threads() {
    let mut t = Texture::create_with(&TextureDesc::new_2d(PixelFormat::Rgba8Unorm, 16, 16));
    scribble(&mut t);
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let t = t.clone();
            std::thread::spawn(move || {
                let mut own = t.clone();
                own.data_mut().unwrap()[0] ^= 0xff;
                (t, own)
            })
        })
        .collect();
    for h in handles {
        let (shared, own) = h.join().unwrap();
        assert_eq!(shared, t);
        assert_ne!(own, t);
    }
    assert!(t.is_detached());
}

#[test]
fn serialization_roundtrip() {
    for desc in shapes() {
        let mut t = Texture::create_with(&desc);
        scribble(&mut t);
        let bytes = t.to_bytes().unwrap();
        let back = Texture::from_bytes(&bytes).unwrap();
        assert_eq!(back, t, "{desc:?}");
        assert_eq!(back.desc(), t.desc());
        assert_eq!(back.data(), t.data());
    }
}

#[test]
fn serialization_streams() {
    let a = Texture::create_with(&TextureDesc::new_2d(PixelFormat::R8Unorm, 3, 3));
    let b = Texture::create_with(&TextureDesc::new_cube(PixelFormat::Rgba8Unorm, 2));
    let mut buf = Vec::new();
    a.write_to(&mut buf).unwrap();
    Texture::null().write_to(&mut buf).unwrap();
    b.write_to(&mut buf).unwrap();

    let mut r = buf.as_slice();
    assert_eq!(Texture::read_from(&mut r).unwrap(), a);
    assert!(Texture::read_from(&mut r).unwrap().is_null());
    assert_eq!(Texture::read_from(&mut r).unwrap(), b);
    assert!(r.is_empty());
}

#[test]
fn decode_mismatch_is_an_error() {
    let t = Texture::create_with(&TextureDesc::new_2d(PixelFormat::Rgba8Unorm, 4, 4));
    let mut bytes = t.to_bytes().unwrap();
    // Claim a 5x4 texture; the payload still has 4x4 worth of bytes.
    bytes[8..12].copy_from_slice(&5u32.to_be_bytes());
    let err = Texture::from_bytes(&bytes).unwrap_err();
    assert!(matches!(err, Error::DecodeMismatch { expected: 80, got: 64 }));
}

#[test]
fn out_of_range_side_is_reported() {
    let desc = TextureDesc::new_2d(PixelFormat::Rgba8Unorm, 4, 4).with_levels(2);
    let t = Texture::create_with(&desc);
    assert_eq!(t.levels(), 2);

    let err = t.image_data(Index::new(7, 0, 0)).unwrap_err();
    assert!(matches!(err, Error::OutOfBounds { what: "side", value: 7, limit: 1 }));
    assert!(t.image_data(Index::new(7, 0, 0)).unwrap_or_default().is_empty());

    assert!(t.image_data(Index::level(2)).unwrap_err().is_bounds_error());
    assert!(t.image_data(Index::new(0, 0, 1)).unwrap_err().is_bounds_error());
    assert!(t.line_data(Position::xy(0, 4), Index::default()).unwrap_err().is_bounds_error());
    assert!(t.texel_data(Position::xy(2, 0), Index::level(1)).unwrap_err().is_bounds_error());
}

#[test]
fn views_stay_inside_their_image() {
    let desc = TextureDesc::new_2d_array(PixelFormat::Rgba8Unorm, 4, 2, 2).with_levels(2);
    let t = Texture::create_with(&desc);
    let base = t.data().as_ptr() as usize;
    for level in 0..t.levels() {
        for layer in 0..2 {
            let index = Index::new(0, level, layer);
            let image = t.image_data(index).unwrap();
            let start = image.as_ptr() as usize - base;
            let end = start + image.len();
            let w = t.level_width(level);
            let h = t.level_height(level);
            let last = t.line_data(Position::xy(w - 1, h - 1), index).unwrap();
            let last_start = last.as_ptr() as usize - base;
            assert!(last_start >= start && last_start + last.len() <= end);
            assert_eq!(last_start + last.len(), end);
        }
    }
}

#[test]
fn invalid_shapes_create_null() {
    let cases = [
        TextureDesc::new_2d(PixelFormat::Invalid, 4, 4),
        TextureDesc::new_2d(PixelFormat::R8Unorm, 0, 4),
        TextureDesc::new_cube(PixelFormat::R8Unorm, 4).with_height(2),
        TextureDesc::new_2d(PixelFormat::R8Unorm, 4, 4).with_levels(0),
        TextureDesc::new_3d(PixelFormat::R8Unorm, 2, 2, 2).with_layers(2),
    ];
    for desc in cases {
        assert!(Texture::create_with(&desc).is_null(), "{desc:?}");
        assert!(Texture::try_create_with(&desc).unwrap_err().is_invalid_parameters());
    }

    let huge = TextureDesc::new_3d(PixelFormat::Rgba32Float, u32::MAX, u32::MAX, u32::MAX);
    assert!(Texture::create_with(&huge).is_null());
    assert!(Texture::try_create_with(&huge).unwrap_err().is_allocation_error());
}

#[test]
fn unsatisfiable_allocation_creates_null() {
    // 2^60 bytes: no overflow, but more than any address space can hold.
    let desc = TextureDesc::new_3d(PixelFormat::Rgba32Float, 1 << 20, 1 << 20, 1 << 16);
    assert!(Texture::create_with(&desc).is_null());
    let err = Texture::try_create_with(&desc).unwrap_err();
    assert!(err.is_allocation_error(), "{err}");
}

#[test]
fn header_without_payload_is_a_decode_mismatch() {
    let t = Texture::create_with(&TextureDesc::new_2d(PixelFormat::Rgba8Unorm, 16384, 1));
    let bytes = t.to_bytes().unwrap();
    let header = &bytes[..texkit_core::io::HEADER_LEN];
    let err = Texture::from_bytes(header).unwrap_err();
    assert!(matches!(err, Error::DecodeMismatch { expected: 65536, got: 0 }));
}
